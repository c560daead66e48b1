use dioxus::prelude::*;

use crate::vm::{CollectionRowVm, ModalGesture};

use super::super::actions::CollectionIntent;

#[component]
pub fn CollectionRow(
    row: CollectionRowVm,
    active: bool,
    owner_controls: bool,
    on_intent: Callback<CollectionIntent>,
) -> Element {
    let id = row.id.clone();
    let enter_id = row.id.clone();
    let move_id = row.id.clone();
    let leave_id = row.id.clone();
    let share_target = row.collection.clone();
    let edit_target = row.collection.clone();
    let delete_target = row.collection.clone();
    let more_target = row.collection.clone();
    let name_class = if active {
        "collection-row__name collection-row__name--active"
    } else {
        "collection-row__name"
    };

    rsx! {
        div {
            class: "collection-row",
            "data-fid": "{row.id}",
            "data-href": "{row.href}",
            onclick: move |_| on_intent.call(CollectionIntent::OpenRow(id.clone())),
            onmouseenter: move |_| on_intent.call(CollectionIntent::PointerEnter(enter_id.clone())),
            onmousemove: move |_| on_intent.call(CollectionIntent::PointerEnter(move_id.clone())),
            onmouseleave: move |_| on_intent.call(CollectionIntent::PointerLeave(leave_id.clone())),

            div { class: "collection-row__header",
                span { class: name_class, "{row.name}" }
                span { class: "collection-row__status",
                    if row.locked {
                        span { class: "collection-lock", title: "Only you can see this collection", "🔒" }
                    }
                    "{row.status_label}"
                }
            }
            p { class: "collection-row__description", "{row.description}" }
            div { class: "collection-row__footer",
                span { class: "collection-row__meta",
                    "{row.created_at_str} · {row.total_label}"
                }
                div { class: "collection-row__actions",
                    if row.shareable {
                        button {
                            class: "btn-link collection-share",
                            r#type: "button",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                on_intent.call(CollectionIntent::Share(share_target.clone()));
                            },
                            "Share"
                        }
                    }
                    if owner_controls && active {
                        span { class: "collection-row__inline desktop-only",
                            button {
                                class: "btn-link collection-edit",
                                r#type: "button",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    on_intent.call(CollectionIntent::Modal(ModalGesture::Edit(edit_target.clone())));
                                },
                                "Edit"
                            }
                            button {
                                class: "btn-link collection-delete",
                                r#type: "button",
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    on_intent.call(CollectionIntent::Modal(ModalGesture::Delete(delete_target.clone())));
                                },
                                "Delete"
                            }
                        }
                    }
                    if owner_controls {
                        button {
                            class: "btn-link collection-more mobile-only",
                            r#type: "button",
                            "aria-label": "More actions",
                            onclick: move |evt| {
                                evt.stop_propagation();
                                on_intent.call(CollectionIntent::Modal(ModalGesture::MoreActions(more_target.clone())));
                            },
                            "…"
                        }
                    }
                }
            }
        }
    }
}
