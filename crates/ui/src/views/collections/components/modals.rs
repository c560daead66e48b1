use dioxus::prelude::*;
use hub_core::model::{CollectionStatus, DESCRIPTION_MAX_CHARS, NAME_MAX_CHARS};

use crate::views::ModalHost;
use crate::vm::{ModalGesture, ModalState};

use super::super::actions::CollectionIntent;
use super::super::state::FormFields;

#[component]
pub fn CollectionModals(
    modal: ModalState,
    deleting: bool,
    saving: bool,
    edit: FormFields,
    on_intent: Callback<CollectionIntent>,
) -> Element {
    let dismiss = move |()| on_intent.call(CollectionIntent::Modal(ModalGesture::Dismiss));

    rsx! {
        ModalHost {
            visible: matches!(modal, ModalState::ConfirmingDelete(_)),
            mask_closable: false,
            hide_close: true,
            class: "modal--confirm",
            on_close: dismiss,
            div { class: "confirm-delete",
                p { class: "confirm-delete__title", "Delete this collection?" }
                p { class: "confirm-delete__body",
                    "Deleting a collection also removes everything saved in it."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_intent.call(CollectionIntent::Modal(ModalGesture::Dismiss)),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary confirm-delete__confirm",
                        r#type: "button",
                        disabled: deleting,
                        onclick: move |_| on_intent.call(CollectionIntent::ConfirmDelete),
                        if deleting { "Deleting…" } else { "Delete" }
                    }
                }
            }
        }

        ModalHost {
            visible: matches!(modal, ModalState::Editing(_)),
            title: "Edit collection".to_string(),
            class: "modal--form",
            on_close: dismiss,
            CollectionForm {
                fields: edit,
                busy: saving,
                submit_label: "Save",
                on_submit: move |()| on_intent.call(CollectionIntent::SubmitEdit),
                on_cancel: dismiss,
            }
        }

        ModalHost {
            visible: matches!(modal, ModalState::MobileActionSheet(_)),
            hide_close: true,
            class: "modal--sheet",
            on_close: dismiss,
            ul { class: "action-sheet",
                li {
                    class: "action-sheet__item",
                    onclick: move |_| on_intent.call(CollectionIntent::Modal(ModalGesture::SheetEdit)),
                    "Edit"
                }
                li {
                    class: "action-sheet__item",
                    onclick: move |_| on_intent.call(CollectionIntent::Modal(ModalGesture::SheetDelete)),
                    "Delete"
                }
            }
        }
    }
}

/// Name, description and visibility inputs shared by edit and create.
#[component]
pub fn CollectionForm(
    fields: FormFields,
    busy: bool,
    submit_label: &'static str,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let mut name = fields.name;
    let mut description = fields.description;
    let mut status = fields.status;
    let error = fields.error;
    let is_public = status() == CollectionStatus::Public;

    rsx! {
        form {
            class: "collection-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },
            label { class: "collection-form__label", "Name" }
            input {
                class: "collection-form__name",
                r#type: "text",
                maxlength: "{NAME_MAX_CHARS}",
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            label { class: "collection-form__label", "Description" }
            textarea {
                class: "collection-form__description",
                maxlength: "{DESCRIPTION_MAX_CHARS}",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            div { class: "collection-form__status",
                label {
                    input {
                        r#type: "radio",
                        name: "collection-status",
                        checked: is_public,
                        onchange: move |_| status.set(CollectionStatus::Public),
                    }
                    "Public"
                }
                label {
                    input {
                        r#type: "radio",
                        name: "collection-status",
                        checked: !is_public,
                        onchange: move |_| status.set(CollectionStatus::Private),
                    }
                    "Private"
                }
            }
            if let Some(message) = error() {
                p { class: "collection-form__error", "{message}" }
            }
            div { class: "modal-actions",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    "{submit_label}"
                }
            }
        }
    }
}
