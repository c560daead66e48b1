use dioxus::prelude::*;
use dioxus_router::Link;
use hub_core::model::{CollectionId, UserId, Visibility};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Notifications, ViewError, ViewState, view_state_from_resource};
use crate::vm::{MemberPageVm, MemberRowVm};

/// Drill-down into one collection: its members, one page at a time.
#[component]
pub fn SubCollectionView(uid: String, fid: String) -> Element {
    let ctx = use_context::<AppContext>();
    let notifications = use_context::<Notifications>();
    let collections = ctx.collection_service();
    let share = ctx.share_service();
    let owner = UserId::new(uid.clone());
    let collection_id = CollectionId::new(fid);

    let mut page = use_signal(|| 1_u32);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SubCollectionTestHandles>() {
                handles.register(page);
            }
        }
    }

    let owner_for_resource = owner.clone();
    let fid_for_resource = collection_id.clone();
    let mut resource = use_resource(move || {
        let collections = collections.clone();
        let owner = owner_for_resource.clone();
        let fid = fid_for_resource.clone();
        let page = page();
        async move {
            let members = collections
                .members(&owner, &fid, page)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(members.map(|found| MemberPageVm::from(&found)))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        section { class: "sub-collection",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "sub-collection__loading", "Loading…" }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "sub-collection__error",
                        p { "{err.message()}" }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(Visibility::Hidden) => rsx! {
                    p { class: "sub-collection__hidden", "This collection is not public yet" }
                },
                ViewState::Ready(Visibility::Visible(data)) => {
                    let share = share.clone();
                    let owner = owner.clone();
                    let collection_id = collection_id.clone();
                    let name = data.name.clone();
                    rsx! {
                        div { class: "sub-collection__header",
                            nav { class: "breadcrumb",
                                Link {
                                    class: "breadcrumb__parent",
                                    to: Route::Favorites { uid: uid.clone(), fid: String::new() },
                                    "Collections"
                                }
                                span { class: "breadcrumb__sep", "›" }
                                span { class: "breadcrumb__current", "{data.name}" }
                            }
                            if data.shareable {
                                button {
                                    class: "btn collection-share",
                                    r#type: "button",
                                    onclick: move |_| {
                                        match share.share_by_id(&owner, &collection_id, &name) {
                                            Ok(_) => notifications.success("Link copied. Share it with your friends!"),
                                            Err(err) => {
                                                tracing::warn!(fid = %collection_id, error = %err, "share failed");
                                                notifications.error("Could not copy the collection link");
                                            }
                                        }
                                    },
                                    "Share"
                                }
                            }
                        }
                        if data.rows.is_empty() {
                            p { class: "sub-collection__empty", "Nothing saved here yet" }
                        } else {
                            ul { class: "member-list",
                                for row in data.rows.clone() {
                                    MemberRow { row }
                                }
                            }
                        }
                        Pagination {
                            page: data.page,
                            page_total: data.page_total,
                            has_previous: data.has_previous,
                            has_next: data.has_next,
                            on_page: move |n: u32| page.set(n),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberRow(row: MemberRowVm) -> Element {
    rsx! {
        li { class: "member-row",
            div { class: "member-row__header",
                a {
                    class: "member-row__title",
                    href: "{row.github_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{row.title}"
                }
                span { class: "member-row__stars", "★ {row.stars_label}" }
            }
            if let Some(lang) = row.lang.clone() {
                span { class: "member-row__lang", "{lang}" }
            }
            div {
                class: "member-row__description markdown",
                dangerous_inner_html: "{row.description_html}",
            }
        }
    }
}

#[component]
fn Pagination(
    page: u32,
    page_total: u32,
    has_previous: bool,
    has_next: bool,
    on_page: Callback<u32>,
) -> Element {
    if page_total <= 1 {
        return rsx! {};
    }
    rsx! {
        div { class: "pagination",
            button {
                class: "btn pagination__prev",
                r#type: "button",
                disabled: !has_previous,
                onclick: move |_| on_page.call(page.saturating_sub(1).max(1)),
                "Previous"
            }
            span { class: "pagination__status", "{page} / {page_total}" }
            button {
                class: "btn pagination__next",
                r#type: "button",
                disabled: !has_next,
                onclick: move |_| on_page.call(page + 1),
                "Next"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SubCollectionTestHandles {
    page: std::rc::Rc<std::cell::RefCell<Option<Signal<u32>>>>,
}

#[cfg(test)]
impl SubCollectionTestHandles {
    pub(crate) fn register(&self, page: Signal<u32>) {
        *self.page.borrow_mut() = Some(page);
    }

    pub(crate) fn page(&self) -> Signal<u32> {
        (*self.page.borrow()).expect("sub-collection page registered")
    }
}
