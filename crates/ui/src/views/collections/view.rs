use dioxus::prelude::*;
use hub_core::model::UserId;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{CollectionListVm, MutationKind};

use super::actions::{CollectionIntent, use_collection_dispatcher};
use super::components::{CollectionModals, CollectionRow, CreateCollectionDialog};
use super::state::{CollectionServices, use_collection_list_state};

/// A user's collections with owner controls, share links and dialogs.
#[component]
pub fn CollectionListView(uid: String) -> Element {
    let ctx = use_context::<AppContext>();
    let services = CollectionServices {
        collections: ctx.collection_service(),
        share: ctx.share_service(),
    };
    let state = use_collection_list_state(UserId::new(uid), ctx.is_logged_in(), &services);
    let dispatch = use_collection_dispatcher(&state, &services);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CollectionTestHandles>() {
                handles.register(dispatch, state.clone());
            }
        }
    }

    let list_state = view_state_from_resource(&state.list_resource);
    let tracker = state.tracker.read().clone();
    let modal_state = state.modal.read().state().clone();
    let (deleting, saving) = {
        let in_flight = state.in_flight.read();
        modal_state.target().map_or((false, false), |target| {
            (
                in_flight.is_pending(target.id(), MutationKind::Delete),
                in_flight.is_pending(target.id(), MutationKind::Edit),
            )
        })
    };

    rsx! {
        section { class: "collections",
            match list_state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "collections__loading", "Loading…" }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "collections__error",
                        p { "{err.message()}" }
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| dispatch.call(CollectionIntent::Retry),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(CollectionListVm::Hidden) => rsx! {
                    p { class: "collections__empty", "These collections are not public yet" }
                },
                ViewState::Ready(CollectionListVm::Empty { can_create }) => rsx! {
                    if can_create {
                        CreateButton { on_intent: dispatch }
                    }
                    p { class: "collections__empty", "No collections yet" }
                },
                ViewState::Ready(CollectionListVm::Rows { owner_controls, rows }) => rsx! {
                    if owner_controls {
                        CreateButton { on_intent: dispatch }
                    }
                    div { class: "collections__list",
                        for row in rows {
                            CollectionRow {
                                key: "{row.id}",
                                active: tracker.is_active(&row.id),
                                owner_controls,
                                on_intent: dispatch,
                                row: row.clone(),
                            }
                        }
                    }
                },
            }

            CollectionModals {
                modal: modal_state,
                deleting,
                saving,
                edit: state.edit,
                on_intent: dispatch,
            }
            CreateCollectionDialog {
                visible: (state.show_create)(),
                creating: (state.creating)(),
                fields: state.create,
                on_intent: dispatch,
            }
        }
    }
}

#[component]
fn CreateButton(on_intent: Callback<CollectionIntent>) -> Element {
    rsx! {
        div { class: "collections__toolbar",
            button {
                class: "btn btn-primary collections__create",
                r#type: "button",
                onclick: move |_| on_intent.call(CollectionIntent::OpenCreate),
                "New collection"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CollectionTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<CollectionIntent>>>>,
    state: std::rc::Rc<std::cell::RefCell<Option<super::state::CollectionListState>>>,
}

#[cfg(test)]
impl CollectionTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<CollectionIntent>,
        state: super::state::CollectionListState,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<CollectionIntent> {
        (*self.dispatch.borrow()).expect("collection dispatch registered")
    }

    pub(crate) fn state(&self) -> super::state::CollectionListState {
        self.state.borrow().clone().expect("collection state registered")
    }
}
