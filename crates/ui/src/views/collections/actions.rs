mod intent;
mod mutations;
mod pointer;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use hub_core::model::{Collection, CollectionId};

use crate::views::Notifications;
use crate::vm::ModalGesture;

use super::state::{CollectionListState, CollectionServices};

pub use intent::CollectionIntent;

#[derive(Clone)]
struct CollectionActionHandlers {
    enter: Callback<CollectionId>,
    leave: Callback<CollectionId>,
    open_row: Callback<CollectionId>,
    modal: Callback<ModalGesture>,
    confirm_delete: Callback<()>,
    submit_edit: Callback<()>,
    share: Callback<Collection>,
    open_create: Callback<()>,
    close_create: Callback<()>,
    submit_create: Callback<()>,
    retry: Callback<()>,
}

pub fn use_collection_dispatcher(
    state: &CollectionListState,
    services: &CollectionServices,
) -> Callback<CollectionIntent> {
    let navigator = use_navigator();
    let notifications = use_context::<Notifications>();

    let (enter, leave) = pointer::build_pointer_actions(state);
    let open_row = pointer::build_open_row_action(state, navigator);
    let modal = pointer::build_modal_action(state);
    let share = pointer::build_share_action(state, services, notifications);
    let confirm_delete = mutations::build_confirm_delete_action(state, services, notifications);
    let submit_edit = mutations::build_submit_edit_action(state, services, notifications);
    let (open_create, close_create, submit_create) =
        mutations::build_create_actions(state, services, notifications);

    let mut list_resource = state.list_resource;
    let retry = use_callback(move |()| list_resource.restart());

    let handlers = CollectionActionHandlers {
        enter,
        leave,
        open_row,
        modal,
        confirm_delete,
        submit_edit,
        share,
        open_create,
        close_create,
        submit_create,
        retry,
    };

    use_callback(move |intent: CollectionIntent| dispatch_intent(intent, &handlers))
}

fn dispatch_intent(intent: CollectionIntent, handlers: &CollectionActionHandlers) {
    match intent {
        CollectionIntent::PointerEnter(id) => handlers.enter.call(id),
        CollectionIntent::PointerLeave(id) => handlers.leave.call(id),
        CollectionIntent::OpenRow(id) => handlers.open_row.call(id),
        CollectionIntent::Modal(gesture) => handlers.modal.call(gesture),
        CollectionIntent::ConfirmDelete => handlers.confirm_delete.call(()),
        CollectionIntent::SubmitEdit => handlers.submit_edit.call(()),
        CollectionIntent::Share(collection) => handlers.share.call(collection),
        CollectionIntent::OpenCreate => handlers.open_create.call(()),
        CollectionIntent::CloseCreate => handlers.close_create.call(()),
        CollectionIntent::SubmitCreate => handlers.submit_create.call(()),
        CollectionIntent::Retry => handlers.retry.call(()),
    }
}
