use dioxus::prelude::*;
use hub_core::model::CollectionFields;

use crate::views::Notifications;
use crate::vm::{ModalState, MutationKind};

use super::super::state::{CollectionListState, CollectionServices};

const DELETE_FALLBACK: &str = "Delete failed";
const EDIT_FALLBACK: &str = "Update failed";
const CREATE_FALLBACK: &str = "Could not create the collection";

pub(super) fn build_confirm_delete_action(
    state: &CollectionListState,
    services: &CollectionServices,
    notifications: Notifications,
) -> Callback<()> {
    let collections = services.collections.clone();
    let mut modal = state.modal;
    let mut in_flight = state.in_flight;
    let mut list_resource = state.list_resource;
    use_callback(move |()| {
        let ModalState::ConfirmingDelete(target) = modal.peek().state().clone() else {
            return;
        };
        let fid = target.id().clone();
        if !in_flight.write().try_begin(&fid, MutationKind::Delete) {
            return;
        }

        let collections = collections.clone();
        spawn(async move {
            let result = collections.delete(&fid).await;
            in_flight.write().finish(&fid, MutationKind::Delete);
            match result {
                Ok(()) => {
                    notifications.success("Collection deleted");
                    modal.write().resolve_success(&fid, MutationKind::Delete);
                    list_resource.restart();
                }
                Err(err) => {
                    notifications.error(err.server_message().unwrap_or(DELETE_FALLBACK));
                }
            }
        });
    })
}

pub(super) fn build_submit_edit_action(
    state: &CollectionListState,
    services: &CollectionServices,
    notifications: Notifications,
) -> Callback<()> {
    let collections = services.collections.clone();
    let mut modal = state.modal;
    let mut in_flight = state.in_flight;
    let mut list_resource = state.list_resource;
    let edit = state.edit;
    use_callback(move |()| {
        let ModalState::Editing(target) = modal.peek().state().clone() else {
            return;
        };
        let mut error = edit.error;
        let name = edit.name.peek().clone();
        let description = edit.description.peek().clone();
        let status = *edit.status.peek();
        if let Err(err) = CollectionFields::new(&name, &description, status) {
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);

        let fid = target.id().clone();
        if !in_flight.write().try_begin(&fid, MutationKind::Edit) {
            return;
        }

        let collections = collections.clone();
        spawn(async move {
            let result = collections.edit(&fid, &name, &description, status).await;
            in_flight.write().finish(&fid, MutationKind::Edit);
            match result {
                Ok(()) => {
                    notifications.success("Collection updated");
                    modal.write().resolve_success(&fid, MutationKind::Edit);
                    list_resource.restart();
                }
                Err(err) if err.is_validation() => {
                    error.set(Some(err.to_string()));
                }
                Err(err) => {
                    notifications.error(err.server_message().unwrap_or(EDIT_FALLBACK));
                }
            }
        });
    })
}

pub(super) fn build_create_actions(
    state: &CollectionListState,
    services: &CollectionServices,
    notifications: Notifications,
) -> (Callback<()>, Callback<()>, Callback<()>) {
    let mut show_create = state.show_create;
    let create = state.create;
    let open = use_callback(move |()| {
        create.fill("", "", hub_core::model::CollectionStatus::Public);
        show_create.set(true);
    });

    let mut show_create = state.show_create;
    let close = use_callback(move |()| {
        show_create.set(false);
    });

    let collections = services.collections.clone();
    let mut show_create = state.show_create;
    let mut creating = state.creating;
    let mut list_resource = state.list_resource;
    let submit = use_callback(move |()| {
        if creating() {
            return;
        }
        let mut error = create.error;
        let name = create.name.peek().clone();
        let description = create.description.peek().clone();
        let status = *create.status.peek();
        if let Err(err) = CollectionFields::new(&name, &description, status) {
            error.set(Some(err.to_string()));
            return;
        }
        error.set(None);
        creating.set(true);

        let collections = collections.clone();
        spawn(async move {
            let result = collections.create(&name, &description, status).await;
            creating.set(false);
            match result {
                Ok(()) => {
                    notifications.success("Collection created");
                    show_create.set(false);
                    list_resource.restart();
                }
                Err(err) if err.is_validation() => {
                    error.set(Some(err.to_string()));
                }
                Err(err) => {
                    notifications.error(err.server_message().unwrap_or(CREATE_FALLBACK));
                }
            }
        });
    });

    (open, close, submit)
}
