use dioxus::prelude::*;
use dioxus_router::Navigator;
use hub_core::model::{Collection, CollectionId};

use crate::routes::Route;
use crate::views::Notifications;
use crate::vm::{ModalGesture, ModalState};

use super::super::state::{CollectionListState, CollectionServices};

pub(super) fn build_pointer_actions(
    state: &CollectionListState,
) -> (Callback<CollectionId>, Callback<CollectionId>) {
    let mut tracker = state.tracker;
    let enter = use_callback(move |id: CollectionId| {
        if !tracker.peek().is_active(&id) {
            tracker.write().enter(&id);
        }
    });
    let mut tracker = state.tracker;
    let leave = use_callback(move |id: CollectionId| {
        if tracker.peek().is_active(&id) {
            tracker.write().leave(&id);
        }
    });
    (enter, leave)
}

pub(super) fn build_open_row_action(
    state: &CollectionListState,
    navigator: Navigator,
) -> Callback<CollectionId> {
    let owner = state.owner.clone();
    use_callback(move |fid: CollectionId| {
        tracing::debug!(%fid, "open collection");
        let _ = navigator.push(Route::Favorites {
            uid: owner.to_string(),
            fid: fid.to_string(),
        });
    })
}

pub(super) fn build_modal_action(state: &CollectionListState) -> Callback<ModalGesture> {
    let mut modal = state.modal;
    let edit = state.edit;
    use_callback(move |gesture: ModalGesture| {
        tracing::debug!(?gesture, "modal gesture");
        let changed = modal.write().apply(gesture);
        if !changed {
            return;
        }
        if let ModalState::Editing(target) = modal.peek().state() {
            let fields = target.fields();
            edit.fill(
                fields.name(),
                fields.description().unwrap_or_default(),
                fields.status(),
            );
        }
    })
}

pub(super) fn build_share_action(
    state: &CollectionListState,
    services: &CollectionServices,
    notifications: Notifications,
) -> Callback<Collection> {
    let owner = state.owner.clone();
    let share = services.share.clone();
    use_callback(move |collection: Collection| {
        match share.share(&owner, &collection) {
            Ok(_) => notifications.success("Link copied. Share it with your friends!"),
            Err(err) => {
                tracing::warn!(fid = %collection.id(), error = %err, "share failed");
                notifications.error("Could not copy the collection link");
            }
        }
    })
}
