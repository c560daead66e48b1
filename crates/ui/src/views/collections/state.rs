use std::sync::Arc;

use dioxus::prelude::*;
use hub_core::model::{CollectionStatus, UserId};
use services::{CollectionService, ShareService};

use crate::views::ViewError;
use crate::vm::{ActiveItemTracker, CollectionListVm, InFlight, ModalOrchestrator};

#[derive(Clone)]
pub struct CollectionServices {
    pub collections: Arc<CollectionService>,
    pub share: Arc<ShareService>,
}

/// Draft values behind the edit and create forms.
#[derive(Clone, Copy, PartialEq)]
pub struct FormFields {
    pub name: Signal<String>,
    pub description: Signal<String>,
    pub status: Signal<CollectionStatus>,
    pub error: Signal<Option<String>>,
}

impl FormFields {
    fn use_fields() -> Self {
        Self {
            name: use_signal(String::new),
            description: use_signal(String::new),
            status: use_signal(|| CollectionStatus::Public),
            error: use_signal(|| None::<String>),
        }
    }

    pub fn fill(&self, name: &str, description: &str, status: CollectionStatus) {
        let mut fields = *self;
        fields.name.set(name.to_owned());
        fields.description.set(description.to_owned());
        fields.status.set(status);
        fields.error.set(None);
    }
}

#[derive(Clone)]
pub struct CollectionListState {
    pub owner: UserId,
    pub viewer_logged_in: bool,
    pub tracker: Signal<ActiveItemTracker>,
    pub modal: Signal<ModalOrchestrator>,
    pub in_flight: Signal<InFlight>,
    pub edit: FormFields,
    pub show_create: Signal<bool>,
    pub create: FormFields,
    pub creating: Signal<bool>,
    pub list_resource: Resource<Result<CollectionListVm, ViewError>>,
}

pub fn use_collection_list_state(
    owner: UserId,
    viewer_logged_in: bool,
    services: &CollectionServices,
) -> CollectionListState {
    let tracker = use_signal(ActiveItemTracker::new);
    let modal = use_signal(ModalOrchestrator::new);
    let in_flight = use_signal(InFlight::default);
    let edit = FormFields::use_fields();
    let show_create = use_signal(|| false);
    let create = FormFields::use_fields();
    let creating = use_signal(|| false);

    let collections = services.collections.clone();
    let owner_for_list = owner.clone();
    let list_resource = use_resource(move || {
        let collections = collections.clone();
        let owner = owner_for_list.clone();
        async move {
            let listing = collections.list(&owner).await.map_err(|err| {
                tracing::warn!(%owner, error = %err, "collection list unavailable");
                ViewError::from(&err)
            })?;
            Ok::<_, ViewError>(CollectionListVm::build(&owner, &listing, viewer_logged_in))
        }
    });

    CollectionListState {
        owner,
        viewer_logged_in,
        tracker,
        modal,
        in_flight,
        edit,
        show_create,
        create,
        creating,
        list_resource,
    }
}
