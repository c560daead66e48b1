pub(crate) mod collections;
mod favorites;
mod home;
mod modal_host;
mod notifications;
mod state;
mod sub_collection;

pub use collections::{CollectionIntent, CollectionListView};
pub use favorites::FavoritesView;
pub use home::HomeView;
pub use modal_host::ModalHost;
pub use notifications::{NOTICE_TTL, Notice, NoticeLevel, Notifications, ToastStack};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use sub_collection::SubCollectionView;

#[cfg(test)]
pub(crate) use sub_collection::SubCollectionTestHandles;

#[cfg(test)]
mod test_harness;
