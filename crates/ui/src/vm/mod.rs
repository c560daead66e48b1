mod active_item;
mod collection_vm;
mod member_vm;
mod modal;
mod time_fmt;

pub use active_item::ActiveItemTracker;
pub use collection_vm::{
    CollectionListVm, CollectionRowVm, EMPTY_DESCRIPTION, collection_path, status_label,
};
pub use member_vm::{MemberPageVm, MemberRowVm, format_stars, markdown_to_html, sanitize_html};
pub use modal::{InFlight, ModalGesture, ModalOrchestrator, ModalState, MutationKind};
pub use time_fmt::format_created_at;
