mod create;
mod modals;
mod row;

pub use create::CreateCollectionDialog;
pub use modals::CollectionModals;
pub use row::CollectionRow;
