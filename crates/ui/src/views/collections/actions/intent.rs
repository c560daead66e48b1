use hub_core::model::{Collection, CollectionId};

use crate::vm::ModalGesture;

#[derive(Clone, Debug)]
pub enum CollectionIntent {
    PointerEnter(CollectionId),
    PointerLeave(CollectionId),
    OpenRow(CollectionId),
    Modal(ModalGesture),
    ConfirmDelete,
    SubmitEdit,
    Share(Collection),
    OpenCreate,
    CloseCreate,
    SubmitCreate,
    Retry,
}
