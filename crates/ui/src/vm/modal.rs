use std::collections::HashSet;

use hub_core::model::{Collection, CollectionId};

/// The single dialog open over the collection list, with the collection it
/// acts on. A dialog cannot be open without its target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    ConfirmingDelete(Collection),
    Editing(Collection),
    MobileActionSheet(Collection),
}

impl ModalState {
    #[must_use]
    pub fn target(&self) -> Option<&Collection> {
        match self {
            Self::Closed => None,
            Self::ConfirmingDelete(target)
            | Self::Editing(target)
            | Self::MobileActionSheet(target) => Some(target),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// User gestures that drive the dialog state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalGesture {
    /// Inline delete control on a row.
    Delete(Collection),
    /// Inline edit control on a row.
    Edit(Collection),
    /// Mobile "more actions" trigger on a row.
    MoreActions(Collection),
    /// "Edit" picked inside the action sheet.
    SheetEdit,
    /// "Delete" picked inside the action sheet.
    SheetDelete,
    /// Cancel, close button, Escape, or backdrop click.
    Dismiss,
}

/// Owns the open dialog and the last collection an action was dispatched for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalOrchestrator {
    state: ModalState,
    cur_item: Option<Collection>,
}

impl ModalOrchestrator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Target of the last dispatched action. Survives `Dismiss`.
    #[must_use]
    pub fn cur_item(&self) -> Option<&Collection> {
        self.cur_item.as_ref()
    }

    /// Apply a gesture. Returns `false` when the gesture does not apply in the
    /// current state and nothing changed.
    pub fn apply(&mut self, gesture: ModalGesture) -> bool {
        let next = match (gesture, &self.state) {
            (ModalGesture::Delete(target), _) => ModalState::ConfirmingDelete(target),
            (ModalGesture::Edit(target), _) => ModalState::Editing(target),
            (ModalGesture::MoreActions(target), _) => ModalState::MobileActionSheet(target),
            (ModalGesture::SheetEdit, ModalState::MobileActionSheet(target)) => {
                ModalState::Editing(target.clone())
            }
            (ModalGesture::SheetDelete, ModalState::MobileActionSheet(target)) => {
                ModalState::ConfirmingDelete(target.clone())
            }
            (ModalGesture::SheetEdit | ModalGesture::SheetDelete, _) => return false,
            (ModalGesture::Dismiss, ModalState::Closed) => return false,
            (ModalGesture::Dismiss, _) => ModalState::Closed,
        };
        if let Some(target) = next.target() {
            self.cur_item = Some(target.clone());
        }
        self.state = next;
        true
    }

    /// A `kind` mutation on `fid` succeeded. Closes the dialog only if it is
    /// the one that issued it: same target and same kind. A completion for a
    /// dialog the user already replaced leaves the new one alone.
    pub fn resolve_success(&mut self, fid: &CollectionId, kind: MutationKind) -> bool {
        let issued_here = match (&self.state, kind) {
            (ModalState::ConfirmingDelete(target), MutationKind::Delete)
            | (ModalState::Editing(target), MutationKind::Edit) => target.id() == fid,
            _ => false,
        };
        if issued_here {
            self.state = ModalState::Closed;
        }
        issued_here
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, ModalState::Editing(_))
    }

    #[must_use]
    pub fn is_action_sheet(&self) -> bool {
        matches!(self.state, ModalState::MobileActionSheet(_))
    }
}

/// Which remote mutation a request performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationKind {
    Delete,
    Edit,
}

/// Mutations awaiting a server answer, keyed by target and kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    pending: HashSet<(CollectionId, MutationKind)>,
}

impl InFlight {
    /// Reserve `(fid, kind)`. Returns `false` if the same request is still
    /// pending.
    pub fn try_begin(&mut self, fid: &CollectionId, kind: MutationKind) -> bool {
        self.pending.insert((fid.clone(), kind))
    }

    pub fn finish(&mut self, fid: &CollectionId, kind: MutationKind) {
        self.pending.remove(&(fid.clone(), kind));
    }

    #[must_use]
    pub fn is_pending(&self, fid: &CollectionId, kind: MutationKind) -> bool {
        self.pending.contains(&(fid.clone(), kind))
    }
}
