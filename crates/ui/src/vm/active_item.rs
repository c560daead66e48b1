use hub_core::model::CollectionId;

/// Which collection row currently has pointer focus.
///
/// Identity is tracked rather than a flag: a late `leave` from a row the
/// pointer already left must not clear the row it moved onto.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveItemTracker {
    active: Option<CollectionId>,
}

impl ActiveItemTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered (or moved over) a row. Last enter wins.
    pub fn enter(&mut self, id: &CollectionId) {
        if self.active.as_ref() != Some(id) {
            self.active = Some(id.clone());
        }
    }

    /// Pointer left a row. Clears only if that row is still the active one.
    pub fn leave(&mut self, id: &CollectionId) {
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn active(&self) -> Option<&CollectionId> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self, id: &CollectionId) -> bool {
        self.active.as_ref() == Some(id)
    }
}
