use crate::api::types::EntityRef;

/// Neighbours of the current selection, recomputed only when the selection
/// or the entity set changes.
#[derive(Debug, Default)]
pub struct LinkCache {
    key: Option<EntityRef>,
    links: Vec<EntityRef>,
    valid: bool,
}

impl LinkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links for `selection`, computing them with `compute` on a miss.
    pub fn get_or_compute<F>(&mut self, selection: EntityRef, compute: F) -> &[EntityRef]
    where
        F: FnOnce() -> Vec<EntityRef>,
    {
        if !self.valid || self.key != Some(selection) {
            self.links = compute();
            self.key = Some(selection);
            self.valid = true;
        }
        &self.links
    }

    /// Cached links, if they belong to `selection`.
    pub fn peek(&self, selection: EntityRef) -> Option<&[EntityRef]> {
        (self.valid && self.key == Some(selection)).then_some(self.links.as_slice())
    }

    /// Selection changed.
    pub fn on_selection_changed(&mut self) {
        self.invalidate();
    }

    /// Entities were added or moved.
    pub fn on_entities_changed(&mut self) {
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.valid = false;
        self.key = None;
        self.links.clear();
    }
}
