use crate::scene::Scene;

/// Linear undo/redo history of full scene snapshots.
///
/// Every committed mutation pushes the pre-mutation scene onto the undo stack
/// and clears the redo stack; branching history is deliberately unsupported.
/// Undo and redo are exact mirrors, so an undo followed by a redo restores
/// the pre-undo scene by structural equality.
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Scene>,
    redo_stack: Vec<Scene>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `next` as the current scene, pushing the displaced scene onto
    /// the undo stack. Any pending redo chain is invalidated.
    pub fn commit(&mut self, scene: &mut Scene, next: Scene) {
        let previous = std::mem::replace(scene, next);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
    }

    /// Records an edit that already mutated the scene in place, given the
    /// pre-edit snapshot. Equivalent to [`History::commit`] with the mutated
    /// scene as `next`.
    pub fn record(&mut self, before: Scene) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Restores the most recent undo snapshot, moving the current scene onto
    /// the redo stack. Returns `false` (leaving everything untouched) when
    /// there is nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(scene, previous);
        self.redo_stack.push(current);
        true
    }

    /// Mirror of [`History::undo`].
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(scene, next);
        self.undo_stack.push(current);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
