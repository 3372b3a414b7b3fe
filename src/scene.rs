use egui::Pos2;

use crate::element::{Element, ElementId};
use crate::geometry;

/// The ordered set of all elements on the canvas. Index order is z-order:
/// later elements draw on top and win hit-testing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element on top of the stack.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Topmost element containing `pos`, scanning from the end of the stack.
    pub fn hit_test(&self, pos: Pos2) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| geometry::point_in_element(pos, e))
            .map(|e| e.id())
    }
}
