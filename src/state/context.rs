use egui::{Color32, ColorImage, Pos2, Vec2};
use std::sync::Arc;

use super::SessionState;
use crate::element::{Element, ElementId, PathPoint, MIN_ELEMENT_SIZE};
use crate::geometry::{self, Handle};
use crate::history::History;
use crate::scene::Scene;
use crate::tool::Tool;

/// The editor-session context: scene, history, selection, active tool
/// settings, and the pointer-session state machine. All scene mutation
/// funnels through here; there is no ambient state.
///
/// Pointer positions are in canvas space. They may lie outside the canvas
/// (negative, or beyond its extent) and are used as-is.
pub struct EditorContext {
    scene: Scene,
    history: History,
    session: SessionState,
    selected: Option<ElementId>,
    tool: Tool,
    color: Color32,
    pen_size: f32,
    fill: bool,
    canvas_size: Vec2,
}

impl EditorContext {
    pub fn new(canvas_size: Vec2) -> Self {
        Self {
            scene: Scene::new(),
            history: History::new(),
            session: SessionState::Idle,
            selected: None,
            tool: Tool::Move,
            color: Color32::BLACK,
            pen_size: 2.0,
            fill: false,
            canvas_size,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.scene.get(id))
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn pen_size(&self) -> f32 {
        self.pen_size
    }

    pub fn set_pen_size(&mut self, pen_size: f32) {
        self.pen_size = pen_size;
    }

    pub fn fill(&self) -> bool {
        self.fill
    }

    pub fn set_fill(&mut self, fill: bool) {
        self.fill = fill;
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Session-start: begins a capture or creation, or resolves the pointer
    /// against the selection's handles and then the scene, topmost first.
    pub fn pointer_pressed(&mut self, pos: Pos2) {
        if !self.session.is_idle() {
            return;
        }

        if self.tool == Tool::Draw {
            let seed = PathPoint {
                pos,
                color: Some(self.color),
                size: Some(self.pen_size),
            };
            self.session = SessionState::FreehandCapture { points: vec![seed] };
            return;
        }

        if let Some(kind) = self.tool.shape_kind() {
            let before = self.scene.clone();
            let element = Element::shape(kind, pos, self.color, self.fill);
            let id = element.id();
            self.scene.push(element);
            self.selected = Some(id);
            self.session = SessionState::ShapeCreate {
                id,
                anchor: pos,
                before,
            };
            return;
        }

        // Move tool (and the image tool, which points the same way): corner
        // handles of the current selection win over element picking.
        let handle_hit = self
            .selected_element()
            .and_then(|e| geometry::resize_handle_at(pos, e).map(|h| (e.id(), h, e.size())));
        if let Some((id, handle, start_size)) = handle_hit {
            let before = self.scene.clone();
            self.session = SessionState::Resizing {
                id,
                handle,
                anchor: pos,
                start_size,
                before,
            };
            return;
        }

        if let Some(id) = self.scene.hit_test(pos) {
            if let Some(center) = self.scene.get(id).map(|e| e.center()) {
                let before = self.scene.clone();
                self.selected = Some(id);
                self.session = SessionState::Dragging {
                    id,
                    offset: pos - center,
                    before,
                };
            }
            return;
        }

        self.selected = None;
    }

    /// Session-move: extends the capture or updates the transient geometry of
    /// the element under edit.
    pub fn pointer_moved(&mut self, pos: Pos2) {
        match &mut self.session {
            SessionState::Idle => {}
            SessionState::FreehandCapture { points } => {
                points.push(PathPoint {
                    pos,
                    color: Some(self.color),
                    size: Some(self.pen_size),
                });
            }
            SessionState::ShapeCreate { id, anchor, .. } => {
                let (id, anchor) = (*id, *anchor);
                if let Some(element) = self.scene.get_mut(id) {
                    // The box grows symmetrically around the drag diagonal:
                    // size from the absolute deltas, center at the midpoint.
                    let size = Vec2::new((pos.x - anchor.x).abs(), (pos.y - anchor.y).abs());
                    element.set_size(size);
                    element.set_center(anchor + (pos - anchor) / 2.0);
                }
            }
            SessionState::Dragging { id, offset, .. } => {
                let (id, offset) = (*id, *offset);
                if let Some(element) = self.scene.get_mut(id) {
                    element.set_center(pos - offset);
                }
            }
            SessionState::Resizing {
                id,
                handle,
                anchor,
                start_size,
                ..
            } => {
                let (id, handle, anchor, start_size) = (*id, *handle, *anchor, *start_size);
                if let Some(element) = self.scene.get_mut(id) {
                    let delta = pos - anchor;
                    let mut size = resized(start_size, handle, delta);
                    if element.is_image() {
                        size = preserve_aspect(size, start_size, delta);
                    }
                    element.set_size(size);
                }
            }
        }
    }

    /// Session-end: materializes or commits the finished operation and
    /// returns to idle. Loss of pointer capture is routed here as well, so a
    /// stuck capture/drag/resize cannot outlive its pointer session.
    pub fn pointer_released(&mut self) {
        match std::mem::replace(&mut self.session, SessionState::Idle) {
            SessionState::Idle => {}
            SessionState::FreehandCapture { points } => {
                if points.is_empty() {
                    return;
                }
                let element = Element::path(points, self.pen_size, self.color);
                let mut next = self.scene.clone();
                next.push(element);
                self.history.commit(&mut self.scene, next);
            }
            SessionState::ShapeCreate { before, .. }
            | SessionState::Dragging { before, .. }
            | SessionState::Resizing { before, .. } => {
                // One undo step per completed edit; a session that changed
                // nothing (press and release in place) commits nothing.
                if self.scene != before {
                    self.history.record(before);
                }
            }
        }
    }

    /// Restores the previous scene snapshot. The selection does not survive
    /// history transitions. Ignored mid-session.
    pub fn undo(&mut self) -> bool {
        if !self.session.is_idle() {
            return false;
        }
        let undone = self.history.undo(&mut self.scene);
        if undone {
            self.selected = None;
        }
        undone
    }

    /// Mirror of [`EditorContext::undo`].
    pub fn redo(&mut self) -> bool {
        if !self.session.is_idle() {
            return false;
        }
        let redone = self.history.redo(&mut self.scene);
        if redone {
            self.selected = None;
        }
        redone
    }

    /// Removes the selected element as one committed edit.
    pub fn delete_selected(&mut self) -> bool {
        if !self.session.is_idle() {
            return false;
        }
        let Some(id) = self.selected.take() else {
            return false;
        };
        let before = self.scene.clone();
        if self.scene.remove(id).is_none() {
            return false;
        }
        self.history.record(before);
        true
    }

    /// Inserts decoded pixels as a new image element, centered on the canvas
    /// at half the source's natural size, and selects it.
    pub fn insert_image(&mut self, pixels: Arc<ColorImage>) {
        let element = Element::image(pixels, self.canvas_size);
        let id = element.id();
        let mut next = self.scene.clone();
        next.push(element);
        self.history.commit(&mut self.scene, next);
        self.selected = Some(id);
    }
}

/// Corner-handle resize with the element center fixed: the opposite edge
/// moves by the same signed amount, so each pointer delta counts twice. Both
/// dimensions clamp to the minimum element size.
fn resized(start: Vec2, handle: Handle, delta: Vec2) -> Vec2 {
    let direction = handle.direction();
    Vec2::new(
        (start.x + 2.0 * direction.x * delta.x).max(MIN_ELEMENT_SIZE),
        (start.y + 2.0 * direction.y * delta.y).max(MIN_ELEMENT_SIZE),
    )
}

/// Images keep the aspect ratio they had when the resize started: the axis
/// with the larger pointer movement drives, the other dimension is derived.
fn preserve_aspect(size: Vec2, start: Vec2, delta: Vec2) -> Vec2 {
    if start.x <= 0.0 || start.y <= 0.0 {
        return size;
    }
    let aspect = start.x / start.y;
    if delta.x.abs() > delta.y.abs() {
        Vec2::new(size.x, size.x / aspect)
    } else {
        Vec2::new(size.y * aspect, size.y)
    }
}
