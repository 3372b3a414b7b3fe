use egui::{Pos2, Vec2};

use crate::element::{ElementId, PathPoint};
use crate::geometry::Handle;
use crate::scene::Scene;

/// The state of one pointer session.
///
/// Every non-idle state is entered on session-start and left on session-end
/// (pointer release, or loss of pointer capture, which is treated the same
/// way). The `before` snapshots capture the scene as it was when the session
/// started; session-end pushes them through the history manager whenever the
/// session actually changed the scene.
#[derive(Clone, Debug)]
pub enum SessionState {
    /// No active pointer operation.
    Idle,
    /// Capturing a freehand stroke. The samples are not part of the scene
    /// yet; they render as a transient overlay and materialize into a path
    /// element on session-end.
    FreehandCapture { points: Vec<PathPoint> },
    /// Growing a newly created shape symmetrically around the drag diagonal
    /// anchored at the session-start position.
    ShapeCreate {
        id: ElementId,
        anchor: Pos2,
        before: Scene,
    },
    /// Moving the selected element, keeping the session-start offset between
    /// pointer and element center.
    Dragging {
        id: ElementId,
        offset: Vec2,
        before: Scene,
    },
    /// Scaling the selected element from a corner handle with its center
    /// fixed. `start_size` is the bounding size at session-start.
    Resizing {
        id: ElementId,
        handle: Handle,
        anchor: Pos2,
        start_size: Vec2,
        before: Scene,
    },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    /// Sample points of an in-progress freehand capture, if any.
    pub fn live_points(&self) -> Option<&[PathPoint]> {
        match self {
            SessionState::FreehandCapture { points } => Some(points),
            _ => None,
        }
    }
}
