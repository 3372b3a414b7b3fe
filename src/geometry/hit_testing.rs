use egui::{Pos2, Vec2};

use crate::element::Element;

/// Half-extent of the square hotspot around each corner handle.
pub const HANDLE_HIT_RANGE: f32 = 10.0;

/// The four corner hotspots used to resize the selected element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Handle {
    /// Probe order for hit-testing; the first match wins.
    pub const ALL: [Handle; 4] = [
        Handle::NorthWest,
        Handle::NorthEast,
        Handle::SouthEast,
        Handle::SouthWest,
    ];

    /// Unit offsets from the element center towards this corner.
    pub fn direction(self) -> Vec2 {
        match self {
            Handle::NorthWest => Vec2::new(-1.0, -1.0),
            Handle::NorthEast => Vec2::new(1.0, -1.0),
            Handle::SouthEast => Vec2::new(1.0, 1.0),
            Handle::SouthWest => Vec2::new(-1.0, 1.0),
        }
    }

    /// Position of this corner on the element's bounding box.
    pub fn corner(self, element: &Element) -> Pos2 {
        element.center() + self.direction() * (element.size() / 2.0)
    }
}

/// Bounding-box containment test on the element's center and size. Rotation
/// is rendered but deliberately ignored here; picking stays axis-aligned.
pub fn point_in_element(pos: Pos2, element: &Element) -> bool {
    let delta = pos - element.center();
    delta.x.abs() <= element.size().x / 2.0 && delta.y.abs() <= element.size().y / 2.0
}

/// The corner handle of `element` under `pos`, if any. Corners are tested
/// against a square hotspot, in [`Handle::ALL`] order.
pub fn resize_handle_at(pos: Pos2, element: &Element) -> Option<Handle> {
    Handle::ALL.into_iter().find(|handle| {
        let corner = handle.corner(element);
        (pos.x - corner.x).abs() < HANDLE_HIT_RANGE && (pos.y - corner.y).abs() < HANDLE_HIT_RANGE
    })
}
