use egui::{Color32, ColorImage, Pos2, Vec2};
use std::sync::Arc;
use uuid::Uuid;

mod image;
mod path;
mod shape;

pub use image::ImageData;
pub use path::{PathData, PathPoint};
pub use shape::{ShapeData, ShapeKind};

/// Smallest width/height an interactive resize may produce.
pub const MIN_ELEMENT_SIZE: f32 = 20.0;

/// Identifier of one element in the scene.
pub type ElementId = Uuid;

/// One addressable drawable unit: the attributes every variant shares plus a
/// per-variant payload. Width/height are kept non-negative throughout; the
/// center always tracks the midpoint of the bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    id: ElementId,
    center: Pos2,
    size: Vec2,
    rotation: f32,
    color: Color32,
    kind: ElementKind,
}

/// Per-variant payload. Using a tagged union rules out invalid attribute
/// combinations (a shape with sample points, an image with a fill flag)
/// by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    Path(PathData),
    Image(ImageData),
    Shape(ShapeData),
}

impl Element {
    /// Materializes a committed freehand stroke. Paths keep their sample
    /// points in canvas space, so the shared center/size stay at zero.
    pub fn path(points: Vec<PathPoint>, pen_size: f32, color: Color32) -> Self {
        Self {
            id: Uuid::new_v4(),
            center: Pos2::ZERO,
            size: Vec2::ZERO,
            rotation: 0.0,
            color,
            kind: ElementKind::Path(PathData::new(points, pen_size)),
        }
    }

    /// A primitive shape at the pointer position. It starts with zero size
    /// and is grown during the creation drag.
    pub fn shape(kind: ShapeKind, at: Pos2, color: Color32, fill: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            center: at,
            size: Vec2::ZERO,
            rotation: 0.0,
            color,
            kind: ElementKind::Shape(ShapeData::new(kind, fill)),
        }
    }

    /// An imported image, centered on the canvas at half its natural size.
    pub fn image(pixels: Arc<ColorImage>, canvas_size: Vec2) -> Self {
        let data = ImageData::new(pixels);
        let natural = data.natural_size();
        Self {
            id: Uuid::new_v4(),
            center: (canvas_size / 2.0).to_pos2(),
            size: natural / 2.0,
            rotation: 0.0,
            color: Color32::BLACK,
            kind: ElementKind::Image(data),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ElementKind::Image(_))
    }

    pub fn set_center(&mut self, center: Pos2) {
        self.center = center;
    }

    pub fn set_size(&mut self, size: Vec2) {
        debug_assert!(size.x >= 0.0 && size.y >= 0.0);
        self.size = size;
    }
}
