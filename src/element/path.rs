use egui::{Color32, Pos2};

/// One freehand sample. The per-point color/size overrides come from the
/// capture contract and are stored as parsed; rendering applies the stroke's
/// commit-time color and pen size to the whole polyline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPoint {
    pub pos: Pos2,
    pub color: Option<Color32>,
    pub size: Option<f32>,
}

/// Payload of a committed freehand stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct PathData {
    points: Vec<PathPoint>,
    pen_size: f32,
}

impl PathData {
    pub(crate) fn new(points: Vec<PathPoint>, pen_size: f32) -> Self {
        Self { points, pen_size }
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    /// Pen size fixed when the stroke was committed.
    pub fn pen_size(&self) -> f32 {
        self.pen_size
    }
}
