use egui::{ColorImage, Vec2};
use std::sync::Arc;

/// Payload of an imported image: pixel data decoded once at insertion and
/// never recomputed afterwards. The renderer scales it into the element's
/// bounding box.
#[derive(Clone)]
pub struct ImageData {
    pixels: Arc<ColorImage>,
}

// Scene snapshots share the pixel allocation, so the pointer check settles
// almost every comparison.
impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
            || (self.pixels.size == other.pixels.size && self.pixels.pixels == other.pixels.pixels)
    }
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.pixels.size[0])
            .field("height", &self.pixels.size[1])
            .finish()
    }
}

impl ImageData {
    pub(crate) fn new(pixels: Arc<ColorImage>) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &Arc<ColorImage> {
        &self.pixels
    }

    /// Size of the decoded source asset.
    pub fn natural_size(&self) -> Vec2 {
        Vec2::new(self.pixels.size[0] as f32, self.pixels.size[1] as f32)
    }
}
