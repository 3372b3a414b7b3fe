use std::sync::Arc;
use std::thread;

use egui::{Color32, ColorImage, Context, Event, Rect, UserData, ViewportCommand};

use crate::error::ExportError;

/// Fixed name offered for the exported raster.
const EXPORT_FILE_NAME: &str = "canvas.png";

/// Rasterized canvas export.
///
/// An export request asks the backend for a viewport screenshot; the pixels
/// arrive as an input event on a later frame, get cropped to the canvas rect
/// at the current pixel density, and are written out as PNG on a worker
/// thread. If no capture is ever delivered the request expires silently.
#[derive(Default)]
pub struct Exporter {
    pending: usize,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a frame capture of the viewport.
    pub fn request_export(&mut self, ctx: &Context) {
        self.pending += 1;
        ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::default()));
    }

    /// Collects delivered captures and saves the canvas region. No-op while
    /// nothing is pending or nothing arrived.
    pub fn process(&mut self, ctx: &Context, canvas_rect: Rect) {
        if self.pending == 0 {
            return;
        }
        let captures: Vec<Arc<ColorImage>> = ctx.input(|i| {
            i.raw
                .events
                .iter()
                .filter_map(|event| match event {
                    Event::Screenshot { image, .. } => Some(image.clone()),
                    _ => None,
                })
                .collect()
        });
        for capture in captures {
            self.pending = self.pending.saturating_sub(1);
            let crop = crop_to_canvas(&capture, canvas_rect, ctx.pixels_per_point());
            thread::spawn(move || match save_png(&crop) {
                Ok(path) => log::info!("canvas exported to {path}"),
                Err(ExportError::Cancelled) => log::debug!("canvas export cancelled"),
                Err(err) => log::warn!("canvas export failed: {err}"),
            });
        }
    }
}

/// Cuts the canvas region out of a full-viewport capture, converting from
/// logical points to physical pixels.
fn crop_to_canvas(capture: &ColorImage, canvas_rect: Rect, pixels_per_point: f32) -> ColorImage {
    let [width, height] = capture.size;
    let x0 = (((canvas_rect.min.x * pixels_per_point).round().max(0.0)) as usize).min(width);
    let y0 = (((canvas_rect.min.y * pixels_per_point).round().max(0.0)) as usize).min(height);
    let x1 = (((canvas_rect.max.x * pixels_per_point).round().max(0.0)) as usize).clamp(x0, width);
    let y1 = (((canvas_rect.max.y * pixels_per_point).round().max(0.0)) as usize).clamp(y0, height);

    let mut crop = ColorImage::new([x1 - x0, y1 - y0], Color32::WHITE);
    for (row, y) in (y0..y1).enumerate() {
        for (col, x) in (x0..x1).enumerate() {
            crop.pixels[row * (x1 - x0) + col] = capture.pixels[y * width + x];
        }
    }
    crop
}

/// Offers a save dialog pre-filled with the fixed export name and writes the
/// raster as PNG.
fn save_png(raster: &ColorImage) -> Result<String, ExportError> {
    let path = rfd::FileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .save_file()
        .ok_or(ExportError::Cancelled)?;
    let [width, height] = raster.size;
    let mut rgba = Vec::with_capacity(width * height * 4);
    for pixel in &raster.pixels {
        rgba.extend_from_slice(&pixel.to_array());
    }
    image::save_buffer(
        &path,
        &rgba,
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(path.display().to_string())
}
