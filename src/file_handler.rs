use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use egui::{ColorImage, Context};
use parking_lot::Mutex;

use crate::error::ImportError;

type Inbox = Arc<Mutex<Vec<Arc<ColorImage>>>>;

/// Imports image files without blocking the UI thread.
///
/// File selection and decoding run on spawned worker threads; decoded pixels
/// land in a shared inbox that the app drains once per frame, deferring the
/// actual element insertion until then. Failed or cancelled imports are
/// logged and dropped, leaving the scene untouched.
#[derive(Default)]
pub struct FileHandler {
    inbox: Inbox,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a native file dialog on a worker thread and decodes the chosen
    /// image.
    pub fn open_dialog(&self, ctx: &Context) {
        self.spawn(ctx, || {
            let path = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
                .pick_file()
                .ok_or(ImportError::Cancelled)?;
            read_and_decode(path)
        });
    }

    /// Feeds files dropped onto the window into the importer.
    pub fn check_for_dropped_files(&self, ctx: &Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(bytes) = file.bytes {
                self.spawn(ctx, move || decode(&bytes));
            } else if let Some(path) = file.path {
                self.spawn(ctx, move || read_and_decode(path));
            }
        }
    }

    /// Drains decoded images that are ready for insertion.
    pub fn poll(&self) -> Vec<Arc<ColorImage>> {
        std::mem::take(&mut *self.inbox.lock())
    }

    fn spawn<F>(&self, ctx: &Context, job: F)
    where
        F: FnOnce() -> Result<Arc<ColorImage>, ImportError> + Send + 'static,
    {
        let inbox = Arc::clone(&self.inbox);
        let ctx = ctx.clone();
        thread::spawn(move || match job() {
            Ok(pixels) => {
                inbox.lock().push(pixels);
                ctx.request_repaint();
            }
            Err(ImportError::Cancelled) => log::debug!("image import cancelled"),
            Err(err) => log::warn!("image import failed: {err}"),
        });
    }
}

fn read_and_decode(path: PathBuf) -> Result<Arc<ColorImage>, ImportError> {
    let bytes = std::fs::read(&path).map_err(|source| ImportError::Read {
        path: path.display().to_string(),
        source,
    })?;
    decode(&bytes)
}

fn decode(bytes: &[u8]) -> Result<Arc<ColorImage>, ImportError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());
    log::debug!("decoded image: {}x{}", size[0], size[1]);
    Ok(Arc::new(pixels))
}
