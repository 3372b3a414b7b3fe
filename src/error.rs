use thiserror::Error;

/// Failures while importing an image file. All of them abandon the import
/// and leave the scene unmodified; there is no user-visible error surface.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no file was selected")]
    Cancelled,
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Failures while writing the exported canvas raster.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no destination was selected")]
    Cancelled,
    #[error("failed to encode or write image: {0}")]
    Write(#[from] image::ImageError),
}
