#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod geometry;
pub mod history;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod tool;

pub use app::MosaicApp;
pub use element::{Element, ElementId, ElementKind, PathPoint, ShapeKind};
pub use history::History;
pub use renderer::Renderer;
pub use scene::Scene;
pub use state::{EditorContext, SessionState};
pub use tool::Tool;
