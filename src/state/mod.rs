mod context;
mod session;

pub use context::EditorContext;
pub use session::SessionState;
