pub mod command;
pub mod content;
pub mod error;
pub mod history;
pub mod navigation;
pub mod session;

// Re-export the common error type and the session entry point
pub use error::FolioError;
pub use session::Session;
