//! Loading of portfolio content from disk.
//!
//! The session core treats content as externally provided data; this crate
//! is the provider. It defines the on-disk TOML document, resolves the
//! default config location, and performs the one-shot asynchronous load.

pub mod document;
pub mod paths;
pub mod source;

pub use document::PortfolioDocument;
pub use source::{ContentSource, TomlContentSource};
