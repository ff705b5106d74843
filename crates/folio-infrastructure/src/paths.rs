//! Path resolution for folio configuration files.
//!
//! # Directory structure
//!
//! ```text
//! ~/.config/folio/             # Config directory
//! └── portfolio.toml           # Portfolio content document
//! ```

use std::path::PathBuf;

use folio_core::FolioError;

/// Unified path management for folio.
pub struct FolioPaths;

impl FolioPaths {
    /// Returns the folio configuration directory (`~/.config/folio` on
    /// Linux, the platform equivalent elsewhere).
    pub fn config_dir() -> Result<PathBuf, FolioError> {
        dirs::config_dir()
            .map(|dir| dir.join("folio"))
            .ok_or_else(|| FolioError::config("Cannot find config directory"))
    }

    /// Returns the default path of the portfolio content document.
    pub fn portfolio_file() -> Result<PathBuf, FolioError> {
        Ok(Self::config_dir()?.join("portfolio.toml"))
    }
}
