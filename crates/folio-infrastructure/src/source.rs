//! Asynchronous content loading.

use std::path::PathBuf;

use async_trait::async_trait;
use folio_core::FolioError;
use log::{debug, info};

use crate::document::PortfolioDocument;
use crate::paths::FolioPaths;

/// A source of portfolio content.
///
/// The host performs exactly one `load` per session, off the input path,
/// and feeds the result into the session when it completes. The session
/// itself never blocks on this.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> Result<PortfolioDocument, FolioError>;
}

/// Loads the portfolio document from a TOML file.
pub struct TomlContentSource {
    path: PathBuf,
}

impl TomlContentSource {
    /// Creates a source reading the default location
    /// (`~/.config/folio/portfolio.toml`).
    pub fn new() -> Result<Self, FolioError> {
        Ok(Self {
            path: FolioPaths::portfolio_file()?,
        })
    }

    /// Creates a source reading a custom path (also used by tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl ContentSource for TomlContentSource {
    async fn load(&self) -> Result<PortfolioDocument, FolioError> {
        debug!("loading portfolio document from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let document: PortfolioDocument = toml::from_str(&raw)?;
        document.validate()?;
        info!(
            "loaded {} sections and {} projects",
            document.content.len(),
            document.projects.len()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
            [content]
            about = "Hi"

            [[project]]
            id = 1
            title = "Demo"
            category = "Demos"
            tech = "Rust"
            description = "A demo"
            page = "projects/demo.html"
            "#
        )
        .unwrap();

        let source = TomlContentSource::with_path(path);
        let document = source.load().await.unwrap();

        assert_eq!(document.projects.len(), 1);
        assert_eq!(
            document.content.get(&folio_types::SectionKey::About).unwrap(),
            "Hi"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = TomlContentSource::with_path(dir.path().join("absent.toml"));

        let err = source.load().await.unwrap_err();
        assert!(err.is_io());
    }

    #[tokio::test]
    async fn test_malformed_document_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, "content = 3").unwrap();

        let source = TomlContentSource::with_path(path);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, FolioError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_invalid_ids_are_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        std::fs::write(
            &path,
            r#"
            [[project]]
            id = 0
            title = "Demo"
            category = "Demos"
            tech = "Rust"
            description = "A demo"
            page = "projects/demo.html"
            "#,
        )
        .unwrap();

        let source = TomlContentSource::with_path(path);
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }
}
