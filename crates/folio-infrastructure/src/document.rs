//! The on-disk portfolio document.

use std::collections::HashMap;

use folio_core::FolioError;
use folio_types::{Project, SectionKey};
use serde::{Deserialize, Serialize};

/// The portfolio content as stored in `portfolio.toml`.
///
/// ```toml
/// [content]
/// about = "Hi! I'm ..."
/// skills = "Rust | SQL | ..."
///
/// [[project]]
/// id = 1
/// title = "Sales Dashboard"
/// category = "Data Analytics"
/// tech = "Power BI"
/// description = "Interactive dashboard"
/// page = "projects/sales-dashboard.html"
/// ```
///
/// Both halves are optional in the file; an absent section simply stays
/// absent in the session (shown as not-loaded text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PortfolioDocument {
    /// Section texts keyed by section name.
    #[serde(default)]
    pub content: HashMap<SectionKey, String>,
    /// Project entries, in listing order.
    #[serde(default, rename = "project")]
    pub projects: Vec<Project>,
}

impl PortfolioDocument {
    /// Checks the invariants the session relies on: project ids are
    /// positive and unique.
    pub fn validate(&self) -> Result<(), FolioError> {
        let mut seen = Vec::with_capacity(self.projects.len());
        for project in &self.projects {
            if project.id == 0 {
                return Err(FolioError::config(format!(
                    "project '{}' has id 0; ids start at 1",
                    project.title
                )));
            }
            if seen.contains(&project.id) {
                return Err(FolioError::config(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            seen.push(project.id);
        }
        Ok(())
    }

    /// A complete built-in document, used by `--sample` and in tests.
    pub fn sample() -> Self {
        let mut content = HashMap::new();
        content.insert(
            SectionKey::About,
            "Hi! I'm a data analyst and software developer.\n\
             \n\
             I specialize in turning data into actionable insights and\n\
             building efficient software solutions.\n\
             \n\
             Skills: Python | SQL | Rust | Data Visualization"
                .to_string(),
        );
        content.insert(
            SectionKey::Timeline,
            "=== Education ===\n\
             - BS in Computer Science (2020-2024)\n\
             - Data Analytics Bootcamp (2023)\n\
             \n\
             === Experience ===\n\
             - Junior Developer (2024-Present)\n\
             - Built data pipelines processing 1M+ records"
                .to_string(),
        );
        content.insert(
            SectionKey::Skills,
            "Languages: Python, Rust, SQL, R\n\
             Tools: Git, Docker, Tableau, Power BI\n\
             Frameworks: React, Node.js, Django"
                .to_string(),
        );
        content.insert(
            SectionKey::Contact,
            "Email: hello@example.com\n\
             LinkedIn: linkedin.com/in/example\n\
             GitHub: github.com/example"
                .to_string(),
        );

        let projects = vec![
            Project {
                id: 1,
                title: "Sales Dashboard".to_string(),
                category: "Data Analytics".to_string(),
                tech: "Power BI".to_string(),
                description: "Interactive Power BI dashboard".to_string(),
                page: "projects/sales-dashboard.html".to_string(),
            },
            Project {
                id: 2,
                title: "Customer Segmentation".to_string(),
                category: "Data Analytics".to_string(),
                tech: "Python".to_string(),
                description: "Python clustering analysis".to_string(),
                page: "projects/customer-segmentation.html".to_string(),
            },
            Project {
                id: 3,
                title: "Predictive Model".to_string(),
                category: "Data Analytics".to_string(),
                tech: "scikit-learn".to_string(),
                description: "ML model for forecasting".to_string(),
                page: "projects/predictive-model.html".to_string(),
            },
            Project {
                id: 4,
                title: "Task Manager API".to_string(),
                category: "Software Development".to_string(),
                tech: "Node.js".to_string(),
                description: "RESTful API with Node.js".to_string(),
                page: "projects/task-manager-api.html".to_string(),
            },
            Project {
                id: 5,
                title: "Weather App".to_string(),
                category: "Software Development".to_string(),
                tech: "React".to_string(),
                description: "React + OpenWeather API".to_string(),
                page: "projects/weather-app.html".to_string(),
            },
            Project {
                id: 6,
                title: "E-commerce Site".to_string(),
                category: "Software Development".to_string(),
                tech: "MERN".to_string(),
                description: "Full-stack MERN project".to_string(),
                page: "projects/e-commerce.html".to_string(),
            },
        ];

        Self { content, projects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_document() {
        let doc: PortfolioDocument = toml::from_str(
            r#"
            [content]
            about = "Hi there"

            [[project]]
            id = 1
            title = "Demo"
            category = "Demos"
            tech = "Rust"
            description = "A demo"
            page = "projects/demo.html"
            "#,
        )
        .unwrap();

        assert_eq!(doc.content.get(&SectionKey::About).unwrap(), "Hi there");
        assert_eq!(doc.projects.len(), 1);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_valid() {
        let doc: PortfolioDocument = toml::from_str("").unwrap();
        assert!(doc.content.is_empty());
        assert!(doc.projects.is_empty());
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut doc = PortfolioDocument::sample();
        doc.projects[1].id = doc.projects[0].id;
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_id() {
        let mut doc = PortfolioDocument::sample();
        doc.projects[0].id = 0;
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_sample_covers_every_section() {
        let doc = PortfolioDocument::sample();
        for key in SectionKey::ALL {
            assert!(doc.content.contains_key(&key), "missing section {}", key.name());
        }
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let original = PortfolioDocument::sample();
        let serialized = toml::to_string(&original).unwrap();
        let parsed: PortfolioDocument = toml::from_str(&serialized).unwrap();
        assert_eq!(original, parsed);
    }
}
