//! Read-only content and project data for the session.
//!
//! Both the section texts and the project list arrive through one
//! asynchronous load performed by the host at session start. The store
//! tracks each of them as an independent load phase so every command can
//! check readiness on its own; querying before the load lands is a normal,
//! answerable state.

use std::collections::HashMap;

use folio_types::{Project, SectionKey};

/// Fallback text for section commands issued before content is available.
pub const SECTIONS_NOT_LOADED: &str = "Content is still loading. Try again in a moment.";

/// Fallback text for `projects` issued before the project list is available.
pub const PROJECTS_NOT_LOADED: &str = "Projects are still loading. Try again in a moment.";

/// Load phase of an externally provided value.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase<T> {
    /// The load has not completed yet.
    Pending,
    /// The value arrived and is immutable from now on.
    Ready(T),
    /// The load failed; the value stays absent for the whole session.
    Failed,
}

impl<T> LoadPhase<T> {
    pub fn as_ready(&self) -> Option<&T> {
        match self {
            LoadPhase::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadPhase::Failed)
    }
}

/// Session-scoped view of the loaded portfolio data.
#[derive(Debug, Clone)]
pub struct ContentStore {
    sections: LoadPhase<HashMap<SectionKey, String>>,
    projects: LoadPhase<Vec<Project>>,
}

impl ContentStore {
    /// Creates an empty store; both halves start out pending.
    pub fn new() -> Self {
        Self {
            sections: LoadPhase::Pending,
            projects: LoadPhase::Pending,
        }
    }

    /// Installs the loaded section texts.
    pub fn provide_sections(&mut self, sections: HashMap<SectionKey, String>) {
        self.sections = LoadPhase::Ready(sections);
    }

    /// Installs the loaded project list.
    pub fn provide_projects(&mut self, projects: Vec<Project>) {
        self.projects = LoadPhase::Ready(projects);
    }

    /// Marks both halves as permanently failed (degraded mode).
    pub fn mark_failed(&mut self) {
        self.sections = LoadPhase::Failed;
        self.projects = LoadPhase::Failed;
    }

    pub fn load_failed(&self) -> bool {
        self.sections.is_failed() || self.projects.is_failed()
    }

    /// Display text for a section, if loaded.
    pub fn section(&self, key: SectionKey) -> Option<&str> {
        self.sections
            .as_ready()
            .and_then(|sections| sections.get(&key))
            .map(String::as_str)
    }

    /// The loaded project list, if any.
    pub fn projects(&self) -> Option<&[Project]> {
        self.projects.as_ready().map(Vec::as_slice)
    }

    /// Number of loaded projects; zero while pending or failed.
    pub fn project_count(&self) -> usize {
        self.projects().map_or(0, <[Project]>::len)
    }

    /// Looks up a project by its selector id.
    pub fn find_project(&self, id: u32) -> Option<&Project> {
        self.projects()?.iter().find(|project| project.id == id)
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project(id: u32) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            category: "Demo".to_string(),
            tech: "Rust".to_string(),
            description: "A demo project".to_string(),
            page: format!("projects/{id}.html"),
        }
    }

    #[test]
    fn test_pending_store_answers_with_absence() {
        let store = ContentStore::new();
        assert_eq!(store.section(SectionKey::About), None);
        assert_eq!(store.projects(), None);
        assert_eq!(store.project_count(), 0);
        assert!(!store.load_failed());
    }

    #[test]
    fn test_section_available_after_provide() {
        let mut store = ContentStore::new();
        let mut sections = HashMap::new();
        sections.insert(SectionKey::About, "X".to_string());
        store.provide_sections(sections);

        assert_eq!(store.section(SectionKey::About), Some("X"));
        // Other keys stay absent, which is valid
        assert_eq!(store.section(SectionKey::Skills), None);
    }

    #[test]
    fn test_find_project_by_id() {
        let mut store = ContentStore::new();
        store.provide_projects(vec![sample_project(1), sample_project(2)]);

        assert_eq!(store.project_count(), 2);
        assert_eq!(store.find_project(2).map(|p| p.id), Some(2));
        assert!(store.find_project(3).is_none());
    }

    #[test]
    fn test_mark_failed_is_permanent_absence() {
        let mut store = ContentStore::new();
        store.mark_failed();

        assert!(store.load_failed());
        assert_eq!(store.section(SectionKey::Contact), None);
        assert_eq!(store.project_count(), 0);
    }
}
