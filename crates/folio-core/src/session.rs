//! The session orchestrator.
//!
//! One `Session` owns all mutable state for one visitor: the navigation
//! stack, the input history, and the view of the loaded content. Every
//! mutation happens on the single input-handling path; the host only calls
//! in with submitted lines, recall requests, and load completion events.

use std::collections::HashMap;

use folio_types::{LineStyle, Project, RenderInstruction, SectionKey};
use log::{debug, warn};

use crate::command::Command;
use crate::content::{ContentStore, PROJECTS_NOT_LOADED, SECTIONS_NOT_LOADED};
use crate::history::{CommandHistory, Recall};
use crate::navigation::{BackOutcome, NavigationStack, Page};

/// In-memory state for one visitor's terminal session.
pub struct Session {
    navigation: NavigationStack,
    history: CommandHistory,
    store: ContentStore,
}

impl Session {
    /// Creates a fresh session showing the welcome screen.
    pub fn new() -> Self {
        Self {
            navigation: NavigationStack::new(),
            history: CommandHistory::new(),
            store: ContentStore::new(),
        }
    }

    /// The welcome banner, shown on startup and by `home`.
    pub fn welcome_screen(&self) -> Vec<RenderInstruction> {
        vec![
            RenderInstruction::line("Welcome to my portfolio terminal!", LineStyle::Title),
            RenderInstruction::line("Type 'help' to see available commands.", LineStyle::Info),
            RenderInstruction::line("---", LineStyle::Info),
        ]
    }

    /// Handles one submitted input line.
    ///
    /// Classification order matters: numeric project selectors are resolved
    /// before command lookup, so a number can never be shadowed by a
    /// command name.
    pub fn submit(&mut self, raw: &str) -> Vec<RenderInstruction> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        self.history.record(trimmed);

        if let Ok(id) = trimmed.parse::<u32>() {
            if id >= 1 && (id as usize) <= self.store.project_count() {
                debug!("input '{trimmed}' classified as project selector");
                return self.select_project(id);
            }
        }

        match Command::parse(trimmed) {
            Some(command) => {
                debug!("dispatching command '{}'", command.name());
                self.execute(command)
            }
            None => {
                debug!("unknown command '{trimmed}'");
                vec![
                    RenderInstruction::line(
                        format!("Command not found: {trimmed}"),
                        LineStyle::Error,
                    ),
                    RenderInstruction::line(
                        "Type 'help' for available commands.",
                        LineStyle::Info,
                    ),
                ]
            }
        }
    }

    /// Record-and-display path: runs a command as typed by the visitor.
    fn execute(&mut self, command: Command) -> Vec<RenderInstruction> {
        if let Some(page) = command.page() {
            self.navigation.push(page);
            return self.render_page(page);
        }

        match command {
            Command::Help => self.help(),
            Command::Clear => vec![RenderInstruction::ClearAll],
            Command::Home => {
                self.navigation.reset();
                self.welcome_screen()
            }
            Command::Back => match self.navigation.back() {
                BackOutcome::NoPreviousPage => {
                    vec![RenderInstruction::line("No previous page.", LineStyle::Info)]
                }
                BackOutcome::Returned(page) => self.render_page(page),
            },
            // Content-bearing commands were handled above via their page
            _ => Vec::new(),
        }
    }

    /// Display-only path: renders a page without recording it.
    ///
    /// `back` replays the previous page through here, so re-display can
    /// never grow the stack or re-enter dispatch.
    fn render_page(&self, page: Page) -> Vec<RenderInstruction> {
        if let Some(key) = page.section() {
            return self.render_section(key);
        }
        match page {
            Page::Welcome => self.welcome_screen(),
            Page::Projects => self.project_listing(),
            // Section-backed pages were handled above
            _ => Vec::new(),
        }
    }

    fn render_section(&self, key: SectionKey) -> Vec<RenderInstruction> {
        match self.store.section(key) {
            Some(text) => text
                .lines()
                .map(|line| RenderInstruction::line(line, LineStyle::Output))
                .collect(),
            None => vec![RenderInstruction::line(SECTIONS_NOT_LOADED, LineStyle::Info)],
        }
    }

    /// Numbered project listing, grouped by category.
    fn project_listing(&self) -> Vec<RenderInstruction> {
        let projects = match self.store.projects() {
            Some(projects) if !projects.is_empty() => projects,
            _ => {
                return vec![RenderInstruction::line(PROJECTS_NOT_LOADED, LineStyle::Info)];
            }
        };

        let mut out = Vec::new();
        let mut current_category: Option<&str> = None;
        for project in projects {
            if current_category != Some(project.category.as_str()) {
                current_category = Some(project.category.as_str());
                out.push(RenderInstruction::line(
                    format!("=== {} ===", project.category),
                    LineStyle::Title,
                ));
            }
            out.push(RenderInstruction::line(
                format!("{}. {} - {}", project.id, project.title, project.description),
                LineStyle::Output,
            ));
        }
        out.push(RenderInstruction::line(
            "Type a project number (e.g. '1') to open it.",
            LineStyle::Info,
        ));
        out
    }

    fn select_project(&self, id: u32) -> Vec<RenderInstruction> {
        match self.store.find_project(id) {
            Some(project) => vec![
                RenderInstruction::line(
                    format!("Loading {}...", project.title),
                    LineStyle::Info,
                ),
                RenderInstruction::NavigateTo(project.page.clone()),
            ],
            None => {
                // Unreachable while the range check and the list agree;
                // kept as a contract for hosts that swap the list out.
                warn!("project selector {id} passed the range check but has no record");
                vec![RenderInstruction::line("Project not found.", LineStyle::Error)]
            }
        }
    }

    fn help(&self) -> Vec<RenderInstruction> {
        let mut out = vec![RenderInstruction::line("Available commands:", LineStyle::Title)];
        for command in Command::ALL {
            out.push(RenderInstruction::line(
                format!("  {:<9} - {}", command.name(), command.description()),
                LineStyle::Output,
            ));
        }
        out.push(RenderInstruction::line(
            "Open a project by typing its number from 'projects'.",
            LineStyle::Info,
        ));
        out
    }

    /// Steps input recall toward older entries (arrow-up).
    pub fn recall_older(&mut self) -> Recall {
        self.history.recall_older()
    }

    /// Steps input recall toward newer entries (arrow-down).
    pub fn recall_newer(&mut self) -> Recall {
        self.history.recall_newer()
    }

    /// Installs section texts once the asynchronous load completes.
    pub fn sections_loaded(&mut self, sections: HashMap<SectionKey, String>) {
        self.store.provide_sections(sections);
    }

    /// Installs the project list once the asynchronous load completes.
    pub fn projects_loaded(&mut self, projects: Vec<Project>) {
        self.store.provide_projects(projects);
    }

    /// Marks the load as failed and returns the one-time error banner.
    ///
    /// The session stays usable afterwards; content commands keep answering
    /// with their not-loaded fallback.
    pub fn load_failed(&mut self) -> Vec<RenderInstruction> {
        self.store.mark_failed();
        vec![RenderInstruction::line(
            "Failed to load portfolio content. Commands will show placeholders.",
            LineStyle::Error,
        )]
    }

    /// The page currently on screen.
    pub fn current_page(&self) -> Page {
        self.navigation.current()
    }

    /// Depth of the navigation stack, root included.
    pub fn stack_depth(&self) -> usize {
        self.navigation.depth()
    }

    /// Number of lines recorded in the input history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
