//! The command registry.
//!
//! Commands are a closed set, so the registry is a plain enum with an
//! exhaustive match per attribute instead of a string-keyed table. `ALL`
//! drives both parsing and the `help` listing, which keeps the two
//! consistent by construction.

use crate::navigation::Page;

/// A registered terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Timeline,
    Skills,
    Contact,
    Projects,
    Clear,
    Back,
    Home,
}

impl Command {
    /// Every registered command, in `help` display order.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::About,
        Command::Timeline,
        Command::Skills,
        Command::Contact,
        Command::Projects,
        Command::Clear,
        Command::Back,
        Command::Home,
    ];

    /// Case-insensitive lookup of a trimmed input line.
    pub fn parse(input: &str) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|command| command.name().eq_ignore_ascii_case(input))
    }

    /// The lowercase command name as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Timeline => "timeline",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Projects => "projects",
            Command::Clear => "clear",
            Command::Back => "back",
            Command::Home => "home",
        }
    }

    /// One-line description shown by `help`.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Show this help message",
            Command::About => "Learn about me",
            Command::Timeline => "See my education & experience",
            Command::Skills => "See what I work with",
            Command::Contact => "Get my contact information",
            Command::Projects => "View my projects",
            Command::Clear => "Clear the terminal",
            Command::Back => "Return to the previous page",
            Command::Home => "Return to the welcome screen",
        }
    }

    /// The page this command displays, for content-bearing commands.
    ///
    /// `help`, `clear`, `back` and `home` do not record a page of their own.
    pub fn page(&self) -> Option<Page> {
        match self {
            Command::About => Some(Page::About),
            Command::Timeline => Some(Page::Timeline),
            Command::Skills => Some(Page::Skills),
            Command::Contact => Some(Page::Contact),
            Command::Projects => Some(Page::Projects),
            Command::Help | Command::Clear | Command::Back | Command::Home => None,
        }
    }
}
