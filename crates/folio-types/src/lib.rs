use serde::{Deserialize, Serialize};

/// A single portfolio project entry.
///
/// Projects are loaded once at session start and are immutable afterwards.
/// Identity is the `id` field, which is unique within the loaded list and
/// doubles as the numeric selector visitors type at the prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Positive, unique selector number (1-based).
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Category label (e.g., "Data Analytics").
    pub category: String,
    /// Technology summary line.
    pub tech: String,
    /// Free-text description.
    pub description: String,
    /// Opaque navigation target, e.g. a relative resource path.
    pub page: String,
}

/// Key of a content section in the portfolio document.
///
/// The key set is fixed; an absent key means "not loaded yet", which is a
/// valid state, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    About,
    Timeline,
    Skills,
    Contact,
}

impl SectionKey {
    /// Every section key, in display order.
    pub const ALL: [SectionKey; 4] = [
        SectionKey::About,
        SectionKey::Timeline,
        SectionKey::Skills,
        SectionKey::Contact,
    ];

    /// The lowercase name used in documents and messages.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKey::About => "about",
            SectionKey::Timeline => "timeline",
            SectionKey::Skills => "skills",
            SectionKey::Contact => "contact",
        }
    }
}

/// Visual style of an output line.
///
/// The core only names the style; the renderer decides what it looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// Ordinary command output.
    Output,
    /// Informational line (hints, "loading...", "no previous page").
    Info,
    /// Error line (unknown command, load failure).
    Error,
    /// Heading line (welcome banner, listing headers).
    Title,
}

/// An instruction for the external renderer.
///
/// The session core never touches presentation; it emits a sequence of these
/// and the host (a terminal, a web page) carries them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderInstruction {
    /// Append one line of text to the output surface.
    AppendLine { text: String, style: LineStyle },
    /// Clear the entire output surface.
    ClearAll,
    /// Navigate the host to an external resource (project page).
    NavigateTo(String),
}

impl RenderInstruction {
    /// Convenience constructor for an output-styled line.
    pub fn line(text: impl Into<String>, style: LineStyle) -> Self {
        RenderInstruction::AppendLine {
            text: text.into(),
            style,
        }
    }
}
