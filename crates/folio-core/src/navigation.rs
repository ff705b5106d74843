//! Navigation history for the session.
//!
//! The stack records which pages the visitor has displayed, in order. The
//! root sentinel `Welcome` is always at the bottom after a reset, and the
//! top of the stack is always the page currently on screen.

use folio_types::SectionKey;

/// A navigable page of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The root sentinel shown on startup and after `home`.
    Welcome,
    About,
    Timeline,
    Skills,
    Contact,
    Projects,
}

impl Page {
    /// The content section backing this page, if it is section-backed.
    ///
    /// `Welcome` and `Projects` render from other sources.
    pub fn section(&self) -> Option<SectionKey> {
        match self {
            Page::About => Some(SectionKey::About),
            Page::Timeline => Some(SectionKey::Timeline),
            Page::Skills => Some(SectionKey::Skills),
            Page::Contact => Some(SectionKey::Contact),
            Page::Welcome | Page::Projects => None,
        }
    }
}

/// Result of a `back` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The stack only held the root; nothing was popped.
    NoPreviousPage,
    /// The top was popped; the contained page is the new top and should be
    /// re-displayed through a path that does not record it again.
    Returned(Page),
}

/// Ordered record of visited pages.
///
/// Pushing does not deduplicate: visiting the same page twice stores two
/// entries. Replaying a page after `back` must go through a display-only
/// path so the stack length stays what `back` left it at.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack {
    pages: Vec<Page>,
}

impl NavigationStack {
    /// Creates a stack holding only the root page.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::Welcome],
        }
    }

    /// Records a newly displayed page.
    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Replaces the stack with the single root entry.
    pub fn reset(&mut self) {
        self.pages.clear();
        self.pages.push(Page::Welcome);
    }

    /// The page currently on screen.
    pub fn current(&self) -> Page {
        // The vector is never empty: new() and reset() both seed the root,
        // and back() refuses to pop the last entry.
        *self.pages.last().unwrap_or(&Page::Welcome)
    }

    /// Number of recorded pages, root included.
    pub fn depth(&self) -> usize {
        self.pages.len()
    }

    /// Pops the current page and returns the one below it.
    ///
    /// Fails soft: with only the root on the stack this mutates nothing and
    /// reports `NoPreviousPage`.
    pub fn back(&mut self) -> BackOutcome {
        if self.pages.len() <= 1 {
            return BackOutcome::NoPreviousPage;
        }
        self.pages.pop();
        BackOutcome::Returned(self.current())
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}
