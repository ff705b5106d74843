use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::warn;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Context, Event, EventContext, EventHandler, Helper, KeyCode,
    KeyEvent, Modifiers, Movement, RepeatCount,
};
use rustyline::Editor;
use tokio::sync::mpsc;

use folio_core::Session;
use folio_core::command::Command;
use folio_core::history::Recall;
use folio_infrastructure::{ContentSource, PortfolioDocument, TomlContentSource};
use folio_types::{LineStyle, RenderInstruction};

const PROMPT: &str = "visitor@folio:~$ ";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "folio - a terminal-style portfolio", long_about = None)]
struct Cli {
    /// Path to the portfolio content document
    /// (defaults to ~/.config/folio/portfolio.toml)
    #[arg(long)]
    content: Option<PathBuf>,

    /// Run with the built-in sample content instead of loading a file
    #[arg(long)]
    sample: bool,
}

/// Result of the one-shot background content load.
enum LoadEvent {
    Loaded(PortfolioDocument),
    Failed(String),
}

/// Which way an arrow key walks the session's input history.
#[derive(Clone, Copy)]
enum RecallDirection {
    Older,
    Newer,
}

/// Maps one recall step onto an edit of the readline buffer.
fn recall_cmd(session: &Mutex<Session>, direction: RecallDirection) -> Cmd {
    let mut session = session.lock().expect("session lock");
    let recall = match direction {
        RecallDirection::Older => session.recall_older(),
        RecallDirection::Newer => session.recall_newer(),
    };
    match recall {
        Recall::Replace(line) => Cmd::Replace(Movement::WholeBuffer, Some(line)),
        Recall::Clear => Cmd::Kill(Movement::WholeBuffer),
        Recall::Keep => Cmd::Noop,
    }
}

/// Routes Arrow-Up/Arrow-Down through the session's recall cursor instead
/// of rustyline's own history, so the line buffer always mirrors what the
/// session thinks is being recalled.
struct RecallHandler {
    session: Arc<Mutex<Session>>,
    direction: RecallDirection,
}

impl ConditionalEventHandler for RecallHandler {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        _ctx: &EventContext,
    ) -> Option<Cmd> {
        Some(recall_cmd(&self.session, self.direction))
    }
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: Command::ALL
                .into_iter()
                .map(|command| command.name().to_string())
                .collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.is_empty() || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates: Vec<Pair> = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if Command::parse(line.trim()).is_some() {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Carries out the session's render instructions on the terminal.
fn render(instructions: &[RenderInstruction]) {
    for instruction in instructions {
        match instruction {
            RenderInstruction::AppendLine { text, style } => match style {
                LineStyle::Output => println!("{text}"),
                LineStyle::Info => println!("{}", text.bright_black()),
                LineStyle::Error => println!("{}", text.red()),
                LineStyle::Title => println!("{}", text.bright_magenta().bold()),
            },
            RenderInstruction::ClearAll => {
                // ANSI: clear screen, cursor to top-left
                print!("\x1B[2J\x1B[1;1H");
            }
            RenderInstruction::NavigateTo(target) => {
                println!("{}", format!("Opening {target} ...").bright_blue());
            }
        }
    }
}

/// Applies any completed load events to the session.
///
/// Called on the input-handling path only, so the session sees the loaded
/// data strictly between dispatches.
fn drain_load_events(session: &Mutex<Session>, load_rx: &mut mpsc::Receiver<LoadEvent>) {
    while let Ok(event) = load_rx.try_recv() {
        let mut session = session.lock().expect("session lock");
        match event {
            LoadEvent::Loaded(document) => {
                session.sections_loaded(document.content);
                session.projects_loaded(document.projects);
            }
            LoadEvent::Failed(reason) => {
                warn!("content load failed: {reason}");
                render(&session.load_failed());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let session = Arc::new(Mutex::new(Session::new()));

    // One-shot background load; the result is consumed on the input path.
    // Load problems are never fatal: the session comes up in degraded mode.
    let (load_tx, mut load_rx) = mpsc::channel::<LoadEvent>(1);
    if cli.sample {
        let _ = load_tx.send(LoadEvent::Loaded(PortfolioDocument::sample())).await;
    } else {
        let source = match cli.content {
            Some(path) => Ok(TomlContentSource::with_path(path)),
            None => TomlContentSource::new(),
        };
        match source {
            Ok(source) => {
                tokio::spawn(async move {
                    let event = match source.load().await {
                        Ok(document) => LoadEvent::Loaded(document),
                        Err(err) => LoadEvent::Failed(err.to_string()),
                    };
                    let _ = load_tx.send(event).await;
                });
            }
            Err(err) => {
                let _ = load_tx.send(LoadEvent::Failed(err.to_string())).await;
            }
        }
    }

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));
    rl.bind_sequence(
        KeyEvent(KeyCode::Up, Modifiers::NONE),
        EventHandler::Conditional(Box::new(RecallHandler {
            session: Arc::clone(&session),
            direction: RecallDirection::Older,
        })),
    );
    rl.bind_sequence(
        KeyEvent(KeyCode::Down, Modifiers::NONE),
        EventHandler::Conditional(Box::new(RecallHandler {
            session: Arc::clone(&session),
            direction: RecallDirection::Newer,
        })),
    );

    render(&session.lock().expect("session lock").welcome_screen());
    println!("{}", "Type 'quit' to leave.".bright_black());

    loop {
        drain_load_events(&session, &mut load_rx);

        let readline = rl.readline(PROMPT);
        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Leaving the terminal is a host concern, not a session command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                // Pick up a load that finished while we waited for input
                drain_load_events(&session, &mut load_rx);

                let instructions = session.lock().expect("session lock").submit(&line);
                render(&instructions);
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::SECTIONS_NOT_LOADED;

    fn text_of(instructions: &[RenderInstruction]) -> String {
        instructions
            .iter()
            .filter_map(|instruction| match instruction {
                RenderInstruction::AppendLine { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_arrow_recall_edits_line_buffer() {
        let session = Mutex::new(Session::new());
        session.lock().unwrap().submit("skills");
        session.lock().unwrap().submit("about");

        assert_eq!(
            recall_cmd(&session, RecallDirection::Older),
            Cmd::Replace(Movement::WholeBuffer, Some("about".to_string()))
        );
        assert_eq!(
            recall_cmd(&session, RecallDirection::Older),
            Cmd::Replace(Movement::WholeBuffer, Some("skills".to_string()))
        );
        // Clamped at the oldest entry: the buffer is left alone
        assert_eq!(recall_cmd(&session, RecallDirection::Older), Cmd::Noop);

        assert_eq!(
            recall_cmd(&session, RecallDirection::Newer),
            Cmd::Replace(Movement::WholeBuffer, Some("about".to_string()))
        );
        // Stepping past the newest entry clears the buffer
        assert_eq!(
            recall_cmd(&session, RecallDirection::Newer),
            Cmd::Kill(Movement::WholeBuffer)
        );
        assert_eq!(recall_cmd(&session, RecallDirection::Newer), Cmd::Noop);
    }

    #[tokio::test]
    async fn test_loaded_event_populates_session() {
        let session = Mutex::new(Session::new());
        let (tx, mut rx) = mpsc::channel(1);
        tx.send(LoadEvent::Loaded(PortfolioDocument::sample()))
            .await
            .unwrap();

        drain_load_events(&session, &mut rx);

        let out = session.lock().unwrap().submit("about");
        assert_ne!(text_of(&out), SECTIONS_NOT_LOADED);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_session_in_degraded_mode() {
        let session = Mutex::new(Session::new());
        let (tx, mut rx) = mpsc::channel(1);
        tx.send(LoadEvent::Failed("cannot find config directory".to_string()))
            .await
            .unwrap();

        drain_load_events(&session, &mut rx);

        // Degraded but available: commands still answer with the fallback
        let out = session.lock().unwrap().submit("about");
        assert_eq!(text_of(&out), SECTIONS_NOT_LOADED);
    }
}
