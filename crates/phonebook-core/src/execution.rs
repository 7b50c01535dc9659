//! Command dispatch for phonebook front-ends.
//!
//! [`execute_command()`] routes each [`Command`] variant to one handler. Each
//! handler emits exactly one result through the [`OutputSink`] and reports
//! whether the session should continue.

use std::path::Path;

use crate::codec;
use crate::config::Config;
use crate::contact::{ContactBook, StoreResult};
use crate::display;
use crate::input::Command;
use crate::output::{CommandEvent, OutputSink};

pub const NO_MATCHES_MESSAGE: &str = "No matches.";
pub const SAVE_FAILED_MESSAGE: &str = "Save failed.";
pub const SAMPLE_LOADED_MESSAGE: &str = "Sample contacts loaded.";
pub const GOODBYE_MESSAGE: &str = "Goodbye.";

/// What the front-end should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    /// Keep reading commands.
    Continue,
    /// The session is over.
    Exit,
}

/// Execute a single command against `book`.
///
/// Never fails: store validation errors and I/O failures are reported to the
/// user as messages.
pub fn execute_command(
    book: &mut ContactBook,
    command: &Command,
    config: &Config,
    output: &dyn OutputSink,
) -> CommandEffect {
    match command {
        Command::Add { name, phone } => {
            emit_store_result(book.add(name, phone), output);
        }
        Command::Update { name, phone } => {
            emit_store_result(book.update(name, phone), output);
        }
        Command::Delete { name } => {
            emit_store_result(book.delete(name), output);
        }
        Command::Search { query } => {
            let hits = book.search(query);
            if hits.is_empty() {
                output.emit_result(NO_MATCHES_MESSAGE);
            } else {
                output.emit_result(&display::render_rows(&hits, config.name_width));
            }
        }
        Command::List => {
            let listing = display::render_list(book, config.name_width);
            output.emit_result(&format!("\nAll contacts:\n{}", listing));
        }
        Command::Save { path } => {
            let path = path
                .as_deref()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(&config.default_file);
            if save_book(book, path, output) {
                output.emit_result(&format!("Saved to {}", path.display()));
            } else {
                output.emit_result(SAVE_FAILED_MESSAGE);
            }
        }
        Command::LoadSample => {
            let discarded = book.len();
            *book = ContactBook::sample();
            output.emit_event(CommandEvent::SampleLoaded { discarded });
            output.emit_result(SAMPLE_LOADED_MESSAGE);
        }
        Command::Quit { save } => {
            let mut farewell = String::new();
            if *save {
                if save_book(book, &config.default_file, output) {
                    farewell.push_str("Saved.\n");
                } else {
                    farewell.push_str(SAVE_FAILED_MESSAGE);
                    farewell.push('\n');
                }
            }
            farewell.push_str(GOODBYE_MESSAGE);
            output.emit_result(&farewell);
            return CommandEffect::Exit;
        }
    }
    CommandEffect::Continue
}

fn emit_store_result(result: StoreResult, output: &dyn OutputSink) {
    match result {
        Ok(outcome) => output.emit_result(outcome.as_str()),
        Err(e) => output.emit_result(&e.to_string()),
    }
}

fn save_book(book: &ContactBook, path: &Path, output: &dyn OutputSink) -> bool {
    let saved = codec::save(book, path);
    if saved {
        output.emit_event(CommandEvent::BookSaved {
            path: path.to_path_buf(),
            count: book.len(),
        });
    }
    saved
}
