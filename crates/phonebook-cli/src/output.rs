//! Output handling for the CLI.
//!
//! `OutputHandler` writes command results to stdout and, in verbose mode,
//! diagnostic events to stderr.

use phonebook_core::{CommandEvent, OutputSink};

/// CLI output handler: text to stdout, diagnostics to stderr.
#[derive(Default)]
pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

/// Human-readable form of a diagnostic event.
fn describe(event: &CommandEvent) -> String {
    match event {
        CommandEvent::BookLoaded { path, count } => {
            format!("[Loaded {} contact(s) from {}]", count, path.display())
        }
        CommandEvent::BookSaved { path, count } => {
            format!("[Wrote {} contact(s) to {}]", count, path.display())
        }
        CommandEvent::SampleLoaded { discarded } => {
            format!("[Replaced {} contact(s) with sample data]", discarded)
        }
    }
}

impl OutputSink for OutputHandler {
    fn emit_result(&self, content: &str) {
        println!("{}", content);
    }

    fn emit_event(&self, event: CommandEvent) {
        if self.verbose {
            eprintln!("{}", describe(&event));
        }
    }
}
