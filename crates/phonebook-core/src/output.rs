use std::path::PathBuf;

/// Diagnostic events emitted alongside command results.
///
/// Core emits all variants unconditionally; front-ends decide whether to show
/// them (the CLI only does so in verbose mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Contacts file read at startup.
    BookLoaded { path: PathBuf, count: usize },
    /// Contacts written to disk.
    BookSaved { path: PathBuf, count: usize },
    /// In-memory book replaced by the sample set.
    SampleLoaded { discarded: usize },
}

/// Abstraction over how command results and diagnostics are presented.
///
/// Every command emits exactly one result through [`OutputSink::emit_result`].
pub trait OutputSink {
    /// Emit a result string (the primary output of a command).
    fn emit_result(&self, content: &str);

    /// Emit a typed diagnostic event. Sinks filter and format as appropriate.
    fn emit_event(&self, event: CommandEvent);
}

/// A capturing output sink for tests: collects results and events for assertions.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct CaptureSink {
    pub results: std::cell::RefCell<Vec<String>>,
    pub events: std::cell::RefCell<Vec<CommandEvent>>,
}

#[cfg(test)]
impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single result emitted so far; panics if there isn't exactly one.
    pub fn only_result(&self) -> String {
        let results = self.results.borrow();
        assert_eq!(results.len(), 1, "expected one result, got {:?}", results);
        results[0].clone()
    }
}

#[cfg(test)]
impl OutputSink for CaptureSink {
    fn emit_result(&self, content: &str) {
        self.results.borrow_mut().push(content.to_string());
    }

    fn emit_event(&self, event: CommandEvent) {
        self.events.borrow_mut().push(event);
    }
}
