//! Commands accepted by [`crate::execute_command`].
//!
//! Front-ends gather whatever free text a command needs and hand over a fully
//! formed `Command`; validation (trimming, blank names) happens in the store.

use std::path::PathBuf;

/// What operation to perform (one per menu action)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new contact
    Add { name: String, phone: String },
    /// Replace the phone of an existing contact
    Update { name: String, phone: String },
    /// Remove a contact
    Delete { name: String },
    /// Case-insensitive name substring search
    Search { query: String },
    /// Show every contact, sorted
    List,
    /// Write the book out; `None` means the configured default file
    Save { path: Option<PathBuf> },
    /// Replace the book with the built-in sample contacts
    LoadSample,
    /// Leave, optionally saving to the default file first
    Quit { save: bool },
}
