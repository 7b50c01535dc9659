//! phonebook-core: contact book storage, persistence and command dispatch.
//!
//! The book is a plain value owned by the caller and passed to every
//! operation; there is no global state.
//!
//! ```
//! use phonebook_core::{ContactBook, StoreError, codec};
//!
//! let mut book = ContactBook::new();
//! book.add("Alice", "555-0100").unwrap();
//! assert_eq!(book.add("Alice", "555-0199"), Err(StoreError::AlreadyExists));
//!
//! let mut bytes = Vec::new();
//! codec::write(&book, &mut bytes).unwrap();
//! assert_eq!(bytes, b"Alice,555-0100\n");
//! ```

pub mod codec;
pub mod config;
pub mod contact;
pub mod display;
pub mod execution;
pub mod input;
pub mod output;

pub use config::{Config, ConfigError};
pub use contact::{Contact, ContactBook, StoreError, StoreOutcome, StoreResult};
pub use execution::{CommandEffect, execute_command};
pub use input::Command;
pub use output::{CommandEvent, OutputSink};
