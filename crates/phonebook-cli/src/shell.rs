//! Interactive menu loop.
//!
//! Reads a numbered choice, prompts for whatever text that action needs,
//! builds a [`Command`] and hands it to core. Generic over the input and
//! prompt streams so tests can drive it with in-memory buffers.

use phonebook_core::{Command, CommandEffect, Config, ContactBook, OutputSink, execute_command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Enter 1-8.";

/// The eight numbered menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Delete,
    Search,
    DisplayAll,
    Save,
    LoadSample,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::DisplayAll,
        MenuChoice::Save,
        MenuChoice::LoadSample,
        MenuChoice::Quit,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Update),
            "3" => Some(MenuChoice::Delete),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::DisplayAll),
            "6" => Some(MenuChoice::Save),
            "7" => Some(MenuChoice::LoadSample),
            "8" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add contact",
            MenuChoice::Update => "Update contact",
            MenuChoice::Delete => "Delete contact",
            MenuChoice::Search => "Search contacts",
            MenuChoice::DisplayAll => "Display all",
            MenuChoice::Save => "Save contacts",
            MenuChoice::LoadSample => "Load sample contacts (demo)",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// The interactive session: input lines from `input`, menu and prompts to `prompts`.
pub struct Shell<'a, R, W> {
    input: R,
    prompts: W,
    output: &'a dyn OutputSink,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, prompts: W, output: &'a dyn OutputSink) -> Self {
        Self {
            input,
            prompts,
            output,
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// End of input counts as quitting without saving.
    pub fn run(&mut self, book: &mut ContactBook, config: &Config) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose (1-8): ")? else {
                return self.finish_at_eof(book, config);
            };
            let Some(choice) = MenuChoice::parse(&line) else {
                self.output.emit_result(INVALID_CHOICE_MESSAGE);
                continue;
            };
            let Some(command) = self.gather(choice, config)? else {
                return self.finish_at_eof(book, config);
            };
            log::debug!("executing {:?}", command);
            if execute_command(book, &command, config, self.output) == CommandEffect::Exit {
                return Ok(());
            }
        }
    }

    fn finish_at_eof(&mut self, book: &mut ContactBook, config: &Config) -> io::Result<()> {
        log::debug!("end of input, leaving without saving");
        writeln!(self.prompts)?;
        execute_command(book, &Command::Quit { save: false }, config, self.output);
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.prompts)?;
        writeln!(self.prompts, "Contact Manager")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.prompts, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Show `text` and read one line, without its terminator. `None` at EOF.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.prompts, "{}", text)?;
        self.prompts.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Collect the free text a menu choice needs. `None` if input ran out.
    fn gather(&mut self, choice: MenuChoice, config: &Config) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Add => {
                let Some(name) = self.prompt("Name: ")? else {
                    return Ok(None);
                };
                let Some(phone) = self.prompt("Phone: ")? else {
                    return Ok(None);
                };
                Command::Add { name, phone }
            }
            MenuChoice::Update => {
                let Some(name) = self.prompt("Name to update: ")? else {
                    return Ok(None);
                };
                let Some(phone) = self.prompt("New phone: ")? else {
                    return Ok(None);
                };
                Command::Update { name, phone }
            }
            MenuChoice::Delete => {
                let Some(name) = self.prompt("Name to delete: ")? else {
                    return Ok(None);
                };
                Command::Delete { name }
            }
            MenuChoice::Search => {
                let Some(query) = self.prompt("Search query (part of name): ")? else {
                    return Ok(None);
                };
                Command::Search { query }
            }
            MenuChoice::DisplayAll => Command::List,
            MenuChoice::Save => {
                let text = format!(
                    "Filename to save [{}]: ",
                    config.default_file.display()
                );
                let Some(answer) = self.prompt(&text)? else {
                    return Ok(None);
                };
                let answer = answer.trim();
                Command::Save {
                    path: (!answer.is_empty()).then(|| PathBuf::from(answer)),
                }
            }
            MenuChoice::LoadSample => Command::LoadSample,
            MenuChoice::Quit => {
                let Some(answer) = self.prompt("Save before exit? (y/n): ")? else {
                    return Ok(None);
                };
                Command::Quit {
                    save: answer.trim().eq_ignore_ascii_case("y"),
                }
            }
        };
        Ok(Some(command))
    }
}
