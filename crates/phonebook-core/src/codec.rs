//! Line-oriented text persistence for the contact book.
//!
//! One record per line, `name,phone`, split on the first comma only. No
//! header and no escaping: commas inside fields are replaced by spaces on the
//! way out, so names or phones containing commas do not round-trip exactly.

use crate::contact::ContactBook;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Default persistence file, relative to the working directory.
pub const DEFAULT_FILE: &str = "contacts.csv";

/// Decode one line into a trimmed `(name, phone)` pair.
///
/// Returns `None` for blank lines, lines without a comma, and lines whose
/// name is blank.
fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (name, phone) = line.split_once(',')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), phone.trim().to_string()))
}

/// Decode a whole stream. Later duplicates overwrite earlier ones.
pub fn parse<R: BufRead>(reader: R) -> io::Result<ContactBook> {
    let mut book = ContactBook::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Some((name, phone)) => book.upsert(name, phone),
            None if !line.trim().is_empty() => {
                log::debug!("line {}: skipping malformed record", line_num + 1);
            }
            None => {}
        }
    }
    Ok(book)
}

/// Load a book from `path`.
///
/// A missing or unreadable file yields an empty book; this never fails.
pub fn load(path: &Path) -> ContactBook {
    if !path.exists() {
        log::debug!("{}: not found, starting empty", path.display());
        return ContactBook::new();
    }
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("{}: cannot open for reading: {}", path.display(), e);
            return ContactBook::new();
        }
    };
    match parse(BufReader::new(file)) {
        Ok(book) => {
            log::debug!("{}: loaded {} contact(s)", path.display(), book.len());
            book
        }
        Err(e) => {
            log::warn!("{}: read failed, starting empty: {}", path.display(), e);
            ContactBook::new()
        }
    }
}

/// Encode every entry as `name,phone\n`, commas in fields replaced by spaces.
pub fn write<W: Write>(book: &ContactBook, mut writer: W) -> io::Result<()> {
    for (name, phone) in book.iter() {
        writeln!(writer, "{},{}", name.replace(',', " "), phone.replace(',', " "))?;
    }
    writer.flush()
}

/// Save `book` to `path`, truncating any existing file.
///
/// Returns `false` (after logging why) if the file cannot be opened or written.
pub fn save(book: &ContactBook, path: &Path) -> bool {
    let result = File::create(path).and_then(|file| write(book, BufWriter::new(file)));
    match result {
        Ok(()) => {
            log::debug!("{}: saved {} contact(s)", path.display(), book.len());
            true
        }
        Err(e) => {
            log::warn!("{}: save failed: {}", path.display(), e);
            false
        }
    }
}
