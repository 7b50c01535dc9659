//! In-memory contact book: name → phone, keyed by trimmed name.
//!
//! Mutations never panic on bad input. Each returns a [`StoreOutcome`] on
//! success or a [`StoreError`] describing why nothing changed; both render the
//! user-facing message through `Display`.

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// A single name/phone pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Expected validation failures of the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Name cannot be empty.")]
    EmptyName,
    #[error("Contact already exists. Use update to change phone.")]
    AlreadyExists,
    #[error("Contact not found.")]
    NotFound,
}

/// Successful mutation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    Added,
    Updated,
    Deleted,
}

impl StoreOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOutcome::Added => "Added.",
            StoreOutcome::Updated => "Updated.",
            StoreOutcome::Deleted => "Deleted.",
        }
    }
}

impl fmt::Display for StoreOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type StoreResult = Result<StoreOutcome, StoreError>;

/// Mapping from contact name to phone number.
///
/// Iteration follows insertion order. A name's position is kept when its
/// phone is overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    entries: IndexMap<String, String>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed demonstration set used by "load sample contacts".
    pub fn sample() -> Self {
        [
            ("Anika", "9876543210"),
            ("Bharat", "9123456780"),
            ("Charu", "9988776655"),
        ]
        .into_iter()
        .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Phone for an exact (already trimmed) name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Iterate `(name, phone)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }

    /// Insert or overwrite without validation.
    ///
    /// Used by the codec, which has already trimmed and filtered its input.
    pub(crate) fn upsert(&mut self, name: String, phone: String) {
        self.entries.insert(name, phone);
    }

    pub fn add(&mut self, name: &str, phone: &str) -> StoreResult {
        let key = name.trim();
        if key.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.entries.contains_key(key) {
            return Err(StoreError::AlreadyExists);
        }
        self.entries.insert(key.to_string(), phone.trim().to_string());
        Ok(StoreOutcome::Added)
    }

    pub fn update(&mut self, name: &str, phone: &str) -> StoreResult {
        let key = name.trim();
        if key.is_empty() {
            return Err(StoreError::EmptyName);
        }
        match self.entries.get_mut(key) {
            Some(existing) => {
                *existing = phone.trim().to_string();
                Ok(StoreOutcome::Updated)
            }
            None => Err(StoreError::NotFound),
        }
    }

    pub fn delete(&mut self, name: &str) -> StoreResult {
        self.entries
            .shift_remove(name.trim())
            .map(|_| StoreOutcome::Deleted)
            .ok_or(StoreError::NotFound)
    }

    /// Case-insensitive substring search over names.
    ///
    /// A blank query matches nothing. Results keep storage order.
    pub fn search(&self, query: &str) -> Vec<Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, phone)| Contact::new(name, phone))
            .collect()
    }

    /// All contacts ordered by lower-cased name.
    pub fn sorted(&self) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = self
            .iter()
            .map(|(name, phone)| Contact::new(name, phone))
            .collect();
        contacts.sort_by_cached_key(|c| c.name.to_lowercase());
        contacts
    }
}

/// Collects with load semantics: names and phones are trimmed, blank names
/// are dropped and later duplicates overwrite earlier ones.
impl<N: AsRef<str>, P: AsRef<str>> FromIterator<(N, P)> for ContactBook {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut book = Self::new();
        for (name, phone) in iter {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            book.upsert(name.to_string(), phone.as_ref().trim().to_string());
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_add_trims_name_and_phone() {
        let mut book = ContactBook::new();
        assert_eq!(book.add("  Alice ", " 555-1234 "), Ok(StoreOutcome::Added));
        assert_eq!(book.get("Alice"), Some("555-1234"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut book = ContactBook::new();
        assert_eq!(book.add("   ", "123"), Err(StoreError::EmptyName));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_duplicate_keeps_original_phone() {
        let mut book = ContactBook::new();
        book.add("Alice", "1").unwrap();
        assert_eq!(book.add(" Alice", "2"), Err(StoreError::AlreadyExists));
        assert_eq!(book.get("Alice"), Some("1"));
    }

    #[test]
    fn test_add_allows_empty_phone() {
        let mut book = ContactBook::new();
        assert!(book.add("Alice", "   ").is_ok());
        assert_eq!(book.get("Alice"), Some(""));
    }

    #[test]
    fn test_update_existing() {
        let mut book = ContactBook::new();
        book.add("Alice", "1").unwrap();
        assert_eq!(book.update("Alice ", " 2 "), Ok(StoreOutcome::Updated));
        assert_eq!(book.get("Alice"), Some("2"));
    }

    #[test]
    fn test_update_missing_leaves_book_unchanged() {
        let mut book = ContactBook::sample();
        let before = book.clone();
        assert_eq!(book.update("Zed", "0"), Err(StoreError::NotFound));
        assert_eq!(book, before);
    }

    #[test]
    fn test_update_blank_name() {
        let mut book = ContactBook::sample();
        assert_eq!(book.update("", "0"), Err(StoreError::EmptyName));
    }

    #[test]
    fn test_delete_twice() {
        let mut book = ContactBook::sample();
        assert_eq!(book.delete(" Bharat "), Ok(StoreOutcome::Deleted));
        assert_eq!(book.delete("Bharat"), Err(StoreError::NotFound));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_delete_blank_name_is_not_found() {
        let mut book = ContactBook::sample();
        assert_eq!(book.delete("  "), Err(StoreError::NotFound));
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut book = ContactBook::sample();
        book.delete("Anika").unwrap();
        let names: Vec<&str> = book.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Bharat", "Charu"]);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let book: ContactBook = [("Alice", "1"), ("Malik", "2"), ("Bob", "3")]
            .into_iter()
            .collect();
        let hits = book.search("  LI ");
        assert_eq!(
            hits,
            vec![Contact::new("Alice", "1"), Contact::new("Malik", "2")]
        );
    }

    #[test]
    fn test_search_blank_query_is_empty() {
        let book = ContactBook::sample();
        assert!(book.search("").is_empty());
        assert!(book.search("   ").is_empty());
    }

    #[test]
    fn test_sorted_is_case_insensitive() {
        let book: ContactBook = [("bob", "1"), ("Alice", "2"), ("carol", "3")]
            .into_iter()
            .collect();
        let names: Vec<String> = book.sorted().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alice", "bob", "carol"]);
    }

    #[test]
    fn test_sample_contents() {
        let book = ContactBook::sample();
        assert_eq!(book.len(), 3);
        assert_eq!(book.get("Anika"), Some("9876543210"));
        assert_eq!(book.get("Bharat"), Some("9123456780"));
        assert_eq!(book.get("Charu"), Some("9988776655"));
    }

    #[test]
    fn test_collect_trims_and_drops_blank_names() {
        let book: ContactBook = [("", "1"), ("  Bob  ", " 2 "), ("   ", "3")]
            .into_iter()
            .collect();
        let expected: ContactBook = [("Bob", "2")].into_iter().collect();
        assert_eq!(book, expected);
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Bob"), Some("2"));
        assert_eq!(book.get(""), None);
    }

    #[test]
    fn test_collect_last_duplicate_wins() {
        let book: ContactBook = [("Alice", "1"), (" Alice", "2")].into_iter().collect();
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("Alice"), Some("2"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::EmptyName.to_string(), "Name cannot be empty.");
        assert_eq!(StoreError::NotFound.to_string(), "Contact not found.");
        assert_eq!(StoreOutcome::Deleted.to_string(), "Deleted.");
    }

    proptest! {
        #[test]
        fn prop_add_then_exact_search_finds_one(
            name in "[A-Za-z][A-Za-z0-9 ]{0,15}[A-Za-z0-9]",
            phone in "[0-9+-]{1,12}",
        ) {
            let mut book = ContactBook::new();
            prop_assert!(book.add(&name, &phone).is_ok());
            let hits = book.search(&name);
            prop_assert_eq!(hits, vec![Contact::new(name.clone(), phone.clone())]);
        }

        #[test]
        fn prop_blank_search_is_always_empty(
            names in proptest::collection::vec("[a-z]{1,8}", 0..10),
        ) {
            let book: ContactBook = names.iter().map(|n| (n.as_str(), "1")).collect();
            prop_assert!(book.search("").is_empty());
        }
    }
}
