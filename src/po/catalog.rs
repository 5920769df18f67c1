//! Catalog of parsed translation entries

use std::collections::HashMap;

use crate::error::{Po2LmoError, Result};

/// One msgid/msgstr pair after escape resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Source string (msgid)
    pub key: Vec<u8>,
    /// Translation (msgstr); may be empty
    pub value: Vec<u8>,
    /// 1-based line of the msgid directive
    pub line: usize,
}

impl Entry {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }

    /// Whether this is the catalog header (empty msgid)
    pub fn is_header(&self) -> bool {
        self.key.is_empty()
    }
}

/// Entries in source order, unique by key
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    /// key → position in `entries`
    positions: HashMap<Vec<u8>, usize>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, rejecting a key that is already present
    pub fn insert(&mut self, entry: Entry) -> Result<()> {
        if let Some(&pos) = self.positions.get(&entry.key) {
            return Err(Po2LmoError::DuplicateKey {
                key: String::from_utf8_lossy(&entry.key).into_owned(),
                first_line: self.entries[pos].line,
                line: entry.line,
            });
        }

        self.positions.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Look up the translation for a key
    pub fn get(&self, key: &[u8]) -> Option<&Entry> {
        self.positions.get(key).map(|&pos| &self.entries[pos])
    }

    /// The header entry (empty msgid), if present
    pub fn header(&self) -> Option<&Entry> {
        self.get(b"")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in source order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
