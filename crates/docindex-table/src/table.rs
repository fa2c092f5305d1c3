use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use docindex_core::config::{DuplicatePolicy, Settings};
use docindex_core::error::{Error, Result};
use docindex_core::traits::EntrySource;
use docindex_core::types::IndexEntry;

use crate::payload::{self, PayloadFormat};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub duplicates: DuplicatePolicy,
}

impl From<&Settings> for LoadOptions {
    fn from(settings: &Settings) -> Self {
        Self { duplicates: settings.index.duplicates }
    }
}

/// Immutable, ordered table of index entries with unique locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTable {
    entries: Vec<IndexEntry>,
    by_location: HashMap<String, usize>,
}

impl DocTable {
    /// Build a table from records in source order, applying `policy` to
    /// records that repeat an earlier location.
    pub fn from_records(records: Vec<IndexEntry>, policy: DuplicatePolicy) -> Result<Self> {
        let raw = records.len();
        let mut entries: Vec<IndexEntry> = Vec::with_capacity(raw);
        let mut by_location: HashMap<String, usize> = HashMap::with_capacity(raw);
        let mut merged = 0usize;

        for (index, record) in records.into_iter().enumerate() {
            let pos = match by_location.get(&record.location).copied() {
                Some(pos) => pos,
                None => {
                    by_location.insert(record.location.clone(), entries.len());
                    entries.push(record);
                    continue;
                }
            };
            match policy {
                DuplicatePolicy::Reject => {
                    return Err(Error::DuplicateLocation { index, location: record.location });
                }
                DuplicatePolicy::Merge => {
                    let first = &mut entries[pos];
                    if first.page != record.page || first.title != record.title || first.category != record.category {
                        return Err(Error::ConflictingDuplicate { index, location: record.location });
                    }
                    if !record.text.is_empty() {
                        if !first.text.is_empty() {
                            first.text.push('\n');
                        }
                        first.text.push_str(&record.text);
                    }
                    merged += 1;
                }
            }
        }

        debug!(raw, entries = entries.len(), merged, "built documentation table");
        Ok(Self { entries, by_location })
    }

    /// Parse a JSON or script-form payload.
    pub fn parse(input: &str, options: &LoadOptions) -> Result<Self> {
        let records = payload::decode_records(input)?;
        Self::from_records(records, options.duplicates)
    }

    pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content, options)?;
        info!(path = %path.display(), entries = table.len(), "loaded search index");
        Ok(table)
    }

    pub fn save(&self, path: &Path, format: PayloadFormat) -> Result<()> {
        fs::write(path, payload::encode(&self.entries, format)?)?;
        info!(path = %path.display(), entries = self.len(), ?format, "saved search index");
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        payload::encode(&self.entries, PayloadFormat::Json)
    }

    pub fn to_script(&self) -> Result<String> {
        payload::encode(&self.entries, PayloadFormat::Script)
    }

    pub fn all_entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    pub fn entries_for_page(&self, page: &str) -> Vec<&IndexEntry> {
        self.entries.iter().filter(|e| e.page == page).collect()
    }
}

impl EntrySource for DocTable {
    fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    fn find_by_location(&self, location: &str) -> Result<&IndexEntry> {
        self.by_location
            .get(location)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| Error::NotFound(location.to_string()))
    }
}

impl<'a> IntoIterator for &'a DocTable {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
