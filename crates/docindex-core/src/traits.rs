use crate::error::{Error, Result};
use crate::types::{Category, IndexEntry};

/// Read-only query surface over an ordered set of index entries.
///
/// Only `entries` is required. The provided methods are linear scans that
/// preserve source order; implementors with a location map should override
/// `find_by_location`.
pub trait EntrySource: Send + Sync {
    fn entries(&self) -> &[IndexEntry];

    fn find_by_location(&self, location: &str) -> Result<&IndexEntry> {
        self.entries()
            .iter()
            .find(|e| e.location == location)
            .ok_or_else(|| Error::NotFound(location.to_string()))
    }

    fn filter_by_category(&self, category: Category) -> Vec<&IndexEntry> {
        self.entries().iter().filter(|e| e.category == category).collect()
    }

    fn text_search(&self, query: &str) -> Vec<&IndexEntry> {
        let needle = query.to_lowercase();
        self.entries().iter().filter(|e| e.matches_lowercase(&needle)).collect()
    }

    /// Distinct page titles in first-appearance order.
    fn pages(&self) -> Vec<&str> {
        let mut pages: Vec<&str> = Vec::new();
        for e in self.entries() {
            if !pages.contains(&e.page.as_str()) {
                pages.push(&e.page);
            }
        }
        pages
    }
}

impl EntrySource for Vec<IndexEntry> {
    fn entries(&self) -> &[IndexEntry] {
        self
    }
}
