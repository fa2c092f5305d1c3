//! Domain types of a documentation search index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of documentation fragment an entry points at.
///
/// Serialized as the lowercase tag the site generator writes
/// (`"page"`, `"section"`, `"function"`, `"type"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
    Function,
    Type,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Page, Category::Section, Category::Function, Category::Type];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
            Category::Function => "function",
            Category::Type => "type",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// One record of the search index.
///
/// - `location`: page path plus optional anchor, e.g. `"dev/#Mandatory-methods-1"`
/// - `page`: display title of the containing page
/// - `title`: display title of this entry (equals `page` for page-level text)
/// - `text`: rendered prose or signature text, possibly empty
/// - `category`: fragment kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexEntry {
    pub location: String,
    pub page: String,
    pub title: String,
    pub text: String,
    pub category: Category,
}

impl IndexEntry {
    /// Page path without the anchor: `"dev/"` for `"dev/#Mandatory-methods-1"`.
    pub fn page_path(&self) -> &str {
        match self.location.split_once('#') {
            Some((path, _)) => path,
            None => &self.location,
        }
    }

    /// In-page anchor, `None` for page-level locations such as `"dev/#"`.
    pub fn anchor(&self) -> Option<&str> {
        self.location
            .split_once('#')
            .map(|(_, anchor)| anchor)
            .filter(|anchor| !anchor.is_empty())
    }

    /// Case-insensitive containment over `title` and `text`.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.text.to_lowercase().contains(needle)
    }
}
