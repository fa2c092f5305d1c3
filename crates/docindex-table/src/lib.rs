//! docindex-table
//!
//! Loads a documentation search index (plain JSON or the generator's
//! `search_index.js` script form) into an immutable, location-keyed table.

pub mod discover;
pub mod payload;
pub mod table;

pub use discover::discover_index_files;
pub use payload::PayloadFormat;
pub use table::{DocTable, LoadOptions};
