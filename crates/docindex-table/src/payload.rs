//! Wire form of the index: `{"docs": [...]}`, optionally wrapped as
//! `var documenterSearchIndex = {...}` the way the site generator writes
//! `search_index.js`.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use docindex_core::error::{Error, Result};
use docindex_core::types::IndexEntry;

pub const SCRIPT_VARIABLE: &str = "documenterSearchIndex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    Json,
    Script,
}

impl PayloadFormat {
    /// `.js` files get the script wrapper, everything else is plain JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("js") => PayloadFormat::Script,
            _ => PayloadFormat::Json,
        }
    }
}

#[derive(Serialize)]
struct PayloadRef<'a> {
    docs: &'a [IndexEntry],
}

/// Strip a leading `var <name> =` and a trailing `;` if present.
fn strip_script_wrapper(input: &str) -> &str {
    let trimmed = input.trim();
    let body = match trimmed.strip_prefix("var ") {
        Some(rest) => match rest.split_once('=') {
            Some((name, body)) if is_identifier(name.trim()) => body,
            _ => trimmed,
        },
        None => trimmed,
    };
    body.trim().trim_end_matches(';').trim_end()
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Decode every record of a payload in source order.
///
/// Records are decoded one at a time so a failure names the offending
/// zero-based record index. Unknown record fields are ignored.
pub fn decode_records(input: &str) -> Result<Vec<IndexEntry>> {
    let root: Value = serde_json::from_str(strip_script_wrapper(input))
        .map_err(|e| Error::Payload(format!("invalid JSON: {}", e)))?;
    let docs = match root {
        Value::Object(mut map) => map
            .remove("docs")
            .ok_or_else(|| Error::Payload("missing 'docs' field".to_string()))?,
        _ => return Err(Error::Payload("top-level value is not an object".to_string())),
    };
    let Value::Array(records) = docs else {
        return Err(Error::Payload("'docs' is not an array".to_string()));
    };
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<IndexEntry>(record).map_err(|e| Error::Parse { index, reason: e.to_string() })
        })
        .collect()
}

pub fn encode(entries: &[IndexEntry], format: PayloadFormat) -> Result<String> {
    let json = serde_json::to_string(&PayloadRef { docs: entries })
        .map_err(|e| Error::Payload(format!("failed to serialize: {}", e)))?;
    Ok(match format {
        PayloadFormat::Json => json,
        PayloadFormat::Script => format!("var {} = {}\n", SCRIPT_VARIABLE, json),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_is_stripped_only_for_assignments() {
        assert_eq!(strip_script_wrapper("var documenterSearchIndex = {\"docs\":[]};\n"), "{\"docs\":[]}");
        assert_eq!(strip_script_wrapper("  {\"docs\":[]}  "), "{\"docs\":[]}");
        assert_eq!(strip_script_wrapper("var 1x = {}"), "var 1x = {}");
    }

    #[test]
    fn record_errors_carry_their_index() {
        let input = r##"{"docs":[
            {"location":"#a","page":"P","title":"A","text":"","category":"section"},
            {"location":"#b","page":"P","text":"","category":"section"}
        ]}"##;
        match decode_records(input) {
            Err(Error::Parse { index, reason }) => {
                assert_eq!(index, 1);
                assert!(reason.contains("title"), "{}", reason);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn top_level_shape_is_checked() {
        assert!(matches!(decode_records("[]"), Err(Error::Payload(_))));
        assert!(matches!(decode_records("{\"pages\":[]}"), Err(Error::Payload(_))));
        assert!(matches!(decode_records("{\"docs\":{}}"), Err(Error::Payload(_))));
        assert!(matches!(decode_records("var x = "), Err(Error::Payload(_))));
    }
}
