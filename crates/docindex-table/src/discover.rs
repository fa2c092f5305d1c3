use std::path::{Path, PathBuf};

use tracing::debug;

/// File names a documentation build writes its search index to.
pub const INDEX_FILE_NAMES: [&str; 2] = ["search_index.js", "search_index.json"];

/// Every search index file under `root` (one per deployed version or
/// preview build), sorted by path.
pub fn discover_index_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
        let is_index = entry.file_name().to_str().is_some_and(|name| INDEX_FILE_NAMES.contains(&name));
        if is_index {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    debug!(root = %root.display(), found = files.len(), "discovered search index files");
    files
}
