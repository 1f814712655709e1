use std::path::Path;

use serde::{Deserialize, Serialize};

pub const ANY_SPEC: &str = "*.*";

/// One entry of a save dialog's "Save as type" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeFilter {
    pub name: String,
    pub spec: String,
}

impl FileTypeFilter {
    pub fn new(name: impl Into<String>, spec: impl Into<String>) -> Self {
        FileTypeFilter {
            name: name.into(),
            spec: spec.into(),
        }
    }

    pub fn any() -> Self {
        FileTypeFilter::new("Any", ANY_SPEC)
    }

    /// The extension this filter selects, if it selects one.
    pub fn extension(&self) -> Option<&str> {
        self.spec.strip_prefix("*.").filter(|ext| *ext != "*")
    }
}

/// Filters for a save dialog pre-filled with `path`: the path's own type first,
/// then "Any". Paths without an extension get `*.*` in both slots.
pub fn for_path(path: &Path) -> Vec<FileTypeFilter> {
    let current = match path.extension() {
        Some(ext) if !ext.is_empty() => format!("*.{}", ext.to_string_lossy()),
        _ => ANY_SPEC.to_owned(),
    };

    vec![
        FileTypeFilter::new("Current type", current),
        FileTypeFilter::any(),
    ]
}
