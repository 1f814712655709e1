use std::path::PathBuf;

use serde::Serialize;

/// What the picker reports on stdout with `--json`.
#[derive(Debug, Serialize)]
pub struct PickerOutput {
    pub success: bool,
    pub path: Option<PathBuf>,
}

impl From<Option<PathBuf>> for PickerOutput {
    fn from(path: Option<PathBuf>) -> Self {
        PickerOutput {
            success: path.is_some(),
            path,
        }
    }
}
