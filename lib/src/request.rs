use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::filter::{self, FileTypeFilter};
use crate::util::Log;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    OpenFile,
    OpenDirectory,
    SaveFile,
}

/// Which shell dialog class backs an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Open,
    Save,
}

/// Behaviour switches handed to the shell dialog before it is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DialogOptions {
    pub pick_folders: bool,
    pub path_must_exist: bool,
    pub file_must_exist: bool,
    pub overwrite_prompt: bool,
}

impl Operation {
    pub fn kind(self) -> DialogKind {
        match self {
            Operation::OpenFile | Operation::OpenDirectory => DialogKind::Open,
            Operation::SaveFile => DialogKind::Save,
        }
    }

    pub fn options(self) -> DialogOptions {
        match self {
            Operation::OpenDirectory => DialogOptions {
                pick_folders: true,
                path_must_exist: true,
                file_must_exist: true,
                ..Default::default()
            },
            Operation::OpenFile => DialogOptions {
                path_must_exist: true,
                file_must_exist: true,
                ..Default::default()
            },
            Operation::SaveFile => DialogOptions {
                overwrite_prompt: true,
                path_must_exist: true,
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        let name = match self {
            Operation::OpenFile => "open file",
            Operation::OpenDirectory => "open directory",
            Operation::SaveFile => "save file",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    pub operation: Operation,
    pub title: String,
    pub suggested_path: Option<PathBuf>,
}

impl DialogRequest {
    pub fn open_directory(title: &str) -> Self {
        DialogRequest {
            operation: Operation::OpenDirectory,
            title: title.to_owned(),
            suggested_path: None,
        }
    }

    pub fn open_file(title: &str) -> Self {
        DialogRequest {
            operation: Operation::OpenFile,
            title: title.to_owned(),
            suggested_path: None,
        }
    }

    pub fn save_file(title: &str, suggested_path: Option<&Path>) -> Self {
        DialogRequest {
            operation: Operation::SaveFile,
            title: title.to_owned(),
            suggested_path: suggested_path.map(Path::to_path_buf),
        }
    }

    /// Name to pre-fill. Only save dialogs are pre-filled, and an empty
    /// suggestion counts as none.
    pub fn file_name(&self) -> Option<&Path> {
        match self.operation {
            Operation::SaveFile => self
                .suggested_path
                .as_deref()
                .filter(|p| !p.as_os_str().is_empty()),
            _ => None,
        }
    }

    pub fn file_types(&self) -> Option<Vec<FileTypeFilter>> {
        self.file_name().map(filter::for_path)
    }
}

impl Log for DialogRequest {
    fn log(&self) {
        log::debug!(
            "Requesting {} dialog “{}”{}",
            self.operation,
            self.title,
            self.file_name()
                .map(|p| format!(", suggesting {:?}", p))
                .unwrap_or_default()
        );
    }
}
