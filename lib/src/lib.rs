//! Native file and directory pickers.
//!
//! Every entry point blocks the calling thread on a modal dialog provided by the
//! operating system shell and hands back the chosen path, or `None` if nothing
//! was picked. Avoid calling these from more than one thread at a time.

pub mod error;
pub mod ffi;
pub mod filter;
pub mod native;
pub mod picker;
pub mod request;
pub mod shell;
pub mod util;

use std::path::{Path, PathBuf};

pub use error::DialogError;
pub use filter::FileTypeFilter;
pub use picker::{default_picker, pick, Picker, Unsupported};
pub use request::{DialogKind, DialogOptions, DialogRequest, Operation};

pub fn open_directory(title: &str) -> Option<PathBuf> {
    pick(&*default_picker(), &DialogRequest::open_directory(title))
}

pub fn open_file(title: &str) -> Option<PathBuf> {
    pick(&*default_picker(), &DialogRequest::open_file(title))
}

/// Asks where to save a file. `suggested_path` pre-fills the name field and
/// decides the "Current type" filter.
pub fn save_file(title: &str, suggested_path: Option<&Path>) -> Option<PathBuf> {
    pick(&*default_picker(), &DialogRequest::save_file(title, suggested_path))
}
