//! Step-wise shell dialog protocol.
//!
//! A shell dialog is driven by acquiring four handles in turn: the subsystem
//! context, the dialog object, the selected item and the item's path buffer.
//! Each handle releases itself on drop. [`ShellPicker`] holds them as locals, so
//! whichever step fails, everything acquired so far is released in reverse order.

use std::path::{Path, PathBuf};

use crate::error::DialogError;
use crate::filter::FileTypeFilter;
use crate::picker::Picker;
use crate::request::{DialogKind, DialogOptions, DialogRequest};

#[cfg(windows)]
pub mod windows;

pub trait Shell {
    /// Subsystem context, torn down on drop.
    type Context;
    type Dialog: ShellDialog;

    fn initialize(&self) -> Result<Self::Context, DialogError>;
    fn create_dialog(
        &self,
        context: &Self::Context,
        kind: DialogKind,
    ) -> Result<Self::Dialog, DialogError>;
}

pub trait ShellDialog {
    type Item: ShellItem;

    fn set_options(&mut self, options: DialogOptions) -> Result<(), DialogError>;
    fn set_title(&mut self, title: &str) -> Result<(), DialogError>;
    fn set_file_name(&mut self, name: &Path) -> Result<(), DialogError>;
    fn set_file_types(&mut self, filters: &[FileTypeFilter]) -> Result<(), DialogError>;
    /// Blocks until the user dismisses the dialog. Cancelling must map to
    /// [`DialogError::UserCancelled`].
    fn show(&mut self) -> Result<(), DialogError>;
    fn result(&self) -> Result<Self::Item, DialogError>;
}

pub trait ShellItem {
    type Buffer: PathBuffer;

    fn display_path(&self) -> Result<Self::Buffer, DialogError>;
}

/// Shell-owned path text, freed on drop.
pub trait PathBuffer {
    fn to_path_buf(&self) -> PathBuf;
}

pub struct ShellPicker<S> {
    shell: S,
}

impl<S: Shell> ShellPicker<S> {
    pub fn new(shell: S) -> Self {
        ShellPicker { shell }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }
}

fn warn_on_err(what: &str, res: Result<(), DialogError>) {
    if let Err(err) = res {
        log::warn!("Failed to set dialog {}: {}", what, err);
    }
}

fn configure<D: ShellDialog>(dialog: &mut D, request: &DialogRequest) {
    warn_on_err("options", dialog.set_options(request.operation.options()));
    warn_on_err("title", dialog.set_title(&request.title));
    if let (Some(name), Some(filters)) = (request.file_name(), request.file_types()) {
        warn_on_err("file name", dialog.set_file_name(name));
        warn_on_err("file types", dialog.set_file_types(&filters));
    }
}

impl<S: Shell> Picker for ShellPicker<S> {
    fn pick(&self, request: &DialogRequest) -> Result<PathBuf, DialogError> {
        let context = self.shell.initialize()?;
        let mut dialog = self.shell.create_dialog(&context, request.operation.kind())?;

        configure(&mut dialog, request);

        log::debug!("Showing shell dialog");
        dialog.show()?;
        log::debug!("Shell dialog closed");

        let item = dialog.result()?;
        let buffer = item.display_path()?;
        Ok(buffer.to_path_buf())
    }
}
