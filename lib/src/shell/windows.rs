//! COM shell dialogs (`IFileOpenDialog` / `IFileSaveDialog`).

use std::{
    ffi::{c_void, OsStr, OsString},
    iter,
    os::windows::ffi::{OsStrExt, OsStringExt},
    path::{Path, PathBuf},
};

use windows::{
    core::{PCWSTR, PWSTR},
    Win32::{
        Foundation::{ERROR_CANCELLED, HWND},
        System::Com::{
            CoCreateInstance, CoInitializeEx, CoTaskMemFree, CoUninitialize, CLSCTX_ALL, COINIT,
            COINIT_APARTMENTTHREADED, COINIT_DISABLE_OLE1DDE,
        },
        UI::Shell::{
            Common::COMDLG_FILTERSPEC, FileOpenDialog, FileSaveDialog, IFileDialog, IShellItem,
            FILEOPENDIALOGOPTIONS, FOS_FILEMUSTEXIST, FOS_OVERWRITEPROMPT, FOS_PATHMUSTEXIST,
            FOS_PICKFOLDERS, SIGDN_FILESYSPATH,
        },
    },
};

use super::{PathBuffer, Shell, ShellDialog, ShellItem};
use crate::{
    error::DialogError,
    filter::FileTypeFilter,
    request::{DialogKind, DialogOptions},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsShell;

/// An initialized COM apartment on the calling thread.
pub struct Apartment(());

impl Drop for Apartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

// COM interface wrappers call Release when dropped.
pub struct Dialog(IFileDialog);
pub struct Item(IShellItem);

/// A string allocated by the shell with `CoTaskMemAlloc`.
pub struct CoTaskString(PWSTR);

impl Drop for CoTaskString {
    fn drop(&mut self) {
        unsafe { CoTaskMemFree(Some(self.0 .0 as *const c_void)) };
    }
}

fn wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(iter::once(0)).collect()
}

fn fos(options: DialogOptions) -> FILEOPENDIALOGOPTIONS {
    let mut bits = 0;
    for (set, flag) in [
        (options.pick_folders, FOS_PICKFOLDERS),
        (options.path_must_exist, FOS_PATHMUSTEXIST),
        (options.file_must_exist, FOS_FILEMUSTEXIST),
        (options.overwrite_prompt, FOS_OVERWRITEPROMPT),
    ] {
        if set {
            bits |= flag.0;
        }
    }
    FILEOPENDIALOGOPTIONS(bits)
}

impl Shell for WindowsShell {
    type Context = Apartment;
    type Dialog = Dialog;

    fn initialize(&self) -> Result<Apartment, DialogError> {
        let coinit = COINIT(COINIT_APARTMENTTHREADED.0 | COINIT_DISABLE_OLE1DDE.0);
        unsafe { CoInitializeEx(None, coinit) }
            .ok()
            .map_err(|e| DialogError::DialogUnavailable(format!("CoInitializeEx: {}", e)))?;
        Ok(Apartment(()))
    }

    fn create_dialog(
        &self,
        _context: &Apartment,
        kind: DialogKind,
    ) -> Result<Dialog, DialogError> {
        let clsid = match kind {
            DialogKind::Open => &FileOpenDialog,
            DialogKind::Save => &FileSaveDialog,
        };
        unsafe { CoCreateInstance::<_, IFileDialog>(clsid, None, CLSCTX_ALL) }
            .map(Dialog)
            .map_err(|e| DialogError::DialogUnavailable(format!("CoCreateInstance: {}", e)))
    }
}

fn config_err(e: windows::core::Error) -> DialogError {
    DialogError::DialogUnavailable(e.to_string())
}

impl ShellDialog for Dialog {
    type Item = Item;

    fn set_options(&mut self, options: DialogOptions) -> Result<(), DialogError> {
        unsafe { self.0.SetOptions(fos(options)) }.map_err(config_err)
    }

    fn set_title(&mut self, title: &str) -> Result<(), DialogError> {
        let title = wide(OsStr::new(title));
        unsafe { self.0.SetTitle(PCWSTR(title.as_ptr())) }.map_err(config_err)
    }

    fn set_file_name(&mut self, name: &Path) -> Result<(), DialogError> {
        let name = wide(name.as_os_str());
        unsafe { self.0.SetFileName(PCWSTR(name.as_ptr())) }.map_err(config_err)
    }

    fn set_file_types(&mut self, filters: &[FileTypeFilter]) -> Result<(), DialogError> {
        // COMDLG_FILTERSPEC only borrows these
        let strings: Vec<(Vec<u16>, Vec<u16>)> = filters
            .iter()
            .map(|f| (wide(OsStr::new(&f.name)), wide(OsStr::new(&f.spec))))
            .collect();
        let specs: Vec<COMDLG_FILTERSPEC> = strings
            .iter()
            .map(|(name, spec)| COMDLG_FILTERSPEC {
                pszName: PCWSTR(name.as_ptr()),
                pszSpec: PCWSTR(spec.as_ptr()),
            })
            .collect();
        unsafe { self.0.SetFileTypes(&specs) }.map_err(config_err)
    }

    fn show(&mut self) -> Result<(), DialogError> {
        unsafe { self.0.Show(HWND::default()) }.map_err(|e| {
            if e.code() == ERROR_CANCELLED.to_hresult() {
                DialogError::UserCancelled
            } else {
                DialogError::DialogUnavailable(format!("Show: {}", e))
            }
        })
    }

    fn result(&self) -> Result<Item, DialogError> {
        unsafe { self.0.GetResult() }
            .map(Item)
            .map_err(|e| DialogError::ResultUnavailable(format!("GetResult: {}", e)))
    }
}

impl ShellItem for Item {
    type Buffer = CoTaskString;

    fn display_path(&self) -> Result<CoTaskString, DialogError> {
        unsafe { self.0.GetDisplayName(SIGDN_FILESYSPATH) }
            .map(CoTaskString)
            .map_err(|e| DialogError::ResultUnavailable(format!("GetDisplayName: {}", e)))
    }
}

impl PathBuffer for CoTaskString {
    fn to_path_buf(&self) -> PathBuf {
        OsString::from_wide(unsafe { self.0.as_wide() }).into()
    }
}
