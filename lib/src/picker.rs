use std::path::PathBuf;

use crate::error::DialogError;
use crate::request::DialogRequest;
use crate::util::Log;

/// A platform's way of showing a native picker. Implementations block until the
/// user closes the dialog and release everything they acquired before returning.
pub trait Picker {
    fn pick(&self, request: &DialogRequest) -> Result<PathBuf, DialogError>;
}

/// Stand-in for builds with no dialog backend compiled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl Picker for Unsupported {
    fn pick(&self, request: &DialogRequest) -> Result<PathBuf, DialogError> {
        Err(DialogError::DialogUnavailable(format!(
            "no {} dialog backend on this platform",
            request.operation
        )))
    }
}

#[cfg(windows)]
pub fn default_picker() -> Box<dyn Picker> {
    Box::new(crate::shell::ShellPicker::new(crate::shell::windows::WindowsShell))
}

#[cfg(all(not(windows), feature = "nfd"))]
pub fn default_picker() -> Box<dyn Picker> {
    Box::new(crate::native::NfdPicker)
}

#[cfg(all(not(windows), not(feature = "nfd")))]
pub fn default_picker() -> Box<dyn Picker> {
    Box::new(Unsupported)
}

/// Runs `request` on `picker`, collapsing every failure to `None`.
pub fn pick(picker: &dyn Picker, request: &DialogRequest) -> Option<PathBuf> {
    request.log();
    match picker.pick(request) {
        Ok(path) => {
            log::debug!("{} dialog returned {:?}", request.operation, path);
            Some(path)
        }
        Err(err) if err.is_cancelled() => {
            log::debug!("{} dialog cancelled", request.operation);
            None
        }
        Err(err) => {
            log::warn!("{} dialog failed: {}", request.operation, err);
            None
        }
    }
}
