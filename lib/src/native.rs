//! Backend over the native-file-dialog library, for desktops without a COM shell.
//!
//! nfd has no notion of dialog titles, and a save dialog's default path is only
//! the folder it opens in; titles and suggested file names are logged and dropped.

use std::path::Path;

use crate::request::DialogRequest;
#[cfg(feature = "nfd")]
use crate::{error::DialogError, picker::Picker, request::Operation};
#[cfg(feature = "nfd")]
use std::path::PathBuf;

/// `(filter_list, default_path)` for `nfd::open_save_dialog`: the suggested
/// path's extension, and the folder it lives in.
#[cfg_attr(not(feature = "nfd"), allow(dead_code))]
pub(crate) fn save_args(request: &DialogRequest) -> (Option<String>, Option<String>) {
    let filter = request
        .file_types()
        .and_then(|filters| filters.first().and_then(|f| f.extension().map(str::to_owned)));
    let folder = request
        .file_name()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .and_then(Path::to_str)
        .map(str::to_owned);
    (filter, folder)
}

#[cfg(feature = "nfd")]
#[derive(Debug, Default, Clone, Copy)]
pub struct NfdPicker;

#[cfg(feature = "nfd")]
impl Picker for NfdPicker {
    fn pick(&self, request: &DialogRequest) -> Result<PathBuf, DialogError> {
        log::debug!("nfd ignores dialog title “{}”", request.title);

        let response = match request.operation {
            Operation::OpenDirectory => ::nfd::open_pick_folder(None),
            Operation::OpenFile => ::nfd::open_file_dialog(None, None),
            Operation::SaveFile => {
                if let Some(name) = request.file_name().and_then(Path::file_name) {
                    log::debug!("nfd ignores suggested file name {:?}", name);
                }
                let (filter, folder) = save_args(request);
                ::nfd::open_save_dialog(filter.as_deref(), folder.as_deref())
            }
        };

        match response {
            Ok(::nfd::Response::Okay(file)) => Ok(file.into()),
            Ok(::nfd::Response::OkayMultiple(_)) => Err(DialogError::ResultUnavailable(
                "multiple selections are not supported".to_owned(),
            )),
            Ok(::nfd::Response::Cancel) => Err(DialogError::UserCancelled),
            Err(err) => Err(DialogError::DialogUnavailable(err.to_string())),
        }
    }
}
