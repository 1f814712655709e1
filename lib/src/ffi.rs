//! C entry points.
//!
//! Each takes the output buffer together with its capacity in bytes. The picked
//! path is written null-terminated only when it fits; otherwise the call fails
//! and the buffer is left untouched.

use std::{
    ffi::{CStr, CString},
    os::raw::c_char,
    path::{Path, PathBuf},
    slice,
};

use crate::{
    picker::{default_picker, pick, Picker},
    request::DialogRequest,
};

/// Copies `path` plus its terminating nul into `out`.
pub fn write_c_path(path: &Path, out: &mut [u8]) -> bool {
    let Some(text) = path.to_str() else {
        log::warn!("Picked path {:?} is not valid UTF-8", path);
        return false;
    };
    let Ok(text) = CString::new(text) else {
        log::warn!("Picked path {:?} contains a nul byte", path);
        return false;
    };
    let bytes = text.as_bytes_with_nul();
    if bytes.len() > out.len() {
        log::warn!(
            "Picked path needs {} bytes, caller supplied {}",
            bytes.len(),
            out.len()
        );
        return false;
    }
    out[..bytes.len()].copy_from_slice(bytes);
    true
}

pub fn pick_into(picker: &dyn Picker, request: &DialogRequest, out: &mut [u8]) -> bool {
    match pick(picker, request) {
        Some(path) => write_c_path(&path, out),
        None => false,
    }
}

unsafe fn read_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

unsafe fn out_buffer<'a>(out: *mut c_char, capacity: usize) -> Option<&'a mut [u8]> {
    if out.is_null() || capacity == 0 {
        return None;
    }
    Some(slice::from_raw_parts_mut(out as *mut u8, capacity))
}

/// # Safety
///
/// `title` must be a valid nul-terminated string and `out` must point to at
/// least `capacity` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn mfek_open_directory(
    title: *const c_char,
    out: *mut c_char,
    capacity: usize,
) -> bool {
    let (Some(title), Some(out)) = (read_c_str(title), out_buffer(out, capacity)) else {
        return false;
    };
    pick_into(&*default_picker(), &DialogRequest::open_directory(&title), out)
}

/// # Safety
///
/// Same contract as [`mfek_open_directory`].
#[no_mangle]
pub unsafe extern "C" fn mfek_open_file(
    title: *const c_char,
    out: *mut c_char,
    capacity: usize,
) -> bool {
    let (Some(title), Some(out)) = (read_c_str(title), out_buffer(out, capacity)) else {
        return false;
    };
    pick_into(&*default_picker(), &DialogRequest::open_file(&title), out)
}

/// On entry `inout` holds the suggested path, nul-terminated within `capacity`
/// bytes (an empty string suggests nothing).
///
/// # Safety
///
/// Same contract as [`mfek_open_directory`].
#[no_mangle]
pub unsafe extern "C" fn mfek_save_file(
    title: *const c_char,
    inout: *mut c_char,
    capacity: usize,
) -> bool {
    let (Some(title), Some(buf)) = (read_c_str(title), out_buffer(inout, capacity)) else {
        return false;
    };
    let suggested = match CStr::from_bytes_until_nul(buf) {
        Ok(s) => PathBuf::from(s.to_string_lossy().into_owned()),
        Err(_) => {
            log::warn!("Suggested path is not nul-terminated within {} bytes", capacity);
            return false;
        }
    };
    let request = DialogRequest::save_file(&title, Some(&suggested));
    pick_into(&*default_picker(), &request, buf)
}
