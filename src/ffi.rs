//! FFI interface for C/C++ callers
//!
//! The listing is returned as JSON; both pointers in the result are owned by
//! Rust and must be released with `free_listing_result`.

use std::ffi::{c_char, CStr, CString};
use std::ptr;

use crate::config::DEFAULT_BASE_URL;
use crate::extractors::extract_listing_from_html;

#[repr(C)]
pub struct ListingResultFFI {
    /// JSON-serialized listing (null-terminated)
    pub json_ptr: *mut c_char,
    /// Error message if extraction failed (null-terminated), or null on success
    pub error_ptr: *mut c_char,
}

/// Extract a listing record from HTML.
///
/// # Arguments
/// * `html_ptr` - Pointer to HTML content (UTF-8, not necessarily null-terminated)
/// * `html_len` - Length of HTML content in bytes
/// * `base_url` - Site origin for menu links (null-terminated), null for the default
///
/// # Safety
/// - `html_ptr` must point to valid memory of at least `html_len` bytes
/// - `base_url` must be null or a valid null-terminated C string
/// - Caller must free the result via `free_listing_result`
#[no_mangle]
pub unsafe extern "C" fn extract_listing_ffi(
    html_ptr: *const c_char,
    html_len: usize,
    base_url: *const c_char,
) -> ListingResultFFI {
    let html = if html_ptr.is_null() || html_len == 0 {
        ""
    } else {
        let slice = std::slice::from_raw_parts(html_ptr as *const u8, html_len);
        match std::str::from_utf8(slice) {
            Ok(s) => s,
            Err(_) => return make_error_result("Invalid UTF-8 in HTML content"),
        }
    };

    let base_url = if base_url.is_null() {
        DEFAULT_BASE_URL
    } else {
        match CStr::from_ptr(base_url).to_str() {
            Ok(s) => s,
            Err(_) => return make_error_result("Invalid UTF-8 in base URL"),
        }
    };

    let record = extract_listing_from_html(html, base_url);
    match serde_json::to_string(&record) {
        Ok(json) => match CString::new(json) {
            Ok(cstr) => ListingResultFFI {
                json_ptr: cstr.into_raw(),
                error_ptr: ptr::null_mut(),
            },
            Err(_) => make_error_result("Result JSON contains null bytes"),
        },
        Err(e) => make_error_result(&format!("Failed to serialize listing: {}", e)),
    }
}

/// Free a ListingResultFFI returned by extract_listing_ffi
///
/// # Safety
/// - `result` must have been returned by `extract_listing_ffi`
/// - Must only be called once per result
#[no_mangle]
pub unsafe extern "C" fn free_listing_result(result: ListingResultFFI) {
    if !result.json_ptr.is_null() {
        drop(CString::from_raw(result.json_ptr));
    }
    if !result.error_ptr.is_null() {
        drop(CString::from_raw(result.error_ptr));
    }
}

fn make_error_result(msg: &str) -> ListingResultFFI {
    let error_ptr = CString::new(msg)
        .or_else(|_| CString::new("Unknown error"))
        .map(CString::into_raw)
        .unwrap_or(ptr::null_mut());
    ListingResultFFI {
        json_ptr: ptr::null_mut(),
        error_ptr,
    }
}
