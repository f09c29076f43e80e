//! C-ABI boundary
//!
//! Five entry points plus an explicit init/shutdown pair. All operations
//! are synchronous and work on caller-owned buffers passed by pointer and
//! explicit length/capacity. Failures return a false-like value (0) and
//! overwrite the process-wide last-error slot; `shim_get_last_error`
//! retrieves the message. A successful call leaves the previous message
//! in place, so a non-empty slot is not a failure signal on its own.
//!
//! Every operation runs the one-time setup lazily, so the shim behaves
//! even if the host never calls `shim_init`.

use std::ffi::{c_char, c_int, CStr};
use std::ptr;
use std::slice;
use std::sync::Once;

use crate::last_error;
use crate::primitives::{self, SHA256_LEN};

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        last_error::clear();
        tracing::debug!(version = crate::VERSION, "crypto shim initialized");
    });
}

fn fail(op: &'static str, msg: &str) -> c_int {
    tracing::warn!(op, error = msg, "shim operation failed");
    last_error::set(msg);
    0
}

/// One-time library initialization. Idempotent; also run lazily by every
/// operation.
#[no_mangle]
pub extern "C" fn shim_init() {
    ensure_init();
}

/// Library teardown. Resets the last-error slot; safe to call more than
/// once.
#[no_mangle]
pub extern "C" fn shim_shutdown() {
    last_error::clear();
    tracing::debug!("crypto shim shut down");
}

/// Pointer to the NUL-terminated last-error message. Never null; empty
/// string when no failure has occurred since init.
#[no_mangle]
pub extern "C" fn shim_get_last_error() -> *const c_char {
    shim_init();
    last_error::as_ptr()
}

/// Fill `buffer` with `length` cryptographically secure random bytes.
/// Returns 1 on success, 0 on failure. Buffer contents are unspecified
/// after a failure.
#[no_mangle]
pub extern "C" fn shim_random_bytes(buffer: *mut u8, length: c_int) -> c_int {
    ensure_init();
    if buffer.is_null() || length < 0 {
        return fail("random_bytes", "Invalid argument: null buffer or negative length");
    }
    let buf = unsafe { slice::from_raw_parts_mut(buffer, length as usize) };
    match primitives::random_bytes(buf) {
        Ok(()) => 1,
        Err(e) => fail("random_bytes", &e.to_string()),
    }
}

/// Compute the SHA-256 digest of `data` into `out_digest`, which must
/// hold at least 32 bytes. Returns the digest length (32) on success,
/// 0 on failure; the output buffer is not touched on failure.
#[no_mangle]
pub extern "C" fn shim_sha256(data: *const u8, length: c_int, out_digest: *mut u8) -> c_int {
    ensure_init();
    if data.is_null() || out_digest.is_null() || length < 0 {
        return fail("sha256", "Invalid argument: null pointer or negative length");
    }
    let input = unsafe { slice::from_raw_parts(data, length as usize) };
    let digest = primitives::sha256(input);
    unsafe {
        ptr::copy_nonoverlapping(digest.as_ptr(), out_digest, SHA256_LEN);
    }
    SHA256_LEN as c_int
}

/// Base64-encode `data` into `out` (capacity `out_size`, which must cover
/// the encoded text plus a NUL terminator). Returns the encoded length
/// on success, 0 on failure. The capacity check runs after encoding,
/// against the produced length; on failure nothing is written to `out`.
#[no_mangle]
pub extern "C" fn shim_base64_encode(
    data: *const u8,
    length: c_int,
    out: *mut c_char,
    out_size: c_int,
) -> c_int {
    ensure_init();
    if data.is_null() || out.is_null() || length < 0 || out_size < 0 {
        return fail("base64_encode", "Invalid argument: null pointer or negative length");
    }
    let input = unsafe { slice::from_raw_parts(data, length as usize) };
    let out_buf = unsafe { slice::from_raw_parts_mut(out as *mut u8, out_size as usize) };
    match primitives::base64_encode_into(input, out_buf) {
        Ok(n) => n as c_int,
        Err(e) => fail("base64_encode", &e.to_string()),
    }
}

/// Base64-decode the NUL-terminated `input` into `out` (capacity
/// `out_size`). Returns the decoded byte count. A return of 0 covers
/// malformed input, an undersized buffer, and a genuinely empty result
/// alike; only the error slot distinguishes them, and it is not written
/// for the empty-success case.
#[no_mangle]
pub extern "C" fn shim_base64_decode(input: *const c_char, out: *mut u8, out_size: c_int) -> c_int {
    ensure_init();
    if input.is_null() || out.is_null() || out_size < 0 {
        return fail("base64_decode", "Invalid argument: null pointer or negative capacity");
    }
    let text = match unsafe { CStr::from_ptr(input) }.to_str() {
        Ok(t) => t,
        Err(_) => return fail("base64_decode", "Malformed base64 input"),
    };
    let out_buf = unsafe { slice::from_raw_parts_mut(out, out_size as usize) };
    match primitives::base64_decode_into(text, out_buf) {
        Ok(n) => n as c_int,
        Err(e) => fail("base64_decode", &e.to_string()),
    }
}
