//! Process-wide last-error slot
//!
//! Backs the C-ABI `shim_get_last_error` query. One bounded slot for the
//! whole process: every failing boundary operation overwrites it, success
//! leaves the previous message in place, and nothing ever clears it apart
//! from init/shutdown. Writers are serialized by a mutex so two failures
//! cannot interleave bytes; the pointer handed out to C callers is read
//! without synchronization, so a caller observing the slot while another
//! thread fails may see an unrelated message. Callers that need the
//! message for a specific failure must serialize the operation and the
//! query themselves.

use std::cell::UnsafeCell;
use std::ffi::c_char;
use std::sync::Mutex;

/// Slot capacity, including the NUL terminator. Longer messages are
/// truncated to fit.
pub const LAST_ERROR_CAP: usize = 256;

struct Slot {
    buf: UnsafeCell<[u8; LAST_ERROR_CAP]>,
}

// Writes go through WRITE_LOCK; the unsynchronized reads are the
// documented boundary race.
unsafe impl Sync for Slot {}

static SLOT: Slot = Slot {
    buf: UnsafeCell::new([0; LAST_ERROR_CAP]),
};
static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Overwrite the slot with `msg`, truncating to fit
pub fn set(msg: &str) {
    let _guard = WRITE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let bytes = msg.as_bytes();
    let n = bytes.len().min(LAST_ERROR_CAP - 1);
    unsafe {
        let buf = &mut *SLOT.buf.get();
        buf[..n].copy_from_slice(&bytes[..n]);
        buf[n] = 0;
    }
}

/// Reset the slot to the initial empty state
pub fn clear() {
    set("");
}

/// Pointer to the NUL-terminated slot contents, for the C boundary.
/// Valid for the lifetime of the process; contents change on the next
/// failure.
pub fn as_ptr() -> *const c_char {
    SLOT.buf.get() as *const c_char
}

/// Current slot contents as an owned string
pub fn message() -> String {
    let _guard = WRITE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        let buf = &*SLOT.buf.get();
        let n = buf
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(LAST_ERROR_CAP - 1);
        String::from_utf8_lossy(&buf[..n]).into_owned()
    }
}
