//! Crypto primitives shim
//!
//! A thin boundary over the RustCrypto stack exposing four primitives —
//! secure random bytes, SHA-256, base64 encode/decode — both as a safe Rust
//! API ([`primitives`]) and as C-ABI entry points ([`ffi`]) for host
//! environments that link the cdylib/staticlib.
//!
//! The safe API reports failures per call through [`ShimError`]. The C ABI
//! keeps the classic contract of a false-like return plus a process-wide
//! last-error slot queried separately.

pub mod error;
pub mod ffi;
pub mod last_error;
pub mod primitives;

// Re-exports
pub use error::{Result, ShimError};
pub use primitives::{base64_decode_into, base64_encode_into, random_bytes, sha256, SHA256_LEN};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
