//! The four primitive operations, as a safe per-call API
//!
//! Each function reports failure through [`ShimError`] instead of the
//! shared last-error slot; the slot only exists at the C boundary in
//! [`crate::ffi`].

use crate::error::{Result, ShimError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// SHA-256 digest length in bytes
pub const SHA256_LEN: usize = 32;

/// Fill buffer with cryptographically secure random bytes
pub fn random_bytes(buf: &mut [u8]) -> Result<()> {
    let mut rng = rand::thread_rng();
    rng.try_fill_bytes(buf)
        .map_err(|_| ShimError::EntropyUnavailable)
}

/// Compute the SHA-256 digest of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Base64-encode `data` into `out`, returning the encoded length.
///
/// The encoding is a single contiguous line (no wrapping) in the standard
/// padded alphabet. A NUL terminator is written after the encoded text so
/// the buffer can be handed to C callers as-is; `out` must therefore have
/// room for the encoded text plus one byte. The capacity check runs after
/// encoding, against the length the encoder actually produced, and an
/// undersized buffer is left untouched.
pub fn base64_encode_into(data: &[u8], out: &mut [u8]) -> Result<usize> {
    let encoded = STANDARD.encode(data);
    let needed = encoded.len() + 1;
    if needed > out.len() {
        return Err(ShimError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }
    out[..encoded.len()].copy_from_slice(encoded.as_bytes());
    out[encoded.len()] = 0;
    Ok(encoded.len())
}

/// Base64-decode `text` into `out`, returning the decoded length.
///
/// Empty input decodes to `Ok(0)`; malformed text and an undersized output
/// buffer are distinct errors here, unlike at the C boundary where all
/// three collapse to a zero return.
pub fn base64_decode_into(text: &str, out: &mut [u8]) -> Result<usize> {
    let decoded = STANDARD
        .decode(text)
        .map_err(|_| ShimError::MalformedBase64)?;
    if decoded.len() > out.len() {
        return Err(ShimError::BufferTooSmall {
            needed: decoded.len(),
            capacity: out.len(),
        });
    }
    out[..decoded.len()].copy_from_slice(&decoded);
    Ok(decoded.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use proptest::prelude::*;

    #[test]
    fn test_random_fills_requested_length() {
        for len in [0usize, 1, 16, 32, 1024] {
            let mut buf = vec![0u8; len];
            random_bytes(&mut buf).unwrap();
            assert_eq!(buf.len(), len);
        }
    }

    #[test]
    fn test_random_output_varies() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        random_bytes(&mut a).unwrap();
        random_bytes(&mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sha256_known_vectors() {
        assert_eq!(
            sha256(b""),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(
            sha256(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        let data = b"the same input every time";
        assert_eq!(sha256(data), sha256(data));
    }

    #[test]
    fn test_encode_single_line() {
        // Long enough that a wrapping encoder would have inserted newlines
        let data = vec![0xA5u8; 4096];
        let mut out = vec![0u8; 4096 * 2];
        let n = base64_encode_into(&data, &mut out).unwrap();
        assert!(!out[..n].contains(&b'\n'));
        assert!(!out[..n].contains(&b'\r'));
        assert_eq!(out[n], 0);
    }

    #[test]
    fn test_encode_undersized_buffer_untouched() {
        let data = b"hello world";
        // Encoded length is 16, so 16 bytes cannot also hold the terminator
        let mut out = [0xEEu8; 16];
        let err = base64_encode_into(data, &mut out).unwrap_err();
        assert!(matches!(err, ShimError::BufferTooSmall { needed: 17, capacity: 16 }));
        assert_eq!(out, [0xEEu8; 16]);
    }

    #[test]
    fn test_decode_cases_are_distinct() {
        let mut out = [0u8; 16];
        assert_eq!(base64_decode_into("", &mut out), Ok(0));
        assert_eq!(
            base64_decode_into("not base64!!", &mut out),
            Err(ShimError::MalformedBase64)
        );
        assert_eq!(
            base64_decode_into("aGVsbG8gd29ybGQsIGhlbGxvIGFnYWlu", &mut out),
            Err(ShimError::BufferTooSmall {
                needed: 24,
                capacity: 16
            })
        );
    }

    #[test]
    fn test_decode_known_value() {
        let mut out = [0u8; 16];
        let n = base64_decode_into("aGVsbG8=", &mut out).unwrap();
        assert_eq!(&out[..n], b"hello");
    }

    proptest! {
        #[test]
        fn prop_encode_decode_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let mut text = vec![0u8; data.len() * 2 + 8];
            let n = base64_encode_into(&data, &mut text).unwrap();
            let encoded = std::str::from_utf8(&text[..n]).unwrap();

            let mut decoded = vec![0u8; data.len() + 8];
            let m = base64_decode_into(encoded, &mut decoded).unwrap();
            prop_assert_eq!(&decoded[..m], data.as_slice());
        }

        #[test]
        fn prop_encode_never_wraps(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let mut text = vec![0u8; data.len() * 2 + 8];
            let n = base64_encode_into(&data, &mut text).unwrap();
            prop_assert!(!text[..n].iter().any(|&b| b == b'\n' || b == b'\r'));
        }
    }
}
