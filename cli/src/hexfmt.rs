//! Hex display helpers for CLI output

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Render bytes as lowercase hex grouped for readability,
/// e.g. `format_bytes(&[0, 1, 2, 3], 2)` -> `"0001 0203"`
pub fn format_bytes(bytes: &[u8], group_size: usize) -> String {
    let hex = bytes_to_hex(bytes);
    if group_size == 0 {
        return hex;
    }
    let step = group_size * 2;
    let mut groups = Vec::new();
    let mut i = 0;
    while i < hex.len() {
        groups.push(&hex[i..(i + step).min(hex.len())]);
        i += step;
    }
    groups.join(" ")
}
