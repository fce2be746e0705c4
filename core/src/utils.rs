/// Number of bytes needed to hold `n` in minimal big-endian form (0 for zero).
#[inline]
pub fn int_size(n: u64) -> usize {
    ((64 - n.leading_zeros() as usize) + 7) / 8
}

/// Minimal big-endian digits of `n`: leading zero bytes stripped, zero is empty.
///
/// Returns a fixed buffer and the index where the significant bytes start,
/// so callers can slice `&buf[start..]` without allocating.
#[inline]
pub fn uint_be_bytes(n: u128) -> ([u8; 16], usize) {
    let buf = n.to_be_bytes();
    let start = (n.leading_zeros() / 8) as usize;
    (buf, start)
}

/// Fold big-endian bytes into an integer. Caller bounds `b.len()` to 16.
#[inline]
pub fn uint_from_be(b: &[u8]) -> u128 {
    debug_assert!(b.len() <= 16);
    b.iter().fold(0u128, |acc, &byte| (acc << 8) | byte as u128)
}

/// Render bytes for diagnostics: ASCII when printable, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
