/// Default ceiling on the merged sequence, in bytes.
pub const DEFAULT_MAX_LEN: u64 = 256 * 1024 * 1024;

pub const HEADER_MARKER: u8 = b'>';

pub const ACGT: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Case-insensitive slot of a nucleotide in `ACGT`.
#[inline]
pub fn base_index(b: u8) -> Option<usize> {
    match b & 0xDF {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

pub fn percent(count: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(count as f64 * 100.0 / total as f64)
}
