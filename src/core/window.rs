use crate::core::model::base_index;

#[derive(Clone, Debug, PartialEq)]
pub struct WindowRow {
    /// 1-based centre of the window.
    pub center: f64,
    /// Relative frequencies of A, C, G, T.
    pub freqs: [f64; 4],
}

pub fn sliding_frequencies(seq: &[u8], size: usize) -> Vec<WindowRow> {
    let n = seq.len();
    if size == 0 || n < size {
        return Vec::new();
    }
    let half = (size - 1) as f64 / 2.0;
    let mut sums = [0u32; 4];
    let mut valid = 0u32;
    for &b in &seq[..size] {
        if let Some(i) = base_index(b) {
            sums[i] += 1;
            valid += 1;
        }
    }

    let mut rows = Vec::with_capacity(n - size + 1);
    rows.push(row(1.0 + half, &sums, valid));
    for start in 1..=(n - size) {
        if let Some(i) = base_index(seq[start - 1]) {
            sums[i] -= 1;
            valid -= 1;
        }
        if let Some(i) = base_index(seq[start + size - 1]) {
            sums[i] += 1;
            valid += 1;
        }
        rows.push(row(start as f64 + 1.0 + half, &sums, valid));
    }
    rows
}

fn row(center: f64, sums: &[u32; 4], valid: u32) -> WindowRow {
    let mut freqs = [0.0f64; 4];
    if valid > 0 {
        for (f, &s) in freqs.iter_mut().zip(sums) {
            *f = s as f64 / valid as f64;
        }
    }
    WindowRow { center, freqs }
}
