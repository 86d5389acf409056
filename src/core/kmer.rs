use crate::core::model::{ACGT, base_index};

pub const MAX_K: u32 = 8;

#[derive(Clone, Debug, PartialEq)]
pub struct KmerRow {
    pub word: Vec<u8>,
    pub percent: f64,
}

/// All `4^k` words over `ACGT`, lexicographic.
pub fn words(k: usize) -> Vec<Vec<u8>> {
    let mut out: Vec<Vec<u8>> = vec![Vec::new()];
    for _ in 0..k {
        let mut next = Vec::with_capacity(out.len() * ACGT.len());
        for prefix in &out {
            for &b in &ACGT {
                let mut w = prefix.clone();
                w.push(b);
                next.push(w);
            }
        }
        out = next;
    }
    out
}

/// Non-overlapping occurrences of each word, relative to the number of
/// `k`-length positions in the sequence. Bases are matched case-insensitively.
///
/// One rolling pass over 2-bit codes; a hit is counted only when it starts at
/// or after the end of the previous counted hit of the same word, which is
/// the greedy left-to-right non-overlapping count.
pub fn percentages(seq: &[u8], k: usize) -> Vec<KmerRow> {
    let counts = count_non_overlapping(seq, k);
    let positions = (seq.len() + 1).saturating_sub(k);
    words(k)
        .into_iter()
        .zip(counts)
        .map(|(word, count)| {
            let percent = if positions == 0 {
                0.0
            } else {
                count as f64 / positions as f64 * 100.0
            };
            KmerRow { word, percent }
        })
        .collect()
}

/// Counts indexed by the 2-bit code of each word, in `words(k)` order.
fn count_non_overlapping(seq: &[u8], k: usize) -> Vec<u64> {
    let n_words = 1usize << (2 * k);
    let mut counts = vec![0u64; n_words];
    if k == 0 {
        return counts;
    }
    let mask = n_words - 1;
    let mut next_free = vec![0usize; n_words];
    let mut code = 0usize;
    let mut run = 0usize;
    for (i, &b) in seq.iter().enumerate() {
        let Some(idx) = base_index(b) else {
            run = 0;
            code = 0;
            continue;
        };
        code = ((code << 2) | idx) & mask;
        run += 1;
        if run < k {
            continue;
        }
        let start = i + 1 - k;
        if start >= next_free[code] {
            counts[code] += 1;
            next_free[code] = start + k;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_enumeration_order() {
        let w = words(2);
        assert_eq!(w.len(), 16);
        assert_eq!(w[0], b"AA");
        assert_eq!(w[1], b"AC");
        assert_eq!(w[15], b"TT");
        assert_eq!(words(3).len(), 64);
    }

    #[test]
    fn counts_are_non_overlapping() {
        let rows = percentages(b"AAAA", 2);
        let aa = rows.iter().find(|r| r.word == b"AA").unwrap();
        // two hits over three positions
        assert!((aa.percent - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn lower_case_is_folded() {
        let rows = percentages(b"acgt", 2);
        let ac = rows.iter().find(|r| r.word == b"AC").unwrap();
        assert!((ac.percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn matches_greedy_substring_search() {
        let seq = b"ACGTTGCAAAAGGCTTAGCNNACGTacgtAAAAAACCCC";
        for k in 1..=4 {
            let upper = seq.to_ascii_uppercase();
            let counts = count_non_overlapping(seq, k);
            for (word, count) in words(k).iter().zip(&counts) {
                let expected = memchr::memmem::find_iter(&upper, word).count() as u64;
                assert_eq!(*count, expected, "word {}", String::from_utf8_lossy(word));
            }
        }
    }

    #[test]
    fn non_acgt_breaks_words() {
        let counts = count_non_overlapping(b"ANA", 2);
        assert!(counts.iter().all(|&c| c == 0));
    }

    #[test]
    fn short_sequence_reports_zero() {
        let rows = percentages(b"AC", 3);
        assert_eq!(rows.len(), 64);
        assert!(rows.iter().all(|r| r.percent == 0.0));
    }
}
