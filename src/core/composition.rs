use crate::core::model::percent;

/// Per-byte occurrence table for one sequence.
#[derive(Clone, Debug)]
pub struct Composition {
    counts: [u64; 256],
    total: u64,
}

impl Composition {
    pub fn from_seq(seq: &[u8]) -> Self {
        let mut counts = [0u64; 256];
        let mut total = 0u64;
        for &b in seq {
            counts[b as usize] += 1;
            total += 1;
        }
        Self { counts, total }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, b: u8) -> u64 {
        self.counts[b as usize]
    }

    /// Share of `b` in percent; `None` for an empty sequence.
    pub fn percent(&self, b: u8) -> Option<f64> {
        percent(self.count(b), self.total)
    }

    /// Observed bytes with their counts, ascending by byte value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(b, &c)| (b as u8, c))
    }
}
