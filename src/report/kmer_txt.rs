use crate::core::kmer::KmerRow;
use std::io::{self, Write};

pub fn write<W: Write>(w: &mut W, k: usize, rows: &[KmerRow]) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}-mer percentages:", k)?;
    for row in rows {
        w.write_all(&row.word)?;
        writeln!(w, ": {:.2}%", row.percent)?;
    }
    Ok(())
}
