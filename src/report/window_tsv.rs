use crate::core::window::WindowRow;
use std::io::{self, Write};

pub fn write<W: Write>(w: &mut W, size: usize, rows: &[WindowRow]) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Sliding window (W={}):", size)?;
    writeln!(w, "center\tA\tC\tG\tT")?;
    for r in rows {
        writeln!(
            w,
            "{:.1}\t{:.4}\t{:.4}\t{:.4}\t{:.4}",
            r.center, r.freqs[0], r.freqs[1], r.freqs[2], r.freqs[3]
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::window;

    #[test]
    fn tsv_layout() {
        let mut out = Vec::new();
        write(&mut out, 2, &window::sliding_frequencies(b"ACG", 2)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nSliding window (W=2):\ncenter\tA\tC\tG\tT\n\
             1.5\t0.5000\t0.5000\t0.0000\t0.0000\n\
             2.5\t0.0000\t0.5000\t0.5000\t0.0000\n"
        );
    }
}
