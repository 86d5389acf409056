use crate::core::composition::Composition;
use std::io::{self, Write};

pub const TITLE: &str = "Component percentages:";
pub const NO_DATA: &str = "no sequence data";

/// Writes the composition report. Symbols are emitted as raw bytes.
pub fn write<W: Write>(w: &mut W, comp: &Composition) -> io::Result<()> {
    writeln!(w, "{}", TITLE)?;
    if comp.is_empty() {
        writeln!(w, "{}", NO_DATA)?;
        return Ok(());
    }
    for (b, _) in comp.iter() {
        let Some(pct) = comp.percent(b) else {
            continue;
        };
        w.write_all(&[b])?;
        writeln!(w, ": {:.2}%", pct)?;
    }
    Ok(())
}
