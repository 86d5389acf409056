use crate::core::error::LoadError;
use crate::core::io::{InputKind, MmapSource, detect_input_kind, open_gzip_reader};
use crate::core::model::HEADER_MARKER;
use std::io::BufRead;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadStats {
    pub input_bytes: u64,
    pub lines: u64,
    pub headers: u64,
}

#[derive(Debug)]
pub struct Loaded {
    pub seq: Vec<u8>,
    pub stats: LoadStats,
    pub kind: InputKind,
}

/// Growable sequence with a hard, checked ceiling.
#[derive(Debug)]
pub struct SequenceBuffer {
    seq: Vec<u8>,
    limit: usize,
    stats: LoadStats,
}

impl SequenceBuffer {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            seq: Vec::new(),
            limit,
            stats: LoadStats::default(),
        }
    }

    /// Feeds one raw line (terminator optional). Header lines are dropped.
    pub fn push_line(&mut self, line: &[u8]) -> Result<(), LoadError> {
        self.stats.lines += 1;
        if is_header(line) {
            self.stats.headers += 1;
            return Ok(());
        }
        let body = strip_terminator(line);
        let attempted = self.seq.len() + body.len();
        if attempted > self.limit {
            return Err(LoadError::CapacityExceeded {
                limit: self.limit,
                attempted,
            });
        }
        self.seq.extend_from_slice(body);
        Ok(())
    }

    pub fn finish(self) -> (Vec<u8>, LoadStats) {
        (self.seq, self.stats)
    }
}

pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&HEADER_MARKER)
}

pub fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

pub fn load(path: &Path, limit: usize) -> Result<Loaded, LoadError> {
    let kind = detect_input_kind(path)?;
    match kind {
        InputKind::Plain => {
            let source = MmapSource::open(path)?;
            let mut buf = SequenceBuffer::with_limit(limit);
            feed_bytes(&mut buf, source.bytes())?;
            let (seq, mut stats) = buf.finish();
            stats.input_bytes = source.len() as u64;
            Ok(Loaded { seq, stats, kind })
        }
        InputKind::Gzip => {
            let reader = open_gzip_reader(path)?;
            let (seq, stats) = load_reader(reader, path, limit)?;
            Ok(Loaded { seq, stats, kind })
        }
    }
}

/// Splits an in-memory file into lines and feeds them in order.
pub fn feed_bytes(buf: &mut SequenceBuffer, bytes: &[u8]) -> Result<(), LoadError> {
    let mut start = 0usize;
    for nl in memchr::memchr_iter(b'\n', bytes) {
        buf.push_line(&bytes[start..=nl])?;
        start = nl + 1;
    }
    if start < bytes.len() {
        buf.push_line(&bytes[start..])?;
    }
    Ok(())
}

pub fn load_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
    limit: usize,
) -> Result<(Vec<u8>, LoadStats), LoadError> {
    let mut buf = SequenceBuffer::with_limit(limit);
    let mut line = Vec::new();
    let mut input_bytes = 0u64;
    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| LoadError::read(path, e))?;
        if n == 0 {
            break;
        }
        input_bytes += n as u64;
        buf.push_line(&line)?;
    }
    let (seq, mut stats) = buf.finish();
    stats.input_bytes = input_bytes;
    Ok((seq, stats))
}
