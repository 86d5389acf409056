use crate::core::error::LoadError;
use flate2::read::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const GZIP_READ_BUF: usize = 1024 * 1024;

pub struct MmapSource {
    mmap: Option<Mmap>,
}

impl MmapSource {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| LoadError::read(path, e))?
            .len();
        // Zero-length files cannot be mapped on every platform.
        if len == 0 {
            return Ok(Self { mmap: None });
        }
        // SAFETY: read-only file mapping.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| LoadError::read(path, e))?;
        Ok(Self { mmap: Some(mmap) })
    }

    pub fn bytes(&self) -> &[u8] {
        match &self.mmap {
            Some(m) => m,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Plain,
    Gzip,
}

pub fn detect_input_kind(path: &Path) -> Result<InputKind, LoadError> {
    let mut file = File::open(path).map_err(|e| LoadError::open(path, e))?;
    if let Some(ext) = path.extension().and_then(|s| s.to_str())
        && ext.eq_ignore_ascii_case("gz")
    {
        return Ok(InputKind::Gzip);
    }
    let mut magic = [0u8; 2];
    let n = file
        .read(&mut magic)
        .map_err(|e| LoadError::read(path, e))?;
    if n == 2 && magic == [0x1f, 0x8b] {
        Ok(InputKind::Gzip)
    } else {
        Ok(InputKind::Plain)
    }
}

pub fn open_gzip_reader(path: &Path) -> Result<BufReader<MultiGzDecoder<File>>, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
    let decoder = MultiGzDecoder::new(file);
    Ok(BufReader::with_capacity(GZIP_READ_BUF, decoder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    #[test]
    fn detects_gzip_by_magic_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reads.fa");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b">h\nACGT\n").unwrap();
        enc.finish().unwrap();
        assert_eq!(detect_input_kind(&path).unwrap(), InputKind::Gzip);
    }

    #[test]
    fn plain_text_is_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reads.fa");
        std::fs::write(&path, b">h\nACGT\n").unwrap();
        assert_eq!(detect_input_kind(&path).unwrap(), InputKind::Plain);
    }

    #[test]
    fn empty_file_maps_to_empty_slice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.fa");
        std::fs::write(&path, b"").unwrap();
        let src = MmapSource::open(&path).unwrap();
        assert_eq!(src.len(), 0);
        assert!(src.bytes().is_empty());
    }

    #[test]
    fn missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.fa");
        let err = detect_input_kind(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
