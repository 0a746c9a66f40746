// Sequential read-only file windows.
//
// Each window is a fixed-size memory mapping at an explicit byte offset.
// The reader hands out one window at a time; the driver owns the offset
// bookkeeping, so no window outlives the iteration that mapped it.

use crate::core::terminator::PROBE_LIMIT;
use crate::error::Result;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

/// Read-only view over a file, mapped window by window.
pub struct WindowReader {
    file: File,
    len: u64,
}

impl WindowReader {
    /// Open the file read-only. Fails fast if the path cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(WindowReader { file, len })
    }

    /// Total file length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Map `[offset, offset + len)` read-only. Callers never request a
    /// zero-length or out-of-bounds window.
    pub fn map_window(&self, offset: u64, len: usize) -> Result<Mmap> {
        debug_assert!(len > 0);
        debug_assert!(offset + len as u64 <= self.len);

        // SAFETY: the file is opened read-only and the mapping is never
        // written through. As with any file mapping, concurrent external
        // truncation of the source file is not supported.
        let window = unsafe {
            MmapOptions::new()
                .offset(offset)
                .len(len)
                .map(&self.file)?
        };
        Ok(window)
    }

    /// Map the probe region used for terminator detection:
    /// `min(file_len, PROBE_LIMIT)` bytes from offset 0. `None` for an
    /// empty file.
    pub fn map_probe(&self) -> Result<Option<Mmap>> {
        if self.len == 0 {
            return Ok(None);
        }
        let probe_len = self.len.min(PROBE_LIMIT) as usize;
        self.map_window(0, probe_len).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn fixture(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents).expect("write fixture");
        file
    }

    #[test]
    fn test_open_missing_file_fails() {
        let result = WindowReader::open("/nonexistent/csvscan-test-fixture");
        assert!(result.is_err());
    }

    #[test]
    fn test_len_and_window_contents() {
        let file = fixture(b"abcdefgh");
        let reader = WindowReader::open(file.path()).unwrap();
        assert_eq!(reader.len(), 8);

        let window = reader.map_window(0, 4).unwrap();
        assert_eq!(&window[..], b"abcd");

        let window = reader.map_window(4, 4).unwrap();
        assert_eq!(&window[..], b"efgh");
    }

    #[test]
    fn test_window_at_unaligned_offset() {
        let file = fixture(b"0123456789");
        let reader = WindowReader::open(file.path()).unwrap();
        let window = reader.map_window(3, 5).unwrap();
        assert_eq!(&window[..], b"34567");
    }

    #[test]
    fn test_probe_of_empty_file_is_none() {
        let file = fixture(b"");
        let reader = WindowReader::open(file.path()).unwrap();
        assert!(reader.is_empty());
        assert!(reader.map_probe().unwrap().is_none());
    }

    #[test]
    fn test_probe_capped_at_file_len() {
        let file = fixture(b"short\n");
        let reader = WindowReader::open(file.path()).unwrap();
        let probe = reader.map_probe().unwrap().unwrap();
        assert_eq!(&probe[..], b"short\n");
    }
}
