//! Dictionary line source
//!
//! Streams a dictionary file one line at a time. Opening the file is the only
//! fatal operation; once streaming, a read error ends the stream the same way
//! end-of-file does.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::SieveError;

/// Read buffer size for the dictionary file
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// A dictionary file opened for sequential line reading
#[derive(Debug)]
pub struct WordSource {
    reader: BufReader<File>,
    path: PathBuf,
    size: u64,
    line_buffer: Vec<u8>,
}

impl WordSource {
    /// Open a dictionary file.
    ///
    /// Fails with [`SieveError::FileAccess`] when the path cannot be opened;
    /// the caller propagates this before the pipeline starts.
    pub fn open(path: &Path) -> Result<Self, SieveError> {
        let file = File::open(path).map_err(|source| SieveError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        Ok(Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, file),
            path: path.to_path_buf(),
            size,
            line_buffer: Vec::with_capacity(256),
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the underlying file in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }
}

impl Iterator for WordSource {
    type Item = anyhow::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                while self.line_buffer.last() == Some(&b'\n')
                    || self.line_buffer.last() == Some(&b'\r')
                {
                    self.line_buffer.pop();
                }

                // Input bytes are assumed byte-comparable to the letter set;
                // invalid UTF-8 is carried through lossily rather than dropped.
                match std::str::from_utf8(&self.line_buffer) {
                    Ok(s) => Some(Ok(s.to_string())),
                    Err(_) => Some(Ok(String::from_utf8_lossy(&self.line_buffer).into_owned())),
                }
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_fatal() {
        let err = WordSource::open(Path::new("/no/such/dictionary")).unwrap_err();
        assert!(matches!(err, SieveError::FileAccess { .. }));
    }

    #[test]
    fn test_lines_are_stripped() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "alpha\r\nbeta\ngamma").unwrap();

        let source = WordSource::open(file.path()).unwrap();
        let lines: Vec<_> = source.filter_map(|r| r.ok()).collect();

        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_size_matches_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abcdef").unwrap();

        let source = WordSource::open(file.path()).unwrap();
        assert_eq!(source.size(), 7);
    }

    #[test]
    fn test_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let mut source = WordSource::open(file.path()).unwrap();
        assert!(source.next().is_none());
    }
}
