// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

/// Helpers for reading whole inputs with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> io::Result<Vec<u8>> {
        Self::drain(File::open(path)?)
    }

    /// Read standard input to exhaustion.
    pub fn read_stdin() -> io::Result<Vec<u8>> {
        Self::drain(io::stdin().lock())
    }

    fn drain(mut reader: impl Read) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
