// crates/infra/src/input.rs
use log::debug;
use lswc_ports::input::{InputReader, InputSource};
use lswc_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Reads counter inputs from the real filesystem and standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsInputReader;

impl InputReader for FsInputReader {
    fn read_all(&self, source: &InputSource) -> Result<Vec<u8>> {
        let buf = match source {
            InputSource::Stdin => {
                FileReader::read_stdin().map_err(|source| InfrastructureError::StdinRead { source })?
            }
            InputSource::File(path) => FileReader::read_to_end(path)
                .map_err(|source| InfrastructureError::FileRead { path: path.clone(), source })?,
        };
        debug!("read {} bytes from {source}", buf.len());
        Ok(buf)
    }
}
