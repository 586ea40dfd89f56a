// crates/ports/src/input.rs
use std::{fmt, path::PathBuf};

use lswc_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Where the counter reads its bytes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Label printed next to the counts; standard input has none.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path.display().to_string()),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Port reading an input source to the end.
pub trait InputReader: Send + Sync {
    fn read_all(&self, source: &InputSource) -> Result<Vec<u8>>;
}
