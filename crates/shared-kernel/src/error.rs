// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LswcError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LswcError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, LswcError>;

/// The working directory could not be enumerated.
#[derive(Debug, Error)]
#[error("cannot read directory '{path}': {source}")]
pub struct DirectoryReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A single entry could not be stat'ed.
///
/// Usually the entry vanished between enumeration and the metadata read, or
/// the caller lacks permission on it. Callers treat this as a per-entry failure.
#[derive(Debug, Error)]
#[error("cannot access '{name}': {source}")]
pub struct StatError {
    pub name: String,
    #[source]
    pub source: std::io::Error,
}

pub type StatResult<T> = std::result::Result<T, StatError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to count input '{input}': {reason}")]
    CountFailed {
        input: String,
        reason: String,
        #[source]
        source: Option<Box<LswcError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error(transparent)]
    DirectoryRead(#[from] DirectoryReadError),

    #[error(transparent)]
    Stat(#[from] StatError),

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for LswcError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<DirectoryReadError> for LswcError {
    fn from(err: DirectoryReadError) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<StatError> for LswcError {
    fn from(err: StatError) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LswcError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LswcError::Context { context: context.into(), source: Box::new(e.into()) })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LswcError::Context { context: f(), source: Box::new(e.into()) })
    }
}
