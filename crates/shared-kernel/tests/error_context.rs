// crates/shared-kernel/tests/error_context.rs
use std::io;

use lswc_shared_kernel::{DirectoryReadError, ErrorContext, LswcError, StatError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().map_err(LswcError::from).context("reading input").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading input"));
    assert!(display.contains("Output error:"));
}

#[test]
fn directory_read_keeps_its_source_under_context() {
    let err: std::result::Result<(), DirectoryReadError> = Err(DirectoryReadError {
        path: ".".into(),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    });
    let wrapped = err.with_context(|| "listing".to_string()).unwrap_err();

    assert!(wrapped.to_string().starts_with("listing: "));
    let source = std::error::Error::source(&wrapped).expect("context keeps the source");
    assert!(source.to_string().contains("cannot read directory '.'"));
}

#[test]
fn stat_error_names_the_entry() {
    let err = StatError { name: "gone.txt".into(), source: io::Error::from(io::ErrorKind::NotFound) };
    assert!(err.to_string().starts_with("cannot access 'gone.txt': "));
    assert!(LswcError::from(err).to_string().starts_with("Infrastructure error: cannot access"));
}
