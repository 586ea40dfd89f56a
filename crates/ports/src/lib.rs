// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: directory enumeration and per-entry stat
//! - [`accounts`]: owner/group id to name resolution
//! - [`input`]: byte sources for the counter (files, standard input)
//!
//! The use cases depend only on these traits, never on the adapters.

#![allow(clippy::multiple_crate_versions)]

pub mod accounts;
pub mod filesystem;
pub mod input;
