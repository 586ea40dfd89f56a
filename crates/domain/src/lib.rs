// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod counting;
pub mod listing;

pub use lswc_shared_kernel::value_objects;
