//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`enumerate`]: ordered entry names for one listing run
//! - [`render`]: grid and long-format rendering
//! - [`count`]: line/word/byte counting over several inputs
//! - [`dto`]: outputs crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod count;
pub mod dto;
pub mod enumerate;
pub mod render;

pub use count::CountInputs;
pub use dto::{CountOutput, CountRow, ListingOutput};
pub use enumerate::EnumerateEntries;
pub use render::RenderListing;
