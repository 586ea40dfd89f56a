// crates/domain/src/listing/options.rs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Flags controlling one listing run (`-a`, `-r`, `-l`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ListingOptions {
    /// Run the full pass, dot entries included.
    #[builder(default)]
    pub include_hidden: bool,
    /// Reverse the sorted result.
    #[builder(default)]
    pub reverse_order: bool,
    /// Render one detailed line per entry instead of the grid.
    #[builder(default)]
    pub long_format: bool,
}
