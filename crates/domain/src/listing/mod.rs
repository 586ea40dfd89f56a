// crates/domain/src/listing/mod.rs
//! Pure listing rules: which names are shown, in which order, and how they are drawn.

pub mod layout;
pub mod long_format;
pub mod options;
pub mod ordering;
pub mod permission;

pub use layout::{DEFAULT_COLUMN_COUNT, GridLayout};
pub use long_format::{format_long_line, format_timestamp, format_total, kind_glyph};
pub use options::{ListingOptions, ListingOptionsBuilder};
pub use ordering::{SELF_ENTRIES, full_pass, is_hidden, order_names, visible_pass};
pub use permission::format_permissions;
