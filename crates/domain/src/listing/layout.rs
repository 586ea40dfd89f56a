// crates/domain/src/listing/layout.rs
//! Fixed-column grid used by the short listing.
//!
//! Names are cut into consecutive groups of `column_count`; output row `r`
//! collects the `r`-th name of every group. Neighbours in sorted order
//! therefore share a visual column, not a visual row.

use std::fmt::Write;

use lswc_shared_kernel::{DomainError, DomainResult};

pub const DEFAULT_COLUMN_COUNT: usize = 7;

/// Gap added after the longest name.
const CELL_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    column_count: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { column_count: DEFAULT_COLUMN_COUNT }
    }
}

impl GridLayout {
    pub fn new(column_count: usize) -> DomainResult<Self> {
        if column_count == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "grid column count must be at least 1".to_string(),
            });
        }
        Ok(Self { column_count })
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Always returns exactly `column_count` rows; trailing rows may be empty.
    pub fn rows<'a, S: AsRef<str>>(&self, names: &'a [S]) -> Vec<Vec<&'a str>> {
        (0..self.column_count)
            .map(|r| {
                names
                    .chunks(self.column_count)
                    .filter_map(|group| group.get(r))
                    .map(|name| name.as_ref())
                    .collect()
            })
            .collect()
    }

    /// Width of every cell: longest name in characters plus the padding.
    pub fn cell_width<S: AsRef<str>>(names: &[S]) -> usize {
        names.iter().map(|n| n.as_ref().chars().count()).max().unwrap_or(0) + CELL_PADDING
    }

    /// Rows joined into printable lines, each cell left-justified, without newlines.
    pub fn render_rows<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let width = Self::cell_width(names);
        self.rows(names)
            .into_iter()
            .map(|row| {
                row.iter().fold(String::new(), |mut line, name| {
                    let _ = write!(line, "{name:<width$}");
                    line
                })
            })
            .collect()
    }
}
