// crates/usecase/src/dto.rs
use lswc_domain::counting::{CountOptions, TOTAL_LABEL, TextCounts, format_row};
use lswc_ports::input::InputSource;
use lswc_shared_kernel::{LswcError, StatError};

/// Rendered listing text plus the entries that could not be read.
#[derive(Debug, Default)]
pub struct ListingOutput {
    pub text: String,
    pub failures: Vec<StatError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub source: InputSource,
    pub counts: TextCounts,
}

#[derive(Debug, Default)]
pub struct CountOutput {
    pub rows: Vec<CountRow>,
    /// Present once two or more inputs were requested.
    pub total: Option<TextCounts>,
    pub failures: Vec<(InputSource, LswcError)>,
}

impl CountOutput {
    pub fn render(&self, options: &CountOptions) -> String {
        let mut text = String::new();
        for row in &self.rows {
            text.push_str(&format_row(&row.counts, row.source.label().as_deref(), options));
            text.push('\n');
        }
        if let Some(total) = &self.total {
            text.push_str(&format_row(total, Some(TOTAL_LABEL), options));
            text.push('\n');
        }
        text
    }
}
