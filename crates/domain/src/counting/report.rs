// crates/domain/src/counting/report.rs
use super::{CountOptions, TextCounts};

pub const COUNT_WIDTH: usize = 8;
pub const TOTAL_LABEL: &str = "total";

/// One output row. `label` is the file name, `total`, or `None` for stdin.
pub fn format_row(counts: &TextCounts, label: Option<&str>, options: &CountOptions) -> String {
    let mut row = if options.lines_only {
        format!("{:>w$}", counts.lines, w = COUNT_WIDTH)
    } else {
        format!("{:>w$} {:>w$} {:>w$}", counts.lines, counts.words, counts.bytes, w = COUNT_WIDTH)
    };
    if let Some(label) = label {
        row.push(' ');
        row.push_str(label);
    }
    row
}
