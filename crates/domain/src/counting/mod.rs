// crates/domain/src/counting/mod.rs
//! Line/word/byte statistics for the `wc` tool.

mod report;

use std::{iter::Sum, ops::Add};

use derive_builder::Builder;
use lswc_shared_kernel::{ByteCount, LineCount, WordCount};
use serde::{Deserialize, Serialize};

pub use report::{COUNT_WIDTH, TOTAL_LABEL, format_row};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct CountOptions {
    /// Print only the line column (`-l`).
    #[builder(default)]
    pub lines_only: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub lines: LineCount,
    pub words: WordCount,
    pub bytes: ByteCount,
}

impl TextCounts {
    /// Counts one complete input buffer.
    pub fn from_bytes(buf: &[u8]) -> Self {
        Self {
            lines: LineCount::new(bytecount::count(buf, b'\n')),
            words: WordCount::new(count_words(buf)),
            bytes: ByteCount::new(buf.len()),
        }
    }
}

impl Add for TextCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { lines: self.lines + rhs.lines, words: self.words + rhs.words, bytes: self.bytes + rhs.bytes }
    }
}

impl<'a> Sum<&'a TextCounts> for TextCounts {
    fn sum<I: Iterator<Item = &'a TextCounts>>(iter: I) -> Self {
        iter.copied().fold(Self::default(), Add::add)
    }
}

/// Space, tab, newline, carriage return, vertical tab, form feed.
#[inline]
fn is_word_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn count_words(buf: &[u8]) -> usize {
    buf.split(|b| is_word_separator(*b)).filter(|word| !word.is_empty()).count()
}
