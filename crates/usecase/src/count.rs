// crates/usecase/src/count.rs
use log::{debug, warn};
use lswc_domain::counting::TextCounts;
use lswc_ports::input::{InputReader, InputSource};
use lswc_shared_kernel::{ApplicationError, LswcError};

use crate::dto::{CountOutput, CountRow};

pub struct CountInputs<'a> {
    reader: &'a dyn InputReader,
}

impl<'a> CountInputs<'a> {
    pub fn new(reader: &'a dyn InputReader) -> Self {
        Self { reader }
    }

    /// Counts every source in order. Unreadable sources are reported in
    /// `failures` and left out of the total.
    pub fn run(&self, sources: &[InputSource]) -> CountOutput {
        let mut output = CountOutput::default();
        for source in sources {
            match self.reader.read_all(source) {
                Ok(buf) => {
                    let counts = TextCounts::from_bytes(&buf);
                    debug!("{source}: {counts:?}");
                    output.rows.push(CountRow { source: source.clone(), counts });
                }
                Err(err) => {
                    warn!("cannot count {source}: {err}");
                    let failure = ApplicationError::CountFailed {
                        input: source.to_string(),
                        reason: err.to_string(),
                        source: Some(Box::new(err)),
                    };
                    output.failures.push((source.clone(), LswcError::from(failure)));
                }
            }
        }
        if sources.len() >= 2 {
            output.total = Some(output.rows.iter().map(|row| &row.counts).sum());
        }
        output
    }
}
