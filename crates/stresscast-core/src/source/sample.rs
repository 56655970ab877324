use super::{RecordSource, SourceOutput};
use crate::error::Result;
use crate::record::Record;

/// Built-in people for quick checks.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Alice", 75.0, 8.0, 40.0),
        Record::new("Bob", 92.5, 5.5, 65.0),
        Record::new("Charlie", 81.0, 7.0, 50.0),
        Record::new("Diana", 68.0, 9.5, 30.0),
    ]
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SampleSource;

impl RecordSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn load(&mut self) -> Result<SourceOutput> {
        Ok(SourceOutput::from_records(sample_records()))
    }
}
