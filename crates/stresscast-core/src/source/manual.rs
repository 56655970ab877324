//! Interactive record entry.

use std::io::{self, BufRead, Write};

use super::{parse_number, RecordSource, SourceOutput};
use crate::error::Result;
use crate::record::Record;

const BAD_NUMBER: &str = "  Bad number. Try that person again.";
const INCOMPLETE: &str = "  Entry incomplete, discarded.";

/// Write `label`, then read one trimmed line.
///
/// Returns `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for people until a blank name or end of input.
///
/// An entry with any unparsable number is discarded and the whole person is
/// asked for again.
pub struct ManualSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ManualSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, label)
    }

    /// One person, `Ok(None)` once the user is done.
    fn read_entry(&mut self) -> io::Result<Option<EntryOutcome>> {
        let name = match self.prompt("Name: ")? {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };

        let mut values = [0.0; 3];
        let fields = [
            ("heart_rate_bpm", "  Avg heart rate (BPM): "),
            ("sleep_hours_per_day", "  Sleep hours/day: "),
            ("work_hours_per_week", "  Work hours/week: "),
        ];
        for (slot, (field, label)) in values.iter_mut().zip(fields) {
            let Some(answer) = self.prompt(label)? else {
                writeln!(self.output)?;
                writeln!(self.output, "{INCOMPLETE}")?;
                tracing::debug!(%name, "input ended mid-entry");
                return Ok(None);
            };
            match parse_number(field, &answer) {
                Ok(value) => *slot = value,
                Err(err) => {
                    tracing::debug!(%name, %err, "rejected manual entry");
                    return Ok(Some(EntryOutcome::Rejected));
                }
            }
        }

        let [heart_rate, sleep, work] = values;
        Ok(Some(EntryOutcome::Accepted(Record::new(
            name, heart_rate, sleep, work,
        ))))
    }
}

enum EntryOutcome {
    Accepted(Record),
    Rejected,
}

impl<R: BufRead, W: Write> RecordSource for ManualSource<R, W> {
    fn name(&self) -> &str {
        "manual"
    }

    fn load(&mut self) -> Result<SourceOutput> {
        writeln!(self.output, "Enter people. Leave 'Name' blank to finish.")?;

        let mut records = Vec::new();
        while let Some(outcome) = self.read_entry()? {
            match outcome {
                EntryOutcome::Accepted(record) => records.push(record),
                EntryOutcome::Rejected => writeln!(self.output, "{BAD_NUMBER}")?,
            }
        }

        tracing::debug!(count = records.len(), "manual entry finished");
        Ok(SourceOutput::from_records(records))
    }
}
