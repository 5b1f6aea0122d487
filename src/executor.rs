//! Line-at-a-time executor.
//!
//! Each input line is read, split, selected, and written before the next
//! line is read. The first fault ends the run; whatever was already
//! produced is flushed to the writer before the error is returned.

use std::io::{Cursor, Write};

use crate::error::CutError;
use crate::fields::{FieldSelection, strip_newline};
use crate::input::Inputs;

/// Line counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Run `selection` over every line of `inputs`, writing to `output`.
pub fn execute<W: Write>(
    selection: &FieldSelection,
    inputs: &mut Inputs,
    output: &mut W,
) -> Result<RunSummary, CutError> {
    let mut summary = RunSummary::default();
    let outcome = process_lines(selection, inputs, output, &mut summary);
    output.flush().map_err(CutError::Write)?;
    outcome.map(|()| summary)
}

fn process_lines<W: Write>(
    selection: &FieldSelection,
    inputs: &mut Inputs,
    output: &mut W,
    summary: &mut RunSummary,
) -> Result<(), CutError> {
    let mut line = Vec::new();
    let mut selected = Vec::new();

    while let Some(location) = inputs.next_line(&mut line)? {
        summary.lines_read += 1;
        selected.clear();
        selection
            .select_into(strip_newline(&line), &mut selected)
            .map_err(|fault| CutError::FieldOutOfRange {
                name: location.name.to_string(),
                line: location.line,
                position: fault.position,
                available: fault.available,
            })?;
        selected.push(b'\n');
        output.write_all(&selected).map_err(CutError::Write)?;
        summary.lines_written += 1;
    }
    Ok(())
}

/// Run `selection` over an in-memory buffer and return the output bytes.
pub fn cut_bytes(selection: &FieldSelection, input: &[u8]) -> Result<Vec<u8>, CutError> {
    let mut inputs = Inputs::from_reader(Cursor::new(input.to_vec()));
    let mut output = Vec::new();
    execute(selection, &mut inputs, &mut output)?;
    Ok(output)
}
