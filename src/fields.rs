//! Field selection: which tab-delimited columns to keep, and in what order.
//!
//! Positions arrive 1-based from the command line and are stored 0-based.
//! Order matters and duplicates are kept, so `[2, 2]` on `a\tb\tc`
//! produces `b\tb`.

use crate::error::CutError;

/// Field separator for both input and output.
pub const TAB: u8 = b'\t';

/// A requested index that the current line cannot satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFault {
    /// The 1-based position as the caller supplied it.
    pub position: i64,
    /// Number of fields the line actually has.
    pub available: usize,
}

/// Ordered list of 0-based field indices.
///
/// Signed so that a position of `0` (or below) survives parsing and is
/// reported as an out-of-range fault when a line is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    indices: Vec<i64>,
}

impl FieldSelection {
    /// Build a selection from 1-based positions.
    pub fn from_positions(positions: &[i64]) -> Result<Self, CutError> {
        if positions.is_empty() {
            return Err(CutError::NoFields);
        }
        Ok(Self {
            indices: positions.iter().map(|p| p.saturating_sub(1)).collect(),
        })
    }

    /// The 0-based indices, in output order.
    pub fn indices(&self) -> &[i64] {
        &self.indices
    }

    /// Append the selected fields of `line`, joined by tabs, to `out`.
    ///
    /// `line` must already have its newline stripped. Nothing is appended
    /// for the fields after a fault, but fields before it may be.
    pub fn select_into(&self, line: &[u8], out: &mut Vec<u8>) -> Result<(), FieldFault> {
        let fields: Vec<&[u8]> = line.split(|&b| b == TAB).collect();
        for (i, &index) in self.indices.iter().enumerate() {
            let field = usize::try_from(index)
                .ok()
                .and_then(|idx| fields.get(idx))
                .ok_or(FieldFault {
                    position: index.saturating_add(1),
                    available: fields.len(),
                })?;
            if i > 0 {
                out.push(TAB);
            }
            out.extend_from_slice(field);
        }
        Ok(())
    }
}

/// Remove a single trailing `\n`, leaving any `\r` in place.
pub fn strip_newline(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}
