//! # tabcut
//!
//! Select tab-delimited fields from lines of text.
//!
//! A deliberately small `cut -f` work-alike used as a throughput baseline:
//! each line is split on tabs, the requested fields are picked out in the
//! requested order, and they are written back out joined by tabs.
//!
//! ## Overview
//!
//! - **Field positions** are 1-based on input and may repeat or reorder
//! - **Inputs** are files or standard input, read as one concatenated stream
//! - **Faults** are fatal: a line that is too short ends the run
//!
//! ## Example
//!
//! ```
//! use tabcut::{FieldSelection, cut_bytes};
//!
//! let selection = FieldSelection::from_positions(&[1, 3]).unwrap();
//! let output = cut_bytes(&selection, b"alice\t30\tengineer\n").unwrap();
//!
//! assert_eq!(output, b"alice\tengineer\n");
//! ```

pub mod error;
pub mod executor;
pub mod fields;
pub mod input;

pub use error::CutError;
pub use executor::{RunSummary, cut_bytes, execute};
pub use fields::{FieldFault, FieldSelection, TAB, strip_newline};
pub use input::{InputSource, Inputs, LineLocation, STDIN_NAME};
