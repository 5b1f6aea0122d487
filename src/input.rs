//! Input sources and the line cursor over their concatenation.
//!
//! Sources are opened only when the cursor reaches them, so a missing
//! second file is reported after the first file has been fully processed.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::CutError;

/// Name used for standard input in diagnostics.
pub const STDIN_NAME: &str = "-";

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Path(PathBuf),
}

impl InputSource {
    /// `-` means standard input; anything else is a path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIN_NAME {
            InputSource::Stdin
        } else {
            InputSource::Path(arg.to_path_buf())
        }
    }

    pub fn name(&self) -> String {
        match self {
            InputSource::Stdin => STDIN_NAME.to_string(),
            InputSource::Path(path) => path.display().to_string(),
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, CutError> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::Path(path) => {
                let file = File::open(path).map_err(|source| CutError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Position of the line most recently returned by [`Inputs::next_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLocation<'a> {
    pub name: &'a str,
    /// 1-based, counted per source.
    pub line: usize,
}

struct OpenInput {
    name: String,
    reader: Box<dyn BufRead>,
    line: usize,
}

/// Forward-only cursor over the lines of several sources in order.
pub struct Inputs {
    pending: VecDeque<InputSource>,
    current: Option<OpenInput>,
    opened: Vec<String>,
}

impl Inputs {
    pub fn new(sources: Vec<InputSource>) -> Self {
        Self {
            pending: sources.into(),
            current: None,
            opened: Vec::new(),
        }
    }

    /// Build from command-line paths. No paths means standard input.
    pub fn from_args(paths: &[PathBuf]) -> Self {
        if paths.is_empty() {
            return Self::new(vec![InputSource::Stdin]);
        }
        Self::new(paths.iter().map(|p| InputSource::from_arg(p)).collect())
    }

    /// Build over an in-memory reader, named `-` in diagnostics.
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        let mut inputs = Self::new(Vec::new());
        inputs.current = Some(OpenInput {
            name: STDIN_NAME.to_string(),
            reader: Box::new(reader),
            line: 0,
        });
        inputs.opened.push(STDIN_NAME.to_string());
        inputs
    }

    /// Names of the sources opened so far.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    /// Read the next line, newline included, into `buf`.
    ///
    /// Returns `None` once every source is exhausted.
    pub fn next_line(&mut self, buf: &mut Vec<u8>) -> Result<Option<LineLocation<'_>>, CutError> {
        loop {
            if self.current.is_none() {
                let Some(source) = self.pending.pop_front() else {
                    return Ok(None);
                };
                let reader = source.open()?;
                let name = source.name();
                self.opened.push(name.clone());
                self.current = Some(OpenInput {
                    name,
                    reader,
                    line: 0,
                });
            }

            if self.read_current(buf)? {
                break;
            }
            self.current = None;
        }

        Ok(self.current.as_ref().map(|input| LineLocation {
            name: &input.name,
            line: input.line,
        }))
    }

    /// Read one line from the open source. `false` means it is exhausted.
    fn read_current(&mut self, buf: &mut Vec<u8>) -> Result<bool, CutError> {
        let Some(input) = self.current.as_mut() else {
            return Ok(false);
        };
        buf.clear();
        let read = input
            .reader
            .read_until(b'\n', buf)
            .map_err(|source| CutError::Read {
                name: input.name.clone(),
                source,
            })?;
        if read == 0 {
            return Ok(false);
        }
        input.line += 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn collect(inputs: &mut Inputs) -> Result<Vec<(String, usize, String)>, CutError> {
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while let Some(loc) = inputs.next_line(&mut buf)? {
            let (name, line) = (loc.name.to_string(), loc.line);
            lines.push((name, line, String::from_utf8(buf.clone()).unwrap()));
        }
        Ok(lines)
    }

    #[test]
    fn test_dash_is_stdin() {
        assert_eq!(InputSource::from_arg(Path::new("-")), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Path::new("a.tsv")),
            InputSource::Path(PathBuf::from("a.tsv"))
        );
    }

    #[test]
    fn test_no_paths_reads_stdin() {
        let inputs = Inputs::from_args(&[]);
        assert_eq!(inputs.pending, VecDeque::from(vec![InputSource::Stdin]));
    }

    #[test]
    fn test_reader_lines_keep_newline() {
        let mut inputs = Inputs::from_reader(Cursor::new("a\tb\nc\td"));
        let lines = collect(&mut inputs).unwrap();
        assert_eq!(
            lines,
            vec![
                ("-".to_string(), 1, "a\tb\n".to_string()),
                ("-".to_string(), 2, "c\td".to_string()),
            ]
        );
    }

    #[test]
    fn test_files_concatenated_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.tsv");
        let second = dir.path().join("second.tsv");
        fs::write(&first, "1\n2\n").unwrap();
        fs::write(&second, "3\n").unwrap();

        let mut inputs = Inputs::from_args(&[first.clone(), second.clone()]);
        let lines = collect(&mut inputs).unwrap();
        let bodies: Vec<&str> = lines.iter().map(|(_, _, l)| l.as_str()).collect();
        assert_eq!(bodies, vec!["1\n", "2\n", "3\n"]);
        // line numbers restart per source
        assert_eq!(lines[2].1, 1);
        assert_eq!(inputs.opened().len(), 2);
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty.tsv");
        fs::write(&empty, "").unwrap();

        let mut inputs = Inputs::from_args(&[empty]);
        assert!(collect(&mut inputs).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_opened_lazily() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.tsv");
        fs::write(&present, "x\n").unwrap();
        let missing = dir.path().join("missing.tsv");

        let mut inputs = Inputs::from_args(&[present, missing]);
        let mut buf = Vec::new();
        assert!(inputs.next_line(&mut buf).unwrap().is_some());
        assert_eq!(buf, b"x\n");
        assert!(matches!(
            inputs.next_line(&mut buf),
            Err(CutError::Open { .. })
        ));
    }
}
