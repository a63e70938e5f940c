//! Log Reader
//!
//! Scans records from the link log line by line.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::{Path, PathBuf};

use crate::error::{LinkError, Result};
use super::LogRecord;

/// Reads records from a link log in file order
pub struct LogReader<R> {
    lines: Lines<R>,

    /// Path reported in format errors
    path: PathBuf,

    /// 1-based number of the last line read
    line_number: usize,

    blank_lines: u64,
}

impl LogReader<BufReader<File>> {
    /// Open a log file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> LogReader<R> {
    /// Wrap any buffered reader; `path` is only used in error messages
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            lines: reader.lines(),
            path: path.into(),
            line_number: 0,
            blank_lines: 0,
        }
    }

    /// Read the next record, skipping blank lines.
    ///
    /// Returns `Ok(None)` at end of file.
    pub fn next_record(&mut self) -> Result<Option<LogRecord>> {
        loop {
            let line = match self.lines.next() {
                None => return Ok(None),
                Some(Ok(line)) => line,
                Some(Err(e)) if e.kind() == ErrorKind::InvalidData => {
                    self.line_number += 1;
                    return Err(self.format_error("<invalid UTF-8>".to_string()));
                }
                Some(Err(e)) => return Err(e.into()),
            };
            self.line_number += 1;

            if line.is_empty() {
                self.blank_lines += 1;
                continue;
            }

            return match LogRecord::parse(&line) {
                Some(record) => Ok(Some(record)),
                None => Err(self.format_error(line)),
            };
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Number of blank lines skipped so far
    pub fn blank_lines(&self) -> u64 {
        self.blank_lines
    }

    fn format_error(&self, line: String) -> LinkError {
        LinkError::Format {
            path: self.path.clone(),
            line_number: self.line_number,
            line,
        }
    }
}

impl<R: BufRead> Iterator for LogReader<R> {
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
