//! Delimited table reading.
//! The first line of a table holds the header names and every following
//! line holds one row of values. Values are split naively on the separator:
//! quoting and escaping are not supported.

use indexmap::IndexMap;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{Error, Result};

/// One data line of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Maps every header to this row's value at the same position.
    /// With duplicate header names the last value wins.
    pub fn mapping(&self, headers: &[String]) -> IndexMap<String, String> {
        headers
            .iter()
            .cloned()
            .zip(self.fields.iter().cloned())
            .collect()
    }

    /// Name used for the row's own output file: the first value without
    /// outer single quotes and surrounding whitespace.
    pub fn base_name(&self) -> &str {
        self.fields
            .first()
            .map(|f| f.trim_matches('\'').trim())
            .unwrap_or_default()
    }
}

/// Single-pass reader over the rows of a table.
///
/// Iteration stops at end of input or at the first blank line. A malformed
/// row is yielded as an error and ends the iteration.
pub struct Table<R> {
    headers: Vec<String>,
    lines: Lines<R>,
    separator: String,
    done: bool,
}

impl Table<BufReader<File>> {
    /// Opens the table at `path` and reads its header line.
    pub fn open<P: AsRef<Path>>(path: P, separator: &str) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Table::from_reader(BufReader::new(file), separator)
    }
}

impl<R: BufRead> Table<R> {
    /// Reads the header line from `reader`.
    ///
    /// # Errors
    /// * `Error::InvalidInput` if the separator is empty, the first line is
    ///   blank or no header is found
    pub fn from_reader(reader: R, separator: &str) -> Result<Self> {
        if separator.is_empty() {
            return Err(Error::InvalidInput("Empty separator".to_string()));
        }

        let mut lines = reader.lines();
        let first = match lines.next() {
            Some(line) => line?,
            None => String::new(),
        };
        let first = first.trim();
        if first.is_empty() {
            return Err(Error::InvalidInput("Empty CSV".to_string()));
        }

        let headers: Vec<String> = first.split(separator).map(str::to_string).collect();
        if headers.is_empty() {
            return Err(Error::InvalidInput("No headers found in CSV".to_string()));
        }
        debug!("Headers: {:?}", headers);

        Ok(Self {
            headers,
            lines,
            separator: separator.to_string(),
            done: false,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn parse_line(&self, line: &str) -> Result<Row> {
        let fields: Vec<String> = line.split(&self.separator).map(str::to_string).collect();
        if fields.len() != self.headers.len() {
            return Err(Error::InvalidInput(
                "Found a line with not the same number of values than headers are".to_string(),
            ));
        }
        Ok(Row { fields })
    }
}

impl<R: BufRead> Iterator for Table<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let line = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                self.done = true;
                return Some(Err(e.into()));
            }
            None => {
                self.done = true;
                return None;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            debug!("Blank line found, end of table");
            self.done = true;
            return None;
        }

        let row = self.parse_line(line);
        if row.is_err() {
            self.done = true;
        }
        Some(row)
    }
}
