//! Reads the line-oriented, `;`-delimited format shared by the UCD files.
//!
//! The format is:
//!
//! ```text
//! # comment
//! <field>; <field>; ...    # trailing comment
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// An iterator over the records of a UCD file, each record being its trimmed
/// fields.
pub struct UcdRecords<R> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> UcdRecords<R> {
    pub fn new(reader: R) -> UcdRecords<R> {
        UcdRecords {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for UcdRecords<R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(Error::Io(e))),
            };
            self.line_number += 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line
                .split('#')
                .next()
                .expect("splitting returns at least one string");

            let fields = line
                .split(';')
                .map(|field| field.trim().to_string())
                .collect::<Vec<String>>();
            if fields.len() < 2 {
                return Some(Err(Error::MalformedRecord {
                    line: self.line_number,
                    text: line.to_string(),
                }));
            }

            return Some(Ok(fields));
        }
    }
}

/// Stream every record of `reader` into `handler`, stopping at the first
/// error from either side.
pub fn parse_ucd<R, F>(reader: R, mut handler: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(Vec<String>) -> Result<()>,
{
    for record in UcdRecords::new(reader) {
        handler(record?)?;
    }
    Ok(())
}

/// Open the UCD file at `path` and stream its records into `handler`.  The
/// file is closed before this returns.
pub fn read_ucd<P, F>(path: P, handler: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(Vec<String>) -> Result<()>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("reading {}", path.display());
    parse_ucd(BufReader::new(file), handler)
}

#[cfg(test)]
fn records(text: &str) -> Result<Vec<Vec<String>>> {
    UcdRecords::new(text.as_bytes()).collect()
}

#[test]
fn skips_comments_and_blank_lines() {
    let text = "\
# Scripts-15.0.0.txt

0000..001F    ; Common # Cc  [32] <control-0000>..<control-001F>
   # indented comment
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z";
    let records = records(text).expect("well-formed");
    assert_eq!(
        records,
        vec![
            vec!["0000..001F".to_string(), "Common".to_string()],
            vec!["0041..005A".to_string(), "Latin".to_string()],
        ],
        "comments stripped, last line read without trailing newline"
    );
}

#[test]
fn keeps_every_column() {
    let records = records("sc ; Copt ; Coptic ; Qaac\n").expect("well-formed");
    assert_eq!(records[0], vec!["sc", "Copt", "Coptic", "Qaac"]);
}

#[test]
fn single_field_is_malformed() {
    match records("# header\n0041 ; Latin\n0042 # no property\n") {
        Err(Error::MalformedRecord { line, text }) => {
            assert_eq!(line, 3);
            assert_eq!(text.trim(), "0042");
        }
        other => panic!("expected a malformed record, got {:?}", other),
    }
}

#[test]
fn missing_file_fails_to_open() {
    let result = read_ucd("this/file/does/not/exist.txt", |_| Ok(()));
    assert!(matches!(result, Err(Error::Open { .. })));
}

#[test]
fn handler_errors_propagate() {
    let result = parse_ucd("0041 ; Latin\n".as_bytes(), |_| {
        Err(Error::InvalidSpan("from handler".to_string()))
    });
    assert!(matches!(result, Err(Error::InvalidSpan(_))));
}
