//! Range records from `Scripts.txt`-shaped files and the passes that shrink
//! them into as few records as possible.

use std::io::BufRead;
use std::path::Path;

use itertools::Itertools;

use crate::error::Result;
use crate::span::{parse_span, Span};
use crate::types::PropertyList;
use crate::ucd;

/// One UCD record: a span of code points and the property columns that
/// follow it.  Only the first property is ever emitted, but all of them take
/// part in deciding whether two records may be merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub span: Span,
    pub properties: PropertyList,
}

impl Field {
    pub fn new<S: Into<String>>(low: u32, high: u32, properties: Vec<S>) -> Field {
        Field {
            span: Span::new(low, high),
            properties: properties.into_iter().map(Into::into).collect(),
        }
    }

    /// The first property column, the one tables are keyed on.
    pub fn property(&self) -> &str {
        self.properties.first().map(String::as_str).unwrap_or("")
    }
}

fn to_field(mut record: Vec<String>) -> Result<Field> {
    let span = parse_span(&record[0])?;
    let properties = record.split_off(1);
    Ok(Field { span, properties })
}

/// Parse every record of a range file read from `reader`, in file order.
pub fn parse_char_set<R: BufRead>(reader: R) -> Result<Vec<Field>> {
    let mut fields = vec![];
    ucd::parse_ucd(reader, |record| {
        fields.push(to_field(record)?);
        Ok(())
    })?;
    Ok(fields)
}

/// Read every record of the range file at `path`, in file order.
pub fn read_char_set<P: AsRef<Path>>(path: P) -> Result<Vec<Field>> {
    let mut fields = vec![];
    ucd::read_ucd(path, |record| {
        fields.push(to_field(record)?);
        Ok(())
    })?;
    Ok(fields)
}

/// Stable sort by the low end of each span.
pub fn sort_fields(fields: &mut [Field]) {
    fields.sort_by_key(|field| field.span.low);
}

/// Join adjacent fields with identical properties.  Gaps between records
/// survive, so code points absent from the input stay absent.
///
/// Relies on `fields` already being in code point order, as UCD files are.
pub fn coalesce(fields: Vec<Field>) -> Vec<Field> {
    fields
        .into_iter()
        .coalesce(|mut prev, next| {
            if prev.properties == next.properties
                && prev.span.high.checked_add(1) == Some(next.span.low)
            {
                prev.span.high = next.span.high;
                Ok(prev)
            } else {
                Err((prev, next))
            }
        })
        .collect()
}

/// Join fields with identical properties even across gaps in their code
/// point coverage.  A merged record may claim code points the input never
/// listed, so this only suits tables whose lookups already know the code
/// point is assigned some value.
pub fn coalesce_gapped(mut fields: Vec<Field>) -> Vec<Field> {
    sort_fields(&mut fields);
    fields
        .into_iter()
        .coalesce(|mut prev, next| {
            if prev.properties == next.properties {
                prev.span.high = next.span.high;
                Ok(prev)
            } else {
                Err((prev, next))
            }
        })
        .collect()
}

#[test]
fn parses_range_file() {
    let text = "\
0000..001F    ; Common # Cc  [32] <control-0000>..<control-001F>
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
00AA          ; Latin # Lo       FEMININE ORDINAL INDICATOR
";
    let fields = parse_char_set(text.as_bytes()).expect("well-formed");
    assert_eq!(
        fields,
        vec![
            Field::new(0x00, 0x1F, vec!["Common"]),
            Field::new(0x41, 0x5A, vec!["Latin"]),
            Field::new(0xAA, 0xAA, vec!["Latin"]),
        ]
    );
    assert_eq!(fields[1].property(), "Latin");
}

#[test]
fn bad_span_in_range_file() {
    let result = parse_char_set("00G0 ; Latin\n".as_bytes());
    assert!(matches!(result, Err(crate::error::Error::InvalidSpan(_))));
}

#[test]
fn coalesce_example() {
    let input = vec![
        Field::new(0, 2, vec!["L"]),
        Field::new(3, 5, vec!["L"]),
        Field::new(10, 12, vec!["L"]),
    ];

    let adjacent = coalesce(input);
    assert_eq!(
        adjacent,
        vec![Field::new(0, 5, vec!["L"]), Field::new(10, 12, vec!["L"])]
    );

    let gapped = coalesce_gapped(adjacent);
    assert_eq!(gapped, vec![Field::new(0, 12, vec!["L"])]);
}

#[test]
fn coalesce_needs_identical_property_lists() {
    let input = vec![
        Field::new(0, 2, vec!["L"]),
        Field::new(3, 5, vec!["L", "extra"]),
        Field::new(6, 7, vec!["M"]),
        Field::new(8, 9, vec!["L"]),
    ];
    assert_eq!(coalesce(input.clone()).len(), 4);
    assert_eq!(coalesce_gapped(input).len(), 4);
}

#[test]
fn coalesce_at_top_of_range() {
    let input = vec![
        Field::new(0, u32::MAX, vec!["L"]),
        Field::new(0, 0, vec!["L"]),
    ];
    assert_eq!(coalesce(input).len(), 2, "no wraparound past u32::MAX");
}

#[test]
fn gapped_sorts_first() {
    let input = vec![
        Field::new(20, 29, vec!["Greek"]),
        Field::new(0, 9, vec!["Latin"]),
        Field::new(10, 14, vec!["Latin"]),
        Field::new(30, 39, vec!["Greek"]),
    ];
    assert_eq!(
        coalesce_gapped(input),
        vec![
            Field::new(0, 14, vec!["Latin"]),
            Field::new(20, 39, vec!["Greek"]),
        ]
    );
}

#[test]
fn empty_input() {
    assert!(coalesce(vec![]).is_empty());
    assert!(coalesce_gapped(vec![]).is_empty());
}
