//! Processes `PropertyValueAliases.txt` to extract script and East Asian
//! Width value names.
//!
//! Rows of interest look like:
//!
//! ```text
//! sc ; Latn ; Latin
//! sc ; Copt ; Coptic ; Qaac
//! ea ; W    ; Wide
//! ```

use std::io::BufRead;
use std::path::Path;

use crate::constants::{SCRIPT_PROPERTY, WIDTH_PROPERTY};
use crate::error::{Error, Result};
use crate::types::WidthNameMap;
use crate::ucd;

/// A script value: its long name, its four letter ISO 15924 tag, and an
/// optional further alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptAlias {
    pub name: String,
    pub fourcc: String,
    pub alias: Option<String>,
}

/// A single East Asian Width value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidthName {
    pub short: String,
    pub long: String,
}

/// East Asian Width values in file order, plus a lookup from short code to
/// long name.
#[derive(Clone, Debug, Default)]
pub struct WidthNames {
    pub names: Vec<WidthName>,
    pub map: WidthNameMap,
}

impl WidthNames {
    fn push(&mut self, short: String, long: String) {
        self.map.insert(short.clone(), long.clone());
        self.names.push(WidthName { short, long });
    }

    pub fn long_name(&self, short: &str) -> Option<&str> {
        self.map.get(short).map(String::as_str)
    }
}

/// Every script and width value from one alias file.
#[derive(Clone, Debug, Default)]
pub struct PropertyValueAliases {
    pub scripts: Vec<ScriptAlias>,
    pub widths: WidthNames,
}

impl PropertyValueAliases {
    fn accept(&mut self, mut record: Vec<String>) -> Result<()> {
        if record.len() < 3 {
            // Only a handful of rows (e.g. `ccc` ones) have a different
            // shape, and none of them are script or width rows.
            return Ok(());
        }

        if record[0] == SCRIPT_PROPERTY {
            let alias = record.get(3).cloned();
            let name = record.swap_remove(2);
            let fourcc = record.swap_remove(1);
            self.scripts.push(ScriptAlias {
                name,
                fourcc,
                alias,
            });
        } else if record[0] == WIDTH_PROPERTY {
            let long = record.swap_remove(2);
            let short = record.swap_remove(1);
            self.widths.push(short, long);
        }
        Ok(())
    }
}

pub fn parse_property_value_aliases<R: BufRead>(reader: R) -> Result<PropertyValueAliases> {
    let mut aliases = PropertyValueAliases::default();
    ucd::parse_ucd(reader, |record| aliases.accept(record))?;
    Ok(aliases)
}

pub fn read_property_value_aliases<P: AsRef<Path>>(path: P) -> Result<PropertyValueAliases> {
    let mut aliases = PropertyValueAliases::default();
    ucd::read_ucd(path, |record| aliases.accept(record))?;
    Ok(aliases)
}

/// Pack a four character tag into a `u32`, first character in the most
/// significant byte.
pub fn fourcc_to_int(fourcc: &str) -> Result<u32> {
    let bytes = fourcc.as_bytes();
    if bytes.len() != 4 || !fourcc.is_ascii() {
        return Err(Error::InvalidFourcc(fourcc.to_string()));
    }
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[test]
fn packs_fourcc() {
    assert_eq!(
        fourcc_to_int("Latn").expect("four ASCII characters"),
        (0x4C << 24) | (0x61 << 16) | (0x74 << 8) | 0x6E
    );
    assert_eq!(fourcc_to_int("Zyyy").expect("four ASCII characters"), 0x5a79_7979);
}

#[test]
fn rejects_bad_fourcc() {
    for bad in &["Lat", "Latin", "", "Lät"] {
        assert!(
            matches!(fourcc_to_int(bad), Err(Error::InvalidFourcc(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn parses_alias_rows() {
    let text = "\
# East_Asian_Width (ea)

ea ; A                                ; Ambiguous
ea ; W                                ; Wide

# Canonical_Combining_Class (ccc)
ccc;   0; NR                         ; Not_Reordered

# Script (sc)

sc ; Copt                             ; Coptic                           ; Qaac
sc ; Latn                             ; Latin
";
    let aliases = parse_property_value_aliases(text.as_bytes()).expect("well-formed");

    assert_eq!(
        aliases.scripts,
        vec![
            ScriptAlias {
                name: "Coptic".to_string(),
                fourcc: "Copt".to_string(),
                alias: Some("Qaac".to_string()),
            },
            ScriptAlias {
                name: "Latin".to_string(),
                fourcc: "Latn".to_string(),
                alias: None,
            },
        ]
    );

    let shorts = aliases
        .widths
        .names
        .iter()
        .map(|w| w.short.as_str())
        .collect::<Vec<_>>();
    assert_eq!(shorts, vec!["A", "W"]);
    assert_eq!(aliases.widths.long_name("W"), Some("Wide"));
    assert_eq!(aliases.widths.long_name("Na"), None);
}
