//! The whole generator run: read the three UCD files from one directory,
//! shrink both range tables, and render them.

use std::path::PathBuf;

use log::{debug, info};

use crate::aliases::{read_property_value_aliases, PropertyValueAliases};
use crate::constants::{
    EAST_ASIAN_WIDTH_TXT, PROPERTY_VALUE_ALIASES_TXT, SCRIPTS_TXT, SCRIPT_ENUM, SCRIPT_MEMBER,
    SCRIPT_PREFIX, SCRIPT_TABLE, WIDTH_ENUM, WIDTH_PREFIX, WIDTH_TABLE,
};
use crate::emit;
use crate::error::{Error, Result};
use crate::field::{coalesce, coalesce_gapped, read_char_set, Field};
use crate::rust_table;
use crate::validate::validate;

/// First line of Rust output.  Items are printed one per line, as token
/// streams, so they read best after `rustfmt`.
pub const RUST_HEADER: &str = "// @generated by generate_ucd_tables; format with rustfmt.\n";

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// C static arrays and enums.
    C,
    /// Rust statics and enums, one item per line.
    Rust,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Directory holding the three UCD files.
    pub ucd_dir: PathBuf,
    pub format: Format,
    /// Emit the enums ahead of the tables in C output.
    pub enums: bool,
    /// Log overlap validation after every pass.
    pub validate: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            ucd_dir: PathBuf::from("."),
            format: Format::C,
            enums: false,
            validate: false,
        }
    }
}

/// Alias data plus both fully coalesced range tables.
pub struct Tables {
    pub aliases: PropertyValueAliases,
    pub scripts: Vec<Field>,
    pub widths: Vec<Field>,
}

fn report(options: &Options, name: &str, pass: &str, fields: &[Field]) {
    debug!("{} {}: {} records", name, pass, fields.len());
    if options.validate {
        info!("{} {}: valid: {}", name, pass, validate(fields));
    }
}

fn shrink(options: &Options, name: &str, fields: Vec<Field>) -> Vec<Field> {
    report(options, name, "read", &fields);
    let fields = coalesce(fields);
    report(options, name, "coalesced", &fields);
    let fields = coalesce_gapped(fields);
    report(options, name, "gap-coalesced", &fields);
    fields
}

pub fn load(options: &Options) -> Result<Tables> {
    let dir = &options.ucd_dir;
    let aliases = read_property_value_aliases(dir.join(PROPERTY_VALUE_ALIASES_TXT))?;
    debug!(
        "{} scripts, {} widths",
        aliases.scripts.len(),
        aliases.widths.names.len()
    );
    let scripts = read_char_set(dir.join(SCRIPTS_TXT))?;
    let widths = read_char_set(dir.join(EAST_ASIAN_WIDTH_TXT))?;

    Ok(Tables {
        scripts: shrink(options, "scripts", scripts),
        widths: shrink(options, "width", widths),
        aliases,
    })
}

/// The width table, then the script table; with `enums`, both enums first.
pub fn render_c(options: &Options, tables: &Tables) -> Result<String> {
    let mut out = String::new();
    if options.enums {
        out.push_str(&emit::build_script_enum(
            SCRIPT_ENUM,
            &tables.aliases.scripts,
        )?);
        out.push_str(&emit::build_width_enum(
            WIDTH_ENUM,
            &tables.aliases.widths.names,
        ));
    }
    out.push_str(&emit::build_width_table(
        WIDTH_PREFIX,
        &tables.widths,
        &tables.aliases.widths,
    )?);
    out.push_str(&emit::build_table(
        SCRIPT_TABLE,
        SCRIPT_MEMBER,
        SCRIPT_PREFIX,
        &tables.scripts,
    ));
    Ok(out)
}

/// `Script` and `Width` enums, then `EA_TABLE` and `SC_TABLE`, one item per
/// line after [`RUST_HEADER`].
pub fn render_rust(tables: &Tables) -> Result<String> {
    let widths = &tables.aliases.widths;
    let items = vec![
        rust_table::script_enum_tokens("Script", &tables.aliases.scripts)?,
        rust_table::width_enum_tokens("Width", &widths.names)?,
        rust_table::range_table_tokens(WIDTH_TABLE, "Width", &tables.widths, |short| {
            widths
                .long_name(short)
                .map(str::to_string)
                .ok_or_else(|| Error::UnknownWidth(short.to_string()))
        })?,
        rust_table::range_table_tokens(SCRIPT_TABLE, "Script", &tables.scripts, |name| {
            Ok(name.to_string())
        })?,
    ];

    let mut out = RUST_HEADER.to_string();
    for item in items {
        out.push_str(&format!("{}\n", item));
    }
    Ok(out)
}

/// Load and render according to `options`.
pub fn generate(options: &Options) -> Result<String> {
    let tables = load(options)?;
    match options.format {
        Format::C => render_c(options, &tables),
        Format::Rust => render_rust(&tables),
    }
}
