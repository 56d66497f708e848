//! Render range tables and value enums as C source.

use crate::aliases::{fourcc_to_int, ScriptAlias, WidthName, WidthNames};
use crate::constants::{SCRIPT_PREFIX, WIDTH_MEMBER, WIDTH_PREFIX, WIDTH_TABLE};
use crate::error::{Error, Result};
use crate::field::Field;

fn table_header(out: &mut String, table_name: &str, member_name: &str) {
    out.push_str(&format!(
        "static const struct {{\n\tuint32_t l;\n\tuint32_t h;\n\tuint32_t {member};\n}} {table}[] = {{\n",
        member = member_name,
        table = table_name,
    ));
}

fn table_row(out: &mut String, field: &Field, prefix: &str, name: &str) {
    out.push_str(&format!(
        "\t{{ {low:#06x}, {high:#06x}, {prefix}{name} }},\n",
        low = field.span.low,
        high = field.span.high,
        prefix = prefix,
        name = name.to_uppercase(),
    ));
}

/// Emit `fields` as a static array of `{ low, high, value }` structs, with
/// each value named `prefix` followed by the uppercased first property.
pub fn build_table(table_name: &str, member_name: &str, prefix: &str, fields: &[Field]) -> String {
    let mut out = String::new();
    table_header(&mut out, table_name, member_name);
    for field in fields {
        table_row(&mut out, field, prefix, field.property());
    }
    out.push_str("};\n");
    out
}

/// Emit the `ea_table` of East Asian Width ranges, naming values by their
/// long names (`GP_WIDTH_WIDE` rather than `GP_WIDTH_W`).
pub fn build_width_table(prefix: &str, fields: &[Field], widths: &WidthNames) -> Result<String> {
    let mut out = String::new();
    table_header(&mut out, WIDTH_TABLE, WIDTH_MEMBER);
    for field in fields {
        let long = widths
            .long_name(field.property())
            .ok_or_else(|| Error::UnknownWidth(field.property().to_string()))?;
        table_row(&mut out, field, prefix, long);
    }
    out.push_str("};\n");
    Ok(out)
}

/// Emit one enumerator per script, valued as its packed four letter tag.
pub fn build_script_enum(enum_name: &str, scripts: &[ScriptAlias]) -> Result<String> {
    let mut out = format!("enum {} {{\n", enum_name);
    for script in scripts {
        out.push_str(&format!(
            "\t{}{} = {:#x},\n",
            SCRIPT_PREFIX,
            script.name.to_uppercase(),
            fourcc_to_int(&script.fourcc)?
        ));
    }
    out.push_str("};\n");
    Ok(out)
}

/// Emit one enumerator per width value, by long name.
pub fn build_width_enum(enum_name: &str, widths: &[WidthName]) -> String {
    let mut out = format!("enum {} {{\n", enum_name);
    for width in widths {
        out.push_str(&format!("\t{}{},\n", WIDTH_PREFIX, width.long.to_uppercase()));
    }
    out.push_str("};\n");
    out
}

#[cfg(test)]
fn test_widths() -> WidthNames {
    let text = "ea ; F ; Fullwidth\nea ; W ; Wide\nea ; N ; Neutral\n";
    crate::aliases::parse_property_value_aliases(text.as_bytes())
        .expect("well-formed")
        .widths
}

#[test]
fn script_table_rows() {
    let fields = vec![
        Field::new(0x41, 0x5A, vec!["Latn"]),
        Field::new(0x1F600, 0x1F64F, vec!["Old_Italic"]),
    ];
    assert_eq!(
        build_table("sc_table", "sc", "GP_SCRIPT_", &fields),
        "static const struct {
\tuint32_t l;
\tuint32_t h;
\tuint32_t sc;
} sc_table[] = {
\t{ 0x0041, 0x005a, GP_SCRIPT_LATN },
\t{ 0x1f600, 0x1f64f, GP_SCRIPT_OLD_ITALIC },
};
"
    );
}

#[test]
fn empty_table() {
    assert!(build_table("t", "m", "P_", &[]).ends_with("} t[] = {\n};\n"));
}

#[test]
fn width_table_uses_long_names() {
    let fields = vec![
        Field::new(0x00, 0x1F, vec!["N"]),
        Field::new(0x1100, 0x115F, vec!["W"]),
        Field::new(0xFF01, 0xFF60, vec!["F"]),
    ];
    let table = build_width_table(WIDTH_PREFIX, &fields, &test_widths()).expect("known widths");
    assert!(table.contains("\tuint32_t ea;\n} ea_table[] = {\n"));
    assert!(table.contains("\t{ 0x0000, 0x001f, GP_WIDTH_NEUTRAL },\n"));
    assert!(table.contains("\t{ 0x1100, 0x115f, GP_WIDTH_WIDE },\n"));
    assert!(table.contains("\t{ 0xff01, 0xff60, GP_WIDTH_FULLWIDTH },\n"));
}

#[test]
fn width_table_unknown_code() {
    let fields = vec![Field::new(0x20, 0x7E, vec!["Na"])];
    match build_width_table(WIDTH_PREFIX, &fields, &test_widths()) {
        Err(Error::UnknownWidth(code)) => assert_eq!(code, "Na"),
        other => panic!("expected unknown width, got {:?}", other),
    }
}

#[test]
fn script_enum() {
    let scripts = vec![ScriptAlias {
        name: "Latin".to_string(),
        fourcc: "Latn".to_string(),
        alias: None,
    }];
    assert_eq!(
        build_script_enum("gpScripts", &scripts).expect("valid fourcc"),
        "enum gpScripts {\n\tGP_SCRIPT_LATIN = 0x4c61746e,\n};\n"
    );

    let bad = vec![ScriptAlias {
        name: "Bogus".to_string(),
        fourcc: "Bog".to_string(),
        alias: None,
    }];
    assert!(matches!(
        build_script_enum("gpScripts", &bad),
        Err(Error::InvalidFourcc(_))
    ));
}

#[test]
fn width_enum() {
    assert_eq!(
        build_width_enum("gpWidth", &test_widths().names),
        "enum gpWidth {\n\tGP_WIDTH_FULLWIDTH,\n\tGP_WIDTH_WIDE,\n\tGP_WIDTH_NEUTRAL,\n};\n"
    );
}
