use ucd_tables::aliases::parse_property_value_aliases;
use ucd_tables::constants::{SCRIPT_MEMBER, SCRIPT_PREFIX, SCRIPT_TABLE, WIDTH_PREFIX};
use ucd_tables::emit::{build_table, build_width_table};
use ucd_tables::field::{coalesce, coalesce_gapped, parse_char_set};
use ucd_tables::validate::validate;

static ALIASES_TXT: &str = "\
# PropertyValueAliases excerpt

ea ; A                                ; Ambiguous
ea ; F                                ; Fullwidth
ea ; H                                ; Halfwidth
ea ; N                                ; Neutral
ea ; Na                               ; Narrow
ea ; W                                ; Wide

sc ; Grek                             ; Greek
sc ; Latn                             ; Latin
sc ; Zyyy                             ; Common
";

static SCRIPTS_TXT: &str = "\
0000..001F    ; Common # Cc  [32] <control-0000>..<control-001F>
0020          ; Common # Zs       SPACE
0021..0023    ; Common # Po   [3] EXCLAMATION MARK..NUMBER SIGN
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
0061..007A    ; Latin # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
0370..0373    ; Greek # L&   [4] GREEK CAPITAL LETTER HETA..GREEK SMALL LETTER ARCHAIC SAMPI
0375          ; Common # Sk       GREEK LOWER NUMERAL SIGN
0376..0377    ; Greek # L&   [2] GREEK CAPITAL LETTER PAMPHYLIAN DIGAMMA..GREEK SMALL LETTER PAMPHYLIAN DIGAMMA
";

static WIDTH_TXT: &str = "\
0000..001F     ; N  # Cc    [32] <control-0000>..<control-001F>
0020           ; Na # Zs         SPACE
0021..0023     ; Na # Po     [3] EXCLAMATION MARK..NUMBER SIGN
1100..115F     ; W  # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER
FF01..FF03     ; F  # Po     [3] FULLWIDTH EXCLAMATION MARK..FULLWIDTH NUMBER SIGN
";

#[test]
fn script_table_pipeline() {
    let fields = parse_char_set(SCRIPTS_TXT.as_bytes()).expect("well-formed scripts");
    assert_eq!(fields.len(), 8);
    assert!(validate(&fields));

    let adjacent = coalesce(fields);
    assert_eq!(adjacent.len(), 6);
    assert!(validate(&adjacent));

    let gapped = coalesce_gapped(adjacent);
    assert_eq!(gapped.len(), 5);

    assert_eq!(
        build_table(SCRIPT_TABLE, SCRIPT_MEMBER, SCRIPT_PREFIX, &gapped),
        "static const struct {
\tuint32_t l;
\tuint32_t h;
\tuint32_t sc;
} sc_table[] = {
\t{ 0x0000, 0x0023, GP_SCRIPT_COMMON },
\t{ 0x0041, 0x007a, GP_SCRIPT_LATIN },
\t{ 0x0370, 0x0373, GP_SCRIPT_GREEK },
\t{ 0x0375, 0x0375, GP_SCRIPT_COMMON },
\t{ 0x0376, 0x0377, GP_SCRIPT_GREEK },
};
"
    );
}

#[test]
fn width_table_pipeline() {
    let aliases = parse_property_value_aliases(ALIASES_TXT.as_bytes()).expect("well-formed");
    assert_eq!(aliases.scripts.len(), 3);
    assert_eq!(aliases.widths.names.len(), 6);

    let fields = parse_char_set(WIDTH_TXT.as_bytes()).expect("well-formed widths");
    let fields = coalesce_gapped(coalesce(fields));
    assert_eq!(fields.len(), 4);

    let table =
        build_width_table(WIDTH_PREFIX, &fields, &aliases.widths).expect("known width codes");
    assert!(table.starts_with("static const struct {\n"));
    assert!(table.contains("} ea_table[] = {\n"));
    assert!(table.ends_with(
        "\t{ 0x0000, 0x001f, GP_WIDTH_NEUTRAL },
\t{ 0x0020, 0x0023, GP_WIDTH_NARROW },
\t{ 0x1100, 0x115f, GP_WIDTH_WIDE },
\t{ 0xff01, 0xff03, GP_WIDTH_FULLWIDTH },
};
"
    ));
}
