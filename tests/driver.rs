use std::fs;
use std::path::Path;
use std::process::Command;

use ucd_tables::error::Error;
use ucd_tables::generate::{generate, Format, Options, RUST_HEADER};

static ALIASES_TXT: &str = "\
# PropertyValueAliases excerpt
ea ; N                                ; Neutral
ea ; Na                               ; Narrow
ea ; W                                ; Wide
sc ; Latn                             ; Latin
sc ; Zyyy                             ; Common
";

static SCRIPTS_TXT: &str = "\
0000..001F    ; Common # Cc  [32] <control-0000>..<control-001F>
0020          ; Common # Zs       SPACE
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
0061..007A    ; Latin # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
";

static WIDTH_TXT: &str = "\
0000..001F     ; N  # Cc    [32] <control-0000>..<control-001F>
0020..007E     ; Na # Zs   [95] SPACE..TILDE
1100..115F     ; W  # Lo    [96] HANGUL CHOSEONG KIYEOK..HANGUL CHOSEONG FILLER
";

static TABLES_C: &str = "\
static const struct {
\tuint32_t l;
\tuint32_t h;
\tuint32_t ea;
} ea_table[] = {
\t{ 0x0000, 0x001f, GP_WIDTH_NEUTRAL },
\t{ 0x0020, 0x007e, GP_WIDTH_NARROW },
\t{ 0x1100, 0x115f, GP_WIDTH_WIDE },
};
static const struct {
\tuint32_t l;
\tuint32_t h;
\tuint32_t sc;
} sc_table[] = {
\t{ 0x0000, 0x0020, GP_SCRIPT_COMMON },
\t{ 0x0041, 0x007a, GP_SCRIPT_LATIN },
};
";

static ENUMS_C: &str = "\
enum gpScripts {
\tGP_SCRIPT_LATIN = 0x4c61746e,
\tGP_SCRIPT_COMMON = 0x5a797979,
};
enum gpWidth {
\tGP_WIDTH_NEUTRAL,
\tGP_WIDTH_NARROW,
\tGP_WIDTH_WIDE,
};
";

fn tempdir_or_panic() -> tempfile::TempDir {
    tempfile::tempdir().unwrap_or_else(|err| panic!("temp dir: {}", err))
}

fn write_ucd(dir: &Path, scripts: &str) {
    fs::write(dir.join("PropertyValueAliases.txt"), ALIASES_TXT).expect("write aliases");
    fs::write(dir.join("Scripts.txt"), scripts).expect("write scripts");
    fs::write(dir.join("EastAsianWidth.txt"), WIDTH_TXT).expect("write widths");
}

fn options(dir: &Path) -> Options {
    Options {
        ucd_dir: dir.to_path_buf(),
        ..Options::default()
    }
}

#[test]
fn width_table_then_script_table() {
    let dir = tempdir_or_panic();
    write_ucd(dir.path(), SCRIPTS_TXT);
    assert_eq!(generate(&options(dir.path())).expect("generates"), TABLES_C);
}

#[test]
fn enums_come_before_tables() {
    let dir = tempdir_or_panic();
    write_ucd(dir.path(), SCRIPTS_TXT);
    let opts = Options {
        enums: true,
        validate: true,
        ..options(dir.path())
    };
    let out = generate(&opts).expect("generates");
    assert_eq!(out, format!("{}{}", ENUMS_C, TABLES_C));
}

#[test]
fn rust_items_one_per_line() {
    let dir = tempdir_or_panic();
    write_ucd(dir.path(), SCRIPTS_TXT);
    let opts = Options {
        format: Format::Rust,
        ..options(dir.path())
    };
    let out = generate(&opts).expect("generates");
    assert!(out.starts_with(RUST_HEADER));

    let items = out[RUST_HEADER.len()..]
        .lines()
        .map(|line| syn::parse_str::<syn::Item>(line).expect("a Rust item"))
        .collect::<Vec<syn::Item>>();
    let names = items
        .iter()
        .map(|item| match item {
            syn::Item::Enum(e) => e.ident.to_string(),
            syn::Item::Static(s) => s.ident.to_string(),
            other => panic!("unexpected item {:?}", quote::quote!(#other).to_string()),
        })
        .collect::<Vec<String>>();
    assert_eq!(names, vec!["Script", "Width", "EA_TABLE", "SC_TABLE"]);

    assert!(out.contains("(0x0020 , 0x007e , Width :: Narrow)"), "{}", out);
    assert!(out.contains("(0x0041 , 0x007a , Script :: Latin)"), "{}", out);
}

#[test]
fn missing_directory_fails_to_open() {
    let dir = tempdir_or_panic();
    let result = generate(&options(&dir.path().join("absent")));
    assert!(matches!(result, Err(Error::Open { .. })));
}

#[test]
fn binary_prints_tables() {
    let dir = tempdir_or_panic();
    write_ucd(dir.path(), SCRIPTS_TXT);
    let output = Command::new(env!("CARGO_BIN_EXE_generate_ucd_tables"))
        .arg("--ucd-dir")
        .arg(dir.path())
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), TABLES_C);
}

#[test]
fn binary_exits_1_on_missing_files() {
    let dir = tempdir_or_panic();
    let output = Command::new(env!("CARGO_BIN_EXE_generate_ucd_tables"))
        .arg("--ucd-dir")
        .arg(dir.path().join("absent"))
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_exits_1_on_bad_span() {
    let dir = tempdir_or_panic();
    write_ucd(dir.path(), "+41 ; Latin\n");
    let output = Command::new(env!("CARGO_BIN_EXE_generate_ucd_tables"))
        .arg("--ucd-dir")
        .arg(dir.path())
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
