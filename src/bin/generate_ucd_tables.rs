use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::error;

use ucd_tables::error::Result;
use ucd_tables::generate::{generate, Format, Options};

/// Generate script and East Asian Width range tables from the Unicode
/// Character Database.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory containing PropertyValueAliases.txt, Scripts.txt and
    /// EastAsianWidth.txt
    #[arg(long, default_value = ".")]
    ucd_dir: PathBuf,

    /// Output language; Rust output is one item per line, meant for rustfmt
    #[arg(long, value_enum, default_value_t = Format::C)]
    format: Format,

    /// Also emit the script and width enums (always emitted for Rust)
    #[arg(long, default_value_t = false)]
    enums: bool,

    /// Log whether each table is free of overlapping ranges after every pass
    #[arg(long, default_value_t = false)]
    validate: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Options {
        Options {
            ucd_dir: args.ucd_dir,
            format: args.format,
            enums: args.enums,
            validate: args.validate,
        }
    }
}

fn run(options: &Options) -> Result<()> {
    let out = generate(options)?;
    io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}

fn main() {
    env_logger::init();
    let options = Options::from(Args::parse());
    if let Err(e) = run(&options) {
        error!("{}", e);
        std::process::exit(1);
    }
}
