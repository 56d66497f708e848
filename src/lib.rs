//! A crate that parses Unicode Character Database range files and squeezes
//! them into compact sorted range tables, emitted as C or Rust source.

pub mod aliases;
pub mod constants;
pub mod emit;
pub mod error;
pub mod field;
pub mod generate;
pub mod rust_table;
pub mod span;
pub mod types;
pub mod ucd;
pub mod validate;
