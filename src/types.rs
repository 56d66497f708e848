//! Common types used across this crate, with meaning not defined within a
//! specific module.

use std::collections::HashMap;

/// The property columns of a UCD record, i.e. every column after the code
/// point or range column.
pub type PropertyList = Vec<String>;

/// A mapping from a short East Asian Width code (`W`, `F`, ...) to its long
/// name (`Wide`, `Fullwidth`, ...).
pub type WidthNameMap = HashMap<String, String>;
