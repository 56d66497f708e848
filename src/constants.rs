/// The property value alias registry, providing script and width names.
///
/// See <https://www.unicode.org/Public/UCD/latest/ucd/PropertyValueAliases.txt>.
pub const PROPERTY_VALUE_ALIASES_TXT: &str = "PropertyValueAliases.txt";

/// Script assignments of code point ranges.
///
/// See <https://www.unicode.org/Public/UCD/latest/ucd/Scripts.txt>.
pub const SCRIPTS_TXT: &str = "Scripts.txt";

/// East Asian Width assignments of code point ranges.
///
/// See <https://www.unicode.org/Public/UCD/latest/ucd/EastAsianWidth.txt>.
pub const EAST_ASIAN_WIDTH_TXT: &str = "EastAsianWidth.txt";

/// Property kind column value marking script rows in the alias file.
pub const SCRIPT_PROPERTY: &str = "sc";

/// Property kind column value marking East Asian Width rows in the alias
/// file.
pub const WIDTH_PROPERTY: &str = "ea";

/// Prefix of every emitted script identifier (`GP_SCRIPT_LATIN`).
pub const SCRIPT_PREFIX: &str = "GP_SCRIPT_";
/// Prefix of every emitted width identifier (`GP_WIDTH_WIDE`).
pub const WIDTH_PREFIX: &str = "GP_WIDTH_";

/// Name of the emitted script range table.
pub const SCRIPT_TABLE: &str = "sc_table";
/// Name of the value member of a script table row.
pub const SCRIPT_MEMBER: &str = "sc";
/// Name of the emitted East Asian Width range table.
pub const WIDTH_TABLE: &str = "ea_table";
/// Name of the value member of a width table row.
pub const WIDTH_MEMBER: &str = "ea";

/// Name of the emitted C script enum.
pub const SCRIPT_ENUM: &str = "gpScripts";
/// Name of the emitted C width enum.
pub const WIDTH_ENUM: &str = "gpWidth";
