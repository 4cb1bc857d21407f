//! Input parsing: data records and lookup tables.

mod lookup;
mod records;

pub use lookup::{LookupEntry, LookupMap};
pub use records::{InputOptions, ParsedInput, parse_records, unescape_newlines};
