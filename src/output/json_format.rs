//! JSON output formatting.

use crate::storage::to_pretty_json;
use serde::Serialize;
use std::io::{self, Write};

/// Write records as pretty JSON, keeping non-ASCII text as is.
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    let json = to_pretty_json(value).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
