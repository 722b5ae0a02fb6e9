//! Reading and decoding column-types JSON.

use std::io::Read;

use tracing::debug;

use crate::error::{ColumnTitlesError, Result};
use crate::model::ColumnSet;

/// Default upper bound on accepted input size.
pub const MAX_INPUT_BYTES: u64 = 4 * 1024 * 1024;

/// Read a whole input stream, refusing anything larger than `limit` bytes.
pub fn read_input<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)?;
    let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if size > limit {
        return Err(ColumnTitlesError::InputTooLarge { limit });
    }
    debug!(bytes = size, "read column definitions");
    Ok(bytes)
}

/// Decode a JSON object of column definitions, keeping document order.
///
/// # Errors
///
/// - [`ColumnTitlesError::Syntax`] for malformed JSON, empty input, or
///   invalid UTF-8.
/// - [`ColumnTitlesError::Shape`] when the top level is not an object or a
///   column definition is not an object.
pub fn parse_columns(bytes: &[u8]) -> Result<ColumnSet> {
    let columns: ColumnSet = serde_json::from_slice(bytes)?;
    debug!(columns = columns.len(), "decoded column definitions");
    Ok(columns)
}
