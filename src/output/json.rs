use crate::FormatEntry;

/// Serializes the formatted entries as a JSON array.
///
/// # Errors
/// Propagates any `serde_json` serialization failure.
pub fn to_json(entries: &[FormatEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}
