use serde::{Deserialize, Deserializer};

/// Reads a text field verbatim, treating a missing trailing field as empty.
///
/// No trimming or case folding is applied.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
