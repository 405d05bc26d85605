use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::str::FromStr;

/// Parses a raw amount field into an exact decimal.
///
/// Accepts plain decimal notation (`-12.50`, `+3`, `15000`) as well as
/// scientific notation (`1.5e4`). Negative and zero amounts are valid values;
/// range checks belong to the detector, not to ingestion.
pub fn parse_amount(value: &str) -> Result<Decimal, AmountError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
    }

    if value.contains(['e', 'E']) {
        return Ok(Decimal::from_scientific(value)?);
    }

    let value = value.strip_prefix('+').unwrap_or(value);

    Ok(Decimal::from_str(value)?)
}

pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_amount(&value).map_err(de::Error::custom)
}
