use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{deserialize_amount, deserialize_text, deserialize_timestamp, serialize_timestamp, CardNumber, TransactionId, TransactionStatus};

/// Represents a single row from the input CSV file.
///
/// `timestamp` is already coerced: values that could not be parsed at
/// ingestion, or that are absent from a short row, are `None`. `status` keeps
/// the literal text, surrounding whitespace included, so that breakdowns
/// report exactly what was observed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    /// Identifier used as the deduplication key for flagged anomalies.
    pub transaction_id: TransactionId,
    /// Opaque card identifier, never validated for format.
    pub card_number: CardNumber,
    /// Signed amount; zero and negative values are legal input.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: Decimal,
    #[serde(deserialize_with = "deserialize_text")]
    pub currency: String,
    #[serde(deserialize_with = "deserialize_timestamp", serialize_with = "serialize_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(deserialize_with = "deserialize_text")]
    pub status: String
}

impl Transaction {
    pub fn status(&self) -> TransactionStatus {
        TransactionStatus::from_literal(&self.status)
    }
}
