use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, error};

use crate::loader::errors::LoaderError;
use crate::models::Transaction;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "transaction_id",
    "card_number",
    "amount",
    "currency",
    "timestamp",
    "status"
];

/// Loads and validates a CSV file of transactions.
///
/// # Errors
/// Returns `LoaderError` if:
/// - The file does not exist or cannot be read.
/// - The header row lacks one of `REQUIRED_COLUMNS`.
/// - No row could be decoded.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, LoaderError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoaderError::FileNotFound { path: path.display().to_string() });
    }

    let file = File::open(path)?;

    read_transactions(BufReader::new(file))
}

/// Reads transactions from any CSV source, keeping input order.
///
/// Data fields are kept verbatim; only the header row is trimmed. Rows whose
/// amount cannot be decoded are logged and skipped. Timestamps that cannot
/// be parsed are kept as `None` rather than rejected, and a short row keeps
/// its missing trailing `currency`, `status` or `timestamp` as empty.
pub fn read_transactions<R: Read>(source: R) -> Result<Vec<Transaction>, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();

    if headers.is_empty() {
        return Err(LoaderError::EmptyFile);
    }

    validate_columns(&headers)?;

    let mut transactions = Vec::new();
    let mut skipped = 0usize;

    for result in reader.deserialize::<Transaction>() {
        match result {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => {
                skipped += 1;
                error!("CSV deserialization error: {error}");
            }
        }
    }

    debug!("Read [{}] transactions, skipped [{skipped}] malformed rows", transactions.len());

    if transactions.is_empty() {
        return Err(LoaderError::EmptyFile);
    }

    Ok(transactions)
}

fn validate_columns(headers: &StringRecord) -> Result<(), LoaderError> {
    let mut missing: Vec<String> = REQUIRED_COLUMNS.iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    missing.sort();

    Err(LoaderError::MissingColumns(missing))
}
