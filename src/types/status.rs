/// Closed view over the open status vocabulary found in the input.
///
/// Only the exact lowercase literals are recognised; `"Approved"` or
/// `" approved"` are `Unknown`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionStatus {
    Approved,
    Declined,
    Reversed,
    Unknown
}

impl TransactionStatus {
    pub const KNOWN: [TransactionStatus; 3] = [
        TransactionStatus::Approved,
        TransactionStatus::Declined,
        TransactionStatus::Reversed
    ];

    pub fn from_literal(value: &str) -> Self {
        match value {
            "approved" => TransactionStatus::Approved,
            "declined" => TransactionStatus::Declined,
            "reversed" => TransactionStatus::Reversed,
            _ => TransactionStatus::Unknown
        }
    }
}
