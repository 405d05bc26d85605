mod flagged;
mod summary;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use flagged::FlaggedTransaction;
pub use summary::{CardActivity, Summary};
pub use transaction::Transaction;

/// Anomaly rule classes, declared in evaluation order.
///
/// The order decides which rule a transaction is attributed to when it
/// matches more than one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AnomalyRule {
    AmountRange,
    UnknownStatus,
    InvalidTimestamp,
    BurstActivity
}

impl AnomalyRule {
    pub const ALL: [AnomalyRule; 4] = [
        AnomalyRule::AmountRange,
        AnomalyRule::UnknownStatus,
        AnomalyRule::InvalidTimestamp,
        AnomalyRule::BurstActivity
    ];
}

impl Display for AnomalyRule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnomalyRule::AmountRange => "amount-range",
            AnomalyRule::UnknownStatus => "unknown-status",
            AnomalyRule::InvalidTimestamp => "invalid-timestamp",
            AnomalyRule::BurstActivity => "burst-activity"
        };

        write!(formatter, "{name}")
    }
}
