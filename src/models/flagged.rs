use crate::models::{AnomalyRule, Transaction};

/// A transaction selected by the detector, along with the first rule that matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedTransaction {
    pub rule: AnomalyRule,
    pub transaction: Transaction
}
