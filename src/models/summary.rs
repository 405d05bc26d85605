use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::CardNumber;

/// Aggregate statistics for one batch of transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_transactions: usize,
    pub total_amount: Decimal,
    pub average_amount: Decimal,
    pub median_amount: Decimal,
    /// Count per literal status value, no canonicalisation applied.
    pub transactions_by_status: BTreeMap<String, usize>,
    /// Count per calendar date; rows without a timestamp are left out.
    pub transactions_per_day: BTreeMap<NaiveDate, usize>,
    /// Most active cards, highest count first.
    pub top_active_cards: Vec<CardActivity>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardActivity {
    pub card_number: CardNumber,
    pub count: usize
}
