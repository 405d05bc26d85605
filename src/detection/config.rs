use rust_decimal::Decimal;

use crate::types::TransactionStatus;

/// Amounts strictly above this value are flagged.
pub const MAX_AMOUNT_THRESHOLD: i64 = 10_000;
/// More than this many transactions on one card within one minute is a burst.
pub const RAPID_TRANSACTION_THRESHOLD: usize = 5;

/// Which transactions a detected burst flags.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum BurstScope {
    /// Every transaction of a card that bursts at least once in the batch.
    #[default]
    EntireCard,
    /// Only the transactions inside the bursting minute windows.
    WindowOnly
}

/// Thresholds and policies applied by the `AnomalyDetector`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    pub max_amount: Decimal,
    pub known_statuses: Vec<TransactionStatus>,
    pub burst_threshold: usize,
    pub burst_scope: BurstScope
}

impl DetectorConfig {
    pub fn with_max_amount(mut self, max_amount: Decimal) -> Self {
        self.max_amount = max_amount;
        self
    }

    pub fn with_known_statuses(mut self, known_statuses: &[TransactionStatus]) -> Self {
        self.known_statuses = known_statuses.to_vec();
        self
    }

    pub fn with_burst_threshold(mut self, burst_threshold: usize) -> Self {
        self.burst_threshold = burst_threshold;
        self
    }

    pub fn with_burst_scope(mut self, burst_scope: BurstScope) -> Self {
        self.burst_scope = burst_scope;
        self
    }

    pub fn is_known_status(&self, status: TransactionStatus) -> bool {
        status != TransactionStatus::Unknown && self.known_statuses.contains(&status)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_amount: Decimal::from(MAX_AMOUNT_THRESHOLD),
            known_statuses: TransactionStatus::KNOWN.to_vec(),
            burst_threshold: RAPID_TRANSACTION_THRESHOLD,
            burst_scope: BurstScope::default()
        }
    }
}
