use std::collections::HashSet;

use crate::detection::config::DetectorConfig;
use crate::detection::rules;
use crate::models::{AnomalyRule, FlaggedTransaction, Transaction};

/// Evaluates the fixed anomaly rule set against a batch of transactions.
///
/// The detector holds no state between calls; the same batch always yields
/// the same result.
#[derive(Debug, Clone, Default)]
pub struct AnomalyDetector {
    config: DetectorConfig
}

impl AnomalyDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Returns every transaction matched by at least one rule.
    ///
    /// Results follow rule order first and batch order second, with duplicate
    /// transaction IDs dropped after their first appearance. An empty batch
    /// yields an empty result.
    pub fn detect(&self, batch: &[Transaction]) -> Vec<Transaction> {
        self.detect_flagged(batch).into_iter()
            .map(|flagged| flagged.transaction)
            .collect()
    }

    /// Same as `detect`, keeping the rule each transaction was attributed to.
    pub fn detect_flagged(&self, batch: &[Transaction]) -> Vec<FlaggedTransaction> {
        let mut candidates: Vec<(AnomalyRule, usize)> = AnomalyRule::ALL.iter()
            .flat_map(|&rule| self.evaluate(rule, batch).into_iter().map(move |position| (rule, position)))
            .collect();

        candidates.sort_unstable();

        let mut seen = HashSet::<&str>::new();

        candidates.into_iter()
            .filter(|&(_, position)| seen.insert(batch[position].transaction_id.as_str()))
            .map(|(rule, position)| FlaggedTransaction {
                rule,
                transaction: batch[position].clone()
            })
            .collect()
    }

    /// Batch positions matched by a single rule, ascending.
    pub fn evaluate(&self, rule: AnomalyRule, batch: &[Transaction]) -> Vec<usize> {
        match rule {
            AnomalyRule::AmountRange => rules::amount_out_of_range(batch, &self.config),
            AnomalyRule::UnknownStatus => rules::unknown_status(batch, &self.config),
            AnomalyRule::InvalidTimestamp => rules::invalid_timestamp(batch),
            AnomalyRule::BurstActivity => rules::burst_activity(batch, &self.config)
        }
    }
}
