use std::collections::{HashMap, HashSet};

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::detection::config::{BurstScope, DetectorConfig};
use crate::models::Transaction;

// Every evaluator returns batch positions in ascending order.

pub fn amount_out_of_range(batch: &[Transaction], config: &DetectorConfig) -> Vec<usize> {
    positions(batch, |transaction| {
        transaction.amount < Decimal::ZERO || transaction.amount > config.max_amount
    })
}

pub fn unknown_status(batch: &[Transaction], config: &DetectorConfig) -> Vec<usize> {
    positions(batch, |transaction| !config.is_known_status(transaction.status()))
}

pub fn invalid_timestamp(batch: &[Transaction]) -> Vec<usize> {
    positions(batch, |transaction| transaction.timestamp.is_none())
}

/// Flags cards with more than `burst_threshold` transactions inside a single
/// floor-truncated minute. Rows without a timestamp never form part of a
/// window, but with `BurstScope::EntireCard` they are still flagged when
/// their card bursts elsewhere.
pub fn burst_activity(batch: &[Transaction], config: &DetectorConfig) -> Vec<usize> {
    let minutes: Vec<Option<NaiveDateTime>> = batch.iter()
        .map(|transaction| transaction.timestamp.and_then(floor_to_minute))
        .collect();

    let mut windows = HashMap::<(&str, NaiveDateTime), usize>::new();

    for (transaction, minute) in batch.iter().zip(&minutes) {
        if let Some(minute) = minute {
            *windows.entry((transaction.card_number.as_str(), *minute)).or_insert(0) += 1;
        }
    }

    let bursting: HashSet<(&str, NaiveDateTime)> = windows.into_iter()
        .filter(|(_, count)| *count > config.burst_threshold)
        .map(|(window, _)| window)
        .collect();

    if bursting.is_empty() {
        return Vec::new();
    }

    match config.burst_scope {
        BurstScope::EntireCard => {
            let cards: HashSet<&str> = bursting.iter().map(|(card_number, _)| *card_number).collect();
            positions(batch, |transaction| cards.contains(transaction.card_number.as_str()))
        }
        BurstScope::WindowOnly => {
            batch.iter().zip(&minutes).enumerate()
                .filter(|(_, (transaction, minute))| {
                    minute.is_some_and(|minute| bursting.contains(&(transaction.card_number.as_str(), minute)))
                })
                .map(|(position, _)| position)
                .collect()
        }
    }
}

pub fn floor_to_minute(timestamp: NaiveDateTime) -> Option<NaiveDateTime> {
    timestamp.with_second(0)?.with_nanosecond(0)
}

fn positions<F>(batch: &[Transaction], predicate: F) -> Vec<usize>
where
    F: Fn(&Transaction) -> bool,
{
    batch.iter().enumerate()
        .filter(|(_, transaction)| predicate(transaction))
        .map(|(position, _)| position)
        .collect()
}
