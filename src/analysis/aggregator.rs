use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::analysis::errors::AnalysisError;
use crate::models::{CardActivity, Summary, Transaction};

/// Maximum number of entries reported in `Summary::top_active_cards`.
pub const TOP_CARDS_LIMIT: usize = 10;

/// Computes summary statistics and breakdowns for a batch.
///
/// Amounts are taken verbatim, negatives included. Rows without a timestamp
/// still count towards every metric except `transactions_per_day`.
///
/// # Errors
/// Returns `AnalysisError` if:
/// - The batch is empty (average and median are undefined).
/// - Summing the amounts overflows the decimal range.
pub fn summarize(batch: &[Transaction]) -> Result<Summary, AnalysisError> {
    if batch.is_empty() {
        return Err(AnalysisError::EmptyBatch);
    }

    let total_transactions = batch.len();
    let overflow = || AnalysisError::Overflow { transactions: total_transactions };

    let total_amount = batch.iter()
        .try_fold(Decimal::ZERO, |total, transaction| total.checked_add(transaction.amount))
        .ok_or_else(overflow)?;

    let average_amount = total_amount.checked_div(Decimal::from(total_transactions))
        .ok_or_else(overflow)?;

    Ok(Summary {
        total_transactions,
        total_amount,
        average_amount,
        median_amount: median(batch).ok_or_else(overflow)?,
        transactions_by_status: count_by_status(batch),
        transactions_per_day: count_per_day(batch),
        top_active_cards: top_active_cards(batch, TOP_CARDS_LIMIT)
    })
}

fn median(batch: &[Transaction]) -> Option<Decimal> {
    let mut amounts: Vec<Decimal> = batch.iter().map(|transaction| transaction.amount).collect();
    amounts.sort_unstable();

    let middle = amounts.len() / 2;

    if amounts.len() % 2 == 1 {
        return amounts.get(middle).copied();
    }

    let lower = *amounts.get(middle.checked_sub(1)?)?;
    let upper = *amounts.get(middle)?;

    lower.checked_add(upper)?.checked_div(Decimal::TWO)
}

fn count_by_status(batch: &[Transaction]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();

    for transaction in batch {
        *counts.entry(transaction.status.clone()).or_insert(0) += 1;
    }

    counts
}

fn count_per_day(batch: &[Transaction]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();

    for timestamp in batch.iter().filter_map(|transaction| transaction.timestamp) {
        *counts.entry(timestamp.date()).or_insert(0) += 1;
    }

    counts
}

/// Ranks cards by transaction count, descending.
///
/// Ties are ordered by card number ascending so the ranking is stable
/// across runs regardless of hashing.
fn top_active_cards(batch: &[Transaction], limit: usize) -> Vec<CardActivity> {
    let mut counts = HashMap::<&str, usize>::new();

    for transaction in batch {
        *counts.entry(transaction.card_number.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_unstable_by_key(|&(card_number, count)| (Reverse(count), card_number));
    ranked.truncate(limit);

    ranked.into_iter()
        .map(|(card_number, count)| CardActivity { card_number: card_number.to_string(), count })
        .collect()
}
