use super::{summarize, AnalysisError, TOP_CARDS_LIMIT};

use std::str::FromStr;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::Transaction;

fn create_transaction(transaction_id: &str, card_number: &str, amount: &str, timestamp: Option<&str>, status: &str) -> Result<Transaction> {
    Ok(Transaction {
        transaction_id: transaction_id.to_string(),
        card_number: card_number.to_string(),
        amount: Decimal::from_str(amount)?,
        currency: "USD".to_string(),
        timestamp: match timestamp {
            Some(s) => Some(NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")?),
            None => None
        },
        status: status.to_string()
    })
}

fn date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

#[test]
fn test_summary_totals_include_negative_amounts() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "A", "-5", Some("2024-01-01 10:00:00"), "approved")?,
        create_transaction("T2", "A", "50", Some("2024-01-01 11:00:00"), "approved")?,
        create_transaction("T3", "B", "15000", Some("2024-01-02 09:30:00"), "declined")?,
    ];

    let summary = summarize(&batch)?;

    assert_eq!(summary.total_transactions, 3);
    assert_eq!(summary.total_amount, Decimal::from_str("15045")?);
    assert_eq!(summary.average_amount, Decimal::from_str("15015")?);
    assert_eq!(summary.median_amount, Decimal::from_str("50")?);

    Ok(())
}

#[test]
fn test_median_averages_the_two_middle_values_for_even_batches() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "A", "40", None, "approved")?,
        create_transaction("T2", "A", "10", None, "approved")?,
        create_transaction("T3", "A", "25", None, "approved")?,
        create_transaction("T4", "A", "1", None, "approved")?,
    ];

    let summary = summarize(&batch)?;

    assert_eq!(summary.median_amount, Decimal::from_str("17.5")?);
    assert_eq!(summary.average_amount, Decimal::from_str("19")?);

    Ok(())
}

#[test]
fn test_status_breakdown_keeps_literal_values() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "A", "1", None, "approved")?,
        create_transaction("T2", "A", "1", None, "Approved")?,
        create_transaction("T3", "A", "1", None, "approved")?,
        create_transaction("T4", "A", "1", None, "pending")?,
    ];

    let summary = summarize(&batch)?;

    assert_eq!(summary.transactions_by_status.len(), 3);
    assert_eq!(summary.transactions_by_status.get("approved"), Some(&2));
    assert_eq!(summary.transactions_by_status.get("Approved"), Some(&1));
    assert_eq!(summary.transactions_by_status.get("pending"), Some(&1));
    assert_eq!(summary.transactions_by_status.values().sum::<usize>(), summary.total_transactions);

    Ok(())
}

#[test]
fn test_daily_breakdown_is_sorted_and_skips_missing_timestamps() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "A", "1", Some("2024-01-03 23:59:59"), "approved")?,
        create_transaction("T2", "A", "1", Some("2024-01-01 00:00:00"), "approved")?,
        create_transaction("T3", "A", "1", None, "approved")?,
        create_transaction("T4", "A", "1", Some("2024-01-03 00:00:01"), "approved")?,
    ];

    let summary = summarize(&batch)?;
    let days: Vec<_> = summary.transactions_per_day.iter().map(|(day, count)| (*day, *count)).collect();

    assert_eq!(days, vec![(date("2024-01-01")?, 1), (date("2024-01-03")?, 2)]);

    let missing = batch.iter().filter(|transaction| transaction.timestamp.is_none()).count();
    assert_eq!(summary.transactions_per_day.values().sum::<usize>() + missing, summary.total_transactions);

    Ok(())
}

#[test]
fn test_top_active_cards_are_capped_and_ranked_descending() -> Result<()> {
    let mut batch = Vec::new();
    let mut next_id = 0;

    // Card C<n> makes n + 1 transactions, for 12 distinct cards.
    for card in 0..12 {
        for _ in 0..=card {
            next_id += 1;
            batch.push(create_transaction(&format!("T{next_id}"), &format!("C{card:02}"), "1", None, "approved")?);
        }
    }

    let summary = summarize(&batch)?;

    assert_eq!(summary.top_active_cards.len(), TOP_CARDS_LIMIT);
    assert_eq!(summary.top_active_cards[0].card_number, "C11");
    assert_eq!(summary.top_active_cards[0].count, 12);
    assert_eq!(summary.top_active_cards[9].card_number, "C02");

    for pair in summary.top_active_cards.windows(2) {
        assert!(pair[0].count > pair[1].count);
    }

    Ok(())
}

#[test]
fn test_top_active_cards_break_ties_by_card_number() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "Z", "1", None, "approved")?,
        create_transaction("T2", "M", "1", None, "approved")?,
        create_transaction("T3", "B", "1", None, "approved")?,
        create_transaction("T4", "M", "1", None, "approved")?,
    ];

    let summary = summarize(&batch)?;
    let cards: Vec<_> = summary.top_active_cards.iter().map(|card| (card.card_number.as_str(), card.count)).collect();

    assert_eq!(cards, vec![("M", 2), ("B", 1), ("Z", 1)]);

    Ok(())
}

#[test]
fn test_empty_batch_is_rejected() {
    let result = summarize(&[]);

    assert!(matches!(result, Err(AnalysisError::EmptyBatch)));
}

#[test]
fn test_summary_overflow_is_reported() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "A", &Decimal::MAX.to_string(), None, "approved")?,
        create_transaction("T2", "A", &Decimal::MAX.to_string(), None, "approved")?,
    ];

    let result = summarize(&batch);

    assert!(matches!(result, Err(AnalysisError::Overflow { transactions: 2 })));

    Ok(())
}

#[test]
fn test_summary_is_idempotent() -> Result<()> {
    let batch = vec![
        create_transaction("T1", "A", "12.34", Some("2024-01-01 10:00:00"), "approved")?,
        create_transaction("T2", "B", "-3", None, "unknown")?,
    ];

    assert_eq!(summarize(&batch)?, summarize(&batch)?);

    Ok(())
}
