use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::WriterBuilder;

use crate::models::{Summary, Transaction};
use crate::report::errors::ReportError;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Files produced by `write_report`.
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub summary: PathBuf,
    /// Either the anomalies CSV or the `_EMPTY.txt` marker.
    pub anomalies: PathBuf
}

/// Writes the summary Markdown and the anomalies file into `output_dir`,
/// creating the directory when needed.
pub fn write_report(summary: &Summary, anomalies: &[Transaction], output_dir: &Path) -> Result<ReportPaths, ReportError> {
    create_dir_all(output_dir)?;

    let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

    let summary_path = output_dir.join(format!("summary_{stamp}.md"));
    std::fs::write(&summary_path, render_summary_markdown(summary))?;

    let anomalies_path = if anomalies.is_empty() {
        let path = output_dir.join(format!("anomalies_{stamp}_EMPTY.txt"));
        std::fs::write(&path, "No anomalies detected.\n")?;
        path
    } else {
        let path = output_dir.join(format!("anomalies_{stamp}.csv"));
        write_anomalies_csv(BufWriter::new(File::create(&path)?), anomalies)?;
        path
    };

    Ok(ReportPaths {
        summary: summary_path,
        anomalies: anomalies_path
    })
}

pub fn render_summary_markdown(summary: &Summary) -> String {
    let mut output = String::from("# CardOps Insight Summary Report\n\n");

    push_scalar(&mut output, "total_transactions", summary.total_transactions);
    push_scalar(&mut output, "total_amount", summary.total_amount);
    push_scalar(&mut output, "average_amount", summary.average_amount.round_dp(2));
    push_scalar(&mut output, "median_amount", summary.median_amount);
    push_entries(&mut output, "transactions_by_status", summary.transactions_by_status.iter());
    push_entries(&mut output, "transactions_per_day", summary.transactions_per_day.iter());
    push_entries(
        &mut output,
        "top_active_cards",
        summary.top_active_cards.iter().map(|card| (&card.card_number, card.count))
    );

    output
}

/// Writes flagged transactions with the input column layout.
///
/// An empty slice still produces the header row.
pub fn write_anomalies_csv<W: Write>(writer: W, anomalies: &[Transaction]) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(crate::loader::REQUIRED_COLUMNS)?;

    for transaction in anomalies {
        writer.serialize(transaction)?;
    }

    writer.flush()?;

    Ok(())
}

fn push_scalar(output: &mut String, metric: &str, value: impl std::fmt::Display) {
    output.push_str(&format!("## {}\n{value}\n\n", title_case(metric)));
}

fn push_entries<K, V>(output: &mut String, metric: &str, entries: impl Iterator<Item = (K, V)>)
where
    K: std::fmt::Display,
    V: std::fmt::Display,
{
    output.push_str(&format!("## {}\n", title_case(metric)));

    for (key, value) in entries {
        output.push_str(&format!("- {key}: {value}\n"));
    }

    output.push('\n');
}

fn title_case(metric: &str) -> String {
    metric.split('_')
        .map(|word| {
            let mut characters = word.chars();
            match characters.next() {
                Some(first) => first.to_uppercase().chain(characters).collect::<String>(),
                None => String::new()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
