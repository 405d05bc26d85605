use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::analysis::summarize;
use crate::detection::{AnomalyDetector, DetectorConfig};
use crate::loader::load_transactions;
use crate::models::{FlaggedTransaction, Summary, Transaction};

/// Results of analysing one batch.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub summary: Summary,
    pub flagged: Vec<FlaggedTransaction>
}

impl AnalysisOutcome {
    pub fn anomalies(&self) -> Vec<Transaction> {
        self.flagged.iter().map(|flagged| flagged.transaction.clone()).collect()
    }
}

/// Loads a batch and runs the aggregator and the detector side by side.
pub struct AnalysisEngine {
    detector: Arc<AnomalyDetector>
}

impl AnalysisEngine {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            detector: Arc::new(AnomalyDetector::new(config))
        }
    }

    /// Runs the end-to-end analysis for a CSV file.
    pub async fn run(&self, path: impl Into<PathBuf>) -> anyhow::Result<AnalysisOutcome> {
        let path = path.into();
        let timer = Instant::now();

        let batch = spawn_blocking(move || load_transactions(path)).await??;

        info!("Loaded [{}] transactions in: {:?}", batch.len(), timer.elapsed());

        self.analyse(Arc::new(batch)).await
    }

    /// Analyses an already loaded batch. Both passes only read the batch.
    pub async fn analyse(&self, batch: Arc<Vec<Transaction>>) -> anyhow::Result<AnalysisOutcome> {
        let timer = Instant::now();

        let summary_batch = batch.clone();
        let summary_handle = spawn_blocking(move || summarize(&summary_batch));

        let detector = self.detector.clone();
        let detection_handle = spawn_blocking(move || detector.detect_flagged(&batch));

        let (summary, flagged) = tokio::try_join!(summary_handle, detection_handle)?;
        let summary = summary?;

        for item in &flagged {
            debug!("Transaction [{}] for card [{}] flagged by [{}]", item.transaction.transaction_id, item.transaction.card_number, item.rule);
        }

        info!("Analysis completed in: {:?}. Found [{}] suspicious records", timer.elapsed(), flagged.len());

        Ok(AnalysisOutcome { summary, flagged })
    }
}
