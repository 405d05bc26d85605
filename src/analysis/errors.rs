use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Cannot summarize an empty batch of transactions")]
    EmptyBatch,
    #[error("Numeric overflow while aggregating amounts over [{transactions}] transactions")]
    Overflow {
        transactions: usize
    }
}
