use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Report error: {0}")]
    Csv(#[from] csv::Error)
}
