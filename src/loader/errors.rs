use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Input file not found: {path}")]
    FileNotFound {
        path: String
    },
    #[error("Input file is empty or has no readable transactions")]
    EmptyFile,
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Invalid or corrupted CSV file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unable to read input file: {0}")]
    Io(#[from] std::io::Error)
}
