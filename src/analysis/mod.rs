mod aggregator;
mod errors;
#[cfg(test)]
mod tests;

pub use aggregator::{summarize, TOP_CARDS_LIMIT};
pub use errors::AnalysisError;
