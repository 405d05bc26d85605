mod csv_loader;
mod errors;

pub use csv_loader::{load_transactions, read_transactions, REQUIRED_COLUMNS};
pub use errors::LoaderError;
