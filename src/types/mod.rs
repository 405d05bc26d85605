mod amount;
mod errors;
mod status;
mod text;
mod timestamp;

pub use amount::{deserialize_amount, parse_amount};
pub use errors::AmountError;
pub use status::TransactionStatus;
pub use text::deserialize_text;
pub use timestamp::{deserialize_timestamp, parse_timestamp, serialize_timestamp};

pub type TransactionId = String;
pub type CardNumber = String;
