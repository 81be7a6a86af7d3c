mod amount_range;
pub use amount_range::{AmountRange, AmountRangeError};

mod executor;
pub use executor::TransferExecutor;

pub mod types;
