mod pairing;
pub use pairing::{pair_inputs, TransferPair};

mod scheduler;
pub use scheduler::{CycleScheduler, RunSummary, SchedulerError};
