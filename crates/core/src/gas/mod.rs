mod fee_gate;
pub use fee_gate::{is_below_threshold, FeeGate, FeeReading, GateDecision};

mod types;
pub use types::*;
