use crate::{input::BatchInputs, wallet::Credential};

#[derive(Debug, Clone, Copy)]
pub struct TransferPair<'a> {
    /// Zero-based position in both input files.
    pub index: usize,
    pub credential: &'a Credential,
    pub destination: &'a str,
}

/// Pairs the i-th credential with the i-th destination. Stops at the shorter list.
pub fn pair_inputs(inputs: &BatchInputs) -> Vec<TransferPair<'_>> {
    inputs
        .credentials()
        .iter()
        .zip(inputs.destinations())
        .enumerate()
        .map(|(index, (credential, destination))| TransferPair {
            index,
            credential,
            destination: destination.as_str(),
        })
        .collect()
}
