mod loader;
pub use loader::{
    load_batch_inputs, parse_non_commented_lines, read_non_commented_lines, InputKind,
    LoadInputError, COMMENT_MARKER,
};

use crate::wallet::Credential;

/// The two operator-supplied lists, loaded once and never modified.
#[derive(Debug, Clone)]
pub struct BatchInputs {
    credentials: Vec<Credential>,
    destinations: Vec<String>,
}

impl BatchInputs {
    pub fn new(credentials: Vec<Credential>, destinations: Vec<String>) -> Self {
        BatchInputs { credentials, destinations }
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Number of index-aligned pairs; the longer list is truncated.
    pub fn pairing_len(&self) -> usize {
        self.credentials.len().min(self.destinations.len())
    }

    /// Entries on the longer list that will never be processed.
    pub fn unpaired_len(&self) -> usize {
        self.credentials.len().abs_diff(self.destinations.len())
    }
}
