use serde::{Deserialize, Serialize};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every line submitted during a session, in order, plus the dice seed that
/// makes the session reproducible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub input: String,
}

impl InputJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, inputs: Vec::new() }
    }

    pub fn append(&mut self, input: &str) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, input: input.to_string() });
    }
}
