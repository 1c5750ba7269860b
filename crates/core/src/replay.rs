use std::error::Error;
use std::fmt;

use crate::{
    content::ContentPack,
    dice::SeededDice,
    game::Game,
    journal::InputJournal,
    save::MemoryStore,
    types::SessionEnd,
};

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    /// The session finished before the journal ran out.
    InputAfterEnd { seq: u64 },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputAfterEnd { seq } => {
                write!(f, "journal has input #{seq} after the session finished")
            }
        }
    }
}

impl Error for ReplayError {}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_outcome: Option<SessionEnd>,
    pub final_snapshot_hash: u64,
    pub inputs_consumed: usize,
    /// Narration in order, each input's lines following it.
    pub transcript: Vec<String>,
}

/// Plays the journal against a fresh, unsaved session seeded from the journal.
pub fn replay_to_end(
    content: ContentPack,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::start(
        content,
        Box::new(MemoryStore::new()),
        Box::new(SeededDice::new(journal.seed)),
    );
    let mut transcript = Vec::new();
    let mut inputs_consumed = 0;

    for record in &journal.inputs {
        let reply =
            game.submit(&record.input).map_err(|_| ReplayError::InputAfterEnd { seq: record.seq })?;
        inputs_consumed += 1;
        transcript.extend(reply.lines);
    }

    Ok(ReplayResult {
        final_outcome: game.outcome(),
        final_snapshot_hash: game.snapshot_hash(),
        inputs_consumed,
        transcript,
    })
}
