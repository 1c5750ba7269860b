//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    /// Hash of everything that decides future play: the persisted record, the
    /// open frames, and how many inputs were accepted.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.inputs_accepted);
        match serde_json::to_vec(&SaveRecord::capture(&self.player, &self.world)) {
            Ok(bytes) => hasher.write(&bytes),
            Err(_) => hasher.write_u8(0),
        }
        hasher.write_usize(self.frames.len());
        for frame in &self.frames {
            hasher.write(format!("{frame:?}").as_bytes());
        }
        hasher.write_u8(match self.finished {
            None => 0,
            Some(SessionEnd::Quit) => 1,
            Some(SessionEnd::Ending(Ending::Escape)) => 2,
            Some(SessionEnd::Ending(Ending::Consumed)) => 3,
            Some(SessionEnd::Ending(Ending::TrappedForever)) => 4,
        });
        hasher.finish()
    }
}
