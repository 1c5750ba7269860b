pub mod content;
pub mod dice;
pub mod game;
pub mod journal;
pub mod replay;
pub mod save;
pub mod state;
pub mod types;

pub use content::ContentPack;
pub use dice::{Dice, ScriptedDice, SeededDice};
pub use game::{ACTIONS_LINE, Game, Reply, Status};
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use save::{FileStore, MemoryStore, SaveStore};
pub use state::{Player, SaveRecord, World};
pub use types::*;
