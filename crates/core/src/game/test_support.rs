//! Shared fixtures for the `game` submodule test suites.

use super::prompts::{BossFight, Encounter, EncounterOrigin};
use super::*;
use crate::dice::ScriptedDice;
use crate::save::MemoryStore;

/// A game over `content` with no prior save. The returned handle shares the store's slot.
pub(super) fn game_from(
    content: ContentPack,
    player: Player,
    world: World,
    dice: ScriptedDice,
) -> (Game, MemoryStore) {
    let store = MemoryStore::new();
    let game = Game::from_parts(content, player, world, Box::new(store.clone()), Box::new(dice));
    (game, store)
}

pub(super) fn game_in(content: ContentPack, player: Player, dice: ScriptedDice) -> (Game, MemoryStore) {
    game_from(content, player, World::new(), dice)
}

pub(super) fn game_with(player: Player, dice: ScriptedDice) -> (Game, MemoryStore) {
    game_in(ContentPack::default(), player, dice)
}

/// Puts a placeholder record in the store so tests can observe it being deleted.
pub(super) fn store_something(store: &MemoryStore) {
    let mut handle = store.clone();
    handle.write("{}").expect("memory writes succeed");
}

/// Opens a fight as if a move command had just rolled it.
pub(super) fn push_encounter(game: &mut Game, archetype: usize, hp: i32, origin: EncounterOrigin) {
    game.command_open = true;
    game.frames.push(Frame::Encounter(Encounter { archetype, hp, origin }));
}

pub(super) fn push_boss(game: &mut Game, hp: i32) {
    game.command_open = true;
    game.frames.push(Frame::Boss(BossFight { hp }));
}
