//! Prompt-driven engine for one play session.
//!
//! The front end feeds one line of input per `submit` call and renders the
//! returned narration and prompt. Nested interactions (menus, encounters, the
//! boss fight) live on a frame stack; an empty stack means the command prompt.

use std::fmt;
use std::mem;

use log::{debug, info};

use crate::content::ContentPack;
use crate::dice::Dice;
use crate::save::{self, SaveStore};
use crate::state::{Player, SaveRecord, World};
use crate::types::*;

mod boss;
mod combat;
mod hash;
mod items;
mod navigation;
mod prompts;
mod weapons;
#[cfg(test)]
mod test_support;

use prompts::Frame;

pub const ACTIONS_LINE: &str = "Actions: [move] [inventory] [flashlight] [map] [use batteries] [quit]";

/// Narration produced by one input, plus the prompt that now awaits input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub prompt: Prompt,
}

pub struct Game {
    content: ContentPack,
    player: Player,
    world: World,
    dice: Box<dyn Dice>,
    store: Box<dyn SaveStore>,
    frames: Vec<Frame>,
    // Set while a command-prompt action is in flight; cleared by the end-of-turn checks.
    command_open: bool,
    restored: bool,
    finished: Option<SessionEnd>,
    narration: Vec<String>,
    log: Vec<LogEvent>,
    inputs_accepted: u64,
}

impl Game {
    /// Resumes the stored session if one loads, otherwise starts fresh and saves immediately.
    pub fn start(content: ContentPack, mut store: Box<dyn SaveStore>, dice: Box<dyn Dice>) -> Self {
        match save::load(store.as_mut()) {
            Some(record) => {
                let (player, world) = record.into_parts(&content.rules);
                info!("resuming saved session in {}", player.location);
                let mut game = Self::from_parts(content, player, world, store, dice);
                game.restored = true;
                game
            }
            None => {
                info!("starting a fresh session");
                let mut game =
                    Self::from_parts(content, Player::default(), World::new(), store, dice);
                game.persist();
                game
            }
        }
    }

    /// Builds a session around existing state without touching the store.
    pub fn from_parts(
        content: ContentPack,
        player: Player,
        world: World,
        store: Box<dyn SaveStore>,
        dice: Box<dyn Dice>,
    ) -> Self {
        Self {
            content,
            player,
            world,
            dice,
            store,
            frames: Vec::new(),
            command_open: false,
            restored: false,
            finished: None,
            narration: Vec::new(),
            log: Vec::new(),
            inputs_accepted: 0,
        }
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn content(&self) -> &ContentPack {
        &self.content
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn outcome(&self) -> Option<SessionEnd> {
        self.finished
    }

    pub fn inputs_accepted(&self) -> u64 {
        self.inputs_accepted
    }

    pub fn status(&self) -> Status {
        Status {
            location: self.player.location,
            health: self.player.health,
            max_health: self.player.max_health,
            weapon: self.player.weapon,
            flashlight_on: self.player.flashlight_on,
            battery: self.player.flashlight_battery,
            fragments: self.player.map_fragments_found,
            fragments_required: self.content.rules.fragments_required,
            has_master_key: self.player.has_master_key,
        }
    }

    /// Applies one line of input to whatever prompt is active.
    pub fn submit(&mut self, input: &str) -> Result<Reply, GameError> {
        if let Some(end) = self.finished {
            return Err(GameError::SessionOver(end));
        }
        self.inputs_accepted += 1;

        match self.frames.pop() {
            None => self.handle_command(input),
            Some(frame) => self.handle_frame(frame, input),
        }
        self.settle();

        Ok(Reply { lines: mem::take(&mut self.narration), prompt: self.prompt() })
    }

    fn handle_command(&mut self, input: &str) {
        self.command_open = true;
        let command = input.trim().to_lowercase();
        match command.as_str() {
            "move" => self.open_destination_prompt(),
            "inventory" => self.open_inventory(),
            "flashlight" => self.toggle_flashlight(),
            "map" => self.show_map(),
            "use batteries" => self.use_batteries(),
            "quit" => {
                self.say("Quit? [y/N]");
                self.frames.push(Frame::QuitConfirm);
            }
            other => match other.strip_prefix("move ") {
                Some(destination) => self.travel_by_name(destination),
                None => self.say("Unknown command."),
            },
        }
    }

    fn confirm_quit(&mut self, input: &str) {
        if input.trim().eq_ignore_ascii_case("y") {
            self.persist();
            info!("player quit in {}", self.player.location);
            self.frames.clear();
            self.command_open = false;
            self.finished = Some(SessionEnd::Quit);
        }
    }

    /// Runs deferred arrival steps and, once the stack is empty after a
    /// command, the end-of-turn checks.
    fn settle(&mut self) {
        while self.finished.is_none() {
            match self.frames.last() {
                Some(Frame::Arrival(_)) => {
                    if let Some(Frame::Arrival(room)) = self.frames.pop() {
                        self.arrive(room);
                    }
                }
                Some(_) => return,
                None => {
                    if self.command_open {
                        self.command_open = false;
                        self.end_of_turn();
                    }
                    return;
                }
            }
        }
    }

    fn end_of_turn(&mut self) {
        if self.player.health <= 0 {
            self.finish(Ending::Consumed);
            return;
        }
        self.persist();
        let rules = &self.content.rules;
        if self.player.visited_rooms.len() > rules.trap_visit_limit
            && self.player.map_fragments_found < rules.trap_fragment_floor
        {
            self.finish(Ending::TrappedForever);
        }
    }

    /// Narrates the ending and deletes the save. Only the first call has any effect.
    fn finish(&mut self, ending: Ending) {
        if self.finished.is_some() {
            return;
        }
        match ending {
            Ending::Escape => {
                self.say("\nLight pierces your eyes. You wake in a hospital.");
                self.say("You've been in a coma for weeks. Floor 13 is behind you.");
            }
            Ending::Consumed => {
                self.say("\nYou are consumed by the darkness. Forever lost in Floor 13.");
            }
            Ending::TrappedForever => {
                self.say("\nThe hotel stretches endlessly. You are trapped forever.");
            }
        }
        save::clear(self.store.as_mut());
        info!("session ended: {ending:?}");
        self.log.push(LogEvent::EndingReached(ending));
        self.frames.clear();
        self.command_open = false;
        self.finished = Some(SessionEnd::Ending(ending));
    }

    fn persist(&mut self) {
        let record = SaveRecord::capture(&self.player, &self.world);
        save::save(self.store.as_mut(), &record);
        debug!("saved at {}", self.player.location);
    }

    fn say(&mut self, line: impl Into<String>) {
        self.narration.push(line.into());
    }
}

/// The status block shown above the command prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub location: RoomId,
    pub health: i32,
    pub max_health: i32,
    pub weapon: Option<WeaponId>,
    pub flashlight_on: bool,
    pub battery: i32,
    pub fragments: u32,
    pub fragments_required: u32,
    pub has_master_key: bool,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Location: {} | HP: {}/{}", self.location, self.health, self.max_health)?;
        let weapon = self.weapon.map_or("None", WeaponId::name);
        let light = if self.flashlight_on { "ON" } else { "OFF" };
        writeln!(f, "Weapon: {weapon} | Flashlight: {light} ({}%)", self.battery)?;
        writeln!(f, "Map fragments: {}/{}", self.fragments, self.fragments_required)?;
        write!(f, "Master Key: {}", if self.has_master_key { "Yes" } else { "No" })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::dice::ScriptedDice;
    use crate::save::MemoryStore;

    #[test]
    fn fresh_start_saves_immediately() {
        let store = MemoryStore::new();
        let game = Game::start(
            ContentPack::default(),
            Box::new(store.clone()),
            Box::new(ScriptedDice::new()),
        );
        assert!(!game.is_restored());
        assert_eq!(game.prompt(), Prompt::Command);
        let saved = store.contents().expect("fresh session should be saved");
        assert!(saved.contains("\"location\": \"Lobby\""));
    }

    #[test]
    fn start_resumes_a_stored_session() {
        let store = MemoryStore::with_contents(r#"{"location": "Room 102", "health": 40}"#);
        let game =
            Game::start(ContentPack::default(), Box::new(store), Box::new(ScriptedDice::new()));
        assert!(game.is_restored());
        assert_eq!(game.player().location, RoomId::Room102);
        assert_eq!(game.player().health, 40);
        assert!(game.player().visited_rooms.contains(&RoomId::Room102));
    }

    #[test]
    fn corrupt_save_starts_fresh() {
        let store = MemoryStore::with_contents("not json at all");
        let game = Game::start(
            ContentPack::default(),
            Box::new(store.clone()),
            Box::new(ScriptedDice::new()),
        );
        assert!(!game.is_restored());
        assert_eq!(game.player(), &Player::default());
    }

    #[test]
    fn unknown_command_is_reported() {
        let (mut game, _) = game_with(Player::default(), ScriptedDice::new());
        let reply = game.submit("dance").expect("submit");
        assert_eq!(reply.lines, vec!["Unknown command."]);
        assert_eq!(reply.prompt, Prompt::Command);
    }

    #[test]
    fn quit_requires_confirmation() {
        let (mut game, store) = game_with(Player::default(), ScriptedDice::new());
        let reply = game.submit("quit").expect("submit");
        assert_eq!(reply.lines, vec!["Quit? [y/N]"]);
        assert_eq!(reply.prompt, Prompt::QuitConfirm);

        let reply = game.submit("n").expect("submit");
        assert_eq!(reply.prompt, Prompt::Command);
        assert_eq!(game.outcome(), None);

        game.submit("quit").expect("submit");
        let reply = game.submit("Y").expect("submit");
        assert_eq!(reply.prompt, Prompt::Finished(SessionEnd::Quit));
        assert!(store.contents().is_some(), "quitting keeps the save");
        assert_eq!(game.submit("look"), Err(GameError::SessionOver(SessionEnd::Quit)));
    }

    #[test]
    fn zero_health_at_end_of_turn_is_consumed() {
        let player = Player { health: 0, ..Player::default() };
        let (mut game, store) = game_with(player, ScriptedDice::new());
        store_something(&store);
        let reply = game.submit("map").expect("submit");
        assert_eq!(reply.prompt, Prompt::Finished(SessionEnd::Ending(Ending::Consumed)));
        assert!(store.contents().is_none(), "endings delete the save");
    }

    #[test]
    fn wandering_without_fragments_traps_the_player() {
        let mut content = ContentPack::default();
        content.rules.trap_visit_limit = 2;
        let player = Player {
            location: RoomId::Lobby,
            visited_rooms: [RoomId::Lobby, RoomId::LeftHall].into(),
            map_fragments_found: 1,
            ..Player::default()
        };
        let (mut game, store) = game_in(content, player, ScriptedDice::new());
        store_something(&store);

        let reply = game.submit("move Right Hall").expect("submit");
        assert_eq!(reply.prompt, Prompt::Finished(SessionEnd::Ending(Ending::TrappedForever)));
        assert_eq!(
            reply.lines.last().map(String::as_str),
            Some("\nThe hotel stretches endlessly. You are trapped forever.")
        );
        assert!(store.contents().is_none());
    }

    #[test]
    fn enough_fragments_prevent_the_trap() {
        let mut content = ContentPack::default();
        content.rules.trap_visit_limit = 1;
        let player = Player { map_fragments_found: 2, ..Player::default() };
        let (mut game, _) = game_in(content, player, ScriptedDice::new());
        let reply = game.submit("move Left Hall").expect("submit");
        assert_eq!(reply.prompt, Prompt::Command);
    }

    #[test]
    fn status_block_matches_the_player() {
        let player = Player {
            weapon: Some(WeaponId::RustyPipe),
            inventory: vec![Item::Weapon(WeaponId::RustyPipe)],
            flashlight_on: true,
            map_fragments_found: 2,
            ..Player::default()
        };
        let (game, _) = game_with(player, ScriptedDice::new());
        assert_eq!(
            game.status().to_string(),
            "Location: Lobby | HP: 100/120\n\
             Weapon: Rusty Pipe | Flashlight: ON (60%)\n\
             Map fragments: 2/6\n\
             Master Key: No"
        );
    }
}
