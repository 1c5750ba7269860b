//! Movement between rooms, the flashlight, and the repaired map.

use super::*;
use super::prompts::{BossFight, EncounterOrigin};

impl Game {
    pub(super) fn open_destination_prompt(&mut self) {
        let exits = self.content.room(self.player.location).exits.iter().map(|room| room.name());
        let listing = exits.collect::<Vec<_>>().join(", ");
        self.say(format!("From here you can go: {listing}"));
        self.frames.push(Frame::Destination);
    }

    pub(super) fn travel_by_name(&mut self, raw: &str) {
        match RoomId::parse(raw) {
            Some(destination) => self.travel(destination),
            None => self.say("Unknown location."),
        }
    }

    pub(super) fn travel(&mut self, destination: RoomId) {
        let from = self.player.location;
        if !self.content.room(from).exits.contains(&destination) {
            self.say("Cannot go there directly.");
            self.log.push(LogEvent::MoveBlocked { to: destination, reason: MoveBlock::NotAdjacent });
            return;
        }
        if self.content.room(destination).requires_light && !self.player.flashlight_on {
            self.say("Too dark to enter without flashlight.");
            self.log.push(LogEvent::MoveBlocked { to: destination, reason: MoveBlock::TooDark });
            return;
        }

        self.player.location = destination;
        self.player.visited_rooms.insert(destination);
        self.drain_flashlight(self.content.rules.move_drain);
        self.persist();
        self.say(format!("You move into {destination}"));
        self.log.push(LogEvent::Moved { from, to: destination });
        debug!("moved {from} -> {destination}");

        if !self.pick_up_items(destination) {
            self.say(self.content.room(destination).description);
        }

        // The boss-area checks run after any encounter this arrival triggers.
        self.frames.push(Frame::Arrival(destination));
        let chance = self.content.room(destination).encounter_chance;
        if chance > 0.0 && self.dice.unit() < chance {
            self.start_encounter(EncounterOrigin::Room);
        }
    }

    pub(super) fn arrive(&mut self, room: RoomId) {
        if room == RoomId::BossAntechamber && self.player.has(Item::MasterKey) {
            self.say("Door to Boss Chamber unlocked.");
        }
        if room != RoomId::BossChamber {
            return;
        }

        let framing = self.content.rules.boss_framing_threshold;
        if self.player.has_master_key || self.dice.unit() > framing {
            self.say("You confront the Matriarch.");
        } else {
            self.say("You feel a wrong step... darkness surrounds you.");
        }
        self.say(format!("\nThe {} looms before you!", self.content.boss.name));
        self.log.push(LogEvent::BossEngaged);
        info!("boss fight started");
        self.frames.push(Frame::Boss(BossFight { hp: self.content.boss.hp }));
    }

    /// Spends battery while the light is on. An empty battery switches it off and saves.
    pub(super) fn drain_flashlight(&mut self, amount: i32) {
        if !self.player.flashlight_on {
            return;
        }
        self.player.flashlight_battery -= amount;
        if self.player.flashlight_battery <= 0 {
            self.player.flashlight_battery = 0;
            self.player.flashlight_on = false;
            self.say("Your flashlight dies. Darkness surrounds you.");
            self.log.push(LogEvent::FlashlightDied);
            self.persist();
        }
    }

    pub(super) fn toggle_flashlight(&mut self) {
        if self.player.flashlight_on {
            self.player.flashlight_on = false;
            self.say("You switch the flashlight off.");
        } else if self.player.flashlight_battery > 0 {
            self.player.flashlight_on = true;
            self.say("You switch the flashlight on.");
        } else {
            self.say("The flashlight won't turn on. No battery power left.");
            return;
        }
        self.persist();
    }

    pub(super) fn show_map(&mut self) {
        if !self.player.map_unlocked {
            self.say("You haven't repaired the map yet.");
            return;
        }
        self.say("-- MAP REPAIRED --");
        for room in &self.content.rooms {
            let marker = if room.id == self.player.location {
                "@"
            } else if self.player.visited_rooms.contains(&room.id) {
                "x"
            } else {
                " "
            };
            let exits = room.exits.iter().map(|exit| exit.name()).collect::<Vec<_>>().join(", ");
            self.narration.push(format!("[{marker}] {} -> {exits}", room.id));
        }
    }
}
