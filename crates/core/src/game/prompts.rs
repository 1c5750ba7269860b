//! Frame stack entries and their conversion to player-facing prompts.
//! This module exists to keep prompt lifecycle separate from gameplay rules.
//! It does not own the consequences of accepted inputs.

use super::*;

/// What to do once a weapon menu closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AfterMenu {
    Resume,
    BossRetaliates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EncounterOrigin {
    Room,
    BossSummon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Encounter {
    pub(super) archetype: usize,
    pub(super) hp: i32,
    pub(super) origin: EncounterOrigin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct BossFight {
    pub(super) hp: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Frame {
    Destination,
    InventoryMenu,
    WeaponMenu { action: WeaponAction, then: AfterMenu },
    QuitConfirm,
    Encounter(Encounter),
    Boss(BossFight),
    /// Boss-area checks still owed for a room whose arrival was interrupted by an encounter.
    Arrival(RoomId),
}

impl Game {
    pub fn prompt(&self) -> Prompt {
        if let Some(end) = self.finished {
            return Prompt::Finished(end);
        }
        match self.frames.last() {
            None | Some(Frame::Arrival(_)) => Prompt::Command,
            Some(Frame::Destination) => Prompt::Destination {
                exits: self.content.room(self.player.location).exits.clone(),
            },
            Some(Frame::InventoryMenu) => Prompt::InventoryMenu,
            Some(Frame::WeaponMenu { action, .. }) => {
                Prompt::WeaponSelect { action: *action, options: self.player.weapons() }
            }
            Some(Frame::QuitConfirm) => Prompt::QuitConfirm,
            Some(Frame::Encounter(encounter)) => Prompt::Encounter {
                enemy: self.content.enemies[encounter.archetype].name,
                enemy_hp: encounter.hp,
                player_hp: self.player.health,
            },
            Some(Frame::Boss(fight)) => {
                Prompt::BossFight { boss_hp: fight.hp, player_hp: self.player.health }
            }
        }
    }

    /// Dispatches input to the frame that was on top of the stack. The frame
    /// has already been popped; handlers push it back if it stays open.
    pub(super) fn handle_frame(&mut self, frame: Frame, input: &str) {
        match frame {
            Frame::Destination => match RoomId::parse(input) {
                Some(destination) => self.travel(destination),
                None => self.say("Unknown location."),
            },
            Frame::InventoryMenu => match input.trim().to_lowercase().as_str() {
                "s" => self.open_weapon_menu(WeaponAction::Equip, AfterMenu::Resume),
                "d" => self.open_weapon_menu(WeaponAction::Drop, AfterMenu::Resume),
                _ => {}
            },
            Frame::WeaponMenu { action, then } => self.choose_weapon(action, then, input),
            Frame::QuitConfirm => self.confirm_quit(input),
            Frame::Encounter(encounter) => self.encounter_turn(encounter, input),
            Frame::Boss(fight) => self.boss_turn(fight, input),
            Frame::Arrival(room) => {
                // Never left on top by `settle`; finish it and treat the input as a command.
                self.arrive(room);
                self.handle_command(input);
            }
        }
    }
}
