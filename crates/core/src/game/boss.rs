//! The Matriarch fight.
//!
//! Every accepted action is followed by the boss's attack, even after a killing
//! blow. A summoned minion is fought in a nested encounter; the rest of the
//! boss turn (battery drain, save, defeat check) runs once it resolves.

use super::combat::CombatAction;
use super::prompts::{AfterMenu, BossFight, EncounterOrigin};
use super::*;

impl Game {
    pub(super) fn boss_turn(&mut self, mut fight: BossFight, input: &str) {
        match CombatAction::parse(input) {
            Some(CombatAction::Attack) => {
                let rules = &self.content.rules;
                let (bonus, unarmed) = (rules.boss_armed_bonus, rules.boss_unarmed_damage);
                fight.hp -= self.player_strike(self.content.boss.name, bonus, unarmed);
            }
            Some(CombatAction::Heal) => {
                if let Some(healed) = self.use_health_pack(self.content.rules.boss_heal_amount) {
                    self.say(format!("Heal +{healed}"));
                }
            }
            Some(CombatAction::Shutdown) => {
                self.player.flashlight_on = false;
                self.say("You turn off flashlight.");
            }
            Some(CombatAction::Flashlight) => self.toggle_flashlight(),
            Some(CombatAction::SwitchWeapon) => {
                if !self.player.weapons().is_empty() {
                    self.frames.push(Frame::Boss(fight));
                    self.open_weapon_menu(WeaponAction::Equip, AfterMenu::BossRetaliates);
                    return;
                }
                self.say("You have no weapons to equip.");
            }
            Some(CombatAction::Run) | None => {
                self.say("Invalid action.");
                self.frames.push(Frame::Boss(fight));
                return;
            }
        }
        self.boss_retaliates(fight);
    }

    pub(super) fn boss_retaliates(&mut self, fight: BossFight) {
        let boss = &self.content.boss;
        let (name, min_dmg, max_dmg) = (boss.name, boss.min_dmg, boss.max_dmg);
        let hit = self.dice.roll(min_dmg, max_dmg);
        self.player.hurt(hit);
        self.say(format!("{name} hits you for {hit} damage!"));
        if self.player.health <= 0 {
            self.player_slain();
            return;
        }

        if self.dice.unit() > self.content.rules.summon_threshold {
            self.say(format!("{name} summons a minion!"));
            self.frames.push(Frame::Boss(fight));
            self.start_encounter(EncounterOrigin::BossSummon);
            return;
        }
        self.boss_turn_tail(fight);
    }

    pub(super) fn boss_turn_tail(&mut self, fight: BossFight) {
        self.drain_flashlight(self.content.rules.boss_drain);
        self.persist();
        if fight.hp <= 0 {
            self.say(format!("{} defeated! You find a note: 'Wake me.'", self.content.boss.name));
            self.log.push(LogEvent::BossDefeated);
            self.finish(Ending::Escape);
            return;
        }
        self.frames.push(Frame::Boss(fight));
    }
}
