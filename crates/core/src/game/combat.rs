//! Regular encounters: turn resolution, weapon wear, loot, and death.
//! This module exists to share strike and slain handling with the boss fight.
//! It does not own the boss's own turn structure.

use super::prompts::{AfterMenu, Encounter, EncounterOrigin};
use super::*;
use crate::content::{LOOT_TABLE, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CombatAction {
    Attack,
    Heal,
    Run,
    Shutdown,
    Flashlight,
    SwitchWeapon,
}

impl CombatAction {
    pub(super) fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "a" | "attack" => Some(Self::Attack),
            "h" | "heal" => Some(Self::Heal),
            "r" | "run" => Some(Self::Run),
            "s" | "shut" => Some(Self::Shutdown),
            "f" | "flashlight" => Some(Self::Flashlight),
            "w" | "weapon switch" => Some(Self::SwitchWeapon),
            _ => None,
        }
    }
}

impl Game {
    pub(super) fn start_encounter(&mut self, origin: EncounterOrigin) {
        let last = self.content.enemies.len().saturating_sub(1);
        let archetype = self.dice.pick(self.content.enemies.len()).min(last);
        let enemy = &self.content.enemies[archetype];
        let (name, min_hp, max_hp) = (enemy.name, enemy.min_hp, enemy.max_hp);
        let hp = self.dice.roll(min_hp, max_hp);

        self.say(format!("A {name} attacks! HP: {hp}"));
        self.log.push(LogEvent::EncounterStarted { enemy: name, hp });
        debug!("encounter: {name} ({hp} hp, {origin:?})");
        self.frames.push(Frame::Encounter(Encounter { archetype, hp, origin }));
    }

    pub(super) fn encounter_turn(&mut self, mut encounter: Encounter, input: &str) {
        let enemy = &self.content.enemies[encounter.archetype];
        let (name, min_dmg, max_dmg) = (enemy.name, enemy.min_dmg, enemy.max_dmg);

        match CombatAction::parse(input) {
            Some(CombatAction::Attack) => {
                let rules = &self.content.rules;
                let (bonus, unarmed) = (rules.armed_bonus, rules.unarmed_damage);
                encounter.hp -= self.player_strike(name, bonus, unarmed);
            }
            Some(CombatAction::Heal) => {
                if let Some(healed) = self.use_health_pack(self.content.rules.heal_amount) {
                    self.say(format!("You use a Health Pack. HP +{healed}"));
                }
            }
            Some(CombatAction::Run) => {
                if self.dice.unit() > self.content.rules.run_threshold {
                    self.say("You escape successfully!");
                    self.resolve_encounter(encounter, EncounterOutcome::Escaped);
                    return;
                }
                self.say("Failed to escape!");
            }
            Some(CombatAction::SwitchWeapon) => {
                // Free action: the enemy does not get a turn.
                self.frames.push(Frame::Encounter(encounter));
                self.open_weapon_menu(WeaponAction::Equip, AfterMenu::Resume);
                return;
            }
            Some(CombatAction::Shutdown | CombatAction::Flashlight) | None => {
                self.say("Invalid action.");
                self.frames.push(Frame::Encounter(encounter));
                return;
            }
        }

        if encounter.hp > 0 {
            let hit = self.dice.roll(min_dmg, max_dmg);
            self.player.hurt(hit);
            self.say(format!("{name} hits you for {hit} damage."));
            self.drain_flashlight(self.content.rules.encounter_drain);
        }
        if self.player.health <= 0 {
            self.log.push(LogEvent::EncounterResolved {
                enemy: name,
                outcome: EncounterOutcome::PlayerSlain,
            });
            self.player_slain();
            return;
        }
        if encounter.hp <= 0 {
            self.resolve_encounter(encounter, EncounterOutcome::Victory);
            return;
        }
        self.frames.push(Frame::Encounter(encounter));
    }

    /// One player attack against `target`. Returns the damage dealt.
    pub(super) fn player_strike(&mut self, target: &str, armed_bonus: Span, unarmed: Span) -> i32 {
        let Some(weapon) = self.player.weapon else {
            let damage = self.dice.roll(unarmed.lo, unarmed.hi);
            self.say(format!("You punch for {damage} damage."));
            return damage;
        };

        let damage = self.content.weapon(weapon).damage + self.dice.roll(armed_bonus.lo, armed_bonus.hi);
        let left = self.world.wear(&self.content, weapon);
        self.say(format!(
            "You hit {target} with {weapon} for {damage} damage. Durability left: {left}"
        ));
        if left <= 0 {
            self.say(format!("Your {weapon} breaks!"));
            self.player.take(Item::Weapon(weapon));
            self.player.weapon = None;
            self.log.push(LogEvent::WeaponBroke(weapon));
        }
        damage
    }

    fn resolve_encounter(&mut self, encounter: Encounter, outcome: EncounterOutcome) {
        let name = self.content.enemies[encounter.archetype].name;
        self.log.push(LogEvent::EncounterResolved { enemy: name, outcome });

        if outcome == EncounterOutcome::Victory {
            self.say(format!("You defeat the {name}."));
            if self.dice.unit() > self.content.rules.loot_threshold
                && let Some(loot) = LOOT_TABLE.get(self.dice.pick(LOOT_TABLE.len())).copied()
            {
                self.player.inventory.push(loot);
                self.say(format!("The {name} dropped: {loot}"));
                self.log.push(LogEvent::LootDropped(loot));
                self.persist();
            }
        }

        if encounter.origin == EncounterOrigin::BossSummon {
            match self.frames.pop() {
                Some(Frame::Boss(fight)) => self.boss_turn_tail(fight),
                Some(other) => self.frames.push(other),
                None => {}
            }
        }
    }

    pub(super) fn player_slain(&mut self) {
        self.say("You have been slain...");
        self.player.is_alive = false;
        self.persist();
        self.finish(Ending::Consumed);
    }
}
