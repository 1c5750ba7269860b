//! Inventory screen and the weapon equip/drop menus.

use super::prompts::AfterMenu;
use super::*;

fn no_weapons_line(action: WeaponAction) -> &'static str {
    match action {
        WeaponAction::Equip => "You have no weapons to equip.",
        WeaponAction::Drop => "No weapons to drop.",
    }
}

impl Game {
    pub(super) fn open_inventory(&mut self) {
        self.say("INVENTORY:");
        if self.player.inventory.is_empty() {
            self.say("- Empty");
        }
        for item in &self.player.inventory {
            self.narration.push(format!("- {item}"));
        }
        self.inspect_weapon();
        self.say("[S]witch weapon, [D]rop weapon, [Enter] back");
        self.frames.push(Frame::InventoryMenu);
    }

    fn inspect_weapon(&mut self) {
        let Some(weapon) = self.player.weapon else {
            self.say("No weapon equipped.");
            return;
        };
        let def = self.content.weapon(weapon);
        let durability = self.world.durability(&self.content, weapon);
        let line = format!(
            "Equipped: {weapon} | Damage: {} | Durability: {durability} | Special: {}",
            def.damage,
            def.special.unwrap_or("None"),
        );
        self.say(line);
    }

    /// Lists the carried weapons and waits for a choice. With none carried,
    /// says so and leaves the stack untouched.
    pub(super) fn open_weapon_menu(&mut self, action: WeaponAction, then: AfterMenu) {
        let weapons = self.player.weapons();
        if weapons.is_empty() {
            self.say(no_weapons_line(action));
            return;
        }
        match action {
            WeaponAction::Equip => self.say("Choose a weapon to equip:"),
            WeaponAction::Drop => self.say("Which weapon do you want to drop?"),
        }
        for (index, weapon) in weapons.into_iter().enumerate() {
            let line = match action {
                WeaponAction::Equip => format!(
                    "[{}] {weapon} (Damage: {}, Durability: {})",
                    index + 1,
                    self.content.weapon(weapon).damage,
                    self.world.durability(&self.content, weapon),
                ),
                WeaponAction::Drop => format!("[{}] {weapon}", index + 1),
            };
            self.say(line);
        }
        self.frames.push(Frame::WeaponMenu { action, then });
    }

    pub(super) fn choose_weapon(&mut self, action: WeaponAction, then: AfterMenu, input: &str) {
        let options = self.player.weapons();
        let choice = input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| options.get(index).copied());

        match (choice, action) {
            (None, _) => self.say("Invalid choice."),
            (Some(weapon), WeaponAction::Equip) => {
                self.player.weapon = Some(weapon);
                self.say(format!("You equip {weapon}."));
                self.log.push(LogEvent::WeaponEquipped(weapon));
            }
            (Some(weapon), WeaponAction::Drop) => {
                self.player.take(Item::Weapon(weapon));
                if self.player.weapon == Some(weapon) && !self.player.has(Item::Weapon(weapon)) {
                    self.player.weapon = None;
                }
                self.say(format!("You dropped {weapon}."));
                self.log.push(LogEvent::WeaponDropped(weapon));
            }
        }

        if then == AfterMenu::BossRetaliates {
            match self.frames.pop() {
                Some(Frame::Boss(fight)) => self.boss_retaliates(fight),
                Some(other) => self.frames.push(other),
                None => {}
            }
        }
    }
}
