//! Room pickups and consumables.
//! This module exists to keep inventory mutation rules in one place.
//! It does not own weapon selection menus or combat resolution.

use super::*;

impl Game {
    /// Collects everything left in the room. Returns whether anything was found.
    pub(super) fn pick_up_items(&mut self, room: RoomId) -> bool {
        let found = self.world.drain_room(&self.content, room);
        for item in &found {
            match *item {
                RoomItem::Fragment(label) => self.collect_fragment(label),
                RoomItem::Item(item) => self.collect_item(item),
            }
        }
        if found.is_empty() {
            return false;
        }
        self.persist();
        true
    }

    fn collect_fragment(&mut self, label: char) {
        self.player.map_fragments_found += 1;
        let total = self.player.map_fragments_found;
        self.say(format!("You found Map Fragment {label}!"));
        debug!("fragment {label} found, {total} total");
        self.log.push(LogEvent::FragmentFound { label, total });
        if total >= self.content.rules.fragments_required && !self.player.map_unlocked {
            self.player.map_unlocked = true;
            self.say("All map fragments collected. The map repairs itself.");
            self.log.push(LogEvent::MapRepaired);
        }
    }

    fn collect_item(&mut self, item: Item) {
        self.player.inventory.push(item);
        self.say(format!("You pick up: {item}"));
        debug!("picked up {item} in {}", self.player.location);
        self.log.push(LogEvent::ItemPickedUp(item));
        if item == Item::MasterKey {
            self.player.has_master_key = true;
        }
        if let Some(weapon) = item.as_weapon()
            && self.player.weapon.is_none()
        {
            self.player.weapon = Some(weapon);
            self.say(format!("You equip {weapon}."));
            self.log.push(LogEvent::WeaponEquipped(weapon));
        }
    }

    pub(super) fn use_batteries(&mut self) {
        if !self.player.take(Item::Batteries) {
            self.say("No batteries available.");
            return;
        }
        let rules = &self.content.rules;
        self.player.flashlight_battery =
            (self.player.flashlight_battery + rules.battery_recharge).min(rules.battery_max);
        self.say("You recharge your flashlight.");
        self.persist();
    }

    /// Consumes one Health Pack, healing up to `cap`. The caller narrates the amount.
    pub(super) fn use_health_pack(&mut self, cap: i32) -> Option<i32> {
        if !self.player.take(Item::HealthPack) {
            self.say("No Health Packs.");
            return None;
        }
        let healed = self.player.heal(cap);
        self.persist();
        Some(healed)
    }
}
