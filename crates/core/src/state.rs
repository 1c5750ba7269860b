use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::content::{ContentPack, Rules};
use crate::types::*;

/// The player's persisted record. Missing fields fall back to `Player::default()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub max_health: i32,
    pub health: i32,
    pub inventory: Vec<Item>,
    pub weapon: Option<WeaponId>,
    pub location: RoomId,
    pub flashlight_on: bool,
    pub flashlight_battery: i32,
    pub map_fragments_found: u32,
    pub map_unlocked: bool,
    pub has_master_key: bool,
    pub is_alive: bool,
    pub visited_rooms: BTreeSet<RoomId>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            max_health: 120,
            health: 100,
            inventory: Vec::new(),
            weapon: None,
            location: RoomId::Lobby,
            flashlight_on: false,
            flashlight_battery: 60,
            map_fragments_found: 0,
            map_unlocked: false,
            has_master_key: false,
            is_alive: true,
            visited_rooms: BTreeSet::from([RoomId::Lobby]),
        }
    }
}

impl Player {
    pub fn has(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Removes the first matching entry. Returns whether one was present.
    pub fn take(&mut self, item: Item) -> bool {
        match self.inventory.iter().position(|held| *held == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Weapons in inventory order, as listed by the equip and drop menus.
    pub fn weapons(&self) -> Vec<WeaponId> {
        self.inventory.iter().filter_map(|item| item.as_weapon()).collect()
    }

    /// Applies damage, flooring health at zero.
    pub fn hurt(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// Restores up to `cap` health without exceeding `max_health`. Returns the amount healed.
    pub fn heal(&mut self, cap: i32) -> i32 {
        let healed = (self.max_health - self.health).clamp(0, cap);
        self.health += healed;
        healed
    }

    /// Repairs a restored record so the data-model invariants hold.
    pub fn normalize(&mut self, rules: &Rules) {
        self.max_health = self.max_health.max(1);
        self.health = self.health.clamp(0, self.max_health);
        self.flashlight_battery = self.flashlight_battery.clamp(0, rules.battery_max);
        if self.flashlight_battery == 0 {
            self.flashlight_on = false;
        }
        if self.map_fragments_found >= rules.fragments_required {
            self.map_unlocked = true;
        }
        if let Some(weapon) = self.weapon
            && !self.has(Item::Weapon(weapon))
        {
            self.weapon = None;
        }
        if self.has(Item::MasterKey) {
            self.has_master_key = true;
        }
        self.visited_rooms.insert(self.location);
    }
}

/// Per-session world state layered over the immutable content pack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    looted: BTreeSet<RoomId>,
    durability: BTreeMap<WeaponId, i32>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_in<'a>(&self, content: &'a ContentPack, room: RoomId) -> &'a [RoomItem] {
        if self.looted.contains(&room) { &[] } else { &content.room(room).items }
    }

    /// Empties the room, returning its items in definition order.
    pub fn drain_room(&mut self, content: &ContentPack, room: RoomId) -> Vec<RoomItem> {
        let items = self.items_in(content, room).to_vec();
        if !items.is_empty() {
            self.looted.insert(room);
        }
        items
    }

    pub fn is_looted(&self, room: RoomId) -> bool {
        self.looted.contains(&room)
    }

    pub fn durability(&self, content: &ContentPack, weapon: WeaponId) -> i32 {
        self.durability.get(&weapon).copied().unwrap_or(content.weapon(weapon).durability)
    }

    /// Spends one use of the weapon and returns the uses left.
    pub fn wear(&mut self, content: &ContentPack, weapon: WeaponId) -> i32 {
        let remaining = self.durability(content, weapon) - 1;
        self.durability.insert(weapon, remaining);
        remaining
    }
}

/// On-disk shape: the player record at top level plus world extension fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(flatten)]
    pub player: Player,
    #[serde(default)]
    pub weapon_durability: BTreeMap<WeaponId, i32>,
    #[serde(default)]
    pub looted_rooms: BTreeSet<RoomId>,
}

impl SaveRecord {
    pub fn capture(player: &Player, world: &World) -> Self {
        Self {
            player: player.clone(),
            weapon_durability: world.durability.clone(),
            looted_rooms: world.looted.clone(),
        }
    }

    pub fn into_parts(self, rules: &Rules) -> (Player, World) {
        let mut player = self.player;
        player.normalize(rules);
        let world = World { looted: self.looted_rooms, durability: self.weapon_durability };
        (player, world)
    }
}
