//! Static hotel data: rooms, weapons, enemy archetypes, the boss, and tuning rules.
//! Loaded once per process and never mutated; per-session state lives in `state`.

use crate::types::{Item, RoomId, RoomItem, WeaponId};

pub struct RoomDef {
    pub id: RoomId,
    pub description: &'static str,
    pub exits: Vec<RoomId>,
    pub requires_light: bool,
    pub items: Vec<RoomItem>,
    pub encounter_chance: f64,
}

pub struct WeaponDef {
    pub id: WeaponId,
    pub damage: i32,
    pub durability: i32,
    /// Carried for display only; no effect in combat yet.
    pub special: Option<&'static str>,
}

pub struct EnemyArchetype {
    pub name: &'static str,
    pub min_hp: i32,
    pub max_hp: i32,
    pub min_dmg: i32,
    pub max_dmg: i32,
}

pub struct BossStats {
    pub name: &'static str,
    pub hp: i32,
    pub min_dmg: i32,
    pub max_dmg: i32,
}

/// Inclusive integer range used for damage bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub lo: i32,
    pub hi: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rules {
    pub fragments_required: u32,
    pub move_drain: i32,
    pub encounter_drain: i32,
    pub boss_drain: i32,
    pub heal_amount: i32,
    pub boss_heal_amount: i32,
    pub battery_recharge: i32,
    pub battery_max: i32,
    pub trap_visit_limit: usize,
    pub trap_fragment_floor: u32,
    /// A run attempt succeeds when the draw is above this.
    pub run_threshold: f64,
    /// Loot drops when the draw is above this.
    pub loot_threshold: f64,
    /// The boss summons a minion when the draw is above this.
    pub summon_threshold: f64,
    /// Without the Master Key, the Boss Chamber framing coin flip must beat this.
    pub boss_framing_threshold: f64,
    pub armed_bonus: Span,
    pub unarmed_damage: Span,
    pub boss_armed_bonus: Span,
    pub boss_unarmed_damage: Span,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            fragments_required: 6,
            move_drain: 6,
            encounter_drain: 4,
            boss_drain: 6,
            heal_amount: 30,
            boss_heal_amount: 40,
            battery_recharge: 50,
            battery_max: 100,
            trap_visit_limit: 30,
            trap_fragment_floor: 2,
            run_threshold: 0.5,
            loot_threshold: 0.6,
            summon_threshold: 0.7,
            boss_framing_threshold: 0.5,
            armed_bonus: Span { lo: 0, hi: 5 },
            unarmed_damage: Span { lo: 3, hi: 8 },
            boss_armed_bonus: Span { lo: 5, hi: 10 },
            boss_unarmed_damage: Span { lo: 5, hi: 9 },
        }
    }
}

fn room_def(
    id: RoomId,
    description: &'static str,
    exits: &[RoomId],
    requires_light: bool,
    items: &[RoomItem],
    encounter_chance: f64,
) -> RoomDef {
    RoomDef {
        id,
        description,
        exits: exits.to_vec(),
        requires_light,
        items: items.to_vec(),
        encounter_chance,
    }
}

pub const LOOT_TABLE: [Item; 2] = [Item::HealthPack, Item::Batteries];

pub struct ContentPack {
    pub rooms: Vec<RoomDef>,
    pub weapons: Vec<WeaponDef>,
    pub enemies: Vec<EnemyArchetype>,
    pub boss: BossStats,
    pub rules: Rules,
}

impl ContentPack {
    pub fn build_default() -> Self {
        use RoomId::*;

        let weapon = |id| RoomItem::Item(Item::Weapon(id));

        let rooms = vec![
            room_def(
                Lobby,
                "An echoing hotel lobby, faded wallpaper, a broken chandelier.",
                &[LeftHall, RightHall, Stairwell],
                false,
                &[RoomItem::Fragment('A')],
                0.2,
            ),
            room_def(
                LeftHall,
                "A long corridor with locked doors and peeling carpet.",
                &[Room101, Room102, Lobby],
                false,
                &[weapon(WeaponId::RustyPipe)],
                0.3,
            ),
            room_def(
                RightHall,
                "The right wing smells of rot. Footprints that go nowhere.",
                &[Room103, Room104, Lobby],
                false,
                &[RoomItem::Item(Item::HealthPack)],
                0.35,
            ),
            room_def(
                Stairwell,
                "A spiraling stairwell; the lights buzz and sometimes go out.",
                &[Basement, Attic, Lobby],
                true,
                &[],
                0.4,
            ),
            room_def(
                Room101,
                "A child's drawing pinned to the wall. The bed is soaked.",
                &[LeftHall],
                true,
                &[RoomItem::Fragment('B')],
                0.5,
            ),
            room_def(
                Room102,
                "Furniture strewn about. A lamp that never fully lights.",
                &[LeftHall],
                false,
                &[RoomItem::Item(Item::Batteries)],
                0.4,
            ),
            room_def(
                Room103,
                "A mirror that doesn't reflect your face properly.",
                &[RightHall],
                true,
                &[weapon(WeaponId::KitchenKnife)],
                0.45,
            ),
            room_def(
                Room104,
                "Scratches on the walls in a frantic pattern.",
                &[RightHall],
                false,
                &[RoomItem::Fragment('C')],
                0.5,
            ),
            room_def(
                Basement,
                "Rusty boilers and a damp smell; something moves in the pipes.",
                &[BoilerRoom, Stairwell],
                true,
                &[RoomItem::Item(Item::HealthPack), RoomItem::Item(Item::Batteries)],
                0.55,
            ),
            room_def(
                BoilerRoom,
                "Machines clank. Shadows crawl between the furnaces.",
                &[Basement],
                true,
                &[RoomItem::Fragment('D')],
                0.6,
            ),
            room_def(
                Attic,
                "Cobwebs and trunks. Something whispers from a trunk.",
                &[Stairwell, Room105],
                true,
                &[weapon(WeaponId::Revolver)],
                0.5,
            ),
            room_def(
                Room105,
                "A bathroom mirror cracked with a message: 'DON'T WAKE HER.'",
                &[Attic, Room106],
                false,
                &[RoomItem::Fragment('E')],
                0.45,
            ),
            room_def(
                Room106,
                "A hallway inside a room; doors lead to nowhere.",
                &[Room105, Room107],
                true,
                &[RoomItem::Item(Item::HealthPack)],
                0.5,
            ),
            room_def(
                Room107,
                "A door with thirteen brass numbers, cold to the touch.",
                &[Room106, BossAntechamber],
                true,
                &[RoomItem::Fragment('F')],
                0.6,
            ),
            room_def(
                BossAntechamber,
                "A corridor of carpets stained black; a scent like old blood.",
                &[Room107, BossChamber],
                true,
                &[RoomItem::Item(Item::MasterKey)],
                0.65,
            ),
            room_def(
                BossChamber,
                "A vast room where the air itself bends. The Matriarch waits.",
                &[BossAntechamber],
                true,
                &[],
                0.0,
            ),
        ];

        Self {
            rooms,
            weapons: vec![
                WeaponDef { id: WeaponId::RustyPipe, damage: 9, durability: 20, special: None },
                WeaponDef {
                    id: WeaponId::KitchenKnife,
                    damage: 14,
                    durability: 15,
                    special: Some("Bleed"),
                },
                WeaponDef {
                    id: WeaponId::Revolver,
                    damage: 26,
                    durability: 12,
                    special: Some("Critical"),
                },
            ],
            enemies: vec![
                EnemyArchetype {
                    name: "Shadow Minion",
                    min_hp: 18,
                    max_hp: 36,
                    min_dmg: 5,
                    max_dmg: 14,
                },
                EnemyArchetype {
                    name: "Crawling Demon",
                    min_hp: 24,
                    max_hp: 40,
                    min_dmg: 8,
                    max_dmg: 16,
                },
                EnemyArchetype {
                    name: "Twisted Bellhop",
                    min_hp: 20,
                    max_hp: 38,
                    min_dmg: 6,
                    max_dmg: 15,
                },
            ],
            boss: BossStats { name: "Matriarch", hp: 180, min_dmg: 12, max_dmg: 26 },
            rules: Rules::default(),
        }
    }

    /// Every `RoomId` has exactly one definition in a well-formed pack.
    pub fn room(&self, id: RoomId) -> &RoomDef {
        &self.rooms[id as usize]
    }

    pub fn weapon(&self, id: WeaponId) -> &WeaponDef {
        &self.weapons[id as usize]
    }
}

impl Default for ContentPack {
    fn default() -> Self {
        Self::build_default()
    }
}
