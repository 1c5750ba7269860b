use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomId {
    #[serde(rename = "Lobby")]
    Lobby,
    #[serde(rename = "Left Hall")]
    LeftHall,
    #[serde(rename = "Right Hall")]
    RightHall,
    #[serde(rename = "Stairwell")]
    Stairwell,
    #[serde(rename = "Room 101")]
    Room101,
    #[serde(rename = "Room 102")]
    Room102,
    #[serde(rename = "Room 103")]
    Room103,
    #[serde(rename = "Room 104")]
    Room104,
    #[serde(rename = "Basement")]
    Basement,
    #[serde(rename = "Boiler Room")]
    BoilerRoom,
    #[serde(rename = "Attic")]
    Attic,
    #[serde(rename = "Room 105")]
    Room105,
    #[serde(rename = "Room 106")]
    Room106,
    #[serde(rename = "Room 107")]
    Room107,
    #[serde(rename = "Boss Antechamber")]
    BossAntechamber,
    #[serde(rename = "Boss Chamber")]
    BossChamber,
}

impl RoomId {
    pub const ALL: [RoomId; 16] = [
        RoomId::Lobby,
        RoomId::LeftHall,
        RoomId::RightHall,
        RoomId::Stairwell,
        RoomId::Room101,
        RoomId::Room102,
        RoomId::Room103,
        RoomId::Room104,
        RoomId::Basement,
        RoomId::BoilerRoom,
        RoomId::Attic,
        RoomId::Room105,
        RoomId::Room106,
        RoomId::Room107,
        RoomId::BossAntechamber,
        RoomId::BossChamber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RoomId::Lobby => "Lobby",
            RoomId::LeftHall => "Left Hall",
            RoomId::RightHall => "Right Hall",
            RoomId::Stairwell => "Stairwell",
            RoomId::Room101 => "Room 101",
            RoomId::Room102 => "Room 102",
            RoomId::Room103 => "Room 103",
            RoomId::Room104 => "Room 104",
            RoomId::Basement => "Basement",
            RoomId::BoilerRoom => "Boiler Room",
            RoomId::Attic => "Attic",
            RoomId::Room105 => "Room 105",
            RoomId::Room106 => "Room 106",
            RoomId::Room107 => "Room 107",
            RoomId::BossAntechamber => "Boss Antechamber",
            RoomId::BossChamber => "Boss Chamber",
        }
    }

    /// Case-insensitive lookup by display name, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<RoomId> {
        let wanted = raw.trim();
        RoomId::ALL.into_iter().find(|room| room.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponId {
    #[serde(rename = "Rusty Pipe")]
    RustyPipe,
    #[serde(rename = "Kitchen Knife")]
    KitchenKnife,
    #[serde(rename = "Revolver")]
    Revolver,
}

impl WeaponId {
    pub const ALL: [WeaponId; 3] = [WeaponId::RustyPipe, WeaponId::KitchenKnife, WeaponId::Revolver];

    pub fn name(self) -> &'static str {
        match self {
            WeaponId::RustyPipe => "Rusty Pipe",
            WeaponId::KitchenKnife => "Kitchen Knife",
            WeaponId::Revolver => "Revolver",
        }
    }
}

impl fmt::Display for WeaponId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can sit in the player's inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Item {
    Weapon(WeaponId),
    HealthPack,
    Batteries,
    MasterKey,
}

impl Item {
    pub fn name(self) -> &'static str {
        match self {
            Item::Weapon(weapon) => weapon.name(),
            Item::HealthPack => "Health Pack",
            Item::Batteries => "Batteries",
            Item::MasterKey => "Master Key",
        }
    }

    pub fn parse(raw: &str) -> Option<Item> {
        let simple = [Item::HealthPack, Item::Batteries, Item::MasterKey];
        WeaponId::ALL
            .into_iter()
            .map(Item::Weapon)
            .chain(simple)
            .find(|item| item.name() == raw)
    }

    pub fn as_weapon(self) -> Option<WeaponId> {
        match self {
            Item::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Item> for String {
    fn from(item: Item) -> Self {
        item.name().to_string()
    }
}

impl TryFrom<String> for Item {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Item::parse(&value).ok_or_else(|| format!("unknown item '{value}'"))
    }
}

/// Contents of a room before pickup: either a map fragment or an inventory item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomItem {
    Fragment(char),
    Item(Item),
}

impl fmt::Display for RoomItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomItem::Fragment(label) => write!(f, "Map Fragment {label}"),
            RoomItem::Item(item) => item.fmt(f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    Escape,
    Consumed,
    TrappedForever,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionEnd {
    Ending(Ending),
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponAction {
    Equip,
    Drop,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    Command,
    Destination { exits: Vec<RoomId> },
    InventoryMenu,
    WeaponSelect { action: WeaponAction, options: Vec<WeaponId> },
    QuitConfirm,
    Encounter { enemy: &'static str, enemy_hp: i32, player_hp: i32 },
    BossFight { boss_hp: i32, player_hp: i32 },
    Finished(SessionEnd),
}

impl Prompt {
    /// Text shown when asking for the next input line.
    pub fn text(&self) -> &'static str {
        match self {
            Prompt::Command
            | Prompt::InventoryMenu
            | Prompt::WeaponSelect { .. }
            | Prompt::QuitConfirm => "> ",
            Prompt::Destination { .. } => "Where to? ",
            Prompt::Encounter { .. } => "[A]ttack  [H]eal  [R]un  [W]eapon Switch  > ",
            Prompt::BossFight { .. } => {
                "[A]ttack  [H]eal  [S]hutdown flashlight  [F]lashlight  [W]eapon Switch  > "
            }
            Prompt::Finished(_) => "",
        }
    }

    /// Inputs this prompt acts on. Anything else is rejected or treated as "back".
    pub fn accepted_inputs(&self) -> Vec<String> {
        let fixed: &[&str] = match self {
            Prompt::Command => {
                &["move", "move <room>", "inventory", "flashlight", "map", "use batteries", "quit"]
            }
            Prompt::InventoryMenu => &["s", "d", ""],
            Prompt::QuitConfirm => &["y", "n"],
            Prompt::Encounter { .. } => &["a", "attack", "h", "heal", "r", "run", "w", "weapon switch"],
            Prompt::BossFight { .. } => {
                &["a", "attack", "h", "heal", "s", "shut", "f", "flashlight", "w", "weapon switch"]
            }
            Prompt::Finished(_) => &[],
            Prompt::Destination { exits } => {
                return exits.iter().map(|room| room.name().to_string()).collect();
            }
            Prompt::WeaponSelect { options, .. } => {
                return (1..=options.len()).map(|index| index.to_string()).collect();
            }
        };
        fixed.iter().map(|input| input.to_string()).collect()
    }
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveBlock {
    NotAdjacent,
    TooDark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Escaped,
    PlayerSlain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Moved { from: RoomId, to: RoomId },
    MoveBlocked { to: RoomId, reason: MoveBlock },
    FragmentFound { label: char, total: u32 },
    MapRepaired,
    ItemPickedUp(Item),
    WeaponEquipped(WeaponId),
    WeaponDropped(WeaponId),
    WeaponBroke(WeaponId),
    FlashlightDied,
    EncounterStarted { enemy: &'static str, hp: i32 },
    EncounterResolved { enemy: &'static str, outcome: EncounterOutcome },
    LootDropped(Item),
    BossEngaged,
    BossDefeated,
    EndingReached(Ending),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    SessionOver(SessionEnd),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionOver(end) => write!(f, "session already finished: {end:?}"),
        }
    }
}

impl Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_names_parse_case_insensitively() {
        assert_eq!(RoomId::parse("left hall"), Some(RoomId::LeftHall));
        assert_eq!(RoomId::parse("  Boss Chamber "), Some(RoomId::BossChamber));
        assert_eq!(RoomId::parse("Room 999"), None);
    }

    #[test]
    fn items_serialize_as_display_names() {
        let json = serde_json::to_string(&vec![Item::Weapon(WeaponId::KitchenKnife), Item::HealthPack])
            .expect("serialize");
        assert_eq!(json, r#"["Kitchen Knife","Health Pack"]"#);

        let decoded: Vec<Item> = serde_json::from_str(r#"["Batteries","Master Key"]"#).expect("decode");
        assert_eq!(decoded, vec![Item::Batteries, Item::MasterKey]);
    }

    #[test]
    fn unknown_item_names_fail_to_decode() {
        let decoded: Result<Vec<Item>, _> = serde_json::from_str(r#"["Cursed Doll"]"#);
        assert!(decoded.is_err());
    }

    #[test]
    fn room_ids_serialize_as_display_names() {
        let json = serde_json::to_string(&RoomId::Room101).expect("serialize");
        assert_eq!(json, r#""Room 101""#);
    }
}
