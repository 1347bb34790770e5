// ═══════════════════════════════════════════════════════════════════════
// Mansion layout — static room, character and weapon data plus the
// adjacency graph built from it. Nothing here changes during a game.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{CharacterId, Color, RoomCategory, RoomId, WeaponId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Static description of a room (compile-time constant).
#[derive(Debug, Clone, Copy)]
pub struct RoomDef {
    pub id: RoomId,
    pub name: &'static str,
    pub category: RoomCategory,
}

#[derive(Debug, Clone, Copy)]
pub struct CharacterDef {
    pub id: CharacterId,
    pub name: &'static str,
    pub color: Color,
    pub starting_room: RoomId,
}

#[derive(Debug, Clone, Copy)]
pub struct WeaponDef {
    pub id: WeaponId,
    pub name: &'static str,
}

// ── Room ID constants ──────────────────────────────────────────────────
// Ordered: main rooms (0–8), hallways (9–20)

pub const KITCHEN: RoomId       = RoomId(0);
pub const BALLROOM: RoomId      = RoomId(1);
pub const CONSERVATORY: RoomId  = RoomId(2);
pub const DINING_ROOM: RoomId   = RoomId(3);
pub const BILLIARD_ROOM: RoomId = RoomId(4);
pub const LIBRARY: RoomId       = RoomId(5);
pub const LOUNGE: RoomId        = RoomId(6);
pub const HALL: RoomId          = RoomId(7);
pub const STUDY: RoomId         = RoomId(8);

pub const HALLWAY_HALL_LOUNGE: RoomId           = RoomId(9);
pub const HALLWAY_HALL_BILLIARD: RoomId         = RoomId(10);
pub const HALLWAY_HALL_STUDY: RoomId            = RoomId(11);
pub const HALLWAY_LOUNGE_DINING: RoomId         = RoomId(12);
pub const HALLWAY_DINING_BILLIARD: RoomId       = RoomId(13);
pub const HALLWAY_BILLIARD_LIBRARY: RoomId      = RoomId(14);
pub const HALLWAY_LIBRARY_CONSERVATORY: RoomId  = RoomId(15);
pub const HALLWAY_CONSERVATORY_BALLROOM: RoomId = RoomId(16);
pub const HALLWAY_BALLROOM_KITCHEN: RoomId      = RoomId(17);
pub const HALLWAY_KITCHEN_DINING: RoomId        = RoomId(18);
pub const HALLWAY_STUDY_LIBRARY: RoomId         = RoomId(19);
pub const HALLWAY_BALLROOM_BILLIARD: RoomId     = RoomId(20);

pub const NUM_ROOMS: usize = 21;
pub const NUM_MAIN_ROOMS: usize = 9;

// ── Character / weapon ID constants ────────────────────────────────────

pub const MISS_SCARLETT: CharacterId   = CharacterId(0);
pub const COLONEL_MUSTARD: CharacterId = CharacterId(1);
pub const MRS_WHITE: CharacterId       = CharacterId(2);
pub const REVEREND_GREEN: CharacterId  = CharacterId(3);
pub const MRS_PEACOCK: CharacterId     = CharacterId(4);
pub const PROFESSOR_PLUM: CharacterId  = CharacterId(5);

pub const CANDLESTICK: WeaponId = WeaponId(0);
pub const DAGGER: WeaponId      = WeaponId(1);
pub const LEAD_PIPE: WeaponId   = WeaponId(2);
pub const REVOLVER: WeaponId    = WeaponId(3);
pub const ROPE: WeaponId        = WeaponId(4);
pub const WRENCH: WeaponId      = WeaponId(5);

// ── Static definitions ─────────────────────────────────────────────────

macro_rules! main_room {
    ($name:expr, $id:expr) => {
        RoomDef { id: $id, name: $name, category: RoomCategory::Main }
    };
}

macro_rules! hallway {
    ($name:expr, $id:expr) => {
        RoomDef { id: $id, name: $name, category: RoomCategory::Hallway }
    };
}

pub static ROOMS: [RoomDef; NUM_ROOMS] = [
    main_room!("Kitchen", KITCHEN),
    main_room!("Ballroom", BALLROOM),
    main_room!("Conservatory", CONSERVATORY),
    main_room!("Dining Room", DINING_ROOM),
    main_room!("Billiard Room", BILLIARD_ROOM),
    main_room!("Library", LIBRARY),
    main_room!("Lounge", LOUNGE),
    main_room!("Hall", HALL),
    main_room!("Study", STUDY),
    hallway!("Hallway_Hall_Lounge", HALLWAY_HALL_LOUNGE),
    hallway!("Hallway_Hall_Billiard", HALLWAY_HALL_BILLIARD),
    hallway!("Hallway_Hall_Study", HALLWAY_HALL_STUDY),
    hallway!("Hallway_Lounge_Dining", HALLWAY_LOUNGE_DINING),
    hallway!("Hallway_Dining_Billiard", HALLWAY_DINING_BILLIARD),
    hallway!("Hallway_Billiard_Library", HALLWAY_BILLIARD_LIBRARY),
    hallway!("Hallway_Library_Conservatory", HALLWAY_LIBRARY_CONSERVATORY),
    hallway!("Hallway_Conservatory_Ballroom", HALLWAY_CONSERVATORY_BALLROOM),
    hallway!("Hallway_Ballroom_Kitchen", HALLWAY_BALLROOM_KITCHEN),
    hallway!("Hallway_Kitchen_Dining", HALLWAY_KITCHEN_DINING),
    hallway!("Hallway_Study_Library", HALLWAY_STUDY_LIBRARY),
    hallway!("Hallway_Ballroom_Billiard", HALLWAY_BALLROOM_BILLIARD),
];

/// Undirected main-room ↔ hallway links. Inserted in both directions.
pub static LINKS: &[(RoomId, RoomId)] = &[
    (HALL, HALLWAY_HALL_LOUNGE),
    (HALL, HALLWAY_HALL_BILLIARD),
    (HALL, HALLWAY_HALL_STUDY),
    (LOUNGE, HALLWAY_HALL_LOUNGE),
    (LOUNGE, HALLWAY_LOUNGE_DINING),
    (DINING_ROOM, HALLWAY_LOUNGE_DINING),
    (DINING_ROOM, HALLWAY_DINING_BILLIARD),
    (DINING_ROOM, HALLWAY_KITCHEN_DINING),
    (BILLIARD_ROOM, HALLWAY_HALL_BILLIARD),
    (BILLIARD_ROOM, HALLWAY_DINING_BILLIARD),
    (BILLIARD_ROOM, HALLWAY_BILLIARD_LIBRARY),
    (BILLIARD_ROOM, HALLWAY_BALLROOM_BILLIARD),
    (LIBRARY, HALLWAY_BILLIARD_LIBRARY),
    (LIBRARY, HALLWAY_LIBRARY_CONSERVATORY),
    (LIBRARY, HALLWAY_STUDY_LIBRARY),
    (CONSERVATORY, HALLWAY_LIBRARY_CONSERVATORY),
    (CONSERVATORY, HALLWAY_CONSERVATORY_BALLROOM),
    (BALLROOM, HALLWAY_CONSERVATORY_BALLROOM),
    (BALLROOM, HALLWAY_BALLROOM_KITCHEN),
    (BALLROOM, HALLWAY_BALLROOM_BILLIARD),
    (KITCHEN, HALLWAY_BALLROOM_KITCHEN),
    (KITCHEN, HALLWAY_KITCHEN_DINING),
    (STUDY, HALLWAY_HALL_STUDY),
    (STUDY, HALLWAY_STUDY_LIBRARY),
];

pub static SECRET_PASSAGES: &[(RoomId, RoomId)] = &[
    (STUDY, KITCHEN),
    (CONSERVATORY, LOUNGE),
];

pub static CHARACTERS: [CharacterDef; 6] = [
    CharacterDef { id: MISS_SCARLETT,   name: "Miss Scarlett",   color: Color::Red,    starting_room: LOUNGE },
    CharacterDef { id: COLONEL_MUSTARD, name: "Colonel Mustard", color: Color::Yellow, starting_room: DINING_ROOM },
    CharacterDef { id: MRS_WHITE,       name: "Mrs. White",      color: Color::White,  starting_room: BALLROOM },
    CharacterDef { id: REVEREND_GREEN,  name: "Reverend Green",  color: Color::Green,  starting_room: CONSERVATORY },
    CharacterDef { id: MRS_PEACOCK,     name: "Mrs. Peacock",    color: Color::Blue,   starting_room: LIBRARY },
    CharacterDef { id: PROFESSOR_PLUM,  name: "Professor Plum",  color: Color::Purple, starting_room: STUDY },
];

pub static WEAPONS: [WeaponDef; 6] = [
    WeaponDef { id: CANDLESTICK, name: "Candlestick" },
    WeaponDef { id: DAGGER,      name: "Dagger" },
    WeaponDef { id: LEAD_PIPE,   name: "Lead Pipe" },
    WeaponDef { id: REVOLVER,    name: "Revolver" },
    WeaponDef { id: ROPE,        name: "Rope" },
    WeaponDef { id: WRENCH,      name: "Wrench" },
];

/// Room cards, in deck-building order.
pub static ROOM_CARDS: [RoomId; NUM_MAIN_ROOMS] = [
    KITCHEN, BALLROOM, CONSERVATORY, DINING_ROOM, BILLIARD_ROOM,
    LIBRARY, LOUNGE, HALL, STUDY,
];

pub fn room_name(id: RoomId) -> &'static str {
    ROOMS[id.0 as usize].name
}

pub fn character_name(id: CharacterId) -> &'static str {
    CHARACTERS[id.0 as usize].name
}

pub fn weapon_name(id: WeaponId) -> &'static str {
    WEAPONS[id.0 as usize].name
}

// ── Built graph ────────────────────────────────────────────────────────

/// A room node with its resolved edges.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: &'static str,
    pub category: RoomCategory,
    pub adjacent: Vec<RoomId>,
    pub secret_passage: Option<RoomId>,
}

impl Room {
    pub fn is_main(&self) -> bool { self.category == RoomCategory::Main }
}

/// The mansion graph. Edges are symmetric by construction.
#[derive(Debug, Clone)]
pub struct Layout {
    rooms: Vec<Room>,
    main_rooms: BTreeMap<&'static str, RoomId>,
}

impl Layout {
    pub fn build() -> Self {
        let mut rooms: Vec<Room> = ROOMS.iter()
            .map(|def| Room {
                id: def.id,
                name: def.name,
                category: def.category,
                adjacent: Vec::new(),
                secret_passage: None,
            })
            .collect();

        for &(a, b) in LINKS {
            connect(&mut rooms, a, b);
        }
        for &(a, b) in SECRET_PASSAGES {
            rooms[a.0 as usize].secret_passage = Some(b);
            rooms[b.0 as usize].secret_passage = Some(a);
        }

        let main_rooms = rooms.iter()
            .filter(|r| r.is_main())
            .map(|r| (r.name, r.id))
            .collect();

        Layout { rooms, main_rooms }
    }

    /// All rooms in id order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0 as usize]
    }

    /// Name-keyed lookup of main rooms only.
    pub fn main_rooms(&self) -> &BTreeMap<&'static str, RoomId> {
        &self.main_rooms
    }

    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        &self.room(id).adjacent
    }

    pub fn secret_passage(&self, id: RoomId) -> Option<RoomId> {
        self.room(id).secret_passage
    }
}

fn connect(rooms: &mut [Room], a: RoomId, b: RoomId) {
    if !rooms[a.0 as usize].adjacent.contains(&b) {
        rooms[a.0 as usize].adjacent.push(b);
    }
    if !rooms[b.0 as usize].adjacent.contains(&a) {
        rooms[b.0 as usize].adjacent.push(a);
    }
}
