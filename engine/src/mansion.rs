// ═══════════════════════════════════════════════════════════════════════
// Mansion — the board: layout graph, token positions, hidden solution.
// Answers lookup and movement queries and relocates tokens for
// suggestions. Knows nothing about players or turns.
// ═══════════════════════════════════════════════════════════════════════

use crate::layout::*;
use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Tokens currently standing in a room.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomContents {
    pub characters: Vec<CharacterId>,
    pub weapons: Vec<WeaponId>,
}

/// What a suggestion actually moved. Tokens already in the room stay put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    pub character_moved: bool,
    pub weapon_moved: bool,
}

#[derive(Debug, Clone)]
pub struct Mansion {
    layout: Layout,
    solution: Solution,
    /// Indexed by CharacterId.
    character_rooms: Vec<RoomId>,
    /// Indexed by WeaponId. None until placed.
    weapon_rooms: Vec<Option<RoomId>>,
    /// Indexed by RoomId.
    contents: Vec<RoomContents>,
}

impl Mansion {
    /// Build the layout, draw the solution, then deal weapons into six
    /// distinct main rooms. Characters stand in their starting rooms.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let layout = Layout::build();

        // Each part is drawn independently from its full roster.
        let solution = Solution {
            character: CharacterId(rng.gen_range(0..CHARACTERS.len()) as u8),
            weapon: WeaponId(rng.gen_range(0..WEAPONS.len()) as u8),
            room: ROOM_CARDS[rng.gen_range(0..ROOM_CARDS.len())],
        };
        trace!(?solution, "solution drawn");

        let mut contents = vec![RoomContents::default(); NUM_ROOMS];
        let character_rooms: Vec<RoomId> = CHARACTERS.iter()
            .map(|c| {
                contents[c.starting_room.0 as usize].characters.push(c.id);
                c.starting_room
            })
            .collect();

        let mut mansion = Mansion {
            layout,
            solution,
            character_rooms,
            weapon_rooms: vec![None; WEAPONS.len()],
            contents,
        };
        mansion.place_weapons(rng);
        mansion
    }

    fn place_weapons<R: Rng>(&mut self, rng: &mut R) {
        let mut main_rooms = ROOM_CARDS.to_vec();
        main_rooms.shuffle(rng);
        // Drawn without replacement: six rooms get one weapon, three get none.
        for (weapon, &room) in WEAPONS.iter().zip(main_rooms.iter()) {
            self.move_weapon(weapon.id, room);
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn solution(&self) -> Solution {
        self.solution
    }

    pub fn room(&self, id: RoomId) -> &Room {
        self.layout.room(id)
    }

    pub fn contents(&self, room: RoomId) -> &RoomContents {
        &self.contents[room.0 as usize]
    }

    pub fn character_room(&self, character: CharacterId) -> RoomId {
        self.character_rooms[character.0 as usize]
    }

    pub fn weapon_room(&self, weapon: WeaponId) -> Option<RoomId> {
        self.weapon_rooms[weapon.0 as usize]
    }

    pub fn weapon_locations(&self) -> Vec<(WeaponId, Option<RoomId>)> {
        WEAPONS.iter().map(|w| (w.id, self.weapon_room(w.id))).collect()
    }

    // ── Lookups (exact, case-insensitive) ──────────────────────────────

    pub fn room_by_name(&self, name: &str) -> Option<RoomId> {
        self.layout.rooms().iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .map(|r| r.id)
    }

    pub fn character_by_name(&self, name: &str) -> Option<CharacterId> {
        CHARACTERS.iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.id)
    }

    pub fn weapon_by_name(&self, name: &str) -> Option<WeaponId> {
        WEAPONS.iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
            .map(|w| w.id)
    }

    // ── Movement rules ─────────────────────────────────────────────────

    /// A move is legal along a graph edge or through the secret passage.
    pub fn is_valid_move(&self, from: RoomId, to: RoomId) -> bool {
        self.layout.neighbors(from).contains(&to)
            || self.layout.secret_passage(from) == Some(to)
    }

    /// Rooms reachable in one step, passage last. Display only.
    pub fn next_moves(&self, room: RoomId) -> Vec<RoomId> {
        let mut moves = self.layout.neighbors(room).to_vec();
        if let Some(passage) = self.layout.secret_passage(room) {
            moves.push(passage);
        }
        moves
    }

    pub fn is_main_room(&self, room: RoomId) -> bool {
        self.room(room).is_main()
    }

    // ── Suggestions ────────────────────────────────────────────────────

    /// Teleport both tokens into `room`, ignoring adjacency.
    pub fn resolve_suggestion(
        &mut self,
        character: CharacterId,
        weapon: WeaponId,
        room: RoomId,
    ) -> Relocation {
        let character_moved = self.character_room(character) != room;
        if character_moved {
            self.move_character(character, room);
        }
        let weapon_moved = self.weapon_room(weapon) != Some(room);
        if weapon_moved {
            self.move_weapon(weapon, room);
        }
        Relocation { character_moved, weapon_moved }
    }

    fn move_character(&mut self, character: CharacterId, to: RoomId) {
        let from = self.character_room(character);
        self.contents[from.0 as usize].characters.retain(|&c| c != character);
        let roster = &mut self.contents[to.0 as usize].characters;
        if !roster.contains(&character) {
            roster.push(character);
        }
        self.character_rooms[character.0 as usize] = to;
        debug!(character = character_name(character), from = room_name(from), to = room_name(to), "character relocated");
    }

    fn move_weapon(&mut self, weapon: WeaponId, to: RoomId) {
        if let Some(from) = self.weapon_room(weapon) {
            self.contents[from.0 as usize].weapons.retain(|&w| w != weapon);
        }
        let roster = &mut self.contents[to.0 as usize].weapons;
        if !roster.contains(&weapon) {
            roster.push(weapon);
        }
        self.weapon_rooms[weapon.0 as usize] = Some(to);
        debug!(weapon = weapon_name(weapon), to = room_name(to), "weapon placed");
    }

    // ── Formatting ─────────────────────────────────────────────────────

    pub fn display_room_info(&self, id: RoomId) -> String {
        let room = self.room(id);
        let contents = self.contents(id);
        let characters = join_or_none(contents.characters.iter().map(|&c| character_name(c)));
        let weapons = join_or_none(contents.weapons.iter().map(|&w| weapon_name(w)));

        let mut info = format!("\n=== {} ===\n", room.name);
        info.push_str(&format!("Characters: {}\n", characters));
        info.push_str(&format!("Weapons: {}\n", weapons));
        info.push_str(&format!("Room Type: {}\n", room.category));

        if !room.adjacent.is_empty() {
            let names: Vec<&str> = room.adjacent.iter().map(|&r| room_name(r)).collect();
            info.push_str(&format!("Connected to: {}\n", names.join(", ")));
        }
        if let Some(passage) = room.secret_passage {
            info.push_str(&format!("Secret passage to: {}\n", room_name(passage)));
        }
        info
    }

    /// Schematic of the nine main rooms. Every `-` or `|` is one hallway.
    pub fn simple_map(&self, current: RoomId) -> String {
        let position = format!("Current Position: {}", room_name(current));
        let lines = [
            "      [Study] ------- [Hall] ------- [Lounge]",
            "         |              |               |",
            "     [Library] --- [Billiard Room] --- [Dining Room]",
            "         |              |               |",
            "  [Conservatory] --- [Ballroom] ----- [Kitchen]",
            "",
            &position,
            "Secret Passages: Study <-> Kitchen, Conservatory <-> Lounge",
        ];
        lines.join("\n")
    }
}

fn join_or_none<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}
