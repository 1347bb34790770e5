// ═══════════════════════════════════════════════════════════════════════
// Clue cards — deck construction and dealing
// ═══════════════════════════════════════════════════════════════════════

use crate::layout::{character_name, room_name, weapon_name, CHARACTERS, ROOM_CARDS, WEAPONS};
use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;

impl Card {
    pub fn name(self) -> &'static str {
        match self {
            Card::Character(c) => character_name(c),
            Card::Weapon(w) => weapon_name(w),
            Card::Room(r) => room_name(r),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every card in the game, in roster order: characters, weapons, rooms.
pub fn full_deck() -> Vec<Card> {
    CHARACTERS.iter().map(|c| Card::Character(c.id))
        .chain(WEAPONS.iter().map(|w| Card::Weapon(w.id)))
        .chain(ROOM_CARDS.iter().map(|&r| Card::Room(r)))
        .collect()
}

/// The playable deck: the full deck minus the solution triple, shuffled once.
pub fn build_deck<R: Rng>(solution: &Solution, rng: &mut R) -> Vec<Card> {
    let mut deck: Vec<Card> = full_deck()
        .into_iter()
        .filter(|&card| !solution.contains(card))
        .collect();
    deck.shuffle(rng);
    deck
}

/// Deal in contiguous runs: every hand gets `len / n` cards and the first
/// `len % n` hands get one extra.
pub fn deal(deck: &[Card], player_count: usize) -> Vec<Vec<Card>> {
    if player_count == 0 {
        return Vec::new();
    }
    let per_player = deck.len() / player_count;
    let extra = deck.len() % player_count;

    let mut hands = Vec::with_capacity(player_count);
    let mut start = 0;
    for i in 0..player_count {
        let count = per_player + usize::from(i < extra);
        hands.push(deck[start..start + count].to_vec());
        start += count;
    }
    hands
}

/// Names of a hand, comma separated.
pub fn hand_names(cards: &[Card]) -> String {
    cards.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::*;

    #[test]
    fn test_full_deck_size() {
        assert_eq!(full_deck().len(), 21);
    }

    #[test]
    fn test_deal_remainder_goes_to_first_players() {
        let deck: Vec<Card> = full_deck().into_iter().take(18).collect();
        let sizes: Vec<usize> = deal(&deck, 4).iter().map(|h| h.len()).collect();
        assert_eq!(sizes, vec![5, 5, 4, 4]);
        let sizes: Vec<usize> = deal(&deck, 5).iter().map(|h| h.len()).collect();
        assert_eq!(sizes, vec![4, 4, 4, 3, 3]);
    }

    #[test]
    fn test_card_names() {
        assert_eq!(Card::Room(BILLIARD_ROOM).to_string(), "Billiard Room");
        assert_eq!(Card::Weapon(LEAD_PIPE).name(), "Lead Pipe");
        assert_eq!(hand_names(&[Card::Character(MRS_PEACOCK), Card::Weapon(ROPE)]), "Mrs. Peacock, Rope");
    }
}
