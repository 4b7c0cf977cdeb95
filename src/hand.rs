//! Hand and played-pile representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId};

/// The player's hand, indexed by slot position.
///
/// Slot identity persists across replacement: when a card is played while the
/// deck is non-empty, the drawn card takes the vacated slot rather than being
/// appended at the end, so position-based input mappings stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards by slot.
    slots: Vec<Card>,
}

impl Hand {
    /// Creates a hand from dealt cards, slot order following deal order.
    #[must_use]
    pub const fn deal(cards: Vec<Card>) -> Self {
        Self { slots: cards }
    }

    /// Returns the cards in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.slots
    }

    /// Returns the slot currently holding the identified card.
    #[must_use]
    pub fn slot_of(&self, id: CardId) -> Option<usize> {
        self.slots.iter().position(|card| card.id == id)
    }

    /// Returns whether the identified card is held.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.slot_of(id).is_some()
    }

    /// Replaces the card at `slot`, returning the card it held.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn replace_at(&mut self, slot: usize, card: Card) -> Card {
        core::mem::replace(&mut self.slots[slot], card)
    }

    /// Removes and returns the card at `slot`, shrinking the hand.
    ///
    /// Slots above `slot` shift down by one.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn remove_at(&mut self, slot: usize) -> Card {
        self.slots.remove(slot)
    }

    /// Returns whether any card outside `skip_slot` connects with `card`.
    #[must_use]
    pub fn connects_besides(&self, skip_slot: usize, card: Card) -> bool {
        self.slots
            .iter()
            .enumerate()
            .any(|(slot, held)| slot != skip_slot && held.matches(card))
    }

    /// Returns whether any card outside `skip_slot` has the given rank.
    #[must_use]
    pub fn holds_rank_besides(&self, skip_slot: usize, rank: u8) -> bool {
        self.slots
            .iter()
            .enumerate()
            .any(|(slot, held)| slot != skip_slot && held.rank == rank)
    }

    /// Returns the number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Cards already played, in play order.
///
/// Only the top card matters for match-checking; the full history is kept so
/// rendering layers can show which cards are out of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayedPile {
    /// Cards in play order.
    cards: Vec<Card>,
}

impl PlayedPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the most recently played card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns all played cards in play order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of played cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether nothing has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the pile for a fresh game.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Ids of hand cards that may be played against the pile, in slot order.
///
/// With an empty pile every hand card is playable; otherwise a card is
/// playable iff it shares suit or rank with the pile top.
pub(crate) fn playable_ids(hand: &Hand, pile: &PlayedPile) -> Vec<CardId> {
    match pile.top() {
        None => hand.cards().iter().map(|card| card.id).collect(),
        Some(top) => hand
            .cards()
            .iter()
            .filter(|card| card.matches(top))
            .map(|card| card.id)
            .collect(),
    }
}
