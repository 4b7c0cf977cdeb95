//! Read-only game views for rendering layers.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::game::GameState;
use crate::options::GameMode;

/// A consistent view of the whole game, taken under the engine's locks.
///
/// Rendering layers consume snapshots and feed back card ids via
/// [`play_card`](crate::Game::play_card); nothing in a snapshot can mutate
/// the game.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Current game state.
    pub state: GameState,
    /// Current replenishment mode.
    pub mode: GameMode,
    /// Hand cards in slot order.
    pub hand: Vec<Card>,
    /// Ids of the currently playable hand cards, in slot order.
    pub playable: Vec<CardId>,
    /// The most recently played card.
    pub pile_top: Option<Card>,
    /// Every played card in play order, for the remaining-cards display.
    pub played: Vec<Card>,
    /// Number of cards played so far.
    pub played_count: u8,
    /// Number of cards left in the draw deck.
    pub cards_remaining: usize,
}
