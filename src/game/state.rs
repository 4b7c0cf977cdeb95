//! Game state types.

use crate::card::Card;

/// Game state.
///
/// Terminal states are sticky: once the game is `Won` or `Lost`, play
/// requests are ignored until an explicit [`reset`](crate::Game::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The hand is dealt and plays are accepted.
    Playing,
    /// All 52 cards have been played.
    Won,
    /// No held card connects with the pile top.
    Lost,
}

impl GameState {
    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was played.
    Played {
        /// The replacement drawn into the vacated slot, if the deck still
        /// held cards.
        drawn: Option<Card>,
    },
    /// The request changed nothing: the id was not in the hand, the card was
    /// not playable, or the game is already over.
    Ignored,
}

impl PlayOutcome {
    /// Returns whether the request took effect.
    #[must_use]
    pub const fn is_played(self) -> bool {
        matches!(self, Self::Played { .. })
    }
}
