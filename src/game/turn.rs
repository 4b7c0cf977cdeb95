use crate::card::{CardId, DECK_SIZE};
use crate::hand::playable_ids;
use crate::options::GameMode;

use super::{Game, GameState, PlayOutcome};

impl Game {
    /// Plays the identified card from the hand.
    ///
    /// A successful play moves the card to the pile, draws a replacement into
    /// the vacated slot while the deck lasts (front of deck, or an assisted
    /// pick in easy mode when the remaining hand no longer connects with the
    /// played card), and re-evaluates the win/loss state.
    ///
    /// Requests that cannot take effect are silently ignored rather than
    /// reported: an id not in the hand, a card that does not connect with the
    /// pile top, or a game that is already over all return
    /// [`PlayOutcome::Ignored`] and leave the game untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use narabe::{Game, GameOptions, PlayOutcome};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// let first = game.hand_cards()[0];
    /// assert!(game.play_card(first.id).is_played());
    /// assert_eq!(game.played_count(), 1);
    /// // The same id cannot be played twice.
    /// assert_eq!(game.play_card(first.id), PlayOutcome::Ignored);
    /// ```
    pub fn play_card(&self, card_id: CardId) -> PlayOutcome {
        if self.state().is_terminal() {
            return PlayOutcome::Ignored;
        }

        let (mode, suit_bias) = {
            let options = self.options.lock();
            (options.mode, options.suit_bias)
        };

        let mut hand = self.hand.lock();
        let mut pile = self.pile.lock();

        let Some(slot) = hand.slot_of(card_id) else {
            return PlayOutcome::Ignored;
        };
        let card = hand.cards()[slot];

        if let Some(top) = pile.top() {
            if !card.matches(top) {
                return PlayOutcome::Ignored;
            }
        }

        let mut deck = self.deck.lock();

        let drawn = if deck.is_empty() {
            hand.remove_at(slot);
            None
        } else {
            let replacement = if mode == GameMode::Easy && !hand.connects_besides(slot, card) {
                let mut rng = self.rng.lock();
                Self::assisted_draw(&mut deck, &hand, slot, card, suit_bias, &mut rng)
            } else {
                deck.remove(0)
            };
            hand.replace_at(slot, replacement);
            Some(replacement)
        };

        pile.push(card);
        let played = self.record_play();

        debug_assert_eq!(usize::from(played), pile.len());
        debug_assert_eq!(hand.len() + deck.len() + pile.len(), DECK_SIZE);

        // The evaluator observes the fully-updated turn.
        let terminal = if usize::from(played) == DECK_SIZE {
            Some(GameState::Won)
        } else if !hand.is_empty() && playable_ids(&hand, &pile).is_empty() {
            Some(GameState::Lost)
        } else {
            None
        };

        drop(deck);
        drop(pile);
        drop(hand);

        if let Some(outcome) = terminal {
            *self.state.lock() = outcome;
        }

        PlayOutcome::Played { drawn }
    }
}
