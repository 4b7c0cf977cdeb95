//! Game engine and state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::sync::Mutex;

use crate::card::{Card, CardId, DECK_SIZE, HAND_SIZE, Suit};
use crate::error::DeckError;
use crate::hand::{Hand, PlayedPile, playable_ids};
use crate::options::{GameMode, GameOptions};
use crate::snapshot::Snapshot;

mod assist;
pub mod state;
mod turn;

pub use state::{GameState, PlayOutcome};

/// A speed-solitaire game engine that manages the deck, hand, and played pile.
///
/// The game owns all round state behind a mutex-confined single owner, so a
/// rendering layer can hold shared references and every turn stays atomic
/// with respect to readers. Use [`GameOptions`] to configure the
/// replenishment mode.
#[derive(Debug)]
pub struct Game {
    /// Cards remaining in the draw deck, consumed from the front.
    pub deck: Mutex<Vec<Card>>,
    /// Game options.
    pub options: Mutex<GameOptions>,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The player's hand.
    pub hand: Mutex<Hand>,
    /// Cards played so far.
    pub pile: Mutex<PlayedPile>,
    /// Number of cards played.
    played: AtomicU8,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed, shuffling and dealing a
    /// 5-card hand.
    ///
    /// # Example
    ///
    /// ```
    /// use narabe::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::Playing);
    /// assert_eq!(game.hand_cards().len(), 5);
    /// assert_eq!(game.cards_remaining(), 47);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::create_deck(&mut rng);
        let hand: Vec<Card> = deck.drain(..HAND_SIZE).collect();

        Self {
            deck: Mutex::new(deck),
            options: Mutex::new(options),
            state: Mutex::new(GameState::Playing),
            hand: Mutex::new(Hand::deal(hand)),
            pile: Mutex::new(PlayedPile::new()),
            played: AtomicU8::new(0),
            rng: Mutex::new(rng),
        }
    }

    /// Creates a game from a caller-supplied deck in draw order.
    ///
    /// The first five cards become the hand, the remainder the deck; no
    /// shuffle is applied. The seed only drives easy-mode draws. Intended for
    /// deterministic replays and tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck does not hold exactly 52 cards with
    /// unique ids covering every suit and rank once.
    pub fn with_stacked_deck(
        options: GameOptions,
        seed: u64,
        mut deck: Vec<Card>,
    ) -> Result<Self, DeckError> {
        validate_deck(&deck)?;
        let hand: Vec<Card> = deck.drain(..HAND_SIZE).collect();

        Ok(Self {
            deck: Mutex::new(deck),
            options: Mutex::new(options),
            state: Mutex::new(GameState::Playing),
            hand: Mutex::new(Hand::deal(hand)),
            pile: Mutex::new(PlayedPile::new()),
            played: AtomicU8::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        })
    }

    /// Builds and shuffles a full 52-card deck.
    ///
    /// Ids are assigned 1..=52 before the shuffle, so every deck covers each
    /// (suit, rank) pair exactly once regardless of the random source.
    fn create_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        let mut id: CardId = 1;

        for suit in Suit::ALL {
            for rank in 1..=13 {
                deck.push(Card::new(id, suit, rank));
                id += 1;
            }
        }

        deck.shuffle(rng);
        deck
    }

    /// Restarts the game: fresh shuffle, fresh deal, counters cleared.
    ///
    /// The engine's own RNG drives the new shuffle, so a seeded game remains
    /// reproducible across retries.
    pub fn reset(&self) {
        let mut rng = self.rng.lock();
        let mut deck = Self::create_deck(&mut rng);
        drop(rng);
        let hand: Vec<Card> = deck.drain(..HAND_SIZE).collect();

        *self.state.lock() = GameState::Playing;
        *self.hand.lock() = Hand::deal(hand);
        self.pile.lock().clear();
        *self.deck.lock() = deck;
        self.played.store(0, Ordering::SeqCst);
    }

    /// Switches the replenishment mode and restarts the game.
    pub fn set_mode(&self, mode: GameMode) {
        self.options.lock().mode = mode;
        self.reset();
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the current options.
    pub fn options(&self) -> GameOptions {
        self.options.lock().clone()
    }

    /// Returns the number of cards played so far.
    pub fn played_count(&self) -> u8 {
        self.played.load(Ordering::SeqCst)
    }

    /// Returns the number of cards left in the draw deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the hand cards in slot order.
    pub fn hand_cards(&self) -> Vec<Card> {
        self.hand.lock().cards().to_vec()
    }

    /// Returns every played card in play order.
    pub fn played_cards(&self) -> Vec<Card> {
        self.pile.lock().cards().to_vec()
    }

    /// Returns the most recently played card.
    pub fn pile_top(&self) -> Option<Card> {
        self.pile.lock().top()
    }

    /// Returns the ids of the currently playable hand cards, in slot order.
    ///
    /// With nothing played yet, every hand card is playable.
    pub fn playable_ids(&self) -> Vec<CardId> {
        let hand = self.hand.lock();
        let pile = self.pile.lock();
        playable_ids(&hand, &pile)
    }

    /// Takes a consistent snapshot of the whole game for a rendering layer.
    pub fn snapshot(&self) -> Snapshot {
        let state = *self.state.lock();
        let hand = self.hand.lock();
        let pile = self.pile.lock();

        Snapshot {
            state,
            mode: self.options.lock().mode,
            hand: hand.cards().to_vec(),
            playable: playable_ids(&hand, &pile),
            pile_top: pile.top(),
            played: pile.cards().to_vec(),
            played_count: self.played.load(Ordering::SeqCst),
            cards_remaining: self.deck.lock().len(),
        }
    }

    /// Records one played card on the counter, returning the new total.
    fn record_play(&self) -> u8 {
        self.played.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Checks that a caller-supplied deck is a complete, duplicate-free 52.
fn validate_deck(deck: &[Card]) -> Result<(), DeckError> {
    if deck.len() != DECK_SIZE {
        return Err(DeckError::WrongSize(deck.len()));
    }

    let mut ids = HashSet::with_capacity(DECK_SIZE);
    for card in deck {
        if !ids.insert(card.id) {
            return Err(DeckError::DuplicateId(card.id));
        }
    }

    let pairs: HashSet<(Suit, u8)> = deck.iter().map(|card| (card.suit, card.rank)).collect();
    if pairs.len() != DECK_SIZE {
        return Err(DeckError::IncompleteCover);
    }

    Ok(())
}
