use narabe::{Card, Game, GameMode, GameOptions, GameState, Snapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, easy: bool) -> Self {
        Self {
            game: Game::new(options_for(easy), seed as u64),
        }
    }

    /// Starts a fresh game with a new shuffle (the retry action).
    pub fn reset(&self) {
        self.game.reset();
    }

    /// Switches between normal and easy mode. Resets the game.
    pub fn set_easy(&self, easy: bool) {
        let mode = if easy { GameMode::Easy } else { GameMode::Normal };
        self.game.set_mode(mode);
    }

    /// Plays a card by id. Returns whether the play took effect; requests
    /// that cannot take effect leave the game unchanged.
    pub fn play_card(&self, card_id: u8) -> bool {
        self.game.play_card(card_id).is_played()
    }

    pub fn playable_ids(&self) -> Vec<u8> {
        self.game.playable_ids()
    }

    pub fn played_count(&self) -> u32 {
        u32::from(self.game.played_count())
    }

    pub fn is_over(&self) -> bool {
        self.game.state().is_terminal()
    }

    /// Serializes the full game view for the rendering layer.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = SnapshotView::from(self.game.snapshot());
        serde_wasm_bindgen::to_value(&view).map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

#[derive(Serialize)]
struct CardView {
    id: u8,
    suit: char,
    rank: u8,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            suit: card.suit.symbol(),
            rank: card.rank,
        }
    }
}

#[derive(Serialize)]
struct SnapshotView {
    state: &'static str,
    easy: bool,
    hand: Vec<CardView>,
    playable: Vec<u8>,
    pile_top: Option<CardView>,
    played: Vec<CardView>,
    played_count: u8,
    cards_remaining: u32,
}

impl From<Snapshot> for SnapshotView {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            state: match snapshot.state {
                GameState::Playing => "playing",
                GameState::Won => "won",
                GameState::Lost => "lost",
            },
            easy: snapshot.mode == GameMode::Easy,
            hand: snapshot.hand.into_iter().map(CardView::from).collect(),
            playable: snapshot.playable,
            pile_top: snapshot.pile_top.map(CardView::from),
            played: snapshot.played.into_iter().map(CardView::from).collect(),
            played_count: snapshot.played_count,
            cards_remaining: snapshot.cards_remaining as u32,
        }
    }
}

fn options_for(easy: bool) -> GameOptions {
    let mode = if easy { GameMode::Easy } else { GameMode::Normal };
    GameOptions::default().with_mode(mode)
}
