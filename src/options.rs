//! Game configuration options.

/// Deck replenishment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Replacements are drawn from the front of the deck.
    #[default]
    Normal,
    /// Replacements are biased toward keeping the hand connected.
    Easy,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use narabe::{GameMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_mode(GameMode::Easy)
///     .with_suit_bias(0.8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Replenishment mode.
    pub mode: GameMode,
    /// Probability that an assisted draw prefers the same-suit candidate
    /// group over the same-rank group. Only consulted in easy mode.
    pub suit_bias: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            mode: GameMode::Normal,
            suit_bias: 0.6,
        }
    }
}

impl GameOptions {
    /// Sets the replenishment mode.
    ///
    /// # Example
    ///
    /// ```
    /// use narabe::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_mode(GameMode::Easy);
    /// assert_eq!(options.mode, GameMode::Easy);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the same-suit preference probability for assisted draws.
    ///
    /// Note: This function does not validate the value. Probabilities outside
    /// 0.0..=1.0 cause easy-mode draws to panic.
    ///
    /// # Example
    ///
    /// ```
    /// use narabe::GameOptions;
    ///
    /// let options = GameOptions::default().with_suit_bias(1.0);
    /// assert_eq!(options.suit_bias, 1.0);
    /// ```
    #[must_use]
    pub const fn with_suit_bias(mut self, bias: f64) -> Self {
        self.suit_bias = bias;
        self
    }
}
