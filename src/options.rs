//! Game configuration options.

use serde::{Deserialize, Serialize};

/// Configuration options for a Durak game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use durak::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(6)
///     .with_max_bot_steps(32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Number of cards each hand is refilled to.
    ///
    /// A game clamps this to `1..=18`: half the deck at most, so the initial
    /// deal always completes.
    pub hand_size: usize,
    /// Upper bound on consecutive bot actions applied by a [`Session`](crate::Session)
    /// before control returns to the caller.
    pub max_bot_steps: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 6,
            max_bot_steps: 64,
        }
    }
}

impl GameOptions {
    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(4);
    /// assert_eq!(options.hand_size, 4);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets the bot step cap.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bot_steps(10);
    /// assert_eq!(options.max_bot_steps, 10);
    /// ```
    #[must_use]
    pub const fn with_max_bot_steps(mut self, steps: usize) -> Self {
        self.max_bot_steps = steps;
        self
    }
}
