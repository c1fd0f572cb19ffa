//! Phase and table types.

use serde::{Deserialize, Serialize};

use crate::card::Card;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Attacker may open or extend the attack; defender waits.
    Attack,
    /// Defender must answer at least one open attack.
    Defend,
    /// Defender has declared `take`; attacker may throw in more cards.
    Throw,
    /// Terminal. No further actions are accepted.
    Finished,
}

/// One attack on the table, possibly covered by a defending card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableSlot {
    /// The attacking card.
    pub attack: Card,
    /// The card that beat it, if any.
    pub defense: Option<Card>,
}

impl TableSlot {
    /// Creates an open slot.
    #[must_use]
    pub const fn new(attack: Card) -> Self {
        Self {
            attack,
            defense: None,
        }
    }

    /// Returns whether the slot still waits for a defending card.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.defense.is_none()
    }

    /// Returns the attack card and, if present, the defending card.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        core::iter::once(self.attack).chain(self.defense)
    }
}
