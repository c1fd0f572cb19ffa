//! Card types and deck utilities.

use core::cmp::Ordering;
use core::fmt;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Card suit.
///
/// The declaration order is the grouping order used when hands are sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in enumeration order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// Card rank, ordered from six (lowest) to ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Six.
    #[serde(rename = "6")]
    Six,
    /// Seven.
    #[serde(rename = "7")]
    Seven,
    /// Eight.
    #[serde(rename = "8")]
    Eight,
    /// Nine.
    #[serde(rename = "9")]
    Nine,
    /// Ten.
    #[serde(rename = "10")]
    Ten,
    /// Jack.
    #[serde(rename = "J")]
    Jack,
    /// Queen.
    #[serde(rename = "Q")]
    Queen,
    /// King.
    #[serde(rename = "K")]
    King,
    /// Ace.
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// All ranks from lowest to highest.
    pub const ALL: [Self; 9] = [
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Presentation order for a given trump suit: non-trump cards first grouped
    /// by suit, trump cards last, ascending rank inside each group.
    ///
    /// The bot uses the same order to pick its "lowest" card.
    #[must_use]
    pub fn cmp_with_trump(&self, other: &Self, trump: Suit) -> Ordering {
        let key = |card: &Self| (card.suit == trump, card.suit, card.rank);
        key(self).cmp(&key(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 36;

/// Builds the 36-card deck in suit-major, rank-ascending order.
///
/// ```
/// use durak::card::{build_deck, DECK_SIZE};
///
/// assert_eq!(build_deck().len(), DECK_SIZE);
/// ```
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Returns a uniformly shuffled copy of `cards`, leaving the input untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
