//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Suit, build_deck, shuffle};
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::GameResult;

mod actions;
pub mod rules;
pub mod state;

pub use actions::{Action, apply_action};
pub use state::{Phase, TableSlot};

/// Who controls a seat. Informational only; the rules treat both alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// A person at the table.
    Human,
    /// An automated player driven by a [`BotStrategy`](crate::BotStrategy).
    Bot,
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable, externally assigned id.
    pub id: String,
    /// Name shown to viewers.
    pub display_name: String,
    /// Who controls this seat.
    pub kind: PlayerKind,
    /// Cards held.
    pub hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind,
            hand: Hand::new(),
        }
    }
}

/// Complete state of one game.
///
/// The state is plain data: it can be cloned, compared, and serialized
/// verbatim to observers. It changes only through [`GameState::apply`],
/// [`GameState::surrender`], or the dealing done at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Draw pile. The last element is drawn next.
    pub deck: Vec<Card>,
    /// Trump suit for the whole game.
    pub trump_suit: Suit,
    /// Bottom card of the initial shuffled deck, which fixed the trump suit.
    pub trump_card: Card,
    /// The two seats.
    pub players: [Player; 2],
    /// Seat index of the attacker.
    pub attacker: usize,
    /// Seat index of the defender.
    pub defender: usize,
    /// Attacks in the order they were played.
    pub table: Vec<TableSlot>,
    /// Cards retired after successful defences.
    pub discard: Vec<Card>,
    /// Current phase.
    pub phase: Phase,
    /// Winner id once finished; `None` in a finished game means a draw.
    pub winner_id: Option<String>,
    /// Narration of the most recent transition.
    pub message: String,
    /// Number of cards each hand is refilled to.
    pub hand_size: usize,
}

impl GameState {
    /// Starts a new game between `human` (seat 0) and `bot` (seat 1).
    ///
    /// The deck is shuffled with `rng`, its last card fixes the trump suit, and
    /// both hands are dealt. Seat 0 attacks first. Any cards already in the
    /// given players' hands are dropped.
    ///
    /// The hand size is clamped to `1..=DECK_SIZE / 2`, so both opening hands
    /// hold at least one card and the initial deal never runs short.
    ///
    /// # Panics
    ///
    /// Panics if both players share the same id, since actions are routed to a
    /// seat by id.
    pub fn new<R: Rng + ?Sized>(
        mut human: Player,
        mut bot: Player,
        options: &GameOptions,
        rng: &mut R,
    ) -> Self {
        assert_ne!(human.id, bot.id, "players need distinct ids");
        human.hand = Hand::new();
        bot.hand = Hand::new();

        let deck = shuffle(&build_deck(), rng);
        let Some(&trump_card) = deck.last() else {
            unreachable!("a freshly built deck is never empty");
        };

        let mut state = Self {
            deck,
            trump_suit: trump_card.suit,
            trump_card,
            players: [human, bot],
            attacker: 0,
            defender: 1,
            table: Vec::new(),
            discard: Vec::new(),
            phase: Phase::Attack,
            winner_id: None,
            message: String::new(),
            hand_size: options.hand_size.clamp(1, DECK_SIZE / 2),
        };
        state.deal_up_to();
        state.message = format!(
            "Trump is {}. {} attacks first",
            state.trump_card, state.players[state.attacker].display_name
        );
        debug!(trump = %state.trump_card, "game initialized");
        state
    }

    /// Refills hands to the hand size, attacker first, then sorts both hands
    /// for display.
    pub fn deal_up_to(&mut self) {
        for seat in [self.attacker, self.defender] {
            while self.players[seat].hand.len() < self.hand_size {
                let Some(card) = self.deck.pop() else {
                    break;
                };
                self.players[seat].hand.add_card(card);
            }
        }

        let trump = self.trump_suit;
        for player in &mut self.players {
            player.hand.sort(trump);
        }
        trace!(deck = self.deck.len(), "hands refilled");
    }

    /// Ends the game once the deck is empty and at least one hand is empty.
    ///
    /// The player without cards wins; two empty hands make a draw. Returns
    /// whether the game is finished.
    pub fn check_finished(&mut self) -> bool {
        if self.phase == Phase::Finished {
            return true;
        }
        if !self.deck.is_empty() {
            return false;
        }

        let empty = [
            self.players[0].hand.is_empty(),
            self.players[1].hand.is_empty(),
        ];
        match empty {
            [true, true] => {
                self.winner_id = None;
                self.message = String::from("Draw: both players ran out of cards");
            }
            [true, false] | [false, true] => {
                let winner = usize::from(empty[1]);
                let loser = Self::opponent(winner);
                self.winner_id = Some(self.players[winner].id.clone());
                self.message = format!(
                    "{} wins. {} is the fool",
                    self.players[winner].display_name, self.players[loser].display_name
                );
            }
            [false, false] => return false,
        }

        self.phase = Phase::Finished;
        debug!(winner = ?self.winner_id, "game finished");
        true
    }

    /// Ends the game immediately with `player_id` conceding to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already finished or the player is not
    /// seated in it.
    pub fn surrender(&mut self, player_id: &str) -> Result<(), ActionError> {
        if self.phase == Phase::Finished {
            return Err(ActionError::GameFinished);
        }
        let seat = self.seat_of(player_id).ok_or(ActionError::UnknownPlayer)?;
        let winner = Self::opponent(seat);

        self.phase = Phase::Finished;
        self.winner_id = Some(self.players[winner].id.clone());
        self.message = format!(
            "{} surrenders. {} wins",
            self.players[seat].display_name, self.players[winner].display_name
        );
        Ok(())
    }

    /// Returns the final result, or `None` while the game is running.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != Phase::Finished {
            return None;
        }
        Some(match &self.winner_id {
            Some(id) => GameResult::Winner { id: id.clone() },
            None => GameResult::Draw,
        })
    }

    /// Returns whether the game is over.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Returns the seat index of the player with the given id.
    #[must_use]
    pub fn seat_of(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    /// Returns the first seat controlled by a bot.
    #[must_use]
    pub fn bot_seat(&self) -> Option<usize> {
        self.players.iter().position(|p| p.kind == PlayerKind::Bot)
    }

    /// Returns the other seat index.
    #[must_use]
    pub const fn opponent(seat: usize) -> usize {
        1 - seat
    }

    /// Returns the attacking player.
    #[must_use]
    pub fn attacker_player(&self) -> &Player {
        &self.players[self.attacker]
    }

    /// Returns the defending player.
    #[must_use]
    pub fn defender_player(&self) -> &Player {
        &self.players[self.defender]
    }

    /// Returns every card the game still accounts for: deck, hands, table and
    /// discard pile.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = self.deck.clone();
        for player in &self.players {
            cards.extend(player.hand.iter().copied());
        }
        for slot in &self.table {
            cards.extend(slot.cards());
        }
        cards.extend(self.discard.iter().copied());
        cards
    }
}

/// Starts a game between `human_id` and `bot_id` with default options and a
/// deterministic shuffle derived from `seed`. The two ids must differ.
///
/// # Example
///
/// ```
/// use durak::{Phase, initialize_game};
///
/// let state = initialize_game("p1", "bot", 42);
/// assert_eq!(state.deck.len(), 24);
/// assert_eq!(state.phase, Phase::Attack);
/// ```
#[must_use]
pub fn initialize_game(human_id: &str, bot_id: &str, seed: u64) -> GameState {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    GameState::new(
        Player::new(human_id, human_id, PlayerKind::Human),
        Player::new(bot_id, bot_id, PlayerKind::Bot),
        &GameOptions::default(),
        &mut rng,
    )
}
