//! Legality queries. None of these mutate the state.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::card::{Card, Rank};

use super::{GameState, Phase};

impl GameState {
    /// Returns whether `card` belongs to the trump suit.
    #[must_use]
    pub fn is_trump(&self, card: Card) -> bool {
        card.suit == self.trump_suit
    }

    /// Returns whether `candidate` beats `attack`.
    ///
    /// A higher card of the same suit beats, and any trump beats a non-trump.
    #[must_use]
    pub fn beats(&self, attack: Card, candidate: Card) -> bool {
        if candidate.suit == attack.suit {
            return candidate.rank > attack.rank;
        }
        self.is_trump(candidate) && !self.is_trump(attack)
    }

    /// Returns every rank on the table, attack and defence cards alike.
    #[must_use]
    pub fn ranks_in_play(&self) -> BTreeSet<Rank> {
        self.table
            .iter()
            .flat_map(|slot| slot.cards())
            .map(|card| card.rank)
            .collect()
    }

    /// Returns the cards `seat` may attack with right now.
    ///
    /// On an empty table the whole hand is legal. Afterwards only ranks
    /// already on the table may be thrown in.
    #[must_use]
    pub fn legal_attacks(&self, seat: usize) -> Vec<Card> {
        if !matches!(self.phase, Phase::Attack | Phase::Throw) || seat != self.attacker {
            return Vec::new();
        }

        let hand = &self.players[seat].hand;
        if self.table.is_empty() {
            return hand.cards().to_vec();
        }

        let ranks = self.ranks_in_play();
        hand.iter()
            .copied()
            .filter(|card| ranks.contains(&card.rank))
            .collect()
    }

    /// Returns whether another attack may be placed on the table.
    ///
    /// The table may never hold more slots than the defender has cards, and
    /// once the table is non-empty the attacker needs a matching rank.
    #[must_use]
    pub fn can_add_attack(&self) -> bool {
        if self.table.len() >= self.players[self.defender].hand.len() {
            return false;
        }
        if self.table.is_empty() {
            return true;
        }

        let ranks = self.ranks_in_play();
        self.players[self.attacker]
            .hand
            .iter()
            .any(|card| ranks.contains(&card.rank))
    }

    /// Returns the cards `seat` may use to beat the attack in slot `attack_index`.
    #[must_use]
    pub fn legal_defenses(&self, seat: usize, attack_index: usize) -> Vec<Card> {
        if self.phase != Phase::Defend || seat != self.defender {
            return Vec::new();
        }
        let Some(slot) = self.table.get(attack_index).filter(|slot| slot.is_open()) else {
            return Vec::new();
        };

        self.players[seat]
            .hand
            .iter()
            .copied()
            .filter(|&card| self.beats(slot.attack, card))
            .collect()
    }
}
