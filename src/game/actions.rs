use alloc::format;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::ActionOutcome;

use super::{GameState, Phase, TableSlot};

/// A move submitted by a player.
///
/// Serialized with an internal `"type"` tag, e.g.
/// `{"type":"defend","attackIndex":0,"card":{"suit":"hearts","rank":"7"}}`.
/// Any unrecognized tag deserializes to [`Action::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Action {
    /// Attacker opens the attack or throws in a card.
    Attack {
        /// The card to play.
        card: Card,
    },
    /// Defender covers the attack in slot `attack_index`.
    Defend {
        /// Index of the slot on the table.
        #[serde(rename = "attackIndex")]
        attack_index: usize,
        /// The covering card.
        card: Card,
    },
    /// Defender gives up on the open attacks and will pick up the table.
    Take,
    /// Attacker ends the exchange.
    Done,
    /// Anything the engine does not understand. Always rejected.
    #[serde(other)]
    Unknown,
}

impl GameState {
    /// Applies `action` on behalf of the player with id `actor_id`.
    ///
    /// All checks run before anything is touched, so on `Err` the state is
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is finished, the actor is not seated, the
    /// actor holds the wrong role or acts in the wrong phase, the card is not in
    /// hand or not legal, or the action is unknown.
    pub fn apply(&mut self, actor_id: &str, action: &Action) -> Result<(), ActionError> {
        if self.phase == Phase::Finished {
            return Err(ActionError::GameFinished);
        }
        let seat = self.seat_of(actor_id).ok_or(ActionError::UnknownPlayer)?;

        match *action {
            Action::Attack { card } => self.attack(seat, card),
            Action::Defend { attack_index, card } => self.defend(seat, attack_index, card),
            Action::Take => self.take(seat),
            Action::Done => self.done(seat),
            Action::Unknown => Err(ActionError::UnknownAction),
        }
    }

    fn attack(&mut self, seat: usize, card: Card) -> Result<(), ActionError> {
        if seat != self.attacker {
            return Err(ActionError::NotAttacker);
        }
        if !matches!(self.phase, Phase::Attack | Phase::Throw) {
            return Err(ActionError::WrongPhase);
        }
        if !self.players[seat].hand.contains(card) {
            return Err(ActionError::CardNotInHand);
        }
        if !self.table.is_empty() && !self.ranks_in_play().contains(&card.rank) {
            return Err(ActionError::IllegalAttack);
        }
        if !self.can_add_attack() {
            return Err(ActionError::TableFull);
        }

        self.players[seat].hand.remove(card);
        self.table.push(TableSlot::new(card));
        if self.phase == Phase::Attack {
            self.phase = Phase::Defend;
        }
        self.message = format!("{} attacks with {card}", self.players[seat].display_name);
        debug!(seat, %card, phase = ?self.phase, "attack placed");
        Ok(())
    }

    fn defend(&mut self, seat: usize, attack_index: usize, card: Card) -> Result<(), ActionError> {
        if seat != self.defender {
            return Err(ActionError::NotDefender);
        }
        if self.phase != Phase::Defend {
            return Err(ActionError::WrongPhase);
        }
        let slot = self
            .table
            .get(attack_index)
            .ok_or(ActionError::SlotNotFound)?;
        if !slot.is_open() {
            return Err(ActionError::SlotAlreadyDefended);
        }
        if !self.players[seat].hand.contains(card) {
            return Err(ActionError::CardNotInHand);
        }
        let attack = slot.attack;
        if !self.beats(attack, card) {
            return Err(ActionError::IllegalDefense);
        }

        self.players[seat].hand.remove(card);
        self.table[attack_index].defense = Some(card);
        if self.table.iter().all(|slot| !slot.is_open()) {
            self.phase = Phase::Attack;
        }
        self.message = format!(
            "{} beats {attack} with {card}",
            self.players[seat].display_name
        );
        debug!(seat, attack_index, %card, phase = ?self.phase, "attack defended");
        Ok(())
    }

    fn take(&mut self, seat: usize) -> Result<(), ActionError> {
        if seat != self.defender {
            return Err(ActionError::NotDefender);
        }
        if self.phase != Phase::Defend {
            return Err(ActionError::WrongPhase);
        }

        self.phase = Phase::Throw;
        self.message = format!(
            "{} takes. {} may throw in more cards",
            self.players[seat].display_name, self.players[self.attacker].display_name
        );
        debug!(seat, "defender takes");
        Ok(())
    }

    fn done(&mut self, seat: usize) -> Result<(), ActionError> {
        if seat != self.attacker {
            return Err(ActionError::NotAttacker);
        }

        match self.phase {
            Phase::Attack => {
                if self.table.is_empty() {
                    return Err(ActionError::EmptyTable);
                }
                if self.table.iter().any(TableSlot::is_open) {
                    return Err(ActionError::UndefendedAttacks);
                }

                let retired = self.table.drain(..).flat_map(|slot| slot.cards());
                self.discard.extend(retired);
                self.deal_up_to();
                core::mem::swap(&mut self.attacker, &mut self.defender);
                self.message = format!(
                    "Attack beaten off. {} attacks next",
                    self.players[self.attacker].display_name
                );
                debug!(attacker = self.attacker, "roles swapped");
            }
            Phase::Throw => {
                let taken = self.table.drain(..).flat_map(|slot| slot.cards());
                self.players[self.defender].hand.extend(taken);
                self.deal_up_to();
                self.message = format!(
                    "{} picks up the table. {} attacks again",
                    self.players[self.defender].display_name,
                    self.players[self.attacker].display_name
                );
                debug!(defender = self.defender, "table taken");
            }
            Phase::Defend | Phase::Finished => return Err(ActionError::WrongPhase),
        }

        self.phase = Phase::Attack;
        self.check_finished();
        Ok(())
    }
}

/// Applies `action` to an owned state and hands the state back either way.
///
/// ```
/// use durak::{Action, initialize_game, apply_action};
///
/// let state = initialize_game("p1", "bot", 7);
/// let outcome = apply_action(state.clone(), "bot", &Action::Done);
/// assert!(!outcome.is_accepted());
/// assert_eq!(outcome.state(), &state);
/// ```
#[must_use]
pub fn apply_action(mut state: GameState, actor_id: &str, action: &Action) -> ActionOutcome {
    match state.apply(actor_id, action) {
        Ok(()) => ActionOutcome::Accepted { state },
        Err(reason) => ActionOutcome::Rejected { reason, state },
    }
}
