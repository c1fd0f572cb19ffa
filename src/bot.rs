//! Bot strategies.
//!
//! A strategy only proposes actions. The session applies them through the same
//! [`GameState::apply`] path as human moves, so a strategy can never bend the
//! rules, and alternatives can be swapped in without touching the engine.

use crate::card::Card;
use crate::game::{Action, GameState, Phase};

/// A policy that picks the next action for one seat.
pub trait BotStrategy {
    /// Proposes the next action for `seat`, or `None` if that seat has nothing
    /// to do in the current phase.
    fn decide(&self, state: &GameState, seat: usize) -> Option<Action>;
}

impl<S: BotStrategy + ?Sized> BotStrategy for &S {
    fn decide(&self, state: &GameState, seat: usize) -> Option<Action> {
        (**self).decide(state, seat)
    }
}

impl<S: BotStrategy + ?Sized> BotStrategy for alloc::boxed::Box<S> {
    fn decide(&self, state: &GameState, seat: usize) -> Option<Action> {
        (**self).decide(state, seat)
    }
}

/// Plays the cheapest legal card every time.
///
/// "Cheapest" follows the hand sort order: non-trump before trump, then suit,
/// then rank. Takes when it cannot beat the first open attack and ends the
/// exchange when it has nothing more to throw in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowestCardBot;

impl LowestCardBot {
    fn lowest(state: &GameState, cards: &[Card]) -> Option<Card> {
        cards
            .iter()
            .copied()
            .min_by(|a, b| a.cmp_with_trump(b, state.trump_suit))
    }
}

impl BotStrategy for LowestCardBot {
    fn decide(&self, state: &GameState, seat: usize) -> Option<Action> {
        match state.phase {
            Phase::Attack | Phase::Throw if seat == state.attacker => {
                if !state.table.is_empty() && !state.can_add_attack() {
                    return Some(Action::Done);
                }
                let attacks = state.legal_attacks(seat);
                Some(match Self::lowest(state, &attacks) {
                    Some(card) => Action::Attack { card },
                    None => Action::Done,
                })
            }
            Phase::Defend if seat == state.defender => {
                let attack_index = state.table.iter().position(|slot| slot.is_open())?;
                let defenses = state.legal_defenses(seat, attack_index);
                Some(match Self::lowest(state, &defenses) {
                    Some(card) => Action::Defend { attack_index, card },
                    None => Action::Take,
                })
            }
            _ => None,
        }
    }
}

/// Proposes the next action for the bot seat using [`LowestCardBot`].
///
/// Returns `None` if no seat is bot-controlled or the bot has nothing to do.
#[must_use]
pub fn decide_bot_action(state: &GameState) -> Option<Action> {
    let seat = state.bot_seat()?;
    LowestCardBot.decide(state, seat)
}
