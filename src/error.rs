//! Error types for game operations.

use serde::Serialize;
use thiserror::Error;

/// Reasons an action is rejected.
///
/// Every variant is recoverable: a rejected action leaves the game state
/// exactly as it was. The `Display` text is the reason shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionError {
    /// The game has already finished.
    #[error("the game is already finished")]
    GameFinished,
    /// The acting player is not seated in this game.
    #[error("player not found")]
    UnknownPlayer,
    /// Only the attacker may do this.
    #[error("not the attacker")]
    NotAttacker,
    /// Only the defender may do this.
    #[error("not the defender")]
    NotDefender,
    /// The action is not allowed in the current phase.
    #[error("action not allowed in the current phase")]
    WrongPhase,
    /// The declared card is not in the player's hand.
    #[error("card is not in hand")]
    CardNotInHand,
    /// The card's rank is not on the table.
    #[error("illegal attack: rank is not on the table")]
    IllegalAttack,
    /// The defender cannot face another attack.
    #[error("illegal attack: defender cannot face more cards")]
    TableFull,
    /// The card does not beat the attacking card.
    #[error("illegal defense: card does not beat the attack")]
    IllegalDefense,
    /// No table slot at the given index.
    #[error("attack slot not found")]
    SlotNotFound,
    /// The slot already holds a defending card.
    #[error("attack slot is already defended")]
    SlotAlreadyDefended,
    /// `done` while the attack phase still has open slots.
    #[error("undefended attacks remain")]
    UndefendedAttacks,
    /// `done` with nothing on the table.
    #[error("nothing has been played yet")]
    EmptyTable,
    /// The action kind is not recognized.
    #[error("unknown action")]
    UnknownAction,
}
