//! Result types handed back to the host.

use alloc::string::{String, ToString};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ActionError;
use crate::game::GameState;

/// Final result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GameResult {
    /// The player who ran out of cards first.
    Winner {
        /// The winner's id.
        id: String,
    },
    /// Both hands emptied at the same time.
    Draw,
}

/// Outcome of [`apply_action`](crate::apply_action).
///
/// The state is always returned. On rejection it is the input state, unchanged.
/// Serializes as `{ "accepted": bool, "reason"?, "message"?, "state" }`, where
/// `message` is the human-readable rejection text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was applied.
    Accepted {
        /// The state after the action.
        state: GameState,
    },
    /// The action failed validation.
    Rejected {
        /// Why the action was rejected.
        reason: ActionError,
        /// The untouched input state.
        state: GameState,
    },
}

impl ActionOutcome {
    /// Returns whether the action was applied.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the rejection reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<ActionError> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Returns the resulting state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        match self {
            Self::Accepted { state } | Self::Rejected { state, .. } => state,
        }
    }

    /// Consumes the outcome and returns the resulting state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        match self {
            Self::Accepted { state } | Self::Rejected { state, .. } => state,
        }
    }
}

impl Serialize for ActionOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Accepted { state } => {
                let mut out = serializer.serialize_struct("ActionOutcome", 2)?;
                out.serialize_field("accepted", &true)?;
                out.serialize_field("state", state)?;
                out.end()
            }
            Self::Rejected { reason, state } => {
                let mut out = serializer.serialize_struct("ActionOutcome", 4)?;
                out.serialize_field("accepted", &false)?;
                out.serialize_field("reason", reason)?;
                out.serialize_field("message", &reason.to_string())?;
                out.serialize_field("state", state)?;
                out.end()
            }
        }
    }
}
