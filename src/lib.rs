//! A two-player Durak ("Fool") rules engine with optional `no_std` support.
//!
//! [`GameState`] is a plain, serializable value. It changes only through
//! [`GameState::apply`] (or the by-value [`apply_action`]), which validates an
//! [`Action`] completely before mutating anything. Bots are pluggable
//! [`BotStrategy`] implementations, and [`Session`] hosts one game between a
//! human and a bot.
//!
//! # Example
//!
//! ```
//! use durak::{Action, Phase, initialize_game};
//!
//! let mut state = initialize_game("p1", "bot", 42);
//! let card = state.legal_attacks(0)[0];
//! state.apply("p1", &Action::Attack { card }).unwrap();
//! assert_eq!(state.phase, Phase::Defend);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use bot::{BotStrategy, LowestCardBot, decide_bot_action};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::ActionError;
pub use game::{
    Action, GameState, Phase, Player, PlayerKind, TableSlot, apply_action, initialize_game,
};
pub use hand::Hand;
pub use options::GameOptions;
pub use result::{ActionOutcome, GameResult};
pub use session::Session;
