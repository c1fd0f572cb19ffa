//! A single-game host that pairs the rules engine with a bot strategy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::bot::{BotStrategy, LowestCardBot};
use crate::error::ActionError;
use crate::game::{Action, GameState, Player, PlayerKind};
use crate::options::GameOptions;

/// Owns one game between a human and a bot.
///
/// Sessions hold no global state, so any number of them can live side by side.
/// Callers must not apply actions to the same session concurrently.
#[derive(Debug, Clone)]
pub struct Session<S = LowestCardBot> {
    state: GameState,
    strategy: S,
    options: GameOptions,
    human: Player,
    bot: Player,
}

impl Session<LowestCardBot> {
    /// Creates a session using the default [`LowestCardBot`]. The two ids must
    /// differ.
    ///
    /// # Example
    ///
    /// ```
    /// use durak::{GameOptions, Session};
    ///
    /// let session = Session::new("p1", "bot", GameOptions::default(), 42);
    /// assert_eq!(session.state().deck.len(), 24);
    /// ```
    #[must_use]
    pub fn new(human_id: &str, bot_id: &str, options: GameOptions, seed: u64) -> Self {
        Self::with_strategy(
            Player::new(human_id, human_id, PlayerKind::Human),
            Player::new(bot_id, bot_id, PlayerKind::Bot),
            options,
            seed,
            LowestCardBot,
        )
    }
}

impl<S: BotStrategy> Session<S> {
    /// Creates a session with a custom bot strategy.
    #[must_use]
    pub fn with_strategy(
        human: Player,
        bot: Player,
        options: GameOptions,
        seed: u64,
        strategy: S,
    ) -> Self {
        let state = Self::deal(&human, &bot, &options, seed);
        Self {
            state,
            strategy,
            options,
            human,
            bot,
        }
    }

    fn deal(human: &Player, bot: &Player, options: &GameOptions, seed: u64) -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        GameState::new(human.clone(), bot.clone(), options, &mut rng)
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the session and returns the state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the options this session was created with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Replaces the current game with a freshly dealt one.
    pub fn restart(&mut self, seed: u64) {
        self.state = Self::deal(&self.human, &self.bot, &self.options, seed);
        info!(seed, "game restarted");
    }

    /// Applies a single action without running the bot.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the state is left unchanged.
    pub fn apply(&mut self, actor_id: &str, action: &Action) -> Result<(), ActionError> {
        debug!(actor_id, ?action, "applying action");
        match self.state.apply(actor_id, action) {
            Ok(()) => {
                if let Some(result) = self.state.result() {
                    info!(?result, "game finished");
                }
                Ok(())
            }
            Err(err) => {
                warn!(actor_id, ?action, reason = %err, "action rejected");
                Err(err)
            }
        }
    }

    /// Applies a player's action, then lets the bot respond.
    ///
    /// Returns the number of bot actions applied afterwards.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the player's action is illegal; the bot
    /// does not move in that case.
    pub fn play(&mut self, actor_id: &str, action: &Action) -> Result<usize, ActionError> {
        self.apply(actor_id, action)?;
        Ok(self.run_bot())
    }

    /// Applies bot actions until the bot has nothing to do, the game ends, a
    /// proposed action is rejected, or the step cap is reached.
    ///
    /// Returns the number of actions applied.
    pub fn run_bot(&mut self) -> usize {
        let Some(seat) = self.state.bot_seat() else {
            return 0;
        };
        let bot_id = self.state.players[seat].id.clone();

        let mut steps = 0;
        while steps < self.options.max_bot_steps && !self.state.is_finished() {
            let Some(action) = self.strategy.decide(&self.state, seat) else {
                return steps;
            };
            if self.apply(&bot_id, &action).is_err() {
                return steps;
            }
            steps += 1;
        }

        if steps == self.options.max_bot_steps && !self.state.is_finished() {
            warn!(steps, "bot step cap reached");
        }
        steps
    }

    /// Ends the game with `player_id` conceding to the opponent.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already finished or the player is not
    /// seated.
    pub fn concede(&mut self, player_id: &str) -> Result<(), ActionError> {
        self.state.surrender(player_id)?;
        info!(player_id, winner = ?self.state.winner_id, "player conceded");
        Ok(())
    }
}
