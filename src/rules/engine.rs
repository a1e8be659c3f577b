//! The match engine: setup plus the command state machine.
//!
//! `Engine` is immutable configuration (catalog and rules). It never owns a
//! match: every call takes the state it works on, and `apply` returns a new
//! state instead of changing the one it was given.

use tracing::debug;

use crate::cards::{CardCatalog, CardId};
use crate::core::{
    Command, EngineError, EngineResult, GameState, MatchConfig, PlayerId, RandomSource, TurnPhase,
};
use crate::effects::{play_combo, EffectResolver};
use crate::events::OutcomeEvent;
use crate::status::PlayerStatus;

use super::{draw, legal, setup};

/// The result of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    /// In the order they happened.
    pub events: Vec<OutcomeEvent>,
}

/// Rules engine for one catalog and one set of match rules.
///
/// ## Example
///
/// ```
/// use kitten_engine::core::{Command, GameRng, MatchConfig, PlayerId, StartingPlayer};
/// use kitten_engine::rules::Engine;
///
/// let config = MatchConfig::default().with_starting_player(StartingPlayer::Fixed(PlayerId::new(0)));
/// let engine = Engine::standard().with_config(config);
/// let mut rng = GameRng::new(42);
///
/// let state = engine.initialize_match(3, &mut rng).unwrap();
/// let next = engine.apply(&state, PlayerId::new(0), &Command::DrawCard, &mut rng).unwrap();
///
/// assert_eq!(state.turn_number, 1);
/// assert!(!next.events.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    catalog: CardCatalog,
    config: MatchConfig,
}

impl Engine {
    #[must_use]
    pub fn new(catalog: CardCatalog, config: MatchConfig) -> Self {
        Self { catalog, config }
    }

    /// The canonical deck with default rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CardCatalog::standard(), MatchConfig::default())
    }

    /// Replace the match rules (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    // === Setup ===

    /// Deal a new match for seats `0..player_count`.
    pub fn initialize_match<R: RandomSource + ?Sized>(
        &self,
        player_count: usize,
        rng: &mut R,
    ) -> EngineResult<GameState> {
        let state = setup::initial_state(&self.catalog, &self.config, player_count, rng)?;
        debug!(
            player_count,
            starting = %state.turn_owner,
            draw_pile = state.draw_pile.len(),
            "match initialized"
        );
        Ok(state)
    }

    // === Commands ===

    /// Apply `command` issued by `player`.
    ///
    /// On success returns the new state and its events. On error `state`
    /// is the authoritative state, unchanged.
    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        state: &GameState,
        player: PlayerId,
        command: &Command,
        rng: &mut R,
    ) -> EngineResult<Transition> {
        let result = self.check_turn(state, player, command).and_then(|()| {
            let mut next = state.clone();
            let mut events = Vec::new();
            self.resolve(&mut next, player, command, rng, &mut events)?;
            Ok(Transition {
                state: next,
                events,
            })
        });

        match result {
            Ok(mut transition) => {
                let next = &mut transition.state;
                next.record(player, command);
                if let Some(first) = transition.events.first() {
                    next.last_action = first.to_string();
                }
                debug!(
                    %player,
                    command = command.label(),
                    events = transition.events.len(),
                    turn = next.turn_number,
                    "command applied"
                );
                Ok(transition)
            }
            Err(err) => {
                debug!(%player, command = command.label(), %err, "command rejected");
                Err(err)
            }
        }
    }

    /// Turn, sub-state, and seat checks shared by every command.
    fn check_turn(&self, state: &GameState, player: PlayerId, command: &Command) -> EngineResult<()> {
        if state.is_over() {
            return Err(EngineError::CommandAfterMatchOver);
        }
        if !state.is_seated(player) {
            return Err(EngineError::UnknownPlayer { player });
        }

        match (command, &state.phase) {
            (Command::ResolveDefusePlacement { .. }, TurnPhase::AwaitingDefusePlacement { player: p, .. })
            | (Command::ResolveFavorChoice { .. }, TurnPhase::AwaitingFavorChoice { target: p, .. }) => {
                if *p == player {
                    Ok(())
                } else {
                    Err(EngineError::NotYourTurn { player })
                }
            }
            (Command::ResolveDefusePlacement { .. } | Command::ResolveFavorChoice { .. }, _) => {
                Err(EngineError::WrongPendingSubstate)
            }
            (_, phase) => {
                if state.turn_owner != player {
                    Err(EngineError::NotYourTurn { player })
                } else if *phase != TurnPhase::AwaitingAction {
                    Err(EngineError::WrongPendingSubstate)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn resolve<R: RandomSource + ?Sized>(
        &self,
        state: &mut GameState,
        player: PlayerId,
        command: &Command,
        rng: &mut R,
        events: &mut Vec<OutcomeEvent>,
    ) -> EngineResult<()> {
        match command {
            Command::PlayCard { card, target } => {
                EffectResolver::play_card(state, &self.catalog, player, *card, *target, rng, events)
            }
            Command::PlayCombo {
                cards,
                target,
                named_card,
            } => play_combo(state, &self.catalog, player, cards, *target, *named_card, rng, events),
            Command::DrawCard => draw::draw_card(state, &self.catalog, player, events),
            Command::ResolveDefusePlacement { position } => {
                draw::place_bomb(state, *position, rng, events)
            }
            Command::ResolveFavorChoice { card } => {
                EffectResolver::resolve_favor_choice(state, player, *card, events)
            }
        }
    }

    // === Reads ===

    /// Up to `n` cards from the top of the draw pile. Never mutates.
    ///
    /// Allowed for the turn owner at any point of their turn, including
    /// while placing a defused bomb.
    pub fn peek_top(&self, state: &GameState, player: PlayerId, n: usize) -> EngineResult<Vec<CardId>> {
        if state.is_over() {
            return Err(EngineError::CommandAfterMatchOver);
        }
        if !state.is_seated(player) {
            return Err(EngineError::UnknownPlayer { player });
        }
        if state.turn_owner != player {
            return Err(EngineError::NotYourTurn { player });
        }
        Ok(state.draw_pile.peek(n))
    }

    /// `peek_top` with the configured See the Future depth.
    pub fn see_future(&self, state: &GameState, player: PlayerId) -> EngineResult<Vec<CardId>> {
        self.peek_top(state, player, self.config.see_future_count)
    }

    /// Status report for one seat. Allowed after the match ends.
    pub fn status(&self, state: &GameState, player: PlayerId) -> EngineResult<PlayerStatus> {
        PlayerStatus::compute(state, &self.catalog, player)
    }

    /// The player the engine is waiting on, or `None` once the match is over.
    #[must_use]
    pub fn actor(&self, state: &GameState) -> Option<PlayerId> {
        match state.phase {
            TurnPhase::AwaitingAction => Some(state.turn_owner),
            TurnPhase::AwaitingDefusePlacement { player, .. } => Some(player),
            TurnPhase::AwaitingFavorChoice { target, .. } => Some(target),
            TurnPhase::MatchOver(_) => None,
        }
    }

    /// Commands `player` could issue right now.
    #[must_use]
    pub fn legal_commands(&self, state: &GameState, player: PlayerId) -> Vec<Command> {
        legal::legal_commands(state, &self.catalog, player)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::standard()
    }
}
