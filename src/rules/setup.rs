//! Match setup: deal, seed the bombs, pick who starts.

use im::Vector;
use tracing::{debug, trace};

use crate::cards::{CardCatalog, CardId};
use crate::core::{
    EngineError, EngineResult, GameState, MatchConfig, PlayerId, PlayerMap, RandomSource,
    StartingPlayer,
};
use crate::piles::Pile;

/// Seats supported by `PlayerId`.
const SEAT_LIMIT: usize = u8::MAX as usize;

/// Build the opening state of a match.
///
/// 1. One defuse per seat (per `defuses_per_player`).
/// 2. Shuffle the working pile (spare defuses + every non-bomb card).
/// 3. Deal `hand_size` rounds, one card per seat per round.
/// 4. Add `player_count - 1` exploding kittens and shuffle again.
/// 5. Choose the starting seat.
pub(crate) fn initial_state<R: RandomSource + ?Sized>(
    catalog: &CardCatalog,
    config: &MatchConfig,
    player_count: usize,
    rng: &mut R,
) -> EngineResult<GameState> {
    if player_count < config.min_players.max(1) {
        return Err(EngineError::InsufficientPlayers {
            count: player_count,
            min: config.min_players,
        });
    }
    let max = config.max_players.min(SEAT_LIMIT);
    if player_count > max {
        return Err(EngineError::TooManyPlayers {
            count: player_count,
            max,
        });
    }

    let plan = catalog.build_deck_for(player_count, config)?;

    let mut hands: PlayerMap<Vector<CardId>> = PlayerMap::with_default(player_count);
    let per_player = config.defuses_per_player.max(1);
    for (player, defuses) in PlayerId::all(player_count).zip(plan.dealt_defuses.chunks(per_player)) {
        hands[player].extend(defuses.iter().copied());
    }

    let mut pile = Pile::from_cards(plan.working_pile);
    pile.shuffle(rng);

    let needed = config.hand_size * player_count;
    if config.strict_deal && pile.len() < needed {
        return Err(EngineError::InsufficientCards {
            needed,
            available: pile.len(),
        });
    }

    'deal: for _ in 0..config.hand_size {
        for player in PlayerId::all(player_count) {
            match pile.draw_top() {
                Ok(card) => hands[player].push_back(card),
                Err(_) => {
                    debug!(player_count, "working pile ran out while dealing");
                    break 'deal;
                }
            }
        }
    }

    for bomb in plan.bombs {
        pile.discard(bomb);
    }
    pile.shuffle(rng);
    trace!(draw_pile = pile.len(), "draw pile seeded");

    let starting = match config.starting_player {
        StartingPlayer::Fixed(seat) if seat.index() < player_count => seat,
        StartingPlayer::Fixed(seat) => return Err(EngineError::UnknownPlayer { player: seat }),
        StartingPlayer::Random => PlayerId::new(rng.gen_index(player_count) as u8),
    };

    Ok(GameState::new(pile, hands, starting))
}
