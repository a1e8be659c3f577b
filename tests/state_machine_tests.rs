//! Command rejection and state-machine precedence tests.
//!
//! Every rejected command must leave the given state untouched and report
//! the most specific error in a fixed order: match over, unknown seat, turn
//! and sub-state checks, then card checks.

use im::Vector;
use kitten_engine::cards::{CardCatalog, CardId, CardKind, CatVariant};
use kitten_engine::core::{
    Command, EngineError, GameRng, GameState, MatchConfig, PlayerId, PlayerMap, StartingPlayer,
    TurnPhase,
};
use kitten_engine::piles::{InsertPosition, Pile};
use kitten_engine::rules::Engine;
use kitten_engine::status::MatchResult;

const A: PlayerId = PlayerId::new(0);
const B: PlayerId = PlayerId::new(1);
const C: PlayerId = PlayerId::new(2);

struct Fixture {
    engine: Engine,
    state: GameState,
    attack: CardId,
    favor: CardId,
    defuse: CardId,
    tacos: Vec<CardId>,
    melon: CardId,
    bomb: CardId,
}

/// Three players, A to act.
/// A: attack, favor, defuse, taco x2, melon. B: skip. C: empty.
/// Draw pile: bomb, shuffle, skip.
fn fixture() -> Fixture {
    let mut catalog = CardCatalog::new();
    let attack = catalog.register(CardKind::Attack);
    let favor = catalog.register(CardKind::Favor);
    let defuse = catalog.register(CardKind::Defuse);
    let tacos = vec![
        catalog.register(CardKind::Cat(CatVariant::Taco)),
        catalog.register(CardKind::Cat(CatVariant::Taco)),
    ];
    let melon = catalog.register(CardKind::Cat(CatVariant::Melon));
    let b_skip = catalog.register(CardKind::Skip);
    let bomb = catalog.register(CardKind::ExplodingKitten);
    let pile = vec![bomb, catalog.register(CardKind::Shuffle), catalog.register(CardKind::Skip)];

    let hand_a = vec![attack, favor, defuse, tacos[0], tacos[1], melon];
    let hands = PlayerMap::new(3, |p| match p.index() {
        0 => Vector::from(hand_a.clone()),
        1 => Vector::from(vec![b_skip]),
        _ => Vector::new(),
    });
    let state = GameState::new(Pile::from_cards(pile), hands, A);

    Fixture {
        engine: Engine::new(catalog, MatchConfig::default()),
        state,
        attack,
        favor,
        defuse,
        tacos,
        melon,
        bomb,
    }
}

fn reject(f: &Fixture, state: &GameState, player: PlayerId, command: Command) -> EngineError {
    let before = state.clone();
    let err = f
        .engine
        .apply(state, player, &command, &mut GameRng::new(0))
        .unwrap_err();
    assert_eq!(*state, before);
    err
}

// =============================================================================
// Turn and sub-state
// =============================================================================

/// Only the turn owner may play or draw.
#[test]
fn test_not_your_turn() {
    let f = fixture();
    assert_eq!(reject(&f, &f.state, B, Command::DrawCard), EngineError::NotYourTurn { player: B });
    assert_eq!(
        reject(&f, &f.state, C, Command::play(f.attack)),
        EngineError::NotYourTurn { player: C }
    );
}

/// Seats outside the match are reported before turn checks.
#[test]
fn test_unknown_player() {
    let f = fixture();
    let stranger = PlayerId::new(5);
    assert_eq!(
        reject(&f, &f.state, stranger, Command::DrawCard),
        EngineError::UnknownPlayer { player: stranger }
    );
}

/// Resolution commands outside their sub-state.
#[test]
fn test_resolution_outside_substate() {
    let f = fixture();
    assert_eq!(
        reject(&f, &f.state, A, Command::ResolveDefusePlacement { position: InsertPosition::Top }),
        EngineError::WrongPendingSubstate
    );
    assert_eq!(
        reject(&f, &f.state, B, Command::ResolveFavorChoice { card: f.melon }),
        EngineError::WrongPendingSubstate
    );
}

/// While a bomb waits for placement, the drawer cannot do anything else and
/// nobody else can place it.
#[test]
fn test_pending_defuse_blocks_other_commands() {
    let f = fixture();
    let mut rng = GameRng::new(0);
    let state = f.engine.apply(&f.state, A, &Command::DrawCard, &mut rng).unwrap().state;
    assert_eq!(state.phase, TurnPhase::AwaitingDefusePlacement { player: A, bomb: f.bomb });
    assert!(state.discard_pile.contains(f.defuse));

    assert_eq!(reject(&f, &state, A, Command::DrawCard), EngineError::WrongPendingSubstate);
    assert_eq!(reject(&f, &state, A, Command::play(f.attack)), EngineError::WrongPendingSubstate);
    assert_eq!(
        reject(&f, &state, B, Command::ResolveDefusePlacement { position: InsertPosition::Top }),
        EngineError::NotYourTurn { player: B }
    );
    assert_eq!(
        reject(&f, &state, A, Command::ResolveDefusePlacement { position: InsertPosition::Index(3) }),
        EngineError::InvalidPlacement { index: 3, len: 2 }
    );

    // The bomb slot counts toward the card total.
    assert_eq!(state.all_cards().count(), f.state.all_cards().count());

    // Exact index at len is the bottom.
    let placed = f
        .engine
        .apply(&state, A, &Command::ResolveDefusePlacement { position: InsertPosition::Index(2) }, &mut rng)
        .unwrap()
        .state;
    assert_eq!(placed.draw_pile.last(), Some(f.bomb));
    assert_eq!(placed.turn_owner, B);
}

/// Only the favor target answers, with a card they hold.
#[test]
fn test_favor_choice_rules() {
    let f = fixture();
    let mut rng = GameRng::new(0);
    let state = f
        .engine
        .apply(&f.state, A, &Command::play_targeted(f.favor, B), &mut rng)
        .unwrap()
        .state;

    assert_eq!(
        reject(&f, &state, A, Command::ResolveFavorChoice { card: f.melon }),
        EngineError::NotYourTurn { player: A }
    );
    assert_eq!(
        reject(&f, &state, B, Command::ResolveFavorChoice { card: f.melon }),
        EngineError::CardNotInHand { player: B, card: f.melon }
    );
    assert_eq!(reject(&f, &state, A, Command::DrawCard), EngineError::WrongPendingSubstate);
}

// =============================================================================
// Card legality
// =============================================================================

/// Defuse is spent only by the explosion path.
#[test]
fn test_defuse_not_playable() {
    let f = fixture();
    assert_eq!(
        reject(&f, &f.state, A, Command::play(f.defuse)),
        EngineError::CardNotPlayable { card: f.defuse }
    );
}

/// Cards must be in the actor's own hand.
#[test]
fn test_card_not_in_hand() {
    let f = fixture();
    assert_eq!(
        reject(&f, &f.state, A, Command::play(f.bomb)),
        EngineError::CardNotInHand { player: A, card: f.bomb }
    );
}

/// Favor needs an active opponent.
#[test]
fn test_favor_target_validation() {
    let f = fixture();
    assert_eq!(
        reject(&f, &f.state, A, Command::play(f.favor)),
        EngineError::InvalidTarget { target: None }
    );
    assert_eq!(
        reject(&f, &f.state, A, Command::play_targeted(f.favor, A)),
        EngineError::InvalidTarget { target: Some(A) }
    );

    let mut state = f.state.clone();
    state.eliminated.insert(C);
    assert_eq!(
        reject(&f, &state, A, Command::play_targeted(f.favor, C)),
        EngineError::InvalidTarget { target: Some(C) }
    );
}

/// Combo checks in order: size, ownership, matching, target.
#[test]
fn test_combo_rejections() {
    let f = fixture();
    let t = &f.tacos;

    assert_eq!(
        reject(&f, &f.state, A, Command::combo(&[t[0]], B)),
        EngineError::ComboSizeInvalid { count: 1 }
    );
    assert_eq!(
        reject(&f, &f.state, A, Command::combo(&[t[0], t[1], f.melon, f.attack], B)),
        EngineError::ComboSizeInvalid { count: 4 }
    );
    assert_eq!(
        reject(&f, &f.state, A, Command::combo(&[t[0], t[0]], B)),
        EngineError::CardNotInHand { player: A, card: t[0] }
    );
    assert_eq!(
        reject(&f, &f.state, A, Command::combo(&[t[0], f.melon], B)),
        EngineError::ComboNotMatching
    );
    assert_eq!(
        reject(&f, &f.state, A, Command::combo(&[f.attack, f.favor], B)),
        EngineError::ComboNotMatching
    );
    assert_eq!(
        reject(&f, &f.state, A, Command::combo(&[t[0], t[1]], C)),
        EngineError::InvalidTarget { target: Some(C) }
    );
}

/// An empty draw pile cannot be drawn from.
#[test]
fn test_draw_pile_empty() {
    let f = fixture();
    let mut state = f.state.clone();
    state.draw_pile = Pile::new();
    assert_eq!(reject(&f, &state, A, Command::DrawCard), EngineError::DrawPileEmpty);
}

// =============================================================================
// Terminal state
// =============================================================================

/// Once over, every command is refused but status reads still work.
#[test]
fn test_match_over_refuses_commands() {
    let f = fixture();
    let mut state = f.state.clone();
    state.eliminated.insert(B);
    state.eliminated.insert(C);
    state.phase = TurnPhase::MatchOver(MatchResult::Winner(A));

    assert_eq!(reject(&f, &state, A, Command::DrawCard), EngineError::CommandAfterMatchOver);
    assert_eq!(
        reject(&f, &state, PlayerId::new(9), Command::DrawCard),
        EngineError::CommandAfterMatchOver
    );
    assert_eq!(f.engine.peek_top(&state, A, 3), Err(EngineError::CommandAfterMatchOver));

    let status = f.engine.status(&state, B).unwrap();
    assert!(status.match_over);
    assert!(status.is_eliminated);
    assert!(f.engine.legal_commands(&state, A).is_empty());
}

// =============================================================================
// Forced turns across players
// =============================================================================

/// k consecutive attacks by k different players leave 2k turns owed.
#[test]
fn test_stacked_attacks_accumulate() {
    let mut catalog = CardCatalog::new();
    let attacks: Vec<_> = (0..4).map(|_| catalog.register(CardKind::Attack)).collect();
    let pile: Vec<_> = (0..4).map(|_| catalog.register(CardKind::Skip)).collect();
    let engine = Engine::new(catalog, MatchConfig::default());
    let mut rng = GameRng::new(0);

    let hands = PlayerMap::new(4, |p| Vector::from(vec![attacks[p.index()]]));
    let mut state = GameState::new(Pile::from_cards(pile), hands, A);

    for (k, attacker) in PlayerId::all(4).enumerate() {
        assert_eq!(state.turn_owner, attacker);
        state = engine
            .apply(&state, attacker, &Command::play(attacks[k]), &mut rng)
            .unwrap()
            .state;
        assert_eq!(state.pending_forced_turns, 2 * (k as u32 + 1));
    }
    assert_eq!(state.turn_number, 1);
}

// =============================================================================
// Setup
// =============================================================================

/// Setup errors surface from `initialize_match`.
#[test]
fn test_setup_errors() {
    let engine = Engine::standard();
    let mut rng = GameRng::new(0);

    assert_eq!(
        engine.initialize_match(1, &mut rng),
        Err(EngineError::InsufficientPlayers { count: 1, min: 2 })
    );

    let wide = Engine::standard().with_config(MatchConfig::default().with_player_limits(2, 8));
    assert_eq!(
        wide.initialize_match(7, &mut rng),
        Err(EngineError::InsufficientDefuseCards { needed: 7, available: 6 })
    );

    let fixed = Engine::standard().with_config(
        MatchConfig::default().with_starting_player(StartingPlayer::Fixed(PlayerId::new(3))),
    );
    assert_eq!(fixed.initialize_match(4, &mut rng).unwrap().turn_owner, PlayerId::new(3));
}
