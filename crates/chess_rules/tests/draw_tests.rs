//! Tests for draw adjudication
//!
//! Covers every rule and its priority:
//! - Stalemate (forced)
//! - Dead position (forced)
//! - 75-move rule (forced) and 50-move rule (claimable)
//! - Fivefold repetition (forced) and threefold repetition (claimable)

use chess_rules::{DrawReason, DrawVerdict, Game, Outcome, Position};

// =============================================================================
// Stalemate
// =============================================================================

#[test]
fn test_stalemate_is_a_forced_draw() {
    // Black king on a8, white queen on b6, white king on c7.
    let game = Game::from_epd("k7/2K5/1Q6/8/8/8/8/8 b - -").unwrap();
    let legal = game.legal_moves();

    assert!(legal.is_empty(), "stalemated side should have no legal moves");
    assert!(!game.in_check(), "stalemate means the king is not in check");
    assert_eq!(
        game.draw_verdict(&legal),
        Some(DrawVerdict::Forced(DrawReason::Stalemate))
    );
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_king_and_pawn_stalemate() {
    // White king g6, white pawn g7, black king g8: a classic bind.
    let game = Game::from_epd("6k1/6P1/6K1/8/8/8/8/8 b - -").unwrap();
    let legal = game.legal_moves();

    assert!(legal.is_empty());
    assert_eq!(
        game.draw_verdict(&legal),
        Some(DrawVerdict::Forced(DrawReason::Stalemate))
    );
}

// =============================================================================
// Dead position
// =============================================================================

#[test]
fn test_dead_position_king_vs_king() {
    let pos = Position::from_epd("4k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert!(pos.is_dead_position(), "K vs K cannot be won");
}

#[test]
fn test_dead_position_king_and_bishop_vs_king() {
    let pos = Position::from_epd("4k3/8/8/8/8/8/8/2B1K3 w - -").unwrap();
    assert!(pos.is_dead_position(), "K+B vs K cannot be won");

    // Symmetric: the bishop may belong to either side.
    let pos = Position::from_epd("2b1k3/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert!(pos.is_dead_position(), "K vs K+B cannot be won");
}

#[test]
fn test_dead_position_king_and_knight_vs_king() {
    let pos = Position::from_epd("4k3/8/8/8/8/8/8/1N2K3 w - -").unwrap();
    assert!(pos.is_dead_position(), "K+N vs K cannot be won");
}

#[test]
fn test_bishop_pair_across_sides_is_not_dead() {
    // K+B vs K+B stays playable here: helpmates exist.
    let pos = Position::from_epd("2b1k3/8/8/8/8/8/8/2B1K3 w - -").unwrap();
    assert!(!pos.is_dead_position());
}

#[test]
fn test_major_pieces_and_pawns_are_never_dead() {
    for epd in [
        "4k3/8/8/8/8/8/8/R3K3 w - -",
        "4k3/8/8/8/8/8/8/Q3K3 w - -",
        "4k3/8/8/8/8/8/4P3/4K3 w - -",
        "4k3/8/8/8/8/8/8/1NN1K3 w - -",
    ] {
        let pos = Position::from_epd(epd).unwrap();
        assert!(!pos.is_dead_position(), "{epd} should not count as dead");
    }
}

#[test]
fn test_dead_position_ends_the_game() {
    let game = Game::from_epd("4k3/8/8/8/8/8/8/2B1K3 w - -").unwrap();
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Forced(DrawReason::DeadPosition))
    );
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

// =============================================================================
// Move-count rules (50 claimable / 75 forced)
// =============================================================================

/// Drives two rooks around closed tours of coprime lengths (4 and 25),
/// so no position ever repeats inside the first 200 half-moves and the
/// move-count rules can be observed in isolation.
fn shuffle_move(ply: usize) -> (&'static str, &'static str) {
    const WHITE: [&str; 4] = ["a1", "a2", "b2", "b1"];
    const BLACK: [&str; 25] = [
        "g7", "g6", "g5", "g4", "f4", "f5", "f6", "f7", "e7", "e6", "e5", "e4", "d4",
        "d5", "d6", "d7", "c7", "c6", "c5", "c4", "b4", "b5", "b6", "b7", "a7",
    ];
    let turn = ply / 2;
    if ply % 2 == 0 {
        (WHITE[turn % 4], WHITE[(turn + 1) % 4])
    } else {
        (BLACK[turn % 25], BLACK[(turn + 1) % 25])
    }
}

#[test]
fn test_fifty_move_rule_claimable_at_100_halfmoves() {
    let mut game = Game::from_epd("7k/6r1/8/8/8/8/8/R6K w - -").unwrap();

    for ply in 0..99 {
        let (from, to) = shuffle_move(ply);
        game.apply(from, to).unwrap();
    }
    assert_eq!(game.draw_verdict(&game.legal_moves()), None, "99 is one short");

    let (from, to) = shuffle_move(99);
    game.apply(from, to).unwrap();
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Claimable(DrawReason::FiftyMoveRule))
    );
    // A claim is available but nothing is forced.
    assert_eq!(game.outcome(), None);
}

#[test]
fn test_pawn_move_resets_the_move_count_window() {
    // Same shuffle, plus a white pawn held in reserve on h2.
    let mut game = Game::from_epd("7k/6r1/8/8/8/8/7P/R6K w - -").unwrap();

    for ply in 0..100 {
        let (from, to) = shuffle_move(ply);
        game.apply(from, to).unwrap();
    }
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Claimable(DrawReason::FiftyMoveRule))
    );

    game.apply("h2", "h3").unwrap();
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        None,
        "a pawn move should restart the window and void the claim"
    );
}

#[test]
fn test_seventy_five_move_rule_forces_the_draw() {
    let mut game = Game::from_epd("7k/6r1/8/8/8/8/8/R6K w - -").unwrap();

    for ply in 0..149 {
        let (from, to) = shuffle_move(ply);
        game.apply(from, to).unwrap();
    }
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Claimable(DrawReason::FiftyMoveRule)),
        "at 149 half-moves only the claimable rule applies"
    );

    let (from, to) = shuffle_move(149);
    game.apply(from, to).unwrap();
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Forced(DrawReason::SeventyFiveMoveRule))
    );
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

// =============================================================================
// Repetition rules (3-fold claimable / 5-fold forced)
// =============================================================================

/// One knight-shuffle cycle: both sides develop and retreat a knight,
/// returning to the starting position after four half-moves.
fn knight_cycle(game: &mut Game) {
    for (from, to) in [("g1", "f3"), ("b8", "c6"), ("f3", "g1"), ("c6", "b8")] {
        game.apply(from, to).unwrap();
    }
}

#[test]
fn test_threefold_repetition_is_claimable() {
    let mut game = Game::new();
    knight_cycle(&mut game);
    assert_eq!(game.repetition_count(), 2);
    assert_eq!(game.draw_verdict(&game.legal_moves()), None);

    knight_cycle(&mut game);
    assert_eq!(game.repetition_count(), 3);
    let legal = game.legal_moves();
    assert_eq!(
        game.draw_verdict(&legal),
        Some(DrawVerdict::Claimable(DrawReason::ThreefoldRepetition))
    );
    assert!(game.is_draw(&legal), "the claim should be reported as available");
    assert_eq!(game.outcome(), None, "a claimable draw does not end the game");
}

#[test]
fn test_fivefold_repetition_forces_the_draw() {
    let mut game = Game::new();
    for _ in 0..4 {
        knight_cycle(&mut game);
    }
    assert_eq!(game.repetition_count(), 5);
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Forced(DrawReason::FivefoldRepetition))
    );
    assert_eq!(game.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_repetition_counts_are_never_rolled_back() {
    // Occurrence counts accumulate across undo: taking moves back and
    // replaying them keeps raising the count.
    let mut game = Game::new();
    knight_cycle(&mut game);
    assert_eq!(game.repetition_count(), 2);

    for _ in 0..4 {
        game.undo().unwrap();
    }
    assert!(game.history().is_empty());
    assert_eq!(game.repetition_count(), 2, "undo must not decrement");

    knight_cycle(&mut game);
    assert_eq!(game.repetition_count(), 3);
    assert_eq!(
        game.draw_verdict(&game.legal_moves()),
        Some(DrawVerdict::Claimable(DrawReason::ThreefoldRepetition))
    );
}

#[test]
fn test_stalemate_outranks_other_draw_rules() {
    // The stalemate bind is also reachable with counts in the table;
    // the verdict must still name stalemate first.
    let game = Game::from_epd("k7/2K5/1Q6/8/8/8/8/8 b - -").unwrap();
    let verdict = game.draw_verdict(&game.legal_moves());
    assert_eq!(verdict.map(DrawVerdict::reason), Some(DrawReason::Stalemate));
    assert!(verdict.is_some_and(DrawVerdict::is_forced));
}
