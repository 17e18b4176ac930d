//! Move engine integration tests.
//!
//! These drive whole games and fabricated positions through the public
//! surface: opening setup, merge ownership, the 2048 win, exhaustion
//! tiebreaks, save/resume, and the no-op guarantee.

use duel_2048::core::{Direction, Player, Position, Winner};
use duel_2048::engine::GameState;
use duel_2048::grid::{Grid, Tile};

/// A state with an empty grid, ready for hand-placed tiles.
fn blank(play_with_bot: bool, seed: u64) -> GameState {
    let mut state = GameState::new(4, play_with_bot, seed);
    state.grid = Grid::new(4);
    state.max_red = 0;
    state.max_green = 0;
    state
}

fn put(state: &mut GameState, x: usize, y: usize, value: u32, player: Player) {
    state
        .grid
        .insert_tile(Tile::new(Position::new(x, y), value, player));
    match player {
        Player::Red => state.max_red = state.max_red.max(value),
        Player::Green => state.max_green = state.max_green.max(value),
    }
}

#[test]
fn test_opening_position() {
    let state = GameState::new(4, false, 7);

    let tiles: Vec<_> = state.grid.tiles().collect();
    assert_eq!(tiles.len(), 2);
    assert_eq!(
        tiles.iter().filter(|t| t.player == Player::Red).count(),
        1
    );
    assert_eq!(
        tiles.iter().filter(|t| t.player == Player::Green).count(),
        1
    );
    for tile in &tiles {
        assert!(tile.value == 2 || tile.value == 4);
    }

    assert_eq!(state.turn, Player::Green);
    assert_eq!(state.red_score, 0);
    assert_eq!(state.green_score, 0);
    assert!(!state.is_terminated());

    // Max tiles are bookkeeping of the move engine; they stay zero until
    // the first move recomputes them.
    assert_eq!(state.max_red, 0);
    assert_eq!(state.max_green, 0);
}

#[test]
fn test_turns_alternate_on_changing_moves() {
    let mut state = GameState::new(4, false, 11);
    let script = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    let mut mover = state.turn;
    for &direction in &script {
        if state.is_terminated() {
            break;
        }
        let before = state.turn;
        assert_eq!(before, mover);
        if state.apply_move(direction, false) {
            assert_ne!(state.turn, before);
            mover = state.turn;
        } else {
            assert_eq!(state.turn, before);
        }
    }
}

#[test]
fn test_merge_captures_opposing_tiles() {
    // Two RED tiles merge on GREEN's turn; the result belongs to GREEN.
    let mut state = blank(false, 3);
    put(&mut state, 0, 0, 4, Player::Red);
    put(&mut state, 0, 1, 4, Player::Red);

    assert!(state.apply_move(Direction::Up, false));

    let merged = state.grid.cell_content(Position::new(0, 0)).unwrap();
    assert_eq!(merged.value, 8);
    assert_eq!(merged.player, Player::Green);

    assert_eq!(state.green_score, 8);
    assert_eq!(state.green_score_change, 8);
    assert_eq!(state.red_score, 0);
    assert_eq!(state.red_score_change, 0);

    // The max tiles are recomputed from the grid: no red tiles remain.
    assert_eq!(state.max_green, 8);
    assert_eq!(state.max_red, 0);
}

#[test]
fn test_winning_merge_ends_the_game() {
    let mut state = blank(false, 21);
    put(&mut state, 1, 0, 1024, Player::Green);
    put(&mut state, 2, 0, 1024, Player::Red);

    assert!(state.apply_move(Direction::Right, false));

    assert!(state.won);
    assert_eq!(state.winner, Some(Winner::Green));
    assert!(state.is_terminated());

    let winning = state.grid.cell_content(Position::new(3, 0)).unwrap();
    assert_eq!(winning.value, 2048);
    assert_eq!(winning.player, Player::Green);

    // A terminated game rejects further moves and stays untouched.
    let frozen = state.save();
    for direction in Direction::ALL {
        assert!(!state.apply_move(direction, false));
    }
    assert_eq!(state.save(), frozen);
}

/// Fifteen tiles and one gap at (0, 0), arranged so an `Up` move fills the
/// board without creating any merge: the game ends by exhaustion.
///
/// Columns 1..4 hold an 8/16 checkerboard of RED tiles; column 0 carries
/// the tiles whose values and owners the caller picks (they slide up one
/// row, and the spawn lands at (0, 3) next to a 16 and a column-0 value,
/// matching neither).
fn exhaustion_board(
    column: [(u32, Player); 3],
    red_score: u32,
    green_score: u32,
) -> GameState {
    let mut state = blank(false, 17);
    for x in 1..4 {
        for y in 0..4 {
            let value = if (x + y) % 2 == 0 { 8 } else { 16 };
            put(&mut state, x, y, value, Player::Red);
        }
    }
    for (i, (value, player)) in column.into_iter().enumerate() {
        put(&mut state, 0, i + 1, value, player);
    }
    state.red_score = red_score;
    state.green_score = green_score;
    state
}

#[test]
fn test_exhaustion_winner_by_max_tile() {
    let mut state = exhaustion_board(
        [(128, Player::Green), (64, Player::Red), (32, Player::Red)],
        0,
        0,
    );
    assert!(state.apply_move(Direction::Up, false));

    assert!(state.over);
    assert!(!state.won);
    assert_eq!(state.winner, Some(Winner::Green));
    assert!(state.is_terminated());
}

#[test]
fn test_exhaustion_tied_max_falls_back_to_score() {
    // Both sides hold a 128: score decides.
    let mut green_ahead = exhaustion_board(
        [(128, Player::Green), (64, Player::Red), (128, Player::Red)],
        10,
        50,
    );
    assert!(green_ahead.apply_move(Direction::Up, false));
    assert_eq!(green_ahead.winner, Some(Winner::Green));

    let mut red_ahead = exhaustion_board(
        [(128, Player::Green), (64, Player::Red), (128, Player::Red)],
        50,
        10,
    );
    assert!(red_ahead.apply_move(Direction::Up, false));
    assert_eq!(red_ahead.winner, Some(Winner::Red));
}

#[test]
fn test_exhaustion_full_tie_is_a_draw() {
    let mut state = exhaustion_board(
        [(128, Player::Green), (64, Player::Red), (128, Player::Red)],
        25,
        25,
    );
    assert!(state.apply_move(Direction::Up, false));
    assert_eq!(state.winner, Some(Winner::Draw));
}

#[test]
fn test_save_resume_replays_identically() {
    let script = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    let mut original = GameState::new(4, false, 99);
    for &direction in &script[..3] {
        original.apply_move(direction, false);
    }

    let mut resumed = GameState::from_saved(&original.save());
    assert_eq!(resumed.save(), original.save());

    // Both halves see the same spawns from here on.
    for &direction in &script[3..] {
        let a = original.apply_move(direction, false);
        let b = resumed.apply_move(direction, false);
        assert_eq!(a, b);
    }
    assert_eq!(resumed.save(), original.save());
}

#[test]
fn test_no_op_move_changes_nothing() {
    let mut state = blank(false, 5);
    put(&mut state, 0, 0, 2, Player::Red);

    let before = state.save();
    assert!(!state.apply_move(Direction::Up, false));
    assert_eq!(state.save(), before);
    assert!(!state.apply_move(Direction::Left, false));
    assert_eq!(state.save(), before);

    // The turn did not pass either.
    assert_eq!(state.turn, Player::Green);
}

#[test]
fn test_bot_turn_guard_and_forced_override() {
    let mut state = GameState::new(4, true, 13);

    // GREEN opens; RED (the bot) is then gated against unforced input.
    let mut opened = false;
    for direction in Direction::ALL {
        if state.apply_move(direction, false) {
            opened = true;
            break;
        }
    }
    assert!(opened);
    assert!(state.is_bot_turn());

    let frozen = state.save();
    for direction in Direction::ALL {
        assert!(!state.apply_move(direction, false));
    }
    assert_eq!(state.save(), frozen);

    // Forced moves go through.
    let mut replied = false;
    for direction in Direction::ALL {
        if state.apply_move(direction, true) {
            replied = true;
            break;
        }
    }
    assert!(replied);
    assert_eq!(state.turn, Player::Green);
}
