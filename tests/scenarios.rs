//! End-to-end games driven through `Session`, covering the fixed scenarios
//! the game must reproduce exactly.

use connect_four::error::GameError;
use connect_four::game::{
    check_for_win, Cell, GameOutcome, Move, MoveResult, Player, Position, Session, SessionStatus,
};

fn play_all(session: &mut Session, columns: &[usize]) -> Vec<MoveResult> {
    columns
        .iter()
        .map(|&col| session.column_selected(col).unwrap())
        .collect()
}

#[test]
fn vertical_win_in_first_column() {
    let mut session = Session::new(6, 7).unwrap();
    // Player 1 stacks column 0, Player 2 plays elsewhere
    let results = play_all(&mut session, &[0, 3, 0, 4, 0, 3, 0]);

    assert!(results[..6]
        .iter()
        .all(|r| matches!(r, MoveResult::Dropped(_))));
    assert_eq!(
        results[6],
        MoveResult::Ended(
            Move {
                column: 0,
                row: 2,
                player: Player::One,
                sequence: 7,
            },
            GameOutcome::Win(Player::One)
        )
    );

    let mut line = session.winning_line().unwrap().to_vec();
    line.sort_by_key(|p| std::cmp::Reverse(p.row));
    assert_eq!(
        line,
        vec![
            Position::new(5, 0),
            Position::new(4, 0),
            Position::new(3, 0),
            Position::new(2, 0),
        ]
    );
}

#[test]
fn four_by_four_fill_is_a_draw_on_last_drop() {
    let mut session = Session::new(4, 4).unwrap();
    let columns = [2, 0, 0, 2, 3, 1, 1, 3, 2, 0, 0, 2, 3, 1, 1, 3];
    let results = play_all(&mut session, &columns);

    assert!(results[..15]
        .iter()
        .all(|r| matches!(r, MoveResult::Dropped(_))));
    assert!(matches!(results[15], MoveResult::Ended(mv, GameOutcome::Draw) if mv.sequence == 16));
    assert_eq!(session.status(), SessionStatus::Draw);
}

#[test]
fn six_by_seven_draw_exactly_at_move_42() {
    let columns = [
        2, 0, 2, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 1, 4, 2, 2, 3, 2, 3, 3, 3, 3, 6, 3, 6, 4, 4, 4,
        4, 5, 4, 5, 5, 5, 5, 6, 6, 6, 5, 6,
    ];
    let mut session = Session::new(6, 7).unwrap();

    for (i, &col) in columns.iter().enumerate() {
        let result = session.column_selected(col).unwrap();
        if i + 1 < columns.len() {
            assert!(
                matches!(result, MoveResult::Dropped(_)),
                "game ended early at move {}: {result:?}",
                i + 1
            );
        } else {
            assert!(matches!(result, MoveResult::Ended(mv, GameOutcome::Draw) if mv.sequence == 42));
        }
    }
    assert!(session.state().is_board_full());
    assert_eq!(session.column_selected(0), Err(GameError::GameOver));
}

#[test]
fn diagonal_down_right_win_is_detected() {
    let mut session = Session::new(6, 7).unwrap();
    // Build (5,4) (4,3) (3,2) (2,1) for Player 1 with Player 2 filling beneath
    let columns = [
        4, // P1 (5,4)
        3, // P2 (5,3)
        3, // P1 (4,3)
        2, // P2 (5,2)
        6, // P1 (5,6)
        2, // P2 (4,2)
        2, // P1 (3,2)
        1, // P2 (5,1)
        1, // P1 (4,1)
        1, // P2 (3,1)
        1, // P1 (2,1)
    ];
    let results = play_all(&mut session, &columns);

    assert_eq!(
        results.last().copied(),
        Some(MoveResult::Ended(
            Move {
                column: 1,
                row: 2,
                player: Player::One,
                sequence: 11,
            },
            GameOutcome::Win(Player::One)
        ))
    );
    assert_eq!(
        session.winning_line(),
        Some([
            Position::new(2, 1),
            Position::new(3, 2),
            Position::new(4, 3),
            Position::new(5, 4),
        ])
    );
}

#[test]
fn last_piece_that_fills_and_wins_reports_draw() {
    let mut session = Session::new(4, 3).unwrap();
    let results = play_all(&mut session, &[0, 2, 0, 2, 1, 2, 1, 0, 0, 1, 1, 2]);

    assert!(check_for_win(session.state().grid(), Player::Two));
    assert!(matches!(results.last(), Some(MoveResult::Ended(_, GameOutcome::Draw))));
    assert_eq!(session.outcome(), Some(GameOutcome::Draw));
    assert_eq!(session.winning_line(), None);
}

#[test]
fn boards_too_small_to_win_end_in_draw() {
    let mut session = Session::new(3, 3).unwrap();
    let results = play_all(&mut session, &[0, 0, 0, 1, 1, 1, 2, 2, 2]);
    assert!(matches!(results.last(), Some(MoveResult::Ended(_, GameOutcome::Draw))));
}

#[test]
fn new_game_after_each_kind_of_ending() {
    let mut session = Session::new(6, 7).unwrap();

    // Mid-game
    play_all(&mut session, &[3, 3, 4]);
    session.new_game(6, 7).unwrap();
    assert_eq!(session.state().piece_count(), 0);

    // Won
    play_all(&mut session, &[0, 1, 0, 1, 0, 1, 0]);
    assert_eq!(session.status(), SessionStatus::Won(Player::One));
    session.new_game(6, 7).unwrap();
    assert_eq!(session.status(), SessionStatus::InProgress);

    // Drawn
    session.new_game(1, 1).unwrap();
    play_all(&mut session, &[0]);
    assert_eq!(session.status(), SessionStatus::Draw);
    session.new_game(6, 7).unwrap();

    assert_eq!(session.status(), SessionStatus::InProgress);
    assert_eq!(session.state().current_player(), Player::One);
    let grid = session.state().grid();
    for row in 0..grid.height() {
        assert!(grid.row(row).iter().all(|&c| c == Cell::Empty));
    }
}
