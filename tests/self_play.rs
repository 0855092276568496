use ttt_minimax::{
    Action, Board, Cell, Minimax, Outcome, Player, TicTacToeBoard, apply_action, initial_state,
    is_terminal, optimal_action, outcome, scored_actions,
};

const E: Cell = Cell::Empty;
const X: Cell = Cell::Mark(Player::X);
const O: Cell = Cell::Mark(Player::O);

#[test]
fn seeded_self_play_always_draws() {
    for seed in [1, 42, 3819201] {
        // arrange
        let mut minimax = Minimax::builder().with_seed(seed).build();
        let mut board = initial_state();

        // act
        while let Some(action) = minimax.optimal_action(&board).unwrap() {
            board = apply_action(&board, action).unwrap();
        }

        // assert
        assert!(is_terminal(&board));
        assert_eq!(outcome(&board), Outcome::Drawn, "seed {seed}:\n{board}");
    }
}

#[test]
fn opening_moves_come_from_the_optimal_set() {
    let board = initial_state();
    let optimal: Vec<Action> = scored_actions(&board)
        .unwrap()
        .into_iter()
        .filter(|&(_, v)| v == 0)
        .map(|(a, _)| a)
        .collect();

    let mut minimax = Minimax::builder().with_seed(11).build();
    let decision = minimax.decide(&board).unwrap().unwrap();
    assert_eq!(decision.value, 0);
    assert_eq!(decision.candidates, optimal);
    assert!(optimal.contains(&decision.action));

    let mut seen = Vec::new();
    for _ in 0..50 {
        let action = optimal_action(&board).unwrap().unwrap();
        assert!(optimal.contains(&action), "{action:?} is not optimal");
        if !seen.contains(&action) {
            seen.push(action);
        }
    }
    // Ties are broken uniformly over nine cells, so fifty draws spread out.
    assert!(seen.len() > 1);
}

#[test]
fn same_seed_same_game() {
    let play = |seed| {
        let mut minimax = Minimax::builder().with_seed(seed).build();
        let mut board = initial_state();
        let mut moves = Vec::new();
        // Start from a fixed two-move opening to keep the tree small.
        for action in [Action::new(1, 1), Action::new(0, 0)] {
            board = apply_action(&board, action).unwrap();
        }
        while let Some(action) = minimax.optimal_action(&board).unwrap() {
            moves.push(action);
            board = apply_action(&board, action).unwrap();
        }
        moves
    };
    assert_eq!(play(5), play(5));
}

#[test]
fn engine_wins_against_a_blunder() {
    // Both sides threaten a row; X moves first and completes the top one.
    let board = TicTacToeBoard::from_cells([[X, X, E], [O, O, E], [X, O, E]]).unwrap();
    for _ in 0..10 {
        let decision = Minimax::builder().build().decide(&board).unwrap().unwrap();
        assert_eq!(decision.action, Action::new(0, 2));
        assert_eq!(decision.value, 1);
    }
    let won = apply_action(&board, Action::new(0, 2)).unwrap();
    assert_eq!(won.outcome(), Outcome::Won(Player::X));
    assert_eq!(optimal_action(&won).unwrap(), None);
}
