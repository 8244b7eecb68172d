//! Tests for the game controller session flow.

use mnk_engine::{GameState, Player, Position};
use mnk_game::{DRAW_ANNOUNCEMENT, GameConfig, GameController, ViewEvent};

fn prompt(text: &str) -> ViewEvent {
    ViewEvent::Prompt {
        text: text.to_string(),
    }
}

fn prompts(events: &[ViewEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            ViewEvent::Prompt { text } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn click(controller: &mut GameController, row: usize, column: usize) -> Vec<ViewEvent> {
    controller.handle_cell_activation(Position::new(row, column))
}

#[test]
fn test_default_deployment_board() {
    let (controller, events) = GameController::start(&GameConfig::default()).unwrap();
    let board = controller.board();
    assert_eq!((board.rows(), board.columns(), board.win_length()), (6, 6, 4));
    assert_eq!(events, vec![prompt("Click on any cell to put X")]);
}

#[test]
fn test_onboarding_sequence_then_silence() {
    let (mut controller, _) = GameController::start(&GameConfig::default()).unwrap();

    let hints: Vec<Vec<String>> = [(0, 0), (5, 5), (0, 5), (5, 0), (2, 2), (3, 3)]
        .into_iter()
        .map(|(row, column)| prompts(&click(&mut controller, row, column)))
        .collect();

    let expected: Vec<Vec<String>> = vec![
        vec!["Now you are playing for O".to_string()],
        vec!["Try to get 4 in a row".to_string()],
        vec!["Good luck!".to_string()],
        vec![String::new()],
        vec![],
        vec![],
    ];
    assert_eq!(hints, expected);
    assert!(controller.onboarding().is_passed());
}

#[test]
fn test_onboarding_is_not_repeated_after_reset() {
    let (mut controller, _) = GameController::start(&GameConfig::default()).unwrap();
    for (row, column) in [(0, 0), (5, 5), (0, 5), (5, 0)] {
        click(&mut controller, row, column);
    }
    controller.reset();

    let events = click(&mut controller, 1, 1);
    assert!(prompts(&events).is_empty());
}

#[test]
fn test_activation_after_win_starts_new_game() {
    let config = GameConfig::default()
        .with_rows(3)
        .with_columns(3)
        .with_win_length(Some(3));
    let (mut controller, _) = GameController::start(&config).unwrap();

    for (row, column) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
        click(&mut controller, row, column);
    }
    assert_eq!(controller.board().state(), GameState::Won(Player::X));
    let line = &controller.board().winning_lines()[0];
    assert_eq!(line.first(), Position::new(0, 0));
    assert_eq!(line.last(), Position::new(2, 2));

    let events = click(&mut controller, 1, 1);
    assert_eq!(events, vec![prompt(""), ViewEvent::BoardReset]);
    assert_eq!(controller.board().state(), GameState::InProgress);
    assert_eq!(controller.board().active_player(), Player::X);

    // The next activation is a normal move again.
    let events = click(&mut controller, 1, 1);
    assert_eq!(
        events[0],
        ViewEvent::CellOpened {
            position: Position::new(1, 1),
            owner: Player::X,
        }
    );
}

#[test]
fn test_draw_on_wide_board_then_reset() {
    // X O X
    // O O X
    let config = GameConfig::default()
        .with_rows(2)
        .with_columns(3)
        .with_win_length(Some(3))
        .with_onboarding(false);
    let (mut controller, opening) = GameController::start(&config).unwrap();
    assert!(opening.is_empty());

    let mut last = Vec::new();
    for (row, column) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (1, 1)] {
        last = click(&mut controller, row, column);
    }
    assert_eq!(controller.board().state(), GameState::Draw);
    assert_eq!(
        last.last(),
        Some(&ViewEvent::Announcement {
            text: DRAW_ANNOUNCEMENT.to_string()
        })
    );

    let events = click(&mut controller, 0, 0);
    assert_eq!(events, vec![prompt(""), ViewEvent::BoardReset]);
}

#[test]
fn test_simultaneous_lines_are_all_reported() {
    let config = GameConfig::default()
        .with_rows(3)
        .with_columns(3)
        .with_win_length(Some(3))
        .with_onboarding(false);
    let (mut controller, _) = GameController::start(&config).unwrap();

    let moves = [(0, 2), (1, 0), (1, 2), (1, 1), (2, 0), (0, 0), (2, 1), (0, 1)];
    for (row, column) in moves {
        click(&mut controller, row, column);
    }
    let events = click(&mut controller, 2, 2);

    let ViewEvent::WinningLines { lines } = &events[1] else {
        panic!("expected winning lines, got {:?}", events[1]);
    };
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.contains(Position::new(2, 2))));
    assert_eq!(
        events[2],
        ViewEvent::Announcement {
            text: "X won!".to_string()
        }
    );
}
