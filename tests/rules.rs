use checkers::game::{ClickOutcome, GameInstance};
use checkers::movegen::available_moves;
use checkers::types::{Cell, Color, Placement, Setup};

fn cell(x: i32, y: i32) -> Cell {
    Cell::new(x, y).unwrap()
}

fn game_with(pieces: &[(i32, i32, Color)]) -> GameInstance {
    let pieces = pieces
        .iter()
        .map(|&(x, y, color)| Placement {
            x,
            y,
            color,
            promoted: false,
        })
        .collect();
    GameInstance::from_setup(&Setup { pieces }).unwrap()
}

#[test]
fn single_jump_scenario_removes_black_piece() {
    let mut game = game_with(&[
        (2, 3, Color::White),
        (3, 4, Color::Black),
        (6, 7, Color::Black),
    ]);
    let black_before = game.inventory().count(Color::Black);

    game.on_cell_clicked(2, 3);
    let state = game.to_game_state();
    assert_eq!(state.selected, Some(cell(2, 3)));
    assert!(state.destinations.contains(&cell(4, 5)));

    let outcome = game.on_cell_clicked(4, 5);

    assert!(matches!(outcome, ClickOutcome::Moved(record) if record.captured == Some(cell(3, 4))));
    assert!(game.board().piece_at(cell(3, 4)).is_none());
    assert_eq!(game.board().piece_at(cell(4, 5)).unwrap().position(), cell(4, 5));
    assert_eq!(game.inventory().count(Color::Black), black_before - 1);
    assert_eq!(game.inventory().count(Color::White), 1);
}

#[test]
fn promoted_white_piece_can_move_backwards() {
    let mut game = game_with(&[(3, 6, Color::White), (0, 1, Color::Black)]);

    game.on_cell_clicked(3, 6);
    game.on_cell_clicked(4, 7);

    let king = game.board().piece_at(cell(4, 7)).unwrap();
    assert!(king.is_promoted());
    let rows: Vec<u8> = available_moves(king, game.board())
        .iter()
        .map(|d| d.cell.y())
        .collect();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|&y| y == 6));
}

#[test]
fn white_exhausted_means_black_wins() {
    let mut game = game_with(&[(2, 1, Color::White), (4, 5, Color::Black)]);
    let script = [((2, 1), (3, 2)), ((4, 5), (5, 4)), ((3, 2), (4, 3))];
    for (from, to) in script {
        game.on_cell_clicked(from.0, from.1);
        assert!(matches!(game.on_cell_clicked(to.0, to.1), ClickOutcome::Moved(_)));
        assert_eq!(game.winner(), None);
    }

    game.on_cell_clicked(5, 4);
    let outcome = game.on_cell_clicked(3, 2);

    assert!(matches!(outcome, ClickOutcome::Moved(record) if record.captured == Some(cell(4, 3))));
    assert_eq!(game.inventory().count(Color::White), 0);
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(game.on_cell_clicked(3, 2), ClickOutcome::Ignored);
}

#[test]
fn game_state_serializes_for_the_renderer() {
    let game = GameInstance::new();

    let json = serde_json::to_value(game.to_game_state()).unwrap();

    assert_eq!(json["currentPlayer"], "white");
    assert_eq!(json["whiteCount"], 12);
    assert_eq!(json["cells"].as_array().unwrap().len(), 64);
    assert_eq!(json["cells"][1]["piece"]["color"], "white");
    assert!(json["winner"].is_null());
}

#[test]
fn every_reachable_piece_stays_on_its_cell() {
    let mut game = GameInstance::new();
    let script = [(1, 2), (2, 3), (4, 5), (3, 4), (2, 3), (4, 5)];

    for (x, y) in script {
        game.on_cell_clicked(x, y);
        for c in Cell::all() {
            if let Some(piece) = game.board().piece_at(c) {
                assert_eq!(piece.position(), c);
                assert!(c.is_dark());
            }
        }
    }
    assert_eq!(game.inventory().count(Color::Black), 11);
    assert_eq!(game.inventory().count(Color::White), 12);
}
