use tui_blockfall::core::{GameSnapshot, GameState, SequenceSource};
use tui_blockfall::term::{render_ascii, FrameBuffer, GameView, Viewport};
use tui_blockfall::types::PieceKind;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_walls_and_floor() {
    let snap = GameState::new(SequenceSource::repeat(PieceKind::O)).snapshot();
    let view = GameView::default();

    // board pixels = 10*2 by 17*1 => 20x17, plus walls and floor => 22x18
    let fb = view.render(&snap, Viewport::new(22, 18));

    for y in 0..17 {
        assert_eq!(fb.get(0, y).unwrap().ch, '│');
        assert_eq!(fb.get(21, y).unwrap().ch, '│');
    }
    assert_eq!(fb.get(0, 17).unwrap().ch, '└');
    assert_eq!(fb.get(21, 17).unwrap().ch, '┘');
    for x in 1..21 {
        assert_eq!(fb.get(x, 17).unwrap().ch, '─');
    }
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[16][0] = PieceKind::I.to_u8();

    let fb = GameView::default().render(&snap, Viewport::new(22, 18));

    // Inside the left wall: (1, 0) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 16).unwrap().ch, '█');
    assert_eq!(fb.get(2, 16).unwrap().ch, '█');
    assert_eq!(fb.get(3, 16).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_active_piece() {
    let snap = GameState::new(SequenceSource::repeat(PieceKind::O)).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 18));

    // O spawns at x=4: terminal columns 1 + 4*2 ..= 1 + 6*2 - 1.
    for x in 9..13 {
        assert_eq!(fb.get(x, 0).unwrap().ch, '█');
        assert_eq!(fb.get(x, 1).unwrap().ch, '█');
    }
    assert_eq!(fb.get(8, 0).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameSnapshot::default();
    snap.score = 1200;
    snap.lines = 12;

    let fb = GameView::default().render(&snap, Viewport::new(60, 18));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1200"));
    assert!(all.contains("LINES"));
    assert!(all.contains("12"));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let mut snap = GameSnapshot::default();
    snap.score = 1200;

    let fb = GameView::default().render(&snap, Viewport::new(22, 18));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let snap = GameSnapshot {
        game_over: true,
        ..GameSnapshot::default()
    };

    let fb = GameView::default().render(&snap, Viewport::new(22, 18));
    assert!(screen_text(&fb).contains("GAME OVER"));

    let running = GameView::default().render(&GameSnapshot::default(), Viewport::new(22, 18));
    assert!(!screen_text(&running).contains("GAME OVER"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let snap = GameState::new(SequenceSource::repeat(PieceKind::T)).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 3);
}

#[test]
fn ascii_frame_draws_active_and_locked_blocks() {
    let mut snap = GameState::new(SequenceSource::repeat(PieceKind::O)).snapshot();
    snap.board[16][9] = PieceKind::Z.to_u8();
    snap.score = 300;

    let text = render_ascii(&snap);
    let lines: Vec<&str> = text.lines().collect();

    // Each cell is followed by a space; the left wall takes the first two chars.
    assert_eq!(lines[0], "|         # #         | ");
    assert_eq!(lines[1], "|         # #         | ");
    assert_eq!(lines[16], "|                   # | ");
    assert_eq!(lines[17], "- ".repeat(12));
    assert_eq!(lines[18], "Score: 300");
    assert_eq!(lines.len(), 19);
}

#[test]
fn ascii_frame_reports_game_over() {
    let snap = GameSnapshot {
        score: 700,
        game_over: true,
        ..GameSnapshot::default()
    };

    let text = render_ascii(&snap);
    assert!(text.ends_with("Score: 700\nGame Over!\n"));
}
