//! Session tests - inputs, gravity timing, levels and the terminal labels

use blockfall::core::{RenderSink, Sequence, SurfaceConfig, TickOutcome};
use blockfall::engine::{Session, SessionStatus};
use blockfall::term::{Canvas, Labels};
use blockfall::types::{Color, Command, Input, PieceKind, ProgressField, COLS};

fn o_session() -> Session<Labels, Sequence> {
    Session::new(Sequence::new([PieceKind::O]), Labels::default())
}

fn labels(session: &Session<Labels, Sequence>) -> (u32, u32, u32) {
    let l = session.progress().reporter();
    (
        l.get(ProgressField::Score),
        l.get(ProgressField::Level),
        l.get(ProgressField::Lines),
    )
}

#[test]
fn test_new_session_reports_zeroed_progress() {
    let s = o_session();
    assert_eq!(s.status(), SessionStatus::Running);
    assert_eq!(labels(&s), (0, 0, 0));
}

#[test]
fn test_labels_follow_drop_rewards() {
    let mut s = o_session();
    s.handle(Input::Move(Command::Down));
    s.handle(Input::Move(Command::Down));
    assert_eq!(labels(&s).0, 2);

    // From y = 2 the O falls 16 rows to rest on the floor.
    s.handle(Input::Move(Command::HardDrop));
    assert_eq!(labels(&s).0, 2 + 32);
}

#[test]
fn test_hard_drop_locks_on_next_tick() {
    let mut s = o_session();
    s.handle(Input::Move(Command::HardDrop));
    assert_eq!(s.board().current().y(), 18);
    assert!(matches!(s.tick(), TickOutcome::Locked(_)));
    assert_eq!(s.board().cell(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(s.board().current().y(), 0);
}

#[test]
fn test_gravity_follows_elapsed_time() {
    let mut s = o_session();
    for _ in 0..50 {
        assert_eq!(s.advance(16), None);
    }
    // 50 * 16 = 800, which is not strictly more than 800.
    assert_eq!(s.board().current().y(), 0);
    assert_eq!(s.advance(16), Some(TickOutcome::Fell));
    assert_eq!(s.board().current().y(), 1);
}

#[test]
fn test_ten_lines_speed_up_the_fall() {
    let mut s = o_session();
    let board = s.board_mut();
    for y in 10..20 {
        for x in 0..COLS as i8 {
            if y >= 12 || !(4..=5).contains(&x) {
                board.set_cell(x, y, Some(PieceKind::L));
            }
        }
    }

    s.handle(Input::Move(Command::HardDrop));
    assert_eq!(s.board().current().y(), 10);
    let outcome = s.tick();
    assert_eq!(outcome.line_clear().map(|c| c.lines), Some(10));

    assert_eq!(s.progress().level(), 1);
    assert_eq!(s.progress().lines(), 0);
    assert_eq!(s.fall_interval_ms(), 720);
    let (_, level, lines) = labels(&s);
    assert_eq!((level, lines), (1, 0));
    assert!(s.board().rows().iter().flatten().all(|c| c.is_none()));
}

#[test]
fn test_top_out_then_restart() {
    let mut s = o_session();
    s.board_mut().set_cell(4, 2, Some(PieceKind::T));
    s.handle(Input::Move(Command::Down));
    assert_eq!(labels(&s).0, 0, "blocked soft drop earns nothing");

    assert!(s.tick().is_game_over());
    assert_eq!(s.status(), SessionStatus::Over);
    assert_eq!(s.advance(10_000), None);
    assert!(!s.handle(Input::Move(Command::Left)));

    assert!(s.handle(Input::Restart));
    assert_eq!(s.status(), SessionStatus::Running);
    assert!(s.board().rows().iter().flatten().all(|c| c.is_none()));
    assert_eq!(labels(&s), (0, 0, 0));
    assert_eq!(s.fall_interval_ms(), 800);
}

#[test]
fn test_render_paints_board_and_preview() {
    let s = Session::new(
        Sequence::new([PieceKind::T, PieceKind::I]),
        Labels::default(),
    );
    let mut board = Canvas::default();
    s.board().initialize(&mut board);
    let mut preview = Canvas::with_config(SurfaceConfig::PREVIEW);

    board.fill_cell(Color::Red, 9, 19);
    s.render(&mut board, &mut preview);

    assert_eq!(board.cols(), 10);
    assert_eq!(board.rows(), 20);
    // Stale paint is cleared.
    assert_eq!(board.get(9, 19), None);
    assert_eq!(board.get(4, 0), Some(Color::Purple));
    assert_eq!(board.get(3, 1), Some(Color::Purple));

    // The next piece (I) sits at the preview origin.
    assert_eq!((0..4).filter_map(|x| preview.get(x, 1)).count(), 4);
    assert_eq!(preview.get(0, 1), Some(Color::Cyan));
}
