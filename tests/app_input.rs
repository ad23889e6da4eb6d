mod common;

use common::RecordingSink;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use portswitch::service::{Completion, ServiceError, SwitchCommand};
use portswitch::switch::PortRole;
use portswitch::ui::app::{App, Cursor};
use portswitch::ui::input::handle_key;
use portswitch::ui::render::draw;
use portswitch::ui::selection::{SelectionController, SelectionPhase};
use portswitch::ui::theme::CONTROL_DISABLED;
use ratatui::backend::TestBackend;
use ratatui::style::Color;
use ratatui::Terminal;

fn make_app() -> App<RecordingSink> {
    let controller = SelectionController::new(common::default_view(), RecordingSink::default());
    App::new(controller, 8)
}

fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn press_all(app: &mut App<RecordingSink>, codes: &[KeyCode]) {
    for &code in codes {
        handle_key(app, press_key(code));
    }
}

fn render(app: &App<RecordingSink>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// -- Cursor movement ----------------------------------------------------------

#[test]
fn test_cursor_starts_on_first_ingress() {
    let app = make_app();
    assert_eq!(app.cursor(), Cursor::default());
    assert_eq!(app.cursor().role, PortRole::Ingress);
    assert_eq!(app.cursor().port, 1);
}

#[test]
fn test_arrows_move_within_grid() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Down]);
    assert_eq!(app.cursor().port, 11);

    press_all(&mut app, &[KeyCode::Left, KeyCode::Up]);
    assert_eq!(app.cursor().port, 2);
}

#[test]
fn test_cursor_clamps_at_edges() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Left, KeyCode::Up]);
    assert_eq!(app.cursor().port, 1);

    for _ in 0..20 {
        press_all(&mut app, &[KeyCode::Right, KeyCode::Down]);
    }
    assert_eq!(app.cursor().port, 32);
}

#[test]
fn test_tab_switches_grid() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Right, KeyCode::Tab]);
    assert_eq!(app.cursor().role, PortRole::Egress);
    assert_eq!(app.cursor().port, 2);

    press_all(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.cursor().role, PortRole::Ingress);
}

// -- Selection and commands ---------------------------------------------------

#[test]
fn test_enter_selects_port_under_cursor() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Right, KeyCode::Enter]);
    assert_eq!(
        app.controller().phase(),
        SelectionPhase::BothSelected {
            ingress: 2,
            egress: 5,
            readiness: portswitch::ui::selection::Readiness::ReadyToDisconnect,
        }
    );

    press_all(&mut app, &[KeyCode::Char(' ')]);
    assert_eq!(app.controller().phase(), SelectionPhase::NoneSelected);
}

#[test]
fn test_connect_key_issues_command() {
    let mut app = make_app();
    // Ingress 7, then egress 9.
    for _ in 0..6 {
        handle_key(&mut app, press_key(KeyCode::Right));
    }
    // Row edges clamp, so reach egress 9 from the row below.
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Tab, KeyCode::Down]);
    assert_eq!(app.cursor().port, 15);
    for _ in 0..6 {
        handle_key(&mut app, press_key(KeyCode::Left));
    }
    assert_eq!(app.cursor().port, 9);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Char('c')]);

    assert_eq!(
        app.controller().sink().commands(),
        vec![SwitchCommand::Connect { ingress: 7, egress: 9 }]
    );
    assert!(app.controller().is_busy());
}

#[test]
fn test_disconnect_all_key_issues_command() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Char('a'), KeyCode::Char('a')]);
    assert_eq!(
        app.controller().sink().commands(),
        vec![SwitchCommand::DisconnectAll]
    );
}

#[test]
fn test_disconnect_key_without_selection_does_nothing() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Char('d')]);
    assert!(app.controller().sink().commands().is_empty());
}

// -- Error popup --------------------------------------------------------------

fn fail_pending(app: &mut App<RecordingSink>) {
    let command = app.controller().state().pending.expect("pending");
    app.on_completion(Completion {
        command,
        outcome: Err(ServiceError::Fault {
            message: "switch did not acknowledge".into(),
        }),
        snapshot: common::default_view(),
    });
}

#[test]
fn test_error_popup_is_modal() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Char('a')]);
    fail_pending(&mut app);
    assert!(app.show_error_popup());

    // Keys other than Esc/Enter are swallowed.
    press_all(&mut app, &[KeyCode::Right, KeyCode::Char('q')]);
    assert_eq!(app.cursor().port, 1);
    assert!(!app.should_quit());

    press_all(&mut app, &[KeyCode::Esc]);
    assert!(!app.show_error_popup());
    assert!(!app.should_quit());
}

#[test]
fn test_quit_keys() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());

    let mut app = make_app();
    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_release_events_are_ignored() {
    let mut app = make_app();
    handle_key(
        &mut app,
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        },
    );
    assert!(!app.should_quit());
}

// -- Hover highlight ----------------------------------------------------------

#[test]
fn test_hover_highlights_connected_pair() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Right]);
    assert!(app.is_highlighted(PortRole::Ingress, 2));
    assert!(app.is_highlighted(PortRole::Egress, 5));
    assert!(!app.is_highlighted(PortRole::Egress, 2));

    press_all(&mut app, &[KeyCode::Right]);
    assert!(!app.is_highlighted(PortRole::Ingress, 3));
}

#[test]
fn test_grid_rows_follow_layout_width() {
    let app = make_app();
    assert_eq!(app.grid_rows(PortRole::Ingress), 4);
    assert_eq!(app.grid_rows(PortRole::Egress), 8);
}

// -- Rendering ----------------------------------------------------------------

#[test]
fn test_render_shows_grids_and_controls() {
    let app = make_app();
    let screen = render(&app);
    assert!(screen.contains("Ingress"));
    assert!(screen.contains("Egress"));
    assert!(screen.contains("Connections 4"));
    assert!(screen.contains("[ Disconnect All ]"));
    assert!(screen.contains(" 64 "));
}

#[test]
fn test_render_shows_working_and_error() {
    let mut app = make_app();
    press_all(&mut app, &[KeyCode::Char('a')]);
    assert!(render(&app).contains("Working: disconnect all"));

    fail_pending(&mut app);
    let screen = render(&app);
    assert!(screen.contains("Server Error"));
    assert!(!screen.contains("Working:"));
}

fn footer_hint_color(app: &App<RecordingSink>, label: &str) -> Color {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();

    // Footer text sits on the row above its bottom border.
    let y = buffer.area.height - 2;
    let row: Vec<String> = (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect();
    let first = label.chars().next().expect("label").to_string();
    let x = (0..row.len())
        .find(|&x| {
            row[x] == first
                && label
                    .chars()
                    .enumerate()
                    .all(|(i, ch)| row.get(x + i).is_some_and(|s| s == &ch.to_string()))
        })
        .expect("hint rendered");
    buffer[(x as u16, y)].fg
}

#[test]
fn test_footer_dims_control_hints_while_busy() {
    let mut app = make_app();
    assert_ne!(footer_hint_color(&app, "a: Disconnect All"), CONTROL_DISABLED);
    assert_eq!(footer_hint_color(&app, "c: Connect"), CONTROL_DISABLED);

    press_all(&mut app, &[KeyCode::Char('a')]);
    assert_eq!(footer_hint_color(&app, "a: Disconnect All"), CONTROL_DISABLED);
    assert_ne!(footer_hint_color(&app, "q: Quit"), CONTROL_DISABLED);
}
