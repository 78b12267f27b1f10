use crossterm::event::KeyEventState;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::Color;

use super::*;

fn inline(texts: &[&str]) -> ItemSource {
    ItemSource::Inline(texts.iter().map(|t| t.to_string()).collect())
}

fn make_app(texts: &[&str]) -> App {
    App::new(&AppConfig::default(), inline(texts)).unwrap()
}

fn press(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> AppEvent {
    AppEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn draw(app: &mut App, terminal: &mut Terminal<TestBackend>) -> Buffer {
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn quit_key_stops_app() {
    let mut app = make_app(&["a"]);
    app.handle_event(press(KeyCode::Char('q')));
    assert!(!app.running);
}

#[test]
fn ctrl_c_always_quits() {
    let mut app = make_app(&["a"]);
    app.handle_event(AppEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!app.running);
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app(&["a"]);
    let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    key.state = KeyEventState::NONE;
    app.handle_event(AppEvent::Key(key));
    assert!(app.running);
}

#[test]
fn mouse_click_selects_row() {
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    let mut app = make_app(&["a", "b"]);
    draw(&mut app, &mut terminal);

    app.handle_event(click(4, 2));
    let buf = draw(&mut app, &mut terminal);

    assert_eq!(app.list.selected(), Some(1));
    assert_eq!(buf[(3, 1)].bg, Color::Red);
    assert_eq!(buf[(3, 2)].bg, Color::Green);
}

#[test]
fn mouse_disabled_ignores_clicks() {
    let mut config = AppConfig::default();
    config.general.mouse = false;
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    let mut app = App::new(&config, inline(&["a", "b"])).unwrap();
    draw(&mut app, &mut terminal);

    app.handle_event(click(4, 2));
    assert_eq!(app.list.selected(), None);
    assert!(!app.mouse_enabled());
}

#[test]
fn keyboard_moves_focus_and_activates() {
    let mut app = make_app(&["a", "b", "c"]);
    app.handle_event(press(KeyCode::Down));
    app.handle_event(press(KeyCode::Down));
    app.handle_event(press(KeyCode::Up));
    assert_eq!(app.list.selected(), None);

    app.handle_event(press(KeyCode::Enter));
    assert_eq!(app.list.selected(), Some(1));
}

#[test]
fn reload_replaces_reference_and_clears_selection() {
    let mut app = make_app(&["a", "b"]);
    app.handle_event(press(KeyCode::Enter));
    assert_eq!(app.list.selected(), Some(0));

    app.handle_event(press(KeyCode::Char('r')));
    assert_eq!(app.list.selected(), None);
    assert_eq!(app.list.items().len(), 2);
}

#[test]
fn failed_reload_keeps_items_and_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, r#"[{"text":"a"},{"text":"b"}]"#).unwrap();

    let mut app = App::new(&AppConfig::default(), ItemSource::File(path.clone())).unwrap();
    app.handle_event(press(KeyCode::Enter));
    std::fs::write(&path, r#"[{"label":"a"}]"#).unwrap();
    app.handle_event(press(KeyCode::Char('r')));

    assert_eq!(app.list.selected(), Some(0));
    assert_eq!(app.list.items().len(), 2);
}

#[test]
fn absent_items_render_without_error() {
    let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
    let mut app = App::new(&AppConfig::default(), ItemSource::Absent).unwrap();
    let buf = draw(&mut app, &mut terminal);

    let text: String = (0..buf.area.width).map(|x| buf[(x, 1)].symbol().to_string()).collect();
    assert!(text.contains("No items"));
    app.handle_event(press(KeyCode::Enter));
    assert_eq!(app.list.selected(), None);
}

#[test]
fn invalid_items_fail_at_startup() {
    let source = ItemSource::Json { origin: "stdin".into(), contents: r#"[{}]"#.into() };
    let err = App::new(&AppConfig::default(), source).err().unwrap();
    assert!(err.to_string().contains("stdin"));
}

#[test]
fn zero_tick_rate_config_yields_nonzero_interval() {
    let mut config = AppConfig::default();
    config.general.tick_rate_ms = 0;
    let app = App::new(&config, inline(&["a"])).unwrap();
    assert!(!app.tick_rate.is_zero());
}

#[tokio::test]
async fn event_handler_survives_zero_tick_config() {
    let mut config = AppConfig::default();
    config.general.tick_rate_ms = 0;
    let app = App::new(&config, inline(&["a"])).unwrap();
    let mut events = EventHandler::new(app.tick_rate);
    assert!(matches!(events.next().await.unwrap(), AppEvent::Tick));
}
