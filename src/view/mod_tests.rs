//! Tests for the TUI shell.

use super::*;
use crate::engine::ScrollPhase;
use ratatui::backend::TestBackend;

const SAMPLE: &str = "Hello world. This is a test.";

fn create_test_app(width: u16, height: u16, text: &str, duration: f64) -> TuiApp<TestBackend> {
    let config = ResolvedConfig::default();
    let session = build_session(text, &config, (width, height), duration).unwrap();
    let settings = ViewSettings::from_config(&config, PrompterStyles::default());
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    TuiApp::new_for_test(terminal, session, settings)
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Rows prefixed with their index so blank rows stay visible in snapshots.
fn screen(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            format!("{y:02}|{}", row.trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn tui_error_from_app_error() {
    let app_err = AppError::Timing(crate::model::TimingError::InvalidDuration(0.0));
    let tui_err: TuiError = app_err.into();
    assert!(matches!(tui_err, TuiError::App(_)));
}

#[test]
fn handle_key_q_returns_true() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    assert!(press(&mut app, KeyCode::Char('q')), "'q' should trigger quit");
}

#[test]
fn handle_key_esc_returns_true() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    assert!(press(&mut app, KeyCode::Esc), "Esc should trigger quit");
}

#[test]
fn handle_key_ctrl_c_returns_true() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key(key), "Ctrl+C should trigger quit");
}

#[test]
fn handle_key_other_returns_false() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    assert!(!press(&mut app, KeyCode::Char('a')));
    assert_eq!(app.session().state().phase(), ScrollPhase::Idle);
}

#[test]
fn handle_key_space_toggles_playback() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    assert_eq!(app.session().state().phase(), ScrollPhase::Idle);

    assert!(!press(&mut app, KeyCode::Char(' ')));
    assert_eq!(app.session().state().phase(), ScrollPhase::Scrolling);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.session().state().phase(), ScrollPhase::Idle);
}

#[test]
fn handle_key_m_toggles_mirror() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    assert!(!app.settings().mirror);
    assert!(!press(&mut app, KeyCode::Char('m')));
    assert!(app.settings().mirror);
    press(&mut app, KeyCode::Char('m'));
    assert!(!app.settings().mirror);
}

#[test]
fn tick_while_idle_does_not_scroll() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    let start = app.session().state().scroll_y();
    app.tick(1.0).unwrap();
    assert_eq!(app.session().state().scroll_y(), start);
    assert_eq!(app.session().played_seconds(), 0.0);
}

#[test]
fn tick_after_start_scrolls_at_planned_speed() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    let start = app.session().state().scroll_y();
    let speed = app.session().plan().pixels_per_second();

    press(&mut app, KeyCode::Char(' '));
    app.tick(0.5).unwrap();

    let moved = app.session().state().scroll_y() - start;
    assert!((moved - speed * 0.5).abs() < 1e-9);
    assert_eq!(app.session().played_seconds(), 0.5);
}

#[test]
fn resize_changes_focus_height_but_not_layout() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    let lines_before = app.session().layout().lines().to_vec();

    app.handle_resize(20, 30);

    assert_eq!(app.height, 30);
    assert_eq!(app.session().layout().lines(), lines_before.as_slice());
}

#[test]
fn resize_to_zero_height_is_ignored() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    app.handle_resize(40, 0);
    assert_eq!(app.height, 12);
}

#[test]
fn draw_renders_without_error() {
    let mut app = create_test_app(40, 12, SAMPLE, 10.0);
    assert!(app.draw().is_ok(), "Drawing should succeed");
}

#[test]
fn session_params_use_margins_spacing_and_lead_in() {
    let config = ResolvedConfig::default();
    let params = session_params(&config, (80, 24), 30.0);

    assert_eq!(params.max_width, 73.0);
    assert_eq!(params.line_height, 2.0);
    assert_eq!(params.total_duration_seconds, 30.0);
    assert_eq!(params.pause_duration_seconds, 0.8);
    assert!((params.focus_inset - 23.0 * 0.65).abs() < 1e-9);
}

#[test]
fn session_params_without_status_bar_use_full_height() {
    let config = ResolvedConfig {
        show_status: false,
        lead_in_ratio: 0.5,
        ..ResolvedConfig::default()
    };
    let params = session_params(&config, (80, 24), 30.0);
    assert_eq!(params.focus_inset, 12.0);
}

#[test]
fn session_params_keep_one_column_when_margins_exceed_width() {
    let config = ResolvedConfig {
        margin: 50,
        ..ResolvedConfig::default()
    };
    let params = session_params(&config, (80, 24), 30.0);
    assert_eq!(params.max_width, 2.0);
}

#[test]
fn build_session_wraps_to_terminal_width() {
    let session = build_session(SAMPLE, &ResolvedConfig::default(), (30, 8), 10.0).unwrap();
    let texts: Vec<&str> = session.layout().lines().iter().map(|l| l.text()).collect();
    assert_eq!(texts, vec!["Hello world. This is a", "test."]);
}

#[test]
fn build_session_rejects_zero_duration() {
    let err = build_session(SAMPLE, &ResolvedConfig::default(), (30, 8), 0.0).unwrap_err();
    assert!(matches!(err, AppError::Timing(_)));
}

fn file_input(name: &str, text: &str) -> (std::path::PathBuf, InputSource) {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, text).unwrap();
    let source = crate::source::detect_input_source(path.clone()).unwrap();
    (path, source)
}

#[test]
fn prepare_session_reads_source_and_plans() {
    let (path, source) = file_input("tprompt_view_prepare.txt", SAMPLE);
    let result = prepare_session(source, &ResolvedConfig::default(), (30, 8), 10.0);
    let _ = std::fs::remove_file(&path);

    let (loaded, session) = result.unwrap();
    assert_eq!(loaded.text, SAMPLE);
    assert_eq!(session.layout().lines().len(), 2);
}

#[test]
fn prepare_session_reports_empty_source_as_input_error() {
    let (path, source) = file_input("tprompt_view_prepare_empty.txt", "");
    let result = prepare_session(source, &ResolvedConfig::default(), (30, 8), 10.0);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        result,
        Err(AppError::Input(crate::model::InputError::Empty { .. }))
    ));
}

#[test]
fn frame_interval_divides_one_second() {
    assert_eq!(frame_interval(50), Duration::from_millis(20));
    assert_eq!(frame_interval(0), Duration::from_secs(1));
}

#[test]
fn initial_frame_snapshot() {
    let mut app = create_test_app(30, 8, SAMPLE, 10.0);
    app.draw().unwrap();

    insta::assert_snapshot!(screen(&app), @r"
    00|
    01|
    02|━━                          ━━
    03|
    04|    Hello world. This is a
    05|
    06|    test.
    07| READY  00:00 / 00:10  Space s
    ");
}

#[test]
fn mirrored_frame_snapshot() {
    let mut app = create_test_app(30, 8, SAMPLE, 10.0);
    press(&mut app, KeyCode::Char('m'));
    app.draw().unwrap();

    insta::assert_snapshot!(screen(&app), @r"
    00|
    01|
    02|━━                          ━━
    03|
    04|    a si sihT .dlrow olleH
    05|
    06|                     .tset
    07| READY  00:00 / 00:10  MIRROR
    ");
}
