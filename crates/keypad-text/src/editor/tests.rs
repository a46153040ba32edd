use super::*;
use crate::{
    input::{KeyEvent, KeyEvent::Digit as D, MockInput, code},
    measure::MonospaceMetrics,
};

type TestEditor = EditorApp<MockInput<32>, MonospaceMetrics>;

fn make_app(config: EditorConfig) -> TestEditor {
    EditorApp::new(
        MockInput::new(),
        MonospaceMetrics::FONT_6X13,
        config,
        "T9 EDITOR",
    )
}

fn frame(app: &mut TestEditor, now_ms: u64, events: &[KeyEvent]) -> TickResult {
    for event in events {
        assert!(app.input_mut().push_key(*event));
    }
    app.tick(now_ms)
}

#[test]
fn types_a_word_across_frames() {
    let mut app = make_app(EditorConfig::default());

    assert_eq!(frame(&mut app, 0, &[D(4), D(4)]), TickResult::RenderRequested);
    assert_eq!(app.engine().candidate_char(), Some('h'));

    frame(&mut app, 500, &[]);
    assert_eq!(app.text(), "");

    frame(&mut app, 1_000, &[]);
    assert_eq!(app.text(), "h");

    frame(&mut app, 1_010, &[D(4), D(4), D(4)]);
    frame(&mut app, 1_900, &[]);
    assert_eq!(app.text(), "hi");
    assert_eq!(app.engine().cursor(), 2);
}

#[test]
fn key_in_frame_is_handled_before_timeout_check() {
    let mut app = make_app(EditorConfig::default());

    frame(&mut app, 0, &[D(2)]);
    frame(&mut app, 790, &[D(2)]);
    frame(&mut app, 1_500, &[]);
    assert_eq!(app.text(), "");
    assert_eq!(app.engine().candidate_char(), Some('b'));

    frame(&mut app, 1_600, &[]);
    assert_eq!(app.text(), "b");
}

#[test]
fn late_same_key_press_starts_a_new_character() {
    let mut app = make_app(EditorConfig::default());

    frame(&mut app, 0, &[D(2)]);
    frame(&mut app, 900, &[D(2)]);

    assert_eq!(app.text(), "a");
    assert_eq!(app.engine().candidate_char(), Some('a'));
}

#[test]
fn escape_commits_and_requests_exit() {
    let mut app = make_app(EditorConfig::default());

    frame(&mut app, 0, &[D(3)]);
    assert_eq!(frame(&mut app, 10, &[KeyEvent::Escape]), TickResult::ExitRequested);
    assert_eq!(app.text(), "d");
    assert_eq!(frame(&mut app, 20, &[]), TickResult::RenderRequested);
}

#[test]
fn enter_tab_and_alt_map_to_engine_keys() {
    let mut app = make_app(EditorConfig::default());

    frame(
        &mut app,
        0,
        &[D(2), KeyEvent::Tab, D(3), KeyEvent::Enter, D(4), KeyEvent::Alt],
    );

    assert_eq!(app.text(), "a d\ng");
    assert!(!app.engine().is_pending());
}

#[test]
fn arrows_move_the_cursor() {
    let mut app = make_app(EditorConfig::default());
    app.load_text("hello\nworld");
    frame(&mut app, 0, &[]);

    frame(&mut app, 10, &[KeyEvent::Up]);
    assert_eq!(app.engine().cursor(), 5);

    frame(&mut app, 20, &[KeyEvent::Left]);
    assert_eq!(app.engine().cursor(), 4);

    frame(&mut app, 30, &[KeyEvent::Down]);
    assert_eq!(app.engine().cursor(), 10);

    frame(&mut app, 40, &[KeyEvent::Right, KeyEvent::Right]);
    assert_eq!(app.engine().cursor(), 11);
}

#[test]
fn provider_error_skips_rest_of_frame() {
    let mut app = make_app(EditorConfig::default());
    app.input_mut().push_fault();

    frame(&mut app, 0, &[D(5)]);
    assert_eq!(app.input_mut().remaining(), 1);
    assert!(!app.engine().is_pending());

    frame(&mut app, 10, &[]);
    assert_eq!(app.engine().candidate_char(), Some('j'));
}

#[test]
fn idle_frames_render_only_on_blink_edges() {
    let mut app = make_app(EditorConfig::default());
    app.load_text("abc");

    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(100), TickResult::NoRender);
    assert_eq!(app.tick(499), TickResult::NoRender);
    assert_eq!(app.tick(500), TickResult::RenderRequested);
    assert_eq!(app.tick(700), TickResult::NoRender);
    assert_eq!(app.tick(1_000), TickResult::RenderRequested);
}

#[test]
fn timeout_bar_steps_request_redraws() {
    let mut app = make_app(EditorConfig::default());

    assert_eq!(frame(&mut app, 0, &[D(2)]), TickResult::RenderRequested);
    assert_eq!(app.tick(50), TickResult::RenderRequested);
    assert_eq!(app.tick(60), TickResult::NoRender);
}

#[test]
fn screen_shows_candidate_and_hides_cursor() {
    let mut app = make_app(EditorConfig::default());
    app.load_text("ab");
    frame(&mut app, 0, &[D(9), D(9)]);

    let mut captured = None;
    app.with_screen(400, |screen| {
        captured = Some((
            screen.candidate,
            screen.cursor_visible,
            screen.text.to_string(),
            screen.text_before_cursor().to_string(),
            screen.lines.len(),
            screen.position.to_string(),
        ));
    });

    let (candidate, cursor_visible, text, before_cursor, line_count, position) =
        captured.unwrap();
    let candidate = candidate.unwrap();
    assert_eq!(candidate.ch, 'x');
    assert_eq!(candidate.byte_start, 2);
    assert_eq!(candidate.remaining_pct, 50);
    assert!(!cursor_visible);
    assert_eq!(text, "abx");
    assert_eq!(before_cursor, "abx");
    assert_eq!(line_count, 1);
    assert_eq!(position, "1:4");
    assert_eq!(app.text(), "ab");
}

#[test]
fn screen_window_follows_the_cursor() {
    let mut app = make_app(EditorConfig::default().with_visible_lines(2));
    app.load_text("1\n2\n3\n4");

    let mut visible: Vec<String> = Vec::new();
    let mut first = usize::MAX;
    app.with_screen(0, |screen| {
        first = screen.first_line_index;
        visible = screen
            .lines
            .iter()
            .map(|line| screen.line_text(line).to_string())
            .collect();
    });
    assert_eq!(first, 2);
    assert_eq!(visible, ["3", "4"]);

    app.set_cursor(0);
    app.with_screen(0, |screen| first = screen.first_line_index);
    assert_eq!(first, 0);
}

#[test]
fn narrow_content_width_wraps_typed_text() {
    let mut app = make_app(EditorConfig::default().with_content_width_px(12));
    frame(&mut app, 0, &[D(2), KeyEvent::Alt, D(3), KeyEvent::Alt, D(4)]);

    let lines: Vec<_> = app
        .layout()
        .lines()
        .iter()
        .map(|line| app.layout().line_text(line))
        .collect();
    assert_eq!(lines, ["ad", "g"]);
    assert_eq!(app.layout().cursor_line(), 1);
}

#[test]
fn clear_empties_the_editor() {
    let mut app = make_app(EditorConfig::default());
    app.load_text("draft");
    frame(&mut app, 0, &[D(7)]);

    app.clear();
    frame(&mut app, 10, &[]);

    assert_eq!(app.text(), "");
    assert!(!app.engine().is_pending());
    assert_eq!(app.layout().lines().len(), 1);
}

#[test]
fn scripted_scan_codes_type_and_exit() {
    let input = MockInput::<32>::from_codes(&[
        code::SHIFT,
        b'4',
        b'4',
        code::ALT,
        b'4',
        b'4',
        b'4',
        code::ENTER,
        b'0',
        code::ESC,
    ]);
    let mut app = EditorApp::new(
        input,
        MonospaceMetrics::FONT_6X13,
        EditorConfig::default(),
        "T9 EDITOR",
    );

    assert_eq!(app.tick(0), TickResult::ExitRequested);
    assert_eq!(app.text(), "Hi\n ");
    assert_eq!(app.input_mut().remaining(), 0);
}
