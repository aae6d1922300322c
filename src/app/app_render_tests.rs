//! Tests for app_render

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::app::app_state::App;
use crate::scrollbar::ScrollStep;
use crate::test_utils::test_helpers::{TEST_AREA, test_app};

fn render(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn render_test_area(app: &mut App) -> Buffer {
    render(app, TEST_AREA.width, TEST_AREA.height)
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn column(buffer: &Buffer, x: u16, rows: std::ops::Range<u16>) -> String {
    rows.map(|y| buffer[(x, y)].symbol().to_string()).collect()
}

#[test]
fn test_renders_first_page_of_items() {
    let mut app = test_app();
    let buffer = render_test_area(&mut app);

    assert!(row(&buffer, 0).starts_with("     1 the quick brown fox"));
    assert!(row(&buffer, 9).starts_with("    10 the quick"));
}

#[test]
fn test_renders_vertical_positioner() {
    let mut app = test_app();
    let buffer = render_test_area(&mut app);

    assert_eq!(column(&buffer, 39, 0..10), "█████│││││");
}

#[test]
fn test_renders_horizontal_positioner() {
    let mut app = test_app();
    let buffer = render_test_area(&mut app);

    let expected = format!("{}{}", "█".repeat(20), "─".repeat(20));
    assert_eq!(row(&buffer, 10), expected);
}

#[test]
fn test_scrolled_to_end() {
    let mut app = test_app();
    app.vertical.scroll(ScrollStep::End);
    let buffer = render_test_area(&mut app);

    assert!(row(&buffer, 0).starts_with("    11 "));
    assert!(row(&buffer, 9).starts_with("    20 "));
    assert_eq!(column(&buffer, 39, 0..10), "│││││█████");
}

#[test]
fn test_horizontal_position_shifts_columns() {
    let mut app = test_app();
    app.horizontal.set_item_position(7);
    let buffer = render_test_area(&mut app);

    assert!(row(&buffer, 0).starts_with("the quick brown fox"));
}

#[test]
fn test_status_line() {
    let mut app = test_app();
    let buffer = render(&mut app, 100, 12);
    let status = row(&buffer, 11);

    assert!(status.contains("items 1-10 of 20"));
    assert!(status.contains("Enabled/Enabled"));
    assert!(status.contains("moves 0"));
}

#[test]
fn test_status_line_shows_warning() {
    let mut app = test_app();
    app.warning = Some("Invalid config: bad step".to_string());
    let buffer = render(&mut app, 100, 12);

    assert!(row(&buffer, 11).contains("Invalid config: bad step"));
}

#[test]
fn test_status_line_for_empty_list() {
    let mut app = App::new(&crate::config::Config::default(), 0, 40);
    let buffer = render(&mut app, 100, 12);
    let status = row(&buffer, 11);

    assert!(status.contains("items 0-0 of 0"));
}

#[test]
fn test_resize_relays_out_bars() {
    let mut app = test_app();
    let buffer = render(&mut app, 60, 22);

    assert_eq!(app.vertical.visible_items(), 20);
    assert_eq!(app.horizontal.visible_items(), 59);
    // All 20 items fit, the positioner fills the track
    assert_eq!(column(&buffer, 59, 0..20), "█".repeat(20));
}
