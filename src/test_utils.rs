//! Shared test utilities
//!
//! Common scroll bar fixtures used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;

    use crate::app::App;
    use crate::config::{AxisDefinition, Config};
    use crate::scrollbar::{CanvasUpdate, HorizontalAxis, Point, Scrollbar, Size, VerticalAxis};

    /// Terminal area the demo app is laid out in by `test_app`
    pub const TEST_AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 40,
        height: 12,
    };

    /// Demo app with 20 items of 78 columns, laid out in `TEST_AREA`
    ///
    /// The list shows 10 rows of 39 columns. The vertical bar sits in
    /// column 39, rows 0..10, with a 5 row positioner. The horizontal bar
    /// sits in row 10 with a 20 column positioner.
    pub fn test_app() -> App {
        let mut app = App::new(&Config::default(), 20, 78);
        app.sync_layout(TEST_AREA);
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a MouseEvent without modifiers
    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Axis definition with no margins and an unrestricted positioner
    pub fn unrestricted() -> AxisDefinition {
        AxisDefinition {
            min_positioner_length: 0,
            max_positioner_length: 0,
            leading_margin: 0,
            trailing_margin: 0,
        }
    }

    /// Vertical bar of `length` pixels (10 wide) holding the given range
    pub fn vertical_bar(
        length: u32,
        item_count: u32,
        visible_items: u32,
        step_size: u32,
    ) -> Scrollbar<VerticalAxis> {
        vertical_bar_with(unrestricted(), length, item_count, visible_items, step_size)
    }

    pub fn vertical_bar_with(
        definition: AxisDefinition,
        length: u32,
        item_count: u32,
        visible_items: u32,
        step_size: u32,
    ) -> Scrollbar<VerticalAxis> {
        let mut bar = Scrollbar::new(VerticalAxis::new(definition));
        bar.set_item_count(item_count);
        bar.set_visible_items(visible_items);
        bar.set_step_size(step_size);
        bar.set_size(Point::new(0, 0), Size::new(10, length));
        bar
    }

    /// Horizontal bar of `length` pixels (1 high) holding the given range
    pub fn horizontal_bar(
        length: u32,
        item_count: u32,
        visible_items: u32,
    ) -> Scrollbar<HorizontalAxis> {
        let mut bar = Scrollbar::new(HorizontalAxis::new(unrestricted()));
        bar.set_item_count(item_count);
        bar.set_visible_items(visible_items);
        bar.set_size(Point::new(0, 0), Size::new(length, 1));
        bar
    }

    /// Point on a vertical bar at `y`, inside its width
    pub fn at_y(y: i32) -> Point {
        Point::new(2, y)
    }

    /// Counts positioner-move callbacks and records the positions seen
    pub fn record_moves<A: crate::scrollbar::Axis + 'static>(
        bar: &mut Scrollbar<A>,
    ) -> Rc<RefCell<Vec<u32>>> {
        let moves = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&moves);
        bar.set_callback_positioner_move(move |bar| sink.borrow_mut().push(bar.item_position()));
        moves
    }

    /// Records every canvas update
    pub fn record_canvas<A: crate::scrollbar::Axis + 'static>(
        bar: &mut Scrollbar<A>,
    ) -> Rc<RefCell<Vec<CanvasUpdate>>> {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        bar.set_canvas_hook(move |update| sink.borrow_mut().push(*update));
        updates
    }
}
