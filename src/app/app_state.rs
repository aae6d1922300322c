use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::{Constraint, Layout, Rect};

use super::mouse_events::HoverTracker;
use crate::config::Config;
use crate::scrollbar::{HorizontalAxis, Point, Scrollbar, Size, VerticalAxis};

/// Where the demo components were last laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub list: Rect,
    pub vertical_bar: Rect,
    pub horizontal_bar: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn split(area: Rect) -> Self {
        let [body, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        let [content, horizontal_bar] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(body);
        let [list, vertical_bar] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(1)]).areas(content);

        Self {
            list,
            vertical_bar,
            horizontal_bar,
            status,
        }
    }
}

pub struct App {
    pub items: Vec<String>,
    pub vertical: Scrollbar<VerticalAxis>,
    pub horizontal: Scrollbar<HorizontalAxis>,
    pub vertical_hover: HoverTracker,
    pub horizontal_hover: HoverTracker,
    pub layout: AppLayout,
    pub warning: Option<String>,
    pub should_quit: bool,
    dirty: Rc<Cell<bool>>,
    positioner_moves: Rc<Cell<u32>>,
}

impl App {
    pub fn new(config: &Config, item_count: u32, line_width: u32) -> Self {
        let items = generate_items(item_count, line_width);
        let dirty = Rc::new(Cell::new(true));
        let positioner_moves = Rc::new(Cell::new(0));

        let mut vertical = Scrollbar::new(VerticalAxis::new(config.vertical));
        vertical.set_item_count(item_count);
        vertical.set_step_size(config.scroll.step_size);
        let sink = Rc::clone(&dirty);
        vertical.set_canvas_hook(move |_| sink.set(true));
        let counter = Rc::clone(&positioner_moves);
        vertical.set_callback_positioner_move(move |_| counter.set(counter.get() + 1));

        let mut horizontal = Scrollbar::new(HorizontalAxis::new(config.horizontal));
        horizontal.set_item_count(line_width);
        let sink = Rc::clone(&dirty);
        horizontal.set_canvas_hook(move |_| sink.set(true));
        let counter = Rc::clone(&positioner_moves);
        horizontal.set_callback_positioner_move(move |_| counter.set(counter.get() + 1));

        Self {
            items,
            vertical,
            horizontal,
            vertical_hover: HoverTracker::default(),
            horizontal_hover: HoverTracker::default(),
            layout: AppLayout::default(),
            warning: None,
            should_quit: false,
            dirty,
            positioner_moves,
        }
    }

    /// Re-lays out the components, resizing the scroll bars when the area
    /// changed
    pub fn sync_layout(&mut self, area: Rect) {
        let layout = AppLayout::split(area);
        if layout == self.layout {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("layout changed: {:?}", layout);

        self.layout = layout;
        self.vertical.set_visible_items(layout.list.height as u32);
        self.horizontal.set_visible_items(layout.list.width as u32);
        self.vertical.set_size(
            Point::new(layout.vertical_bar.x as i32, layout.vertical_bar.y as i32),
            Size::from(layout.vertical_bar),
        );
        self.horizontal.set_size(
            Point::new(
                layout.horizontal_bar.x as i32,
                layout.horizontal_bar.y as i32,
            ),
            Size::from(layout.horizontal_bar),
        );
        self.mark_dirty();
    }

    /// Toggles both scroll bars between enabled and disabled
    pub fn toggle_active(&mut self) {
        let active = !self.vertical.is_active();
        self.vertical.set_active(active);
        self.horizontal.set_active(active);
    }

    pub fn positioner_moves(&self) -> u32 {
        self.positioner_moves.get()
    }

    pub fn should_render(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn clear_dirty(&self) {
        self.dirty.set(false);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

fn generate_items(item_count: u32, line_width: u32) -> Vec<String> {
    const FILLER: &str = "the quick brown fox jumps over the lazy dog ";

    (0..item_count)
        .map(|index| {
            let mut line = format!("{:>6} ", index + 1);
            while (line.len() as u32) < line_width {
                line.push_str(FILLER);
            }
            line.truncate(line_width as usize);
            line
        })
        .collect()
}
