//! Mouse event dispatcher
//!
//! Routes terminal mouse events to the scroll bar under the pointer. The
//! terminal reports no enter or leave events, so each bar keeps a
//! `HoverTracker` and the dispatcher synthesizes them from motion.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::app_state::App;
use crate::scrollbar::{Axis, Point, ScrollStep, Scrollbar};

/// Whether the pointer was inside a scroll bar on the last motion event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    hovered: bool,
}

impl HoverTracker {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Handle mouse events by routing them to both scroll bars
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            app.vertical.scroll(ScrollStep::ItemForward);
        }
        MouseEventKind::ScrollUp => {
            app.vertical.scroll(ScrollStep::ItemBackwards);
        }
        MouseEventKind::ScrollRight => {
            app.horizontal.scroll(ScrollStep::ItemForward);
        }
        MouseEventKind::ScrollLeft => {
            app.horizontal.scroll(ScrollStep::ItemBackwards);
        }
        _ => {
            let vertical_area = app.layout.vertical_bar;
            let horizontal_area = app.layout.horizontal_bar;
            route(&mut app.vertical, &mut app.vertical_hover, vertical_area, mouse);
            route(
                &mut app.horizontal,
                &mut app.horizontal_hover,
                horizontal_area,
                mouse,
            );
        }
    }
}

fn route<A: Axis>(bar: &mut Scrollbar<A>, hover: &mut HoverTracker, area: Rect, mouse: MouseEvent) {
    let inside = area.contains(Position::new(mouse.column, mouse.row));
    let point = Point::new(mouse.column as i32, mouse.row as i32);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            if inside != hover.hovered {
                hover.hovered = inside;
                if inside {
                    bar.mouse_enter(point);
                    return;
                }
                bar.mouse_leave();
            }
            // A drag keeps following the pointer outside the bar
            if inside || bar.is_dragging() {
                bar.mouse_move(point);
            }
        }
        MouseEventKind::Down(MouseButton::Left) if inside => {
            bar.mouse_left_button_down(point);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            bar.mouse_left_button_up(point);
        }
        _ => {}
    }
}
