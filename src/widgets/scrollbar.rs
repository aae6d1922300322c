//! Scroll bar rendering
//!
//! Draws the track and positioner described by a `CanvasUpdate`. One cell
//! is one pixel of the scroll bar core.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::scrollbar::CanvasUpdate;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Track plus positioner, styled by the widget state
#[derive(Debug, Clone, Copy)]
pub struct PositionerBar<'a> {
    update: &'a CanvasUpdate,
    orientation: Orientation,
}

impl<'a> PositionerBar<'a> {
    pub fn vertical(update: &'a CanvasUpdate) -> Self {
        Self {
            update,
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(update: &'a CanvasUpdate) -> Self {
        Self {
            update,
            orientation: Orientation::Horizontal,
        }
    }

    fn on_positioner(&self, along: u16) -> bool {
        let start = self.update.geometry.positioner_offset;
        let end = start.saturating_add(self.update.geometry.positioner_length);
        (start..end).contains(&(along as u32))
    }
}

impl Widget for PositionerBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let positioner_style = theme::scrollbar::positioner(self.update.state);
        let track_symbol = match self.orientation {
            Orientation::Vertical => theme::scrollbar::TRACK_SYMBOL_VERTICAL,
            Orientation::Horizontal => theme::scrollbar::TRACK_SYMBOL_HORIZONTAL,
        };

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let along = match self.orientation {
                    Orientation::Vertical => y - area.y,
                    Orientation::Horizontal => x - area.x,
                };
                let Some(cell) = buf.cell_mut((x, y)) else {
                    continue;
                };
                if self.on_positioner(along) {
                    cell.set_symbol(theme::scrollbar::POSITIONER_SYMBOL)
                        .set_style(positioner_style);
                } else {
                    cell.set_symbol(track_symbol)
                        .set_style(theme::scrollbar::TRACK);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
