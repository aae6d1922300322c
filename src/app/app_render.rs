use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::theme;
use crate::widgets::scrollbar::PositionerBar;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.sync_layout(frame.area());
        let layout = self.layout;

        self.render_list(frame, layout.list);

        let vertical = self.vertical.canvas_update();
        frame.render_widget(PositionerBar::vertical(&vertical), layout.vertical_bar);
        let horizontal = self.horizontal.canvas_update();
        frame.render_widget(PositionerBar::horizontal(&horizontal), layout.horizontal_bar);

        self.render_status(frame, layout.status);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let column = self.horizontal.item_position() as usize;
        let lines: Vec<Line> = self
            .items
            .iter()
            .skip(self.vertical.item_position() as usize)
            .take(area.height as usize)
            .map(|item| {
                let visible: String = item.chars().skip(column).take(area.width as usize).collect();
                Line::styled(visible, theme::list::TEXT)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let first = self.vertical.item_position();
        let last = (first + self.vertical.visible_items()).min(self.vertical.item_count());
        let shown_from = if last == 0 { 0 } else { first + 1 };
        let status = format!(
            " items {}-{} of {} | {:?}/{:?} | moves {} ",
            shown_from,
            last,
            self.vertical.item_count(),
            self.vertical.state(),
            self.horizontal.state(),
            self.positioner_moves(),
        );

        let mut spans = vec![Span::styled(status, theme::status::TEXT)];
        if let Some(warning) = &self.warning {
            spans.push(Span::styled(warning.as_str(), theme::status::WARNING));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
