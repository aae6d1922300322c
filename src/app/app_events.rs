use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events::handle_mouse_event;
use crate::scrollbar::ScrollStep;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    handle_mouse_event(self, mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let step = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('a') => {
                self.toggle_active();
                return;
            }
            KeyCode::Left => {
                self.horizontal.scroll(ScrollStep::ItemBackwards);
                return;
            }
            KeyCode::Right => {
                self.horizontal.scroll(ScrollStep::ItemForward);
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => ScrollStep::ItemBackwards,
            KeyCode::Down | KeyCode::Char('j') => ScrollStep::ItemForward,
            KeyCode::Char('u') => ScrollStep::HalfJumpBackwards,
            KeyCode::Char('d') => ScrollStep::HalfJumpForward,
            KeyCode::PageUp => ScrollStep::JumpBackwards,
            KeyCode::PageDown => ScrollStep::JumpForward,
            KeyCode::Home | KeyCode::Char('g') => ScrollStep::Begin,
            KeyCode::End | KeyCode::Char('G') => ScrollStep::End,
            _ => return,
        };
        self.vertical.scroll(step);
    }
}
