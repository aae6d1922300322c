//! Pointer handling for the scroll bar
//!
//! Points are absolute; they are made control-local with the origin given to
//! `Scrollbar::set_size` before the axis is consulted.

use super::axis::{Axis, Point, TrackHit};
use super::scroll_range::ScrollStep;
use super::scrollbar_state::Scrollbar;
use super::widget_state::WidgetState;

/// An active drag on the positioner, present between button down and up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer location of the previous sample, control-local.
    pub anchor: Point,
    /// Pixels of motion not yet turned into steps.
    pub residual: f32,
}

impl DragSession {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            residual: 0.0,
        }
    }
}

impl<A: Axis> Scrollbar<A> {
    /// We only track the pointer while it's on the positioner, so entering
    /// behaves as a move.
    pub fn mouse_enter(&mut self, point: Point) {
        self.mouse_move(point);
    }

    pub fn mouse_move(&mut self, point: Point) {
        let point = point.relative_to(self.origin);

        match self.state {
            WidgetState::Enabled => {
                if self.axis.is_on_positioner(&self.track(), point) {
                    self.set_state(WidgetState::Focussed);
                }
            }
            WidgetState::Focussed => {
                if !self.axis.is_on_positioner(&self.track(), point) {
                    self.set_state(WidgetState::Enabled);
                }
            }
            WidgetState::Pressed => self.drag_to(point),
            WidgetState::Disabled => {}
        }
    }

    /// Clears the hover highlight; a drag in progress keeps going
    pub fn mouse_leave(&mut self) {
        if self.state == WidgetState::Focussed {
            self.set_state(WidgetState::Enabled);
        }
    }

    pub fn mouse_left_button_down(&mut self, point: Point) {
        if !self.is_active() {
            return;
        }
        let point = point.relative_to(self.origin);
        let track = self.track();

        if self.axis.is_on_positioner(&track, point) {
            self.set_state(WidgetState::Pressed);
            self.drag = Some(DragSession::new(point));

            #[cfg(debug_assertions)]
            log::debug!("drag started at {:?}", point);
            return;
        }

        let step = match self.axis.on_track(&track, point) {
            TrackHit::Before => ScrollStep::JumpBackwards,
            TrackHit::After => ScrollStep::JumpForward,
            TrackHit::None => return,
        };
        if self.scroll(step) {
            self.notify_positioner_move();
        }
    }

    pub fn mouse_left_button_up(&mut self, point: Point) {
        if self.state != WidgetState::Pressed {
            return;
        }
        let point = point.relative_to(self.origin);

        #[cfg(debug_assertions)]
        log::debug!("drag ended at {:?}", point);

        if self.axis.is_on_positioner(&self.track(), point) {
            self.set_state(WidgetState::Focussed);
        } else {
            self.set_state(WidgetState::Enabled);
        }
    }

    fn drag_to(&mut self, point: Point) {
        let Some(mut session) = self.drag else {
            return;
        };

        let delta = self.axis.projected_delta(session.anchor, point) as f32 + session.residual;
        session.anchor = point;
        session.residual = delta;

        let pixels_per_step = self.geometry.pixels_per_step;
        let mut changed = false;
        if pixels_per_step > 0.0 && delta.abs() >= pixels_per_step {
            let steps = (delta / pixels_per_step).trunc() as i64;
            let applied = self.range.move_steps(steps);
            session.residual = delta - applied as f32 * pixels_per_step;
            changed = applied != 0;

            #[cfg(debug_assertions)]
            log::debug!(
                "drag delta {:.2}px: {} of {} steps applied, residual {:.2}px",
                delta,
                applied,
                steps,
                session.residual
            );
        }
        self.drag = Some(session);

        if changed {
            self.recalculate();
            self.notify_positioner_move();
        }
    }
}

#[cfg(test)]
#[path = "scrollbar_events_tests.rs"]
mod scrollbar_events_tests;
