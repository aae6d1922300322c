use std::fmt;

use super::axis::{Axis, Point, Size, Track};
use super::geometry::{self, PositionerGeometry};
use super::scroll_range::{ScrollRange, ScrollStep};
use super::scrollbar_events::DragSession;
use super::widget_state::WidgetState;

/// Invoked when the user moved the positioner and the position changed
pub type PositionerMoveCallback<A> = Box<dyn FnMut(&Scrollbar<A>)>;

/// Invoked after every recalculation or state change
pub type CanvasHook = Box<dyn FnMut(&CanvasUpdate)>;

/// Everything a renderer needs to redraw the bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasUpdate {
    pub state: WidgetState,
    pub item_position: u32,
    pub size: Size,
    pub geometry: PositionerGeometry,
}

/// Scroll bar core, generic over the axis supplying orientation geometry
pub struct Scrollbar<A: Axis> {
    pub(super) axis: A,
    pub(super) state: WidgetState,
    pub(super) range: ScrollRange,
    pub(super) geometry: PositionerGeometry,
    pub(super) origin: Point,
    pub(super) size: Size,
    pub(super) drag: Option<DragSession>,
    on_positioner_move: Option<PositionerMoveCallback<A>>,
    canvas_hook: Option<CanvasHook>,
}

impl<A: Axis> Scrollbar<A> {
    pub fn new(axis: A) -> Self {
        Self {
            axis,
            state: WidgetState::Enabled,
            range: ScrollRange::new(),
            geometry: PositionerGeometry::default(),
            origin: Point::default(),
            size: Size::default(),
            drag: None,
            on_positioner_move: None,
            canvas_hook: None,
        }
    }

    pub fn axis(&self) -> &A {
        &self.axis
    }

    /// Places the control and recalculates the positioner
    pub fn set_size(&mut self, origin: Point, size: Size) {
        self.origin = origin;
        self.size = size;
        self.recalculate();
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /***** setters / getters for the item range *****/

    pub fn range(&self) -> &ScrollRange {
        &self.range
    }

    pub fn item_count(&self) -> u32 {
        self.range.item_count()
    }

    pub fn set_item_count(&mut self, item_count: u32) {
        self.range.set_item_count(item_count);
        self.recalculate();
    }

    pub fn visible_items(&self) -> u32 {
        self.range.visible_items()
    }

    pub fn set_visible_items(&mut self, visible_items: u32) {
        self.range.set_visible_items(visible_items);
        self.recalculate();
    }

    pub fn step_size(&self) -> u32 {
        self.range.step_size()
    }

    pub fn set_step_size(&mut self, step_size: u32) {
        self.range.set_step_size(step_size);
        self.recalculate();
    }

    pub fn item_position(&self) -> u32 {
        self.range.item_position()
    }

    /// Note the position isn't guaranteed to be the wanted position, the
    /// step size is honoured and the value is rounded down.
    pub fn set_item_position(&mut self, item_position: u32) -> u32 {
        let effective = self.range.set_item_position(item_position);
        self.recalculate();
        effective
    }

    pub fn at_begin(&self) -> bool {
        self.range.at_begin()
    }

    pub fn at_end(&self) -> bool {
        self.range.at_end()
    }

    /// Moves the positioner by a predefined amount
    ///
    /// Programmatic: the positioner-move callback is not invoked.
    pub fn scroll(&mut self, step: ScrollStep) -> bool {
        let changed = self.range.scroll(step);

        #[cfg(debug_assertions)]
        log::debug!(
            "scroll {:?}: position {} (changed: {})",
            step,
            self.range.item_position(),
            changed
        );

        self.recalculate();
        changed
    }

    /***** activation *****/

    pub fn set_active(&mut self, active: bool) {
        if self.is_active() != active {
            self.set_state(if active {
                WidgetState::Enabled
            } else {
                WidgetState::Disabled
            });
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Whether a drag session on the positioner is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /***** geometry *****/

    pub fn geometry(&self) -> &PositionerGeometry {
        &self.geometry
    }

    pub fn positioner_offset(&self) -> u32 {
        self.geometry.positioner_offset
    }

    pub fn positioner_length(&self) -> u32 {
        self.geometry.positioner_length
    }

    pub fn pixels_per_step(&self) -> f32 {
        self.geometry.pixels_per_step
    }

    pub fn track(&self) -> Track {
        self.geometry.track(self.size)
    }

    /***** callbacks *****/

    pub fn set_callback_positioner_move<F>(&mut self, callback: F)
    where
        F: FnMut(&Scrollbar<A>) + 'static,
    {
        self.on_positioner_move = Some(Box::new(callback));
    }

    pub fn set_canvas_hook<F>(&mut self, hook: F)
    where
        F: FnMut(&CanvasUpdate) + 'static,
    {
        self.canvas_hook = Some(Box::new(hook));
    }

    /// Updates the positioner after the range or the size changed
    ///
    /// Deferred until a size has been set, nothing can be calculated before.
    pub fn recalculate(&mut self) {
        if self.axis.track_length(self.size) == 0 {
            #[cfg(debug_assertions)]
            log::debug!("recalculate deferred: no size yet");
            return;
        }

        self.geometry = geometry::compute(&self.range, &self.axis, self.size);

        #[cfg(debug_assertions)]
        log::debug!(
            "recalculated: offset {} length {} pixels/step {:.3}",
            self.geometry.positioner_offset,
            self.geometry.positioner_length,
            self.geometry.pixels_per_step
        );

        self.update_canvas();
    }

    pub fn canvas_update(&self) -> CanvasUpdate {
        CanvasUpdate {
            state: self.state,
            item_position: self.range.item_position(),
            size: self.size,
            geometry: self.geometry,
        }
    }

    pub(super) fn set_state(&mut self, state: WidgetState) {
        if self.state == state {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("scrollbar state {:?} -> {:?}", self.state, state);

        self.state = state;
        if state != WidgetState::Pressed {
            self.drag = None;
        }
        self.update_canvas();
    }

    pub(super) fn notify_positioner_move(&mut self) {
        if let Some(mut callback) = self.on_positioner_move.take() {
            callback(self);
            self.on_positioner_move = Some(callback);
        }
    }

    fn update_canvas(&mut self) {
        let update = self.canvas_update();
        if let Some(hook) = self.canvas_hook.as_mut() {
            hook(&update);
        }
    }
}

impl<A: Axis + fmt::Debug> fmt::Debug for Scrollbar<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scrollbar")
            .field("axis", &self.axis)
            .field("state", &self.state)
            .field("range", &self.range)
            .field("geometry", &self.geometry)
            .field("origin", &self.origin)
            .field("size", &self.size)
            .field("drag", &self.drag)
            .field("has_positioner_move", &self.on_positioner_move.is_some())
            .field("has_canvas_hook", &self.canvas_hook.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "scrollbar_state_tests.rs"]
mod scrollbar_state_tests;
