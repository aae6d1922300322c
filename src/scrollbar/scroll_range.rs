/// Fixed amounts the positioner can be moved by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    /// Go to the begin position
    Begin,
    /// Go one step towards the begin
    ItemBackwards,
    /// Go half the visible items towards the begin
    HalfJumpBackwards,
    /// Go the visible items towards the begin
    JumpBackwards,
    /// Go to the end position
    End,
    /// Go one step towards the end
    ItemForward,
    /// Go half the visible items towards the end
    HalfJumpForward,
    /// Go the visible items towards the end
    JumpForward,
}

/// The logical window of visible items over the full item range
///
/// `item_position` is always a multiple of `step_size` and never beyond
/// `max_position()`. Every setter re-applies that policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRange {
    item_count: u32,
    item_position: u32,
    visible_items: u32,
    step_size: u32,
}

impl ScrollRange {
    pub fn new() -> Self {
        Self {
            item_count: 0,
            item_position: 0,
            visible_items: 1,
            step_size: 1,
        }
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn item_position(&self) -> u32 {
        self.item_position
    }

    pub fn visible_items(&self) -> u32 {
        self.visible_items
    }

    pub fn step_size(&self) -> u32 {
        self.step_size
    }

    pub fn set_item_count(&mut self, item_count: u32) {
        self.item_count = item_count;
        self.item_position = self.clamp(self.item_position);
    }

    pub fn set_visible_items(&mut self, visible_items: u32) {
        self.visible_items = visible_items.max(1);
        self.item_position = self.clamp(self.item_position);
    }

    pub fn set_step_size(&mut self, step_size: u32) {
        self.step_size = step_size.max(1);
        self.item_position = self.clamp(self.item_position);
    }

    /// Moves to `item_position`, rounded down to the step size
    ///
    /// Returns the effective position, which may differ from the request.
    pub fn set_item_position(&mut self, item_position: u32) -> u32 {
        self.item_position = self.clamp(item_position);
        self.item_position
    }

    /// Last reachable position
    pub fn max_position(&self) -> u32 {
        self.truncate(self.item_count.saturating_sub(self.visible_items))
    }

    pub fn at_begin(&self) -> bool {
        self.item_position == 0
    }

    /// Whether the positioner sits on the last reachable position
    ///
    /// Note both begin and end might be true at the same time.
    pub fn at_end(&self) -> bool {
        self.item_position >= self.max_position()
    }

    /// Applies `step` and returns whether the position changed
    pub fn scroll(&mut self, step: ScrollStep) -> bool {
        let before = self.item_position;
        let target = match step {
            ScrollStep::Begin => 0,
            ScrollStep::End => self.max_position(),
            ScrollStep::ItemBackwards => before.saturating_sub(self.step_size),
            ScrollStep::ItemForward => before.saturating_add(self.step_size),
            ScrollStep::HalfJumpBackwards => before.saturating_sub(self.half_jump()),
            ScrollStep::HalfJumpForward => before.saturating_add(self.half_jump()),
            ScrollStep::JumpBackwards => before.saturating_sub(self.jump()),
            ScrollStep::JumpForward => before.saturating_add(self.jump()),
        };
        self.set_item_position(target) != before
    }

    /// Moves by `steps` whole steps, returning how many were applied
    pub fn move_steps(&mut self, steps: i64) -> i64 {
        let before = self.item_position as i64;
        let target = before.saturating_add(steps.saturating_mul(self.step_size as i64));
        let target = target.clamp(0, self.max_position() as i64) as u32;
        let after = self.set_item_position(target) as i64;
        (after - before) / self.step_size as i64
    }

    /// Number of step-sized slots the positioner can occupy beyond the first
    pub fn available_steps(&self) -> u32 {
        if self.step_size == 0 {
            return 0;
        }
        self.item_count
            .div_ceil(self.step_size)
            .saturating_sub(self.visible_items.div_ceil(self.step_size))
    }

    fn half_jump(&self) -> u32 {
        self.truncate(self.visible_items / 2).max(self.step_size)
    }

    fn jump(&self) -> u32 {
        self.truncate(self.visible_items).max(self.step_size)
    }

    fn truncate(&self, value: u32) -> u32 {
        value - value % self.step_size
    }

    fn clamp(&self, item_position: u32) -> u32 {
        self.truncate(item_position.min(self.max_position()))
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scroll_range_tests.rs"]
mod scroll_range_tests;
