//! Projection of a `ScrollRange` onto pixels

use super::axis::{Axis, Size, Track};
use super::scroll_range::ScrollRange;

/// Derived positioner layout, always consistent with the range and size it
/// was computed from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionerGeometry {
    /// Pixels the positioner moves per step. When space is short a single
    /// pixel can cover several steps.
    pub pixels_per_step: f32,
    /// Start of the positioner, including the leading margin.
    pub positioner_offset: u32,
    pub positioner_length: u32,
}

impl PositionerGeometry {
    pub fn track(&self, size: Size) -> Track {
        Track {
            size,
            positioner_offset: self.positioner_offset,
            positioner_length: self.positioner_length,
        }
    }

    /// Whether the positioner can move at all
    pub fn can_scroll(&self) -> bool {
        self.pixels_per_step > 0.0
    }
}

/// Computes the positioner layout for `range` on a control of `size`
pub fn compute<A: Axis + ?Sized>(range: &ScrollRange, axis: &A, size: Size) -> PositionerGeometry {
    let leading = axis.leading_margin();
    let usable = axis.track_length(size) as i64
        - leading as i64
        - axis.trailing_margin() as i64;

    if usable <= 0 {
        return PositionerGeometry {
            pixels_per_step: 0.0,
            positioner_offset: leading,
            positioner_length: axis.min_positioner_length(),
        };
    }
    let usable = usable as u32;

    let proportional = if range.item_count() > range.visible_items() {
        (usable as u64 * range.visible_items() as u64 / range.item_count() as u64) as u32
    } else {
        usable
    };
    let positioner_length = clamp_positioner_length(
        proportional,
        axis.min_positioner_length(),
        axis.max_positioner_length(),
    )
    .min(usable);

    let remaining = usable - positioner_length;
    let steps = range.available_steps();
    if steps == 0 {
        return PositionerGeometry {
            pixels_per_step: 0.0,
            positioner_offset: leading,
            positioner_length,
        };
    }

    let pixels_per_step = remaining as f32 / steps as f32;
    let step_index = range.item_position() as f32 / range.step_size() as f32;
    let travelled = ((step_index * pixels_per_step).round() as u32).min(remaining);

    PositionerGeometry {
        pixels_per_step,
        positioner_offset: leading + travelled,
        positioner_length,
    }
}

fn clamp_positioner_length(length: u32, minimum: u32, maximum: u32) -> u32 {
    if minimum == maximum && maximum != 0 {
        maximum
    } else if maximum != 0 && length > maximum {
        maximum
    } else if length < minimum {
        minimum
    } else {
        length
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;
