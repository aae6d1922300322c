//! Horizontal scroll bar axis: offsets run left to right
//!
//! Sliders are horizontal bars whose definition pins the positioner to a
//! fixed length (`min_positioner_length == max_positioner_length`).

use super::axis::{Axis, Point, Size, Track, TrackHit, classify_along, within};
use crate::config::AxisDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HorizontalAxis {
    definition: AxisDefinition,
}

impl HorizontalAxis {
    pub fn new(definition: AxisDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &AxisDefinition {
        &self.definition
    }
}

impl Axis for HorizontalAxis {
    fn track_length(&self, size: Size) -> u32 {
        size.width
    }

    fn min_positioner_length(&self) -> u32 {
        self.definition.min_positioner_length
    }

    fn max_positioner_length(&self) -> u32 {
        self.definition.max_positioner_length
    }

    fn leading_margin(&self) -> u32 {
        self.definition.leading_margin
    }

    fn trailing_margin(&self) -> u32 {
        self.definition.trailing_margin
    }

    fn is_on_positioner(&self, track: &Track, point: Point) -> bool {
        within(point.y, 0, track.size.height)
            && within(point.x, track.positioner_offset, track.positioner_length)
    }

    fn on_track(&self, track: &Track, point: Point) -> TrackHit {
        if !within(point.y, 0, track.size.height) {
            return TrackHit::None;
        }
        classify_along(
            track,
            point.x,
            track.size.width,
            self.definition.leading_margin,
            self.definition.trailing_margin,
        )
    }

    fn projected_delta(&self, origin: Point, current: Point) -> i32 {
        current.x - origin.x
    }
}
