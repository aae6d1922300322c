//! Vertical scroll bar axis: offsets run top to bottom

use super::axis::{Axis, Point, Size, Track, TrackHit, classify_along, within};
use crate::config::AxisDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalAxis {
    definition: AxisDefinition,
}

impl VerticalAxis {
    pub fn new(definition: AxisDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &AxisDefinition {
        &self.definition
    }
}

impl Axis for VerticalAxis {
    fn track_length(&self, size: Size) -> u32 {
        size.height
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
        within(point.x, 0, track.size.width)
            && within(point.y, track.positioner_offset, track.positioner_length)
    }

    fn on_track(&self, track: &Track, point: Point) -> TrackHit {
        if !within(point.x, 0, track.size.width) {
            return TrackHit::None;
        }
        classify_along(
            track,
            point.y,
            track.size.height,
            self.definition.leading_margin,
            self.definition.trailing_margin,
        )
    }

    fn projected_delta(&self, origin: Point, current: Point) -> i32 {
        current.y - origin.y
    }
}
