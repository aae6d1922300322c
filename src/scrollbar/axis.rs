//! Axis primitives
//!
//! The scroll bar core talks about offsets and lengths only. Concrete axes
//! decide whether those map onto widths or heights.

use ratatui::layout::{Position, Rect};

/// Pointer location in control-local pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub(crate) fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<Position> for Point {
    fn from(position: Position) -> Self {
        Point::new(position.x as i32, position.y as i32)
    }
}

/// Pixel size of the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<Rect> for Size {
    fn from(rect: Rect) -> Self {
        Size::new(rect.width as u32, rect.height as u32)
    }
}

/// Where on the bar a pointer landed, relative to the positioner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackHit {
    /// On the bar, between the leading margin and the positioner
    Before,
    /// Not on the bar, or on the positioner itself
    None,
    /// On the bar, between the positioner and the trailing margin
    After,
}

/// Current layout handed to hit tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Track {
    pub size: Size,
    pub positioner_offset: u32,
    pub positioner_length: u32,
}

impl Track {
    /// One past the last pixel of the positioner
    pub fn positioner_end(&self) -> u32 {
        self.positioner_offset.saturating_add(self.positioner_length)
    }
}

/// Orientation-specific geometry queries
///
/// Implementations are pure: every answer derives from the arguments and the
/// axis' own definition.
pub trait Axis {
    /// Total pixel length available for the bar.
    fn track_length(&self, size: Size) -> u32;

    /// The minimum length of the positioner.
    fn min_positioner_length(&self) -> u32;

    /// The maximum length of the positioner, 0 when unrestricted.
    fn max_positioner_length(&self) -> u32;

    /// Pixels reserved for borders before the usable track.
    fn leading_margin(&self) -> u32;

    /// Pixels reserved for borders after the usable track.
    fn trailing_margin(&self) -> u32;

    fn is_on_positioner(&self, track: &Track, point: Point) -> bool;

    fn on_track(&self, track: &Track, point: Point) -> TrackHit;

    /// Signed displacement along the axis, negative towards the begin.
    fn projected_delta(&self, origin: Point, current: Point) -> i32;
}

/// Classifies `along` on an axis once `across` is known to be on the bar
pub(crate) fn classify_along(
    track: &Track,
    along: i32,
    track_length: u32,
    leading: u32,
    trailing: u32,
) -> TrackHit {
    let start = leading as i64;
    let end = track_length as i64 - trailing as i64;
    let along = along as i64;

    if along < start || along >= end {
        return TrackHit::None;
    }

    if along < track.positioner_offset as i64 {
        TrackHit::Before
    } else if along >= track.positioner_end() as i64 {
        TrackHit::After
    } else {
        TrackHit::None
    }
}

/// Whether `value` lies within `[start, start + length)`
pub(crate) fn within(value: i32, start: u32, length: u32) -> bool {
    let value = value as i64;
    value >= start as i64 && value < start as i64 + length as i64
}
