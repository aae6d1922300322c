//! Scroll bar core
//!
//! Tracks a window of visible items over a larger item range, projects it
//! onto the pixels of a draggable positioner and turns pointer input and
//! step commands back into item positions. Orientation is supplied by an
//! [`Axis`] implementation.

mod axis;
mod geometry;
mod horizontal;
mod scroll_range;
mod scrollbar_events;
mod scrollbar_state;
mod vertical;
mod widget_state;

pub use axis::{Axis, Point, Size, Track, TrackHit};
pub use geometry::{PositionerGeometry, compute};
pub use horizontal::HorizontalAxis;
pub use scroll_range::{ScrollRange, ScrollStep};
pub use scrollbar_events::DragSession;
pub use scrollbar_state::{CanvasHook, CanvasUpdate, PositionerMoveCallback, Scrollbar};
pub use vertical::VerticalAxis;
pub use widget_state::WidgetState;
