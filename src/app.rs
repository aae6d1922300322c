mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

pub use app_state::{App, AppLayout};
pub use mouse_events::{HoverTracker, handle_mouse_event};


#[cfg(test)]
#[path = "app/app_render_tests.rs"]
mod app_render_tests;
