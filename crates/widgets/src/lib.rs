//! time-clock-widgets: Widget implementations for time-clock.

pub mod time_clock;

pub use time_clock::{ClockFace, Hand, HandPlacement};

use time_clock_core::{register_widget, Registry};
use time_clock_types::WIDGET_TYPE_TIME_CLOCK;

/// Register all built-in widgets
pub fn register_all(registry: &mut Registry) {
    register_widget!(registry, WIDGET_TYPE_TIME_CLOCK, ClockFace);
}
