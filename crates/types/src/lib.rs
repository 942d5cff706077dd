//! time-clock-types: Shared data types for the time-clock widget.
//!
//! This crate contains pure data types (geometry, property values, the
//! clock's persisted configuration) shared across all time-clock crates.
//! These types have no Cairo or GTK dependencies, making them suitable as
//! a foundation layer.

pub mod clock;
pub mod geometry;
pub mod value;

// Re-export commonly used types at the crate root for convenience
pub use clock::{ClockFaceConfig, TIME_CLOCK_PROPERTIES, WIDGET_TYPE_TIME_CLOCK};
pub use geometry::Rect;
pub use value::Value;
