//! time-clock-core: Core traits and widget tree for time-clock.
//!
//! This crate contains the seams the clock face is written against: the
//! `Widget` trait, the `Canvas` drawing surface, image resolution through
//! `ImageResolver`, the widget `Registry` and the `WidgetTree` that owns
//! live widgets and their layout boxes.

mod bitmap;
mod canvas;
mod error;
mod registry;
mod tree;
mod widget;

pub use bitmap::{Bitmap, ImageResolver, MemoryImageResolver};
pub use canvas::Canvas;
pub use error::{ImageError, WidgetError};
pub use registry::{Registry, WidgetFactory};
pub use tree::{WidgetId, WidgetTree};
pub use widget::{BoxedWidget, Widget};

// Re-export types used in trait signatures for convenience
pub use time_clock_types::{Rect, Value};
