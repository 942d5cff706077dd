//! time-clock: an analog clock face widget composited from images
//!
//! This library ties the workspace together:
//! - `ClockFace`, the widget, and the trait seams it is written against
//! - The Cairo canvas and PNG image resolver
//! - Application configuration and the wall-clock ticker used by the binary

pub mod config;
pub mod ticker;

// Re-export commonly used types
pub use config::AppConfig;
pub use ticker::ClockTicker;
pub use time_clock_core::{
    Bitmap, Canvas, ImageError, ImageResolver, MemoryImageResolver, Registry, Widget,
    WidgetError, WidgetId, WidgetTree,
};
pub use time_clock_render::{render_to_surface, CairoCanvas, FileImageResolver};
pub use time_clock_types::{ClockFaceConfig, Rect, Value, WIDGET_TYPE_TIME_CLOCK};
pub use time_clock_widgets::{time_clock, ClockFace, Hand};

/// Widget tree with all built-in widgets registered
pub fn default_tree() -> WidgetTree {
    let mut registry = Registry::new();
    time_clock_widgets::register_all(&mut registry);
    WidgetTree::new(registry)
}
