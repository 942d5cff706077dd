//! Widget trait

use crate::bitmap::ImageResolver;
use crate::canvas::Canvas;
use crate::error::WidgetError;
use std::any::Any;
use time_clock_types::{Rect, Value};

/// Trait for all widgets hosted by a `WidgetTree`
///
/// Widgets hold their own state and render it on request. Layout geometry
/// belongs to the tree; `on_paint_self` receives the widget's box as
/// `{0, 0, w, h}`.
pub trait Widget: Any {
    /// Registered type name (e.g. "time_clock")
    fn widget_type(&self) -> &str;

    /// Paint the widget's own content
    fn on_paint_self(
        &self,
        canvas: &mut dyn Canvas,
        bounds: Rect,
        images: &dyn ImageResolver,
    ) -> Result<(), WidgetError>;

    /// Read a property by name
    fn get_prop(&self, name: &str) -> Result<Value, WidgetError>;

    /// Write a property by name
    fn set_prop(&mut self, name: &str, value: &Value) -> Result<(), WidgetError>;

    /// Release owned resources before the widget is dropped.
    ///
    /// Must be safe to call more than once.
    fn destroy(&mut self) {}

    /// Properties copied when the widget is cloned
    fn clone_properties(&self) -> &'static [&'static str] {
        &[]
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Type-erased widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;
