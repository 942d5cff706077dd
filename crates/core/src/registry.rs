//! Registry of widget factories

use crate::error::WidgetError;
use crate::widget::BoxedWidget;
use std::collections::HashMap;

/// Function that creates a widget with zeroed state
pub type WidgetFactory = fn() -> BoxedWidget;

/// Registry for widget types
///
/// Built-in widgets are registered at startup; hosts may add their own.
#[derive(Default)]
pub struct Registry {
    widgets: HashMap<String, WidgetFactory>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget type
    pub fn register_widget(&mut self, widget_type: &str, factory: WidgetFactory) {
        self.widgets.insert(widget_type.to_string(), factory);
    }

    /// Create a widget by type name
    pub fn create_widget(&self, widget_type: &str) -> Result<BoxedWidget, WidgetError> {
        let factory = self
            .widgets
            .get(widget_type)
            .ok_or_else(|| WidgetError::NotFound(format!("widget type {}", widget_type)))?;
        Ok(factory())
    }
}

/// Macro to register a widget type backed by its `Default` impl
#[macro_export]
macro_rules! register_widget {
    ($registry:expr, $id:expr, $type:ty) => {
        $registry.register_widget($id, || Box::new(<$type>::default()));
    };
}
