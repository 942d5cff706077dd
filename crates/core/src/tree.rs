//! Widget tree: owns live widgets and their layout boxes

use crate::bitmap::ImageResolver;
use crate::canvas::Canvas;
use crate::error::WidgetError;
use crate::registry::Registry;
use crate::widget::{BoxedWidget, Widget};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use time_clock_types::{Rect, Value};

/// Handle to a widget in a `WidgetTree`
///
/// Ids are never reused, so a handle to a destroyed widget stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Node {
    widget: BoxedWidget,
    bounds: Rect,
}

/// Owner of all live widgets
pub struct WidgetTree {
    registry: Registry,
    nodes: BTreeMap<WidgetId, Node>,
    next_id: u64,
}

impl WidgetTree {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            nodes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a widget of a registered type with zeroed state
    pub fn create(
        &mut self,
        widget_type: &str,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    ) -> Result<WidgetId, WidgetError> {
        let widget = self.registry.create_widget(widget_type)?;
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                widget,
                bounds: Rect::new(x, y, w, h),
            },
        );
        debug!("Created {} widget {} ({}x{} at {},{})", widget_type, id, w, h, x, y);
        Ok(id)
    }

    /// Destroy a widget, releasing its resources
    pub fn destroy(&mut self, id: WidgetId) -> Result<(), WidgetError> {
        let mut node = self.nodes.remove(&id).ok_or_else(|| stale(id))?;
        node.widget.destroy();
        debug!("Destroyed {} widget {}", node.widget.widget_type(), id);
        Ok(())
    }

    /// Create a widget of the same type and box, copying its clone properties
    pub fn clone_widget(&mut self, id: WidgetId) -> Result<WidgetId, WidgetError> {
        let node = self.node(id)?;
        let widget_type = node.widget.widget_type().to_string();
        let bounds = node.bounds;
        let values = node
            .widget
            .clone_properties()
            .iter()
            .map(|name| node.widget.get_prop(name).map(|value| (*name, value)))
            .collect::<Result<Vec<_>, WidgetError>>()?;

        let clone = self.create(&widget_type, bounds.x, bounds.y, bounds.w, bounds.h)?;
        for (name, value) in &values {
            self.set_prop(clone, name, value)?;
        }
        Ok(clone)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Layout box of a widget, relative to its host
    pub fn bounds(&self, id: WidgetId) -> Result<Rect, WidgetError> {
        Ok(self.node(id)?.bounds)
    }

    pub fn resize(&mut self, id: WidgetId, w: f64, h: f64) -> Result<(), WidgetError> {
        let node = self.node_mut(id)?;
        node.bounds.w = w;
        node.bounds.h = h;
        Ok(())
    }

    pub fn widget(&self, id: WidgetId) -> Result<&dyn Widget, WidgetError> {
        Ok(&*self.node(id)?.widget)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Result<&mut dyn Widget, WidgetError> {
        Ok(&mut *self.node_mut(id)?.widget)
    }

    /// Borrow a widget as its concrete type
    pub fn cast<T: Widget>(&self, id: WidgetId) -> Result<&T, WidgetError> {
        let widget = self.widget(id)?;
        let widget_type = widget.widget_type().to_string();
        widget
            .as_any()
            .downcast_ref::<T>()
            .ok_or_else(|| mismatch(id, &widget_type))
    }

    /// Mutably borrow a widget as its concrete type
    pub fn cast_mut<T: Widget>(&mut self, id: WidgetId) -> Result<&mut T, WidgetError> {
        let widget = self.widget_mut(id)?;
        let widget_type = widget.widget_type().to_string();
        widget
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or_else(|| mismatch(id, &widget_type))
    }

    /// Read a property, falling back to the base geometry properties
    pub fn get_prop(&self, id: WidgetId, name: &str) -> Result<Value, WidgetError> {
        let node = self.node(id)?;
        match node.widget.get_prop(name) {
            Err(WidgetError::NotFound(_)) => base_prop(&node.bounds, name),
            other => other,
        }
    }

    /// Write a property, falling back to the base geometry properties
    pub fn set_prop(&mut self, id: WidgetId, name: &str, value: &Value) -> Result<(), WidgetError> {
        let node = self.node_mut(id)?;
        match node.widget.set_prop(name, value) {
            Err(WidgetError::NotFound(_)) => set_base_prop(&mut node.bounds, name, value),
            other => other,
        }
    }

    /// Paint a widget onto `canvas` at its layout position
    pub fn paint(
        &self,
        id: WidgetId,
        canvas: &mut dyn Canvas,
        images: &dyn ImageResolver,
    ) -> Result<(), WidgetError> {
        let node = self.node(id)?;
        let bounds = node.bounds;

        if let Err(e) = canvas.save() {
            warn!("Skipping paint of widget {}: {}", id, e);
            return Ok(());
        }
        canvas.translate(bounds.x, bounds.y);
        let result = node
            .widget
            .on_paint_self(canvas, Rect::from_size(bounds.w, bounds.h), images);
        if let Err(e) = canvas.restore() {
            warn!("Failed to restore canvas after widget {}: {}", id, e);
        }
        result
    }

    fn node(&self, id: WidgetId) -> Result<&Node, WidgetError> {
        self.nodes.get(&id).ok_or_else(|| stale(id))
    }

    fn node_mut(&mut self, id: WidgetId) -> Result<&mut Node, WidgetError> {
        self.nodes.get_mut(&id).ok_or_else(|| stale(id))
    }
}

impl Drop for WidgetTree {
    fn drop(&mut self) {
        for node in self.nodes.values_mut() {
            node.widget.destroy();
        }
    }
}

fn stale(id: WidgetId) -> WidgetError {
    WidgetError::invalid(format!("no live widget {}", id))
}

fn mismatch(id: WidgetId, widget_type: &str) -> WidgetError {
    WidgetError::invalid(format!("widget {} is a {}", id, widget_type))
}

fn base_prop(bounds: &Rect, name: &str) -> Result<Value, WidgetError> {
    let v = match name {
        "x" => bounds.x,
        "y" => bounds.y,
        "w" => bounds.w,
        "h" => bounds.h,
        _ => return Err(WidgetError::NotFound(name.to_string())),
    };
    Ok(Value::Int(v.round() as i32))
}

fn set_base_prop(bounds: &mut Rect, name: &str, value: &Value) -> Result<(), WidgetError> {
    let slot = match name {
        "x" => &mut bounds.x,
        "y" => &mut bounds.y,
        "w" => &mut bounds.w,
        "h" => &mut bounds.h,
        _ => return Err(WidgetError::NotFound(name.to_string())),
    };
    let v = value.as_int().ok_or_else(|| {
        WidgetError::invalid(format!("{} expects an integer, got {}", name, value))
    })?;
    *slot = v as f64;
    Ok(())
}
