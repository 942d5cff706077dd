//! GTK4 host for a widget tree

use gtk4::prelude::*;
use gtk4::DrawingArea;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use time_clock_core::{ImageResolver, WidgetId, WidgetTree};

use crate::CairoCanvas;

/// Create a drawing area that paints widget `id` filling its allocation
///
/// The widget's box follows the allocated size; call `queue_draw` on the
/// returned area after changing the widget's properties.
pub fn create_clock_area(
    tree: Rc<RefCell<WidgetTree>>,
    id: WidgetId,
    images: Rc<dyn ImageResolver>,
) -> DrawingArea {
    let drawing_area = DrawingArea::new();
    if let Ok(bounds) = tree.borrow().bounds(id) {
        drawing_area.set_size_request(bounds.w as i32, bounds.h as i32);
    }

    drawing_area.set_draw_func(move |_, cr, width, height| {
        // Use try_borrow_mut to avoid panicking if a timer holds the tree
        let Ok(mut tree) = tree.try_borrow_mut() else {
            return;
        };
        let bounds = match tree.bounds(id) {
            Ok(bounds) => bounds,
            Err(e) => {
                warn!("Clock area lost its widget: {}", e);
                return;
            }
        };
        if let Err(e) = tree.resize(id, width as f64, height as f64) {
            warn!("Failed to resize widget {}: {}", id, e);
        }

        cr.translate(-bounds.x, -bounds.y);
        let mut canvas = CairoCanvas::new(cr);
        if let Err(e) = tree.paint(id, &mut canvas, images.as_ref()) {
            warn!("Failed to paint widget {}: {}", id, e);
        }
    });

    drawing_area
}
