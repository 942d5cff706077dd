//! time-clock-render: Cairo backend for time-clock widgets.
//!
//! Provides the `Canvas` implementation over a Cairo context, a PNG image
//! resolver with a decode cache and, with the `gtk` feature, a GTK4
//! `DrawingArea` host for a widget tree.

mod cairo_canvas;
pub mod image_cache;

#[cfg(feature = "gtk")]
pub mod clock_area;

pub use cairo_canvas::CairoCanvas;
pub use image_cache::FileImageResolver;

#[cfg(feature = "gtk")]
pub use clock_area::create_clock_area;

use anyhow::Result;
use time_clock_core::{ImageResolver, WidgetId, WidgetTree};

/// Paint one widget of `tree` into a new ARGB32 surface of its own size
pub fn render_to_surface(
    tree: &WidgetTree,
    id: WidgetId,
    images: &dyn ImageResolver,
) -> Result<cairo::ImageSurface> {
    let bounds = tree.bounds(id)?;
    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        bounds.w.ceil().max(1.0) as i32,
        bounds.h.ceil().max(1.0) as i32,
    )?;
    {
        let cr = cairo::Context::new(&surface)?;
        // The surface is the widget's own box
        cr.translate(-bounds.x, -bounds.y);
        let mut canvas = CairoCanvas::new(&cr);
        tree.paint(id, &mut canvas, images)?;
    }
    surface.flush();
    Ok(surface)
}
