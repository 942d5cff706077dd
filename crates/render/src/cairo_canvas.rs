//! Cairo implementation of the widget canvas

use anyhow::{Context as _, Result};
use cairo::Context;
use time_clock_core::{Bitmap, Canvas, Rect};

/// Canvas drawing onto a Cairo context
///
/// `origin` offsets every draw without being baked into the context's
/// transform, mirroring a host that paints a widget at a device offset.
pub struct CairoCanvas<'a> {
    cr: &'a Context,
    origin: (f64, f64),
}

impl<'a> CairoCanvas<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self::with_origin(cr, 0.0, 0.0)
    }

    pub fn with_origin(cr: &'a Context, ox: f64, oy: f64) -> Self {
        Self {
            cr,
            origin: (ox, oy),
        }
    }
}

impl Canvas for CairoCanvas<'_> {
    fn origin(&self) -> (f64, f64) {
        self.origin
    }

    fn draw_image_centered(&mut self, bitmap: &Bitmap, dst: Rect) -> Result<()> {
        let (ox, oy) = self.origin;
        let dst = Rect::new(dst.x + ox, dst.y + oy, dst.w, dst.h);
        if dst.is_empty() {
            return Ok(());
        }
        // Same unrounded centre the hand pivots use
        let at = dst.centered(bitmap.width(), bitmap.height());

        self.cr.save()?;
        self.cr.rectangle(dst.x, dst.y, dst.w, dst.h);
        self.cr.clip();
        let painted = self
            .cr
            .set_source_surface(bitmap.surface(), at.x, at.y)
            .and_then(|_| self.cr.paint());
        self.cr.restore()?;

        painted.with_context(|| format!("drawing centered image {}", bitmap.name()))
    }

    fn save(&mut self) -> Result<()> {
        self.cr.save()?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.cr.restore()?;
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cr.translate(dx, dy);
    }

    fn rotate(&mut self, radians: f64) {
        self.cr.rotate(radians);
    }

    fn draw_image(&mut self, bitmap: &Bitmap, src: Rect, dst: Rect) -> Result<()> {
        if src.is_empty() || dst.is_empty() {
            return Ok(());
        }

        self.cr.save()?;
        self.cr.translate(dst.x, dst.y);
        self.cr.scale(dst.w / src.w, dst.h / src.h);
        let drawn = self
            .cr
            .set_source_surface(bitmap.surface(), -src.x, -src.y)
            .and_then(|_| {
                self.cr.rectangle(0.0, 0.0, src.w, src.h);
                self.cr.fill()
            });
        self.cr.restore()?;

        drawn.with_context(|| format!("drawing image {}", bitmap.name()))
    }
}
