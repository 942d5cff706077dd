//! Drawing surface trait

use crate::bitmap::Bitmap;
use anyhow::Result;
use time_clock_types::Rect;

/// Drawing surface handed to widgets during paint
///
/// Combines the plain image blitter (`draw_image_centered`) with a vector
/// context whose transform stack is driven by `save`/`translate`/`rotate`/
/// `restore`. Every `save` must be paired with a `restore`.
pub trait Canvas {
    /// Offset of the painted widget's box on the surface
    fn origin(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Draw `bitmap` at native size centred in `dst`, clipped to `dst`
    fn draw_image_centered(&mut self, bitmap: &Bitmap, dst: Rect) -> Result<()>;

    fn save(&mut self) -> Result<()>;

    fn restore(&mut self) -> Result<()>;

    fn translate(&mut self, dx: f64, dy: f64);

    /// Rotate clockwise by `radians` (y-down coordinates)
    fn rotate(&mut self, radians: f64);

    /// Draw the `src` region of `bitmap` into `dst` under the current transform
    fn draw_image(&mut self, bitmap: &Bitmap, src: Rect, dst: Rect) -> Result<()>;
}
