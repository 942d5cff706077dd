//! Decoded images and the resolver that produces them

use crate::error::ImageError;
use std::collections::HashMap;
use std::fmt;

/// A decoded image ready to be drawn
///
/// Wraps a Cairo image surface; clones share the same pixels.
#[derive(Clone)]
pub struct Bitmap {
    name: String,
    surface: cairo::ImageSurface,
}

impl Bitmap {
    pub fn new(name: impl Into<String>, surface: cairo::ImageSurface) -> Self {
        Self {
            name: name.into(),
            surface,
        }
    }

    /// Fully transparent bitmap of the given size
    pub fn blank(name: impl Into<String>, width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self::new(name, surface))
    }

    /// Bitmap filled with a single colour
    pub fn solid(
        name: impl Into<String>,
        width: i32,
        height: i32,
        rgba: (f64, f64, f64, f64),
    ) -> Result<Self, cairo::Error> {
        let bitmap = Self::blank(name, width, height)?;
        {
            let cr = cairo::Context::new(&bitmap.surface)?;
            cr.set_source_rgba(rgba.0, rgba.1, rgba.2, rgba.3);
            cr.paint()?;
        }
        bitmap.surface.flush();
        Ok(bitmap)
    }

    /// Logical name the bitmap was resolved from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.surface.width() as f64
    }

    pub fn height(&self) -> f64 {
        self.surface.height() as f64
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("name", &self.name)
            .field("width", &self.surface.width())
            .field("height", &self.surface.height())
            .finish()
    }
}

/// Resolves logical image names to decoded bitmaps
///
/// Called synchronously from the render thread; implementations are expected
/// to cache.
pub trait ImageResolver {
    fn load(&self, name: &str) -> Result<Bitmap, ImageError>;
}

/// Resolver backed by an in-memory table of pre-decoded bitmaps
#[derive(Debug, Default)]
pub struct MemoryImageResolver {
    images: HashMap<String, Bitmap>,
}

impl MemoryImageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bitmap under its own name
    pub fn insert(&mut self, bitmap: Bitmap) {
        self.images.insert(bitmap.name().to_string(), bitmap);
    }

    pub fn remove(&mut self, name: &str) -> Option<Bitmap> {
        self.images.remove(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageResolver for MemoryImageResolver {
    fn load(&self, name: &str) -> Result<Bitmap, ImageError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| ImageError::NotFound(name.to_string()))
    }
}
