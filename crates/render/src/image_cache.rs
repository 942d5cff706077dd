//! File-backed image resolver with a decode cache
//!
//! Logical image names resolve to `<root>/<name>.png`. Names that already
//! carry an extension, or absolute paths, are used as given. Decoded bitmaps
//! are kept in a small cache so repainting a clock every second does not
//! re-read its five images from disk.

use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use time_clock_core::{Bitmap, ImageError, ImageResolver};

/// Default number of decoded images kept
pub const DEFAULT_MAX_ENTRIES: usize = 50;

/// Default time after which an unused entry may be evicted
pub const DEFAULT_EXPIRY: Duration = Duration::from_secs(300);

/// Resolves image names to PNG files under a root directory
pub struct FileImageResolver {
    root: PathBuf,
    // Single render thread; Cairo surfaces are not Send anyway
    cache: RefCell<ImageCache>,
}

impl FileImageResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_limits(root, DEFAULT_MAX_ENTRIES, DEFAULT_EXPIRY)
    }

    pub fn with_limits(root: impl Into<PathBuf>, max_entries: usize, expiry: Duration) -> Self {
        Self {
            root: root.into(),
            cache: RefCell::new(ImageCache::new(max_entries.max(1), expiry)),
        }
    }

    /// File a logical image name resolves to
    pub fn path_for(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() || path.extension().is_some() {
            self.root.join(path)
        } else {
            self.root.join(format!("{}.png", name))
        }
    }

    /// Drop a cached image (call when the file might have changed)
    pub fn invalidate(&self, name: &str) {
        self.cache.borrow_mut().bitmaps.remove(name);
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().bitmaps.clear();
    }

    /// Number of decoded images currently cached
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().bitmaps.len()
    }

    fn decode(&self, name: &str) -> Result<Bitmap, ImageError> {
        let path = self.path_for(name);
        let mut file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ImageError::NotFound(name.to_string()),
            _ => ImageError::Decode {
                name: name.to_string(),
                reason: e.to_string(),
            },
        })?;
        let surface =
            cairo::ImageSurface::create_from_png(&mut file).map_err(|e| ImageError::Decode {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        debug!(
            "Loaded image '{}' ({}x{}) from {}",
            name,
            surface.width(),
            surface.height(),
            path.display()
        );
        Ok(Bitmap::new(name, surface))
    }
}

impl ImageResolver for FileImageResolver {
    fn load(&self, name: &str) -> Result<Bitmap, ImageError> {
        if name.is_empty() {
            return Err(ImageError::NotFound(String::new()));
        }
        if let Some(bitmap) = self.cache.borrow_mut().get(name) {
            return Ok(bitmap);
        }

        let bitmap = self.decode(name)?;
        self.cache.borrow_mut().insert(name, bitmap.clone());
        Ok(bitmap)
    }
}

/// Cache for decoded images
struct ImageCache {
    /// Cached bitmaps keyed by image name
    bitmaps: HashMap<String, CachedImage>,
    /// Maximum cache size in entries
    max_entries: usize,
    /// Time after which cache entries expire
    expiry_duration: Duration,
}

struct CachedImage {
    bitmap: Bitmap,
    last_access: Instant,
}

impl ImageCache {
    fn new(max_entries: usize, expiry_duration: Duration) -> Self {
        Self {
            bitmaps: HashMap::new(),
            max_entries,
            expiry_duration,
        }
    }

    fn get(&mut self, name: &str) -> Option<Bitmap> {
        let entry = self.bitmaps.get_mut(name)?;
        entry.last_access = Instant::now();
        Some(entry.bitmap.clone())
    }

    fn insert(&mut self, name: &str, bitmap: Bitmap) {
        self.evict_if_needed();
        self.bitmaps.insert(
            name.to_string(),
            CachedImage {
                bitmap,
                last_access: Instant::now(),
            },
        );
    }

    /// Evict expired or excess entries
    fn evict_if_needed(&mut self) {
        let now = Instant::now();

        // Remove expired entries
        self.bitmaps
            .retain(|_, entry| now.duration_since(entry.last_access) < self.expiry_duration);

        // If still too many, remove oldest
        while self.bitmaps.len() >= self.max_entries {
            if let Some(oldest_key) = self
                .bitmaps
                .iter()
                .min_by_key(|(_, entry)| entry.last_access)
                .map(|(k, _)| k.clone())
            {
                self.bitmaps.remove(&oldest_key);
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_png(dir: &Path, file_name: &str, w: i32, h: i32) {
        let bitmap = Bitmap::solid("fixture", w, h, (0.2, 0.4, 0.6, 1.0)).unwrap();
        let mut file = File::create(dir.join(file_name)).unwrap();
        bitmap.surface().write_to_png(&mut file).unwrap();
    }

    #[test]
    fn test_path_for() {
        let images = FileImageResolver::new("/assets/images");
        assert_eq!(images.path_for("clock_bg"), PathBuf::from("/assets/images/clock_bg.png"));
        assert_eq!(
            images.path_for("hands/hour.png"),
            PathBuf::from("/assets/images/hands/hour.png")
        );
        assert_eq!(images.path_for("/tmp/x.png"), PathBuf::from("/tmp/x.png"));
    }

    #[test]
    fn test_loads_logical_name() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "clock_hour.png", 12, 70);

        let images = FileImageResolver::new(dir.path());
        let bitmap = images.load("clock_hour").unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (12.0, 70.0));
        assert_eq!(bitmap.name(), "clock_hour");
    }

    #[test]
    fn test_cache_serves_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "clock_bg.png", 8, 8);
        let images = FileImageResolver::new(dir.path());

        images.load("clock_bg").unwrap();
        fs::remove_file(dir.path().join("clock_bg.png")).unwrap();
        assert!(images.load("clock_bg").is_ok());
        assert_eq!(images.cached_len(), 1);

        images.invalidate("clock_bg");
        assert_eq!(
            images.load("clock_bg").unwrap_err(),
            ImageError::NotFound("clock_bg".to_string())
        );
    }

    #[test]
    fn test_missing_and_corrupt_images() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
        let images = FileImageResolver::new(dir.path());

        assert!(matches!(images.load("absent"), Err(ImageError::NotFound(_))));
        assert!(matches!(images.load(""), Err(ImageError::NotFound(_))));
        assert!(matches!(
            images.load("broken"),
            Err(ImageError::Decode { ref name, .. }) if name == "broken"
        ));
        assert_eq!(images.cached_len(), 0);
    }

    #[test]
    fn test_cache_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            write_png(dir.path(), &format!("img{}.png", i), 2, 2);
        }
        let images = FileImageResolver::with_limits(dir.path(), 3, DEFAULT_EXPIRY);

        for i in 0..5 {
            images.load(&format!("img{}", i)).unwrap();
        }
        assert_eq!(images.cached_len(), 3);

        images.clear();
        assert_eq!(images.cached_len(), 0);
    }
}
