use crate::canvas::Canvas;
use crate::style::TextureStyle;
use crate::{TEXTURE_HEIGHT, TEXTURE_WIDTH, draw};
use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Errors from exporting textures.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Content digest of a texture's pixels: the first 8 bytes of SHA-256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureDigest(pub u64);

impl std::fmt::Display for TextureDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl TextureDigest {
    fn of(image: &RgbaImage) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(image.width().to_le_bytes());
        hasher.update(image.height().to_le_bytes());
        hasher.update(image.as_raw());
        let result = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&result[..8]);
        TextureDigest(u64::from_le_bytes(bytes))
    }
}

struct TextureData {
    key: String,
    style: Option<TextureStyle>,
    image: RgbaImage,
    digest: TextureDigest,
}

/// Shared, immutable generated image. Clones are cheap and point at the
/// same pixels.
#[derive(Clone)]
pub struct TextureHandle {
    inner: Arc<TextureData>,
}

impl std::fmt::Debug for TextureHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureHandle")
            .field("key", &self.inner.key)
            .field("style", &self.inner.style)
            .field("size", &(self.width(), self.height()))
            .field("digest", &self.inner.digest)
            .finish()
    }
}

impl TextureHandle {
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// The style that drew this texture, or `None` for the fallback.
    pub fn style(&self) -> Option<TextureStyle> {
        self.inner.style
    }

    pub fn is_fallback(&self) -> bool {
        self.inner.style.is_none()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.inner.image
    }

    pub fn width(&self) -> u32 {
        self.inner.image.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.image.height()
    }

    pub fn digest(&self) -> TextureDigest {
        self.inner.digest
    }

    /// Whether both handles share one stored image.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), TextureError> {
        self.inner
            .image
            .save_with_format(path.as_ref(), ImageFormat::Png)?;
        Ok(())
    }
}

/// Draw the texture for `key` without caching. Unknown keys get the flat
/// fallback image.
pub fn generate(key: &str) -> TextureHandle {
    let style = key.parse::<TextureStyle>().ok();
    let _span = tracing::debug_span!("generate_texture", key).entered();

    let mut canvas = Canvas::new(TEXTURE_WIDTH, TEXTURE_HEIGHT);
    match style {
        Some(style) => style.paint(&mut canvas),
        None => {
            tracing::warn!(key, "no texture style for key, using fallback");
            draw::fallback(&mut canvas);
        }
    }
    let image = canvas.into_image();
    let digest = TextureDigest::of(&image);
    tracing::debug!(key, %digest, "texture generated");

    TextureHandle {
        inner: Arc::new(TextureData {
            key: key.to_string(),
            style,
            image,
            digest,
        }),
    }
}

/// Lookup counters for a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Anything that can resolve a texture key to an image.
pub trait TextureLookup {
    /// Resolve `key`. Never fails.
    fn texture(&mut self, key: &str) -> TextureHandle;
}

/// Single-threaded memo of generated textures.
///
/// Entries live as long as the cache; nothing is evicted.
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<String, TextureHandle>,
    stats: CacheStats,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the texture for `key`, drawing it on first request.
    pub fn get(&mut self, key: &str) -> TextureHandle {
        if let Some(handle) = self.entries.get(key) {
            self.stats.hits += 1;
            tracing::trace!(key, "texture cache hit");
            return handle.clone();
        }
        self.stats.misses += 1;
        let handle = generate(key);
        self.entries.insert(key.to_string(), handle.clone());
        handle
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl TextureLookup for TextureCache {
    fn texture(&mut self, key: &str) -> TextureHandle {
        self.get(key)
    }
}

/// Thread-safe texture memo.
///
/// Each key owns a once-cell: the first caller generates, concurrent callers
/// for the same key wait for that result, and distinct keys generate in
/// parallel. The map lock is never held while drawing.
#[derive(Default)]
pub struct SharedTextureCache {
    entries: Mutex<HashMap<String, Arc<OnceLock<TextureHandle>>>>,
}

impl SharedTextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> TextureHandle {
        let slot = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(entries.entry(key.to_string()).or_default())
        };
        slot.get_or_init(|| generate(key)).clone()
    }

    /// Number of keys that have been requested.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TextureLookup for SharedTextureCache {
    fn texture(&mut self, key: &str) -> TextureHandle {
        self.get(key)
    }
}

impl TextureLookup for &SharedTextureCache {
    fn texture(&mut self, key: &str) -> TextureHandle {
        self.get(key)
    }
}

/// Texture for `key` from the process-wide cache.
pub fn art_texture(key: &str) -> TextureHandle {
    static GLOBAL: OnceLock<SharedTextureCache> = OnceLock::new();
    GLOBAL.get_or_init(SharedTextureCache::new).get(key)
}
