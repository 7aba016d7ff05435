/// Thumbnail generation and disk caching
///
/// Thumbnails are resized once and cached under the user cache directory,
/// keyed by source path and size, so later launches skip the decode.

use image::imageops::FilterType;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Thumbnails are written as PNG so sources with transparency survive.
const CACHE_EXTENSION: &str = "png";

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("thumbnail cache unavailable: {0}")]
    Cache(#[from] io::Error),
    #[error("could not process image: {0}")]
    Image(#[from] image::ImageError),
}

/// Get the thumbnail cache directory, creating it if needed.
/// Returns ~/.cache/photo-gallery/thumbnails on Linux.
pub fn cache_dir() -> io::Result<PathBuf> {
    let mut path = dirs_next::cache_dir()
        .or_else(dirs_next::home_dir)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?;

    path.push("photo-gallery");
    path.push("thumbnails");
    fs::create_dir_all(&path)?;

    Ok(path)
}

/// Cache file for `source` at `size`: content-addressed by path and size,
/// so the same photo in overlapping galleries shares one entry.
pub fn thumbnail_path(cache: &Path, source: &Path, size: u32) -> PathBuf {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    size.hash(&mut hasher);
    cache.join(format!("{:016x}.{}", hasher.finish(), CACHE_EXTENSION))
}

/// Return the cached thumbnail for `source`, generating it on a miss.
pub fn ensure_thumbnail(source: &Path, size: u32) -> Result<PathBuf, ThumbnailError> {
    let cache = cache_dir()?;
    let path = thumbnail_path(&cache, source, size);
    if path.exists() {
        return Ok(path);
    }

    let decoded = image::open(source)?;
    let thumbnail = decoded.resize(size, size, FilterType::Lanczos3);
    thumbnail.save(&path)?;

    log::debug!("generated thumbnail {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_paths_are_deterministic() {
        let cache = Path::new("/cache");
        let source = Path::new("/photos/beach.jpg");
        assert_eq!(
            thumbnail_path(cache, source, 256),
            thumbnail_path(cache, source, 256)
        );
    }

    #[test]
    fn cache_paths_differ_by_source_and_size() {
        let cache = Path::new("/cache");
        let beach = Path::new("/photos/beach.jpg");
        let dunes = Path::new("/photos/dunes.jpg");
        assert_ne!(
            thumbnail_path(cache, beach, 256),
            thumbnail_path(cache, dunes, 256)
        );
        assert_ne!(
            thumbnail_path(cache, beach, 256),
            thumbnail_path(cache, beach, 512)
        );
    }

    #[test]
    fn cache_files_are_png() {
        let path = thumbnail_path(Path::new("/cache"), Path::new("/photos/beach.jpg"), 256);
        assert_eq!(path.extension().unwrap(), "png");
    }
}
