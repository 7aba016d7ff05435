/// Gallery loader
///
/// Scans a folder for supported images and prepares the fixed, ordered
/// photo sequence the gallery displays. The scan runs on a blocking task
/// because decoding and resizing are CPU-intensive.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task;
use walkdir::WalkDir;

use super::thumbnail;
use crate::state::data::Photo;

/// File extensions accepted into the gallery.
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff",
];

/// Failures that abort a gallery load.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("photos folder not found: {}", .0.display())]
    MissingFolder(PathBuf),
    #[error("no supported images in {}", .0.display())]
    EmptyFolder(PathBuf),
    #[error("background task failed: {0}")]
    Join(#[from] task::JoinError),
}

/// Load every supported image under `dir`, in deterministic path order.
pub async fn load_gallery(dir: PathBuf, thumbnail_px: u32) -> Result<Vec<Photo>, GalleryError> {
    // Spawn blocking because decoding and resizing are CPU-intensive
    task::spawn_blocking(move || scan_folder(&dir, thumbnail_px)).await?
}

/// Blocking implementation of the gallery scan.
fn scan_folder(dir: &Path, thumbnail_px: u32) -> Result<Vec<Photo>, GalleryError> {
    if !dir.is_dir() {
        return Err(GalleryError::MissingFolder(dir.to_path_buf()));
    }

    let mut sources: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file() && is_supported_image(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    // The sequence is fixed for the lifetime of a gallery instance; path
    // order keeps it stable across runs.
    sources.sort();

    let photos: Vec<Photo> = sources
        .into_iter()
        .filter_map(|path| {
            let thumbnail = match thumbnail::ensure_thumbnail(&path, thumbnail_px) {
                Ok(thumbnail) => thumbnail,
                Err(e) => {
                    log::warn!("skipping {}: {}", path.display(), e);
                    return None;
                }
            };
            let label = label_for(&path);
            Some(Photo {
                path,
                label,
                thumbnail,
            })
        })
        .collect();

    if photos.is_empty() {
        return Err(GalleryError::EmptyFolder(dir.to_path_buf()));
    }

    log::info!("loaded {} photos from {}", photos.len(), dir.display());
    Ok(photos)
}

/// Whether the extension is one the gallery can display.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Human label for a photo: the file stem with separators opened up.
fn label_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_accepts_common_formats() {
        assert!(is_supported_image(Path::new("/p/a.jpg")));
        assert!(is_supported_image(Path::new("/p/b.PNG")));
        assert!(is_supported_image(Path::new("/p/c.webp")));
        assert!(!is_supported_image(Path::new("/p/d.txt")));
        assert!(!is_supported_image(Path::new("/p/noext")));
    }

    #[test]
    fn labels_come_from_file_stems() {
        assert_eq!(label_for(Path::new("/p/summer_trip-01.jpg")), "summer trip 01");
        assert_eq!(label_for(Path::new("/p/beach.png")), "beach");
    }

    #[tokio::test]
    async fn missing_folder_is_an_error() {
        let result = load_gallery(PathBuf::from("/nonexistent/photos"), 256).await;
        assert!(matches!(result, Err(GalleryError::MissingFolder(_))));
    }
}
