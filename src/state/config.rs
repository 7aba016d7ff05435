/// Persisted gallery configuration
///
/// Stored as JSON in the user configuration directory. A missing or
/// unparseable file falls back to defaults so a bad config can never
/// prevent startup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Edge length thumbnails are resized to fit within.
pub const DEFAULT_THUMBNAIL_PX: u32 = 256;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Folder scanned for photos; the platform Pictures directory is used
    /// when unset.
    pub photos_dir: Option<PathBuf>,
    /// Thumbnail edge length in pixels.
    pub thumbnail_px: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_dir: None,
            thumbnail_px: DEFAULT_THUMBNAIL_PX,
        }
    }
}

impl GalleryConfig {
    /// Where the configuration is stored:
    /// - Linux: ~/.config/photo-gallery/config.json
    /// - macOS: ~/Library/Application Support/photo-gallery/config.json
    /// - Windows: %APPDATA%\photo-gallery\config.json
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("photo-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Load the saved configuration, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write the configuration to disk, creating its directory first.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::path() else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no user config directory",
            ));
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Convert to JSON string for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let config = GalleryConfig {
            photos_dir: Some(PathBuf::from("/home/me/Pictures/trip")),
            thumbnail_px: 384,
        };

        let json = config.to_json().unwrap();
        let restored = GalleryConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn default_has_no_folder() {
        let config = GalleryConfig::default();
        assert!(config.photos_dir.is_none());
        assert_eq!(config.thumbnail_px, DEFAULT_THUMBNAIL_PX);
    }

    #[test]
    fn corrupt_json_is_an_error() {
        assert!(GalleryConfig::from_json("{not json").is_err());
    }
}
