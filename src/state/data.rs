/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the photo pipeline and the UI layer.

use std::path::PathBuf;

/// A single photo in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    /// Full path to the source image
    pub path: PathBuf,
    /// Human-readable label derived from the file name
    pub label: String,
    /// Path to the cached thumbnail
    pub thumbnail: PathBuf,
}
