/// Photo discovery and decoding module
///
/// This module handles:
/// - Scanning a folder for supported image files
/// - Generating thumbnails
/// - Caching thumbnails to disk

pub mod loader;
pub mod thumbnail;
