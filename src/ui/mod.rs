/// View modules
///
/// These build the widget tree for the root application:
/// - The thumbnail grid (grid.rs)
/// - The lightbox overlay (lightbox.rs)

pub mod grid;
pub mod lightbox;
