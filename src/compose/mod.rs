//! Canvas composition: fixed mosaic layout, tile placement and seam blurring

/// Tile placement and paste loop
pub mod canvas;
/// Declarative mosaic geometry
pub mod layout;
/// Gaussian smoothing of the seam rectangles
pub mod seams;
