//! The fixed six-tile mosaic geometry as data
//!
//! Three rows of height 280 on a 640x840 canvas. The two lowest-ranked
//! images take the larger, more central tiles of the middle row; rank 2
//! spans the full-width bottom row. Keeping the geometry in one table means
//! the composer and seam blurrer never carry loose pixel literals.

/// One tile of the mosaic: which rank fills it and where it lands
#[derive(Debug, Clone, Copy)]
pub struct TilePlacement {
    /// Index into the ranked selection (0 = lowest hybrid score)
    pub rank: usize,
    /// Left edge of the tile on the canvas
    pub x: u32,
    /// Top edge of the tile on the canvas
    pub y: u32,
    /// Tile width; source images are stretched to fit
    pub width: u32,
    /// Tile height; source images are stretched to fit
    pub height: u32,
}

/// The six tiles of the mosaic in paste order
pub const TILE_LAYOUT: [TilePlacement; 6] = [
    // Top row
    TilePlacement { rank: 5, x: 0, y: 0, width: 320, height: 280 },
    TilePlacement { rank: 4, x: 320, y: 0, width: 320, height: 280 },
    // Middle row
    TilePlacement { rank: 1, x: 0, y: 280, width: 200, height: 280 },
    TilePlacement { rank: 0, x: 200, y: 280, width: 240, height: 280 },
    TilePlacement { rank: 3, x: 440, y: 280, width: 200, height: 280 },
    // Bottom row
    TilePlacement { rank: 2, x: 0, y: 560, width: 640, height: 280 },
];

/// One rectangle straddling a tile boundary, smoothed to blend the seam
#[derive(Debug, Clone, Copy)]
pub struct SeamRegion {
    /// Left edge of the region
    pub x: u32,
    /// Top edge of the region
    pub y: u32,
    /// Region width
    pub width: u32,
    /// Region height
    pub height: u32,
}

impl SeamRegion {
    /// Whether a canvas pixel lies inside this region
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The five seam rectangles between adjacent tiles
pub const SEAM_REGIONS: [SeamRegion; 5] = [
    // Vertical seam inside the top row
    SeamRegion { x: 310, y: 0, width: 20, height: 290 },
    // Horizontal seam between top and middle rows
    SeamRegion { x: 0, y: 270, width: 640, height: 20 },
    // Horizontal seam between middle and bottom rows
    SeamRegion { x: 0, y: 550, width: 640, height: 20 },
    // Left vertical seam inside the middle row
    SeamRegion { x: 190, y: 290, width: 30, height: 270 },
    // Right vertical seam inside the middle row
    SeamRegion { x: 430, y: 290, width: 30, height: 270 },
];
