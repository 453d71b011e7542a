//! Equal-division geometry shared by every layout path.
//!
//! The manager-level `arrange`/`grid`, the group-native `arrange_*` methods
//! and the built-in layout presets all compute frames here. They differ only
//! in which screen size they pass in and which defaults they pick.

use casement_common::{Geometry, ScreenSize};

/// Offset between consecutive cascaded windows, in pixels.
pub const CASCADE_OFFSET: i32 = 30;

/// Columns used when a grid is requested without an explicit count.
pub const DEFAULT_GRID_COLUMNS: usize = 2;

/// Split the screen into `count` full-height columns, left to right.
pub fn horizontal(screen: ScreenSize, count: usize) -> Vec<Geometry> {
    if count == 0 {
        return Vec::new();
    }
    let width = screen.width / count as u32;
    (0..count)
        .map(|i| Geometry::new((i as u32 * width) as i32, 0, width, screen.height))
        .collect()
}

/// Split the screen into `count` full-width rows, top to bottom.
pub fn vertical(screen: ScreenSize, count: usize) -> Vec<Geometry> {
    if count == 0 {
        return Vec::new();
    }
    let height = screen.height / count as u32;
    (0..count)
        .map(|i| Geometry::new(0, (i as u32 * height) as i32, screen.width, height))
        .collect()
}

/// Row-major grid with `columns` cells per row.
///
/// `rows = ceil(count / columns)`. A final partial row keeps its cells
/// left-aligned. A `columns` of zero is treated as one.
pub fn grid(screen: ScreenSize, count: usize, columns: usize) -> Vec<Geometry> {
    if count == 0 {
        return Vec::new();
    }
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    let width = screen.width / columns as u32;
    let height = screen.height / rows as u32;
    (0..count)
        .map(|i| {
            let col = (i % columns) as u32;
            let row = (i / columns) as u32;
            Geometry::new((col * width) as i32, (row * height) as i32, width, height)
        })
        .collect()
}

/// Column count for a roughly square grid: `ceil(sqrt(count))`.
pub fn square_columns(count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < count {
        columns += 1;
    }
    columns
}

/// Top-left corners for a cascade. Offsets grow without bound.
pub fn cascade(count: usize) -> Vec<(i32, i32)> {
    (0..count)
        .map(|i| {
            let offset = CASCADE_OFFSET * i as i32;
            (offset, offset)
        })
        .collect()
}

/// Master on the leading side, detail taking `ratio` of the width on the
/// trailing side. `ratio` is clamped to `[0, 1]`.
pub fn master_detail(screen: ScreenSize, ratio: f64) -> (Geometry, Geometry) {
    let ratio = ratio.clamp(0.0, 1.0);
    let detail_width = (screen.width as f64 * ratio).floor() as u32;
    let master_width = screen.width - detail_width;
    (
        Geometry::new(0, 0, master_width, screen.height),
        Geometry::new(master_width as i32, 0, detail_width, screen.height),
    )
}
