//! Occupancy grid rasterization
//!
//! Converts continuous wall geometry into a discrete passable/blocked grid.
//! Each wall's footprint is grown by the clearance margin before it is
//! stamped, so any cell left passable can hold the marble's center without the
//! marble touching a wall.

use super::geometry::{FieldBounds, Point, Rect, Wall};
use crate::consts::{CELL_SIZE, CLEARANCE_MARGIN};

/// Row/column address of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub row: usize,
    pub col: usize,
}

impl CellCoord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Row-major passable/blocked grid over the play field
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    cell_size: f32,
    passable: Vec<bool>,
}

impl OccupancyGrid {
    /// Rasterize with the engine's cell size and clearance margin
    pub fn rasterize(walls: &[Wall], bounds: FieldBounds) -> Self {
        Self::rasterize_with(walls, bounds, CELL_SIZE, CLEARANCE_MARGIN)
    }

    /// Rasterize with explicit constants
    ///
    /// The grid has `floor(height / cell_size)` rows and `floor(width / cell_size)`
    /// columns, each at least 1. A cell is blocked when its rectangle overlaps a
    /// wall footprint expanded by `margin` with positive area.
    pub fn rasterize_with(walls: &[Wall], bounds: FieldBounds, cell_size: f32, margin: f32) -> Self {
        debug_assert!(cell_size > 0.0, "cell size must be positive");
        let rows = ((bounds.height() / cell_size).floor() as usize).max(1);
        let cols = ((bounds.width() / cell_size).floor() as usize).max(1);

        let mut grid = Self {
            rows,
            cols,
            cell_size,
            passable: vec![true; rows * cols],
        };

        for wall in walls {
            grid.block_rect(&wall.footprint(margin));
        }

        grid
    }

    /// Block every cell whose rectangle overlaps `rect`
    fn block_rect(&mut self, rect: &Rect) {
        let Some((col_lo, col_hi)) = cell_span(rect.min.x, rect.max.x, self.cell_size, self.cols) else {
            return;
        };
        let Some((row_lo, row_hi)) = cell_span(rect.min.y, rect.max.y, self.cell_size, self.rows) else {
            return;
        };

        for row in row_lo..=row_hi {
            let base = row * self.cols;
            self.passable[base + col_lo..=base + col_hi].fill(false);
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.passable.len()
    }

    /// Out-of-range cells are reported as blocked
    #[inline]
    pub fn is_passable(&self, cell: CellCoord) -> bool {
        cell.row < self.rows && cell.col < self.cols && self.passable[cell.row * self.cols + cell.col]
    }

    pub fn passable_count(&self) -> usize {
        self.passable.iter().filter(|&&p| p).count()
    }

    /// Cell containing `point`, clamped into the grid
    ///
    /// Points on the far field edge (or outside it) land in the last row/column
    /// instead of indexing past the end.
    pub fn cell_for_point(&self, point: Point) -> CellCoord {
        CellCoord {
            row: clamp_index(point.y / self.cell_size, self.rows),
            col: clamp_index(point.x / self.cell_size, self.cols),
        }
    }

    /// In-bounds 4-neighbours of `cell`, passable or not
    pub fn neighbors(&self, cell: CellCoord) -> impl Iterator<Item = CellCoord> {
        let (rows, cols) = (self.rows, self.cols);
        let CellCoord { row, col } = cell;
        [
            row.checked_sub(1).map(|r| CellCoord::new(r, col)),
            (row + 1 < rows).then(|| CellCoord::new(row + 1, col)),
            col.checked_sub(1).map(|c| CellCoord::new(row, c)),
            (col + 1 < cols).then(|| CellCoord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Row-major index of a cell, for visited sets
    #[inline]
    pub fn index_of(&self, cell: CellCoord) -> usize {
        cell.row * self.cols + cell.col
    }

    /// `#` for blocked cells and `.` for passable ones, one line per row
    pub fn to_ascii(&self) -> String {
        self.render_with_points(None, &[])
    }

    /// ASCII rendering with `S` at the start cell and `G` at each goal cell
    pub fn render_with_points(&self, start: Option<Point>, goals: &[Point]) -> String {
        let mut chars: Vec<char> = self
            .passable
            .iter()
            .map(|&p| if p { '.' } else { '#' })
            .collect();
        for &goal in goals {
            let idx = self.index_of(self.cell_for_point(goal));
            chars[idx] = 'G';
        }
        if let Some(start) = start {
            let idx = self.index_of(self.cell_for_point(start));
            chars[idx] = 'S';
        }

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in chars.chunks(self.cols) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Inclusive index range of cells overlapping `[lo, hi]` along one axis
fn cell_span(lo: f32, hi: f32, cell_size: f32, count: usize) -> Option<(usize, usize)> {
    let first = (lo / cell_size).floor() as i64;
    let last = (hi / cell_size).ceil() as i64 - 1;
    let max = count as i64 - 1;
    if last < 0 || first > max || first > last {
        return None;
    }
    Some((first.max(0) as usize, last.min(max) as usize))
}

#[inline]
fn clamp_index(scaled: f32, count: usize) -> usize {
    // `as` saturates: negatives and NaN become 0
    (scaled.floor() as usize).min(count - 1)
}
