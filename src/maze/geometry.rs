//! Geometry value types shared by generators, the rasterizer and consumers
//!
//! Coordinates are field-relative: the origin is one corner of the play field
//! and both axes grow toward the opposite corner. Walls are axis-aligned
//! rectangles described by their center, length and orientation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::BoundsError;
use crate::consts::{MAX_FIELD_SIZE, MIN_FIELD_SIZE, WALL_THICKNESS};
use crate::point_inset;

/// A real-valued position on the field
pub type Point = Vec2;

/// Which field axis a wall's length runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Grow the rectangle by `margin` on every side
    #[inline]
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// Positive-area overlap; rectangles that only share an edge don't intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Euclidean distance from `p` to the rectangle (0 when inside)
    pub fn distance_to(&self, p: Vec2) -> f32 {
        let dx = (self.min.x - p.x).max(0.0).max(p.x - self.max.x);
        let dy = (self.min.y - p.y).max(0.0).max(p.y - self.max.y);
        Vec2::new(dx, dy).length()
    }
}

/// A straight wall segment of fixed thickness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    center: Vec2,
    length: f32,
    orientation: Orientation,
}

impl Wall {
    pub fn new(center: Vec2, length: f32, orientation: Orientation) -> Self {
        debug_assert!(length > 0.0, "wall length must be positive");
        Self {
            center,
            length,
            orientation,
        }
    }

    pub fn horizontal(x: f32, y: f32, length: f32) -> Self {
        Self::new(Vec2::new(x, y), length, Orientation::Horizontal)
    }

    pub fn vertical(x: f32, y: f32, length: f32) -> Self {
        Self::new(Vec2::new(x, y), length, Orientation::Vertical)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width and height of the solid wall
    pub fn size(&self) -> Vec2 {
        match self.orientation {
            Orientation::Horizontal => Vec2::new(self.length, WALL_THICKNESS),
            Orientation::Vertical => Vec2::new(WALL_THICKNESS, self.length),
        }
    }

    /// The solid rectangle, without clearance
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, self.size())
    }

    /// The rectangle the marble's center must stay out of
    pub fn footprint(&self, margin: f32) -> Rect {
        self.rect().expanded(margin)
    }
}

/// Play-field dimensions supplied by the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldBounds {
    width: f32,
    height: f32,
}

impl FieldBounds {
    /// Checked constructor
    ///
    /// Non-positive or non-finite sizes cannot host a grid. Edges outside
    /// `MIN_FIELD_SIZE..=MAX_FIELD_SIZE` are rejected too: tiny fields push the
    /// inset points onto the border and huge ones blow up the grid.
    pub fn new(width: f32, height: f32) -> Result<Self, BoundsError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(BoundsError::InvalidWidth(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(BoundsError::InvalidHeight(height));
        }
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&width) {
            return Err(BoundsError::WidthOutOfRange(width));
        }
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&height) {
            return Err(BoundsError::HeightOutOfRange(height));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    /// Strictly inside the field (points on the border are rejected)
    pub fn contains_strict(&self, p: Point) -> bool {
        p.x > 0.0 && p.x < self.width && p.y > 0.0 && p.y < self.height
    }

    /// Start/goal inset from the edges for this field
    pub fn inset(&self) -> f32 {
        point_inset(self.width, self.height)
    }

    /// Point at fractional coordinates of the field
    pub fn at(&self, fx: f32, fy: f32) -> Point {
        Vec2::new(fx * self.width, fy * self.height)
    }

    pub fn start_point(&self) -> Point {
        Vec2::splat(self.inset())
    }

    /// Corner opposite the start
    pub fn far_corner(&self) -> Point {
        let inset = self.inset();
        Vec2::new(self.width - inset, self.height - inset)
    }
}

impl TryFrom<(f32, f32)> for FieldBounds {
    type Error = BoundsError;

    fn try_from((width, height): (f32, f32)) -> Result<Self, Self::Error> {
        Self::new(width, height)
    }
}

/// Which generator produced a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutOrigin {
    /// Hand-authored table entry
    Fixed,
    /// Randomized generator, accepted on the given attempt (1-based)
    Randomized { attempts: u32 },
    /// Deterministic fallback pattern (`level % 3`)
    Fallback { pattern: u8 },
    /// Wall-free field, used when nothing else validates
    OpenField,
}

/// A complete maze for one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeLayout {
    pub level: u32,
    /// Walls in generation order
    pub walls: Vec<Wall>,
    /// Goals in collection order; all must be collected
    pub goals: Vec<Point>,
    pub start: Point,
    /// Seconds allowed to finish the level
    pub time_limit: u32,
    pub difficulty: f32,
    /// Bonus seconds/points granted on completion
    pub time_bonus: u32,
    pub origin: LayoutOrigin,
}

impl MazeLayout {
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_size_swaps_with_orientation() {
        let h = Wall::horizontal(100.0, 100.0, 80.0);
        let v = Wall::vertical(100.0, 100.0, 80.0);
        assert_eq!(h.size(), Vec2::new(80.0, WALL_THICKNESS));
        assert_eq!(v.size(), Vec2::new(WALL_THICKNESS, 80.0));
    }

    #[test]
    fn test_footprint_expands_every_side() {
        let wall = Wall::horizontal(100.0, 50.0, 40.0);
        let fp = wall.footprint(5.0);
        assert_eq!(fp.min, Vec2::new(75.0, 35.0));
        assert_eq!(fp.max, Vec2::new(125.0, 65.0));
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.intersects(&b));

        let c = Rect::new(Vec2::new(9.5, 9.5), Vec2::new(20.0, 20.0));
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_rect_distance() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert_eq!(r.distance_to(Vec2::new(5.0, 5.0)), 0.0);
        assert!((r.distance_to(Vec2::new(13.0, 14.0)) - 5.0).abs() < 1e-5);
        assert!((r.distance_to(Vec2::new(-2.0, 5.0)) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_field_bounds_rejects_non_positive() {
        assert_eq!(FieldBounds::new(0.0, 844.0), Err(BoundsError::InvalidWidth(0.0)));
        assert_eq!(
            FieldBounds::new(390.0, -1.0),
            Err(BoundsError::InvalidHeight(-1.0))
        );
        assert!(FieldBounds::new(f32::NAN, 10.0).is_err());
        assert!(FieldBounds::new(10.0, f32::INFINITY).is_err());
        assert!(FieldBounds::try_from((390.0, 844.0)).is_ok());
    }

    #[test]
    fn test_field_bounds_rejects_unsupported_sizes() {
        assert_eq!(
            FieldBounds::new(1e30, 1e30),
            Err(BoundsError::WidthOutOfRange(1e30))
        );
        assert_eq!(
            FieldBounds::new(390.0, 1e6),
            Err(BoundsError::HeightOutOfRange(1e6))
        );
        assert_eq!(
            FieldBounds::new(1e-45, 1e-45),
            Err(BoundsError::WidthOutOfRange(1e-45))
        );
        assert_eq!(
            FieldBounds::new(0.5, 300.0),
            Err(BoundsError::WidthOutOfRange(0.5))
        );
        assert!(FieldBounds::new(MIN_FIELD_SIZE, MAX_FIELD_SIZE).is_ok());
    }

    #[test]
    fn test_inset_points_stay_inside_extreme_fields() {
        for (w, h) in [
            (MIN_FIELD_SIZE, MIN_FIELD_SIZE),
            (MAX_FIELD_SIZE, MAX_FIELD_SIZE),
            (MIN_FIELD_SIZE, MAX_FIELD_SIZE),
        ] {
            let field = FieldBounds::new(w, h).unwrap();
            assert!(field.contains_strict(field.start_point()), "{w}x{h}");
            assert!(field.contains_strict(field.far_corner()), "{w}x{h}");
        }
    }

    #[test]
    fn test_contains_strict_excludes_border() {
        let bounds = FieldBounds::new(100.0, 200.0).unwrap();
        assert!(bounds.contains_strict(Vec2::new(50.0, 100.0)));
        assert!(!bounds.contains_strict(Vec2::new(0.0, 100.0)));
        assert!(!bounds.contains_strict(Vec2::new(50.0, 200.0)));
    }

    #[test]
    fn test_inset_shrinks_on_small_fields() {
        let phone = FieldBounds::new(390.0, 844.0).unwrap();
        assert_eq!(phone.start_point(), Vec2::new(50.0, 50.0));
        assert_eq!(phone.far_corner(), Vec2::new(340.0, 794.0));

        let tiny = FieldBounds::new(80.0, 400.0).unwrap();
        assert_eq!(tiny.inset(), 20.0);
        assert!(tiny.contains_strict(tiny.far_corner()));
    }
}
