//! Hand-authored layouts for the opening levels
//!
//! Walls and goals are stored as fractions of the field so the same table
//! serves any viewport. The layouts were authored against a 390x844 portrait
//! field and stay solvable on common phone and tablet sizes; the selector
//! still validates them on every load because unusual aspect ratios (landscape
//! in particular) can close the corridors.

use super::geometry::{FieldBounds, LayoutOrigin, MazeLayout, Orientation, Point, Wall};
use crate::consts::FIXED_LEVEL_COUNT;
use crate::tuning::MazeTuning;

/// Wall in field fractions; `length` is a fraction of the width for
/// horizontal walls and of the height for vertical ones
#[derive(Debug, Clone, Copy)]
pub struct WallSpec {
    pub fx: f32,
    pub fy: f32,
    pub length: f32,
    pub orientation: Orientation,
}

const fn h(fx: f32, fy: f32, length: f32) -> WallSpec {
    WallSpec {
        fx,
        fy,
        length,
        orientation: Orientation::Horizontal,
    }
}

const fn v(fx: f32, fy: f32, length: f32) -> WallSpec {
    WallSpec {
        fx,
        fy,
        length,
        orientation: Orientation::Vertical,
    }
}

impl WallSpec {
    pub fn scale(&self, bounds: FieldBounds) -> Wall {
        let center = bounds.at(self.fx, self.fy);
        let length = match self.orientation {
            Orientation::Horizontal => self.length * bounds.width(),
            Orientation::Vertical => self.length * bounds.height(),
        };
        Wall::new(center, length, self.orientation)
    }
}

/// Where a goal sits on the field
#[derive(Debug, Clone, Copy)]
pub enum GoalAnchor {
    /// Corner opposite the start
    FarCorner,
    /// Inset from the start's x edge, inset from the far y edge
    NearXFarY,
    /// Inset from the far x edge at a fractional height
    FarEdge { fy: f32 },
    /// Inset from the start's x edge at a fractional height
    NearEdge { fy: f32 },
    /// Fractional position
    Fraction { fx: f32, fy: f32 },
}

impl GoalAnchor {
    pub fn resolve(&self, bounds: FieldBounds) -> Point {
        let inset = bounds.inset();
        let (w, hgt) = (bounds.width(), bounds.height());
        match *self {
            GoalAnchor::FarCorner => bounds.far_corner(),
            GoalAnchor::NearXFarY => Point::new(inset, hgt - inset),
            GoalAnchor::FarEdge { fy } => Point::new(w - inset, fy * hgt),
            GoalAnchor::NearEdge { fy } => Point::new(inset, fy * hgt),
            GoalAnchor::Fraction { fx, fy } => bounds.at(fx, fy),
        }
    }
}

/// One hand-authored level
#[derive(Debug)]
pub struct FixedLevel {
    pub walls: &'static [WallSpec],
    pub goals: &'static [GoalAnchor],
}

// Horizontal walls leave a gap on alternating sides; short vertical baffles
// sit in the corridors between them.
pub static FIXED_LEVELS: [FixedLevel; FIXED_LEVEL_COUNT as usize] = [
    FixedLevel {
        walls: &[
            h(0.35, 0.25, 0.7),
            h(0.65, 0.5, 0.7),
            h(0.35, 0.75, 0.7),
            v(0.5, 0.375, 0.05),
        ],
        goals: &[GoalAnchor::FarCorner],
    },
    FixedLevel {
        walls: &[
            h(0.3, 0.2, 0.6),
            v(0.75, 0.325, 0.05),
            h(0.7, 0.45, 0.6),
            h(0.3, 0.7, 0.6),
            v(0.5, 0.85, 0.05),
        ],
        goals: &[GoalAnchor::FarCorner],
    },
    FixedLevel {
        walls: &[
            h(0.35, 0.2, 0.7),
            v(0.5, 0.32, 0.03),
            h(0.65, 0.44, 0.7),
            h(0.35, 0.64, 0.7),
            h(0.65, 0.82, 0.7),
            v(0.5, 0.91, 0.03),
        ],
        goals: &[GoalAnchor::FarEdge { fy: 0.52 }, GoalAnchor::NearXFarY],
    },
    FixedLevel {
        walls: &[
            h(0.35, 0.2, 0.7),
            v(0.3, 0.32, 0.04),
            v(0.6, 0.32, 0.04),
            h(0.65, 0.44, 0.7),
            v(0.5, 0.56, 0.04),
            h(0.35, 0.68, 0.7),
            v(0.6, 0.84, 0.04),
        ],
        goals: &[GoalAnchor::FarCorner, GoalAnchor::NearEdge { fy: 0.56 }],
    },
    FixedLevel {
        walls: &[
            h(0.35, 0.2, 0.7),
            v(0.25, 0.32, 0.04),
            v(0.55, 0.32, 0.04),
            h(0.65, 0.44, 0.7),
            v(0.4, 0.56, 0.04),
            v(0.75, 0.56, 0.04),
            h(0.35, 0.68, 0.7),
            v(0.5, 0.84, 0.04),
        ],
        goals: &[
            GoalAnchor::FarCorner,
            GoalAnchor::NearXFarY,
            GoalAnchor::Fraction { fx: 0.58, fy: 0.56 },
        ],
    },
];

impl FixedLevel {
    /// Scale the table entry to the field (unvalidated)
    pub fn layout(&self, level: u32, bounds: FieldBounds, tuning: &MazeTuning) -> MazeLayout {
        MazeLayout {
            level,
            walls: self.walls.iter().map(|w| w.scale(bounds)).collect(),
            goals: self.goals.iter().map(|g| g.resolve(bounds)).collect(),
            start: bounds.start_point(),
            time_limit: tuning.time_limit(level),
            difficulty: tuning.difficulty(level),
            time_bonus: tuning.time_bonus(level),
            origin: LayoutOrigin::Fixed,
        }
    }
}

/// Table entry for a level, if it is hand-authored
pub fn fixed_level(level: u32) -> Option<&'static FixedLevel> {
    let index = usize::try_from(level.checked_sub(1)?).ok()?;
    FIXED_LEVELS.get(index)
}

/// Build the (unvalidated) hand-authored layout for `level`
pub fn fixed_layout(level: u32, bounds: FieldBounds, tuning: &MazeTuning) -> Option<MazeLayout> {
    fixed_level(level).map(|spec| spec.layout(level, bounds, tuning))
}
