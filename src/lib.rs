//! Marble Maze - procedural maze generation for a tilt-controlled marble game
//!
//! Core modules:
//! - `maze`: Layout generation and reachability validation (pure, deterministic)
//! - `tuning`: Data-driven difficulty and generator balance
//! - `platform`: Browser/native entry points for the game shell

pub mod maze;
pub mod platform;
pub mod tuning;

pub use maze::{
    BoundsError, FieldBounds, LayoutOrigin, MazeLayout, Orientation, Point, Wall,
    select_layout, select_layout_seeded,
};
pub use tuning::MazeTuning;

/// Maze geometry constants
pub mod consts {
    /// Thickness of every wall (the short side of its footprint)
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Marble radius used by the physics collaborator
    pub const MARBLE_RADIUS: f32 = 15.0;
    /// Buffer added around each wall footprint; must exceed the marble radius
    pub const CLEARANCE_MARGIN: f32 = 16.0;
    const _: () = assert!(CLEARANCE_MARGIN > MARBLE_RADIUS);

    /// Occupancy grid cell edge length
    pub const CELL_SIZE: f32 = 10.0;

    /// Distance of the start point (and corner goals) from the field edges
    pub const POINT_INSET: f32 = 50.0;

    /// Smallest field edge accepted; below this the inset points collapse onto the border
    pub const MIN_FIELD_SIZE: f32 = 1.0;
    /// Largest field edge accepted; keeps the grid at most 1000x1000 cells
    pub const MAX_FIELD_SIZE: f32 = 10_000.0;

    /// Levels served by the hand-authored layout table
    pub const FIXED_LEVEL_COUNT: u32 = 5;
}

/// Inset for start/goal points, shrunk on small fields so points stay inside
#[inline]
pub fn point_inset(width: f32, height: f32) -> f32 {
    consts::POINT_INSET.min(width * 0.25).min(height * 0.25)
}
