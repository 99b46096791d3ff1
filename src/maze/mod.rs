//! Maze generation and validation
//!
//! Everything here is pure and deterministic for a given seed:
//! - Seeded RNG only (`Pcg32`)
//! - Walls kept in generation order
//! - Grids and visited sets built per call, never shared
//! - No rendering, physics or platform dependencies

pub mod error;
pub mod fallback;
pub mod fixed;
pub mod geometry;
pub mod grid;
pub mod random;
pub mod reachability;
pub mod selector;

pub use error::{BoundsError, GenerationFailure, ValidationError};
pub use fallback::{fallback_layout, open_field_layout};
pub use fixed::{FIXED_LEVELS, FixedLevel, fixed_layout};
pub use geometry::{FieldBounds, LayoutOrigin, MazeLayout, Orientation, Point, Rect, Wall};
pub use grid::{CellCoord, OccupancyGrid};
pub use random::{CandidateSource, LevelRequest, RandomWalls, generate_randomized};
pub use reachability::{check_reachability, is_reachable, validate_layout};
pub use selector::{LevelSelector, LevelStrategy, select_layout, select_layout_seeded, strategy_for};
