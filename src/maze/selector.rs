//! Level selection: picks a generator per level and guarantees a valid result
//!
//! Per load: select strategy -> generate -> validate -> retry (bounded) ->
//! fallback -> validate fallback -> done. Every path ends with a layout; the
//! only failure a caller can see is malformed field bounds, which is rejected
//! before a `FieldBounds` can exist.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::fallback::{fallback_layout, open_field_layout};
use super::fixed::{FixedLevel, fixed_level};
use super::geometry::{FieldBounds, MazeLayout};
use super::random::{CandidateSource, LevelRequest, RandomWalls, generate_randomized};
use super::reachability::validate_layout;
use crate::tuning::MazeTuning;

/// Generator chosen for a level
#[derive(Debug, Clone, Copy)]
pub enum LevelStrategy {
    /// Entry from the hand-authored table
    Fixed(&'static FixedLevel),
    /// Randomized walls with fallback
    Randomized,
}

/// Strategy lookup keyed by level; the fixed table covers its own range
pub fn strategy_for(level: u32) -> LevelStrategy {
    match fixed_level(level) {
        Some(spec) => LevelStrategy::Fixed(spec),
        None => LevelStrategy::Randomized,
    }
}

/// Produces validated layouts for levels
#[derive(Debug, Clone, Default)]
pub struct LevelSelector {
    pub tuning: MazeTuning,
}

impl LevelSelector {
    pub fn new(tuning: MazeTuning) -> Self {
        Self { tuning }
    }

    /// Validated layout for `level`; level 0 is treated as level 1
    pub fn select(&self, level: u32, bounds: FieldBounds, rng: &mut Pcg32) -> MazeLayout {
        let level = if level == 0 {
            log::warn!("Level 0 requested, loading level 1");
            1
        } else {
            level
        };

        let layout = match strategy_for(level) {
            LevelStrategy::Fixed(spec) => self.load_fixed(spec, level, bounds),
            LevelStrategy::Randomized => {
                let request = LevelRequest::randomized(level, bounds, &self.tuning);
                let mut source = RandomWalls::from_tuning(&self.tuning, level, request.difficulty);
                self.load_randomized(&request, &mut source, rng)
            }
        };

        log::info!(
            "Level {}: {:?} layout, {} walls, {} goals",
            layout.level,
            layout.origin,
            layout.wall_count(),
            layout.goals.len()
        );
        layout
    }

    /// Hand-authored layout, validated against this field
    fn load_fixed(&self, spec: &FixedLevel, level: u32, bounds: FieldBounds) -> MazeLayout {
        let layout = spec.layout(level, bounds, &self.tuning);
        match validate_layout(&layout, bounds) {
            Ok(()) => layout,
            Err(err) => {
                log::warn!(
                    "Fixed level {} invalid on {}x{} field ({}), using fallback",
                    level,
                    bounds.width(),
                    bounds.height(),
                    err
                );
                let request = LevelRequest::new(level, bounds, &self.tuning, spec.goals.len());
                self.load_fallback(&request)
            }
        }
    }

    /// Randomized candidates from `source`, falling back once the budget is spent
    pub fn load_randomized<S: CandidateSource>(
        &self,
        request: &LevelRequest,
        source: &mut S,
        rng: &mut Pcg32,
    ) -> MazeLayout {
        match generate_randomized(source, request, rng, self.tuning.max_attempts) {
            Ok(layout) => layout,
            Err(failure) => {
                log::warn!("Level {}: {}, using fallback", request.level, failure);
                self.load_fallback(request)
            }
        }
    }

    fn load_fallback(&self, request: &LevelRequest) -> MazeLayout {
        let layout = fallback_layout(request);
        match validate_layout(&layout, request.bounds) {
            Ok(()) => layout,
            Err(err) => {
                log::warn!("Level {}: fallback pattern invalid ({}), opening the field", request.level, err);
                open_field_layout(request)
            }
        }
    }
}

/// Validated layout for `level` using a fresh OS-provided seed
pub fn select_layout(level: u32, bounds: FieldBounds) -> MazeLayout {
    select_layout_seeded(level, bounds, rand::random())
}

/// Validated layout for `level`; the same seed always yields the same layout
pub fn select_layout_seeded(level: u32, bounds: FieldBounds, seed: u64) -> MazeLayout {
    let mut rng = Pcg32::seed_from_u64(seed);
    LevelSelector::default().select(level, bounds, &mut rng)
}
