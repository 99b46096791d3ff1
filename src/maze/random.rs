//! Randomized layout generator with a bounded retry budget
//!
//! Candidates are synthesized by a [`CandidateSource`] and validated one by
//! one; the first valid candidate wins. Exhausting the budget is an ordinary
//! `Err` that the selector answers with a fallback pattern.

use rand::Rng;
use rand_pcg::Pcg32;

use super::error::GenerationFailure;
use super::fixed::GoalAnchor;
use super::geometry::{FieldBounds, LayoutOrigin, MazeLayout, Point, Wall};
use super::reachability::validate_layout;
use crate::consts::CLEARANCE_MARGIN;
use crate::tuning::MazeTuning;

/// Everything a generator needs to know about the level being built
#[derive(Debug, Clone, PartialEq)]
pub struct LevelRequest {
    pub level: u32,
    pub bounds: FieldBounds,
    pub difficulty: f32,
    pub time_limit: u32,
    pub time_bonus: u32,
    pub start: Point,
    pub goals: Vec<Point>,
}

impl LevelRequest {
    /// Request with timing from the curves and `goal_count` standard goals
    pub fn new(level: u32, bounds: FieldBounds, tuning: &MazeTuning, goal_count: usize) -> Self {
        Self {
            level,
            bounds,
            difficulty: tuning.difficulty(level),
            time_limit: tuning.time_limit(level),
            time_bonus: tuning.time_bonus(level),
            start: bounds.start_point(),
            goals: randomized_goals(goal_count, bounds),
        }
    }

    /// Request for a randomized level
    pub fn randomized(level: u32, bounds: FieldBounds, tuning: &MazeTuning) -> Self {
        Self::new(level, bounds, tuning, tuning.goal_count(level))
    }

    /// Wrap a wall set into a layout carrying this request's metadata
    pub fn layout(&self, walls: Vec<Wall>, origin: LayoutOrigin) -> MazeLayout {
        MazeLayout {
            level: self.level,
            walls,
            goals: self.goals.clone(),
            start: self.start,
            time_limit: self.time_limit,
            difficulty: self.difficulty,
            time_bonus: self.time_bonus,
            origin,
        }
    }
}

/// Goal positions for randomized levels, in collection order
pub fn randomized_goals(count: usize, bounds: FieldBounds) -> Vec<Point> {
    const ANCHORS: [GoalAnchor; 3] = [
        GoalAnchor::FarCorner,
        GoalAnchor::NearXFarY,
        GoalAnchor::FarEdge { fy: 0.5 },
    ];
    ANCHORS
        .iter()
        .take(count.clamp(1, ANCHORS.len()))
        .map(|anchor| anchor.resolve(bounds))
        .collect()
}

/// Produces candidate layouts for the retry loop
pub trait CandidateSource {
    fn candidate(&mut self, request: &LevelRequest, rng: &mut Pcg32) -> MazeLayout;
}

/// Alternating horizontal/vertical walls at random positions
#[derive(Debug, Clone)]
pub struct RandomWalls {
    pub wall_count: u32,
    pub safe_distance: f32,
}

impl RandomWalls {
    pub fn from_tuning(tuning: &MazeTuning, level: u32, difficulty: f32) -> Self {
        Self {
            wall_count: tuning.wall_count(level, difficulty),
            safe_distance: tuning.safe_distance,
        }
    }

    fn random_wall(index: u32, bounds: FieldBounds, rng: &mut Pcg32) -> Wall {
        let (w, h) = (bounds.width(), bounds.height());
        let x = w * rng.random_range(0.1..0.9);
        let y = h * rng.random_range(0.15..0.85);
        if index % 2 == 0 {
            Wall::horizontal(x, y, w * rng.random_range(0.25..0.55))
        } else {
            Wall::vertical(x, y, h * rng.random_range(0.08..0.2))
        }
    }

    /// Whether the wall's footprint keeps its distance from every marked point
    fn keeps_clear(&self, wall: &Wall, request: &LevelRequest) -> bool {
        let footprint = wall.footprint(CLEARANCE_MARGIN);
        std::iter::once(&request.start)
            .chain(&request.goals)
            .all(|&p| footprint.distance_to(p) >= self.safe_distance)
    }
}

impl CandidateSource for RandomWalls {
    fn candidate(&mut self, request: &LevelRequest, rng: &mut Pcg32) -> MazeLayout {
        let walls = (0..self.wall_count)
            .map(|i| Self::random_wall(i, request.bounds, rng))
            .filter(|wall| self.keeps_clear(wall, request))
            .collect();
        request.layout(walls, LayoutOrigin::Randomized { attempts: 0 })
    }
}

/// Draw candidates until one validates or `max_attempts` is spent
pub fn generate_randomized<S: CandidateSource>(
    source: &mut S,
    request: &LevelRequest,
    rng: &mut Pcg32,
    max_attempts: u32,
) -> Result<MazeLayout, GenerationFailure> {
    let mut last = None;

    for attempt in 1..=max_attempts {
        let mut layout = source.candidate(request, rng);
        match validate_layout(&layout, request.bounds) {
            Ok(()) => {
                layout.origin = LayoutOrigin::Randomized { attempts: attempt };
                return Ok(layout);
            }
            Err(err) => {
                log::debug!("Level {} candidate {} rejected: {}", request.level, attempt, err);
                last = Some(err);
            }
        }
    }

    match last {
        Some(last) => Err(GenerationFailure::RetriesExhausted {
            attempts: max_attempts,
            last,
        }),
        None => Err(GenerationFailure::NoAttempts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::error::ValidationError;
    use rand::SeedableRng;

    fn phone() -> FieldBounds {
        FieldBounds::new(390.0, 844.0).unwrap()
    }

    /// Replays a fixed wall set and counts how often it was asked
    struct Scripted {
        walls: Vec<Wall>,
        calls: u32,
    }

    impl CandidateSource for Scripted {
        fn candidate(&mut self, request: &LevelRequest, _rng: &mut Pcg32) -> MazeLayout {
            self.calls += 1;
            request.layout(self.walls.clone(), LayoutOrigin::Randomized { attempts: 0 })
        }
    }

    #[test]
    fn test_candidate_walls_keep_clear_of_points() {
        let tuning = MazeTuning::default();
        let request = LevelRequest::randomized(20, phone(), &tuning);
        let mut source = RandomWalls::from_tuning(&tuning, 20, request.difficulty);
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..50 {
            let layout = source.candidate(&request, &mut rng);
            assert!(layout.walls.len() <= source.wall_count as usize);
            for wall in &layout.walls {
                let fp = wall.footprint(CLEARANCE_MARGIN);
                assert!(fp.distance_to(layout.start) >= tuning.safe_distance);
                for &goal in &layout.goals {
                    assert!(fp.distance_to(goal) >= tuning.safe_distance);
                }
            }
        }
    }

    #[test]
    fn test_walls_alternate_orientation() {
        let request = LevelRequest::randomized(8, phone(), &MazeTuning::default());
        let mut rng = Pcg32::seed_from_u64(3);
        let walls: Vec<Wall> = (0..6)
            .map(|i| RandomWalls::random_wall(i, request.bounds, &mut rng))
            .collect();
        for (i, wall) in walls.iter().enumerate() {
            let expected = if i % 2 == 0 {
                crate::maze::Orientation::Horizontal
            } else {
                crate::maze::Orientation::Vertical
            };
            assert_eq!(wall.orientation(), expected);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let tuning = MazeTuning::default();
        let request = LevelRequest::randomized(12, phone(), &tuning);
        let mut a = RandomWalls::from_tuning(&tuning, 12, request.difficulty);
        let mut b = a.clone();
        let la = generate_randomized(&mut a, &request, &mut Pcg32::seed_from_u64(42), 20).unwrap();
        let lb = generate_randomized(&mut b, &request, &mut Pcg32::seed_from_u64(42), 20).unwrap();
        assert_eq!(la, lb);
    }

    #[test]
    fn test_accepted_layout_records_attempt() {
        let request = LevelRequest::randomized(6, phone(), &MazeTuning::default());
        let mut source = Scripted {
            walls: vec![],
            calls: 0,
        };
        let layout = generate_randomized(&mut source, &request, &mut Pcg32::seed_from_u64(1), 20).unwrap();
        assert_eq!(layout.origin, LayoutOrigin::Randomized { attempts: 1 });
        assert_eq!(source.calls, 1);
    }

    #[test]
    fn test_budget_exhaustion_is_reported() {
        let request = LevelRequest::randomized(6, phone(), &MazeTuning::default());
        // Spans the whole field width, sealing the goal away from the start
        let mut source = Scripted {
            walls: vec![Wall::horizontal(195.0, 422.0, 800.0)],
            calls: 0,
        };
        let result = generate_randomized(&mut source, &request, &mut Pcg32::seed_from_u64(1), 20);
        assert_eq!(
            result,
            Err(GenerationFailure::RetriesExhausted {
                attempts: 20,
                last: ValidationError::GoalUnreachable { index: 0 },
            })
        );
        assert_eq!(source.calls, 20);
    }

    #[test]
    fn test_zero_budget() {
        let request = LevelRequest::randomized(6, phone(), &MazeTuning::default());
        let mut source = Scripted {
            walls: vec![],
            calls: 0,
        };
        let result = generate_randomized(&mut source, &request, &mut Pcg32::seed_from_u64(1), 0);
        assert_eq!(result, Err(GenerationFailure::NoAttempts));
        assert_eq!(source.calls, 0);
    }

    #[test]
    fn test_goal_count_follows_request() {
        let b = phone();
        assert_eq!(randomized_goals(1, b), vec![Point::new(340.0, 794.0)]);
        assert_eq!(randomized_goals(2, b)[1], Point::new(50.0, 794.0));
        assert_eq!(randomized_goals(3, b)[2], Point::new(340.0, 422.0));
        assert_eq!(randomized_goals(9, b).len(), 3);
    }
}
