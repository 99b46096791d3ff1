//! Data-driven difficulty curves and generator balance
//!
//! Every curve is monotonic in the level number and plateaus at a cap, so
//! late levels stay playable. Values can be overridden from JSON; any field
//! left out keeps its default.

use serde::{Deserialize, Serialize};

/// Balance knobs for layout generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeTuning {
    // === Difficulty ===
    /// Difficulty at level 1
    pub base_difficulty: f32,
    /// Difficulty added per level
    pub difficulty_step: f32,
    /// Highest difficulty any level reaches
    pub max_difficulty: f32,

    // === Timing ===
    /// Time limit (seconds) at level 1
    pub base_time_limit: u32,
    /// Seconds added to the time limit per level
    pub time_limit_step: u32,
    /// Longest time limit any level gets
    pub max_time_limit: u32,
    /// Completion bonus at level 1
    pub base_time_bonus: u32,
    /// Bonus added per level
    pub time_bonus_step: u32,
    /// Largest completion bonus
    pub max_time_bonus: u32,

    // === Randomized generator ===
    /// Candidates tried before switching to the fallback patterns
    pub max_attempts: u32,
    /// Walls whose footprint comes closer than this to the start or a goal are dropped
    pub safe_distance: f32,
    /// Walls requested before the level/difficulty term is added
    pub base_wall_count: u32,
    /// Cap on walls requested per candidate
    pub max_walls: u32,
    /// First level with a second goal
    pub two_goal_level: u32,
    /// First level with a third goal
    pub three_goal_level: u32,
}

impl Default for MazeTuning {
    fn default() -> Self {
        Self {
            base_difficulty: 1.0,
            difficulty_step: 0.1,
            max_difficulty: 3.0,

            base_time_limit: 30,
            time_limit_step: 5,
            max_time_limit: 90,
            base_time_bonus: 10,
            time_bonus_step: 5,
            max_time_bonus: 60,

            max_attempts: 20,
            safe_distance: 40.0,
            base_wall_count: 4,
            max_walls: 14,
            two_goal_level: 10,
            three_goal_level: 15,
        }
    }
}

impl MazeTuning {
    /// Parse overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Difficulty for a level (clamped)
    pub fn difficulty(&self, level: u32) -> f32 {
        let steps = level.saturating_sub(1) as f32;
        (self.base_difficulty + steps * self.difficulty_step).min(self.max_difficulty)
    }

    /// Seconds allowed for a level (clamped)
    pub fn time_limit(&self, level: u32) -> u32 {
        let steps = level.saturating_sub(1);
        self.base_time_limit
            .saturating_add(steps.saturating_mul(self.time_limit_step))
            .min(self.max_time_limit)
    }

    /// Completion bonus for a level (clamped)
    pub fn time_bonus(&self, level: u32) -> u32 {
        let steps = level.saturating_sub(1);
        self.base_time_bonus
            .saturating_add(steps.saturating_mul(self.time_bonus_step))
            .min(self.max_time_bonus)
    }

    /// Walls requested from the randomized generator
    pub fn wall_count(&self, level: u32, difficulty: f32) -> u32 {
        let extra = (level as f32 * difficulty / 3.0).floor() as u32;
        self.base_wall_count.saturating_add(extra).min(self.max_walls)
    }

    /// Goals placed on a randomized level
    pub fn goal_count(&self, level: u32) -> usize {
        if level >= self.three_goal_level {
            3
        } else if level >= self.two_goal_level {
            2
        } else {
            1
        }
    }
}
