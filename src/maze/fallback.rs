//! Deterministic fallback layouts
//!
//! Used when the randomized generator runs out of attempts. The patterns keep
//! to the middle band of the field with wide gaps, so they are solvable on any
//! reasonably sized field. The open field is the last resort for degenerate
//! fields where even those don't fit.

use super::fixed::WallSpec;
use super::geometry::{LayoutOrigin, MazeLayout, Orientation};
use super::random::LevelRequest;

/// Number of patterns cycled through by `level % PATTERN_COUNT`
pub const PATTERN_COUNT: u32 = 3;

const fn spec(fx: f32, fy: f32, length: f32, orientation: Orientation) -> WallSpec {
    WallSpec {
        fx,
        fy,
        length,
        orientation,
    }
}

static PATTERNS: [&[WallSpec]; PATTERN_COUNT as usize] = [
    // Single centered bar
    &[spec(0.5, 0.5, 0.5, Orientation::Horizontal)],
    // Two posts
    &[
        spec(1.0 / 3.0, 0.5, 0.2, Orientation::Vertical),
        spec(2.0 / 3.0, 0.5, 0.2, Orientation::Vertical),
    ],
    // Offset bars
    &[
        spec(0.3, 0.4, 0.4, Orientation::Horizontal),
        spec(0.7, 0.6, 0.4, Orientation::Horizontal),
    ],
];

/// Pattern index used for a level
pub fn pattern_for(level: u32) -> u8 {
    (level % PATTERN_COUNT) as u8
}

/// Fallback layout for the request's level
pub fn fallback_layout(request: &LevelRequest) -> MazeLayout {
    let pattern = pattern_for(request.level);
    let walls = PATTERNS[pattern as usize]
        .iter()
        .map(|w| w.scale(request.bounds))
        .collect();
    request.layout(walls, LayoutOrigin::Fallback { pattern })
}

/// Wall-free layout; reachable on any field `FieldBounds::new` accepts
pub fn open_field_layout(request: &LevelRequest) -> MazeLayout {
    request.layout(Vec::new(), LayoutOrigin::OpenField)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::geometry::FieldBounds;
    use crate::maze::validate_layout;
    use crate::tuning::MazeTuning;

    #[test]
    fn test_pattern_cycles_with_level() {
        assert_eq!(pattern_for(6), 0);
        assert_eq!(pattern_for(7), 1);
        assert_eq!(pattern_for(8), 2);
        assert_eq!(pattern_for(9), 0);
    }

    #[test]
    fn test_every_pattern_valid_on_reasonable_fields() {
        let tuning = MazeTuning::default();
        for (w, h) in [(390.0, 844.0), (320.0, 568.0), (844.0, 390.0), (1024.0, 768.0)] {
            let field = FieldBounds::new(w, h).unwrap();
            // Levels 15..=17 carry three goals and cover all three patterns
            for level in 15..=17 {
                let request = LevelRequest::randomized(level, field, &tuning);
                let layout = fallback_layout(&request);
                assert_eq!(
                    layout.origin,
                    LayoutOrigin::Fallback {
                        pattern: pattern_for(level)
                    }
                );
                assert_eq!(validate_layout(&layout, field), Ok(()), "level {level} on {w}x{h}");
            }
        }
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let field = FieldBounds::new(390.0, 844.0).unwrap();
        let request = LevelRequest::randomized(11, field, &MazeTuning::default());
        assert_eq!(fallback_layout(&request), fallback_layout(&request));
    }

    #[test]
    fn test_open_field_valid_on_tiny_fields() {
        let tuning = MazeTuning::default();
        for (w, h) in [(60.0, 60.0), (5.0, 5.0), (1.0, 300.0)] {
            let field = FieldBounds::new(w, h).unwrap();
            let request = LevelRequest::randomized(20, field, &tuning);
            let layout = open_field_layout(&request);
            assert!(layout.walls.is_empty());
            assert_eq!(validate_layout(&layout, field), Ok(()), "{w}x{h}");
        }
    }
}
