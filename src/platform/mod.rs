//! Platform glue for the game shell
//!
//! The renderer, physics world and tilt input live in the host app (browser
//! or native). They hand over the viewport size and level number and receive
//! the layout as JSON.

use thiserror::Error;

use crate::maze::{BoundsError, FieldBounds, select_layout_seeded};

/// Failures visible to the host app
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    #[error("failed to encode layout: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Select a layout and encode it for the host
pub fn layout_json(level: u32, width: f32, height: f32, seed: u64) -> Result<String, ShellError> {
    let bounds = FieldBounds::new(width, height)?;
    let layout = select_layout_seeded(level, bounds, seed);
    Ok(layout.to_json()?)
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn init() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }
        log::info!("Marble Maze generator ready");
    }

    /// JS entry point: layout JSON, or an error string for malformed bounds
    #[wasm_bindgen]
    pub fn select_layout_json(level: u32, width: f32, height: f32, seed: u64) -> Result<String, JsValue> {
        super::layout_json(level, width, height, seed).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::MazeLayout;

    #[test]
    fn test_layout_json_round_trips_level_one() {
        let json = layout_json(1, 390.0, 844.0, 0).unwrap();
        let layout: MazeLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout.walls.len(), 4);
        assert_eq!(layout.time_limit, 30);
    }

    #[test]
    fn test_layout_json_rejects_bad_bounds() {
        let err = layout_json(1, 0.0, 844.0, 0).unwrap_err();
        assert!(matches!(err, ShellError::Bounds(BoundsError::InvalidWidth(_))));
        assert!(err.to_string().contains("width"));

        let err = layout_json(1, 390.0, -3.0, 0).unwrap_err();
        assert!(matches!(err, ShellError::Bounds(BoundsError::InvalidHeight(_))));

        let err = layout_json(1, 1e6, 1e6, 0).unwrap_err();
        assert!(matches!(err, ShellError::Bounds(BoundsError::WidthOutOfRange(_))));
    }
}
