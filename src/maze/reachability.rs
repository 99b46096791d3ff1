//! Breadth-first reachability over the occupancy grid
//!
//! A layout is valid only when every goal can be reached from the start. Each
//! goal gets its own search with a fresh visited set; the grid itself is never
//! touched.

use std::collections::VecDeque;

use super::error::ValidationError;
use super::geometry::{FieldBounds, MazeLayout, Point};
use super::grid::{CellCoord, OccupancyGrid};

/// Check that every goal is reachable from `start`
///
/// Fails fast if the start or any goal cell is itself blocked, then runs one
/// BFS per goal in order and reports the first goal that cannot be reached.
pub fn check_reachability(
    grid: &OccupancyGrid,
    start: Point,
    goals: &[Point],
) -> Result<(), ValidationError> {
    let start_cell = grid.cell_for_point(start);
    if !grid.is_passable(start_cell) {
        return Err(ValidationError::StartBlocked);
    }

    let goal_cells: Vec<CellCoord> = goals.iter().map(|&g| grid.cell_for_point(g)).collect();
    if let Some(index) = goal_cells.iter().position(|&cell| !grid.is_passable(cell)) {
        return Err(ValidationError::GoalBlocked { index });
    }

    for (index, &goal_cell) in goal_cells.iter().enumerate() {
        if !bfs_reaches(grid, start_cell, goal_cell) {
            return Err(ValidationError::GoalUnreachable { index });
        }
    }

    Ok(())
}

/// Convenience wrapper over [`check_reachability`]
pub fn is_reachable(grid: &OccupancyGrid, start: Point, goals: &[Point]) -> bool {
    check_reachability(grid, start, goals).is_ok()
}

fn bfs_reaches(grid: &OccupancyGrid, start: CellCoord, goal: CellCoord) -> bool {
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();

    visited[grid.index_of(start)] = true;
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return true;
        }

        for neighbor in grid.neighbors(cell) {
            let idx = grid.index_of(neighbor);
            if visited[idx] || !grid.is_passable(neighbor) {
                continue;
            }
            visited[idx] = true;
            queue.push_back(neighbor);
        }
    }

    false
}

/// Full validation of a candidate layout against the field
///
/// Points must sit strictly inside the field; then the walls are rasterized
/// and the layout must pass [`check_reachability`].
pub fn validate_layout(layout: &MazeLayout, bounds: FieldBounds) -> Result<(), ValidationError> {
    if layout.goals.is_empty() {
        return Err(ValidationError::NoGoals);
    }
    if !bounds.contains_strict(layout.start) {
        return Err(ValidationError::StartOutOfBounds);
    }
    if let Some(index) = layout.goals.iter().position(|&g| !bounds.contains_strict(g)) {
        return Err(ValidationError::GoalOutOfBounds { index });
    }

    let grid = OccupancyGrid::rasterize(&layout.walls, bounds);
    check_reachability(&grid, layout.start, &layout.goals)
}
