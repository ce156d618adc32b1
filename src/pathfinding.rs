use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use crate::grid::Grid;

/// BFS exhausted the reachable set without touching the target.
///
/// In a properly generated maze this cannot happen; seeing it means the
/// spanning-tree invariant was broken, so level loading must abort rather
/// than hand the agent a partial path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathNotFound {
    pub start: i32,
    pub target: i32,
}

impl fmt::Display for PathNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no path from cell {} to cell {} (maze is not connected)",
            self.start, self.target
        )
    }
}

impl Error for PathNotFound {}

/// Compute the shortest path between two cells through open walls.
///
/// Breadth-first search with a parent-pointer array; the returned path is
/// ordered from `start` to `target`, both inclusive. Expansion order is
/// fixed, so the result is deterministic for a given maze.
pub fn shortest_path(grid: &Grid, start: i32, target: i32) -> Result<Vec<i32>, PathNotFound> {
    let n_cells = grid.n_cells() as usize;
    let mut visited = vec![false; n_cells];
    let mut parent = vec![-1i32; n_cells];
    let mut queue = VecDeque::new();

    visited[start as usize] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            let mut path = Vec::new();
            let mut cell = current;
            while cell != -1 {
                path.push(cell);
                cell = parent[cell as usize];
            }
            path.reverse();
            return Ok(path);
        }

        for (next, _dir) in grid.open_neighbors(current) {
            if !visited[next as usize] {
                visited[next as usize] = true;
                parent[next as usize] = current;
                queue.push_back(next);
            }
        }
    }

    Err(PathNotFound { start, target })
}
