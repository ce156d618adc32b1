use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{Direction, Grid};

/// Generate a perfect maze with randomized depth-first backtracking.
///
/// Starts from cell 0 and carves passages until every cell has been visited.
/// The result is a spanning tree over the grid: exactly one open path exists
/// between any two cells, and exactly `n_cells - 1` wall pairs are removed.
pub fn generate(rows: i32, cols: i32, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::new(rows, cols);
    let n_cells = grid.n_cells();

    let mut stack: Vec<i32> = Vec::new();
    let mut current = 0;
    grid.cells[current as usize].visited = true;
    let mut visited_count = 1;

    // Every iteration either visits a new cell or pops the stack,
    // so the loop ends once visited_count reaches n_cells.
    while visited_count < n_cells {
        let neighbors = unvisited_neighbors(&grid, current);
        if let Some(&(next, dir)) = neighbors.choose(rng) {
            grid.open_wall(current, next, dir);
            stack.push(current);
            current = next;
            grid.cells[current as usize].visited = true;
            visited_count += 1;
        } else if let Some(prev) = stack.pop() {
            current = prev;
        } else {
            // Unreachable on a connected grid: the stack only drains after
            // every cell reachable from 0 has been visited.
            break;
        }
    }

    grid
}

/// Adjacent cells the carver has not reached yet, recomputed per step
fn unvisited_neighbors(grid: &Grid, id: i32) -> Vec<(i32, Direction)> {
    let mut neighbors = Vec::with_capacity(4);
    for dir in Direction::ALL {
        if let Some(next) = grid.neighbor(id, dir) {
            if !grid.cells[next as usize].visited {
                neighbors.push((next, dir));
            }
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_cell_maze() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = generate(1, 1, &mut rng);

        let cell = grid.cell(0);
        assert!(cell.north && cell.south && cell.east && cell.west);
    }

    #[test]
    fn test_every_cell_carved() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate(6, 4, &mut rng);

        // In a spanning tree every cell has at least one open side
        for id in 0..grid.n_cells() {
            assert!(
                !grid.open_neighbors(id).is_empty(),
                "cell {} is sealed off",
                id
            );
        }
    }

    #[test]
    fn test_perimeter_stays_walled() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = generate(5, 5, &mut rng);

        for id in 0..grid.n_cells() {
            let (x, y) = grid.get_coords(id);
            let cell = grid.cell(id);
            if y == 0 {
                assert!(cell.north);
            }
            if y == grid.rows - 1 {
                assert!(cell.south);
            }
            if x == 0 {
                assert!(cell.west);
            }
            if x == grid.cols - 1 {
                assert!(cell.east);
            }
        }
    }
}
