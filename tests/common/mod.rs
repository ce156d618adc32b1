use mazerace::Grid;

/// Count open wall pairs: every carved passage is seen from both of its cells
pub fn open_edge_count(grid: &Grid) -> usize {
    let mut sides = 0;
    for id in 0..grid.n_cells() {
        sides += grid.open_neighbors(id).len();
    }
    sides / 2
}

/// Flood fill through open walls, counting the cells reachable from `start`
pub fn reachable_count(grid: &Grid, start: i32) -> usize {
    let mut seen = vec![false; grid.n_cells() as usize];
    let mut stack = vec![start];
    seen[start as usize] = true;
    let mut count = 0;

    while let Some(id) = stack.pop() {
        count += 1;
        for (next, _dir) in grid.open_neighbors(id) {
            if !seen[next as usize] {
                seen[next as usize] = true;
                stack.push(next);
            }
        }
    }
    count
}

/// ASCII rendering of the wall layout, for readable failure output
pub fn maze_to_string(grid: &Grid) -> String {
    let mut result = String::new();

    for y in 0..grid.rows {
        for x in 0..grid.cols {
            result.push('+');
            let id = grid.get_id(x, y);
            result.push_str(if grid.cell(id).north { "--" } else { "  " });
        }
        result.push_str("+\n");

        for x in 0..grid.cols {
            let id = grid.get_id(x, y);
            result.push(if grid.cell(id).west { '|' } else { ' ' });
            result.push_str("  ");
        }
        let last = grid.get_id(grid.cols - 1, y);
        result.push(if grid.cell(last).east { '|' } else { ' ' });
        result.push('\n');
    }

    for x in 0..grid.cols {
        result.push('+');
        let id = grid.get_id(x, grid.rows - 1);
        result.push_str(if grid.cell(id).south { "--" } else { "  " });
    }
    result.push_str("+\n");

    result
}
