/// Movement direction between adjacent cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction an adjacent cell sees us from
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A single cell in the maze grid.
/// Each flag is true while a wall is still standing on that side.
#[derive(Debug, Clone)]
pub struct Cell {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
    /// Only meaningful while the generator is carving; stale afterwards
    pub(crate) visited: bool,
}

impl Cell {
    fn walled() -> Self {
        Cell {
            north: true,
            south: true,
            east: true,
            west: true,
            visited: false,
        }
    }
}

/// Grid structure for storing cell wall states.
/// Cells are stored row-major: id = row * cols + col.
#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every wall closed
    pub fn new(rows: i32, cols: i32) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![Cell::walled(); (rows * cols) as usize],
        }
    }

    pub fn n_cells(&self) -> i32 {
        self.rows * self.cols
    }

    /// Convert (x, y) coordinates to cell ID
    pub fn get_id(&self, x: i32, y: i32) -> i32 {
        x + y * self.cols
    }

    /// Convert cell ID to (x, y) coordinates
    pub fn get_coords(&self, id: i32) -> (i32, i32) {
        (id % self.cols, id / self.cols)
    }

    pub fn cell(&self, id: i32) -> &Cell {
        &self.cells[id as usize]
    }

    /// Adjacent cell ID in the given direction, or None at the grid edge
    pub fn neighbor(&self, id: i32, dir: Direction) -> Option<i32> {
        let (x, y) = self.get_coords(id);
        match dir {
            Direction::Up if y > 0 => Some(id - self.cols),
            Direction::Down if y < self.rows - 1 => Some(id + self.cols),
            Direction::Left if x > 0 => Some(id - 1),
            Direction::Right if x < self.cols - 1 => Some(id + 1),
            _ => None,
        }
    }

    /// Whether the wall on the given side of a cell has been carved away
    pub fn is_open(&self, id: i32, dir: Direction) -> bool {
        let cell = &self.cells[id as usize];
        match dir {
            Direction::Up => !cell.north,
            Direction::Down => !cell.south,
            Direction::Left => !cell.west,
            Direction::Right => !cell.east,
        }
    }

    /// Neighbors reachable through open walls, in fixed Up/Down/Left/Right order
    pub fn open_neighbors(&self, id: i32) -> Vec<(i32, Direction)> {
        let mut neighbors = Vec::with_capacity(4);
        for dir in Direction::ALL {
            if self.is_open(id, dir) {
                if let Some(next) = self.neighbor(id, dir) {
                    neighbors.push((next, dir));
                }
            }
        }
        neighbors
    }

    /// Remove the wall pair between a cell and its neighbor in the given direction.
    /// `neighbor_id` must be the cell adjacent to `id` on that side.
    pub fn open_wall(&mut self, id: i32, neighbor_id: i32, dir: Direction) {
        self.set_side(id, dir, false);
        self.set_side(neighbor_id, dir.opposite(), false);
    }

    fn set_side(&mut self, id: i32, dir: Direction, walled: bool) {
        let cell = &mut self.cells[id as usize];
        match dir {
            Direction::Up => cell.north = walled,
            Direction::Down => cell.south = walled,
            Direction::Left => cell.west = walled,
            Direction::Right => cell.east = walled,
        }
    }
}
