use std::time::Instant;

use rand::Rng;

use crate::agent::AgentScheduler;
use crate::grid::{Direction, Grid};
use crate::maze;
use crate::pathfinding::{self, PathNotFound};

const WIN_MESSAGE: &str = "YOU WIN!";
const GAME_OVER_MESSAGE: &str = "GAME OVER!";

/// Behavior constants for one game session
#[derive(Debug, Clone)]
pub struct Rules {
    pub initial_rows: i32,
    pub initial_cols: i32,
    /// Rows and cols both grow by this much per cleared level
    pub growth_per_level: i32,
    pub levels_to_win: u32,
    pub min_step_delay_ms: u64,
    /// Exclusive upper bound of the agent step delay
    pub max_step_delay_ms: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            initial_rows: 3,
            initial_cols: 3,
            growth_per_level: 1,
            levels_to_win: 25,
            min_step_delay_ms: 200,
            max_step_delay_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// The agent reached the exit first; terminal until restart
    GameOver,
    /// The player cleared the final level; terminal until restart
    Won,
}

/// One run of the game: the current maze, the three tracked cells and the
/// agent playback state. Everything the renderer needs is readable here;
/// all mutation goes through the intent methods and `tick`.
pub struct Session {
    pub rules: Rules,
    pub level: u32,
    pub grid: Grid,
    pub player_cell: i32,
    pub agent_cell: i32,
    pub exit_cell: i32,
    pub state: GameState,
    pending_move: Option<Direction>,
    scheduler: AgentScheduler,
}

impl Session {
    /// Start a fresh session at level 1 and load its maze
    pub fn new(rules: Rules, now: Instant, rng: &mut impl Rng) -> Result<Self, PathNotFound> {
        let mut session = Session {
            grid: Grid::new(rules.initial_rows, rules.initial_cols),
            level: 1,
            player_cell: 0,
            agent_cell: 0,
            exit_cell: 0,
            state: GameState::Playing,
            pending_move: None,
            scheduler: AgentScheduler::new(
                Vec::new(),
                now,
                rules.min_step_delay_ms,
                rules.max_step_delay_ms,
            ),
            rules,
        };
        session.load_level(now, rng)?;
        Ok(session)
    }

    /// Queue a movement intent for the next tick; the latest intent wins
    pub fn queue_move(&mut self, dir: Direction) {
        self.pending_move = Some(dir);
    }

    /// Teleport the player onto the exit; the ordinary clear transition
    /// fires on the same tick's evaluation
    pub fn skip_level(&mut self) {
        if self.state == GameState::Playing {
            self.player_cell = self.exit_cell;
        }
    }

    /// Leave a terminal state and start over from level 1.
    /// Ignored while a run is still in progress.
    pub fn restart(&mut self, now: Instant, rng: &mut impl Rng) -> Result<(), PathNotFound> {
        if self.state == GameState::Playing {
            return Ok(());
        }
        self.level = 1;
        self.pending_move = None;
        self.load_level(now, rng)
    }

    /// Evaluate one frame: termination checks first, then the pending player
    /// move, then the agent playback step.
    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) -> Result<(), PathNotFound> {
        if self.state != GameState::Playing {
            self.pending_move = None;
            return Ok(());
        }

        if self.player_cell == self.exit_cell {
            if self.level < self.rules.levels_to_win {
                self.level += 1;
                self.load_level(now, rng)?;
                // A pending move carries over and is evaluated against the
                // fresh maze below.
            } else {
                self.state = GameState::Won;
                self.pending_move = None;
                return Ok(());
            }
        } else if self.agent_cell == self.exit_cell {
            self.state = GameState::GameOver;
            self.pending_move = None;
            return Ok(());
        }

        self.apply_pending_move();
        if let Some(cell) = self.scheduler.poll(now, rng) {
            self.agent_cell = cell;
        }
        Ok(())
    }

    /// Terminal-state banner for the renderer
    pub fn status_message(&self) -> Option<&'static str> {
        match self.state {
            GameState::Playing => None,
            GameState::Won => Some(WIN_MESSAGE),
            GameState::GameOver => Some(GAME_OVER_MESSAGE),
        }
    }

    /// Agent path steps not yet played back
    pub fn agent_steps_remaining(&self) -> usize {
        self.scheduler.remaining()
    }

    /// Build the maze for the current level and reset positions, exit, path
    /// and playback timing. Grid dimensions follow the level number.
    fn load_level(&mut self, now: Instant, rng: &mut impl Rng) -> Result<(), PathNotFound> {
        let growth = (self.level as i32 - 1) * self.rules.growth_per_level;
        let rows = self.rules.initial_rows + growth;
        let cols = self.rules.initial_cols + growth;

        self.grid = maze::generate(rows, cols, rng);
        self.player_cell = 0;
        self.agent_cell = 0;
        // The exit is drawn over all cells; landing on cell 0 means an
        // instant clear, which is allowed.
        self.exit_cell = rng.gen_range(0..self.grid.n_cells());

        let path = pathfinding::shortest_path(&self.grid, self.agent_cell, self.exit_cell)?;
        // The agent already stands on the first path cell
        self.scheduler = AgentScheduler::new(
            path[1..].to_vec(),
            now,
            self.rules.min_step_delay_ms,
            self.rules.max_step_delay_ms,
        );
        self.state = GameState::Playing;

        println!("Generating level {} ({}x{})", self.level, cols, rows);
        Ok(())
    }

    /// Honor the queued move if no wall blocks it, then drop the intent
    /// either way so held keys do not auto-repeat.
    fn apply_pending_move(&mut self) {
        if let Some(dir) = self.pending_move.take() {
            if self.grid.is_open(self.player_cell, dir) {
                if let Some(next) = self.grid.neighbor(self.player_cell, dir) {
                    self.player_cell = next;
                }
            }
        }
    }
}
