pub mod agent;
pub mod config;
pub mod grid;
pub mod maze;
pub mod pathfinding;
pub mod session;

pub use agent::AgentScheduler;
pub use grid::{Cell, Direction, Grid};
pub use session::{GameState, Rules, Session};
