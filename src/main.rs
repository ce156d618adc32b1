use std::time::{Duration, Instant};

use arboard::Clipboard;
use macroquad::prelude::*;
// Leading :: picks the rand crate over macroquad's bundled rand module
use ::rand::thread_rng;

use mazerace::config::Config;
use mazerace::{Direction, GameState, Grid, Session};

// Marker colors
const PLAYER_COLOR: Color = Color::new(0.165, 0.510, 0.188, 1.0); // green
const AGENT_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0); // red
const EXIT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0); // white
const WALL_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

const WALL_THICKNESS: f32 = 2.0;

/// Pixel placement of the maze inside the window
struct Layout {
    cell_size: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Layout {
    /// Fit the grid into the current window, centered, honoring the margin
    fn fit(grid: &Grid, margin: f32) -> Self {
        let usable_w = screen_width() - margin * 2.0;
        let usable_h = screen_height() - margin * 2.0;
        let cell_size = (usable_w / grid.cols as f32)
            .min(usable_h / grid.rows as f32)
            .floor();

        let maze_w = grid.cols as f32 * cell_size;
        let maze_h = grid.rows as f32 * cell_size;
        Layout {
            cell_size,
            offset_x: ((screen_width() - maze_w) / 2.0).floor(),
            offset_y: ((screen_height() - maze_h) / 2.0).floor(),
        }
    }

    /// Top-left pixel corner of a cell
    fn cell_origin(&self, grid: &Grid, id: i32) -> (f32, f32) {
        let (x, y) = grid.get_coords(id);
        (
            x as f32 * self.cell_size + self.offset_x,
            y as f32 * self.cell_size + self.offset_y,
        )
    }
}

fn draw_session(session: &Session, layout: &Layout) {
    let grid = &session.grid;
    let size = layout.cell_size;

    for id in 0..grid.n_cells() {
        let cell = grid.cell(id);
        let (x, y) = layout.cell_origin(grid, id);

        if cell.north {
            draw_line(x, y, x + size, y, WALL_THICKNESS, WALL_COLOR);
        }
        if cell.south {
            draw_line(x, y + size, x + size, y + size, WALL_THICKNESS, WALL_COLOR);
        }
        if cell.west {
            draw_line(x, y, x, y + size, WALL_THICKNESS, WALL_COLOR);
        }
        if cell.east {
            draw_line(x + size, y, x + size, y + size, WALL_THICKNESS, WALL_COLOR);
        }
    }

    draw_marker(session, layout, session.player_cell, PLAYER_COLOR);
    draw_marker(session, layout, session.agent_cell, AGENT_COLOR);
    draw_marker(session, layout, session.exit_cell, EXIT_COLOR);

    let hud = format!("Level {}/{}", session.level, session.rules.levels_to_win);
    draw_text(&hud, layout.offset_x, layout.offset_y - 10.0, 24.0, TEXT_COLOR);
}

fn draw_marker(session: &Session, layout: &Layout, cell: i32, color: Color) {
    let (x, y) = layout.cell_origin(&session.grid, cell);
    let half = layout.cell_size / 2.0;
    draw_circle(x + half, y + half, layout.cell_size / 4.0, color);
}

fn draw_end_screen(message: &str) {
    draw_centered_text(message, screen_height() / 2.0, 48.0);
    draw_centered_text("[Press 'ENTER' to restart]", screen_height() / 2.0 + 45.0, 28.0);
}

fn draw_centered_text(text: &str, y: f32, font_size: f32) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        y,
        font_size,
        TEXT_COLOR,
    );
}

/// ASCII snapshot of the maze with P/A/E markers, for the clipboard
fn maze_to_string(session: &Session) -> String {
    let grid = &session.grid;
    let mut result = String::new();

    for y in 0..grid.rows {
        // North walls of this row
        for x in 0..grid.cols {
            result.push('+');
            let id = grid.get_id(x, y);
            result.push_str(if grid.cell(id).north { "--" } else { "  " });
        }
        result.push_str("+\n");

        // West walls and cell markers, plus the row's east border
        for x in 0..grid.cols {
            let id = grid.get_id(x, y);
            result.push(if grid.cell(id).west { '|' } else { ' ' });
            let marker = if id == session.player_cell {
                "P "
            } else if id == session.agent_cell {
                "A "
            } else if id == session.exit_cell {
                "E "
            } else {
                "  "
            };
            result.push_str(marker);
        }
        let last = grid.get_id(grid.cols - 1, y);
        result.push(if grid.cell(last).east { '|' } else { ' ' });
        result.push('\n');
    }

    // South border of the bottom row
    for x in 0..grid.cols {
        result.push('+');
        let id = grid.get_id(x, grid.rows - 1);
        result.push_str(if grid.cell(id).south { "--" } else { "  " });
    }
    result.push_str("+\n");

    result
}

fn copy_to_clipboard(session: &Session) {
    let snapshot = maze_to_string(session);
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(&snapshot) {
                println!("Failed to copy to clipboard: {}", e);
            } else {
                println!("Maze snapshot copied to clipboard!");
            }
        }
        Err(e) => {
            println!("Failed to access clipboard: {}", e);
        }
    }
}

#[macroquad::main("Maze Race")]
async fn main() {
    let config = Config::load();
    request_new_screen_size(
        config.visual.window_size as f32,
        config.visual.window_size as f32,
    );

    let background = Color::from_rgba(
        config.visual.background_r,
        config.visual.background_g,
        config.visual.background_b,
        255,
    );
    let frame_time = Duration::from_micros(1_000_000 / config.visual.target_fps.max(1));

    let mut rng = thread_rng();
    let mut session = Session::new(config.rules(), Instant::now(), &mut rng)
        .expect("freshly generated maze is connected");

    loop {
        let frame_start = Instant::now();

        if is_key_pressed(KeyCode::W) || is_key_pressed(KeyCode::Up) {
            session.queue_move(Direction::Up);
        }
        if is_key_pressed(KeyCode::S) || is_key_pressed(KeyCode::Down) {
            session.queue_move(Direction::Down);
        }
        if is_key_pressed(KeyCode::A) || is_key_pressed(KeyCode::Left) {
            session.queue_move(Direction::Left);
        }
        if is_key_pressed(KeyCode::D) || is_key_pressed(KeyCode::Right) {
            session.queue_move(Direction::Right);
        }
        if is_key_pressed(KeyCode::Space) {
            session.skip_level();
        }
        if is_key_pressed(KeyCode::Enter) && session.state != GameState::Playing {
            session
                .restart(Instant::now(), &mut rng)
                .expect("freshly generated maze is connected");
        }
        if is_key_pressed(KeyCode::C) {
            copy_to_clipboard(&session);
        }
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        session
            .tick(Instant::now(), &mut rng)
            .expect("freshly generated maze is connected");

        clear_background(background);
        if let Some(message) = session.status_message() {
            draw_end_screen(message);
        } else {
            let layout = Layout::fit(&session.grid, config.visual.margin);
            draw_session(&session, &layout);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
        next_frame().await
    }
}
