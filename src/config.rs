use serde::Deserialize;
use std::fs;

use crate::session::Rules;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub visual: VisualConfig,
}

#[derive(Debug, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_initial_rows")]
    pub initial_rows: i32,
    #[serde(default = "default_initial_cols")]
    pub initial_cols: i32,
    #[serde(default = "default_growth_per_level")]
    pub growth_per_level: i32,
    #[serde(default = "default_levels_to_win")]
    pub levels_to_win: u32,
}

#[derive(Debug, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_min_step_delay_ms")]
    pub min_step_delay_ms: u64,
    /// Exclusive upper bound; must be greater than the minimum
    #[serde(default = "default_max_step_delay_ms")]
    pub max_step_delay_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_size")]
    pub window_size: i32,
    #[serde(default = "default_margin")]
    pub margin: f32,
    #[serde(default = "default_target_fps")]
    pub target_fps: u64,
    #[serde(default = "default_bg_r")]
    pub background_r: u8,
    #[serde(default = "default_bg_g")]
    pub background_g: u8,
    #[serde(default = "default_bg_b")]
    pub background_b: u8,
}

// Default values
fn default_initial_rows() -> i32 { 3 }
fn default_initial_cols() -> i32 { 3 }
fn default_growth_per_level() -> i32 { 1 }
fn default_levels_to_win() -> u32 { 25 }
fn default_min_step_delay_ms() -> u64 { 200 }
fn default_max_step_delay_ms() -> u64 { 300 }
fn default_window_size() -> i32 { 600 }
fn default_margin() -> f32 { 40.0 }
fn default_target_fps() -> u64 { 60 }
fn default_bg_r() -> u8 { 0 }
fn default_bg_g() -> u8 { 0 }
fn default_bg_b() -> u8 { 0 }

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_rows: default_initial_rows(),
            initial_cols: default_initial_cols(),
            growth_per_level: default_growth_per_level(),
            levels_to_win: default_levels_to_win(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            min_step_delay_ms: default_min_step_delay_ms(),
            max_step_delay_ms: default_max_step_delay_ms(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            margin: default_margin(),
            target_fps: default_target_fps(),
            background_r: default_bg_r(),
            background_g: default_bg_g(),
            background_b: default_bg_b(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            agent: AgentConfig::default(),
            visual: VisualConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from config.toml");
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse config.toml: {}", e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No config.toml found, using default configuration");
                Config::default()
            }
        }
    }

    /// Project the game and agent sections into session rules
    pub fn rules(&self) -> Rules {
        Rules {
            initial_rows: self.game.initial_rows,
            initial_cols: self.game.initial_cols,
            growth_per_level: self.game.growth_per_level,
            levels_to_win: self.game.levels_to_win,
            min_step_delay_ms: self.agent.min_step_delay_ms,
            max_step_delay_ms: self.agent.max_step_delay_ms,
        }
    }
}
