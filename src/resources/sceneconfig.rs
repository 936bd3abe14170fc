//! Scene configuration resource.
//!
//! Window settings loaded from an INI configuration file. Defaults are safe
//! for startup; a missing or partial file keeps them. Animation timings and
//! colors are fixed by the scene and are not configurable.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 480
//! height = 800
//! target_fps = 60
//! vsync = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 480;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Scene configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct SceneConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file {:?}: {}", self.config_path, e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        if let Some(width) = read_uint(config, "window", "width").filter(|w| *w > 0) {
            self.window_width = width as u32;
        }
        if let Some(height) = read_uint(config, "window", "height").filter(|h| *h > 0) {
            self.window_height = height as u32;
        }
        if let Some(fps) = read_uint(config, "window", "target_fps") {
            self.target_fps = fps as u32;
        }
        match config.getbool("window", "vsync") {
            Ok(Some(vsync)) => self.vsync = vsync,
            Ok(None) => {}
            Err(e) => warn!("Ignoring [window] vsync: {}", e),
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}",
            self.window_width, self.window_height, self.target_fps, self.vsync
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

fn read_uint(config: &Ini, section: &str, key: &str) -> Option<u64> {
    match config.getuint(section, key) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring [{}] {}: {}", section, key, e);
            None
        }
    }
}
