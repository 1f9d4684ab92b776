//! Loader for the scene settings (RON) and obstacle layout (JSON).

use ron::Options;
use std::fs;
use std::path::Path;

use super::layout::ObstacleLayout;
use super::settings::SceneSettings;

pub const SCENE_SETTINGS_PATH: &str = "assets/data/scene.ron";
pub const OBSTACLE_LAYOUT_PATH: &str = "assets/static/cubes.json";

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// A loaded value that parsed but is out of range.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(source_type: &'static str, field: &'static str, message: String) -> Self {
        Self {
            source_type,
            field,
            message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} field '{}': {}",
            self.source_type, self.field, self.message
        )
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ConfigLoadError> {
    fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

pub fn parse_settings(file: &str, contents: &str) -> Result<SceneSettings, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

pub fn parse_layout(file: &str, contents: &str) -> Result<ObstacleLayout, ConfigLoadError> {
    serde_json::from_str(contents).map_err(|e| ConfigLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

pub fn load_settings(path: &Path) -> Result<SceneSettings, ConfigLoadError> {
    let contents = read_file(path)?;
    parse_settings(&path.display().to_string(), &contents)
}

pub fn load_layout(path: &Path) -> Result<ObstacleLayout, ConfigLoadError> {
    let contents = read_file(path)?;
    parse_layout(&path.display().to_string(), &contents)
}
