use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{LABEL_OFFSET, MARGIN, POINT_RADIUS};

/// Narrowest surface that still leaves room for an axis between the margins
pub const MIN_CANVAS_WIDTH: f64 = 4.0 * MARGIN;
/// Shortest surface that keeps the labels below the axis on screen
pub const MIN_CANVAS_HEIGHT: f64 = 2.0 * (LABEL_OFFSET + POINT_RADIUS);

/// Screen shown when the app opens
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StartScreen {
    #[default]
    Theory,
    Practice,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub start_screen: StartScreen,
    /// Size of the virtual surface the number line is drawn on
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_screen: StartScreen::Theory,
            canvas_width: 600.0,
            canvas_height: 150.0,
        }
    }
}

impl Config {
    /// Replace canvas dimensions the number line cannot be drawn on with
    /// their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.canvas_width.is_finite() && self.canvas_width >= MIN_CANVAS_WIDTH) {
            log::warn!(
                "canvas_width {} below {MIN_CANVAS_WIDTH}, using {}",
                self.canvas_width,
                defaults.canvas_width
            );
            self.canvas_width = defaults.canvas_width;
        }
        if !(self.canvas_height.is_finite() && self.canvas_height >= MIN_CANVAS_HEIGHT) {
            log::warn!(
                "canvas_height {} below {MIN_CANVAS_HEIGHT}, using {}",
                self.canvas_height,
                defaults.canvas_height
            );
            self.canvas_height = defaults.canvas_height;
        }
        self
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = crate::app_dirs::AppDirs::config_path()
            .unwrap_or_else(|| PathBuf::from("entornos_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => cfg.sanitized(),
                Err(e) => {
                    log::warn!("ignoring unreadable config {}: {e}", self.path.display());
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}

/// Config dir under the platform project dirs, if one can be resolved
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "entornos")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            start_screen: StartScreen::Practice,
            canvas_width: 800.0,
            canvas_height: 200.0,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "start_screen": "practice" }"#).unwrap();

        let loaded = FileConfigStore::with_path(&path).load();
        assert_eq!(loaded.start_screen, StartScreen::Practice);
        assert_eq!(loaded.canvas_width, 600.0);
    }

    #[test]
    fn corrupt_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"not json").unwrap();

        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn unusable_canvas_size_falls_back_per_dimension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);

        fs::write(&path, r#"{ "canvas_width": 0, "canvas_height": -150 }"#).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.canvas_width, 600.0);
        assert_eq!(loaded.canvas_height, 150.0);

        fs::write(&path, r#"{ "canvas_width": 100, "canvas_height": 200 }"#).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.canvas_width, 600.0);
        assert_eq!(loaded.canvas_height, 200.0);

        fs::write(&path, r#"{ "canvas_width": 800, "canvas_height": 200 }"#).unwrap();
        let loaded = store.load();
        assert_eq!((loaded.canvas_width, loaded.canvas_height), (800.0, 200.0));
    }

    #[test]
    fn sanitized_keeps_the_minimum() {
        let cfg = Config {
            canvas_width: MIN_CANVAS_WIDTH,
            canvas_height: MIN_CANVAS_HEIGHT,
            ..Config::default()
        };
        assert_eq!(cfg.clone().sanitized(), cfg);

        let cfg = Config {
            canvas_width: f64::NAN,
            canvas_height: f64::INFINITY,
            ..Config::default()
        };
        assert_eq!(cfg.sanitized(), Config::default());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }
}
