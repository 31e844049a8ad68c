use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        crate::config::project_dirs().map(|pd| pd.config_dir().join("config.json"))
    }

    /// Log file; stderr is unusable while the alternate screen is up
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("entornos");
            Some(state_dir.join("entornos.log"))
        } else {
            crate::config::project_dirs()
                .map(|proj_dirs| proj_dirs.data_local_dir().join("entornos.log"))
        }
    }
}
