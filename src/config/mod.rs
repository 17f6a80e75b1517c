//! Configuration loading and defaults.
//!
//! Every knob has a documented default; a YAML config file may override
//! any subset of them. The ignore lists configured here are handed to the
//! path filter at construction time rather than read from global state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::scan::filter::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES};

/// Default name of the persisted report.
pub const DEFAULT_OUTPUT_FILE: &str = "business_use_cases_report.md";

/// Default Claude model used for both stages.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Per-project config file name, looked up in the project directory.
const PROJECT_CONFIG_FILE: &str = ".bizcase.yaml";

/// Tool configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory names pruned during the scan.
    pub ignore_dirs: Vec<String>,
    /// File names skipped during the scan.
    pub ignore_files: Vec<String>,
    /// Where the report is written (relative paths resolve against the
    /// working directory).
    pub output_file: PathBuf,
    /// Model identifier for AI requests.
    pub model: String,
    /// Upper bound on how many files the analysis stage reads in full.
    pub max_critical_files: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_dirs: DEFAULT_IGNORED_DIRS.iter().map(ToString::to_string).collect(),
            ignore_files: DEFAULT_IGNORED_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            model: DEFAULT_MODEL.to_string(),
            max_critical_files: 8,
        }
    }
}

impl Config {
    /// Loads configuration for a project.
    ///
    /// Priority: explicit `--config` path (must exist and parse), then
    /// `.bizcase.yaml` in the project directory, then the XDG config
    /// directory, then built-in defaults. A malformed file is a hard
    /// error at any tier; a missing one is not.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match resolve_config_file(project_dir) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parses a config file, filling unset fields with defaults.
    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Malformed config file: {}", path.display()))
    }

    /// Resolves the model to use: CLI flag beats the `BIZCASE_MODEL`
    /// environment variable beats the config file value.
    pub fn effective_model(&self, cli_override: Option<&str>) -> String {
        if let Some(model) = cli_override {
            return model.to_string();
        }
        if let Ok(model) = std::env::var("BIZCASE_MODEL") {
            if !model.is_empty() {
                return model;
            }
        }
        self.model.clone()
    }
}

/// Returns the XDG-compliant config directory for bizcase.
///
/// Uses `$XDG_CONFIG_HOME/bizcase/` if the variable is set, otherwise
/// defaults to `$HOME/.config/bizcase/` per the XDG Base Directory
/// Specification. Returns `None` if neither can be determined.
///
/// Uses `std::env::var` directly rather than `dirs::config_dir()`, which
/// returns `~/Library/Application Support/` on macOS — not the expected
/// location for a CLI tool.
fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_home.is_empty() {
            return Some(PathBuf::from(xdg_home).join("bizcase"));
        }
    }

    dirs::home_dir().map(|home| home.join(".config").join("bizcase"))
}

/// Finds the first existing config file in the resolution chain, or
/// `None` when every tier is empty.
fn resolve_config_file(project_dir: &Path) -> Option<PathBuf> {
    let project_path = project_dir.join(PROJECT_CONFIG_FILE);
    if project_path.exists() {
        return Some(project_path);
    }

    if let Some(xdg_dir) = xdg_config_dir() {
        let xdg_path = xdg_dir.join("config.yaml");
        if xdg_path.exists() {
            return Some(xdg_path);
        }
    }

    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Use a mutex to serialize tests that modify process environment.
    static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

    // ── defaults ───────────────────────────────────────────────────

    #[test]
    fn default_lists_match_scanner_defaults() {
        let config = Config::default();
        assert!(config.ignore_dirs.iter().any(|d| d == "node_modules"));
        assert!(config.ignore_files.iter().any(|f| f == ".env"));
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.max_critical_files, 8);
    }

    // ── parsing ────────────────────────────────────────────────────

    #[test]
    fn partial_yaml_fills_remaining_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(".bizcase.yaml");
        std::fs::write(&path, "output_file: custom.md\nmax_critical_files: 3\n")?;

        let config = Config::load(dir.path(), None)?;
        assert_eq!(config.output_file, PathBuf::from("custom.md"));
        assert_eq!(config.max_critical_files, 3);
        // Untouched fields keep defaults
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.ignore_dirs.iter().any(|d| d == ".git"));
        Ok(())
    }

    #[test]
    fn ignore_lists_fully_replaceable() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(".bizcase.yaml");
        std::fs::write(&path, "ignore_dirs: [generated]\nignore_files: []\n")?;

        let config = Config::load(dir.path(), None)?;
        assert_eq!(config.ignore_dirs, vec!["generated".to_string()]);
        assert!(config.ignore_files.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_yaml_is_hard_error() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join(".bizcase.yaml");
        std::fs::write(&path, "ignore_dirs: {not a list\n")?;

        let err = Config::load(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Malformed config file"));
        Ok(())
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::load(dir.path(), Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn explicit_path_beats_project_file() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(dir.path().join(".bizcase.yaml"), "model: from-project\n")?;
        let explicit = dir.path().join("other.yaml");
        std::fs::write(&explicit, "model: from-explicit\n")?;

        let config = Config::load(dir.path(), Some(&explicit))?;
        assert_eq!(config.model, "from-explicit");
        Ok(())
    }

    #[test]
    fn no_file_anywhere_falls_back_to_defaults() -> Result<()> {
        let _lock = ENV_MUTEX.lock().unwrap();
        let empty_xdg = TempDir::new()?;
        std::env::set_var("XDG_CONFIG_HOME", empty_xdg.path());
        let dir = TempDir::new()?;
        let config = Config::load(dir.path(), None);
        std::env::remove_var("XDG_CONFIG_HOME");
        assert_eq!(config?, Config::default());
        Ok(())
    }

    #[test]
    fn xdg_tier_used_when_project_file_missing() -> Result<()> {
        let _lock = ENV_MUTEX.lock().unwrap();
        let xdg = TempDir::new()?;
        let app_dir = xdg.path().join("bizcase");
        std::fs::create_dir_all(&app_dir)?;
        std::fs::write(app_dir.join("config.yaml"), "model: from-xdg\n")?;

        std::env::set_var("XDG_CONFIG_HOME", xdg.path());
        let dir = TempDir::new()?;
        let config = Config::load(dir.path(), None);
        std::env::remove_var("XDG_CONFIG_HOME");

        assert_eq!(config?.model, "from-xdg");
        Ok(())
    }

    // ── effective_model ────────────────────────────────────────────

    #[test]
    fn cli_override_beats_env_and_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("BIZCASE_MODEL", "from-env");
        let model = Config::default().effective_model(Some("from-cli"));
        std::env::remove_var("BIZCASE_MODEL");
        assert_eq!(model, "from-cli");
    }

    #[test]
    fn env_beats_config_value() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("BIZCASE_MODEL", "from-env");
        let model = Config::default().effective_model(None);
        std::env::remove_var("BIZCASE_MODEL");
        assert_eq!(model, "from-env");
    }

    #[test]
    fn empty_env_var_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var("BIZCASE_MODEL", "");
        let model = Config::default().effective_model(None);
        std::env::remove_var("BIZCASE_MODEL");
        assert_eq!(model, DEFAULT_MODEL);
    }
}
