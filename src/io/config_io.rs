use std::fs;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};

use crate::io::todo_io::TodoFiles;
use crate::model::config::Config;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not determine the home directory")]
    NoHomeDir,
}

/// Directory under `$HOME` holding the default todo and done files
const DEFAULT_DIR: &str = "todo";
const DEFAULT_TODO_FILE: &str = "todo.txt";
const DEFAULT_DONE_FILE: &str = "done.txt";

/// `<platform config dir>/taskman/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "taskman").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load the configuration.
///
/// An explicitly named file must exist. The default location is optional:
/// when nothing is there, the built-in defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Pick the todo and done file locations.
/// Command line / environment overrides win over the config file, which wins
/// over `~/todo/todo.txt` and `~/todo/done.txt`.
pub fn resolve_files(
    config: &Config,
    todo_override: Option<PathBuf>,
    done_override: Option<PathBuf>,
) -> Result<TodoFiles, ConfigError> {
    let home = || {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(ConfigError::NoHomeDir)
    };
    let todo_path = resolve_path(
        todo_override,
        config.files.todo.as_deref(),
        DEFAULT_TODO_FILE,
        home,
    )?;
    let done_path = resolve_path(
        done_override,
        config.files.done.as_deref(),
        DEFAULT_DONE_FILE,
        home,
    )?;
    Ok(TodoFiles::new(todo_path, done_path))
}

fn resolve_path(
    overridden: Option<PathBuf>,
    configured: Option<&Path>,
    default_name: &str,
    home: impl Fn() -> Result<PathBuf, ConfigError>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = overridden {
        return Ok(path);
    }
    match configured {
        Some(path) => match path.strip_prefix("~") {
            Ok(rest) => Ok(home()?.join(rest)),
            Err(_) => Ok(path.to_path_buf()),
        },
        None => Ok(home()?.join(DEFAULT_DIR).join(default_name)),
    }
}
