use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Locations of the todo file and the archive of finished todos.
/// Unset entries fall back to `~/todo/todo.txt` and `~/todo/done.txt`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default)]
    pub todo: Option<PathBuf>,
    #[serde(default)]
    pub done: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub policy: MatchPolicy,
}

/// What to do when several todos share the key of an edit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Apply the edit to every matching todo
    #[default]
    All,
    /// Refuse the edit unless exactly one todo matches
    Unique,
}
