use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::todo::Todo;
use crate::parse::{parse_todos, serialize_todos};

/// Error type for todo file I/O
#[derive(Debug, thiserror::Error)]
pub enum TodoIoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
}

/// The two files backing a task list: the live todo file and the archive
/// that finished todos are moved into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFiles {
    pub todo_path: PathBuf,
    pub done_path: PathBuf,
}

impl TodoFiles {
    pub fn new(todo_path: impl Into<PathBuf>, done_path: impl Into<PathBuf>) -> Self {
        TodoFiles {
            todo_path: todo_path.into(),
            done_path: done_path.into(),
        }
    }

    /// Create whichever of the two files is missing (with parent directories).
    /// Existing files are left alone. Returns the paths that were created.
    pub fn init(&self) -> Result<Vec<PathBuf>, TodoIoError> {
        let mut created = Vec::new();
        for path in [&self.todo_path, &self.done_path] {
            if path.exists() {
                continue;
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
            }
            fs::write(path, "").map_err(|e| write_error(path, e))?;
            created.push(path.clone());
        }
        Ok(created)
    }

    /// Read and parse the todo file, in file order.
    /// Also returns the non-empty lines that did not parse.
    pub fn read_todos(&self) -> Result<(Vec<Todo>, Vec<String>), TodoIoError> {
        let text = read_file(&self.todo_path)?;
        Ok(parse_todos(&text))
    }

    /// Replace the whole todo file with `todos`, in the given order.
    pub fn write_todos(&self, todos: &[Todo]) -> Result<(), TodoIoError> {
        let content = serialize_todos(todos);
        atomic_write(&self.todo_path, content.as_bytes())
            .map_err(|e| write_error(&self.todo_path, e))
    }

    /// Put `todos` in front of whatever the archive file already holds.
    /// An empty slice leaves the file untouched.
    pub fn archive_todos(&self, todos: &[Todo]) -> Result<(), TodoIoError> {
        if todos.is_empty() {
            return Ok(());
        }
        let previous = read_file(&self.done_path)?;
        let mut content = serialize_todos(todos);
        content.push_str(&previous);
        atomic_write(&self.done_path, content.as_bytes())
            .map_err(|e| write_error(&self.done_path, e))
    }
}

fn read_file(path: &Path) -> Result<String, TodoIoError> {
    fs::read_to_string(path).map_err(|e| TodoIoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_error(path: &Path, source: io::Error) -> TodoIoError {
    TodoIoError::WriteError {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `content` to a temp file next to `path`, then rename it over `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
