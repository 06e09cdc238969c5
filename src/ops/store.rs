use tracing::{debug, info};

use crate::io::todo_io::{TodoFiles, TodoIoError};
use crate::model::config::MatchPolicy;
use crate::model::todo::{Todo, TodoKey};
use crate::ops::filter::{filter_todos, sort_by_priority};
use crate::ops::locate::{LocateError, locate_and_update};
use crate::ops::todo_ops::{Edit, TodoError};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] TodoIoError),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Todo(#[from] TodoError),
}

/// Owner of the in-memory task list and its backing files.
///
/// The list is only ever replaced as a whole: every change builds a new
/// collection, writes it to the todo file, and then swaps it in.
#[derive(Debug)]
pub struct TodoStore {
    files: TodoFiles,
    policy: MatchPolicy,
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Create a store and load the todo file into it
    pub fn open(files: TodoFiles, policy: MatchPolicy) -> Result<Self, StoreError> {
        let mut store = TodoStore {
            files,
            policy,
            todos: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the todo file: lines that are not todos are dropped, the rest
    /// sorted by priority (stable).
    pub fn load(&mut self) -> Result<(), StoreError> {
        let (mut todos, dropped) = self.files.read_todos()?;
        sort_by_priority(&mut todos);
        debug!(
            path = %self.files.todo_path.display(),
            kept = todos.len(),
            dropped = dropped.len(),
            "loaded todos"
        );
        self.todos = todos;
        Ok(())
    }

    /// Write the current list back, replacing the whole file
    pub fn save(&self) -> Result<(), StoreError> {
        self.files.write_todos(&self.todos)?;
        debug!(
            path = %self.files.todo_path.display(),
            count = self.todos.len(),
            "saved todos"
        );
        Ok(())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn files(&self) -> &TodoFiles {
        &self.files
    }

    /// Todos selected by a display query, see [`filter_todos`]
    pub fn filtered(&self, query: Option<&str>) -> Vec<&Todo> {
        filter_todos(&self.todos, query)
    }

    /// Append a todo at the end of the list (it is sorted on the next load)
    pub fn add(&mut self, todo: Todo) -> Result<(), StoreError> {
        let mut next = self.todos.clone();
        next.push(todo);
        self.commit(next)
    }

    /// Apply `edit` to the todo(s) matching `key`.
    /// Returns the edited todo and how many todos the edit touched.
    pub fn update(&mut self, key: &TodoKey, edit: &Edit) -> Result<(Todo, usize), StoreError> {
        self.update_with(key, |todo| Ok(edit.apply(todo)?))
    }

    /// Like [`TodoStore::update`] with an arbitrary updater
    pub fn update_with(
        &mut self,
        key: &TodoKey,
        updater: impl FnMut(&Todo) -> Result<Todo, StoreError>,
    ) -> Result<(Todo, usize), StoreError> {
        let located = locate_and_update(&self.todos, key, self.policy, updater)?;
        self.commit(located.todos)?;
        Ok((located.todo, located.matched))
    }

    /// Move every done todo to the archive file and keep the rest.
    /// Returns the archived todos.
    pub fn archive_done(&mut self) -> Result<Vec<Todo>, StoreError> {
        let (done, keep): (Vec<Todo>, Vec<Todo>) =
            self.todos.iter().cloned().partition(|t| t.done);
        self.files.archive_todos(&done)?;
        self.commit(keep)?;
        info!(
            archived = done.len(),
            path = %self.files.done_path.display(),
            "archived done todos"
        );
        Ok(done)
    }

    fn commit(&mut self, next: Vec<Todo>) -> Result<(), StoreError> {
        self.files.write_todos(&next)?;
        self.todos = next;
        Ok(())
    }
}
