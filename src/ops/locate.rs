use tracing::warn;

use crate::model::config::MatchPolicy;
use crate::model::todo::{Todo, TodoKey};

/// Error type for finding the todo an edit is aimed at
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("no todo matches \"{key}\"")]
    NotFound { key: TodoKey },
    #[error("{count} todos match \"{key}\"; refusing to edit more than one")]
    Ambiguous { key: TodoKey, count: usize },
}

/// Result of an edit applied through [`locate_and_update`]
#[derive(Debug, Clone)]
pub struct Located {
    /// The rebuilt collection
    pub todos: Vec<Todo>,
    /// The edited todo (the last one, when several matched)
    pub todo: Todo,
    /// How many todos the edit was applied to
    pub matched: usize,
}

/// Indices of the todos whose body and priority equal `key`.
///
/// Zero matches is an error. Several matches are all returned under
/// [`MatchPolicy::All`] and rejected under [`MatchPolicy::Unique`].
pub fn locate(
    todos: &[Todo],
    key: &TodoKey,
    policy: MatchPolicy,
) -> Result<Vec<usize>, LocateError> {
    let indices: Vec<usize> = todos
        .iter()
        .enumerate()
        .filter(|(_, t)| key.matches(t))
        .map(|(i, _)| i)
        .collect();

    match (indices.len(), policy) {
        (0, _) => Err(LocateError::NotFound { key: key.clone() }),
        (1, _) | (_, MatchPolicy::All) => Ok(indices),
        (count, MatchPolicy::Unique) => Err(LocateError::Ambiguous {
            key: key.clone(),
            count,
        }),
    }
}

/// Apply `updater` to every todo matching `key` and return a new collection.
///
/// `todos` itself is never modified; if locating or any update fails, the
/// error is returned and nothing changes.
pub fn locate_and_update<E>(
    todos: &[Todo],
    key: &TodoKey,
    policy: MatchPolicy,
    mut updater: impl FnMut(&Todo) -> Result<Todo, E>,
) -> Result<Located, E>
where
    E: From<LocateError>,
{
    let indices = locate(todos, key, policy)?;
    if indices.len() > 1 {
        warn!(key = %key, matched = indices.len(), "edit applies to several todos");
    }

    let mut next = Vec::with_capacity(todos.len());
    let mut last = None;
    let mut pending = indices.iter().peekable();

    for (i, todo) in todos.iter().enumerate() {
        if pending.next_if(|&&m| m == i).is_some() {
            let updated = updater(todo)?;
            last = Some(updated.clone());
            next.push(updated);
        } else {
            next.push(todo.clone());
        }
    }

    // locate() never returns an empty match list
    let todo = last.ok_or_else(|| LocateError::NotFound { key: key.clone() })?;
    Ok(Located {
        todos: next,
        todo,
        matched: indices.len(),
    })
}
