use serde::Serialize;

use crate::model::todo::{Attribute, Todo};
use crate::parse::serialize_todo;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    /// Canonical line, usable as a target for edit commands
    pub line: String,
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
    pub body: String,
    pub contexts: Vec<String>,
    pub tags: Vec<String>,
    pub attributes: Vec<Attribute>,
}

#[derive(Serialize)]
pub struct UpdateJson {
    pub matched: usize,
    pub todo: TodoJson,
}

#[derive(Serialize)]
pub struct ArchiveJson {
    pub archived: Vec<TodoJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn todo_to_json(todo: &Todo) -> TodoJson {
    TodoJson {
        line: serialize_todo(todo),
        done: todo.done,
        priority: todo.priority.map(|p| p.letter()),
        body: todo.body.clone(),
        contexts: todo.contexts.clone(),
        tags: todo.tags.clone(),
        attributes: todo.attributes.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// One line per todo, exactly as stored
pub fn format_listing<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Vec<String> {
    todos.into_iter().map(serialize_todo).collect()
}

/// Confirmation printed after an edit
pub fn format_update(todo: &Todo, matched: usize) -> Vec<String> {
    let mut lines = vec![serialize_todo(todo)];
    if matched > 1 {
        lines.push(format!("({} identical todos updated)", matched));
    }
    lines
}

pub fn format_archive(archived: &[Todo]) -> Vec<String> {
    let mut lines = vec![match archived.len() {
        0 => "nothing to archive".to_string(),
        1 => "archived 1 todo".to_string(),
        n => format!("archived {} todos", n),
    }];
    lines.extend(archived.iter().map(|t| format!("  {}", serialize_todo(t))));
    lines
}
