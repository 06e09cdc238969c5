use crate::model::todo::{Priority, Todo};

/// Unprioritized todos sort as if they had priority `Z`
fn sort_key(todo: &Todo) -> char {
    todo.priority.map_or('Z', Priority::letter)
}

/// Stable sort by priority letter. Todos with equal keys keep their relative
/// order, so an explicit `(Z)` stays interleaved with unprioritized todos.
pub fn sort_by_priority(todos: &mut [Todo]) {
    todos.sort_by_key(sort_key);
}

/// Display filter.
///
/// A one-character query selects todos with that priority (case-insensitive);
/// a longer query selects todos whose body contains it, ignoring case. No
/// query, or an empty one, keeps everything.
pub fn filter_todos<'a>(todos: &'a [Todo], query: Option<&str>) -> Vec<&'a Todo> {
    match query.filter(|q| !q.is_empty()) {
        None => todos.iter().collect(),
        Some(q) => todos.iter().filter(|t| matches_query(t, q)).collect(),
    }
}

pub fn matches_query(todo: &Todo, query: &str) -> bool {
    let mut chars = query.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), None) => todo.priority.map(Priority::letter) == Some(c.to_ascii_uppercase()),
        _ => todo.body.to_lowercase().contains(&query.to_lowercase()),
    }
}
