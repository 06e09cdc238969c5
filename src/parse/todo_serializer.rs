use crate::model::todo::Todo;

/// Serialize a todo to its canonical line (no trailing newline).
///
/// Contexts and tags are not emitted separately, they are part of the body.
/// Attributes always go to the end of the line.
pub fn serialize_todo(todo: &Todo) -> String {
    let mut line = String::with_capacity(todo.body.len() + 8);

    if todo.done {
        line.push_str("x ");
    }
    if let Some(priority) = todo.priority {
        line.push_str(&format!("({}) ", priority));
    }
    line.push_str(&todo.body);
    for attr in &todo.attributes {
        line.push_str(&format!(" {}:{}", attr.key, attr.value));
    }

    line
}

/// Serialize a whole todo file: one line per todo, newline terminated
pub fn serialize_todos(todos: &[Todo]) -> String {
    let mut out = todos
        .iter()
        .map(serialize_todo)
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
