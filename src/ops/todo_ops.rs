use crate::model::todo::{Attribute, Priority, Todo, TodoKey};
use crate::parse::scan::{is_attribute_value, is_word};
use crate::parse::{parse_todo, serialize_todo};

/// Error type for malformed edit input
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("invalid priority {0:?}: expected one letter A-Z, or - to clear")]
    InvalidPriority(String),
    #[error("invalid attribute key {0:?}: expected letters, digits or _")]
    InvalidAttributeKey(String),
    #[error("invalid attribute value {0:?}: expected letters, digits, - or _")]
    InvalidAttributeValue(String),
    #[error("todo text must be a single line")]
    MultiLine,
    #[error("todo text is empty")]
    Empty,
}

/// A change to one todo.
///
/// Constructors validate their input, so an `Edit` can be checked before the
/// todo file is even read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    SetDone(bool),
    SetPriority(Option<Priority>),
    ReplaceBody(String),
    SetAttribute(Attribute),
}

impl Edit {
    /// `-` or an empty string clears the priority
    pub fn set_priority(arg: &str) -> Result<Edit, TodoError> {
        let arg = arg.trim();
        if arg.is_empty() || arg == "-" {
            return Ok(Edit::SetPriority(None));
        }
        arg.parse::<Priority>()
            .map(|p| Edit::SetPriority(Some(p)))
            .map_err(|_| TodoError::InvalidPriority(arg.to_string()))
    }

    pub fn replace_body(body: &str) -> Result<Edit, TodoError> {
        check_line(body)?;
        Ok(Edit::ReplaceBody(body.to_string()))
    }

    pub fn set_attribute(key: &str, value: &str) -> Result<Edit, TodoError> {
        if !is_word(key) {
            return Err(TodoError::InvalidAttributeKey(key.to_string()));
        }
        if !is_attribute_value(value) {
            return Err(TodoError::InvalidAttributeValue(value.to_string()));
        }
        Ok(Edit::SetAttribute(Attribute::new(key, value)))
    }

    /// Build the edited copy of `todo`, as its written line reads back
    pub fn apply(&self, todo: &Todo) -> Result<Todo, TodoError> {
        let edited = match self {
            Edit::SetDone(done) => set_done(todo, *done),
            Edit::SetPriority(priority) => set_priority(todo, *priority),
            Edit::ReplaceBody(body) => replace_body(todo, body)?,
            Edit::SetAttribute(attr) => set_attribute(todo, attr.clone()),
        };
        reparse(&edited)
    }
}

/// Parse text typed as a new todo
pub fn parse_new_todo(text: &str) -> Result<Todo, TodoError> {
    check_line(text)?;
    parse_todo(text).ok_or(TodoError::Empty)
}

/// Key of the todo written on `line`, in the form `list` prints it
pub fn key_from_line(line: &str) -> Result<TodoKey, TodoError> {
    Ok(parse_new_todo(line)?.key())
}

pub fn set_done(todo: &Todo, done: bool) -> Todo {
    Todo {
        done,
        ..todo.clone()
    }
}

pub fn set_priority(todo: &Todo, priority: Option<Priority>) -> Todo {
    Todo {
        priority,
        ..todo.clone()
    }
}

/// Swap in new body text. The result goes back through the parser, so
/// markers and attributes typed into the body are picked up; attributes the
/// todo already had are kept after them.
pub fn replace_body(todo: &Todo, body: &str) -> Result<Todo, TodoError> {
    check_line(body)?;
    let draft = Todo {
        body: body.to_string(),
        ..todo.clone()
    };
    reparse(&draft)
}

/// Replace every attribute with this key by a single new one at the end
pub fn set_attribute(todo: &Todo, attr: Attribute) -> Todo {
    let mut attributes: Vec<Attribute> = todo
        .attributes
        .iter()
        .filter(|a| a.key != attr.key)
        .cloned()
        .collect();
    attributes.push(attr);
    Todo {
        attributes,
        ..todo.clone()
    }
}

fn reparse(todo: &Todo) -> Result<Todo, TodoError> {
    parse_todo(&serialize_todo(todo)).ok_or(TodoError::Empty)
}

fn check_line(text: &str) -> Result<(), TodoError> {
    if text.contains(['\n', '\r']) {
        return Err(TodoError::MultiLine);
    }
    if text.trim().is_empty() {
        return Err(TodoError::Empty);
    }
    Ok(())
}
