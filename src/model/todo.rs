use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Priority letter, always one of `A`..=`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Priority(char);

impl Priority {
    /// Accepts only an uppercase ASCII letter
    pub fn new(letter: char) -> Option<Priority> {
        letter.is_ascii_uppercase().then_some(Priority(letter))
    }

    pub fn letter(self) -> char {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Priority {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Priority::new(c).ok_or_else(|| format!("invalid priority: {:?}", c))
    }
}

impl From<Priority> for char {
    fn from(p: Priority) -> char {
        p.0
    }
}

/// Lenient user-facing form: a single letter in either case.
impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                Ok(Priority(c.to_ascii_uppercase()))
            }
            _ => Err(format!("invalid priority: {:?} (expected one letter A-Z)", s)),
        }
    }
}

/// A `key:value` marker lifted out of the body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One line of the todo file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub done: bool,
    pub priority: Option<Priority>,
    /// Description text. Attribute tokens are removed, `@context` and `+tag`
    /// markers stay inline.
    pub body: String,
    /// Context names (without the `@` prefix)
    pub contexts: Vec<String>,
    /// Tag names (without the `+` prefix)
    pub tags: Vec<String>,
    /// Attributes in encounter order, duplicate keys allowed
    pub attributes: Vec<Attribute>,
}

impl Todo {
    /// Create an open, unprioritized todo with no markers
    pub fn new(body: impl Into<String>) -> Self {
        Todo {
            done: false,
            priority: None,
            body: body.into(),
            contexts: Vec::new(),
            tags: Vec::new(),
            attributes: Vec::new(),
        }
    }

    pub fn key(&self) -> TodoKey {
        TodoKey {
            body: self.body.clone(),
            priority: self.priority,
        }
    }
}

/// Content-based identity of a todo.
///
/// The file format carries no identifiers, so a todo is found again by its
/// body and priority as they were before the edit. Two todos with the same
/// body and priority share a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoKey {
    pub body: String,
    pub priority: Option<Priority>,
}

impl TodoKey {
    pub fn new(body: impl Into<String>, priority: Option<Priority>) -> Self {
        TodoKey {
            body: body.into(),
            priority,
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        todo.body == self.body && todo.priority == self.priority
    }
}

impl fmt::Display for TodoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.priority {
            Some(p) => write!(f, "({}) {}", p, self.body),
            None => write!(f, "{}", self.body),
        }
    }
}
