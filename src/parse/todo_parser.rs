use crate::model::todo::{Attribute, Priority, Todo};
use crate::parse::scan::{attribute_tokens, markers};

/// Parse one line of a todo file.
///
/// Line shape: `[x ](P) body text @context +tag key:value`, where the done
/// marker and the priority marker are both optional. Returns `None` for a
/// blank line; any other line yields a todo, with malformed markers kept as
/// plain body text.
pub fn parse_todo(line: &str) -> Option<Todo> {
    if line.trim().is_empty() {
        return None;
    }

    let (done, after_done) = split_done_marker(line);
    let (priority, after_priority) = split_priority_marker(after_done);

    // A marker only counts if something is left for the body; otherwise it is
    // given back, priority first, then the done marker.
    let (done, priority, raw_body) = [
        (done, priority, after_priority),
        (done, None, after_done),
        (false, None, line),
    ]
    .into_iter()
    .map(|(done, priority, rest)| (done, priority, rest.trim_end()))
    .find(|(_, _, body)| !body.is_empty())?;

    let (body, attributes) = strip_attributes(raw_body);
    let (priority, body) = match priority {
        Some(priority) => (Some(priority), body),
        None => settle_body(done, body),
    };
    let contexts = markers(&body, b'@');
    let tags = markers(&body, b'+');

    Some(Todo {
        done,
        priority,
        body,
        contexts,
        tags,
        attributes,
    })
}

/// Parse every line of a todo file.
/// Returns the todos in file order and the non-empty lines that were dropped.
pub fn parse_todos(text: &str) -> (Vec<Todo>, Vec<String>) {
    let mut todos = Vec::new();
    let mut dropped = Vec::new();

    for line in text.split('\n').filter(|l| !l.is_empty()) {
        match parse_todo(line) {
            Some(todo) => todos.push(todo),
            None => dropped.push(line.to_string()),
        }
    }

    (todos, dropped)
}

/// `x` or `X` as the very first character, then any spaces
fn split_done_marker(line: &str) -> (bool, &str) {
    match line.strip_prefix(['x', 'X']) {
        Some(rest) => (true, rest.trim_start_matches(' ')),
        None => (false, line),
    }
}

/// Exactly `(P) ` with `P` in `A`..=`Z`
fn split_priority_marker(s: &str) -> (Option<Priority>, &str) {
    match s.as_bytes() {
        [b'(', letter, b')', b' ', ..] => match Priority::new(*letter as char) {
            Some(priority) => (Some(priority), &s[4..]),
            None => (None, s),
        },
        _ => (None, s),
    }
}

/// Remove `key:value` tokens from the body, collecting them as attributes.
///
/// Each token takes one whitespace character in front of it along, unless
/// the text after the token starts with `:` and would join the word before
/// it into a new token.
fn strip_attributes(raw: &str) -> (String, Vec<Attribute>) {
    let tokens = attribute_tokens(raw);
    if tokens.is_empty() {
        return (raw.to_string(), Vec::new());
    }

    let mut body = String::with_capacity(raw.len());
    let mut attributes = Vec::with_capacity(tokens.len());
    let mut cursor = 0;

    for (span, attribute) in tokens {
        let gap = &raw[cursor..span.start];
        let joins = raw[span.end..].starts_with(':');
        let gap = match gap.char_indices().next_back() {
            Some((i, c)) if c.is_whitespace() && !joins => &gap[..i],
            _ => gap,
        };
        body.push_str(gap);

        cursor = span.end;
        attributes.push(attribute);
    }
    body.push_str(&raw[cursor..]);

    (body, attributes)
}

/// Bring a body left without a priority into the shape its serialized line
/// reads back as. Removing attributes can uncover text at the front of the
/// body: after a done marker, leading spaces belong to the marker, and a
/// `(P) ` shape is a priority marker.
fn settle_body(done: bool, body: String) -> (Option<Priority>, String) {
    let body = if done {
        body.trim_start_matches(' ').to_string()
    } else {
        body
    };
    match split_priority_marker(&body) {
        (Some(priority), rest) => (Some(priority), rest.to_string()),
        (None, _) => (None, body),
    }
}
