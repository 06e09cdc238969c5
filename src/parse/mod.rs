pub mod scan;
pub mod todo_parser;
pub mod todo_serializer;

pub use todo_parser::{parse_todo, parse_todos};
pub use todo_serializer::{serialize_todo, serialize_todos};

#[cfg(test)]
mod tests {
    use super::*;

    /// parse → serialize → parse must give back the same todo
    fn assert_round_trip(line: &str) {
        let todo = parse_todo(line).unwrap_or_else(|| panic!("not a todo: {:?}", line));
        let reparsed = parse_todo(&serialize_todo(&todo))
            .unwrap_or_else(|| panic!("serialized form of {:?} is not a todo", line));
        assert_eq!(reparsed, todo, "round trip changed {:?}", line);
    }

    #[test]
    fn test_round_trip_lines() {
        for line in [
            "plain",
            "x done",
            "(A) buy milk figma:123 @home +errand",
            "x (Z) archived +old",
            "figma:1 leading attribute",
            "a:1 b:2   rest",
            "(B) figma:9",
            "x a:1",
            "(A)  two spaces after priority",
            "x (A) ",
            "(A) ",
            "x",
            "meet @home:office",
            "mid a:1 attribute  with  gaps",
            "tail gap  a:1",
            "(a) lowercase is text",
            "xylophone",
            "   x indented",
            "\tx tab first",
            "C++ and me@example.com at 10:30",
            "figma:1 xylophone",
            "a:1 x",
            "figma:1 (A) later",
            "a b:1:c",
            "x a:1 (B) go",
            "x a:1  go",
            "a:1(C) soon",
            "x a:1\tgo",
        ] {
            assert_round_trip(line);
        }
    }

    #[test]
    fn test_canonical_line_is_fixed_point() {
        let line = "x (C) file taxes +home @desk due:soon";
        let once = serialize_todo(&parse_todo(line).unwrap());
        let twice = serialize_todo(&parse_todo(&once).unwrap());
        assert_eq!(once, line);
        assert_eq!(twice, once);
    }
}
