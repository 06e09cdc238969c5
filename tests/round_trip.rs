use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use taskman::io::todo_io::TodoFiles;
use taskman::model::config::MatchPolicy;
use taskman::ops::store::TodoStore;
use taskman::parse::{parse_todo, parse_todos, serialize_todo, serialize_todos};

fn read_fixture(fixture_name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Could not read fixture {}: {}", fixture_name, e))
}

/// Helper: parse every line of a fixture, serialize each todo and assert the
/// reparsed todo equals the first parse
fn assert_lines_round_trip(fixture_name: &str) {
    let source = read_fixture(fixture_name);
    for line in source.lines().filter(|l| !l.trim().is_empty()) {
        let todo = parse_todo(line).unwrap_or_else(|| panic!("{:?} did not parse", line));
        let again = parse_todo(&serialize_todo(&todo))
            .unwrap_or_else(|| panic!("serialized {:?} did not parse", line));
        assert_eq!(again, todo, "Round-trip failed for line {:?} in {}", line, fixture_name);
    }
}

fn store_for(dir: &Path, todo_text: &str) -> TodoFiles {
    let files = TodoFiles::new(dir.join("todo.txt"), dir.join("done.txt"));
    fs::write(&files.todo_path, todo_text).unwrap();
    fs::write(&files.done_path, "").unwrap();
    files
}

// ============================================================================
// Line round-trip tests
// ============================================================================

#[test]
fn round_trip_canonical_lines() {
    assert_lines_round_trip("canonical.txt");
}

#[test]
fn round_trip_mixed_lines() {
    assert_lines_round_trip("mixed.txt");
}

#[test]
fn round_trip_unusual_lines() {
    assert_lines_round_trip("unusual.txt");
}

// ============================================================================
// Whole-file tests
// ============================================================================

#[test]
fn canonical_file_is_reproduced_exactly() {
    let source = read_fixture("canonical.txt");
    let (todos, dropped) = parse_todos(&source);
    assert!(dropped.is_empty());
    assert_eq!(serialize_todos(&todos), source);
}

#[test]
fn serialized_file_is_a_fixed_point() {
    for fixture in ["canonical.txt", "mixed.txt", "unusual.txt"] {
        let (todos, _) = parse_todos(&read_fixture(fixture));
        let once = serialize_todos(&todos);
        let (reparsed, _) = parse_todos(&once);
        assert_eq!(serialize_todos(&reparsed), once, "{} is not stable", fixture);
    }
}

#[test]
fn load_and_save_sorts_into_canonical_form() {
    let tmp = tempfile::TempDir::new().unwrap();
    let files = store_for(tmp.path(), &read_fixture("mixed.txt"));

    let store = TodoStore::open(files.clone(), MatchPolicy::All).unwrap();
    store.save().unwrap();

    assert_eq!(
        fs::read_to_string(&files.todo_path).unwrap(),
        read_fixture("canonical.txt")
    );
}

#[test]
fn save_is_idempotent() {
    let tmp = tempfile::TempDir::new().unwrap();
    let files = store_for(tmp.path(), &read_fixture("unusual.txt"));

    TodoStore::open(files.clone(), MatchPolicy::All).unwrap().save().unwrap();
    let first = fs::read_to_string(&files.todo_path).unwrap();

    TodoStore::open(files.clone(), MatchPolicy::All).unwrap().save().unwrap();
    let second = fs::read_to_string(&files.todo_path).unwrap();

    assert_eq!(second, first);
}

#[test]
fn sort_keeps_file_order_within_a_priority() {
    let tmp = tempfile::TempDir::new().unwrap();
    let files = store_for(
        tmp.path(),
        "first plain\n(C) c one\n(A) a one\nsecond plain\n(C) c two\n(Z) explicit z\n(A) a two\n",
    );

    let store = TodoStore::open(files, MatchPolicy::All).unwrap();
    let lines: Vec<String> = store.todos().iter().map(serialize_todo).collect();
    assert_eq!(
        lines,
        vec![
            "(A) a one",
            "(A) a two",
            "(C) c one",
            "(C) c two",
            "first plain",
            "second plain",
            "(Z) explicit z",
        ]
    );
}
