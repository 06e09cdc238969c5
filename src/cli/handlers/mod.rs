use std::io::ErrorKind;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::todo_io::{TodoFiles, TodoIoError};
use crate::model::config::MatchPolicy;
use crate::ops::store::{StoreError, TodoStore};
use crate::ops::todo_ops::{self, Edit};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Where the todos live and how edits find them, resolved from the
/// command line, the environment and the config file.
struct Settings {
    files: TodoFiles,
    policy: MatchPolicy,
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> CmdResult {
    let json = cli.json;
    let settings = resolve_settings(&cli)?;

    match cli.command {
        None => cmd_list(&settings, ListArgs { query: None }, json),
        Some(cmd) => match cmd {
            Commands::Init => cmd_init(&settings),

            // Read commands
            Commands::List(args) => cmd_list(&settings, args, json),

            // Write commands
            Commands::Add(args) => cmd_add(&settings, args, json),
            Commands::Done(args) => {
                cmd_edit(&settings, &args.target, Ok(Edit::SetDone(true)), json)
            }
            Commands::Reopen(args) => {
                cmd_edit(&settings, &args.target, Ok(Edit::SetDone(false)), json)
            }
            Commands::Pri(args) => {
                cmd_edit(&settings, &args.target, Edit::set_priority(&args.priority), json)
            }
            Commands::Edit(args) => {
                cmd_edit(&settings, &args.target, Edit::replace_body(&args.body), json)
            }
            Commands::Attr(args) => cmd_edit(
                &settings,
                &args.target,
                Edit::set_attribute(&args.key, &args.value),
                json,
            ),

            // Maintenance
            Commands::Archive => cmd_archive(&settings, json),
            Commands::Tidy => cmd_tidy(&settings),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_settings(cli: &Cli) -> Result<Settings, config_io::ConfigError> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let files =
        config_io::resolve_files(&config, cli.todo_file.clone(), cli.done_file.clone())?;
    Ok(Settings {
        files,
        policy: config.matching.policy,
    })
}

fn open_store(settings: &Settings) -> Result<TodoStore, Box<dyn std::error::Error>> {
    match TodoStore::open(settings.files.clone(), settings.policy) {
        Ok(store) => Ok(store),
        Err(StoreError::Io(TodoIoError::ReadError { path, source }))
            if source.kind() == ErrorKind::NotFound =>
        {
            Err(format!(
                "{} does not exist (run `taskman init` to create it)",
                path.display()
            )
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_init(settings: &Settings) -> CmdResult {
    let created = settings.files.init()?;
    if created.is_empty() {
        println!(
            "already initialized: {} and {}",
            settings.files.todo_path.display(),
            settings.files.done_path.display()
        );
    }
    for path in created {
        println!("created {}", path.display());
    }
    Ok(())
}

fn cmd_list(settings: &Settings, args: ListArgs, json: bool) -> CmdResult {
    let store = open_store(settings)?;
    let todos = store.filtered(args.query.as_deref());

    if json {
        let out: Vec<TodoJson> = todos.iter().map(|t| todo_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_listing(todos));
    }
    Ok(())
}

fn cmd_add(settings: &Settings, args: AddArgs, json: bool) -> CmdResult {
    let todo = todo_ops::parse_new_todo(&args.text)?;
    let mut store = open_store(settings)?;
    store.add(todo.clone())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&todo_to_json(&todo))?);
    } else {
        print_lines(&format_listing([&todo]));
    }
    Ok(())
}

/// Shared path of every single-todo edit. Input is checked before the todo
/// file is read.
fn cmd_edit(
    settings: &Settings,
    target: &str,
    edit: Result<Edit, todo_ops::TodoError>,
    json: bool,
) -> CmdResult {
    let edit = edit?;
    let key = todo_ops::key_from_line(target)?;

    let mut store = open_store(settings)?;
    let (todo, matched) = store.update(&key, &edit)?;

    if json {
        let out = UpdateJson {
            matched,
            todo: todo_to_json(&todo),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_update(&todo, matched));
    }
    Ok(())
}

fn cmd_archive(settings: &Settings, json: bool) -> CmdResult {
    let mut store = open_store(settings)?;
    let archived = store.archive_done()?;

    if json {
        let out = ArchiveJson {
            archived: archived.iter().map(todo_to_json).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_lines(&format_archive(&archived));
    }
    Ok(())
}

fn cmd_tidy(settings: &Settings) -> CmdResult {
    let store = open_store(settings)?;
    store.save()?;
    println!(
        "rewrote {} ({} todos)",
        store.files().todo_path.display(),
        store.todos().len()
    );
    Ok(())
}
