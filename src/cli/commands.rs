use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "taskman",
    about = concat!("taskman v", env!("CARGO_PKG_VERSION"), " - a todo.txt task list"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: <config dir>/taskman/config.toml)
    #[arg(long, global = true, env = "TASKMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Todo file (default: ~/todo/todo.txt)
    #[arg(long, global = true, env = "TASKMAN_TODO_FILE")]
    pub todo_file: Option<PathBuf>,

    /// Archive file for finished todos (default: ~/todo/done.txt)
    #[arg(long, global = true, env = "TASKMAN_DONE_FILE")]
    pub done_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the todo and done files if they are missing
    Init,
    /// List todos, optionally filtered
    List(ListArgs),
    /// Add a todo
    Add(AddArgs),
    /// Mark a todo done
    Done(TargetArgs),
    /// Mark a todo not done
    Reopen(TargetArgs),
    /// Set or clear a todo's priority
    Pri(PriArgs),
    /// Replace a todo's text
    Edit(EditArgs),
    /// Add or replace a key:value attribute on a todo
    Attr(AttrArgs),
    /// Move done todos to the done file
    Archive,
    /// Rewrite the todo file sorted and in canonical form
    Tidy,
}

#[derive(Args)]
pub struct ListArgs {
    /// One letter selects a priority; anything longer searches todo text
    pub query: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo line, e.g. "(A) call mom @phone +family"
    pub text: String,
}

/// The todo to change, written the way `list` prints it
#[derive(Args)]
pub struct TargetArgs {
    pub target: String,
}

#[derive(Args)]
pub struct PriArgs {
    pub target: String,
    /// One letter A-Z, or - to clear
    #[arg(allow_hyphen_values = true)]
    pub priority: String,
}

#[derive(Args)]
pub struct EditArgs {
    pub target: String,
    /// New todo text
    pub body: String,
}

#[derive(Args)]
pub struct AttrArgs {
    pub target: String,
    pub key: String,
    pub value: String,
}
