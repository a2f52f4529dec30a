//! Command-line host for the to-do store.
//!
//! Acts as the UI layer: each subcommand goes through the dispatcher's
//! callbacks, the submitted actions are queued, and the queue is drained into
//! the file-backed store.

use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use todostate::observability::init_tracing;
use todostate::storage::FileStorage;
use todostate::{initialize, Action, ActionDispatcher, Config, Entry, Result, TodoError, TodoStore};

/// Config file looked up when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Parser)]
#[command(name = "todostate", version, about = "Persistent to-do list")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overrides the configured data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Adds an entry.
    Add {
        /// Entry text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Lists all entries.
    List {
        /// Prints the raw JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Marks an entry as done.
    Done { id: String },
    /// Marks an entry as not done.
    Undo { id: String },
    /// Replaces an entry's text.
    Edit {
        id: String,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Deletes entries matching an id.
    Rm { id: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("todostate: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_ref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    init_tracing(&config);

    let mut store = initialize(&config)?;

    let queue: Rc<RefCell<Vec<Action>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&queue);
    let dispatcher = ActionDispatcher::with_boxed_ids(
        move |action| sink.borrow_mut().push(action),
        config.id_generator(store.entries()),
    );
    let callbacks = dispatcher.submit_map();

    match &cli.command {
        Command::List { json } => {
            print_entries(store.entries(), *json)?;
            return Ok(());
        }
        Command::Add { text } => (callbacks.create_todo)(&text.join(" ")),
        Command::Done { id } => {
            let entry = existing(&store, id)?;
            (callbacks.update_todo)(id, true, &entry.text);
        }
        Command::Undo { id } => {
            let entry = existing(&store, id)?;
            (callbacks.update_todo)(id, false, &entry.text);
        }
        Command::Edit { id, text } => {
            let entry = existing(&store, id)?;
            (callbacks.update_todo)(id, entry.done, &text.join(" "));
        }
        Command::Rm { id } => (callbacks.delete_todo)(id),
    }

    let pending: Vec<Action> = queue.borrow_mut().drain(..).collect();
    for action in &pending {
        store.dispatch(action)?;
    }

    print_entries(store.entries(), false)
}

fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path);
    }

    let default_path = dirs::config_dir().map(|dir| dir.join("todostate").join(DEFAULT_CONFIG_FILE));
    match default_path {
        Some(path) if path.exists() => Config::from_file(path),
        _ => Ok(Config::default()),
    }
}

fn existing(store: &TodoStore<FileStorage>, id: &str) -> Result<Entry> {
    store
        .get(id)
        .cloned()
        .ok_or_else(|| TodoError::Action(format!("no entry with id {id}")))
}

fn print_entries(entries: &[Entry], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("nothing to do");
        return Ok(());
    }

    for entry in entries {
        let mark = if entry.done { 'x' } else { ' ' };
        println!("[{mark}] {}  {}", entry.id, entry.text);
    }
    Ok(())
}
