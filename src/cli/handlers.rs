use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store_io::{self, StoreError};
use crate::model::task::{Priority, Task};
use crate::ops::filter::Filter;
use crate::ops::session::Session;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let data_dir = cli.data_dir;

    match cli.command {
        // Init is handled in main.rs before data-dir discovery
        None | Some(Commands::Init(_)) => Ok(()),
        Some(Commands::Add(args)) => cmd_add(args, data_dir.as_deref(), json),
        Some(Commands::List(args)) => cmd_list(args, data_dir.as_deref(), json),
        Some(Commands::Delete(args)) => cmd_delete(args, data_dir.as_deref(), json),
        Some(Commands::Done(args)) => cmd_done(args, data_dir.as_deref(), json),
        Some(Commands::Counts) => cmd_counts(data_dir.as_deref(), json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the data directory: the -C override, or discovery up from cwd.
pub fn resolve_data_dir(override_dir: Option<&str>) -> Result<PathBuf, StoreError> {
    match override_dir {
        Some(dir) => {
            let path = PathBuf::from(dir).join(store_io::DATA_DIR);
            if path.is_dir() {
                Ok(path)
            } else {
                Err(StoreError::NotFound)
            }
        }
        None => {
            let cwd = std::env::current_dir()?;
            store_io::discover_data_dir(&cwd)
        }
    }
}

fn open_session(override_dir: Option<&str>) -> Result<Session, StoreError> {
    let data_dir = resolve_data_dir(override_dir)?;
    Session::open(&data_dir)
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    Priority::parse(s).ok_or_else(|| format!("unknown priority '{}' (urgent, medium, low)", s))
}

fn print_task_line(task: &Task) {
    println!("{:>14}  [{}] {}", task.id, task.priority.label(), task.text);
}

fn warn_if_save_failed(session: &Session) {
    if let Some(warning) = session.save_warning() {
        eprintln!("warning: changes were not saved: {}", warning);
    }
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

pub fn cmd_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let existed = cwd.join(store_io::DATA_DIR).is_dir();
    let data_dir = store_io::init_data_dir(&cwd, args.force)?;
    if existed && !args.force {
        println!("already initialized: {}", data_dir.display());
    } else {
        println!("initialized empty task list in {}", data_dir.display());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_add(
    args: AddArgs,
    data_dir: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let priority = parse_priority(&args.priority)?;
    let mut session = open_session(data_dir)?;

    match session.add(&args.text, priority) {
        Some(task) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&TaskJson::from(&task))?);
            } else {
                print_task_line(&task);
            }
        }
        None => {
            // Empty after trimming: silently rejected, not an error
            if json {
                println!("null");
            }
        }
    }
    warn_if_save_failed(&session);
    Ok(())
}

fn cmd_list(
    args: ListArgs,
    data_dir: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match args.priority.as_deref() {
        Some(s) => Filter::Only(parse_priority(s)?),
        None => Filter::All,
    };
    let mut session = open_session(data_dir)?;
    session.set_filter(filter);
    let visible = session.visible();

    if json {
        let out = TaskListJson {
            filter: filter.label().to_string(),
            tasks: visible.iter().map(|t| TaskJson::from(*t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if visible.is_empty() {
        println!("no tasks to show");
    } else {
        for task in visible {
            print_task_line(task);
        }
    }
    Ok(())
}

fn cmd_delete(
    args: DeleteArgs,
    data_dir: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(data_dir)?;
    let removed = session.delete(args.id);

    if json {
        println!("{{\"deleted\": {}}}", removed);
    } else if removed {
        println!("deleted {}", args.id);
    } else {
        // Unknown id is a no-op, not an error
        println!("no task with id {}", args.id);
    }
    warn_if_save_failed(&session);
    Ok(())
}

fn cmd_done(
    args: DoneArgs,
    data_dir: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(data_dir)?;
    for id in &args.ids {
        session.toggle(*id);
    }
    let completed = session.complete_selection();

    if json {
        let out = DoneJson {
            completed,
            remaining: session.tasks().len(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("completed {} task(s), {} left", completed, session.tasks().len());
    }
    warn_if_save_failed(&session);
    Ok(())
}

fn cmd_counts(data_dir: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(data_dir)?;
    let counts = session.counts();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&CountsJson::from(counts))?
        );
    } else {
        println!(
            "total {}  urgent {}  medium {}  low {}",
            counts.total, counts.urgent, counts.medium, counts.low
        );
    }
    Ok(())
}
