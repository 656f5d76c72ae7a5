use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tri", about = concat!("[*] triage v", env!("CARGO_PKG_VERSION"), " - one list, three tiers"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a task list in the current directory
    Init(InitArgs),
    /// Add a task
    Add(AddArgs),
    /// List tasks, optionally filtered by priority
    List(ListArgs),
    /// Delete a task
    Delete(DeleteArgs),
    /// Complete (remove) one or more tasks as a single change
    Done(DoneArgs),
    /// Show per-priority task counts
    Counts,
}

#[derive(Args)]
pub struct InitArgs {
    /// Reinitialize (empty the list) even if .triage/ already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Priority tier (urgent, medium, low)
    #[arg(short, long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only this priority tier (urgent, medium, low)
    #[arg(long)]
    pub priority: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct DoneArgs {
    /// Task ids to complete together
    #[arg(required = true)]
    pub ids: Vec<u64>,
}
