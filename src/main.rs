use clap::Parser;
use triage::cli::commands::{Cli, Commands};
use triage::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = triage::tui::run(data_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init(args)) => {
            // Init is handled before data-dir discovery
            if let Err(e) = handlers::cmd_init(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
