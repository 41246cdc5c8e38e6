mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::io;

use clap::Parser;
use env_logger::Env;

use crate::cmd::Invocation;

#[derive(Parser)]
#[command(
    name = "trello-weekly",
    author,
    version,
    about = "Weekly reports and card chores for a Trello board"
)]
struct Cli {
    /// Method to run: monday, show_board, show_list, create_card, delete_card,
    /// move_card, update_card, board_info, show_lists, config_init, config_show.
    method: String,
    /// First method argument (card name or list name).
    #[arg(long)]
    arg1: Option<String>,
    /// Second method argument (list name or new card name).
    #[arg(long)]
    arg2: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let invocation = Invocation {
        method: cli.method,
        arg1: cli.arg1,
        arg2: cli.arg2,
    };

    let mut stdout = io::stdout();
    if let Err(error) = cmd::run(invocation, &mut stdout).await {
        println!("Error: {error}");
    }
}
