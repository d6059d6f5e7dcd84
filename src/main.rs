use anyhow::Result;

use collaborative_filtering::cli::{Cli, Command};
use collaborative_filtering::services::RecommendRequest;
use collaborative_filtering::{
    handle_completions, handle_neighbors, handle_recommend, handle_users, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let data_dir = cli.data_dir;
    match cli.command {
        Command::Recommend {
            user,
            metric,
            power,
            strategy,
            neighbors,
            limit,
            json,
        } => {
            let request = RecommendRequest {
                user,
                metric,
                power,
                strategy: Some(strategy),
                neighbors,
                limit,
            };
            handle_recommend(data_dir, request, json)
        }
        Command::Neighbors {
            user,
            metric,
            power,
            count,
            json,
        } => handle_neighbors(data_dir, &user, metric.as_deref(), power, count, json),
        Command::Users { min_ratings, count } => handle_users(data_dir, min_ratings, count),
        Command::Completions { shell } => handle_completions(shell),
    }
}
