pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loaders;
pub mod ranking;
pub mod recommend;
pub mod services;
pub mod similarity;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::config::settings::AppConfig;
use crate::services::output;
use crate::services::{RecommendRequest, RecommendationService};

pub use domain::{Consumer, Population};
pub use errors::RecommendError;
pub use ranking::{Neighbor, rank, rank_by};
pub use recommend::{Recommendation, recommend, recommender};
pub use similarity::{Direction, Metric};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_recommend(
    data_dir: Option<PathBuf>,
    request: RecommendRequest,
    json: bool,
) -> Result<()> {
    let service = RecommendationService::new(AppConfig::new(), data_dir);
    let population = service.load_population(request.limit)?;
    let recommendations = service.recommend(&population, &request)?;
    let views = output::describe(&recommendations, service.load_catalog().as_ref());

    if json {
        println!("{}", output::to_json(&views)?);
    } else {
        output::print_recommendations(&request.user, &views);
    }
    Ok(())
}

pub fn handle_neighbors(
    data_dir: Option<PathBuf>,
    user: &str,
    metric: Option<&str>,
    power: Option<f64>,
    count: usize,
    json: bool,
) -> Result<()> {
    let service = RecommendationService::new(AppConfig::new(), data_dir);
    let metric = service.resolve_metric(metric, power)?;
    let population = service.load_population(None)?;
    let neighbors = service.neighbors(&population, user, metric, count)?;

    if json {
        println!("{}", output::to_json(&neighbors)?);
    } else {
        output::print_neighbors(user, &neighbors);
    }
    Ok(())
}

pub fn handle_users(data_dir: Option<PathBuf>, min_ratings: usize, count: usize) -> Result<()> {
    let service = RecommendationService::new(AppConfig::new(), data_dir);
    let population = service.load_population(None)?;

    let mut consumers = population.with_min_ratings(min_ratings);
    info!(
        "{} consumers with at least {} ratings",
        consumers.len(),
        min_ratings
    );
    consumers.sort_by(|a, b| {
        b.rated_count()
            .cmp(&a.rated_count())
            .then_with(|| a.name().cmp(b.name()))
    });
    consumers.truncate(count);

    output::print_users(&consumers);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
