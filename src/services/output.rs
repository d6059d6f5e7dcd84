use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::domain::Consumer;
use crate::loaders::Catalog;
use crate::ranking::NeighborSummary;
use crate::recommend::Recommendation;

/// A recommendation joined with catalog data, when there is any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    pub item: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

pub fn describe(
    recommendations: &[Recommendation],
    catalog: Option<&Catalog>,
) -> Vec<RecommendationView> {
    recommendations
        .iter()
        .map(|r| {
            let book = catalog.and_then(|c| c.get(&r.item));
            RecommendationView {
                item: r.item.clone(),
                score: r.score,
                title: book.map(|b| b.title.clone()),
                author: book.map(|b| b.author.clone()),
            }
        })
        .collect()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn print_recommendations(user: &str, views: &[RecommendationView]) {
    println!("{} {}", "Recommendations for".bold(), user.green().bold());
    if views.is_empty() {
        println!("  {}", "(nothing to recommend)".dimmed());
        return;
    }

    for (idx, view) in views.iter().enumerate() {
        println!(
            "  {:>3}. {:<60} {}",
            idx + 1,
            label(view),
            format!("{:.3}", view.score).cyan()
        );
    }
}

fn label(view: &RecommendationView) -> String {
    match (&view.title, &view.author) {
        (Some(title), Some(author)) => format!("{} by {} [{}]", title, author, view.item),
        (Some(title), None) => format!("{} [{}]", title, view.item),
        _ => view.item.clone(),
    }
}

pub fn print_neighbors(user: &str, neighbors: &[NeighborSummary]) {
    println!("{} {}", "Nearest neighbors of".bold(), user.green().bold());
    for (idx, n) in neighbors.iter().enumerate() {
        println!(
            "  {:>3}. {:<20} {} ({} ratings)",
            idx + 1,
            n.name,
            format!("{:.4}", n.score).cyan(),
            n.rated_count
        );
    }
}

pub fn print_users(consumers: &[&Consumer]) {
    println!(
        "{:<20} {:>8} {:>8}",
        "User-ID".bold(),
        "Ratings".bold(),
        "Mean".bold()
    );
    for consumer in consumers {
        println!(
            "{:<20} {:>8} {:>8.2}",
            consumer.name(),
            consumer.rated_count(),
            consumer.average_rating()
        );
    }
}
