use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Result, bail};
use log::{debug, info};

use super::records::read_records;
use crate::config::settings::LoaderSettings;
use crate::domain::Population;
use crate::errors::{parse_context, with_parse_context};

/// Loads `"User-ID";"ISBN";"Book-Rating"` records into a population.
///
/// A first line whose rating column is not numeric is taken as the header.
pub fn load_ratings(
    path: &Path,
    settings: &LoaderSettings,
    recommendation_limit: NonZeroUsize,
) -> Result<Population> {
    let records = read_records(path, settings.delimiter)?;
    let mut population = Population::with_recommendation_limit(recommendation_limit);
    let mut loaded = 0;

    for (line, fields) in records {
        if fields.len() < 3 {
            bail!(
                "Expected 3 fields on line {} of {}, found {}",
                line,
                path.display(),
                fields.len()
            );
        }

        let rating = fields[2].parse::<f64>();
        if line == 1 && rating.is_err() {
            debug!("Skipping header: {:?}", fields);
            continue;
        }

        let rating = with_parse_context(rating, "rating", line)?;
        if !rating.is_finite() {
            bail!(
                "{}: '{}' is not a finite number",
                parse_context("rating", line),
                fields[2]
            );
        }
        population.rate(&fields[0], fields[1].as_str(), rating);
        loaded += 1;
    }

    info!(
        "Loaded {} ratings for {} consumers from {}",
        loaded,
        population.len(),
        path.display()
    );
    Ok(population)
}
