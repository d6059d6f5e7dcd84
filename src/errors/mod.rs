use anyhow::Context as _;
use thiserror::Error;

/// Errors reported by the ranking and recommendation entry points.
///
/// Numeric degeneracy (no overlap, zero variance, zero total weight) is
/// not an error; it resolves to a `0` score or equal weights instead.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecommendError {
    #[error("unknown metric '{0}', expected one of MINKOWSKI, PEARSON, COSINE")]
    UnknownMetric(String),
    #[error("requested {requested} neighbors but only {available} other consumers exist")]
    InsufficientPopulation { requested: usize, available: usize },
    #[error("neighbor count must be at least 1, got {0}")]
    InvalidNeighborCount(usize),
    #[error("Minkowski power must be a finite number above 0, got {0}")]
    InvalidMinkowskiPower(f64),
}

/// Add context to parse errors
pub fn parse_context(data_type: &str, line: usize) -> String {
    format!("Failed to parse {} on line {}", data_type, line)
}

/// Add context to file loading errors
pub fn load_context(path: &std::path::Path) -> String {
    format!("Failed to load data from: {}", path.display())
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(
    result: Result<T, E>,
    data_type: &str,
    line: usize,
) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RecommendError::InsufficientPopulation {
            requested: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "requested 4 neighbors but only 2 other consumers exist"
        );
        let unknown = RecommendError::UnknownMetric("JACCARD".into());
        assert!(unknown.to_string().contains("JACCARD"));
    }

    #[test]
    fn test_with_parse_context() {
        let result: anyhow::Result<f64> =
            with_parse_context("x".parse::<f64>(), "rating", 7);

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("Failed to parse rating on line 7"));
    }
}
