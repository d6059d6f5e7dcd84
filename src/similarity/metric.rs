use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{cosine, minkowski, pearson};
use crate::domain::RatingMap;
use crate::errors::RecommendError;

/// Score reported when two consumers have nothing comparable.
pub const NO_SIMILARITY: f64 = 0.0;

/// Power used when a Minkowski metric is selected by name alone.
pub const DEFAULT_MINKOWSKI_POWER: f64 = 1.0;

/// Which end of a metric's range means "closer".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Smaller scores are better (distances).
    Ascending,
    /// Larger scores are better (similarities).
    Descending,
}

impl Direction {
    /// Orders two scores so that the better one comes first.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Direction::Ascending => a.total_cmp(&b),
            Direction::Descending => b.total_cmp(&a),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric {
    Minkowski { power: f64 },
    #[default]
    Pearson,
    Cosine,
}

impl Metric {
    pub fn manhattan() -> Self {
        Metric::Minkowski { power: 1.0 }
    }

    pub fn euclidean() -> Self {
        Metric::Minkowski { power: 2.0 }
    }

    /// Minkowski distance of the given power, which must be finite and above 0.
    pub fn minkowski(power: f64) -> Result<Self, RecommendError> {
        if !is_valid_power(power) {
            return Err(RecommendError::InvalidMinkowskiPower(power));
        }
        Ok(Metric::Minkowski { power })
    }

    /// Parses a metric name, giving Minkowski the supplied power.
    pub fn from_name(name: &str, minkowski_power: f64) -> Result<Self, RecommendError> {
        match name.trim().to_ascii_uppercase().as_str() {
            "MINKOWSKI" => Metric::minkowski(minkowski_power),
            "PEARSON" => Ok(Metric::Pearson),
            "COSINE" => Ok(Metric::Cosine),
            _ => Err(RecommendError::UnknownMetric(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Minkowski { .. } => "MINKOWSKI",
            Metric::Pearson => "PEARSON",
            Metric::Cosine => "COSINE",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Metric::Minkowski { .. } => Direction::Ascending,
            Metric::Pearson | Metric::Cosine => Direction::Descending,
        }
    }

    /// Raw comparison; `None` when the two rating maps have no comparable data.
    pub fn compare(&self, a: &RatingMap, b: &RatingMap) -> Option<f64> {
        match *self {
            Metric::Minkowski { power } => minkowski(a, b, power),
            Metric::Pearson => pearson(a, b),
            Metric::Cosine => cosine(a, b),
        }
    }

    /// Comparison with the no-data case collapsed to [`NO_SIMILARITY`].
    ///
    /// For Minkowski this makes consumers without overlap look maximally close.
    pub fn score(&self, a: &RatingMap, b: &RatingMap) -> f64 {
        self.compare(a, b).unwrap_or(NO_SIMILARITY)
    }
}

pub(crate) fn is_valid_power(power: f64) -> bool {
    power.is_finite() && power > 0.0
}

impl FromStr for Metric {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::from_name(s, DEFAULT_MINKOWSKI_POWER)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Minkowski { power } => write!(f, "MINKOWSKI(r={})", power),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(pairs: &[(&str, f64)]) -> RatingMap {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("MINKOWSKI".parse::<Metric>(), Ok(Metric::manhattan()));
        assert_eq!("PEARSON".parse::<Metric>(), Ok(Metric::Pearson));
        assert_eq!("cosine".parse::<Metric>(), Ok(Metric::Cosine));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "JACCARD".parse::<Metric>(),
            Err(RecommendError::UnknownMetric("JACCARD".to_string()))
        );
        assert!("".parse::<Metric>().is_err());
    }

    #[test]
    fn test_from_name_sets_power() {
        assert_eq!(Metric::from_name("minkowski", 2.0), Ok(Metric::euclidean()));
    }

    #[test]
    fn test_invalid_minkowski_power() {
        for power in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(
                Metric::from_name("MINKOWSKI", power),
                Err(RecommendError::InvalidMinkowskiPower(power))
            );
        }
        assert!(matches!(
            Metric::minkowski(f64::NAN),
            Err(RecommendError::InvalidMinkowskiPower(p)) if p.is_nan()
        ));
        assert_eq!(Metric::minkowski(3.0), Ok(Metric::Minkowski { power: 3.0 }));
    }

    #[test]
    fn test_directions() {
        assert_eq!(Metric::manhattan().direction(), Direction::Ascending);
        assert_eq!(Metric::Pearson.direction(), Direction::Descending);
        assert_eq!(Metric::Cosine.direction(), Direction::Descending);
    }

    #[test]
    fn test_direction_compare() {
        assert_eq!(Direction::Ascending.compare(1.0, 2.0), Ordering::Less);
        assert_eq!(Direction::Descending.compare(1.0, 2.0), Ordering::Greater);
        assert_eq!(Direction::Descending.compare(0.5, 0.5), Ordering::Equal);
    }

    #[test]
    fn test_score_collapses_missing_data_to_zero() {
        let a = ratings(&[("x", 1.0)]);
        let b = ratings(&[("y", 1.0)]);

        for metric in [Metric::manhattan(), Metric::Pearson, Metric::Cosine] {
            assert_eq!(metric.compare(&a, &b), None);
            assert_eq!(metric.score(&a, &b), NO_SIMILARITY);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Metric::Pearson.to_string(), "PEARSON");
        assert_eq!(Metric::euclidean().to_string(), "MINKOWSKI(r=2)");
    }
}
