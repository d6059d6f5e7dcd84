use std::num::NonZeroUsize;

use super::types::{DEFAULT_RECOMMENDATION_LIMIT, ItemId, RatingMap, RatingValue};

/// A consumer and the sparse set of ratings they have given.
///
/// Ratings are only ever added or overwritten through [`Consumer::set_rating`];
/// a later rating for the same item replaces the earlier one.
#[derive(Debug, Clone, PartialEq)]
pub struct Consumer {
    name: String,
    ratings: RatingMap,
    recommendation_limit: NonZeroUsize,
}

impl Consumer {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_recommendation_limit(name, DEFAULT_RECOMMENDATION_LIMIT)
    }

    pub fn with_recommendation_limit(name: impl Into<String>, limit: NonZeroUsize) -> Self {
        Self {
            name: name.into(),
            ratings: RatingMap::new(),
            recommendation_limit: limit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recommendation_limit(&self) -> usize {
        self.recommendation_limit.get()
    }

    pub fn set_rating(&mut self, item: impl Into<ItemId>, value: RatingValue) {
        self.ratings.insert(item.into(), value);
    }

    pub fn ratings(&self) -> &RatingMap {
        &self.ratings
    }

    pub fn rating(&self, item: &str) -> Option<RatingValue> {
        self.ratings.get(item).copied()
    }

    pub fn has_rated(&self, item: &str) -> bool {
        self.ratings.contains_key(item)
    }

    pub fn rated_count(&self) -> usize {
        self.ratings.len()
    }

    /// Mean of all ratings, or `None` when nothing has been rated yet.
    pub fn mean_rating(&self) -> Option<RatingValue> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: RatingValue = self.ratings.values().sum();
        Some(total / self.ratings.len() as RatingValue)
    }

    /// Mean of all ratings. An empty store reports `0.0`, which is also a
    /// legitimate mean; use [`Consumer::mean_rating`] to tell the two apart.
    pub fn average_rating(&self) -> RatingValue {
        self.mean_rating().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_consumer_is_empty() {
        let consumer = Consumer::new("276725");

        assert_eq!(consumer.name(), "276725");
        assert!(consumer.ratings().is_empty());
        assert_eq!(consumer.recommendation_limit(), 5);
    }

    #[test]
    fn test_custom_recommendation_limit() {
        let limit = NonZeroUsize::new(12).unwrap();
        let consumer = Consumer::with_recommendation_limit("reader", limit);

        assert_eq!(consumer.recommendation_limit(), 12);
    }

    #[test]
    fn test_set_rating_overwrites_previous_value() {
        let mut consumer = Consumer::new("reader");
        consumer.set_rating("034545104X", 3.0);
        consumer.set_rating("034545104X", 8.0);

        assert_eq!(consumer.rated_count(), 1);
        assert_eq!(consumer.rating("034545104X"), Some(8.0));
    }

    #[test]
    fn test_set_rating_accepts_any_value() {
        let mut consumer = Consumer::new("reader");
        consumer.set_rating("a", -2.5);
        consumer.set_rating("b", 0.0);
        consumer.set_rating("c", 1e9);

        assert_eq!(consumer.rated_count(), 3);
        assert!(consumer.has_rated("a"));
        assert!(!consumer.has_rated("d"));
    }

    #[test]
    fn test_average_rating() {
        let mut consumer = Consumer::new("reader");
        consumer.set_rating("a", 4.0);
        consumer.set_rating("b", 1.0);
        consumer.set_rating("c", 7.0);

        assert!((consumer.average_rating() - 4.0).abs() < 1e-12);
        assert_eq!(consumer.mean_rating(), Some(4.0));
    }

    #[test]
    fn test_average_rating_of_empty_store_is_zero() {
        let consumer = Consumer::new("reader");

        assert_eq!(consumer.average_rating(), 0.0);
        assert_eq!(consumer.mean_rating(), None);
    }

    #[test]
    fn test_zero_mean_is_distinguishable_from_empty() {
        let mut consumer = Consumer::new("reader");
        consumer.set_rating("a", 2.0);
        consumer.set_rating("b", -2.0);

        assert_eq!(consumer.average_rating(), 0.0);
        assert_eq!(consumer.mean_rating(), Some(0.0));
    }
}
