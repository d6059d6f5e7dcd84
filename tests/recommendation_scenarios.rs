//! End-to-end scenarios over small in-memory populations.

use std::num::NonZeroUsize;

use collaborative_filtering::{
    Consumer, Metric, Population, RecommendError, rank, recommend, recommender,
};

fn consumer(name: &str, pairs: &[(&str, f64)]) -> Consumer {
    let mut consumer = Consumer::new(name);
    for &(item, value) in pairs {
        consumer.set_rating(item, value);
    }
    consumer
}

fn abc_population() -> Population {
    [
        consumer("A", &[("x", 4.0), ("y", 1.0)]),
        consumer("B", &[("x", 3.0), ("y", 5.0), ("z", 4.0)]),
        consumer("C", &[("x", 4.5), ("y", 4.0), ("z", 5.0)]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_distance_over_single_shared_item() {
    let a = consumer("A", &[("x", 4.0)]);
    let b = consumer("B", &[("x", 3.0), ("y", 5.0), ("z", 4.0)]);
    let c = consumer("C", &[("x", 4.5), ("y", 4.0), ("z", 5.0)]);

    let neighbors = rank(&a, [&b, &c], Metric::manhattan());

    assert_eq!(neighbors[0].name(), "C");
    assert_eq!(neighbors[0].score, 0.5);
    assert_eq!(neighbors[1].name(), "B");
    assert_eq!(neighbors[1].score, 1.0);
}

#[test]
fn test_minkowski_single_neighbor_scenario() {
    let population = abc_population();
    let a = population.get("A").unwrap();

    let neighbors = rank(a, population.iter(), Metric::manhattan());
    assert_eq!(neighbors[0].name(), "C");

    let result = recommend(a, population.iter(), Metric::manhattan()).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].item, "z");
    assert_eq!(result[0].score, 5.0);
}

#[test]
fn test_equal_scores_give_plain_average() {
    let mut population = Population::new();
    population.rate("t", "seen", 3.0);
    for (name, p, q) in [("n1", 2.0, 9.0), ("n2", 4.0, 6.0), ("n3", 6.0, 3.0)] {
        population.rate(name, "seen", 5.0);
        population.rate(name, "p", p);
        population.rate(name, "q", q);
    }
    let target = population.get("t").unwrap();

    let result = recommender(target, population.iter(), Metric::manhattan(), 3).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].item, "p");
    assert!((result[0].score - 4.0).abs() < 1e-9);
    assert_eq!(result[1].item, "q");
    assert!((result[1].score - 6.0).abs() < 1e-9);
}

#[test]
fn test_weighted_output_bounded_by_limit_and_unrated_items() {
    let limit = NonZeroUsize::new(3).unwrap();
    let mut population = Population::with_recommendation_limit(limit);
    population.rate("t", "shared", 4.0);
    population.rate("n1", "shared", 3.0);
    population.rate("n2", "shared", 5.0);
    for item in ["a", "b", "c", "d", "e"] {
        population.rate("n1", item, 2.0);
    }
    population.rate("n2", "a", 1.0);
    population.rate("outsider", "f", 1.0);
    let target = population.get("t").unwrap();

    let result = recommender(target, population.iter(), Metric::Cosine, 2).unwrap();

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|r| r.item != "shared" && r.item != "f"));
}

#[test]
fn test_weighted_rejects_oversized_k() {
    let population = abc_population();
    let a = population.get("A").unwrap();

    let err = recommender(a, population.iter(), Metric::Pearson, 3).unwrap_err();

    assert_eq!(
        err,
        RecommendError::InsufficientPopulation {
            requested: 3,
            available: 2
        }
    );
}

#[test]
fn test_unknown_metric_name_is_a_configuration_error() {
    let err = "EUCLID".parse::<Metric>().unwrap_err();

    assert_eq!(err, RecommendError::UnknownMetric("EUCLID".to_string()));
}

#[test]
fn test_recommend_never_returns_rated_items() {
    let population = abc_population();

    for target in population.iter() {
        for metric in [Metric::manhattan(), Metric::euclidean(), Metric::Pearson, Metric::Cosine] {
            let result = recommend(target, population.iter(), metric).unwrap();
            assert!(result.iter().all(|r| !target.has_rated(&r.item)));
        }
    }
}
