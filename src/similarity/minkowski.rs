use super::metric::is_valid_power;
use super::overlap::common_ratings;
use crate::domain::RatingMap;

/// Minkowski distance over the items both consumers rated.
///
/// `power = 1` is the Manhattan distance, `power = 2` the Euclidean one.
/// Returns `None` when the consumers share no rated item, when `power` is
/// not a finite number above 0, or when the distance is not finite.
pub fn minkowski(a: &RatingMap, b: &RatingMap, power: f64) -> Option<f64> {
    if !is_valid_power(power) {
        return None;
    }
    let shared = common_ratings(a, b);
    if shared.is_empty() {
        return None;
    }

    let sum: f64 = shared
        .iter()
        .map(|&(x, y)| (x - y).abs().powf(power))
        .sum();

    let distance = sum.powf(1.0 / power);
    distance.is_finite().then_some(distance)
}
