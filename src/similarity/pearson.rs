use super::overlap::common_ratings;
use crate::domain::RatingMap;

/// Pearson correlation over the items both consumers rated.
///
/// Returns `None` when nothing is shared or either side has zero variance
/// over the shared items. The result is not clamped to `[-1, 1]`.
pub fn pearson(a: &RatingMap, b: &RatingMap) -> Option<f64> {
    let shared = common_ratings(a, b);
    if shared.is_empty() {
        return None;
    }

    let n = shared.len() as f64;
    let (mut sum_xy, mut sum_x, mut sum_y, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for &(x, y) in &shared {
        sum_xy += x * y;
        sum_x += x;
        sum_y += y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    let numerator = sum_xy - (sum_x * sum_y) / n;
    let denominator = (sum_x2 - sum_x.powi(2) / n).sqrt() * (sum_y2 - sum_y.powi(2) / n).sqrt();

    // rounding can push a zero variance slightly negative, giving NaN
    if denominator.is_nan() || denominator <= 0.0 {
        return None;
    }

    Some(numerator / denominator)
}
