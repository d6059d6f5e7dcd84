use super::overlap::common_ratings;
use crate::domain::RatingMap;

/// Cosine similarity over the items both consumers rated.
///
/// Both magnitudes are taken over the shared items only, not over each
/// consumer's full vector. Returns `None` when either magnitude is zero
/// (which includes the no-overlap case) or not finite.
pub fn cosine(a: &RatingMap, b: &RatingMap) -> Option<f64> {
    let shared = common_ratings(a, b);

    let (mut dot, mut norm_a, mut norm_b) = (0.0, 0.0, 0.0);
    for &(x, y) in &shared {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 || !magnitude.is_finite() {
        return None;
    }

    Some(dot / magnitude)
}
