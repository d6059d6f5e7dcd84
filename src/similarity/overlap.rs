use crate::domain::{RatingMap, RatingValue};

/// Rating pairs `(a[i], b[i])` for every item rated in both maps.
///
/// Pairs come out in item order so that every sum over them is computed in
/// the same sequence whichever side is passed first.
pub fn common_ratings(a: &RatingMap, b: &RatingMap) -> Vec<(RatingValue, RatingValue)> {
    let (small, large, swapped) = if a.len() <= b.len() {
        (a, b, false)
    } else {
        (b, a, true)
    };

    let mut shared: Vec<(&str, RatingValue, RatingValue)> = small
        .iter()
        .filter_map(|(item, &s)| large.get(item).map(|&l| (item.as_str(), s, l)))
        .collect();
    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));

    shared
        .into_iter()
        .map(|(_, s, l)| if swapped { (l, s) } else { (s, l) })
        .collect()
}
