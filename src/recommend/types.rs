use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::{ItemId, RatingValue};

/// An item suggested to the target consumer and the score behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub item: ItemId,
    pub score: RatingValue,
}

impl Recommendation {
    pub fn new(item: impl Into<ItemId>, score: RatingValue) -> Self {
        Self {
            item: item.into(),
            score,
        }
    }

    pub(crate) fn by_item(a: &Self, b: &Self) -> Ordering {
        a.item.cmp(&b.item)
    }

    pub(crate) fn by_score_ascending(a: &Self, b: &Self) -> Ordering {
        a.score.total_cmp(&b.score).then_with(|| a.item.cmp(&b.item))
    }
}
