use std::collections::HashMap;
use std::num::NonZeroUsize;

pub type ItemId = String;
pub type RatingValue = f64;
pub type RatingMap = HashMap<ItemId, RatingValue>;

/// How many results a consumer is shown when nothing else is configured.
pub const DEFAULT_RECOMMENDATION_LIMIT: NonZeroUsize = NonZeroUsize::new(5).unwrap();
