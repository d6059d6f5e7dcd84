pub mod catalog;
pub mod ratings;
pub mod records;

pub use catalog::{Book, Catalog, load_catalog};
pub use ratings::load_ratings;
