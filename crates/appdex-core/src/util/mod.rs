//! ID and slug utilities.

pub mod ids;

pub use ids::slug;
