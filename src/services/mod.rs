pub mod cascade;
pub mod mood;
pub mod recommendations;
pub mod sampler;

pub use recommendations::{recommend, RecommendationSettings};
