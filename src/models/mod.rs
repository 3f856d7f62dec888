pub mod mood;
pub mod quiz;
pub mod recommendation;
pub mod title;

pub use mood::{GenreChoice, MoodArchetype, MoodResult};
pub use quiz::{Activity, Drink, Energy, QuizAnswers, QuizOption, TimeBucket};
pub use recommendation::{
    CandidateCounts, DurationWindow, Phase, Recommendation, RecommendationRequest,
};
pub use title::{tags, GenreSet, TitleRecord};
