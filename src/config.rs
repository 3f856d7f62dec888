use serde::Deserialize;
use std::path::PathBuf;

use crate::locale::Locale;
use crate::services::cascade::DurationThresholds;
use crate::services::recommendations::RecommendationSettings;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the bilingual catalog CSV
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum number of titles returned per recommendation
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Seed of the phase 1 sample; later phases use the following integers
    #[serde(default = "default_seed_base")]
    pub seed_base: u64,

    #[serde(default = "default_short_max_minutes")]
    pub short_max_minutes: u32,

    #[serde(default = "default_medium_min_minutes")]
    pub medium_min_minutes: u32,

    #[serde(default = "default_medium_max_minutes")]
    pub medium_max_minutes: u32,

    #[serde(default = "default_long_min_minutes")]
    pub long_min_minutes: u32,

    /// Locale used when a request does not name one
    #[serde(default)]
    pub default_locale: Locale,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("netflix_bilingual_merged_clean.csv")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_sample_size() -> usize {
    RecommendationSettings::default().sample_size
}

fn default_seed_base() -> u64 {
    RecommendationSettings::default().seed_base
}

fn default_short_max_minutes() -> u32 {
    DurationThresholds::default().short_max
}

fn default_medium_min_minutes() -> u32 {
    DurationThresholds::default().medium_min
}

fn default_medium_max_minutes() -> u32 {
    DurationThresholds::default().medium_max
}

fn default_long_min_minutes() -> u32 {
    DurationThresholds::default().long_min
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn thresholds(&self) -> DurationThresholds {
        DurationThresholds {
            short_max: self.short_max_minutes,
            medium_min: self.medium_min_minutes,
            medium_max: self.medium_max_minutes,
            long_min: self.long_min_minutes,
        }
    }

    pub fn recommendation_settings(&self) -> RecommendationSettings {
        RecommendationSettings {
            thresholds: self.thresholds(),
            sample_size: self.sample_size,
            seed_base: self.seed_base,
            default_locale: self.default_locale,
        }
    }

    /// Rejects settings that would make the time buckets leave gaps
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.sample_size == 0 {
            anyhow::bail!("SAMPLE_SIZE must be at least 1");
        }
        self.thresholds().validate()
    }
}
