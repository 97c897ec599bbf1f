//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use circle_core::{CapacityTiers, RecommendationCriteria};
use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub policy: PolicyConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Circle membership and recommendation policy settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_basic_member_limit")]
    pub basic_member_limit: usize,
    #[serde(default = "default_premium_member_limit")]
    pub premium_member_limit: usize,
    #[serde(default = "default_premium_member_threshold")]
    pub premium_member_threshold: usize,
    #[serde(default = "default_recommendation_min_participants")]
    pub recommendation_min_participants: usize,
    #[serde(default = "default_recommendation_window_months")]
    pub recommendation_window_months: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            basic_member_limit: default_basic_member_limit(),
            premium_member_limit: default_premium_member_limit(),
            premium_member_threshold: default_premium_member_threshold(),
            recommendation_min_participants: default_recommendation_min_participants(),
            recommendation_window_months: default_recommendation_window_months(),
        }
    }
}

impl PolicyConfig {
    #[must_use]
    pub fn capacity_tiers(&self) -> CapacityTiers {
        CapacityTiers {
            basic_limit: self.basic_member_limit,
            premium_limit: self.premium_member_limit,
            premium_threshold: self.premium_member_threshold,
        }
    }

    #[must_use]
    pub fn recommendation_criteria(&self) -> RecommendationCriteria {
        RecommendationCriteria {
            min_participants: self.recommendation_min_participants,
            window_months: self.recommendation_window_months,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.basic_member_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "CIRCLE_BASIC_MEMBER_LIMIT",
                "must be at least 1".to_string(),
            ));
        }
        if self.premium_member_limit < self.basic_member_limit {
            return Err(ConfigError::InvalidValue(
                "CIRCLE_PREMIUM_MEMBER_LIMIT",
                format!(
                    "{} is below the basic limit {}",
                    self.premium_member_limit, self.basic_member_limit
                ),
            ));
        }
        if self.recommendation_window_months == 0 {
            return Err(ConfigError::InvalidValue(
                "CIRCLE_RECOMMENDATION_WINDOW_MONTHS",
                "must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

// Default value functions
fn default_app_name() -> String {
    "circle-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_basic_member_limit() -> usize {
    CapacityTiers::DEFAULT_BASIC_LIMIT
}

fn default_premium_member_limit() -> usize {
    CapacityTiers::DEFAULT_PREMIUM_LIMIT
}

fn default_premium_member_threshold() -> usize {
    CapacityTiers::DEFAULT_PREMIUM_THRESHOLD
}

fn default_recommendation_min_participants() -> usize {
    RecommendationCriteria::DEFAULT_MIN_PARTICIPANTS
}

fn default_recommendation_window_months() -> u32 {
    RecommendationCriteria::DEFAULT_WINDOW_MONTHS
}

/// Parse an optional numeric variable, falling back to `default` when unset
fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let policy = PolicyConfig {
            basic_member_limit: parse_var(
                &lookup,
                "CIRCLE_BASIC_MEMBER_LIMIT",
                default_basic_member_limit(),
            )?,
            premium_member_limit: parse_var(
                &lookup,
                "CIRCLE_PREMIUM_MEMBER_LIMIT",
                default_premium_member_limit(),
            )?,
            premium_member_threshold: parse_var(
                &lookup,
                "CIRCLE_PREMIUM_MEMBER_THRESHOLD",
                default_premium_member_threshold(),
            )?,
            recommendation_min_participants: parse_var(
                &lookup,
                "CIRCLE_RECOMMENDATION_MIN_PARTICIPANTS",
                default_recommendation_min_participants(),
            )?,
            recommendation_window_months: parse_var(
                &lookup,
                "CIRCLE_RECOMMENDATION_WINDOW_MONTHS",
                default_recommendation_window_months(),
            )?,
        }
        .validate()?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections(),
                )?,
                min_connections: parse_var(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections(),
                )?,
            },
            policy,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
