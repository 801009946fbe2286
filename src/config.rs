use std::time::Duration;

use anyhow::Context;
use lazy_static::lazy_static;
use regex::Regex;

use crate::profile::repo_types::ProfileFields;

pub const DEFAULT_STACK: &str = "Python/Django";
pub const DEFAULT_FACT_API_URL: &str = "https://catfact.ninja/fact";
pub const DEFAULT_FACT_FALLBACK: &str = "Could not retrieve cat fact.";

const DEFAULT_EMAIL: &str = "emmfatsneh@gmail.com";
const DEFAULT_NAME: &str = "Fatoki Olaitan";

// Column widths of user_profiles.
const EMAIL_MAX_LEN: usize = 255;
const NAME_MAX_LEN: usize = 255;
const STACK_MAX_LEN: usize = 100;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct FactConfig {
    pub url: String,
    pub timeout: Duration,
    pub fallback: String,
}

impl Default for FactConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FACT_API_URL.into(),
            timeout: Duration::from_secs(5),
            fallback: DEFAULT_FACT_FALLBACK.into(),
        }
    }
}

/// Profile values used when the store is empty (`placeholder`) or cannot be
/// reached at all (`fallback`).
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub placeholder: ProfileFields,
    pub fallback: ProfileFields,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let triple = ProfileFields {
            email: DEFAULT_EMAIL.into(),
            name: DEFAULT_NAME.into(),
            stack: DEFAULT_STACK.into(),
        };
        Self {
            placeholder: triple.clone(),
            fallback: triple,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub fact: FactConfig,
    pub profile: ProfileConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let db = DbConfig {
            url: std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
            max_connections: env_parse("DB_MAX_CONNECTIONS").unwrap_or(10),
            acquire_timeout: Duration::from_secs(env_parse("DB_ACQUIRE_TIMEOUT_SECS").unwrap_or(3)),
        };

        let fact = FactConfig {
            url: std::env::var("FACT_API_URL").unwrap_or_else(|_| DEFAULT_FACT_API_URL.into()),
            timeout: Duration::from_secs(env_parse("FACT_TIMEOUT_SECS").unwrap_or(5)),
            fallback: std::env::var("FACT_FALLBACK").unwrap_or_else(|_| DEFAULT_FACT_FALLBACK.into()),
        };

        let defaults = ProfileConfig::default();
        let profile = ProfileConfig {
            placeholder: profile_from_env("DEFAULT_PROFILE", defaults.placeholder),
            fallback: profile_from_env("FALLBACK_PROFILE", defaults.fallback),
        };

        let config = Self { db, fact, profile };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        validate_profile(&self.profile.placeholder).context("invalid DEFAULT_PROFILE_*")?;
        validate_profile(&self.profile.fallback).context("invalid FALLBACK_PROFILE_*")?;
        anyhow::ensure!(!self.fact.timeout.is_zero(), "FACT_TIMEOUT_SECS must be positive");
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

fn profile_from_env(prefix: &str, defaults: ProfileFields) -> ProfileFields {
    let var = |field: &str| std::env::var(format!("{prefix}_{field}")).ok();
    ProfileFields {
        email: var("EMAIL").unwrap_or(defaults.email),
        name: var("NAME").unwrap_or(defaults.name),
        stack: var("STACK").unwrap_or(defaults.stack),
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn validate_profile(p: &ProfileFields) -> anyhow::Result<()> {
    anyhow::ensure!(is_valid_email(&p.email), "email {:?} is not valid", p.email);
    anyhow::ensure!(p.email.chars().count() <= EMAIL_MAX_LEN, "email longer than {EMAIL_MAX_LEN}");
    anyhow::ensure!(!p.name.trim().is_empty(), "name is empty");
    anyhow::ensure!(p.name.chars().count() <= NAME_MAX_LEN, "name longer than {NAME_MAX_LEN}");
    anyhow::ensure!(!p.stack.trim().is_empty(), "stack is empty");
    anyhow::ensure!(p.stack.chars().count() <= STACK_MAX_LEN, "stack longer than {STACK_MAX_LEN}");
    Ok(())
}
