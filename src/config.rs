//! Environment-driven configuration for the binary.
//!
//! Every knob has a logged default so a bare `cargo run` comes up on its own.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    /// Email domains accepted for account creation.
    pub allowed_email_domains: Vec<String>,
    /// Optional pre-issued session for local development: `token:email`.
    pub dev_session: Option<(String, String)>,
}

impl Config {
    pub fn load() -> Self {
        let domains: String = try_load("HALLMART_EMAIL_DOMAINS", "itbhu.ac.in,iitbhu.ac.in");

        Self {
            port: try_load("HALLMART_PORT", "4000"),
            allowed_email_domains: domains
                .split(',')
                .map(|d| d.trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            dev_session: env::var("HALLMART_DEV_SESSION")
                .ok()
                .and_then(|raw| parse_dev_session(&raw)),
        }
    }
}

fn parse_dev_session(raw: &str) -> Option<(String, String)> {
    let (token, email) = raw.split_once(':')?;
    if token.is_empty() || email.is_empty() {
        warn!("HALLMART_DEV_SESSION must look like token:email, ignoring");
        return None;
    }
    Some((token.to_string(), email.to_string()))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
