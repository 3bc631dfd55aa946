//! Startup configuration from the process environment

use std::env;

use compact_str::CompactString;
use thiserror::Error;

/// The three secrets the notifier cannot run without
#[derive(Debug, Clone)]
pub struct Settings {
    pub practicum_token: CompactString,
    pub telegram_token: CompactString,
    pub telegram_chat_id: CompactString,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Every absent or empty variable, collected in one pass.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),
}

impl Settings {
    /// Read the three secrets from the environment.
    ///
    /// All variables are checked before failing, so the error names every
    /// secret that still needs to be provided.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| -> CompactString {
            match lookup(name) {
                Some(value) if !value.is_empty() => value.into(),
                _ => {
                    missing.push(name);
                    CompactString::default()
                },
            }
        };

        let practicum_token = read("PRACTICUM_TOKEN");
        let telegram_token = read("TELEGRAM_TOKEN");
        let telegram_chat_id = read("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn all_present_yields_settings() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "pt"),
            ("TELEGRAM_TOKEN", "tt"),
            ("TELEGRAM_CHAT_ID", "42"),
        ]))
        .unwrap();

        assert_eq!(settings.practicum_token, "pt");
        assert_eq!(settings.telegram_token, "tt");
        assert_eq!(settings.telegram_chat_id, "42");
    }

    #[test]
    fn every_missing_variable_is_reported_in_one_pass() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingVars(vec![
                "PRACTICUM_TOKEN",
                "TELEGRAM_TOKEN",
                "TELEGRAM_CHAT_ID",
            ])
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Settings::from_lookup(lookup_from(&[
            ("PRACTICUM_TOKEN", "pt"),
            ("TELEGRAM_TOKEN", ""),
            ("TELEGRAM_CHAT_ID", "42"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::MissingVars(vec!["TELEGRAM_TOKEN"]));
    }

    #[test]
    fn error_message_names_the_missing_variables() {
        let err = Settings::from_lookup(lookup_from(&[("TELEGRAM_CHAT_ID", "42")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required environment variables: PRACTICUM_TOKEN, TELEGRAM_TOKEN"
        );
    }
}
