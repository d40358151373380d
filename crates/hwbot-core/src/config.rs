use std::{env, fmt, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Typed configuration for the bot.
///
/// Only the three secrets come from the environment; everything else is fixed.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,

    pub endpoint: String,
    pub request_timeout: Duration,
    pub retry_period: Duration,
}

impl Config {
    /// Build the config from an arbitrary variable source.
    ///
    /// Fails on the first missing or blank variable, in declaration order.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let practicum_token = require(&lookup, "PRACTICUM_TOKEN")?;
        let telegram_token = require(&lookup, "TELEGRAM_TOKEN")?;
        let chat_id = require(&lookup, "TELEGRAM_CHAT_ID")?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id: ChatId(chat_id.trim().to_string()),
            endpoint: PRACTICUM_ENDPOINT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            retry_period: RETRY_PERIOD,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .field("retry_period", &self.retry_period)
            .finish()
    }
}

/// Copy `KEY=value` pairs from a `.env` file into the environment.
///
/// Variables already set win. A missing file is not an error.
pub fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn require(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    lookup(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
