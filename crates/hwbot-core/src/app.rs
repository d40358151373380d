//! Startup wiring: credentials first, adapters second.

use std::sync::Arc;

use crate::{
    config::Config,
    notifier::Notifier,
    poller::Poller,
    ports::{HomeworkApi, MessagingPort},
    Result,
};

/// The two outbound handles the poller needs.
pub struct Ports {
    pub api: Arc<dyn HomeworkApi>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Validate credentials, then build the adapters and the poller.
///
/// `connect` only runs once every credential is present, so a missing
/// variable never gets as far as creating a network handle.
pub fn bootstrap(
    lookup: impl Fn(&str) -> Option<String>,
    connect: impl FnOnce(&Config) -> Result<Ports>,
) -> Result<Poller> {
    let cfg = Config::from_lookup(lookup)?;
    let ports = connect(&cfg)?;
    let notifier = Notifier::new(ports.messenger, cfg.telegram_chat_id.clone());
    Ok(Poller::new(ports.api, notifier, cfg.retry_period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChatId, PollTimestamp},
        errors::Error,
    };
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::{
        cell::Cell,
        sync::atomic::{AtomicUsize, Ordering},
    };

    #[derive(Default)]
    struct CountingPorts {
        api_calls: AtomicUsize,
        sends: AtomicUsize,
    }

    #[async_trait]
    impl HomeworkApi for CountingPorts {
        async fn get_api_answer(&self, _from_date: PollTimestamp) -> Result<Value> {
            self.api_calls.fetch_add(1, Ordering::SeqCst);
            Ok(json!({"homeworks": []}))
        }
    }

    #[async_trait]
    impl MessagingPort for CountingPorts {
        async fn send_text(&self, _chat_id: &ChatId, _text: &str) -> Result<()> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn env_without(missing: &'static str) -> impl Fn(&str) -> Option<String> {
        move |key| {
            if key == missing {
                return None;
            }
            match key {
                "PRACTICUM_TOKEN" | "TELEGRAM_TOKEN" | "TELEGRAM_CHAT_ID" => Some("1".to_string()),
                _ => None,
            }
        }
    }

    #[test]
    fn missing_credential_stops_before_any_adapter_exists() {
        for missing in ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"] {
            let fake = Arc::new(CountingPorts::default());
            let connected = Cell::new(false);

            let res = bootstrap(env_without(missing), |_cfg| {
                connected.set(true);
                Ok(Ports {
                    api: fake.clone(),
                    messenger: fake.clone(),
                })
            });

            assert!(matches!(res, Err(Error::Config(ref msg)) if msg.contains(missing)));
            assert!(!connected.get(), "adapters built despite missing {missing}");
            assert_eq!(fake.api_calls.load(Ordering::SeqCst), 0);
            assert_eq!(fake.sends.load(Ordering::SeqCst), 0);
        }
    }

    #[test]
    fn complete_credentials_connect_once_without_calling_out() {
        let fake = Arc::new(CountingPorts::default());
        let connects = Cell::new(0);

        let res = bootstrap(env_without(""), |cfg| {
            connects.set(connects.get() + 1);
            assert_eq!(cfg.telegram_chat_id, ChatId("1".to_string()));
            Ok(Ports {
                api: fake.clone(),
                messenger: fake.clone(),
            })
        });

        assert!(res.is_ok());
        assert_eq!(connects.get(), 1);
        assert_eq!(fake.api_calls.load(Ordering::SeqCst), 0);
        assert_eq!(fake.sends.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn adapter_failure_is_surfaced() {
        let res = bootstrap(env_without(""), |_cfg| {
            Err(Error::External("http client init failed".to_string()))
        });
        assert!(matches!(res, Err(Error::External(_))));
    }
}
