use std::{env, path::Path, sync::Arc};

use tokio_util::sync::CancellationToken;
use tracing::error;

use hwbot_core::{
    app::{bootstrap, Ports},
    config::load_dotenv_if_present,
    Error,
};
use hwbot_practicum::PracticumClient;
use hwbot_telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> Result<(), Error> {
    hwbot_core::logging::init("hwbot")?;
    load_dotenv_if_present(Path::new(".env"));

    let poller = bootstrap(
        |key| env::var(key).ok(),
        |cfg| {
            let api = PracticumClient::new(cfg)
                .map_err(|e| Error::External(format!("http client init failed: {e}")))?;
            let messenger = TelegramMessenger::from_token(cfg.telegram_token.clone());
            Ok(Ports {
                api: Arc::new(api),
                messenger: Arc::new(messenger),
            })
        },
    )
    .inspect_err(|e| error!("{e}"))?;

    poller.run(CancellationToken::new()).await;

    Ok(())
}
