//! TelegramMessenger against a local axum stand-in for the Bot API.
//!
//! The bot's API url is pointed at the server, which answers `sendMessage`
//! with flood-control errors a scripted number of times before succeeding.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use axum::{extract::State, http::StatusCode, Json, Router};
use serde_json::{json, Value};
use teloxide::Bot;

use hwbot_core::{domain::ChatId, ports::MessagingPort, Error};
use hwbot_telegram::TelegramMessenger;

struct FloodControl {
    rejections: usize,
    hits: AtomicUsize,
}

async fn send_message(State(st): State<Arc<FloodControl>>) -> (StatusCode, Json<Value>) {
    let n = st.hits.fetch_add(1, Ordering::SeqCst);
    if n < st.rejections {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 1",
                "parameters": {"retry_after": 1},
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1_700_000_000,
                "from": {"id": 1, "is_bot": true, "first_name": "hwbot", "username": "hwbot"},
                "chat": {"id": 42, "type": "private", "first_name": "Student"},
                "text": "hello",
            },
        })),
    )
}

async fn spawn(rejections: usize) -> (TelegramMessenger, Arc<FloodControl>) {
    let st = Arc::new(FloodControl {
        rejections,
        hits: AtomicUsize::new(0),
    });
    let app = Router::new().fallback(send_message).with_state(st.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let url = reqwest::Url::parse(&format!("http://{addr}/")).unwrap();
    let bot = Bot::new("123456:TEST").set_api_url(url);
    (TelegramMessenger::new(bot), st)
}

#[tokio::test]
async fn retries_once_after_flood_control() {
    let (messenger, st) = spawn(1).await;

    messenger
        .send_text(&ChatId("42".to_string()), "hello")
        .await
        .unwrap();

    assert_eq!(st.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn gives_up_after_a_single_retry() {
    let (messenger, st) = spawn(usize::MAX).await;

    let err = messenger
        .send_text(&ChatId("42".to_string()), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::External(_)), "{err}");
    assert_eq!(st.hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn delivers_without_retry_when_accepted() {
    let (messenger, st) = spawn(0).await;

    messenger
        .send_text(&ChatId("42".to_string()), "hello")
        .await
        .unwrap();

    assert_eq!(st.hits.load(Ordering::SeqCst), 1);
}
