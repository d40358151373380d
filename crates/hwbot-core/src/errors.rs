/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type. The poll loop
/// treats every kind the same way today; the split exists so it doesn't have to.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("external error: {0}")]
    External(String),
}

/// Failures talking to the review API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("bad API answer: HTTP {0}")]
    BadStatus(u16),

    #[error("API answer is not valid JSON: {0}")]
    Decode(String),
}

/// Structural problems with a decoded API answer.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("API answer is not a mapping")]
    NotAMapping,

    #[error("API answer has no `homeworks` key")]
    MissingHomeworks,

    #[error("`homeworks` in API answer is not a list")]
    HomeworksNotASequence,
}

/// Problems with a single homework record.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("homework record has no `{0}` key")]
    MissingKey(&'static str),

    #[error("unexpected homework status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, Error>;
