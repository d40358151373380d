use std::fmt;

/// Destination chat identifier.
///
/// Kept opaque: Telegram accepts both numeric ids and `@channel` usernames.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub String);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix time (seconds) passed to the API as `from_date`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollTimestamp(pub i64);

impl PollTimestamp {
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp())
    }
}

impl fmt::Display for PollTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
