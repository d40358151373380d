//! Validation of API answers and rendering of homework status messages.

use std::{fmt, str::FromStr};

use serde_json::Value;
use tracing::error;

use crate::errors::{ParseError, ValidationError};

/// Review outcome of a homework record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    /// Human-readable phrase appended to the notification.
    pub fn phrase(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for Verdict {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Verdict::Approved),
            "reviewing" => Ok(Verdict::Reviewing),
            "rejected" => Ok(Verdict::Rejected),
            other => Err(ParseError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that an API answer is a mapping with a `homeworks` list.
///
/// Only the structure is checked; the records inside are left to `parse_status`.
/// Returns the validated list, newest record first.
pub fn check_response(response: &Value) -> Result<&[Value], ValidationError> {
    let Some(obj) = response.as_object() else {
        error!("API answer is not a mapping");
        return Err(ValidationError::NotAMapping);
    };

    let Some(homeworks) = obj.get("homeworks") else {
        error!("API answer has no `homeworks` key");
        return Err(ValidationError::MissingHomeworks);
    };

    match homeworks.as_array() {
        Some(list) => Ok(list.as_slice()),
        None => {
            error!("`homeworks` in API answer is not a list");
            Err(ValidationError::HomeworksNotASequence)
        }
    }
}

/// Render the notification for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, ParseError> {
    let name = required(homework, "homework_name")?;
    let status = required(homework, "status")?;

    let verdict = match status.as_str().map(Verdict::from_str) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            error!("unexpected homework status: {}", status);
            return Err(e);
        }
        None => {
            error!("unexpected homework status: {}", status);
            return Err(ParseError::UnknownStatus(status.to_string()));
        }
    };

    let name = match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    Ok(format!(
        "Изменился статус проверки работы \"{name}\".{}",
        verdict.phrase()
    ))
}

fn required<'a>(homework: &'a Value, key: &'static str) -> Result<&'a Value, ParseError> {
    homework.get(key).ok_or_else(|| {
        error!("homework record has no `{key}` key");
        ParseError::MissingKey(key)
    })
}
