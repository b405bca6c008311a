use chrono::{DateTime, FixedOffset, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct DefaultClock;
impl Clock for DefaultClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug)]
pub enum CountdownError {
    TargetParse {
        value: String,
        source: chrono::ParseError,
    },
}

impl std::fmt::Display for CountdownError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetParse { value, source } => {
                write!(f, "failed to parse target time '{value}': {source}")
            }
        }
    }
}

impl std::error::Error for CountdownError {}

/// Parses an RFC 3339 target timestamp (e.g. `2026-09-01T21:15:00+02:00`).
///
/// # Errors
/// Returns `CountdownError::TargetParse` when the value is not RFC 3339.
pub fn parse_target(value: &str) -> Result<DateTime<FixedOffset>, CountdownError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| CountdownError::TargetParse {
        value: value.to_string(),
        source,
    })
}

/// Whole seconds until `target`, clamped to zero once the target has passed.
#[must_use]
pub fn remaining_secs(target: DateTime<FixedOffset>, clock: &dyn Clock) -> u64 {
    let diff = target.signed_duration_since(clock.now());
    diff.num_seconds().try_into().unwrap_or_default()
}
