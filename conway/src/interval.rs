// interval.rs - Generation interval edit buffer and validated value

use crate::config::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS, millis};
use crate::error::IntervalError;
use std::fmt;
use std::time::Duration;

/// Interval text as it is being typed. Blank is a legal editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntervalInput {
    #[default]
    Blank,
    Millis(i64),
}

impl IntervalInput {
    /// Parses raw text from an input field. Surrounding whitespace is ignored
    /// and whitespace-only text is blank. Finite decimals are truncated
    /// toward zero, so "250.5" reads as 250.
    pub fn parse(raw: &str) -> Result<Self, IntervalError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::Blank);
        }
        if let Ok(ms) = trimmed.parse::<i64>() {
            return Ok(Self::Millis(ms));
        }
        match trimmed.parse::<f64>() {
            // `as` saturates, huge values then fail the range check on commit
            Ok(value) if value.is_finite() => Ok(Self::Millis(value.trunc() as i64)),
            _ => Err(IntervalError::NotANumber(raw.to_owned())),
        }
    }

    /// Validates the buffer for committing.
    pub fn validate(self) -> Result<GenerationInterval, IntervalError> {
        match self {
            Self::Blank => Err(IntervalError::Blank),
            Self::Millis(ms) => GenerationInterval::new(ms),
        }
    }
}

impl fmt::Display for IntervalInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Millis(ms) => write!(f, "{ms}"),
        }
    }
}

impl From<GenerationInterval> for IntervalInput {
    fn from(interval: GenerationInterval) -> Self {
        Self::Millis(interval.as_millis())
    }
}

/// Delay between generations, always within `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GenerationInterval(i64);

impl GenerationInterval {
    pub const MIN: Self = Self(MIN_INTERVAL_MS);
    pub const MAX: Self = Self(MAX_INTERVAL_MS);

    pub fn new(ms: i64) -> Result<Self, IntervalError> {
        if (MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&ms) {
            Ok(Self(ms))
        } else {
            Err(IntervalError::OutOfRange(ms))
        }
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    pub fn as_duration(self) -> Duration {
        millis(self.0)
    }
}

impl Default for GenerationInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MS)
    }
}

impl TryFrom<i64> for GenerationInterval {
    type Error = IntervalError;

    fn try_from(ms: i64) -> Result<Self, Self::Error> {
        Self::new(ms)
    }
}

impl fmt::Display for GenerationInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}
