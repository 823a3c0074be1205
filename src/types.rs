use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::Instant;
use crate::prelude::*;

/// A date argument as callers hand it over, before canonicalization.
#[derive(Debug, Clone)]
pub enum Input<Tz: TimeZone = Local> {
    /// An already-canonical instant
    Instant(Instant<Tz>),
    /// Milliseconds since the Unix epoch
    Timestamp(f64),
    /// Text is never parsed; it canonicalizes to an invalid instant
    Text(String),
    Bool(bool),
    Null,
}

/// Ways a caller can misuse the input surface.
/// The core never reports these; see [`crate::diagnostics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Misuse {
    #[display(
        fmt = "text passed where an instant was expected; text is never parsed, build an Instant explicitly"
    )]
    TextInput,
}

impl<Tz: TimeZone> Input<Tz> {
    /// Reports inputs that signal a caller mistake rather than plain bad data
    pub const fn misuse(&self) -> Option<Misuse> {
        match self {
            Self::Text(_) => Some(Misuse::TextInput),
            Self::Instant(_) | Self::Timestamp(_) | Self::Bool(_) | Self::Null => None,
        }
    }
}

impl<Tz: TimeZone> From<Instant<Tz>> for Input<Tz> {
    fn from(instant: Instant<Tz>) -> Self {
        Self::Instant(instant)
    }
}

impl<Tz: TimeZone> From<&Instant<Tz>> for Input<Tz> {
    fn from(instant: &Instant<Tz>) -> Self {
        Self::Instant(instant.clone())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Input<Tz> {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Instant(Instant::from(dt))
    }
}

impl<Tz: TimeZone> From<&Input<Tz>> for Input<Tz> {
    fn from(input: &Self) -> Self {
        input.clone()
    }
}

impl<Tz: TimeZone> From<f64> for Input<Tz> {
    fn from(ms: f64) -> Self {
        Self::Timestamp(ms)
    }
}

impl<Tz: TimeZone> From<i64> for Input<Tz> {
    #[allow(clippy::cast_precision_loss)]
    fn from(ms: i64) -> Self {
        Self::Timestamp(ms as f64)
    }
}

impl<Tz: TimeZone> From<i32> for Input<Tz> {
    fn from(ms: i32) -> Self {
        Self::Timestamp(f64::from(ms))
    }
}

impl<Tz: TimeZone> From<&str> for Input<Tz> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl<Tz: TimeZone> From<String> for Input<Tz> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<Tz: TimeZone> From<bool> for Input<Tz> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A signed count of months (or similar unit), coerced with
/// [`crate::to_integer`] before use.
///
/// Deserializes untagged, so JSON `3`, `-2.5`, `"4"`, `true` and `null` are
/// all accepted and keep their shape until coercion.
#[derive(Debug, Clone, PartialEq, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    #[display(fmt = "{_0}")]
    Integer(i64),
    #[display(fmt = "{_0}")]
    Number(f64),
    #[display(fmt = "{_0:?}")]
    Text(String),
    #[display(fmt = "{_0}")]
    Bool(bool),
    #[display(fmt = "null")]
    Null,
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for Amount {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
