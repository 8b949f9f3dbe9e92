use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Identifier assigned by the external store.
///
/// Stores hand out either numeric or string identifiers; both are kept in
/// their original JSON form so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl FromStr for RecordId {
    type Err = Infallible;

    /// Path segments that are plain integers become numeric identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map(RecordId::Number)
            .unwrap_or_else(|_| RecordId::Text(s.to_string())))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => n.fmt(f),
            RecordId::Text(s) => s.fmt(f),
        }
    }
}
