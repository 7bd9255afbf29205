//! Station wire types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Station identifier as sent by the endpoint: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    Number(i64),
    Text(String),
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Number(n) => write!(f, "{n}"),
            StationId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StationId {
    fn from(n: i64) -> Self {
        StationId::Number(n)
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        StationId::Text(s.to_string())
    }
}

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub station_id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(station_id: impl Into<StationId>, name: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            name: name.into(),
        }
    }
}
