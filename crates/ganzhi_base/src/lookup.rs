//! Result of a lookup into a partial attribute table.

use serde::{Serialize, Serializer};

/// Text used when a table has no entry for a key.
pub const UNKNOWN_LABEL: &str = "未知";

/// Table lookup outcome. A miss is a value, not an error: the caller renders
/// it and carries on with the remaining fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup<T> {
    Found(T),
    Unknown,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::Unknown => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Self::Found(v) => Lookup::Found(f(v)),
            Self::Unknown => Lookup::Unknown,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => Self::Found(v),
            None => Self::Unknown,
        }
    }
}

/// `Found` serializes as the value, `Unknown` as `null`.
impl<T: Serialize> Serialize for Lookup<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Found(v) => serializer.serialize_some(v),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}
