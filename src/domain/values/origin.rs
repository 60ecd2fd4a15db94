use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Live,
    Synthetic,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Live => write!(f, "live"),
            Origin::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// A payload tagged with its [`Origin`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcedResult<T> {
    pub payload: T,
    pub origin: Origin,
}

impl<T> SourcedResult<T> {
    pub fn live(payload: T) -> Self {
        Self {
            payload,
            origin: Origin::Live,
        }
    }

    pub fn synthetic(payload: T) -> Self {
        Self {
            payload,
            origin: Origin::Synthetic,
        }
    }

    pub fn is_live(&self) -> bool {
        self.origin == Origin::Live
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SourcedResult<U> {
        SourcedResult {
            payload: f(self.payload),
            origin: self.origin,
        }
    }
}
