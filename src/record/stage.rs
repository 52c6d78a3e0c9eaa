//! Stage - The two parallel storage areas of a versioned record
//!
//! Every record lives independently in up to two stages:
//! - Draft: the editable working copy
//! - Live: the published copy visible to consumers
//!
//! Each stage holds its own pointer into the record's version history.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two storage areas a record version can occupy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Editable working copy.
    Draft,
    /// Published copy visible to consumers.
    Live,
}

impl Stage {
    /// Returns the stable lowercase name used in logs and persisted rows.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Draft => "draft",
            Stage::Live => "live",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
