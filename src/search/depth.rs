//! Search depth budget.

use serde::{Deserialize, Serialize};

/// How many plies a search may look ahead.
///
/// `Unlimited` searches to terminal positions; on a 3x3 grid that is at
/// most nine plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DepthLimit {
    /// Search until every line of play ends.
    #[default]
    Unlimited,
    /// Stop after this many plies and score the position as it stands.
    Plies(u32),
}

impl DepthLimit {
    /// True when no further plies may be searched.
    pub fn is_exhausted(self) -> bool {
        matches!(self, DepthLimit::Plies(0))
    }

    /// Budget left for the children of a node searched with `self`.
    pub fn descend(self) -> Self {
        match self {
            DepthLimit::Unlimited => DepthLimit::Unlimited,
            DepthLimit::Plies(n) => DepthLimit::Plies(n.saturating_sub(1)),
        }
    }
}

impl From<Option<u32>> for DepthLimit {
    fn from(plies: Option<u32>) -> Self {
        plies.map_or(DepthLimit::Unlimited, DepthLimit::Plies)
    }
}

impl From<u32> for DepthLimit {
    fn from(plies: u32) -> Self {
        DepthLimit::Plies(plies)
    }
}

impl std::fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthLimit::Unlimited => write!(f, "unlimited"),
            DepthLimit::Plies(n) => write!(f, "{} plies", n),
        }
    }
}
