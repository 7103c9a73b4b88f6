/*!
 * Placement Algorithms
 * Pure placement decisions over a free-capacity snapshot
 */

mod policies;

pub use policies::{best_fit, first_fit, worst_fit};

use crate::core::types::{BlockIndex, Size};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Placement algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First block that fits, scanning in index order
    FirstFit,
    /// Qualifying block with the smallest free capacity; ties go to the
    /// lowest index
    BestFit,
    /// Qualifying block with the largest free capacity; ties go to the
    /// lowest index
    WorstFit,
    /// Simplified paging: always succeeds, ignores block capacities.
    /// Intentionally unrealistic - it does not model page frames.
    Paging,
}

impl Algorithm {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "first_fit" | "firstfit" | "ff" => Ok(Self::FirstFit),
            "best_fit" | "bestfit" | "bf" => Ok(Self::BestFit),
            "worst_fit" | "worstfit" | "wf" => Ok(Self::WorstFit),
            "paging" => Ok(Self::Paging),
            _ => Err(format!(
                "Invalid algorithm '{}'. Valid: first_fit, best_fit, worst_fit, paging",
                s
            )),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FirstFit => "first_fit",
            Self::BestFit => "best_fit",
            Self::WorstFit => "worst_fit",
            Self::Paging => "paging",
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Where a process ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// A real partition in the block store
    Block(BlockIndex),
    /// The paging sentinel: no partition is charged
    Paged,
}

/// Decide a placement for a single request against a free-capacity snapshot
///
/// Pure: never mutates the snapshot. Returns `None` when no block qualifies
/// (never for `Paging`, which always succeeds with the sentinel).
pub fn place(algorithm: Algorithm, free: &[Size], requested: Size) -> Option<Placement> {
    match algorithm {
        Algorithm::FirstFit => first_fit(free, requested).map(Placement::Block),
        Algorithm::BestFit => best_fit(free, requested).map(Placement::Block),
        Algorithm::WorstFit => worst_fit(free, requested).map(Placement::Block),
        Algorithm::Paging => Some(Placement::Paged),
    }
}

/// Decide placements for a batch of requests, in input order
///
/// Each successful placement is applied to a local copy of the snapshot so
/// later requests see the remaining capacity; the caller's data is never
/// touched. A failed request leaves the local copy unchanged and later
/// requests still run.
pub fn place_batch(
    algorithm: Algorithm,
    free: &[Size],
    requests: &[Size],
) -> Vec<Option<Placement>> {
    let mut local = free.to_vec();
    requests
        .iter()
        .map(|&requested| {
            let decision = place(algorithm, &local, requested);
            if let Some(Placement::Block(index)) = decision {
                local[index] -= requested;
            }
            decision
        })
        .collect()
}
