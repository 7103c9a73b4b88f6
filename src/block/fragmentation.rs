/*!
 * Fragmentation Analyzer
 * Pure function over a free-capacity snapshot
 */

use crate::core::types::Size;
use serde::{Deserialize, Serialize};

/// Fragmentation figures derived from a free-capacity snapshot
///
/// `external_fragmentation` is `total_free - largest_free`: space that exists
/// but cannot satisfy the single largest pending need. A heuristic, not an
/// exact fragmentation measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FragmentationSnapshot {
    pub total_free: Size,
    pub largest_free: Size,
    pub external_fragmentation: Size,
}

/// Compute fragmentation figures for the given free capacities
pub fn analyze_fragmentation(free: &[Size]) -> FragmentationSnapshot {
    let total_free = free.iter().sum();
    let largest_free = free.iter().copied().max().unwrap_or(0);
    FragmentationSnapshot {
        total_free,
        largest_free,
        external_fragmentation: total_free - largest_free,
    }
}
