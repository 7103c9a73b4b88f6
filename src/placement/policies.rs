/*!
 * Fit Policies
 * Index-order scans over free capacities
 */

use crate::core::types::{BlockIndex, Size};

/// First block whose free capacity covers the request, in index order
pub fn first_fit(free: &[Size], requested: Size) -> Option<BlockIndex> {
    free.iter().position(|&capacity| capacity >= requested)
}

/// Qualifying block with the smallest free capacity
///
/// The scan compares with strict `<`, so the lowest index wins a tie.
pub fn best_fit(free: &[Size], requested: Size) -> Option<BlockIndex> {
    let mut best: Option<(BlockIndex, Size)> = None;
    for (index, &capacity) in free.iter().enumerate() {
        if capacity < requested {
            continue;
        }
        match best {
            Some((_, best_capacity)) if capacity >= best_capacity => {}
            _ => best = Some((index, capacity)),
        }
    }
    best.map(|(index, _)| index)
}

/// Qualifying block with the largest free capacity
///
/// The scan compares with strict `>`, so the lowest index wins a tie.
pub fn worst_fit(free: &[Size], requested: Size) -> Option<BlockIndex> {
    let mut worst: Option<(BlockIndex, Size)> = None;
    for (index, &capacity) in free.iter().enumerate() {
        if capacity < requested {
            continue;
        }
        match worst {
            Some((_, worst_capacity)) if capacity <= worst_capacity => {}
            _ => worst = Some((index, capacity)),
        }
    }
    worst.map(|(index, _)| index)
}
