/*!
 * Core Types
 * Common types used across the simulator
 */

/// Index of a block within the block store
pub type BlockIndex = usize;

/// Size type for simulated capacities
///
/// The unit is whatever the block configuration uses (the reference
/// configuration is denominated in MB).
pub type Size = usize;
