/*!
 * Core Module
 * Shared types and simulator-wide constants
 */

pub mod limits;
pub mod types;

pub use types::{BlockIndex, Size};
