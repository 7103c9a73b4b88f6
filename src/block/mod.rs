/*!
 * Block Store
 * Fixed set of memory partitions and the fragmentation analyzer
 */

mod fragmentation;
mod store;

pub use fragmentation::{analyze_fragmentation, FragmentationSnapshot};
pub use store::{Block, BlockStore};
