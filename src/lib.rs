//! Word-chain graph that dreams up new sentences from a corpus and feeds
//! them back into itself.

pub mod memory;
pub mod storage;

pub use memory::{
    CacheStats, CommonWords, DreamConfig, DreamEngine, DreamReport, EntryCache, Node, NodeGraph,
    NodeId, RandomSource, Traversal, CACHE_SLOTS,
};
