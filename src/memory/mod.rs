//! Core logic for the word graph, its entry cache and the dream loop.

pub mod chain;
pub mod dream;
pub mod entry_cache;
pub mod filter;
pub mod node;
pub mod random;

pub use dream::{DreamConfig, DreamEngine, DreamReport, Traversal};
pub use entry_cache::{CacheStats, EntryCache, CACHE_SLOTS};
pub use filter::CommonWords;
pub use node::{Node, NodeGraph, NodeId};
pub use random::RandomSource;
