//! # Storage Module
//!
//! Store contracts consumed by the controllers plus in-memory implementations.

pub mod fixtures;
pub mod memory;
pub mod traits;

pub use memory::{MemoryBillsStore, MemoryKeyValueStore};
pub use traits::{BillsStore, KeyValueStore};
