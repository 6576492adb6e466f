//! # Asset Stores
//!
//! Store provider implementations. The filesystem tree under the cache root
//! is the entire index; an injectable provider keeps the cache testable
//! without disk I/O.

pub use self::fs::FsStore;
pub use self::memory::MemStore;
pub use self::provider::StoreProvider;

pub mod provider;

pub mod fs;
pub mod memory;
