//! Text store backends for Brine
//!
//! Two implementations of the `brine_core::TextStore` trait:
//! - [`MemoryStore`]: in-process map, backs the ephemeral scope
//! - [`FileStore`]: JSON file on disk with atomic rewrite, backs the
//!   persistent scope

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
