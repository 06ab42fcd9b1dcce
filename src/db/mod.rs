//! Storage layer (in-memory).

pub mod memory;

pub use memory::MemDb;
