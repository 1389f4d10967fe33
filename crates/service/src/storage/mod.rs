//! Storage for the service layer.
//!
//! One reusable in-memory map store shared by all three record services;
//! the read/write lock discipline lives here and nowhere else.

pub mod memory_store;
