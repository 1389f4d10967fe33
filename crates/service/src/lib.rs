//! Service layer providing the record-store pattern shared by the three
//! backend services.
//! - Reuses validation and record definitions from the `models` crate.
//! - Owns the read/write lock discipline; handlers never touch the map.
//! - Provides clear error types mapped to HTTP statuses one layer up.

pub mod errors;
pub mod resource;
pub mod storage;

pub use errors::ServiceError;
pub use resource::ResourceStore;
pub use storage::memory_store::MemoryStore;
