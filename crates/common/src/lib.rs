pub mod runtime;
pub mod types;
pub mod utils;
