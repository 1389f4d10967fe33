pub mod errors;
pub mod handlers;
pub mod routes;
pub mod startup;

pub use startup::run_service;
