pub mod bootstrap;
pub mod errors;
pub mod forward;
pub mod routes;
pub mod table;
