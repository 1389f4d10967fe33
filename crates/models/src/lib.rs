//! Plain serde record types for the three backend services, plus the
//! `Record` trait the generic store and handler layers are built on.

pub mod errors;
pub mod order;
pub mod product;
pub mod record;
pub mod user;

pub use errors::ModelError;
pub use order::Order;
pub use product::Product;
pub use record::Record;
pub use user::User;
