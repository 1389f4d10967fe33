use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::ModelError;

/// A CRUD-managed record kind. The identifier is always supplied by the
/// caller and is the unique key of the owning service's store; no two
/// records share an identifier at a point in time.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Plural path segment the record is served under, e.g. `users`.
    const RESOURCE: &'static str;
    /// Singular kind name used in diagnostics, e.g. `user`.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Overwrite the identifier. On update the path id is authoritative:
    /// whatever the body carried is replaced before the record is stored.
    fn set_id(&mut self, id: &str);

    /// Per-resource field policy, checked explicitly field by field.
    fn validate(&self) -> Result<(), ModelError>;
}
