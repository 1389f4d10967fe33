use thiserror::Error;

/// Field-level constraint failures. The message is the wire-facing text,
/// so it names the offending field rather than the record type.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0}")]
    Validation(String),
}
