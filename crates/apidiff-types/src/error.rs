use thiserror::Error;

/// Errors produced by type constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("USR must be non-empty")]
    EmptyUsr,
}
