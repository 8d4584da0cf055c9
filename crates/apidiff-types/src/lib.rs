//! Foundation types for apidiff.
//!
//! This crate provides the identifier and location types shared by the
//! difference model and its producers.
//!
//! # Key Types
//!
//! - [`Usr`] — Unified Symbol Resolution identifier, correlating the same
//!   logical declaration across two versions of an interface
//! - [`SourceLocation`] — file path plus 1-based line/column position
//! - [`TypeError`] — construction failures for the above

pub mod error;
pub mod location;
pub mod usr;

pub use error::TypeError;
pub use location::SourceLocation;
pub use usr::Usr;
