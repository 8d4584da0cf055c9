//! Difference model for apidiff.
//!
//! Represents the result of comparing two versions of a library's public
//! interface as a set of structured change records. The comparison engine
//! constructs [`Difference`] values; reporters read them and project them
//! into machine-consumable records.
//!
//! # Key Types
//!
//! - [`Difference`] / [`DifferenceKind`] -- One change to one declaration
//!   (removal, addition, or modification with sub-changes)
//! - [`Modification`] / [`ModificationKind`] -- One sub-change within a
//!   modified declaration (e.g. a return type change)
//! - [`DiffReport`] -- Ordered collection of differences with counts and
//!   JSON projection

pub mod difference;
pub mod error;
pub mod modification;
pub mod report;

pub use difference::{Difference, DifferenceKind};
pub use error::{DiffError, DiffResult};
pub use modification::{Modification, ModificationKind};
pub use report::DiffReport;
