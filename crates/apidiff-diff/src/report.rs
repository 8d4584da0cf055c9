//! Ordered collection of differences: the full result of one comparison.

use serde_json::{Map, Value};

use crate::difference::{Difference, DifferenceKind};
use crate::error::{DiffError, DiffResult};

/// The complete set of differences between two interface versions.
///
/// The comparison engine appends records as it detects them; reporters read
/// the collection, usually after [`sort`](DiffReport::sort), and project it
/// to JSON. Sorting reorders whole records only; the sub-changes inside a
/// modification record keep their detection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// The differences, in insertion order until sorted.
    pub differences: Vec<Difference>,
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no differences were detected.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.differences.len()
    }

    /// Append a difference.
    pub fn push(&mut self, difference: Difference) {
        self.differences.push(difference);
    }

    /// Number of added declarations.
    pub fn additions(&self) -> usize {
        self.count_kind(DifferenceKind::Addition)
    }

    /// Number of removed declarations.
    pub fn removals(&self) -> usize {
        self.count_kind(DifferenceKind::Removal)
    }

    /// Number of modified declarations.
    pub fn modifications(&self) -> usize {
        self.count_kind(DifferenceKind::Modification)
    }

    fn count_kind(&self, kind: DifferenceKind) -> usize {
        self.differences.iter().filter(|d| d.kind() == kind).count()
    }

    /// Sort into stable presentation order: by location (path, line,
    /// column), then declaration name, then kind.
    pub fn sort(&mut self) {
        self.differences.sort_by(|a, b| {
            a.location()
                .cmp(b.location())
                .then_with(|| a.name().cmp(b.name()))
                .then_with(|| a.kind().cmp(&b.kind()))
        });
    }

    /// Project every difference into its key-ordered record, preserving
    /// the report's current order.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.differences.iter().map(|d| d.to_record()).collect()
    }

    /// Render the report as a pretty-printed JSON array of records.
    pub fn to_json(&self) -> DiffResult<String> {
        serde_json::to_string_pretty(&self.differences)
            .map_err(|e| DiffError::Serialization(e.to_string()))
    }
}

impl FromIterator<Difference> for DiffReport {
    fn from_iter<I: IntoIterator<Item = Difference>>(iter: I) -> Self {
        Self {
            differences: iter.into_iter().collect(),
        }
    }
}

impl Extend<Difference> for DiffReport {
    fn extend<I: IntoIterator<Item = Difference>>(&mut self, iter: I) {
        self.differences.extend(iter);
    }
}
