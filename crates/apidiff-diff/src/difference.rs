//! The difference record: one change to one named declaration.

use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use apidiff_types::{SourceLocation, Usr};

use crate::error::{DiffError, DiffResult};
use crate::modification::Modification;

/// The kind of change a [`Difference`] describes.
///
/// Tag spellings are stable: existing report consumers match on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
pub enum DifferenceKind {
    /// The declaration exists only in the old interface version.
    Removal,
    /// The declaration exists only in the new interface version.
    Addition,
    /// The declaration exists in both versions but changed.
    Modification,
}

impl DifferenceKind {
    /// Stable machine tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Removal => "Removal",
            Self::Addition => "Addition",
            Self::Modification => "Modification",
        }
    }
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One change to one named declaration at one source location.
///
/// Constructed fully populated by the comparison engine and never mutated
/// afterwards. A `Difference` of kind [`DifferenceKind::Modification`]
/// carries the ordered sub-changes that were detected; removal and addition
/// records never carry any. The constructors enforce that invariant, so
/// every reachable value satisfies
/// `modifications().is_empty() == (kind() != Modification)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difference {
    kind: DifferenceKind,
    name: String,
    location: SourceLocation,
    usr: Option<Usr>,
    modifications: Vec<Modification>,
}

impl Difference {
    /// Record that `name` was removed from the interface.
    pub fn removal(name: impl Into<String>, location: SourceLocation) -> DiffResult<Self> {
        Self::terminal(DifferenceKind::Removal, name.into(), location)
    }

    /// Record that `name` was added to the interface.
    pub fn addition(name: impl Into<String>, location: SourceLocation) -> DiffResult<Self> {
        Self::terminal(DifferenceKind::Addition, name.into(), location)
    }

    /// Record that `name` changed, with the detected sub-changes in the
    /// order the engine found them (typically declaration-field order).
    ///
    /// A modification with nothing modified is a caller error: an empty
    /// `modifications` vector is rejected rather than producing a record
    /// that violates the kind/entries invariant.
    pub fn modification(
        name: impl Into<String>,
        location: SourceLocation,
        modifications: Vec<Modification>,
    ) -> DiffResult<Self> {
        let name = name.into();
        Self::validate(&name, &location)?;
        if modifications.is_empty() {
            return Err(DiffError::EmptyModifications { name });
        }
        Ok(Self {
            kind: DifferenceKind::Modification,
            name,
            location,
            usr: None,
            modifications,
        })
    }

    /// Attach the stable symbol identifier the engine resolved for this
    /// declaration. Records without one represent "no identifier could be
    /// computed" (e.g. a declaration new in this version).
    pub fn with_usr(mut self, usr: Usr) -> Self {
        self.usr = Some(usr);
        self
    }

    fn terminal(kind: DifferenceKind, name: String, location: SourceLocation) -> DiffResult<Self> {
        Self::validate(&name, &location)?;
        Ok(Self {
            kind,
            name,
            location,
            usr: None,
            modifications: Vec::new(),
        })
    }

    fn validate(name: &str, location: &SourceLocation) -> DiffResult<()> {
        if name.is_empty() {
            return Err(DiffError::EmptyName);
        }
        if location.path.is_empty() {
            return Err(DiffError::EmptyPath);
        }
        Ok(())
    }

    /// The kind of change.
    pub fn kind(&self) -> DifferenceKind {
        self.kind
    }

    /// Identifier of the affected declaration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the declaration lives.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Path of the file the declaration lives in.
    pub fn path(&self) -> &str {
        &self.location.path
    }

    /// 1-based line number, 0 if unknown.
    pub fn line_number(&self) -> u32 {
        self.location.line
    }

    /// 1-based column number, 0 if unknown.
    pub fn column_number(&self) -> u32 {
        self.location.column
    }

    /// Stable symbol identifier, if the engine could compute one.
    pub fn usr(&self) -> Option<&Usr> {
        self.usr.as_ref()
    }

    /// The detected sub-changes. Empty unless `kind()` is
    /// [`DifferenceKind::Modification`].
    pub fn modifications(&self) -> &[Modification] {
        &self.modifications
    }

    /// Project this record into a key-ordered mapping for machine
    /// consumption.
    ///
    /// Always contains `kind`, `name`, `path`, `lineNumber` and
    /// `columnNumber`. Contains `USR` only when an identifier is present
    /// and `modifications` only for modification records (key omission
    /// signals absence, never null). The projection is pure: two calls on
    /// the same record produce structurally equal maps.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            "kind".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        record.insert("name".to_string(), Value::String(self.name.clone()));
        record.insert(
            "path".to_string(),
            Value::String(self.location.path.clone()),
        );
        record.insert("lineNumber".to_string(), Value::from(self.location.line));
        record.insert(
            "columnNumber".to_string(),
            Value::from(self.location.column),
        );
        if let Some(usr) = &self.usr {
            record.insert("USR".to_string(), Value::String(usr.as_str().to_string()));
        }
        if self.kind == DifferenceKind::Modification {
            record.insert(
                "modifications".to_string(),
                Value::Array(
                    self.modifications
                        .iter()
                        .map(|m| Value::Object(m.to_record()))
                        .collect(),
                ),
            );
        }
        record
    }
}

impl Serialize for Difference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.kind, self.name, self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modification::ModificationKind;
    use serde_json::json;

    fn loc(path: &str, line: u32, column: u32) -> SourceLocation {
        SourceLocation::new(path, line, column)
    }

    #[test]
    fn addition_record_shape() {
        let diff = Difference::addition("fooMethod", loc("Widget.h", 10, 3)).unwrap();
        let record = diff.to_record();
        assert_eq!(record["kind"], json!("Addition"));
        assert_eq!(record["name"], json!("fooMethod"));
        assert_eq!(record["path"], json!("Widget.h"));
        assert_eq!(record["lineNumber"], json!(10));
        assert_eq!(record["columnNumber"], json!(3));
        assert!(!record.contains_key("USR"));
        assert!(!record.contains_key("modifications"));
    }

    #[test]
    fn removal_with_usr_includes_usr_key() {
        let diff = Difference::removal("barProperty", loc("Widget.h", 22, 1))
            .unwrap()
            .with_usr(Usr::new("c:@M@Widget@bar").unwrap());
        let record = diff.to_record();
        assert_eq!(record["kind"], json!("Removal"));
        assert_eq!(record["USR"], json!("c:@M@Widget@bar"));
    }

    #[test]
    fn modification_record_carries_entries() {
        let diff = Difference::modification(
            "initWithName:",
            loc("Widget.h", 5, 1),
            vec![Modification::changed(
                ModificationKind::ReturnType,
                "id",
                "instancetype",
            )],
        )
        .unwrap();

        assert_eq!(diff.kind(), DifferenceKind::Modification);
        let record = diff.to_record();
        assert_eq!(record["kind"], json!("Modification"));
        let entries = record["modifications"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["modification"], json!("returnType"));
        assert_eq!(entries[0]["previousValue"], json!("id"));
        assert_eq!(entries[0]["currentValue"], json!("instancetype"));
    }

    #[test]
    fn empty_modifications_rejected() {
        let result = Difference::modification("x", loc("a.h", 1, 1), vec![]);
        assert_eq!(
            result,
            Err(DiffError::EmptyModifications { name: "x".into() })
        );
    }

    #[test]
    fn empty_name_rejected() {
        assert_eq!(
            Difference::addition("", loc("a.h", 1, 1)),
            Err(DiffError::EmptyName)
        );
    }

    #[test]
    fn empty_path_rejected() {
        assert_eq!(
            Difference::removal("foo", loc("", 1, 1)),
            Err(DiffError::EmptyPath)
        );
    }

    #[test]
    fn kind_entries_invariant_holds() {
        let removal = Difference::removal("a", loc("a.h", 1, 1)).unwrap();
        let addition = Difference::addition("b", loc("a.h", 2, 1)).unwrap();
        let modification = Difference::modification(
            "c",
            loc("a.h", 3, 1),
            vec![Modification::changed(ModificationKind::Declaration, "x", "y")],
        )
        .unwrap();

        for diff in [&removal, &addition, &modification] {
            assert_eq!(
                diff.modifications().is_empty(),
                diff.kind() != DifferenceKind::Modification
            );
        }
    }

    #[test]
    fn modification_order_preserved() {
        let m1 = Modification::changed(ModificationKind::ReturnType, "id", "instancetype");
        let m2 = Modification::changed(ModificationKind::Superclass, "NSObject", "NSView");
        let m3 = Modification::new(ModificationKind::Deprecation, None, Some("gone".into()));

        let diff = Difference::modification(
            "widget",
            loc("Widget.h", 1, 1),
            vec![m1.clone(), m2.clone(), m3.clone()],
        )
        .unwrap();

        assert_eq!(diff.modifications(), &[m1, m2, m3]);
        let record = diff.to_record();
        let tags: Vec<_> = record["modifications"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["modification"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(tags, ["returnType", "superclass", "deprecation"]);
    }

    #[test]
    fn record_projection_is_deterministic() {
        let diff = Difference::modification(
            "initWithName:",
            loc("Widget.h", 5, 1),
            vec![Modification::changed(
                ModificationKind::ReturnType,
                "id",
                "instancetype",
            )],
        )
        .unwrap()
        .with_usr(Usr::new("c:objc(cs)Widget(im)initWithName:").unwrap());

        assert_eq!(diff.to_record(), diff.to_record());
    }

    #[test]
    fn serialize_matches_record() {
        let diff = Difference::addition("fooMethod", loc("Widget.h", 10, 3)).unwrap();
        let via_serde = serde_json::to_value(&diff).unwrap();
        assert_eq!(via_serde, Value::Object(diff.to_record()));
    }

    #[test]
    fn unknown_position_serializes_as_zero() {
        let diff = Difference::addition("implicit", SourceLocation::unknown_position("Widget.h"))
            .unwrap();
        let record = diff.to_record();
        assert_eq!(record["lineNumber"], json!(0));
        assert_eq!(record["columnNumber"], json!(0));
    }

    #[test]
    fn display_is_one_line_summary() {
        let diff = Difference::removal("barProperty", loc("Widget.h", 22, 1)).unwrap();
        assert_eq!(format!("{diff}"), "Removal: barProperty (Widget.h:22:1)");
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::option;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn terminal_records_are_deterministic_and_omit_entries(
            name in "[A-Za-z_][A-Za-z0-9_:]{0,24}",
            path in "[A-Za-z][A-Za-z0-9]{0,12}\\.h",
            line in 0u32..100_000,
            column in 0u32..1_000,
            usr in option::of("c:@[A-Za-z0-9@]{1,24}"),
            removal in any::<bool>(),
        ) {
            let location = SourceLocation::new(path, line, column);
            let mut diff = if removal {
                Difference::removal(name, location).unwrap()
            } else {
                Difference::addition(name, location).unwrap()
            };
            if let Some(usr) = usr {
                diff = diff.with_usr(Usr::new(usr).unwrap());
            }

            let record = diff.to_record();
            prop_assert_eq!(&record, &diff.to_record());
            prop_assert_eq!(record.contains_key("USR"), diff.usr().is_some());
            prop_assert!(!record.contains_key("modifications"));
            prop_assert!(diff.modifications().is_empty());
        }
    }
}
