//! Sub-changes within a modified declaration.
//!
//! A declaration that survives between two interface versions can still
//! change in several discrete ways (return type, availability, protocol
//! conformances, ...). Each such sub-change is one [`Modification`], owned
//! by the [`Difference`](crate::Difference) that reports it.

use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Category of a sub-change within a modified declaration.
///
/// Tag spellings are stable: downstream report consumers match on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModificationKind {
    /// The declaration text itself changed (signature, type).
    Declaration,
    /// The return type of a method or function changed.
    ReturnType,
    /// The superclass of a class changed.
    Superclass,
    /// The set of conformed-to protocols changed.
    Protocols,
    /// A protocol member switched between required and optional.
    Optionality,
    /// Platform availability changed.
    Availability,
    /// A deprecation message was added, removed, or reworded.
    Deprecation,
    /// The suggested replacement for a deprecated declaration changed.
    Replacement,
    /// The declaration moved to a different header.
    Header,
}

impl ModificationKind {
    /// Stable machine tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Declaration => "declaration",
            Self::ReturnType => "returnType",
            Self::Superclass => "superclass",
            Self::Protocols => "protocols",
            Self::Optionality => "optionality",
            Self::Availability => "availability",
            Self::Deprecation => "deprecation",
            Self::Replacement => "replacement",
            Self::Header => "header",
        }
    }

    /// Human-readable name for report rendering.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Declaration => "Declaration",
            Self::ReturnType => "Return type",
            Self::Superclass => "Superclass",
            Self::Protocols => "Protocols",
            Self::Optionality => "Optionality",
            Self::Availability => "Availability",
            Self::Deprecation => "Deprecation",
            Self::Replacement => "Replacement",
            Self::Header => "Header",
        }
    }
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One sub-change within a modified declaration.
///
/// Carries the previous and current values as the extractor rendered them.
/// Either side may be absent: an added protocol conformance has no previous
/// value, a dropped deprecation message has no current one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Modification {
    kind: ModificationKind,
    previous_value: Option<String>,
    current_value: Option<String>,
}

impl Modification {
    /// Create a sub-change with optional previous/current values.
    pub fn new(
        kind: ModificationKind,
        previous_value: Option<String>,
        current_value: Option<String>,
    ) -> Self {
        Self {
            kind,
            previous_value,
            current_value,
        }
    }

    /// Create a sub-change where a value changed from one rendering to another.
    pub fn changed(
        kind: ModificationKind,
        previous: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self::new(kind, Some(previous.into()), Some(current.into()))
    }

    /// The category of this sub-change.
    pub fn kind(&self) -> ModificationKind {
        self.kind
    }

    /// Rendering of the value in the previous interface version, if any.
    pub fn previous_value(&self) -> Option<&str> {
        self.previous_value.as_deref()
    }

    /// Rendering of the value in the current interface version, if any.
    pub fn current_value(&self) -> Option<&str> {
        self.current_value.as_deref()
    }

    /// Project this sub-change into a key-ordered record.
    ///
    /// Always contains `modification`; `previousValue` and `currentValue`
    /// are present only when the corresponding side exists (key omission,
    /// never null).
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert(
            "modification".to_string(),
            Value::String(self.kind.as_str().to_string()),
        );
        if let Some(previous) = &self.previous_value {
            record.insert("previousValue".to_string(), Value::String(previous.clone()));
        }
        if let Some(current) = &self.current_value {
            record.insert("currentValue".to_string(), Value::String(current.clone()));
        }
        record
    }
}

impl Serialize for Modification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}
