use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a declaration within a source file.
///
/// Line and column are 1-based, matching Clang source locations; a value of
/// 0 means "unknown position" for declarations the extractor could not pin
/// down (e.g. implicit or synthesized declarations).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the file the declaration lives in.
    pub path: String,
    /// 1-based line number, 0 if unknown.
    pub line: u32,
    /// 1-based column number, 0 if unknown.
    pub column: u32,
}

impl SourceLocation {
    /// Create a location at a known line and column.
    pub fn new(path: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }

    /// Create a location with an unknown position within the file.
    pub fn unknown_position(path: impl Into<String>) -> Self {
        Self::new(path, 0, 0)
    }

    /// Returns `true` if both line and column are resolved.
    pub fn has_position(&self) -> bool {
        self.line != 0 && self.column != 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path, self.line, self.column)
    }
}
