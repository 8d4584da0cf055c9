use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Unified Symbol Resolution identifier for a declaration.
///
/// A `Usr` is a stable, version-independent string identifier (e.g.
/// `c:@M@Widget@bar`) produced by the extractor, allowing the same logical
/// declaration to be correlated across two snapshots of an interface.
/// "No identifier available" is always modeled as `Option<Usr>`, never as
/// an empty string, so construction rejects empty input.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Usr(String);

impl Usr {
    /// Create a `Usr` from an identifier string.
    ///
    /// Fails on empty input; absent identifiers belong in `Option<Usr>`.
    pub fn new(usr: impl Into<String>) -> Result<Self, TypeError> {
        let usr = usr.into();
        if usr.is_empty() {
            return Err(TypeError::EmptyUsr);
        }
        Ok(Self(usr))
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Usr {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, TypeError> {
        Self::new(s)
    }
}

impl From<Usr> for String {
    fn from(usr: Usr) -> Self {
        usr.0
    }
}

impl fmt::Debug for Usr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Usr({})", self.0)
    }
}

impl fmt::Display for Usr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
