//! Validated raw component type.

use std::fmt;
use std::str::FromStr;

use crate::constants::{EDGE_DELIM, SCOPE_DELIM};
use crate::error::ComponentError;

/// A raw ID component (host ID, address, PID, container ID, port or pseudo
/// part) known to contain neither reserved delimiter.
///
/// The raw constructors in this crate accept any `&str` and trust the caller.
/// `Component` moves that check to the boundary where the value enters the
/// system, so the checked constructors cannot produce a key that parses back
/// into different parts.
///
/// Empty components are valid.
///
/// # Examples
///
/// ```
/// use topology_id::Component;
///
/// let host = Component::parse("probe-42").unwrap();
/// assert_eq!(host.as_str(), "probe-42");
///
/// assert!(Component::parse("a;b").is_err());
/// assert!(Component::parse("a|b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Component(String);

impl Component {
    /// Parses a component from a string.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError` if the input contains the scope delimiter
    /// (`;`) or the edge delimiter (`|`). The first offending character wins.
    pub fn parse(input: &str) -> Result<Self, ComponentError> {
        for (position, c) in input.char_indices() {
            if c == SCOPE_DELIM {
                return Err(ComponentError::ContainsScopeDelim {
                    input: input.to_string(),
                    position,
                });
            }
            if c == EDGE_DELIM {
                return Err(ComponentError::ContainsEdgeDelim {
                    input: input.to_string(),
                    position,
                });
            }
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the component as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the component, returning the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Component {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Component {
    type Error = ComponentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Component {
    type Error = ComponentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
