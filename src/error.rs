//! Error types for component validation.

use thiserror::Error;

/// Errors that can occur when validating a raw ID component.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComponentError {
    /// The component contains the scope delimiter.
    #[error("component '{input}' contains the scope delimiter ';' at position {position}")]
    ContainsScopeDelim {
        /// The rejected input
        input: String,
        /// Byte offset of the delimiter
        position: usize,
    },

    /// The component contains the edge delimiter.
    #[error("component '{input}' contains the edge delimiter '|' at position {position}")]
    ContainsEdgeDelim {
        /// The rejected input
        input: String,
        /// Byte offset of the delimiter
        position: usize,
    },
}

impl ComponentError {
    /// Returns the input that failed validation.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::ContainsScopeDelim { input, .. } | Self::ContainsEdgeDelim { input, .. } => input,
        }
    }

    /// Returns the byte offset of the offending delimiter.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ContainsScopeDelim { position, .. } | Self::ContainsEdgeDelim { position, .. } => {
                *position
            }
        }
    }

    /// Returns true if the scope delimiter caused the rejection.
    #[must_use]
    pub const fn is_scope_delim(&self) -> bool {
        matches!(self, Self::ContainsScopeDelim { .. })
    }
}

/// Error returned when a topology kind name is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown topology kind '{0}'; expected one of endpoint, address, process, container, host")]
pub struct UnknownTopologyKind(
    /// The rejected name
    pub String,
);
