//! Structured error types shared across the roles crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`RoleError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (node indices, sizes, kinds, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for role computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RoleError {
    /// An operator kind was asked for a capability it does not have.
    #[error("capability error: {0}")]
    Capability(ErrorInfo),
    /// A builder or constructor argument is out of range.
    #[error("argument error: {0}")]
    Argument(ErrorInfo),
    /// Values or views disagree on the size of the node domain.
    #[error("domain error: {0}")]
    Domain(ErrorInfo),
    /// A fixpoint iteration did not settle within its lattice height bound.
    #[error("fixpoint error: {0}")]
    Fixpoint(ErrorInfo),
    /// Network storage errors.
    #[error("network error: {0}")]
    Network(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl RoleError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RoleError::Capability(info)
            | RoleError::Argument(info)
            | RoleError::Domain(info)
            | RoleError::Fixpoint(info)
            | RoleError::Network(info)
            | RoleError::Serde(info) => info,
        }
    }

    /// Builds the error reported when two domain sizes disagree.
    pub fn domain_mismatch(expected: usize, found: usize) -> Self {
        RoleError::Domain(
            ErrorInfo::new("domain-mismatch", "node domain sizes differ")
                .with_context("expected", expected.to_string())
                .with_context("found", found.to_string()),
        )
    }
}

/// Returns a domain error unless both sizes agree.
pub fn ensure_same_domain(expected: usize, found: usize) -> Result<(), RoleError> {
    if expected == found {
        Ok(())
    } else {
        Err(RoleError::domain_mismatch(expected, found))
    }
}
