//! Error types for catalog lookup and placement

use thiserror::Error;

use crate::scene::CommitError;

/// Errors that can occur while validating, rewriting or placing a template
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A template violates its structural invariants
    #[error("malformed template '{template}': {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// Placement scale is zero, negative or not finite
    #[error("invalid scale {scale}: must be a finite value greater than zero")]
    InvalidScale { scale: f64 },

    /// Placement anchor is not a finite coordinate
    #[error("invalid anchor ({x}, {y}): coordinates must be finite")]
    InvalidAnchor { x: f64, y: f64 },

    /// No template with this name in the catalog
    #[error("shape not found: {name}")]
    NotFound { name: String },

    /// The identifier generator could not produce a fresh identifier
    #[error("no fresh identifier after {attempts} attempts")]
    IdentifierExhausted { attempts: u32 },

    /// The scene rejected the batch
    #[error("scene commit failed: {0}")]
    Commit(#[from] CommitError),
}

impl ShapeError {
    /// Create a malformed template error
    pub fn malformed(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
