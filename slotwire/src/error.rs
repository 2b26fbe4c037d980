//! Error types for dependency resolution.

use crate::component::TypeKey;
use thiserror::Error;

/// Dependency resolution errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependencyError {
    /// A required dependency was read before any component satisfied it.
    #[error("cannot find component of type {key}")]
    ComponentNotFound {
        /// The declared type of the unmet dependency.
        key: TypeKey,
    },
}

impl DependencyError {
    /// The declared type this error is about.
    pub fn key(&self) -> TypeKey {
        match self {
            Self::ComponentNotFound { key } => *key,
        }
    }
}
