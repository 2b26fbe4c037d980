//! Type-erased access to dependency slots.
//!
//! A component usually declares several slots of different types. The
//! wiring layer that fills them only needs to offer candidates and check
//! completeness, so it holds them as `Arc<dyn AnyDependency>`.

use crate::component::{Component, TypeKey};
use crate::dependency::{Dependency, Strictness};
use crate::error::DependencyError;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Object-safe view of a [`Dependency`] with its value type erased.
///
/// Equality and hashing of `dyn AnyDependency` follow the declared type
/// only, exactly like [`Dependency`] itself.
pub trait AnyDependency: Send + Sync {
    /// The declared type.
    fn key(&self) -> TypeKey;

    /// The read behavior fixed at construction.
    fn strictness(&self) -> Strictness;

    /// Whether a component has been accepted.
    fn is_resolved(&self) -> bool;

    /// Offer a candidate. Returns whether the slot is resolved afterwards.
    fn offer_erased(&self, candidate: &Arc<dyn Component>) -> bool;

    /// Apply the strictness rule without producing the value.
    ///
    /// Optional slots always pass. Required slots fail while empty.
    fn ensure_resolved(&self) -> Result<(), DependencyError>;
}

impl<T: Component> AnyDependency for Dependency<T> {
    fn key(&self) -> TypeKey {
        Dependency::key(self)
    }

    fn strictness(&self) -> Strictness {
        Dependency::strictness(self)
    }

    fn is_resolved(&self) -> bool {
        Dependency::is_resolved(self)
    }

    fn offer_erased(&self, candidate: &Arc<dyn Component>) -> bool {
        self.offer(candidate).is_some()
    }

    fn ensure_resolved(&self) -> Result<(), DependencyError> {
        self.read().map(|_| ())
    }
}

impl PartialEq for dyn AnyDependency {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for dyn AnyDependency {}

impl Hash for dyn AnyDependency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
