//! The typed dependency slot.
//!
//! A [`Dependency<T>`] is declared empty by the component that needs a `T`
//! and filled later by whichever candidate first passes the slot's
//! acceptance test: the candidate must downcast to `T` and satisfy the
//! predicate. Once filled, the slot never changes again.
//!
//! The write path is a single compare-and-swap from empty, so concurrent
//! offers race safely and exactly one qualifying candidate is retained.
//! Reads are plain atomic loads. The [`Strictness`] tag only changes what a
//! read of an empty slot means.

use crate::component::{Component, TypeKey};
use crate::error::DependencyError;
use arc_swap::ArcSwapOption;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Predicate applied to a candidate that already has the declared type.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// How a read of an unresolved slot behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strictness {
    /// Reading an empty slot yields `None`.
    Optional,
    /// Reading an empty slot fails with [`DependencyError::ComponentNotFound`].
    Required,
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strictness::Optional => f.write_str("optional"),
            Strictness::Required => f.write_str("required"),
        }
    }
}

/// A slot for one component of type `T`.
///
/// Slots compare equal and hash identically when they declare the same `T`,
/// regardless of predicate, strictness, or what they currently hold. A set
/// keyed by slots therefore holds at most one declaration per type; two
/// declarations that differ only by predicate collapse into one.
pub struct Dependency<T: Component> {
    key: TypeKey,
    strictness: Strictness,
    predicate: Predicate<T>,
    value: ArcSwapOption<T>,
}

impl<T: Component> Dependency<T> {
    /// Create an empty slot with the given strictness and predicate.
    pub fn new<F>(strictness: Strictness, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            key: TypeKey::of::<T>(),
            strictness,
            predicate: Arc::new(predicate),
            value: ArcSwapOption::empty(),
        }
    }

    /// An optional slot accepting any `T`.
    pub fn optional() -> Self {
        Self::new(Strictness::Optional, |_: &T| true)
    }

    /// A required slot accepting any `T`.
    pub fn required() -> Self {
        Self::new(Strictness::Required, |_: &T| true)
    }

    /// An optional slot accepting only a `T` for which `predicate` holds.
    pub fn optional_where<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(Strictness::Optional, predicate)
    }

    /// A required slot accepting only a `T` for which `predicate` holds.
    pub fn required_where<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(Strictness::Required, predicate)
    }

    /// Replace the predicate before the slot is shared.
    pub fn with_predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicate = Arc::new(predicate);
        self
    }

    /// The declared type.
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// The read behavior fixed at construction.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Whether a component has been accepted.
    pub fn is_resolved(&self) -> bool {
        self.value.load().is_some()
    }

    /// Offer a type-erased candidate.
    ///
    /// Returns the slot's value after the attempt: the candidate if this
    /// call filled the slot, the earlier winner if the slot was already
    /// filled, or `None` if the slot is still empty. A candidate of another
    /// type, or one the predicate rejects, leaves the slot untouched.
    pub fn offer(&self, candidate: &Arc<dyn Component>) -> Option<Arc<T>> {
        if let Some(current) = self.value.load_full() {
            tracing::trace!(dependency = %self.key, "offer ignored, already resolved");
            return Some(current);
        }
        match Arc::clone(candidate).into_any().downcast::<T>() {
            Ok(typed) => self.accept(typed),
            Err(_) => {
                tracing::trace!(dependency = %self.key, "offer ignored, type mismatch");
                self.value.load_full()
            }
        }
    }

    /// Offer a candidate that already has the declared type.
    ///
    /// The predicate still applies.
    pub fn offer_typed(&self, candidate: Arc<T>) -> Option<Arc<T>> {
        if let Some(current) = self.value.load_full() {
            tracing::trace!(dependency = %self.key, "offer ignored, already resolved");
            return Some(current);
        }
        self.accept(candidate)
    }

    fn accept(&self, candidate: Arc<T>) -> Option<Arc<T>> {
        if !(self.predicate)(&candidate) {
            tracing::trace!(dependency = %self.key, "offer ignored, predicate rejected");
            return self.value.load_full();
        }
        let empty: Option<Arc<T>> = None;
        let previous = self
            .value
            .compare_and_swap(&empty, Some(Arc::clone(&candidate)));
        match &*previous {
            None => {
                tracing::debug!(
                    dependency = %self.key,
                    strictness = %self.strictness,
                    "dependency resolved"
                );
                Some(candidate)
            }
            // Another offer won the race between our load and the swap.
            Some(winner) => Some(Arc::clone(winner)),
        }
    }

    /// The resolved value, if any. Never fails, whatever the strictness.
    pub fn peek(&self) -> Option<Arc<T>> {
        self.value.load_full()
    }

    /// The resolved value, or [`DependencyError::ComponentNotFound`].
    pub fn resolve(&self) -> Result<Arc<T>, DependencyError> {
        self.peek()
            .ok_or(DependencyError::ComponentNotFound { key: self.key })
    }

    /// Read according to the slot's strictness.
    ///
    /// An optional slot returns `Ok(None)` while empty. A required slot
    /// fails instead, so on success it always carries a value.
    pub fn read(&self) -> Result<Option<Arc<T>>, DependencyError> {
        match self.strictness {
            Strictness::Optional => Ok(self.peek()),
            Strictness::Required => self.resolve().map(Some),
        }
    }
}

impl<T: Component, U: Component> PartialEq<Dependency<U>> for Dependency<T> {
    fn eq(&self, other: &Dependency<U>) -> bool {
        let same_slot = std::ptr::eq(
            self as *const Self as *const (),
            other as *const Dependency<U> as *const (),
        );
        same_slot || self.key == other.key
    }
}

impl<T: Component> Eq for Dependency<T> {}

impl<T: Component> Hash for Dependency<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T: Component> fmt::Debug for Dependency<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dependency")
            .field("key", &self.key)
            .field("strictness", &self.strictness)
            .field("resolved", &self.is_resolved())
            .finish_non_exhaustive()
    }
}
