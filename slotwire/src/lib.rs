//! # slotwire — typed, thread-safe dependency slots
//!
//! A component that needs a collaborator declares a [`Dependency<T>`]:
//! an empty slot for one component of type `T`, optionally narrowed by a
//! predicate. The surrounding wiring layer offers candidates to the slot as
//! it discovers them. The first candidate that is a `T` and passes the
//! predicate fills the slot for good; every later offer is ignored.
//!
//! | Piece | Type | What it does |
//! |-------|------|-------------|
//! | Capability | [`Component`], [`TypeKey`] | What can be offered, and how a declared type is named |
//! | Slot | [`Dependency`], [`Strictness`] | Atomic first-wins fill, optional or required read |
//! | Erased slot | [`AnyDependency`] | Heterogeneous slots in one collection |
//! | Failure | [`DependencyError`] | A required slot was read while empty |
//!
//! ## Identity
//!
//! Slots are equal, and hash alike, when they declare the same type. The
//! predicate, the strictness, and the current value play no part. Sets
//! and maps of slots are therefore keyed by "what type is wanted", and two
//! declarations of the same type with different predicates collapse into
//! one entry.
//!
//! ## Concurrency
//!
//! Offers are a single compare-and-swap from the empty state and reads are
//! atomic loads; neither blocks. Predicates run on the offering thread and
//! must be free of side effects.
//!
//! ```
//! use slotwire::{Component, Dependency};
//! use std::sync::Arc;
//!
//! struct Logger { name: &'static str }
//!
//! let dep = Dependency::<Logger>::required_where(|l| l.name == "root");
//! assert!(dep.read().is_err());
//!
//! let child: Arc<dyn Component> = Arc::new(Logger { name: "child" });
//! let root: Arc<dyn Component> = Arc::new(Logger { name: "root" });
//! assert!(dep.offer(&child).is_none());
//! assert_eq!(dep.offer(&root).unwrap().name, "root");
//! assert_eq!(dep.resolve().unwrap().name, "root");
//! ```

#![deny(missing_docs)]

pub mod component;
pub mod dependency;
pub mod erased;
pub mod error;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use component::{Component, TypeKey};
pub use dependency::{Dependency, Predicate, Strictness};
pub use erased::AnyDependency;
pub use error::DependencyError;
