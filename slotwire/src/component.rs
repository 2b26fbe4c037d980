//! The component capability and the descriptor of a declared type.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Anything that can be offered to a dependency slot.
///
/// Implemented for every `'static` type that is `Send + Sync`, so callers
/// never implement it by hand. Components travel through the wiring layer
/// as `Arc<dyn Component>` and are recovered as `Arc<T>` by a safe downcast
/// inside [`Dependency::offer`](crate::Dependency::offer).
pub trait Component: Any + Send + Sync {
    /// Erase the component to `Arc<dyn Any>` so it can be downcast.
    ///
    /// Call it on the `Arc<dyn Component>` handle. An `Arc` wrapped in a
    /// second `Arc` is a component in its own right and erases as the inner
    /// handle, not as the component behind it.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> Component for T {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Identifies the capability type a slot accepts.
///
/// Two keys are equal when they describe the same Rust type. The name is
/// carried only for diagnostics and never takes part in comparison.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, e.g. `my_app::log::Logger`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha;
    struct Beta;

    #[test]
    fn keys_compare_by_type() {
        assert_eq!(TypeKey::of::<Alpha>(), TypeKey::of::<Alpha>());
        assert_ne!(TypeKey::of::<Alpha>(), TypeKey::of::<Beta>());
    }

    #[test]
    fn display_is_qualified_name() {
        let key = TypeKey::of::<Alpha>();
        assert!(key.to_string().ends_with("Alpha"));
        assert_eq!(key.name(), std::any::type_name::<Alpha>());
    }

    #[test]
    fn erased_component_downcasts_to_concrete_type() {
        let c: Arc<dyn Component> = Arc::new(Alpha);
        assert!(Arc::clone(&c).into_any().downcast::<Beta>().is_err());
        assert!(c.into_any().downcast::<Alpha>().is_ok());
    }
}
