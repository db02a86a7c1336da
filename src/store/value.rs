use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased, reference-counted slice state.
///
/// Clone is an atomic increment. Two values are "the same state" when they
/// point at the same allocation, which is what the no-op checks compare.
#[derive(Clone)]
pub struct SliceValue {
    inner: Arc<dyn Any + Send + Sync>,
}

impl SliceValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self { inner: value }
    }

    /// Typed handle to the same allocation, or `None` on a type mismatch.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Pointer identity, ignoring vtable metadata.
    pub fn ptr_eq(&self, other: &SliceValue) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }

    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for SliceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceValue")
            .field("type_id", &(*self.inner).type_id())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_shares_allocation() {
        let v = SliceValue::new(42u32);
        let typed = v.downcast::<u32>().unwrap();
        assert_eq!(*typed, 42);
        assert!(v.ptr_eq(&SliceValue::from_arc(typed)));
    }

    #[test]
    fn downcast_wrong_type_returns_none() {
        let v = SliceValue::new(42u32);
        assert!(v.downcast::<i64>().is_none());
        assert!(v.downcast_ref::<String>().is_none());
    }

    #[test]
    fn equal_values_in_distinct_allocations_are_not_ptr_eq() {
        let a = SliceValue::new(1u8);
        let b = SliceValue::new(1u8);
        assert!(!a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.clone()));
    }

    #[test]
    fn clone_bumps_ref_count() {
        let v = SliceValue::new(String::from("x"));
        let _c = v.clone();
        assert_eq!(v.ref_count(), 2);
    }
}
