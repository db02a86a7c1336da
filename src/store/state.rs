//! Slice state marker and the combined state tree.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

use serde::Serialize;

use super::reducer::Reducer;
use super::value::SliceValue;

/// Marker trait for slice state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for tests and change detection)
/// - Serializable (the render boundary reads JSON snapshots)
pub trait SliceState: Clone + PartialEq + Debug + Default + Serialize + Send + Sync + 'static {}

/// Snapshot of every slice, keyed by namespace.
///
/// The key set is fixed when the store is built. Cloning shares the
/// underlying map; a dispatch that changes nothing leaves the tree pointer
/// untouched, so `ptr_eq` is a cheap "did anything change" check.
#[derive(Clone, Debug)]
pub struct StateTree {
    slices: Arc<BTreeMap<&'static str, SliceValue>>,
}

impl StateTree {
    pub(crate) fn from_map(slices: BTreeMap<&'static str, SliceValue>) -> Self {
        Self {
            slices: Arc::new(slices),
        }
    }

    pub(crate) fn map(&self) -> &BTreeMap<&'static str, SliceValue> {
        &self.slices
    }

    /// Typed state of the slice owned by reducer `R`.
    pub fn slice<R: Reducer>(&self) -> Option<Arc<R::State>> {
        self.slices.get(R::NAMESPACE)?.downcast::<R::State>()
    }

    /// Type-erased state under `namespace`.
    pub fn get(&self, namespace: &str) -> Option<&SliceValue> {
        self.slices.get(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slices.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn ptr_eq(&self, other: &StateTree) -> bool {
        Arc::ptr_eq(&self.slices, &other.slices)
    }
}
