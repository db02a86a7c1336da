//! Slice registration and the root reducer that fans actions out.

use std::collections::BTreeMap;

use super::action::Action;
use super::error::StoreError;
use super::reducer::{ErasedReducer, Reducer, TypedReducer};
use super::state::StateTree;
use super::value::SliceValue;

struct SliceEntry {
    namespace: &'static str,
    initial: SliceValue,
    reducer: Box<dyn ErasedReducer>,
}

/// Fixed set of slices a store is built from.
///
/// Registration order is the order reducers run in; it has no observable
/// effect since slices never read each other's state.
#[derive(Default)]
pub struct SliceRegistry {
    entries: Vec<SliceEntry>,
}

impl SliceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register reducer `R` starting from `initial`.
    ///
    /// # Errors
    /// `InvalidNamespace` for an empty namespace or one containing `/`,
    /// `DuplicateSlice` if the namespace is already taken.
    pub fn register<R: Reducer>(&mut self, initial: R::State) -> Result<&mut Self, StoreError> {
        let namespace = R::NAMESPACE;
        if namespace.is_empty() || namespace.contains('/') {
            return Err(StoreError::InvalidNamespace {
                namespace: namespace.to_string(),
            });
        }
        if self.entries.iter().any(|e| e.namespace == namespace) {
            return Err(StoreError::DuplicateSlice {
                namespace: namespace.to_string(),
            });
        }

        self.entries.push(SliceEntry {
            namespace,
            initial: SliceValue::new(initial),
            reducer: Box::new(TypedReducer::<R>::new()),
        });
        Ok(self)
    }

    /// Register reducer `R` starting from `R::State::default()`.
    pub fn register_default<R: Reducer>(&mut self) -> Result<&mut Self, StoreError> {
        self.register::<R>(R::State::default())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_root(self) -> Result<(RootReducer, StateTree), StoreError> {
        if self.entries.is_empty() {
            return Err(StoreError::EmptyRegistry);
        }
        let initial = self
            .entries
            .iter()
            .map(|e| (e.namespace, e.initial.clone()))
            .collect::<BTreeMap<_, _>>();
        let root = RootReducer {
            entries: self.entries,
        };
        Ok((root, StateTree::from_map(initial)))
    }
}

/// Combined reducer over the whole [`StateTree`].
pub(crate) struct RootReducer {
    entries: Vec<SliceEntry>,
}

impl RootReducer {
    /// Apply `action` to every slice.
    ///
    /// Returns `tree` itself (same pointer) when no slice changed. Any slice
    /// error aborts the whole pass; the caller keeps its previous tree.
    pub(crate) fn reduce(&self, tree: &StateTree, action: &Action) -> Result<StateTree, StoreError> {
        let mut changed: Option<BTreeMap<&'static str, SliceValue>> = None;

        for entry in &self.entries {
            let prev = tree
                .get(entry.namespace)
                .ok_or_else(|| StoreError::MissingSlice {
                    namespace: entry.namespace.to_string(),
                })?;
            let next = entry.reducer.reduce(prev, action)?;
            if !next.ptr_eq(prev) {
                changed
                    .get_or_insert_with(|| tree.map().clone())
                    .insert(entry.namespace, next);
            }
        }

        Ok(match changed {
            Some(slices) => StateTree::from_map(slices),
            None => tree.clone(),
        })
    }

    /// JSON object of every slice, keyed by namespace.
    pub(crate) fn to_json(&self, tree: &StateTree) -> serde_json::Value {
        let object = self
            .entries
            .iter()
            .filter_map(|e| {
                tree.get(e.namespace)
                    .map(|v| (e.namespace.to_string(), e.reducer.to_json(v)))
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(object)
    }
}
