// MIT/Apache2 License

use crate::{null_backend, GlFuncs, Region, Slot};
use rustc_hash::FxHashMap;
use std::{
    borrow::Cow,
    fmt,
    iter::FromIterator,
    sync::{Arc, LazyLock},
};

/// Something that can sit in a dispatch table slot.
pub type Callable = Arc<dyn GlFuncs>;

/// A fixed-shape table with one callable per entry point.
///
/// Every slot is always bound: either to the shared [`NullBackend`](crate::NullBackend) or to
/// a real implementation. Tables are immutable once built; a backend gets its own table through
/// [`derive`](DispatchTable::derive), which copies a base table and swaps in the slots the
/// backend implements.
#[derive(Clone)]
pub struct DispatchTable {
    slots: Box<[Callable]>,
    label: Cow<'static, str>,
}

/// A partial map from slots to the callables that should replace them.
#[derive(Clone, Default)]
pub struct Overrides {
    inner: FxHashMap<Slot, Callable>,
}

static NULL_TABLE: LazyLock<Arc<DispatchTable>> =
    LazyLock::new(|| Arc::new(DispatchTable::build_null()));

/// Get the process-wide null table.
///
/// It is built on first use and shared read-only by every context without a backend.
#[inline]
pub fn null_table() -> &'static Arc<DispatchTable> {
    &NULL_TABLE
}

impl DispatchTable {
    /// Build a table where every slot is bound to the null backend.
    pub fn build_null() -> Self {
        let null = null_backend();
        Self {
            slots: (0..Slot::COUNT).map(|_| null.clone()).collect(),
            label: Cow::Borrowed("null"),
        }
    }

    /// Build a new table that is identical to this one except for the overridden slots.
    ///
    /// The new table is complete before it is returned, so nothing can ever observe it half
    /// built.
    pub fn derive(&self, overrides: &Overrides) -> Self {
        let mut slots = self.slots.clone();
        for (slot, callable) in overrides.iter() {
            slots[slot.index()] = callable.clone();
        }

        log::trace!(
            "Derived table from \"{}\" with {} overridden slots",
            self.label,
            overrides.len()
        );

        Self {
            slots,
            label: self.label.clone(),
        }
    }

    /// Set the label used to identify this table in logs.
    #[inline]
    pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Get the label of this table.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the implementation bound to a slot.
    #[inline]
    pub fn get(&self, slot: Slot) -> &dyn GlFuncs {
        &*self.slots[slot.index()]
    }

    /// Get the callable bound to a slot, for identity checks.
    #[inline]
    pub fn callable(&self, slot: Slot) -> &Callable {
        &self.slots[slot.index()]
    }

    /// Tell whether the slot is served by the null backend.
    #[inline]
    pub fn is_null(&self, slot: Slot) -> bool {
        Arc::ptr_eq(self.callable(slot), null_backend())
    }

    /// Iterate over the slots that are bound to something other than the null backend.
    #[inline]
    pub fn bound_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL
            .iter()
            .copied()
            .filter(move |slot| !self.is_null(*slot))
    }

    /// Count the non-null slots in one region.
    #[inline]
    pub fn bound_in(&self, region: Region) -> usize {
        self.bound_slots()
            .filter(|slot| slot.region() == region)
            .count()
    }
}

impl fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchTable")
            .field("label", &self.label)
            .field("bound", &self.bound_slots().count())
            .field("slots", &self.slots.len())
            .finish()
    }
}

impl Overrides {
    /// Create an empty set of overrides.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a slot, returning whatever was there before.
    #[inline]
    pub fn insert(&mut self, slot: Slot, callable: Callable) -> Option<Callable> {
        self.inner.insert(slot, callable)
    }

    /// Builder-style version of `insert`.
    #[inline]
    pub fn with(mut self, slot: Slot, callable: Callable) -> Self {
        self.insert(slot, callable);
        self
    }

    /// Get the callable that will replace the slot, if any.
    #[inline]
    pub fn get(&self, slot: Slot) -> Option<&Callable> {
        self.inner.get(&slot)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Callable)> + '_ {
        self.inner.iter().map(|(slot, callable)| (*slot, callable))
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut slots: Vec<Slot> = self.inner.keys().copied().collect();
        slots.sort();
        f.debug_tuple("Overrides").field(&slots).finish()
    }
}

impl FromIterator<(Slot, Callable)> for Overrides {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (Slot, Callable)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::types::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct Counter {
        clears: AtomicU32,
    }

    impl GlFuncs for Counter {
        fn glClear(&self, _mask: GLbitfield) {
            self.clears.fetch_add(1, Ordering::SeqCst);
        }

        fn glGetError(&self) -> GLenum {
            GL_NO_ERROR
        }
    }

    fn counter() -> (Arc<Counter>, Callable) {
        let counter = Arc::new(Counter::default());
        let callable: Callable = counter.clone();
        (counter, callable)
    }

    #[test]
    fn null_table_is_total() {
        let table = DispatchTable::build_null();
        for slot in Slot::ALL.iter().copied() {
            assert!(table.is_null(slot), "{}", slot.name());
        }
        assert_eq!(table.bound_slots().count(), 0);
        assert!(Arc::ptr_eq(null_table(), null_table()));
    }

    #[test]
    fn derive_replaces_only_given_slots() {
        let (counter, callable) = counter();
        let base = null_table();
        let derived = base.derive(&Overrides::new().with(Slot::glClear, callable.clone()));

        assert!(Arc::ptr_eq(derived.callable(Slot::glClear), &callable));
        for slot in Slot::ALL.iter().copied().filter(|s| *s != Slot::glClear) {
            assert!(Arc::ptr_eq(derived.callable(slot), base.callable(slot)));
        }

        derived.get(Slot::glClear).glClear(GL_COLOR_BUFFER_BIT);
        base.get(Slot::glClear).glClear(GL_COLOR_BUFFER_BIT);
        assert_eq!(counter.clears.load(Ordering::SeqCst), 1);

        // glGetError is still served by the null backend in the derived table
        assert_eq!(derived.get(Slot::glGetError).glGetError(), GL_INVALID_OPERATION);
    }

    #[test]
    fn empty_derive_is_identity() {
        let (_counter, callable) = counter();
        let base = null_table().derive(&Overrides::new().with(Slot::glFlush, callable));
        let same = base.derive(&Overrides::new());
        for slot in Slot::ALL.iter().copied() {
            assert!(Arc::ptr_eq(same.callable(slot), base.callable(slot)));
        }
        assert_eq!(same.label(), base.label());
    }

    #[test]
    fn bound_slots_by_region() {
        let (_counter, callable) = counter();
        let table = null_table()
            .derive(
                &Overrides::new()
                    .with(Slot::wglSwapBuffers, callable.clone())
                    .with(Slot::glClear, callable.clone())
                    .with(Slot::glBindBuffer, callable),
            )
            .with_label("counter");

        assert_eq!(table.bound_in(Region::Context), 1);
        assert_eq!(table.bound_in(Region::Core), 1);
        assert_eq!(table.bound_in(Region::Extension), 1);
        assert_eq!(table.label(), "counter");
        assert!(format!("{:?}", table).contains("bound: 3"));
    }

    proptest! {
        #[test]
        fn derived_tables_stay_total(indices in proptest::collection::vec(0..Slot::COUNT, 0..64)) {
            let (_counter, callable) = counter();
            let overrides: Overrides = indices
                .iter()
                .filter_map(|i| Slot::from_index(*i))
                .map(|slot| (slot, callable.clone()))
                .collect();
            let table = null_table().derive(&overrides);

            for slot in Slot::ALL.iter().copied() {
                match overrides.get(slot) {
                    Some(expected) => prop_assert!(Arc::ptr_eq(table.callable(slot), expected)),
                    None => prop_assert!(table.is_null(slot)),
                }
            }
            prop_assert_eq!(table.bound_slots().count(), overrides.len());
        }
    }
}
