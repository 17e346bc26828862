use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

// ── State ─────────────────────────────────────────────────────────────────

/// Handle to a value retained across compositions.
///
/// Handles are cheap to clone and all clones point at the same slot. Writing
/// through any of them flags the owning [`StateStore`] as invalidated, which
/// makes the scene recompose before it paints.
pub struct State<T> {
    value:       Rc<RefCell<T>>,
    invalidated: Rc<Cell<bool>>,
}

impl<T> State<T> {
    /// Returns a copy of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Borrows the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replaces the value and invalidates the composition.
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
        self.invalidated.set(true);
    }

    /// Mutates the value in place and invalidates the composition.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.invalidated.set(true);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self { value: Rc::clone(&self.value), invalidated: Rc::clone(&self.invalidated) }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.value.borrow()).finish()
    }
}

// ── StateStore ────────────────────────────────────────────────────────────

/// Keyed storage for remembered values.
///
/// Each slot holds an `Rc<RefCell<T>>` behind `dyn Any`. A slot lives as long
/// as every composition keeps asking for its key; a composition that does not
/// touch a key drops the slot when it ends.
#[derive(Default)]
pub struct StateStore {
    slots:       HashMap<String, Box<dyn Any>>,
    invalidated: Rc<Cell<bool>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one composition.
    ///
    /// `f` receives a [`Compose`] handle for remembering state. Slots it did
    /// not touch are forgotten afterwards.
    pub fn compose<R>(&mut self, f: impl FnOnce(&mut Compose<'_>) -> R) -> R {
        let mut cx = Compose { store: self, touched: HashSet::new() };
        let out = f(&mut cx);
        let touched = cx.touched;

        let before = self.slots.len();
        self.slots.retain(|key, _| touched.contains(key));
        let forgotten = before - self.slots.len();
        if forgotten > 0 {
            log::trace!("forgot {forgotten} state slot(s)");
        }
        out
    }

    /// Returns `true` if any state was written since the last call, and clears the flag.
    pub fn take_invalidated(&self) -> bool {
        self.invalidated.replace(false)
    }

    pub fn is_invalidated(&self) -> bool {
        self.invalidated.get()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn slot<T: 'static>(&mut self, key: &str, init: impl FnOnce() -> T) -> State<T> {
        let existing = self
            .slots
            .get(key)
            .map(|slot| slot.downcast_ref::<Rc<RefCell<T>>>().cloned());

        let value = match existing {
            Some(Some(value)) => value,
            Some(None) => {
                log::warn!(
                    "state '{key}' remembered as {}; replacing the stored value",
                    std::any::type_name::<T>()
                );
                self.insert(key, init())
            }
            None => self.insert(key, init()),
        };

        State { value, invalidated: Rc::clone(&self.invalidated) }
    }

    fn insert<T: 'static>(&mut self, key: &str, value: T) -> Rc<RefCell<T>> {
        let value = Rc::new(RefCell::new(value));
        self.slots.insert(key.to_string(), Box::new(Rc::clone(&value)));
        value
    }
}

impl fmt::Debug for StateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateStore")
            .field("keys", &self.slots.keys().collect::<Vec<_>>())
            .field("invalidated", &self.invalidated.get())
            .finish()
    }
}

// ── Compose ───────────────────────────────────────────────────────────────

/// Per-composition handle passed to the root composable.
pub struct Compose<'a> {
    store:   &'a mut StateStore,
    touched: HashSet<String>,
}

impl Compose<'_> {
    /// Returns the state remembered under `key`, creating it with `init` the
    /// first time the key is seen.
    ///
    /// `init` is not called again while the key stays in the composition.
    pub fn remember<T: 'static>(&mut self, key: &str, init: impl FnOnce() -> T) -> State<T> {
        if !self.touched.insert(key.to_string()) {
            log::warn!("state '{key}' remembered twice in one composition");
        }
        self.store.slot(key, init)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_runs_init_once() {
        let mut store = StateStore::new();
        let mut inits = 0;

        for _ in 0..3 {
            let v = store.compose(|cx| {
                cx.remember("n", || {
                    inits += 1;
                    7
                })
                .get()
            });
            assert_eq!(v, 7);
        }
        assert_eq!(inits, 1);
    }

    #[test]
    fn writes_survive_recomposition() {
        let mut store = StateStore::new();
        let s = store.compose(|cx| cx.remember("n", || 0u32));
        s.set(5);

        let again = store.compose(|cx| cx.remember("n", || 0u32));
        assert_eq!(again.get(), 5);
    }

    #[test]
    fn set_and_update_invalidate() {
        let mut store = StateStore::new();
        let s = store.compose(|cx| cx.remember("n", || 1));
        assert!(!store.take_invalidated());

        s.set(2);
        assert!(store.is_invalidated());
        assert!(store.take_invalidated());
        assert!(!store.take_invalidated());

        s.update(|n| *n += 1);
        assert!(store.take_invalidated());
        assert_eq!(s.get(), 3);
    }

    #[test]
    fn remember_alone_does_not_invalidate() {
        let mut store = StateStore::new();
        store.compose(|cx| {
            cx.remember("a", || 1);
        });
        assert!(!store.is_invalidated());
    }

    #[test]
    fn untouched_keys_are_forgotten() {
        let mut store = StateStore::new();
        store.compose(|cx| {
            cx.remember("a", || 1).set(10);
            cx.remember("b", || 2);
        });
        assert_eq!(store.len(), 2);

        store.compose(|cx| {
            cx.remember("b", || 2);
        });
        assert!(!store.contains("a"));
        assert!(store.contains("b"));

        // Re-entering the composition starts from init again.
        let a = store.compose(|cx| cx.remember("a", || 1));
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn type_mismatch_replaces_slot() {
        let mut store = StateStore::new();
        store.compose(|cx| cx.remember("k", || 3u8)).set(9);

        let s = store.compose(|cx| cx.remember("k", || String::from("fresh")));
        assert_eq!(s.get(), "fresh");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clones_share_the_slot() {
        let mut store = StateStore::new();
        let a = store.compose(|cx| cx.remember("k", Vec::<i32>::new));
        let b = a.clone();
        b.update(|v| v.push(4));
        assert_eq!(a.with(|v| v.len()), 1);
    }
}
