//! Shared, mutable object storage.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use super::Value;

/// Handle to an object's property map.
///
/// Objects have reference semantics: every clone of an `ObjectRef` sees
/// writes made through any other clone.
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct ObjectRef(Rc<RefCell<FxHashMap<String, Value>>>);

impl ObjectRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: FxHashMap<String, Value>) -> Self {
        ObjectRef(Rc::new(RefCell::new(map)))
    }

    /// Property value, if present.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Insert or overwrite a property, returning the previous value.
    pub fn insert(&self, key: String, value: Value) -> Option<Value> {
        self.0.borrow_mut().insert(key, value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Property names in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.borrow().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Snapshot of all properties, sorted by key.
    pub fn entries(&self) -> Vec<(String, Value)> {
        let mut entries: Vec<(String, Value)> = self
            .0
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        entries.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Whether both handles refer to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
