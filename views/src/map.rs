//! Read-only access to key-value maps.
//!
//! [`ReadonlyMap`] is the narrow, read-only face of a map: size, point lookup
//! and enumeration. [`MapView`] wraps any implementor (usually a borrow of a
//! [`HashMap`]) and hides everything else the wrapped handle can do.

use alloc::{boxed::Box, rc::Rc, sync::Arc, vec::Vec};
use core::{cell::RefCell, hash::Hash};

use crate::HashMap;

/// A key and its associated value in a [`ReadonlyMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapEntry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> MapEntry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for MapEntry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self { key, value }
    }
}

impl<K, V> From<MapEntry<K, V>> for (K, V) {
    fn from(entry: MapEntry<K, V>) -> Self {
        entry.into_pair()
    }
}

/// The read-only interface of a map.
///
/// Implementors alias their storage: a view reflects the contents of the
/// underlying map at the time of each call, not at the time it was created.
/// Values are returned by clone, so a reader can never reach into the map
/// and change it.
pub trait ReadonlyMap {
    type Key;
    type Value;

    /// Number of entries currently in the map.
    fn len(&self) -> usize;

    /// The value stored under `key`, if any.
    fn get(&self, key: &Self::Key) -> Option<Self::Value>;

    /// One entry per key currently present, in no particular order.
    fn entries(&self) -> Vec<MapEntry<Self::Key, Self::Value>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value stored under `key` and `true`, or the default value and
    /// `false` when the key is missing.
    fn lookup(&self, key: &Self::Key) -> (Self::Value, bool)
    where
        Self::Value: Default,
    {
        match self.get(key) {
            Some(value) => (value, true),
            None => (Self::Value::default(), false),
        }
    }

    /// A structural copy of the backing map, for implementors that have one.
    ///
    /// [`copy_map_mut`](crate::copy_map_mut) prefers this over rebuilding the
    /// map from [`entries`](Self::entries). Implementations that return
    /// `Some` must return exactly the contents `entries` would produce.
    fn bulk_export(&self) -> Option<HashMap<Self::Key, Self::Value>> {
        None
    }
}

impl<K, V> ReadonlyMap for HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn get(&self, key: &K) -> Option<V> {
        hashbrown::HashMap::get(self, key).cloned()
    }

    fn entries(&self) -> Vec<MapEntry<K, V>> {
        self.iter()
            .map(|(key, value)| MapEntry::new(key.clone(), value.clone()))
            .collect()
    }

    fn bulk_export(&self) -> Option<HashMap<K, V>> {
        Some(self.clone())
    }
}

impl<M: ReadonlyMap + ?Sized> ReadonlyMap for &M {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, key: &M::Key) -> Option<M::Value> {
        (**self).get(key)
    }

    fn entries(&self) -> Vec<MapEntry<M::Key, M::Value>> {
        (**self).entries()
    }

    fn bulk_export(&self) -> Option<HashMap<M::Key, M::Value>> {
        (**self).bulk_export()
    }
}

macro_rules! forward_readonly_map {
    ($($ptr:ident),* $(,)?) => {$(
        impl<M: ReadonlyMap + ?Sized> ReadonlyMap for $ptr<M> {
            type Key = M::Key;
            type Value = M::Value;

            fn len(&self) -> usize {
                (**self).len()
            }

            fn get(&self, key: &M::Key) -> Option<M::Value> {
                (**self).get(key)
            }

            fn entries(&self) -> Vec<MapEntry<M::Key, M::Value>> {
                (**self).entries()
            }

            fn bulk_export(&self) -> Option<HashMap<M::Key, M::Value>> {
                (**self).bulk_export()
            }
        }
    )*};
}

forward_readonly_map!(Box, Rc, Arc);

/// Interior mutability: the owner keeps the `RefCell` and mutates it through
/// `borrow_mut` while views hold a shared reference to it.
///
/// Every call takes a short-lived shared borrow, so calling into a view while
/// the owner holds a mutable borrow panics like any other `RefCell` conflict.
impl<M: ReadonlyMap + ?Sized> ReadonlyMap for RefCell<M> {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    fn get(&self, key: &M::Key) -> Option<M::Value> {
        self.borrow().get(key)
    }

    fn entries(&self) -> Vec<MapEntry<M::Key, M::Value>> {
        self.borrow().entries()
    }

    fn bulk_export(&self) -> Option<HashMap<M::Key, M::Value>> {
        self.borrow().bulk_export()
    }
}

/// An absent map reads as an empty one.
impl<M: ReadonlyMap> ReadonlyMap for Option<M> {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        self.as_ref().map_or(0, M::len)
    }

    fn get(&self, key: &M::Key) -> Option<M::Value> {
        self.as_ref()?.get(key)
    }

    fn entries(&self) -> Vec<MapEntry<M::Key, M::Value>> {
        self.as_ref().map(M::entries).unwrap_or_default()
    }

    fn bulk_export(&self) -> Option<HashMap<M::Key, M::Value>> {
        match self {
            Some(map) => map.bulk_export(),
            None => Some(HashMap::default()),
        }
    }
}

/// A read-only view over a map.
///
/// This is the default way to hand a map to a caller who must not modify it.
/// The view does not copy anything: wrap a `&HashMap` and the view reads the
/// map itself; wrap a `&RefCell<HashMap>` and later writes made through the
/// cell are visible through the view.
///
/// ```
/// use carbon_views::{HashMap, MapView, ReadonlyMap};
///
/// let planets = HashMap::from([("mercury", 1), ("venus", 2)]);
/// let view = MapView::new(&planets);
/// assert_eq!(view.get(&"venus"), Some(2));
/// assert_eq!(view.lookup(&"pluto"), (0, false));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MapView<M> {
    map: M,
}

impl<M> MapView<M> {
    pub fn new(map: M) -> Self {
        Self { map }
    }
}

impl<M: ReadonlyMap> ReadonlyMap for MapView<M> {
    type Key = M::Key;
    type Value = M::Value;

    fn len(&self) -> usize {
        self.map.len()
    }

    fn get(&self, key: &M::Key) -> Option<M::Value> {
        self.map.get(key)
    }

    fn entries(&self) -> Vec<MapEntry<M::Key, M::Value>> {
        self.map.entries()
    }

    fn bulk_export(&self) -> Option<HashMap<M::Key, M::Value>> {
        self.map.bulk_export()
    }
}

/// Wrap `map` in a [`MapView`]. Nothing is copied.
pub fn readonly_map<M: ReadonlyMap>(map: M) -> MapView<M> {
    MapView::new(map)
}
