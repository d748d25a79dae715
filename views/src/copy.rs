//! Owned copies of read-only views.
//!
//! A view aliases its source, so it changes whenever the source does. The
//! helpers here take a snapshot instead: the returned container shares nothing
//! with the source, and the source shares nothing with it.
//!
//! Each helper comes in two shapes. The `_mut` variant returns the native
//! container ([`HashMap`] or [`Vec`]) for callers that want to keep editing it.
//! The plain variant wraps that container in a view that owns it, for callers
//! that want the same read-only contract with isolated storage.
//!
//! # Example
//!
//! ```
//! use carbon_views::{ReadonlySlice, copy_slice, readonly_slice};
//!
//! let mut queue = vec!["a", "b"];
//! let snapshot = copy_slice(&readonly_slice(&queue));
//! queue[0] = "z";
//! assert_eq!(snapshot.get(0), "a");
//! ```
//!
//! Sources that expose `bulk_export` (every native container and every view
//! over one) are copied in one structural clone. Anything else is rebuilt
//! element by element through its read interface. The two paths produce equal
//! containers.

use alloc::vec::Vec;
use core::hash::Hash;

use tracing::trace;

use crate::{HashMap, MapView, ReadonlyMap, ReadonlySlice, SliceView};

/// Copy the contents of `map` into a new [`HashMap`].
pub fn copy_map_mut<M>(map: &M) -> HashMap<M::Key, M::Value>
where
    M: ReadonlyMap + ?Sized,
    M::Key: Eq + Hash,
{
    if let Some(copy) = map.bulk_export() {
        trace!(len = copy.len(), "copied map via bulk export");
        return copy;
    }

    let entries = map.entries();
    let mut copy = HashMap::with_capacity(entries.len());
    copy.extend(entries.into_iter().map(|entry| (entry.key, entry.value)));
    trace!(len = copy.len(), "copied map entry by entry");
    copy
}

/// Copy `map` into a [`MapView`] that owns its storage, so later changes to
/// the original are not visible through the result.
pub fn copy_map<M>(map: &M) -> MapView<HashMap<M::Key, M::Value>>
where
    M: ReadonlyMap + ?Sized,
    M::Key: Eq + Hash,
{
    MapView::new(copy_map_mut(map))
}

/// Copy the contents of `slice` into a new [`Vec`].
pub fn copy_slice_mut<S>(slice: &S) -> Vec<S::Item>
where
    S: ReadonlySlice + ?Sized,
{
    if let Some(copy) = slice.bulk_export() {
        trace!(len = copy.len(), "copied slice via bulk export");
        return copy;
    }

    let copy: Vec<S::Item> = (0..slice.len()).map(|index| slice.get(index)).collect();
    trace!(len = copy.len(), "copied slice element by element");
    copy
}

/// Copy `slice` into a [`SliceView`] that owns its storage.
pub fn copy_slice<S>(slice: &S) -> SliceView<Vec<S::Item>>
where
    S: ReadonlySlice + ?Sized,
{
    SliceView::new(copy_slice_mut(slice))
}
