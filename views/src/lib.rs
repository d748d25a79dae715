#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Read-only views over maps and slices.
//!
//! A component that owns a mutable collection can hand out a [`ReadonlyMap`]
//! or [`ReadonlySlice`] instead of the collection itself. The view borrows the
//! storage, so it always reflects the current contents, but it offers no way
//! to insert, remove or overwrite anything.
//!
//! When a caller needs isolation from future mutation, the [`copy`] helpers
//! produce an owned copy. Views backed directly by a native container take a
//! bulk-copy fast path; any other implementation is copied through its read
//! interface.
//!
//! ```
//! use carbon_views::{HashMap, ReadonlyMap, copy_map, readonly_map};
//!
//! let mut numbers = HashMap::new();
//! numbers.insert(1, "one");
//! numbers.insert(2, "two");
//!
//! let view = readonly_map(&numbers);
//! assert_eq!(view.len(), 2);
//! assert_eq!(view.get(&2), Some("two"));
//! assert_eq!(view.get(&3), None);
//!
//! let snapshot = copy_map(&view);
//! numbers.insert(3, "three");
//! assert_eq!(snapshot.len(), 2);
//! ```

extern crate alloc;

pub mod copy;
pub mod error;
pub mod map;
pub mod slice;

pub use copy::{copy_map, copy_map_mut, copy_slice, copy_slice_mut};
pub use error::IndexOutOfRange;
pub use map::{MapEntry, MapView, ReadonlyMap, readonly_map};
pub use slice::{ReadonlySlice, SliceView, readonly_slice};

/// The native map type: copies of a [`ReadonlyMap`] are produced as this type.
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
