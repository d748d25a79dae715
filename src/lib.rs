//! Carbon - read-only views over maps and slices
//!
//! # Overview
//!
//! A component that keeps mutable collections internally often needs to let
//! other code read them. Handing out `&mut` is too much; handing out a clone
//! on every call is wasteful. Carbon sits in between:
//!
//! - [`ReadonlyMap`] and [`ReadonlySlice`] are traits that expose reads only
//! - [`MapView`] and [`SliceView`] wrap a borrow of the real collection, so
//!   they always show its current contents
//! - [`copy_map`], [`copy_slice`] and their `_mut` variants take a snapshot
//!   when the caller needs isolation from later changes
//!
//! # Quick Start
//!
//! ```
//! use std::cell::RefCell;
//! use carbon::{HashMap, ReadonlyMap, copy_map, readonly_map};
//!
//! let scores = RefCell::new(HashMap::from([("ada", 3), ("grace", 5)]));
//! let live = readonly_map(&scores);
//! let frozen = copy_map(&live);
//!
//! scores.borrow_mut().insert("ada", 4);
//!
//! assert_eq!(live.get(&"ada"), Some(4));
//! assert_eq!(frozen.get(&"ada"), Some(3));
//! ```
//!
//! # Slices
//!
//! ```
//! use carbon::{ReadonlySlice, readonly_slice};
//!
//! let words = ["zero", "one", "two", "three"];
//! let view = readonly_slice(&words);
//! assert_eq!(view.len(), 4);
//! assert_eq!(view.get(2), "two");
//! assert!(view.try_get(4).is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export public API from carbon_views
pub use carbon_views::{
    HashMap, IndexOutOfRange, MapEntry, MapView, ReadonlyMap, ReadonlySlice, SliceView, copy,
    copy_map, copy_map_mut, copy_slice, copy_slice_mut, readonly_map, readonly_slice,
};
