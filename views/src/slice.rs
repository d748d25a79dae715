//! Read-only access to ordered sequences.
//!
//! [`ReadonlySlice`] exposes a length and indexed reads. There is no iterator:
//! callers walk `0..len()`.

use alloc::{boxed::Box, rc::Rc, sync::Arc, vec::Vec};
use core::cell::RefCell;

use crate::error::IndexOutOfRange;

/// The read-only interface of a slice.
///
/// Like [`ReadonlyMap`](crate::ReadonlyMap), implementors alias their storage
/// and hand out clones of the elements.
pub trait ReadonlySlice {
    type Item;

    /// Number of elements currently in the slice.
    fn len(&self) -> usize;

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Use [`try_get`](Self::try_get) to get
    /// an [`IndexOutOfRange`] error instead.
    fn get(&self, index: usize) -> Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The element at `index`, or an error if `index` is out of range.
    fn try_get(&self, index: usize) -> Result<Self::Item, IndexOutOfRange> {
        IndexOutOfRange::check(index, self.len())?;
        Ok(self.get(index))
    }

    /// A copy of the backing elements, for implementors stored contiguously.
    ///
    /// [`copy_slice_mut`](crate::copy_slice_mut) prefers this over calling
    /// [`get`](Self::get) once per index.
    fn bulk_export(&self) -> Option<Vec<Self::Item>> {
        None
    }
}

#[cold]
#[track_caller]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("{}", IndexOutOfRange { index, len })
}

impl<V: Clone> ReadonlySlice for [V] {
    type Item = V;

    fn len(&self) -> usize {
        <[V]>::len(self)
    }

    #[track_caller]
    fn get(&self, index: usize) -> V {
        match <[V]>::get(self, index) {
            Some(value) => value.clone(),
            None => out_of_range(index, <[V]>::len(self)),
        }
    }

    fn bulk_export(&self) -> Option<Vec<V>> {
        Some(self.to_vec())
    }
}

impl<V: Clone> ReadonlySlice for Vec<V> {
    type Item = V;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[track_caller]
    fn get(&self, index: usize) -> V {
        ReadonlySlice::get(self.as_slice(), index)
    }

    fn bulk_export(&self) -> Option<Vec<V>> {
        Some(self.clone())
    }
}

impl<V: Clone, const N: usize> ReadonlySlice for [V; N] {
    type Item = V;

    fn len(&self) -> usize {
        N
    }

    #[track_caller]
    fn get(&self, index: usize) -> V {
        ReadonlySlice::get(self.as_slice(), index)
    }

    fn bulk_export(&self) -> Option<Vec<V>> {
        Some(self.to_vec())
    }
}

impl<S: ReadonlySlice + ?Sized> ReadonlySlice for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    #[track_caller]
    fn get(&self, index: usize) -> S::Item {
        (**self).get(index)
    }

    fn bulk_export(&self) -> Option<Vec<S::Item>> {
        (**self).bulk_export()
    }
}

macro_rules! forward_readonly_slice {
    ($($ptr:ident),* $(,)?) => {$(
        impl<S: ReadonlySlice + ?Sized> ReadonlySlice for $ptr<S> {
            type Item = S::Item;

            fn len(&self) -> usize {
                (**self).len()
            }

            #[track_caller]
            fn get(&self, index: usize) -> S::Item {
                (**self).get(index)
            }

            fn bulk_export(&self) -> Option<Vec<S::Item>> {
                (**self).bulk_export()
            }
        }
    )*};
}

forward_readonly_slice!(Box, Rc, Arc);

/// See the `RefCell` impl of [`ReadonlyMap`](crate::ReadonlyMap).
impl<S: ReadonlySlice + ?Sized> ReadonlySlice for RefCell<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.borrow().len()
    }

    #[track_caller]
    fn get(&self, index: usize) -> S::Item {
        self.borrow().get(index)
    }

    fn bulk_export(&self) -> Option<Vec<S::Item>> {
        self.borrow().bulk_export()
    }
}

/// An absent slice reads as an empty one.
impl<S: ReadonlySlice> ReadonlySlice for Option<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.as_ref().map_or(0, S::len)
    }

    #[track_caller]
    fn get(&self, index: usize) -> S::Item {
        match self {
            Some(slice) => slice.get(index),
            None => out_of_range(index, 0),
        }
    }

    fn bulk_export(&self) -> Option<Vec<S::Item>> {
        match self {
            Some(slice) => slice.bulk_export(),
            None => Some(Vec::new()),
        }
    }
}

/// A read-only view over a slice.
///
/// ```
/// use carbon_views::{ReadonlySlice, SliceView};
///
/// let names = vec!["ada", "grace"];
/// let view = SliceView::new(&names);
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.get(1), "grace");
/// assert!(view.try_get(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SliceView<S> {
    slice: S,
}

impl<S> SliceView<S> {
    pub fn new(slice: S) -> Self {
        Self { slice }
    }
}

impl<S: ReadonlySlice> ReadonlySlice for SliceView<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.slice.len()
    }

    #[track_caller]
    fn get(&self, index: usize) -> S::Item {
        self.slice.get(index)
    }

    fn bulk_export(&self) -> Option<Vec<S::Item>> {
        self.slice.bulk_export()
    }
}

/// Wrap `slice` in a [`SliceView`]. Nothing is copied.
pub fn readonly_slice<S: ReadonlySlice>(slice: S) -> SliceView<S> {
    SliceView::new(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn native_slices_export_their_elements() {
        let words = vec!["zero", "one"];
        assert_eq!(words.bulk_export(), Some(vec!["zero", "one"]));
        assert_eq!(words.as_slice().bulk_export(), Some(vec!["zero", "one"]));
        assert_eq!(["a", "b", "c"].bulk_export(), Some(vec!["a", "b", "c"]));
    }

    #[test]
    fn array_reports_its_length() {
        let array = [1u8, 2, 3];
        assert_eq!(ReadonlySlice::len(&array), 3);
        assert_eq!(ReadonlySlice::get(&array, 2), 3);
    }

    #[test]
    fn absent_slice_is_empty() {
        let absent: Option<Vec<i32>> = None;
        assert_eq!(absent.len(), 0);
        assert!(absent.is_empty());
        assert_eq!(absent.try_get(0), Err(IndexOutOfRange { index: 0, len: 0 }));
        assert_eq!(absent.bulk_export(), Some(vec![]));
    }

    #[test]
    #[should_panic(expected = "index out of range: the len is 0 but the index is 0")]
    fn absent_slice_panics_on_get() {
        let absent: Option<&[i32]> = None;
        absent.get(0);
    }

    #[test]
    fn try_get_reports_the_length() {
        let view = readonly_slice(vec![10, 20]);
        assert_eq!(view.try_get(1), Ok(20));
        assert_eq!(view.try_get(2), Err(IndexOutOfRange { index: 2, len: 2 }));
    }

    #[test]
    fn refcell_view_sees_later_writes() {
        let cell = RefCell::new(vec!["zero"]);
        let view = SliceView::new(&cell);

        cell.borrow_mut().push("one");
        cell.borrow_mut()[0] = "nil";

        assert_eq!(view.len(), 2);
        assert_eq!(view.get(0), "nil");
        assert_eq!(view.get(1), "one");
    }

    #[test]
    fn smart_pointers_forward_bulk_export() {
        let boxed: Box<[i32]> = Box::new([1, 2]);
        let shared: Rc<[i32]> = Rc::from(vec![3, 4]);
        let atomic: Arc<Vec<i32>> = Arc::new(vec![5, 6]);

        assert_eq!(boxed.bulk_export(), Some(vec![1, 2]));
        assert_eq!(shared.bulk_export(), Some(vec![3, 4]));
        assert_eq!(atomic.bulk_export(), Some(vec![5, 6]));
    }
}
