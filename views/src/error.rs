//! Errors surfaced by the views.
//!
//! A missing map key is not an error (lookups return [`Option`]), so the only
//! failure mode is indexing a slice view past its end.

use thiserror::Error;

/// An index was not in `0..len` for the slice it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index out of range: the len is {len} but the index is {index}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

impl IndexOutOfRange {
    /// Check `index` against `len`.
    pub fn check(index: usize, len: usize) -> Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_indices_below_len() {
        assert_eq!(IndexOutOfRange::check(0, 1), Ok(()));
        assert_eq!(IndexOutOfRange::check(3, 4), Ok(()));
    }

    #[test]
    fn check_rejects_len_and_beyond() {
        assert_eq!(
            IndexOutOfRange::check(4, 4),
            Err(IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            IndexOutOfRange::check(0, 0),
            Err(IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn message_names_len_and_index() {
        let err = IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "index out of range: the len is 3 but the index is 7"
        );
    }
}
