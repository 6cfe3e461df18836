//! Read-only sequences that can be reduced one sub-range at a time.

use std::ops::Range;

/// An ordered, immutable sequence of items addressed by position.
///
/// Positions run over `0..len()`. Threads only ever hold shared references to
/// a sequence, hence the `Sync` bound.
pub trait Sequence: Sync {
    type Item;

    /// Number of items between the beginning and the end of the sequence.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits the items at the given positions in order, stopping at the
    /// first error.
    ///
    /// # Panics
    ///
    /// Panics if `range` isn't included in `0..len()`.
    fn try_visit<X, F>(&self, range: Range<usize>, visit: F) -> Result<(), X>
    where
        F: FnMut(&Self::Item) -> Result<(), X>;
}

impl<E: Sync> Sequence for [E] {
    type Item = E;

    fn len(&self) -> usize {
        <[E]>::len(self)
    }

    fn try_visit<X, F>(&self, range: Range<usize>, visit: F) -> Result<(), X>
    where
        F: FnMut(&E) -> Result<(), X>,
    {
        self[range].iter().try_for_each(visit)
    }
}

impl<E: Sync> Sequence for Vec<E> {
    type Item = E;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn try_visit<X, F>(&self, range: Range<usize>, visit: F) -> Result<(), X>
    where
        F: FnMut(&E) -> Result<(), X>,
    {
        self[..].try_visit(range, visit)
    }
}

// integer ranges are reduced without materializing their items
macro_rules! integer_range_sequence {
    ( $($t:ty),* ) => {
        $(
            impl Sequence for Range<$t> {
                type Item = $t;

                fn len(&self) -> usize {
                    if self.start < self.end {
                        self.end.abs_diff(self.start) as usize
                    } else {
                        0
                    }
                }

                fn try_visit<X, F>(&self, range: Range<usize>, mut visit: F) -> Result<(), X>
                where
                    F: FnMut(&$t) -> Result<(), X>,
                {
                    assert!(range.start <= range.end && range.end <= Sequence::len(self), "range out of bounds");
                    // the offset fits in the range, so truncating and wrapping is exact
                    let mut item: $t = self.start.wrapping_add(range.start as $t);
                    for _ in range {
                        visit(&item)?;
                        item = item.wrapping_add(1);
                    }
                    Ok(())
                }
            }
        )*
    };
}

integer_range_sequence!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use crate::sequence::Sequence;

    fn collect<S: Sequence + ?Sized>(seq: &S, range: std::ops::Range<usize>) -> Vec<S::Item>
    where
        S::Item: Copy,
    {
        let mut items = Vec::new();
        seq.try_visit::<(), _>(range, |item| {
            items.push(*item);
            Ok(())
        })
        .unwrap();
        items
    }

    #[test]
    fn test_slice_sequence() {
        let arr = [5, 6, 7, 8, 9];
        assert_eq!(Sequence::len(&arr[..]), 5);
        assert_eq!(collect(&arr[..], 1..4), vec![6, 7, 8]);
        assert_eq!(collect(&arr[..], 2..2), Vec::<i32>::new());

        let vec = arr.to_vec();
        assert_eq!(collect(&vec, 3..5), vec![8, 9]);
    }

    #[test]
    fn test_integer_range_sequence() {
        let range = 10u64..20;
        assert_eq!(Sequence::len(&range), 10);
        assert_eq!(collect(&range, 0..3), vec![10, 11, 12]);
        assert_eq!(collect(&range, 7..10), vec![17, 18, 19]);

        let range = -3i32..2;
        assert_eq!(Sequence::len(&range), 5);
        assert_eq!(collect(&range, 0..5), vec![-3, -2, -1, 0, 1]);

        // reversed ranges are empty
        #[allow(clippy::reversed_empty_ranges)]
        let range = 5u8..2;
        assert!(Sequence::is_empty(&range));
    }

    // the last item of a type's range must not overflow on visit
    #[test]
    fn test_integer_range_upper_edge() {
        let range = 250u8..255;
        assert_eq!(collect(&range, 0..5), vec![250, 251, 252, 253, 254]);
    }

    #[test]
    #[should_panic]
    fn test_slice_visit_out_of_bounds() {
        let arr = [1, 2, 3];
        let _ = arr[..].try_visit::<(), _>(2..4, |_| Ok(()));
    }

    #[test]
    #[should_panic(expected = "range out of bounds")]
    fn test_integer_range_visit_out_of_bounds() {
        let _ = (0u32..3).try_visit::<(), _>(1..5, |_| Ok(()));
    }

    #[test]
    fn test_visit_stops_at_first_error() {
        let arr = [1, 2, 3, 4];
        let mut seen = Vec::new();
        let result = arr[..].try_visit(0..4, |item| {
            if *item == 3 {
                return Err("three");
            }
            seen.push(*item);
            Ok(())
        });
        assert_eq!(result, Err("three"));
        assert_eq!(seen, vec![1, 2]);
    }
}
