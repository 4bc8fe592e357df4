//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Slice specifications and their normalization against a container length.

use crate::index::{AsIndex, signed_length};
use crate::result::{IndexError, IndexResult};
use std::iter::FusedIterator;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

/// A slice specification with optional start, stop and step.
///
/// Bounds may be negative (counting from the end) and may lie far outside the
/// container; they are clamped, never rejected, when the slice is normalized with
/// [`Slice::indices`]. The step defaults to `1` and must not be `0`.
///
/// # Examples
///
/// ```rust
/// use slicewise::Slice;
///
/// // Every other element, back to front.
/// let spec = Slice::FULL.with_step(-2);
/// let indices: Vec<usize> = spec.indices(5).unwrap().iter().collect();
/// assert_eq!(indices, vec![4, 2, 0]);
///
/// // Ranges convert directly.
/// let spec = Slice::from(1..-1);
/// assert_eq!(spec.indices(5).unwrap().iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    /// First designated position, or `None` for the natural start.
    pub start: Option<isize>,
    /// Position to stop before, or `None` for the natural end.
    pub stop: Option<isize>,
    /// Distance between designated positions, or `None` for `1`.
    pub step: Option<isize>,
}

impl Slice {
    /// The slice designating every element in order.
    pub const FULL: Slice = Slice {
        start: None,
        stop: None,
        step: None,
    };

    /// Creates a slice from optional bounds and step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::Slice;
    ///
    /// let spec = Slice::new(1, None, 2);
    /// assert_eq!(spec.start, Some(1));
    /// assert_eq!(spec.stop, None);
    /// assert_eq!(spec.step, Some(2));
    /// ```
    pub fn new(
        start: impl Into<Option<isize>>,
        stop: impl Into<Option<isize>>,
        step: impl Into<Option<isize>>,
    ) -> Self {
        Slice {
            start: start.into(),
            stop: stop.into(),
            step: step.into(),
        }
    }

    /// Returns a copy of this slice with the given step.
    #[must_use]
    pub fn with_step(self, step: isize) -> Self {
        Slice {
            step: Some(step),
            ..self
        }
    }

    /// Normalizes this slice against a container of `length` elements.
    ///
    /// Out-of-range bounds are clamped; the only failure is a zero step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::{IndexError, Slice};
    ///
    /// let indices = Slice::new(-1000, 1000, None).indices(5).unwrap();
    /// assert_eq!((indices.start(), indices.stop(), indices.step()), (0, 5, 1));
    ///
    /// let indices = Slice::FULL.with_step(-1).indices(5).unwrap();
    /// assert_eq!((indices.start(), indices.stop(), indices.step()), (4, -1, -1));
    ///
    /// assert_eq!(Slice::FULL.with_step(0).indices(5), Err(IndexError::ZeroStep));
    /// ```
    pub fn indices(&self, length: usize) -> IndexResult<SliceIndices> {
        let step = match self.step {
            None => 1,
            Some(0) => return Err(IndexError::ZeroStep),
            // Keep -step representable.
            Some(step) => step.max(-isize::MAX),
        };
        let len = signed_length(length);
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = match self.start {
            Some(start) => clamp(start),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(stop) => clamp(stop),
            None if step < 0 => lower,
            None => upper,
        };
        let count = if step > 0 {
            if start < stop {
                (stop - start - 1) / step + 1
            } else {
                0
            }
        } else if stop < start {
            (start - stop - 1) / -step + 1
        } else {
            0
        };
        Ok(SliceIndices {
            start,
            stop,
            step,
            len: count as usize,
        })
    }
}

impl From<Range<isize>> for Slice {
    fn from(range: Range<isize>) -> Self {
        Slice::new(range.start, range.end, None)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(range: RangeFrom<isize>) -> Self {
        Slice::new(range.start, None, None)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(range: RangeTo<isize>) -> Self {
        Slice::new(None, range.end, None)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::FULL
    }
}

/// A slice normalized against a specific container length.
///
/// Every index it yields lies in `0..length`. The `start` and `stop` values follow
/// the usual half-open convention for the sign of `step`; with a negative step the
/// `stop` may be `-1`, meaning "before the first element".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceIndices {
    start: isize,
    stop: isize,
    step: isize,
    len: usize,
}

impl SliceIndices {
    /// Returns the normalized start.
    pub fn start(&self) -> isize {
        self.start
    }

    /// Returns the normalized stop.
    pub fn stop(&self) -> isize {
        self.stop
    }

    /// Returns the step, never zero.
    pub fn step(&self) -> isize {
        self.step
    }

    /// Returns the number of designated indices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no index is designated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` for a step of exactly `1`, the only kind of slice whose
    /// assignment may change the container length.
    pub fn is_contiguous(&self) -> bool {
        self.step == 1
    }

    /// Returns an iterator over the designated indices in slice order.
    pub fn iter(&self) -> SliceIter {
        SliceIter {
            start: self.start,
            step: self.step,
            front: 0,
            back: self.len,
        }
    }
}

impl IntoIterator for SliceIndices {
    type Item = usize;
    type IntoIter = SliceIter;

    fn into_iter(self) -> SliceIter {
        self.iter()
    }
}

impl IntoIterator for &SliceIndices {
    type Item = usize;
    type IntoIter = SliceIter;

    fn into_iter(self) -> SliceIter {
        self.iter()
    }
}

/// Iterator over the indices designated by a [`SliceIndices`].
#[derive(Debug, Clone)]
pub struct SliceIter {
    start: isize,
    step: isize,
    front: usize,
    back: usize,
}

impl SliceIter {
    // Only computed for positions below the designated count, so it stays in bounds.
    fn offset_at(&self, k: usize) -> usize {
        (self.start + k as isize * self.step) as usize
    }
}

impl Iterator for SliceIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front < self.back {
            let index = self.offset_at(self.front);
            self.front += 1;
            Some(index)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for SliceIter {
    fn next_back(&mut self) -> Option<usize> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.offset_at(self.back))
        } else {
            None
        }
    }
}

impl ExactSizeIterator for SliceIter {}

impl FusedIterator for SliceIter {}

/// A normalized request key: a single index or a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subscript {
    /// A single, possibly negative, index.
    Index(isize),
    /// A slice specification.
    Slice(Slice),
}

/// Conversion of a caller supplied key into a [`Subscript`].
///
/// Implemented for every primitive integer, for `f32`/`f64` (always a type error),
/// for [`Slice`] and for the `isize` range types `a..b`, `a..`, `..b` and `..`.
pub trait IntoSubscript {
    /// Converts `self`, failing with [`IndexError::TypeMismatch`] for non-integer keys.
    fn into_subscript(self) -> IndexResult<Subscript>;
}

macro_rules! impl_into_subscript_index {
    ($($ty:ty),*) => {
        $(
            impl IntoSubscript for $ty {
                fn into_subscript(self) -> IndexResult<Subscript> {
                    self.as_index().map(Subscript::Index)
                }
            }
        )*
    };
}

impl_into_subscript_index!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

macro_rules! impl_into_subscript_slice {
    ($($ty:ty),*) => {
        $(
            impl IntoSubscript for $ty {
                fn into_subscript(self) -> IndexResult<Subscript> {
                    Ok(Subscript::Slice(self.into()))
                }
            }
        )*
    };
}

impl_into_subscript_slice!(
    Slice,
    Range<isize>,
    RangeFrom<isize>,
    RangeTo<isize>,
    RangeFull
);

impl IntoSubscript for Subscript {
    fn into_subscript(self) -> IndexResult<Subscript> {
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn walk(spec: Slice, length: usize) -> Vec<usize> {
        spec.indices(length).unwrap().iter().collect()
    }

    #[test]
    fn test_defaults() {
        let indices = Slice::FULL.indices(5).unwrap();
        assert_eq!(indices.start(), 0);
        assert_eq!(indices.stop(), 5);
        assert_eq!(indices.step(), 1);
        assert_eq!(indices.len(), 5);
        assert!(indices.is_contiguous());
    }

    #[test]
    fn test_negative_step_defaults() {
        let indices = Slice::FULL.with_step(-1).indices(5).unwrap();
        assert_eq!((indices.start(), indices.stop()), (4, -1));
        assert_eq!(walk(Slice::FULL.with_step(-1), 5), vec![4, 3, 2, 1, 0]);
        assert!(!indices.is_contiguous());
    }

    #[test]
    fn test_zero_step() {
        assert_eq!(Slice::new(0, 10, 0).indices(20), Err(IndexError::ZeroStep));
        assert_eq!(Slice::new(0, 10, 0).indices(0), Err(IndexError::ZeroStep));
    }

    #[test]
    fn test_contiguous_slices() {
        assert_eq!(walk(Slice::from(0..0), 5), Vec::<usize>::new());
        assert_eq!(walk(Slice::from(1..2), 5), vec![1]);
        assert_eq!(walk(Slice::from(-2..-1), 5), vec![3]);
        assert_eq!(walk(Slice::from(-1000..1000), 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(walk(Slice::from(1000..-1000), 5), Vec::<usize>::new());
        assert_eq!(walk(Slice::from(1..), 5), vec![1, 2, 3, 4]);
        assert_eq!(walk(Slice::from(..3), 5), vec![0, 1, 2]);
        assert_eq!(walk(Slice::from(..), 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_extended_slices() {
        assert_eq!(walk(Slice::FULL.with_step(2), 5), vec![0, 2, 4]);
        assert_eq!(walk(Slice::new(1, None, 2), 5), vec![1, 3]);
        assert_eq!(walk(Slice::FULL.with_step(-2), 5), vec![4, 2, 0]);
        assert_eq!(walk(Slice::new(3, None, -2), 5), vec![3, 1]);
        assert_eq!(walk(Slice::new(3, 3, -2), 5), Vec::<usize>::new());
        assert_eq!(walk(Slice::new(3, 2, -2), 5), vec![3]);
        assert_eq!(walk(Slice::new(3, 1, -2), 5), vec![3]);
        assert_eq!(walk(Slice::new(3, 0, -2), 5), vec![3, 1]);
        assert_eq!(walk(Slice::FULL.with_step(-100), 5), vec![4]);
        assert_eq!(walk(Slice::new(100, -100, None), 5), Vec::<usize>::new());
        assert_eq!(walk(Slice::new(-100, 100, None), 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(walk(Slice::new(100, -100, -1), 5), vec![4, 3, 2, 1, 0]);
        assert_eq!(walk(Slice::new(-100, 100, -1), 5), Vec::<usize>::new());
        assert_eq!(walk(Slice::new(-100, 100, 2), 5), vec![0, 2, 4]);
    }

    #[test]
    fn test_extreme_bounds() {
        assert_eq!(walk(Slice::new(isize::MIN, 3, None), 5), vec![0, 1, 2]);
        assert_eq!(walk(Slice::new(3, isize::MAX, None), 5), vec![3, 4]);
        assert_eq!(walk(Slice::new(3, None, isize::MAX), 5), vec![3]);
        assert_eq!(walk(Slice::new(None, None, isize::MIN), 5), vec![4]);
        assert_eq!(walk(Slice::new(9, None, 1isize << 40), 10), vec![9]);
    }

    #[test]
    fn test_empty_container() {
        assert!(Slice::FULL.indices(0).unwrap().is_empty());
        assert!(Slice::FULL.with_step(-1).indices(0).unwrap().is_empty());
        assert!(Slice::new(-5, 5, 3).indices(0).unwrap().is_empty());
    }

    #[test]
    fn test_double_ended() {
        let indices = Slice::new(1, None, 3).indices(10).unwrap();
        assert_eq!(indices.iter().rev().collect::<Vec<_>>(), vec![7, 4, 1]);
        let mut iter = indices.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(7));
        assert_eq!(iter.next(), Some(4));
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_negative_step_reversed() {
        let indices = Slice::new(8, 1, -3).indices(10).unwrap();
        assert_eq!(indices.iter().collect::<Vec<_>>(), vec![8, 5, 2]);
        assert_eq!(indices.iter().rev().collect::<Vec<_>>(), vec![2, 5, 8]);
        assert_eq!(indices.iter().rev().len(), indices.len());

        let full = Slice::FULL.with_step(isize::MIN).indices(5).unwrap();
        assert_eq!(full.iter().rev().collect::<Vec<_>>(), vec![4]);
        assert_eq!(walk(Slice::FULL.with_step(-1), 1), vec![0]);
        assert!(Slice::FULL.with_step(-2).indices(0).unwrap().iter().rev().next().is_none());
    }

    #[test]
    fn test_subscripts() {
        assert_eq!(3i32.into_subscript(), Ok(Subscript::Index(3)));
        assert_eq!((-1i64).into_subscript(), Ok(Subscript::Index(-1)));
        assert_eq!(
            (1isize..3).into_subscript(),
            Ok(Subscript::Slice(Slice::new(1, 3, None)))
        );
        assert_eq!((..).into_subscript(), Ok(Subscript::Slice(Slice::FULL)));
        assert!(0.5f32.into_subscript().unwrap_err().is_type_mismatch());
    }

    proptest! {
        #[test]
        fn prop_walk_stays_in_bounds(
            length in 0usize..64,
            start in proptest::option::of(-100isize..100),
            stop in proptest::option::of(-100isize..100),
            step in (-10isize..10).prop_filter("non-zero", |s| *s != 0),
        ) {
            let indices = Slice::new(start, stop, step).indices(length).unwrap();
            let walked: Vec<usize> = indices.iter().collect();
            prop_assert_eq!(walked.len(), indices.len());
            prop_assert!(walked.iter().all(|&i| i < length));
            // Strictly monotonic in the direction of the step.
            for pair in walked.windows(2) {
                if step > 0 {
                    prop_assert!(pair[0] < pair[1]);
                } else {
                    prop_assert!(pair[0] > pair[1]);
                }
            }
        }

        #[test]
        fn prop_walk_matches_naive_model(
            length in 0usize..32,
            start in proptest::option::of(-40isize..40),
            stop in proptest::option::of(-40isize..40),
            step in (-6isize..6).prop_filter("non-zero", |s| *s != 0),
        ) {
            // Keep every candidate position that lies between the clamped bounds.
            let len = length as isize;
            let resolve = |bound: isize, low: isize, high: isize| {
                if bound < 0 { (bound + len).max(low) } else { bound.min(high) }
            };
            let mut expected = Vec::new();
            if step > 0 {
                let begin = start.map_or(0, |s| resolve(s, 0, len));
                let end = stop.map_or(len, |s| resolve(s, 0, len));
                let mut i = begin;
                while i < end {
                    expected.push(i as usize);
                    i += step;
                }
            } else {
                let begin = start.map_or(len - 1, |s| resolve(s, -1, len - 1));
                let end = stop.map_or(-1, |s| resolve(s, -1, len - 1));
                let mut i = begin;
                while i > end {
                    expected.push(i as usize);
                    i += step;
                }
            }
            prop_assert_eq!(walk(Slice::new(start, stop, step), length), expected);
        }
    }
}
