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

//! Index and slice assignment, deletion and insertion over a [`MutableSequence`].
//!
//! Composite operations issue several primitive calls in a row. There is no rollback:
//! if a primitive panics part way through, the container keeps whatever the completed
//! calls produced.

use crate::index::{AsIndex, clamp_index, normalize_index};
use crate::primitives::MutableSequence;
use crate::result::{IndexError, IndexResult};
use crate::sequence::SequenceAdapter;
use crate::slice::{IntoSubscript, Slice, Subscript};

/// The value side of [`SequenceAdapter::set`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Assign<T> {
    /// A single element, assigned to an index.
    Element(T),
    /// An ordered run of elements, assigned to a slice.
    Elements(Vec<T>),
}

impl<T> From<Vec<T>> for Assign<T> {
    fn from(elements: Vec<T>) -> Self {
        Assign::Elements(elements)
    }
}

impl<S: MutableSequence, B> SequenceAdapter<S, B> {
    /// Assigns to the index or slice designated by `key`.
    ///
    /// An index takes [`Assign::Element`] and a slice takes [`Assign::Elements`]; any
    /// other pairing is an [`IndexError::TypeMismatch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::{Assign, SequenceAdapter};
    ///
    /// let mut seq = SequenceAdapter::new(vec![10, 20, 30, 40, 50]);
    /// seq.set(1..4, Assign::Elements(vec![99])).unwrap();
    /// seq.set(-1, Assign::Element(0)).unwrap();
    /// assert_eq!(seq.inner(), &vec![10, 99, 0]);
    /// assert!(seq.set(0..1, Assign::Element(1)).is_err());
    /// ```
    pub fn set(&mut self, key: impl IntoSubscript, value: Assign<S::Item>) -> IndexResult<()> {
        match (key.into_subscript()?, value) {
            (Subscript::Index(index), Assign::Element(value)) => self.set_item(index, value),
            (Subscript::Slice(spec), Assign::Elements(values)) => self.set_slice(spec, values),
            (Subscript::Slice(_), Assign::Element(_)) => {
                Err(IndexError::type_mismatch("must assign iterable to slice"))
            }
            (Subscript::Index(_), Assign::Elements(_)) => Err(IndexError::type_mismatch(
                "cannot assign a sequence to a single index",
            )),
        }
    }

    /// Replaces the element at `index`, counting from the end if negative.
    pub fn set_item(&mut self, index: impl AsIndex, value: S::Item) -> IndexResult<()> {
        let index = normalize_index(index, self.len())?;
        self.inner.set_at(index, value);
        Ok(())
    }

    /// Replaces the elements designated by `spec` with `values`.
    ///
    /// `values` is collected once before the container is touched. A contiguous slice
    /// (step `1`) may be replaced by any number of elements, growing or shrinking the
    /// container. An extended slice must receive exactly as many elements as it
    /// designates, otherwise [`IndexError::ExtendedSliceSize`] is returned and nothing
    /// changes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::{IndexError, SequenceAdapter, Slice};
    ///
    /// let mut seq = SequenceAdapter::new(vec![10, 20, 30, 40, 50]);
    /// seq.set_slice(Slice::new(0, 5, 2), [1, 2, 3]).unwrap();
    /// assert_eq!(seq.inner(), &vec![1, 20, 2, 40, 3]);
    ///
    /// assert_eq!(
    ///     seq.set_slice(Slice::FULL.with_step(2), [7]),
    ///     Err(IndexError::ExtendedSliceSize { actual: 1, expected: 3 }),
    /// );
    /// ```
    pub fn set_slice<I>(&mut self, spec: impl Into<Slice>, values: I) -> IndexResult<()>
    where
        I: IntoIterator<Item = S::Item>,
    {
        let spec = spec.into();
        let indices = spec.indices(self.len())?;
        let values: Vec<S::Item> = values.into_iter().collect();

        if !indices.is_contiguous() {
            if values.len() != indices.len() {
                return Err(IndexError::ExtendedSliceSize {
                    actual: values.len(),
                    expected: indices.len(),
                });
            }
            log::trace!("assigning {} elements to extended slice {spec:?}", values.len());
            for (index, value) in indices.iter().zip(values) {
                self.inner.set_at(index, value);
            }
        } else if values.len() == indices.len() {
            for (index, value) in indices.iter().zip(values) {
                self.inner.set_at(index, value);
            }
        } else {
            log::trace!(
                "replacing {} elements with {} at slice {spec:?}",
                indices.len(),
                values.len()
            );
            // Highest first, so pending offsets do not shift.
            for index in indices.iter().rev() {
                self.inner.delete_at(index);
            }
            let start = indices.start() as usize;
            for (offset, value) in values.into_iter().enumerate() {
                self.inner.insert_at(start + offset, value);
            }
        }
        Ok(())
    }

    /// Assigns the container's own elements to the slice designated by `spec`.
    ///
    /// The elements are copied out before any mutation, so growing the container while
    /// reading from it is not an issue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::SequenceAdapter;
    ///
    /// let mut seq = SequenceAdapter::new(vec![1, 2, 3, 4, 5]);
    /// seq.assign_from_self(..-1).unwrap();
    /// assert_eq!(seq.inner(), &vec![1, 2, 3, 4, 5, 5]);
    /// ```
    pub fn assign_from_self(&mut self, spec: impl Into<Slice>) -> IndexResult<()> {
        let snapshot: Vec<S::Item> = self.iter().collect();
        self.set_slice(spec, snapshot)
    }

    /// Deletes the element or slice designated by `key`.
    pub fn delete(&mut self, key: impl IntoSubscript) -> IndexResult<()> {
        match key.into_subscript()? {
            Subscript::Index(index) => self.delete_item(index).map(drop),
            Subscript::Slice(spec) => self.delete_slice(spec),
        }
    }

    /// Removes and returns the element at `index`, counting from the end if negative.
    pub fn delete_item(&mut self, index: impl AsIndex) -> IndexResult<S::Item> {
        let index = normalize_index(index, self.len())?;
        Ok(self.inner.delete_at(index))
    }

    /// Deletes every element designated by `spec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::{SequenceAdapter, Slice};
    ///
    /// let mut seq = SequenceAdapter::new(vec![10, 20, 30, 40, 50]);
    /// seq.delete_slice(Slice::new(0, 5, 2)).unwrap();
    /// assert_eq!(seq.inner(), &vec![20, 40]);
    /// ```
    pub fn delete_slice(&mut self, spec: impl Into<Slice>) -> IndexResult<()> {
        let spec = spec.into();
        let indices = spec.indices(self.len())?;
        log::trace!("deleting {} elements designated by {spec:?}", indices.len());
        // A negative step already walks downwards.
        if indices.step() < 0 {
            for index in indices.iter() {
                self.inner.delete_at(index);
            }
        } else {
            for index in indices.iter().rev() {
                self.inner.delete_at(index);
            }
        }
        Ok(())
    }

    /// Inserts `value` before `index`.
    ///
    /// Negative indices count from the end; positions past either end are clamped, so
    /// inserting at `len()` or beyond appends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::SequenceAdapter;
    ///
    /// let mut seq = SequenceAdapter::new(vec![1, 2]);
    /// seq.insert(-1, 9).unwrap();
    /// seq.insert(100, 3).unwrap();
    /// seq.insert(-100, 0).unwrap();
    /// assert_eq!(seq.inner(), &vec![0, 1, 9, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: impl AsIndex, value: S::Item) -> IndexResult<()> {
        let index = clamp_index(index, self.len())?;
        self.inner.insert_at(index, value);
        Ok(())
    }

    /// Appends `value` to the end.
    pub fn append(&mut self, value: S::Item) {
        let end = self.len();
        self.inner.insert_at(end, value);
    }

    /// Appends every element of `values` in order.
    pub fn extend<I: IntoIterator<Item = S::Item>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> IndexResult<S::Item> {
        self.delete_item(-1)
    }

    /// Removes and returns the element at `index`, counting from the end if negative.
    pub fn pop_at(&mut self, index: impl AsIndex) -> IndexResult<S::Item> {
        self.delete_item(index)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        for index in (0..self.len()).rev() {
            self.inner.delete_at(index);
        }
    }

    /// Reverses the elements in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        for low in 0..len / 2 {
            let high = len - 1 - low;
            let low_value = self.inner.get_at(low);
            let high_value = self.inner.get_at(high);
            self.inner.set_at(low, high_value);
            self.inner.set_at(high, low_value);
        }
    }
}
