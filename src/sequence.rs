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

//! Read access to a [`Sequence`] through indices and slices.

use crate::index::{AsIndex, normalize_index};
use crate::primitives::Sequence;
use crate::result::IndexResult;
use crate::slice::{IntoSubscript, Slice, Subscript};

/// Builds the container returned by a slice read from the selected elements.
///
/// The builder is chosen when the adapter is created. [`SameType`] rebuilds the wrapped
/// container type, [`PlainVec`] returns a `Vec` for containers that cannot be collected
/// into, and [`FnBuilder`] runs an arbitrary function.
pub trait SliceBuilder<S: Sequence + ?Sized> {
    /// The container produced by a slice read.
    type Output;

    /// Builds a container holding `items` in order.
    fn build(&self, items: Vec<S::Item>) -> Self::Output;
}

/// Builds slice results of the same type as the wrapped container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SameType;

impl<S> SliceBuilder<S> for SameType
where
    S: Sequence + FromIterator<<S as Sequence>::Item>,
{
    type Output = S;

    fn build(&self, items: Vec<S::Item>) -> S {
        items.into_iter().collect()
    }
}

/// Builds slice results as a plain `Vec`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainVec;

impl<S: Sequence + ?Sized> SliceBuilder<S> for PlainVec {
    type Output = Vec<S::Item>;

    fn build(&self, items: Vec<S::Item>) -> Vec<S::Item> {
        items
    }
}

/// Builds slice results with a function.
///
/// # Examples
///
/// ```rust
/// use slicewise::{FnBuilder, SequenceAdapter};
///
/// let seq = SequenceAdapter::with_builder(vec![3, 1, 2], FnBuilder(|items: Vec<i32>| {
///     items.iter().sum::<i32>()
/// }));
/// assert_eq!(seq.slice(1..).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnBuilder<F>(pub F);

impl<S, F, O> SliceBuilder<S> for FnBuilder<F>
where
    S: Sequence + ?Sized,
    F: Fn(Vec<S::Item>) -> O,
{
    type Output = O;

    fn build(&self, items: Vec<S::Item>) -> O {
        (self.0)(items)
    }
}

/// The result of [`SequenceAdapter::get`]: one element or a built slice.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection<T, C> {
    /// The element designated by an index.
    Element(T),
    /// The container built from the elements designated by a slice.
    Slice(C),
}

impl<T, C> Selection<T, C> {
    /// Returns the element, if an index was requested.
    pub fn into_element(self) -> Option<T> {
        match self {
            Selection::Element(element) => Some(element),
            Selection::Slice(_) => None,
        }
    }

    /// Returns the built slice, if a slice was requested.
    pub fn into_slice(self) -> Option<C> {
        match self {
            Selection::Element(_) => None,
            Selection::Slice(slice) => Some(slice),
        }
    }
}

/// Wraps a [`Sequence`] and answers index and slice requests against it.
///
/// The wrapped container only has to report its length and read an element at an
/// in-bounds offset; the adapter supplies negative indices, range checks, clamped
/// and stepped slices, and sub-container construction. Mutating operations are
/// available when the container is a [`MutableSequence`](crate::MutableSequence).
///
/// # Examples
///
/// ```rust
/// use slicewise::{Slice, SequenceAdapter};
///
/// let seq = SequenceAdapter::new(vec![0, 1, 2, 3, 4]);
/// assert_eq!(seq.item(-1).unwrap(), 4);
/// assert_eq!(seq.slice(1..-1).unwrap(), vec![1, 2, 3]);
/// assert_eq!(seq.slice(Slice::FULL.with_step(-2)).unwrap(), vec![4, 2, 0]);
/// assert!(seq.item(5).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceAdapter<S, B = SameType> {
    pub(crate) inner: S,
    builder: B,
}

impl<S: Sequence> SequenceAdapter<S> {
    /// Wraps `inner`, building slice results of the same type.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            builder: SameType,
        }
    }
}

impl<S: Sequence, B> SequenceAdapter<S, B> {
    /// Wraps `inner`, building slice results with `builder`.
    pub fn with_builder(inner: S, builder: B) -> Self {
        Self { inner, builder }
    }

    /// Returns the number of elements in the wrapped container.
    pub fn len(&self) -> usize {
        self.inner.length()
    }

    /// Returns `true` if the wrapped container holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the wrapped container.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped container.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwraps the adapter, returning the container.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Reads the element at `index`, counting from the end if negative.
    pub fn item(&self, index: impl AsIndex) -> IndexResult<S::Item> {
        let index = normalize_index(index, self.len())?;
        Ok(self.inner.get_at(index))
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = S::Item> + ExactSizeIterator + '_ {
        (0..self.len()).map(|i| self.inner.get_at(i))
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.iter().any(|item| item == *value)
    }

    /// Counts the elements equal to `value`.
    pub fn count(&self, value: &S::Item) -> usize
    where
        S::Item: PartialEq,
    {
        self.iter().filter(|item| item == value).count()
    }

    /// Returns the offset of the first element equal to `value` within `window`.
    ///
    /// The window is normalized like any slice read, so its bounds clamp.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::SequenceAdapter;
    ///
    /// let seq = SequenceAdapter::new(vec![-2, -1, 0, 0, 1, 2]);
    /// assert_eq!(seq.position(&0, ..).unwrap(), Some(2));
    /// assert_eq!(seq.position(&0, 3..).unwrap(), Some(3));
    /// assert_eq!(seq.position(&0, -3..-2).unwrap(), Some(3));
    /// assert_eq!(seq.position(&2, 0..-10).unwrap(), None);
    /// ```
    pub fn position(&self, value: &S::Item, window: impl Into<Slice>) -> IndexResult<Option<usize>>
    where
        S::Item: PartialEq,
    {
        let indices = window.into().indices(self.len())?;
        Ok(indices.iter().find(|&i| self.inner.get_at(i) == *value))
    }
}

impl<S: Sequence, B: SliceBuilder<S>> SequenceAdapter<S, B> {
    /// Reads the element or slice designated by `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicewise::{Selection, SequenceAdapter};
    ///
    /// let seq = SequenceAdapter::new(vec![10, 11]);
    /// assert_eq!(seq.get(-2).unwrap(), Selection::Element(10));
    /// assert_eq!(seq.get(0..3).unwrap(), Selection::Slice(vec![10, 11]));
    /// assert!(seq.get(1.0).is_err());
    /// ```
    pub fn get(&self, key: impl IntoSubscript) -> IndexResult<Selection<S::Item, B::Output>> {
        match key.into_subscript()? {
            Subscript::Index(index) => self.item(index).map(Selection::Element),
            Subscript::Slice(spec) => self.slice(spec).map(Selection::Slice),
        }
    }

    /// Builds a new container from the elements designated by `spec`.
    pub fn slice(&self, spec: impl Into<Slice>) -> IndexResult<B::Output> {
        let indices = spec.into().indices(self.len())?;
        let items = indices.iter().map(|i| self.inner.get_at(i)).collect();
        Ok(self.builder.build(items))
    }
}
