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

//! Primitive operations an ordered container provides to be adaptable.

use std::collections::VecDeque;

/// A trait for ordered containers that can report their length and read one element.
///
/// Implementors only ever see offsets in `0..length()`; negative indices, slices and
/// range checks are handled by [`SequenceAdapter`](crate::SequenceAdapter).
///
/// # Examples
///
/// ```rust
/// use slicewise::Sequence;
///
/// let vec = vec![1, 2, 3, 4, 5];
/// assert_eq!(vec.length(), 5);
/// assert_eq!(vec.get_at(2), 3);
/// ```
pub trait Sequence {
    /// The type of elements contained in the sequence.
    type Item;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Returns the element at `index`.
    ///
    /// Only called with `index < self.length()`.
    fn get_at(&self, index: usize) -> Self::Item;
}

/// A [`Sequence`] that can replace, remove and insert single elements.
///
/// # Examples
///
/// ```rust
/// use slicewise::{MutableSequence, Sequence};
///
/// let mut vec = vec![1, 2, 3];
/// vec.set_at(0, 10);
/// vec.insert_at(3, 4);
/// assert_eq!(vec.delete_at(1), 2);
/// assert_eq!(vec, vec![10, 3, 4]);
/// ```
pub trait MutableSequence: Sequence {
    /// Replaces the element at `index`. Only called with `index < self.length()`.
    fn set_at(&mut self, index: usize, value: Self::Item);

    /// Removes and returns the element at `index`. Only called with `index < self.length()`.
    fn delete_at(&mut self, index: usize) -> Self::Item;

    /// Inserts `value` before `index`. Only called with `index <= self.length()`.
    fn insert_at(&mut self, index: usize, value: Self::Item);
}

// Implementation for slices
impl<T: Clone> Sequence for [T] {
    type Item = T;
    fn length(&self) -> usize {
        self.len()
    }
    fn get_at(&self, index: usize) -> T {
        self[index].clone()
    }
}

// Implementation for Vec<T>
impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    fn length(&self) -> usize {
        self.len()
    }
    fn get_at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> MutableSequence for Vec<T> {
    fn set_at(&mut self, index: usize, value: T) {
        self[index] = value;
    }
    fn delete_at(&mut self, index: usize) -> T {
        self.remove(index)
    }
    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }
}

// Implementation for VecDeque<T>
impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;
    fn length(&self) -> usize {
        self.len()
    }
    fn get_at(&self, index: usize) -> T {
        self[index].clone()
    }
}

impl<T: Clone> MutableSequence for VecDeque<T> {
    fn set_at(&mut self, index: usize, value: T) {
        self[index] = value;
    }
    fn delete_at(&mut self, index: usize) -> T {
        self.remove(index).unwrap_or_else(|| {
            unreachable!("delete_at offset {index} out of bounds for length {}", self.len())
        })
    }
    fn insert_at(&mut self, index: usize, value: T) {
        self.insert(index, value);
    }
}

// Borrowed sequences read through to their target
impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    fn length(&self) -> usize {
        (**self).length()
    }
    fn get_at(&self, index: usize) -> S::Item {
        (**self).get_at(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    fn length(&self) -> usize {
        (**self).length()
    }
    fn get_at(&self, index: usize) -> S::Item {
        (**self).get_at(index)
    }
}

impl<S: MutableSequence + ?Sized> MutableSequence for &mut S {
    fn set_at(&mut self, index: usize, value: S::Item) {
        (**self).set_at(index, value);
    }
    fn delete_at(&mut self, index: usize) -> S::Item {
        (**self).delete_at(index)
    }
    fn insert_at(&mut self, index: usize, value: S::Item) {
        (**self).insert_at(index, value);
    }
}
