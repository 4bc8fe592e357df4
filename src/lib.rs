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

//! # Slicewise
//!
//! A Rust library that gives any ordered container full index and slice semantics from a
//! handful of primitive operations, and gives any keyed container a miss handler that does
//! not leak into membership tests.
//!
//! ## Key Features
//!
//! - **Negative Indices**: `-1` is the last element, `-len` the first
//! - **Clamped Slices**: Slice bounds past either end clamp instead of failing
//! - **Stepped Slices**: Any non-zero step, including negative steps that walk backwards
//! - **Slice Assignment**: Contiguous slices grow and shrink, extended slices replace in place
//! - **Miss Handlers**: Direct lookups of absent keys can be answered by a handler
//! - **Generic Container Support**: Works with any type implementing `Sequence` or `Mapping`
//!
//! ## Usage Examples
//!
//! ### Reading
//!
//! ```rust
//! use slicewise::{SequenceAdapter, Slice};
//!
//! let seq = SequenceAdapter::new(vec![10, 20, 30, 40, 50]);
//!
//! assert_eq!(seq.item(-1).unwrap(), 50);
//! assert_eq!(seq.slice(1..-1).unwrap(), vec![20, 30, 40]);
//! assert_eq!(seq.slice(Slice::new(None, None, -2)).unwrap(), vec![50, 30, 10]);
//!
//! // Out of range slice bounds clamp
//! assert_eq!(seq.slice(3..100).unwrap(), vec![40, 50]);
//! ```
//!
//! ### Writing
//!
//! ```rust
//! use slicewise::{SequenceAdapter, Slice};
//!
//! let mut seq = SequenceAdapter::new(vec![10, 20, 30, 40, 50]);
//!
//! // A contiguous slice can be replaced by any number of elements
//! seq.set_slice(1..4, [99]).unwrap();
//! assert_eq!(seq.inner(), &vec![10, 99, 50]);
//!
//! // An extended slice must be replaced by exactly as many elements as it designates
//! seq.set_slice(Slice::new(None, None, 2), [1, 2]).unwrap();
//! assert_eq!(seq.inner(), &vec![1, 99, 2]);
//! assert!(seq.set_slice(Slice::new(None, None, 2), [1]).is_err());
//!
//! seq.delete(-1).unwrap();
//! seq.insert(0, 7).unwrap();
//! assert_eq!(seq.into_inner(), vec![7, 1, 99]);
//! ```
//!
//! ### Miss Handlers
//!
//! ```rust
//! use std::collections::HashMap;
//! use slicewise::MappingAdapter;
//!
//! let map = MappingAdapter::with_handler(HashMap::from([("a", 1)]), |_, _| Ok(0));
//!
//! assert_eq!(map.get(&"a").unwrap(), 1);
//! assert_eq!(map.get(&"b").unwrap(), 0);
//! assert!(!map.contains_key(&"b").unwrap());
//! ```
//!
//! ## Custom Container Support
//!
//! To adapt a custom container, implement the `Sequence` trait, and `MutableSequence` for
//! write access:
//!
//! ```rust
//! use slicewise::{MutableSequence, Sequence, SequenceAdapter};
//!
//! #[derive(Default)]
//! struct Stack(Vec<u8>);
//!
//! impl Sequence for Stack {
//!     type Item = u8;
//!
//!     fn length(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn get_at(&self, index: usize) -> u8 {
//!         self.0[index]
//!     }
//! }
//!
//! impl MutableSequence for Stack {
//!     fn set_at(&mut self, index: usize, value: u8) {
//!         self.0[index] = value;
//!     }
//!
//!     fn delete_at(&mut self, index: usize) -> u8 {
//!         self.0.remove(index)
//!     }
//!
//!     fn insert_at(&mut self, index: usize, value: u8) {
//!         self.0.insert(index, value);
//!     }
//! }
//!
//! impl FromIterator<u8> for Stack {
//!     fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
//!         Stack(iter.into_iter().collect())
//!     }
//! }
//!
//! let mut seq = SequenceAdapter::new(Stack::default());
//! seq.extend([1, 2, 3, 4]);
//! assert_eq!(seq.slice(..2).unwrap().0, vec![1, 2]);
//! ```
//!
//! Containers that cannot be collected into can still be read by choosing another
//! `SliceBuilder`, such as `PlainVec`, with `SequenceAdapter::with_builder`.
//!
//! ## Error Handling
//!
//! Operations return `IndexResult<T>` which can contain the following errors:
//!
//! - `IndexError::IndexOutOfRange`: A single index falls outside the container
//! - `IndexError::TypeMismatch`: An index is not an integer, or a value does not fit its key
//! - `IndexError::ZeroStep`: A slice step of zero
//! - `IndexError::ExtendedSliceSize`: An extended slice was assigned the wrong number of elements
//! - `IndexError::KeyNotFound`: A keyed lookup missed and no handler is installed
//!
//! Primitive operations are only ever called with offsets that have already been checked.
//!
//! ## Thread Safety
//!
//! Adapters are `Send` and `Sync` exactly when the wrapped container is. Composite operations
//! such as slice assignment issue several primitive calls and are not atomic.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

mod index;
mod mapping;
mod mutation;
mod primitives;
mod result;
mod sequence;
mod slice;

pub use self::index::{AsIndex, clamp_index, normalize_index};
pub use self::mapping::{
    Derivation, Mapping, MappingAdapter, MissHandler, MissingKey, MutableMapping,
};
pub use self::mutation::Assign;
pub use self::primitives::{MutableSequence, Sequence};
pub use self::result::{ErrorKind, IndexError, IndexResult};
pub use self::sequence::{FnBuilder, PlainVec, SameType, Selection, SequenceAdapter, SliceBuilder};
pub use self::slice::{IntoSubscript, Slice, SliceIndices, SliceIter, Subscript};
