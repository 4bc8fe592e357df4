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

//! Error types and results for the slicewise library.

/// A specialized Result type for indexing operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur while normalizing or applying an index, slice or key.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum IndexError {
    /// A single index fell outside the container after negative offsetting.
    #[display("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// The index as supplied by the caller.
        index: isize,
        /// Container length at the time of normalization.
        length: usize,
    },
    /// The index, key or assigned value has the wrong shape.
    #[display("{reason}")]
    TypeMismatch {
        /// Human readable description of the mismatch.
        reason: &'static str,
    },
    /// A slice was given a step of zero.
    #[display("slice step cannot be zero")]
    ZeroStep,
    /// An extended slice was assigned a sequence of a different length.
    #[display("attempt to assign sequence of size {actual} to extended slice of size {expected}")]
    ExtendedSliceSize {
        /// Number of values supplied.
        actual: usize,
        /// Number of indices the slice designates.
        expected: usize,
    },
    /// A keyed lookup missed and no handler was installed.
    #[display("key not found")]
    KeyNotFound,
}

/// Coarse classification of an [`IndexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A single index missed the container.
    IndexOutOfRange,
    /// The argument could not be used as an index, key or value sequence.
    Type,
    /// The argument had the right type but an unusable value.
    Value,
    /// A keyed lookup missed.
    KeyNotFound,
}

impl IndexError {
    pub(crate) fn type_mismatch(reason: &'static str) -> Self {
        IndexError::TypeMismatch { reason }
    }

    /// Returns the kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IndexError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            IndexError::TypeMismatch { .. } => ErrorKind::Type,
            IndexError::ZeroStep | IndexError::ExtendedSliceSize { .. } => ErrorKind::Value,
            IndexError::KeyNotFound => ErrorKind::KeyNotFound,
        }
    }
}
