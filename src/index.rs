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

//! Conversion and bounds checking of single indices.

use crate::result::{IndexError, IndexResult};

/// Conversion of a caller supplied value into a signed index.
///
/// Every primitive integer type converts. Values that do not fit in `isize` saturate,
/// which keeps them out of range for any real container. Floating point values
/// implement the trait but always fail with [`IndexError::TypeMismatch`].
///
/// # Examples
///
/// ```rust
/// use slicewise::AsIndex;
///
/// assert_eq!(3u8.as_index(), Ok(3));
/// assert_eq!(u128::MAX.as_index(), Ok(isize::MAX));
/// assert!(1.5f64.as_index().is_err());
/// ```
pub trait AsIndex {
    /// Returns the value as an `isize`, or a type error if it is not an integer.
    fn as_index(&self) -> IndexResult<isize>;
}

macro_rules! impl_as_index_unsigned {
    ($($ty:ty),*) => {
        $(
            impl AsIndex for $ty {
                fn as_index(&self) -> IndexResult<isize> {
                    Ok(isize::try_from(*self).unwrap_or(isize::MAX))
                }
            }
        )*
    };
}

macro_rules! impl_as_index_signed {
    ($($ty:ty),*) => {
        $(
            impl AsIndex for $ty {
                fn as_index(&self) -> IndexResult<isize> {
                    Ok(isize::try_from(*self)
                        .unwrap_or(if *self < 0 { isize::MIN } else { isize::MAX }))
                }
            }
        )*
    };
}

macro_rules! impl_as_index_float {
    ($($ty:ty),*) => {
        $(
            impl AsIndex for $ty {
                fn as_index(&self) -> IndexResult<isize> {
                    Err(IndexError::type_mismatch("indices must be integers"))
                }
            }
        )*
    };
}

impl_as_index_unsigned!(u8, u16, u32, u64, u128, usize);
impl_as_index_signed!(i8, i16, i32, i64, i128, isize);
impl_as_index_float!(f32, f64);

impl<T: AsIndex + ?Sized> AsIndex for &T {
    fn as_index(&self) -> IndexResult<isize> {
        (**self).as_index()
    }
}

/// Lengths never exceed `isize::MAX` for real allocations.
pub(crate) fn signed_length(length: usize) -> isize {
    isize::try_from(length).unwrap_or(isize::MAX)
}

/// Converts `raw` into an offset in `0..length`.
///
/// Negative indices count from the end. Anything still outside the container after
/// that adjustment is an [`IndexError::IndexOutOfRange`].
///
/// # Examples
///
/// ```rust
/// use slicewise::normalize_index;
///
/// assert_eq!(normalize_index(1, 5), Ok(1));
/// assert_eq!(normalize_index(-1, 5), Ok(4));
/// assert!(normalize_index(5, 5).is_err());
/// assert!(normalize_index(-6, 5).is_err());
/// ```
pub fn normalize_index(raw: impl AsIndex, length: usize) -> IndexResult<usize> {
    let index = raw.as_index()?;
    let len = signed_length(length);
    let adjusted = if index < 0 { index + len } else { index };
    if adjusted < 0 || adjusted >= len {
        return Err(IndexError::IndexOutOfRange { index, length });
    }
    Ok(adjusted as usize)
}

/// Converts `raw` into an insertion position in `0..=length`.
///
/// Negative indices count from the end, and positions past either end are clamped
/// to that end rather than rejected.
///
/// # Examples
///
/// ```rust
/// use slicewise::clamp_index;
///
/// assert_eq!(clamp_index(-2, 5), Ok(3));
/// assert_eq!(clamp_index(-200, 5), Ok(0));
/// assert_eq!(clamp_index(200, 5), Ok(5));
/// ```
pub fn clamp_index(raw: impl AsIndex, length: usize) -> IndexResult<usize> {
    let index = raw.as_index()?;
    let len = signed_length(length);
    let adjusted = if index < 0 { index + len } else { index };
    Ok(adjusted.clamp(0, len) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_positive_indices() {
        for i in 0..5 {
            assert_eq!(normalize_index(i, 5), Ok(i as usize));
        }
    }

    #[test]
    fn test_negative_indices() {
        assert_eq!(normalize_index(-1, 5), Ok(4));
        assert_eq!(normalize_index(-5, 5), Ok(0));
        assert_eq!(normalize_index(-2, 2), Ok(0));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            normalize_index(5, 5),
            Err(IndexError::IndexOutOfRange {
                index: 5,
                length: 5
            })
        );
        assert_eq!(
            normalize_index(-6, 5),
            Err(IndexError::IndexOutOfRange {
                index: -6,
                length: 5
            })
        );
    }

    #[test]
    fn test_empty_container() {
        assert!(normalize_index(0, 0).unwrap_err().is_index_out_of_range());
        assert!(normalize_index(-1, 0).unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn test_extreme_values() {
        assert!(normalize_index(u128::MAX, 10).is_err());
        assert!(normalize_index(i128::MIN, 10).is_err());
        assert!(normalize_index(isize::MIN, 10).is_err());
        assert_eq!(normalize_index(9u64, 10), Ok(9));
        assert_eq!(normalize_index(-10i64, 10), Ok(0));
    }

    #[test]
    fn test_non_integer() {
        let err = normalize_index(1.0f64, 10).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(normalize_index(0.0f32, 10).is_err());
    }

    #[test]
    fn test_by_reference() {
        let index = -1;
        assert_eq!(normalize_index(&index, 3), Ok(2));
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(0, 3), Ok(0));
        assert_eq!(clamp_index(3, 3), Ok(3));
        assert_eq!(clamp_index(4, 3), Ok(3));
        assert_eq!(clamp_index(-1, 3), Ok(2));
        assert_eq!(clamp_index(-4, 3), Ok(0));
        assert_eq!(clamp_index(0, 0), Ok(0));
        assert_eq!(clamp_index(isize::MIN, 3), Ok(0));
        assert!(clamp_index(2.5f64, 3).is_err());
    }

    proptest! {
        #[test]
        fn prop_in_range_indices_normalize(length in 1usize..1000, offset in 0usize..1000) {
            let i = (offset % length) as isize;
            prop_assert_eq!(normalize_index(i, length), Ok(i as usize));
            let negative = i - length as isize;
            prop_assert_eq!(normalize_index(negative, length), Ok(i as usize));
        }

        #[test]
        fn prop_out_of_range_indices_fail(length in 0usize..1000, excess in 0isize..1000) {
            let len = length as isize;
            prop_assert!(normalize_index(len + excess, length).unwrap_err().is_index_out_of_range());
            prop_assert!(normalize_index(-len - 1 - excess, length).unwrap_err().is_index_out_of_range());
        }

        #[test]
        fn prop_clamped_positions_in_bounds(length in 0usize..1000, raw in any::<isize>()) {
            let position = clamp_index(raw, length).unwrap();
            prop_assert!(position <= length);
        }
    }
}
