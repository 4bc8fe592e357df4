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

//! Keyed lookup with an optional miss handler.
//!
//! A [`MappingAdapter`] routes direct lookups of absent keys through a handler, while
//! membership tests and lookups with a default keep reporting absent keys as absent.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::result::{IndexError, IndexResult};

/// How a [`Mapping`] answers a query that can be expressed in terms of
/// [`Mapping::get_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Derivation {
    /// The query is answered by calling `get_item`; the adapter reimplements it so the
    /// miss handler is never consulted.
    Derived,
    /// The mapping supplies its own answer and the adapter passes it through.
    Custom,
}

/// A keyed container.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use slicewise::{IndexError, Mapping};
///
/// let map = HashMap::from([("a", 1)]);
/// assert_eq!(map.get_item(&"a"), Ok(1));
/// assert_eq!(map.get_item(&"b"), Err(IndexError::KeyNotFound));
/// ```
pub trait Mapping {
    /// Key type.
    type Key;
    /// Value type.
    type Value;

    /// How [`Mapping::contains_key`] is answered.
    const MEMBERSHIP: Derivation = Derivation::Derived;
    /// How [`Mapping::get_or`] is answered.
    const LOOKUP_WITH_DEFAULT: Derivation = Derivation::Derived;

    /// Returns the value stored under `key`, or [`IndexError::KeyNotFound`].
    fn get_item(&self, key: &Self::Key) -> IndexResult<Self::Value>;

    /// Returns the number of entries.
    fn length(&self) -> usize;

    /// Reports whether `key` is present.
    fn contains_key(&self, key: &Self::Key) -> IndexResult<bool> {
        match self.get_item(key) {
            Ok(_) => Ok(true),
            Err(IndexError::KeyNotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Returns the value stored under `key`, or `default` if it is absent.
    fn get_or(&self, key: &Self::Key, default: Self::Value) -> IndexResult<Self::Value> {
        match self.get_item(key) {
            Err(IndexError::KeyNotFound) => Ok(default),
            result => result,
        }
    }
}

/// A [`Mapping`] that can produce a value for an absent key.
pub trait MissingKey: Mapping {
    /// Produces the value returned by [`MappingAdapter::get`] when `key` is absent.
    fn missing(&self, key: &Self::Key) -> IndexResult<Self::Value>;
}

/// A [`Mapping`] whose entries can be added and removed.
pub trait MutableMapping: Mapping {
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: Self::Key, value: Self::Value);

    /// Removes and returns the value under `key`, or [`IndexError::KeyNotFound`].
    fn delete_item(&mut self, key: &Self::Key) -> IndexResult<Self::Value>;
}

/// Miss handler installed on a [`MappingAdapter`].
pub type MissHandler<M> =
    fn(&M, &<M as Mapping>::Key) -> IndexResult<<M as Mapping>::Value>;

/// Wraps a [`Mapping`] and an optional miss handler.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use slicewise::MappingAdapter;
///
/// let map = MappingAdapter::with_handler(HashMap::from([('a', 'x')]), |_, key| Ok(*key));
/// assert_eq!(map.get(&'a'), Ok('x'));
/// assert_eq!(map.get(&'b'), Ok('b'));
/// assert_eq!(map.contains_key(&'b'), Ok(false));
/// assert_eq!(map.get_or(&'b', 'z'), Ok('z'));
/// ```
#[derive(Clone)]
pub struct MappingAdapter<M: Mapping> {
    inner: M,
    missing: Option<MissHandler<M>>,
}

impl<M: Mapping + fmt::Debug> fmt::Debug for MappingAdapter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingAdapter")
            .field("inner", &self.inner)
            .field("missing", &self.missing.is_some())
            .finish()
    }
}

impl<M: Mapping> MappingAdapter<M> {
    /// Wraps `inner` without a miss handler.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            missing: None,
        }
    }

    /// Wraps `inner` and routes misses through `handler`.
    pub fn with_handler(inner: M, handler: MissHandler<M>) -> Self {
        Self {
            inner,
            missing: Some(handler),
        }
    }

    /// Reports whether a miss handler is installed.
    pub fn has_missing_handler(&self) -> bool {
        self.missing.is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.length()
    }

    /// Returns `true` if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the wrapped mapping.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Mutably borrows the wrapped mapping.
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.inner
    }

    /// Unwraps the adapter, returning the mapping.
    pub fn into_inner(self) -> M {
        self.inner
    }

    /// Looks up `key`, calling the miss handler if it is absent.
    ///
    /// Without a handler an absent key is [`IndexError::KeyNotFound`]. Errors other than
    /// `KeyNotFound` are returned as they are and never reach the handler.
    pub fn get(&self, key: &M::Key) -> IndexResult<M::Value> {
        match self.inner.get_item(key) {
            Err(IndexError::KeyNotFound) => match self.missing {
                Some(handler) => {
                    log::trace!("key not found, dispatching miss handler");
                    handler(&self.inner, key)
                }
                None => Err(IndexError::KeyNotFound),
            },
            result => result,
        }
    }

    /// Reports whether `key` is present. The miss handler is never consulted.
    pub fn contains_key(&self, key: &M::Key) -> IndexResult<bool> {
        match M::MEMBERSHIP {
            Derivation::Custom => self.inner.contains_key(key),
            Derivation::Derived => match self.inner.get_item(key) {
                Ok(_) => Ok(true),
                Err(IndexError::KeyNotFound) => Ok(false),
                Err(err) => Err(err),
            },
        }
    }

    /// Looks up `key`, returning `default` if it is absent. The miss handler is never
    /// consulted.
    pub fn get_or(&self, key: &M::Key, default: M::Value) -> IndexResult<M::Value> {
        match M::LOOKUP_WITH_DEFAULT {
            Derivation::Custom => self.inner.get_or(key, default),
            Derivation::Derived => match self.inner.get_item(key) {
                Err(IndexError::KeyNotFound) => Ok(default),
                result => result,
            },
        }
    }

    /// Looks up `key`, returning `None` if it is absent. The miss handler is never
    /// consulted.
    pub fn try_get(&self, key: &M::Key) -> IndexResult<Option<M::Value>> {
        match self.inner.get_item(key) {
            Ok(value) => Ok(Some(value)),
            Err(IndexError::KeyNotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl<M: MissingKey> MappingAdapter<M> {
    /// Wraps `inner` and routes misses through its [`MissingKey`] implementation.
    pub fn with_missing(inner: M) -> Self {
        let handler: MissHandler<M> = M::missing;
        Self::with_handler(inner, handler)
    }
}

impl<M: MutableMapping> MappingAdapter<M> {
    /// Stores `value` under `key`.
    pub fn insert(&mut self, key: M::Key, value: M::Value) {
        self.inner.set_item(key, value);
    }

    /// Removes and returns the value under `key`. The miss handler is never consulted.
    pub fn remove(&mut self, key: &M::Key) -> IndexResult<M::Value> {
        self.inner.delete_item(key)
    }
}

impl<K: Eq + Hash, V: Clone, S: BuildHasher> Mapping for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    const MEMBERSHIP: Derivation = Derivation::Custom;

    fn get_item(&self, key: &K) -> IndexResult<V> {
        HashMap::get(self, key).cloned().ok_or(IndexError::KeyNotFound)
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn contains_key(&self, key: &K) -> IndexResult<bool> {
        Ok(HashMap::contains_key(self, key))
    }
}

impl<K: Eq + Hash, V: Clone, S: BuildHasher> MutableMapping for HashMap<K, V, S> {
    fn set_item(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn delete_item(&mut self, key: &K) -> IndexResult<V> {
        self.remove(key).ok_or(IndexError::KeyNotFound)
    }
}

impl<K: Ord, V: Clone> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    const MEMBERSHIP: Derivation = Derivation::Custom;

    fn get_item(&self, key: &K) -> IndexResult<V> {
        BTreeMap::get(self, key).cloned().ok_or(IndexError::KeyNotFound)
    }

    fn length(&self) -> usize {
        self.len()
    }

    fn contains_key(&self, key: &K) -> IndexResult<bool> {
        Ok(BTreeMap::contains_key(self, key))
    }
}

impl<K: Ord, V: Clone> MutableMapping for BTreeMap<K, V> {
    fn set_item(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn delete_item(&mut self, key: &K) -> IndexResult<V> {
        self.remove(key).ok_or(IndexError::KeyNotFound)
    }
}
