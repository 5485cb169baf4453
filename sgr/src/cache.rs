//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
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

//! Memoized styled values, one per attribute set per output target.

use crate::{Attribute, AttributeKey, OutputTarget, StyledValue};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{trace, warn};

/// Cache of [`StyledValue`]s bound to a single [`OutputTarget`].
///
/// Values are keyed by [`AttributeKey`], so every ordering and repetition of
/// the same attributes resolves to one shared instance. Cached values are
/// built from the canonical (ascending, de-duplicated) attribute order, which
/// keeps their start sequence independent of whichever caller got there
/// first. When a set holds several codes from one band, the highest code is
/// written last and wins: `[FgBlue, FgRed]` renders blue through the cache
/// but red through [`StyledValue::new`].
///
/// Lookups take a shared lock. A miss takes the exclusive lock and checks
/// again before inserting, so concurrent callers for one key all receive the
/// same `Arc`. Entries are never evicted.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute::*, ValueCache, WriterTarget};
/// use std::sync::Arc;
///
/// let cache = ValueCache::new(Arc::new(WriterTarget::new(Vec::<u8>::new())));
/// let a = cache.value(&[FgRed, BgWhite, Underline]);
/// let b = cache.value(&[Underline, FgRed, BgWhite]);
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(a.start_sequence(), "\x1b[4;31;47m");
/// ```
#[derive(Debug)]
pub struct ValueCache {
    target: Arc<dyn OutputTarget>,
    values: RwLock<HashMap<AttributeKey, Arc<StyledValue>>>,
}

impl ValueCache {
    /// Creates an empty cache whose values are bound to `target`.
    pub fn new(target: Arc<dyn OutputTarget>) -> ValueCache {
        ValueCache {
            target,
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `attributes`, creating it on first use.
    ///
    /// An empty attribute set maps to the bare reset value.
    pub fn value(&self, attributes: &[Attribute]) -> Arc<StyledValue> {
        self.value_for_key(AttributeKey::new(attributes))
    }

    /// Returns the cached value for an already canonical `key`, creating it on first use.
    pub fn value_for_key(&self, key: AttributeKey) -> Arc<StyledValue> {
        if let Some(value) = self.read().get(&key) {
            trace!(%key, "styled value cache hit");
            return Arc::clone(value);
        }

        let mut values = self.write();
        match values.entry(key) {
            // Another caller inserted between our read and write locks.
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                let value = Arc::new(StyledValue::bound(
                    Arc::clone(&self.target),
                    &entry.key().attributes(),
                ));
                trace!(key = %entry.key(), "inserted styled value");
                Arc::clone(entry.insert(value))
            }
        }
    }

    /// Returns the cached value for `key` without creating one.
    pub fn get(&self, key: &AttributeKey) -> Option<Arc<StyledValue>> {
        self.read().get(key).cloned()
    }

    /// Number of distinct attribute sets cached so far.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// The target every cached value is bound to.
    pub fn target(&self) -> &Arc<dyn OutputTarget> {
        &self.target
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<AttributeKey, Arc<StyledValue>>> {
        self.values.read().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned styled value cache");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AttributeKey, Arc<StyledValue>>> {
        self.values.write().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned styled value cache");
            poisoned.into_inner()
        })
    }
}
