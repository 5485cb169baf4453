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

//! Output targets that styled values can be bound to.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// A shared sink for styled output.
///
/// [`OutputTarget::lock`] hands out exclusive access to the underlying
/// writer. A [`StyledValue`](crate::StyledValue) performs its start, text and
/// reset writes through one guard, so emits against the same target never
/// interleave.
pub trait OutputTarget: Send + Sync + std::fmt::Debug {
    /// Acquire exclusive access to the writer until the guard is dropped.
    fn lock(&self) -> Box<dyn Write + '_>;
}

/// [`OutputTarget`] over any writer, serialized by a mutex.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute, StyledValue, WriterTarget};
/// use std::sync::Arc;
///
/// let target = Arc::new(WriterTarget::new(Vec::new()));
/// let value = StyledValue::bound(target.clone(), &[Attribute::FgGreen]);
/// value.print("ok").unwrap();
/// assert_eq!(target.with_inner(|buf| buf.clone()), b"\x1b[32mok\x1b[0m");
/// ```
#[derive(Debug, Default)]
pub struct WriterTarget<W> {
    inner: Mutex<W>,
}

impl<W> WriterTarget<W> {
    /// Wrap `writer` in a target.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Run `f` against the wrapped writer while holding the target's lock.
    pub fn with_inner<R>(&self, f: impl FnOnce(&mut W) -> R) -> R {
        f(&mut self.guard())
    }

    /// Unwrap the target, returning the writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn guard(&self) -> MutexGuard<'_, W> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned output target lock");
            poisoned.into_inner()
        })
    }
}

impl<W: Write + Send + std::fmt::Debug> OutputTarget for WriterTarget<W> {
    fn lock(&self) -> Box<dyn Write + '_> {
        Box::new(LockedWriter(self.guard()))
    }
}

/// Write access to a mutex guarded writer.
struct LockedWriter<'a, W>(MutexGuard<'a, W>);

impl<W: Write> Write for LockedWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}
