/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Lazily populated, single-flight cache slots tied to a session generation

use gc_core::Result;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::OnceCell;

/// Observable state of a cache slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
  /// Nothing cached and no fetch running
  Empty,
  /// A fetch is in flight; concurrent readers wait for it
  Populating,
  /// Value cached for the current session
  Populated,
}

struct Entry<T> {
  generation: u64,
  cell: Arc<OnceCell<Arc<T>>>,
  populating: Arc<AtomicUsize>,
}

impl<T> Entry<T> {
  fn empty(generation: u64) -> Self {
    Self { generation, cell: Arc::new(OnceCell::new()), populating: Arc::new(AtomicUsize::new(0)) }
  }

  fn populated(generation: u64, value: T) -> Self {
    Self {
      generation,
      cell: Arc::new(OnceCell::new_with(Some(Arc::new(value)))),
      populating: Arc::new(AtomicUsize::new(0)),
    }
  }
}

impl<T> Clone for Entry<T> {
  fn clone(&self) -> Self {
    Self { generation: self.generation, cell: self.cell.clone(), populating: self.populating.clone() }
  }
}

struct PopulatingGuard(Arc<AtomicUsize>);

impl PopulatingGuard {
  fn enter(counter: &Arc<AtomicUsize>) -> Self {
    counter.fetch_add(1, Ordering::SeqCst);
    Self(counter.clone())
  }
}

impl Drop for PopulatingGuard {
  fn drop(&mut self) {
    self.0.fetch_sub(1, Ordering::SeqCst);
  }
}

/// One cached resource (profile, preferences)
///
/// Each value belongs to the session generation it was fetched under. A
/// lookup for a newer generation never sees an older value, and a fetch
/// that finishes after a renewal lands in the retired entry. Values are
/// replaced wholesale and never mutated in place.
///
/// Bookkeeping sits behind a plain mutex that is never held across an
/// await, so `seed`, `reset` and `state` cannot be interrupted midway.
pub(crate) struct CacheSlot<T> {
  entry: Mutex<Entry<T>>,
}

impl<T> CacheSlot<T> {
  pub(crate) fn new() -> Self {
    Self { entry: Mutex::new(Entry::empty(0)) }
  }

  fn lock(&self) -> MutexGuard<'_, Entry<T>> {
    // Entries are swapped whole, so a poisoned lock still holds a valid entry
    self.entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn entry_for(&self, generation: u64) -> Entry<T> {
    let mut entry = self.lock();
    if entry.generation < generation {
      *entry = Entry::empty(generation);
    } else if entry.generation > generation {
      // Caller leased a retired session; let it fetch without touching the slot
      return Entry::empty(generation);
    }
    entry.clone()
  }

  /// Cached value for `generation`, fetching it if absent
  ///
  /// Concurrent callers share a single in-flight `fetch`. A failed fetch
  /// leaves the slot empty so the next caller retries.
  pub(crate) async fn get_or_populate<F, Fut>(&self, generation: u64, fetch: F) -> Result<Arc<T>>
  where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
  {
    let entry = self.entry_for(generation);
    let populating = entry.populating.clone();
    entry
      .cell
      .get_or_try_init(|| async move {
        let _guard = PopulatingGuard::enter(&populating);
        fetch().await.map(Arc::new)
      })
      .await
      .cloned()
  }

  /// Replace the slot with `value` for `generation`
  pub(crate) fn seed(&self, generation: u64, value: T) {
    *self.lock() = Entry::populated(generation, value);
  }

  /// Drop any cached value and start `generation` empty
  pub(crate) fn reset(&self, generation: u64) {
    *self.lock() = Entry::empty(generation);
  }

  /// Cached value for `generation` without fetching
  pub(crate) fn peek(&self, generation: u64) -> Option<Arc<T>> {
    let entry = self.lock();
    if entry.generation == generation {
      entry.cell.get().cloned()
    } else {
      None
    }
  }

  pub(crate) fn state(&self, generation: u64) -> CacheState {
    let entry = self.lock();
    if entry.generation != generation {
      CacheState::Empty
    } else if entry.cell.initialized() {
      CacheState::Populated
    } else if entry.populating.load(Ordering::SeqCst) > 0 {
      CacheState::Populating
    } else {
      CacheState::Empty
    }
  }
}
