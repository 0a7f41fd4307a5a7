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

//! Offset based pagination over listing endpoints
//!
//! Pages are requested at `start = 0, size, 2 * size, ...` until the service
//! returns an empty page. A short page is not treated as the end. Items keep
//! the order the service returned them in, across page boundaries.

use gc_core::{Config, Error, Result};
use std::future::Future;
use tracing::debug;

/// Offset window of a single page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  /// Index of the first item in the page
  pub start: u64,
  /// Number of items requested
  pub limit: u32,
}

/// Collects every page of a listing into one ordered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
  page_size: u32,
  max_pages: Option<u32>,
}

impl Paginator {
  /// Paginator requesting `page_size` items at a time, without a page cap
  pub fn new(page_size: u32) -> Self {
    Self { page_size: page_size.max(1), max_pages: None }
  }

  /// Fail instead of issuing more than `max_pages` requests
  pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
    self.max_pages = max_pages;
    self
  }

  /// Paginator using the page size and cap from `config`
  pub fn from_config(config: &Config) -> Self {
    Self::new(config.page_size).with_max_pages(config.max_pages)
  }

  /// Items requested per page
  pub fn page_size(&self) -> u32 {
    self.page_size
  }

  /// Request pages through `fetch_page` until one comes back empty
  ///
  /// Any failing page fails the whole call; items gathered so far are
  /// dropped rather than returned as a truncated result.
  pub async fn collect<T, F, Fut>(&self, mut fetch_page: F) -> Result<Vec<T>>
  where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
  {
    let mut items = Vec::new();
    let mut request = PageRequest { start: 0, limit: self.page_size };
    let mut pages = 0u32;

    loop {
      if let Some(max_pages) = self.max_pages {
        if pages >= max_pages {
          return Err(Error::PaginationLimit { pages });
        }
      }

      debug!("Fetching page {} at offset {}", pages + 1, request.start);
      let page = fetch_page(request).await?;
      pages += 1;

      if page.is_empty() {
        debug!("Empty page received after {} requests. Total items: {}", pages, items.len());
        return Ok(items);
      }

      debug!("Received {} items in page {}", page.len(), pages);
      items.extend(page);
      request.start += u64::from(self.page_size);
    }
  }
}

impl Default for Paginator {
  fn default() -> Self {
    Self::new(gc_core::DEFAULT_PAGE_SIZE)
  }
}
