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

//! Query string building shared by every endpoint

use chrono::NaiveDate;
use gc_core::DATE_FORMAT;
use std::fmt::Display;

/// Format a date the way the service requires (`yyyy-MM-dd`)
pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}

/// Percent-encode `value` for use as a single path segment
///
/// Display names are chosen by users, so `/`, `?` and `#` must not leak
/// into the path structure.
pub fn path_segment(value: &str) -> String {
  urlencoding::encode(value).into_owned()
}

/// Ordered query parameters for a single request
///
/// Insertion order is preserved on the wire, so two requests built the same
/// way always produce the same URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
  pairs: Vec<(String, String)>,
}

impl QueryParams {
  /// Empty parameter list
  pub fn new() -> Self {
    Self::default()
  }

  /// Append `key=value`
  pub fn param(mut self, key: &str, value: impl Display) -> Self {
    self.pairs.push((key.to_string(), value.to_string()));
    self
  }

  /// Append a date formatted as `yyyy-MM-dd`
  pub fn date(self, key: &str, date: NaiveDate) -> Self {
    self.param(key, format_date(date))
  }

  /// Append `key=value` only when a non-empty value is present
  pub fn optional(self, key: &str, value: Option<impl Display>) -> Self {
    match value.map(|v| v.to_string()) {
      Some(v) if !v.is_empty() => self.param(key, v),
      _ => self,
    }
  }

  /// Parameters in insertion order
  pub fn pairs(&self) -> &[(String, String)] {
    &self.pairs
  }

  /// Value of the first parameter named `key`
  pub fn get(&self, key: &str) -> Option<&str> {
    self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
  }

  /// True when no parameters were added
  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }

  /// Percent-encoded query string without the leading `?`
  pub fn encode(&self) -> String {
    url::form_urlencoded::Serializer::new(String::new()).extend_pairs(self.pairs.iter()).finish()
  }
}
