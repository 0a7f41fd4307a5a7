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

//! Activity export downloads

use crate::session::SessionContext;
use gc_core::{DownloadFormat, Error, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Export endpoint prefix for each format; the activity id is appended
const DOWNLOAD_TEMPLATES: [(DownloadFormat, &str); 5] = [
  (DownloadFormat::Original, "/proxy/download-service/files/activity/"),
  (DownloadFormat::Tcx, "/proxy/download-service/export/tcx/activity/"),
  (DownloadFormat::Gpx, "/proxy/download-service/export/gpx/activity/"),
  (DownloadFormat::Kml, "/proxy/download-service/export/kml/activity/"),
  (DownloadFormat::Csv, "/proxy/download-service/export/csv/activity/"),
];

/// Path serving `activity_id` in `format`
pub fn download_path(activity_id: u64, format: DownloadFormat) -> Result<String> {
  DOWNLOAD_TEMPLATES
    .iter()
    .find(|(candidate, _)| *candidate == format)
    .map(|(_, template)| format!("{}{}", template, activity_id))
    .ok_or_else(|| Error::InvalidArgument(format!("Unexpected value {} for download format", format)))
}

/// Fetches activity exports as raw bytes
#[derive(Debug, Clone)]
pub struct DownloadResolver {
  context: Arc<SessionContext>,
}

impl DownloadResolver {
  /// Create a resolver on top of a shared session context
  pub fn new(context: Arc<SessionContext>) -> Self {
    Self { context }
  }

  /// Download `activity_id` in `format`, returning the bytes as served
  #[instrument(skip(self))]
  pub async fn download(&self, activity_id: u64, format: DownloadFormat) -> Result<Vec<u8>> {
    let path = download_path(activity_id, format)?;
    debug!("Resolved {} export to {}", format, path);
    self.context.request_binary(&path).await
  }

  /// Download using a format name such as `"gpx"`
  ///
  /// Unknown names fail with [`Error::InvalidArgument`] before any request
  /// is made.
  pub async fn download_named(&self, activity_id: u64, format: &str) -> Result<Vec<u8>> {
    let format: DownloadFormat = format.parse()?;
    self.download(activity_id, format).await
  }
}
