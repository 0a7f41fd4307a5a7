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

//! Common types used across gc-* crates

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Export format for activity downloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DownloadFormat {
  /// File as uploaded by the device (zipped FIT)
  Original,
  /// Training Center XML
  Tcx,
  /// GPS Exchange Format
  Gpx,
  /// Keyhole Markup Language
  Kml,
  /// Lap summary as comma separated values
  Csv,
}

impl DownloadFormat {
  /// Every supported format, in declaration order
  pub const ALL: [DownloadFormat; 5] = [
    DownloadFormat::Original,
    DownloadFormat::Tcx,
    DownloadFormat::Gpx,
    DownloadFormat::Kml,
    DownloadFormat::Csv,
  ];

  /// Conventional file extension for the exported content
  pub fn extension(&self) -> &'static str {
    match self {
      DownloadFormat::Original => "zip",
      DownloadFormat::Tcx => "tcx",
      DownloadFormat::Gpx => "gpx",
      DownloadFormat::Kml => "kml",
      DownloadFormat::Csv => "csv",
    }
  }
}

impl std::fmt::Display for DownloadFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DownloadFormat::Original => write!(f, "ORIGINAL"),
      DownloadFormat::Tcx => write!(f, "TCX"),
      DownloadFormat::Gpx => write!(f, "GPX"),
      DownloadFormat::Kml => write!(f, "KML"),
      DownloadFormat::Csv => write!(f, "CSV"),
    }
  }
}

impl FromStr for DownloadFormat {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_uppercase().as_str() {
      "ORIGINAL" | "FIT" => Ok(DownloadFormat::Original),
      "TCX" => Ok(DownloadFormat::Tcx),
      "GPX" => Ok(DownloadFormat::Gpx),
      "KML" => Ok(DownloadFormat::Kml),
      "CSV" => Ok(DownloadFormat::Csv),
      _ => Err(Error::InvalidArgument(format!("Unexpected download format {:?}", s))),
    }
  }
}
