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

//! Weekly Training Export Example
//!
//! This example demonstrates a typical export workflow using gc-client:
//! - Signing in lazily from environment configuration
//! - Collecting every activity of the last seven days across pages
//! - Summarizing distance and time per activity type
//! - Exporting each activity as GPX next to the binary

use chrono::{Duration, Local};
use gc_client::{DownloadFormat, GarminConnectClient};
use gc_core::{Config, Error};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct TypeTotals {
  count: u32,
  distance_km: f64,
  hours: f64,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
  let config = Config::from_env()?;
  let client = GarminConnectClient::new(config)?;

  let today = Local::now().date_naive();
  let week_ago = today - Duration::days(7);
  let activities = client.activities().by_date(week_ago, today, None).await?;
  println!("{} activities between {} and {}", activities.len(), week_ago, today);

  let mut totals: BTreeMap<String, TypeTotals> = BTreeMap::new();
  for activity in &activities {
    let entry = totals.entry(activity.type_key().unwrap_or("other").to_string()).or_default();
    entry.count += 1;
    entry.distance_km += activity.distance.unwrap_or(0.0) / 1000.0;
    entry.hours += activity.duration.unwrap_or(0.0) / 3600.0;
  }
  for (kind, t) in &totals {
    println!("{:<20} {:>3} x {:>8.1} km {:>6.1} h", kind, t.count, t.distance_km, t.hours);
  }

  for activity in &activities {
    match client.activities().download(activity.activity_id, DownloadFormat::Gpx).await {
      Ok(bytes) => {
        let path = format!("{}.gpx", activity.activity_id);
        if let Err(e) = std::fs::write(&path, &bytes) {
          eprintln!("Could not write {}: {}", path, e);
        }
      }
      // Manual uploads without GPS have no GPX export
      Err(Error::Http { status: 404, .. }) => continue,
      Err(e) => return Err(e),
    }
  }

  Ok(())
}
