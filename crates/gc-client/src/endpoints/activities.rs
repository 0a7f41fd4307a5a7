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

//! Activity endpoints
//!
//! This module provides access to recorded activities:
//! - Offset listing and date-range search (paginated)
//! - Per-activity sub-resources: sets, laps, splits, weather, HR zones, details
//! - Binary exports (original, TCX, GPX, KML, CSV)

use super::{impl_endpoint_base, EndpointBase};
use crate::download::DownloadResolver;
use crate::pagination::{PageRequest, Paginator};
use crate::query::QueryParams;
use crate::session::SessionContext;
use chrono::NaiveDate;
use gc_core::{DownloadFormat, Result};
use gc_models::activity::*;
use std::sync::Arc;
use tracing::instrument;

pub(crate) const ACTIVITIES_URL: &str = "/proxy/activitylist-service/activities/search/activities";
pub(crate) const ACTIVITY_URL: &str = "/proxy/activity-service/activity/";

/// Polyline resolution requested when the caller does not pick one
pub const DEFAULT_MAX_POLYLINE_SIZE: u32 = 4000;

/// Activity listing, sub-resource and export endpoints
#[derive(Debug, Clone)]
pub struct ActivityEndpoints {
  context: Arc<SessionContext>,
  paginator: Paginator,
}

impl_endpoint_base!(ActivityEndpoints);

impl ActivityEndpoints {
  /// Create a new activity endpoints instance
  pub fn new(context: Arc<SessionContext>, paginator: Paginator) -> Self {
    Self { context, paginator }
  }

  /// One page of the most recent activities
  ///
  /// `start` and `limit` are passed to the service verbatim.
  #[instrument(skip(self))]
  pub async fn list(&self, start: u32, limit: u32) -> Result<Vec<Activity>> {
    let query = QueryParams::new().param("start", start).param("limit", limit);
    self.get_json(ACTIVITIES_URL, query).await
  }

  /// Every activity between two dates, optionally of one type
  ///
  /// Walks the listing page by page, the way the web interface loads more
  /// activities while scrolling, until the service returns an empty page.
  ///
  /// # Arguments
  ///
  /// * `start_date` - First day included
  /// * `end_date` - Last day included
  /// * `activity_type` - Type key filter such as `running`
  #[instrument(skip(self))]
  pub async fn by_date(
    &self,
    start_date: NaiveDate,
    end_date: NaiveDate,
    activity_type: Option<&str>,
  ) -> Result<Vec<Activity>> {
    self
      .paginator
      .collect(|page| {
        let query = by_date_query(start_date, end_date, activity_type, page);
        self.context.request_json::<Vec<Activity>>(ACTIVITIES_URL, query)
      })
      .await
  }

  /// Exercise sets of a strength activity
  #[instrument(skip(self))]
  pub async fn exercise_sets(&self, activity_id: u64) -> Result<ExerciseSets> {
    self.get_json(&activity_path(activity_id, ""), QueryParams::new()).await
  }

  /// Laps of an activity
  #[instrument(skip(self))]
  pub async fn splits(&self, activity_id: u64) -> Result<ActivitySplits> {
    self.get_json(&activity_path(activity_id, "/splits"), QueryParams::new()).await
  }

  /// Split summaries grouped by split type (run, walk, stand)
  #[instrument(skip(self))]
  pub async fn split_summaries(&self, activity_id: u64) -> Result<SplitSummary> {
    self.get_json(&activity_path(activity_id, "/split_summaries"), QueryParams::new()).await
  }

  /// Weather observed at the start of an activity
  #[instrument(skip(self))]
  pub async fn weather(&self, activity_id: u64) -> Result<ActivityWeather> {
    self.get_json(&activity_path(activity_id, "/weather"), QueryParams::new()).await
  }

  /// Time spent in each heart rate zone
  #[instrument(skip(self))]
  pub async fn hr_time_in_zones(&self, activity_id: u64) -> Result<Vec<HrTimeInZone>> {
    self.get_json(&activity_path(activity_id, "/hrTimeInZones"), QueryParams::new()).await
  }

  /// Sampled metrics of an activity
  ///
  /// `max_polyline_size` defaults to [`DEFAULT_MAX_POLYLINE_SIZE`].
  #[instrument(skip(self))]
  pub async fn details(
    &self,
    activity_id: u64,
    max_chart_size: u32,
    max_polyline_size: Option<u32>,
  ) -> Result<ActivityDetails> {
    let query = QueryParams::new()
      .param("maxChartSize", max_chart_size)
      .param("maxPolylineSize", max_polyline_size.unwrap_or(DEFAULT_MAX_POLYLINE_SIZE));
    self.get_json(&activity_path(activity_id, "/details"), query).await
  }

  /// Export an activity; the bytes are returned exactly as served
  pub async fn download(&self, activity_id: u64, format: DownloadFormat) -> Result<Vec<u8>> {
    DownloadResolver::new(self.context.clone()).download(activity_id, format).await
  }

  /// Export an activity using a format name such as `"tcx"`
  pub async fn download_named(&self, activity_id: u64, format: &str) -> Result<Vec<u8>> {
    DownloadResolver::new(self.context.clone()).download_named(activity_id, format).await
  }
}

fn activity_path(activity_id: u64, suffix: &str) -> String {
  format!("{}{}{}", ACTIVITY_URL, activity_id, suffix)
}

fn by_date_query(
  start_date: NaiveDate,
  end_date: NaiveDate,
  activity_type: Option<&str>,
  page: PageRequest,
) -> QueryParams {
  QueryParams::new()
    .date("startDate", start_date)
    .date("endDate", end_date)
    .param("start", page.start)
    .param("limit", page.limit)
    .optional("activityType", activity_type)
}
