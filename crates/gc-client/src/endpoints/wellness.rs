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

//! Daily wellness endpoints
//!
//! Most of these are keyed by the signed-in user's display name, which is
//! resolved through the session's profile cache before the path is built.

use super::{impl_endpoint_base, EndpointBase};
use crate::query::{format_date, path_segment, QueryParams};
use crate::session::SessionContext;
use chrono::NaiveDate;
use gc_core::Result;
use gc_models::wellness::*;
use std::sync::Arc;
use tracing::instrument;

pub(crate) const USER_SUMMARY_URL: &str = "/proxy/usersummary-service/usersummary/daily/";
pub(crate) const USER_SUMMARY_CHART_URL: &str = "/proxy/wellness-service/wellness/dailySummaryChart/";
pub(crate) const HEART_RATES_URL: &str = "/proxy/wellness-service/wellness/dailyHeartRate/";
pub(crate) const SLEEP_DATA_URL: &str = "/proxy/wellness-service/wellness/dailySleepData/";
pub(crate) const BODY_COMPOSITION_URL: &str = "/proxy/weight-service/weight/daterangesnapshot";
pub(crate) const HYDRATION_DATA_URL: &str = "/proxy/usersummary-service/usersummary/hydration/daily/";

/// Wellness endpoints: summaries, heart rate, sleep, steps, weight, hydration
#[derive(Debug, Clone)]
pub struct WellnessEndpoints {
  context: Arc<SessionContext>,
}

impl_endpoint_base!(WellnessEndpoints);

impl WellnessEndpoints {
  /// Create a new wellness endpoints instance
  pub fn new(context: Arc<SessionContext>) -> Self {
    Self { context }
  }

  /// Daily summary (calories, steps, heart rate, stress) for `date`
  #[instrument(skip(self))]
  pub async fn user_summary(&self, date: NaiveDate) -> Result<Stats> {
    let display_name = self.display_name().await?;
    let query = QueryParams::new().date("calendarDate", date);
    self.get_json(&user_path(USER_SUMMARY_URL, &display_name), query).await
  }

  /// Heart rate samples for `date`
  #[instrument(skip(self))]
  pub async fn heart_rates(&self, date: NaiveDate) -> Result<HeartRateData> {
    let display_name = self.display_name().await?;
    let query = QueryParams::new().date("date", date);
    self.get_json(&user_path(HEART_RATES_URL, &display_name), query).await
  }

  /// Sleep record for the night ending on `date`
  #[instrument(skip(self))]
  pub async fn sleep_data(&self, date: NaiveDate) -> Result<SleepData> {
    let display_name = self.display_name().await?;
    let query = QueryParams::new().date("date", date);
    self.get_json(&user_path(SLEEP_DATA_URL, &display_name), query).await
  }

  /// Steps per 15 minute interval on `date`
  #[instrument(skip(self))]
  pub async fn steps_data(&self, date: NaiveDate) -> Result<Vec<StepsData>> {
    let display_name = self.display_name().await?;
    let query = QueryParams::new().date("date", date);
    self.get_json(&user_path(USER_SUMMARY_CHART_URL, &display_name), query).await
  }

  /// Weight and body composition samples between two dates
  #[instrument(skip(self))]
  pub async fn body_composition(
    &self,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Result<BodyComposition> {
    let query = QueryParams::new().date("startDate", start_date).date("endDate", end_date);
    self.get_json(BODY_COMPOSITION_URL, query).await
  }

  /// Hydration log for `date`
  #[instrument(skip(self))]
  pub async fn hydration(&self, date: NaiveDate) -> Result<HydrationData> {
    let path = format!("{}{}", HYDRATION_DATA_URL, format_date(date));
    self.get_json(&path, QueryParams::new()).await
  }
}

fn user_path(template: &str, display_name: &str) -> String {
  format!("{}{}", template, path_segment(display_name))
}
