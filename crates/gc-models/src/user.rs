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

//! Profile, preferences, settings and personal records of the account owner

use serde::{Deserialize, Serialize};

/// Public profile of the authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
  #[serde(default)]
  pub id: Option<u64>,
  #[serde(default)]
  pub profile_id: Option<u64>,
  /// Identifier embedded in identity-dependent endpoint paths
  pub display_name: String,
  #[serde(default)]
  pub full_name: Option<String>,
  #[serde(default)]
  pub user_name: Option<String>,
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub profile_image_url_medium: Option<String>,
}

/// Display preferences of the authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub preferred_locale: Option<String>,
  #[serde(default)]
  pub measurement_system: Option<String>,
  #[serde(default)]
  pub first_day_of_week: Option<serde_json::Value>,
  #[serde(default)]
  pub number_format: Option<String>,
  #[serde(default)]
  pub time_format: Option<String>,
  #[serde(default)]
  pub date_format: Option<serde_json::Value>,
  #[serde(default)]
  pub heart_rate_format: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
  #[serde(default)]
  pub gender: Option<String>,
  /// Weight in grams
  #[serde(default)]
  pub weight: Option<f64>,
  /// Height in centimeters
  #[serde(default)]
  pub height: Option<f64>,
  #[serde(default)]
  pub birth_date: Option<String>,
  #[serde(default)]
  pub measurement_system: Option<String>,
  #[serde(default)]
  pub time_format: Option<String>,
  #[serde(default)]
  pub vo2_max_running: Option<f64>,
  #[serde(default)]
  pub lactate_threshold_heart_rate: Option<u32>,
}

/// Account level user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
  #[serde(default)]
  pub id: Option<u64>,
  #[serde(default)]
  pub user_data: Option<UserData>,
}

/// Personal best; `value` units depend on `type_id` (seconds, meters, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
  pub id: u64,
  pub type_id: u32,
  #[serde(default)]
  pub activity_id: Option<u64>,
  #[serde(default)]
  pub activity_name: Option<String>,
  #[serde(default)]
  pub activity_type: Option<String>,
  #[serde(default)]
  pub activity_start_date_time_local_formatted: Option<String>,
  #[serde(default)]
  pub value: Option<f64>,
  #[serde(default, rename = "prStartTimeGmtFormatted")]
  pub pr_start_time_gmt_formatted: Option<String>,
  #[serde(default)]
  pub confirmed: Option<bool>,
}
