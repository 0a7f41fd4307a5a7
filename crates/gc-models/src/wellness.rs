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

//! Daily wellness summaries: steps, heart rate, sleep, hydration, weight

use serde::{Deserialize, Serialize};

/// Daily user summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
  #[serde(default)]
  pub calendar_date: Option<String>,
  #[serde(default)]
  pub total_kilocalories: Option<f64>,
  #[serde(default)]
  pub active_kilocalories: Option<f64>,
  #[serde(default)]
  pub bmr_kilocalories: Option<f64>,
  #[serde(default)]
  pub total_steps: Option<u64>,
  #[serde(default)]
  pub daily_step_goal: Option<u64>,
  #[serde(default)]
  pub total_distance_meters: Option<f64>,
  #[serde(default)]
  pub floors_ascended: Option<f64>,
  #[serde(default)]
  pub min_heart_rate: Option<u32>,
  #[serde(default)]
  pub max_heart_rate: Option<u32>,
  #[serde(default)]
  pub resting_heart_rate: Option<u32>,
  #[serde(default)]
  pub average_stress_level: Option<i32>,
  #[serde(default)]
  pub body_battery_highest_value: Option<i32>,
  #[serde(default)]
  pub body_battery_lowest_value: Option<i32>,
  #[serde(default)]
  pub intensity_minutes_goal: Option<u32>,
  #[serde(default)]
  pub moderate_intensity_minutes: Option<u32>,
  #[serde(default)]
  pub vigorous_intensity_minutes: Option<u32>,
}

/// Heart rate samples for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateData {
  #[serde(default)]
  pub user_profile_pk: Option<u64>,
  #[serde(default)]
  pub calendar_date: Option<String>,
  #[serde(default, rename = "startTimestampGMT")]
  pub start_timestamp_gmt: Option<String>,
  #[serde(default, rename = "endTimestampGMT")]
  pub end_timestamp_gmt: Option<String>,
  #[serde(default)]
  pub max_heart_rate: Option<u32>,
  #[serde(default)]
  pub min_heart_rate: Option<u32>,
  #[serde(default)]
  pub resting_heart_rate: Option<u32>,
  #[serde(default)]
  pub last_seven_days_avg_resting_heart_rate: Option<u32>,
  /// `[epoch millis, bpm]` pairs; bpm is null while the device was off-wrist
  #[serde(default)]
  pub heart_rate_values: Option<Vec<(i64, Option<u32>)>>,
}

impl HeartRateData {
  /// Samples with a recorded value
  pub fn readings(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
    self.heart_rate_values.iter().flatten().filter_map(|(ts, bpm)| bpm.map(|bpm| (*ts, bpm)))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySleep {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub calendar_date: Option<String>,
  #[serde(default)]
  pub sleep_time_seconds: Option<u64>,
  #[serde(default)]
  pub nap_time_seconds: Option<u64>,
  #[serde(default)]
  pub deep_sleep_seconds: Option<u64>,
  #[serde(default)]
  pub light_sleep_seconds: Option<u64>,
  #[serde(default)]
  pub rem_sleep_seconds: Option<u64>,
  #[serde(default)]
  pub awake_sleep_seconds: Option<u64>,
  #[serde(default, rename = "sleepStartTimestampGMT")]
  pub sleep_start_timestamp_gmt: Option<i64>,
  #[serde(default, rename = "sleepEndTimestampGMT")]
  pub sleep_end_timestamp_gmt: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMovement {
  #[serde(rename = "startGMT")]
  pub start_gmt: String,
  #[serde(rename = "endGMT")]
  pub end_gmt: String,
  #[serde(default)]
  pub activity_level: Option<f64>,
}

/// Sleep record for one night
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepData {
  #[serde(default)]
  pub daily_sleep_dto: Option<DailySleep>,
  #[serde(default)]
  pub sleep_movement: Vec<SleepMovement>,
  #[serde(default)]
  pub resting_heart_rate: Option<u32>,
}

/// Steps counted in one 15 minute interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepsData {
  #[serde(rename = "startGMT")]
  pub start_gmt: String,
  #[serde(rename = "endGMT")]
  pub end_gmt: String,
  pub steps: u32,
  #[serde(default)]
  pub primary_activity_level: Option<String>,
  #[serde(default)]
  pub activity_level_constant: Option<bool>,
}

/// Daily hydration log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationData {
  #[serde(default)]
  pub user_id: Option<u64>,
  #[serde(default)]
  pub calendar_date: Option<String>,
  #[serde(default)]
  pub value_in_ml: Option<f64>,
  #[serde(default)]
  pub goal_in_ml: Option<f64>,
  #[serde(default)]
  pub sweat_loss_in_ml: Option<f64>,
  #[serde(default)]
  pub activity_intake_in_ml: Option<f64>,
}

/// Weight measurement; masses are in grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
  #[serde(default)]
  pub sample_pk: Option<i64>,
  #[serde(default)]
  pub calendar_date: Option<String>,
  #[serde(default)]
  pub weight: Option<f64>,
  #[serde(default)]
  pub bmi: Option<f64>,
  #[serde(default)]
  pub body_fat: Option<f64>,
  #[serde(default)]
  pub body_water: Option<f64>,
  #[serde(default)]
  pub bone_mass: Option<f64>,
  #[serde(default)]
  pub muscle_mass: Option<f64>,
  #[serde(default)]
  pub source_type: Option<String>,
}

/// Body composition samples over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyComposition {
  #[serde(default)]
  pub start_date: Option<String>,
  #[serde(default)]
  pub end_date: Option<String>,
  #[serde(default)]
  pub date_weight_list: Vec<WeightEntry>,
  #[serde(default)]
  pub total_average: Option<WeightEntry>,
}
