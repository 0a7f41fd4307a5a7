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

//! Activity list entries and per-activity sub-resources

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by activity list entries (`2024-03-05 07:12:31`)
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Activity type descriptor embedded in activity records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
  pub type_id: u64,
  pub type_key: String,
  #[serde(default)]
  pub parent_type_id: Option<u64>,
}

/// Entry returned by the activity search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
  /// Unique activity id
  pub activity_id: u64,

  #[serde(default)]
  pub activity_name: Option<String>,

  #[serde(default)]
  pub description: Option<String>,

  /// Local start time (`yyyy-MM-dd HH:mm:ss`)
  #[serde(default)]
  pub start_time_local: Option<String>,

  #[serde(default, rename = "startTimeGMT")]
  pub start_time_gmt: Option<String>,

  #[serde(default)]
  pub activity_type: Option<ActivityType>,

  /// Distance in meters
  #[serde(default)]
  pub distance: Option<f64>,

  /// Duration in seconds
  #[serde(default)]
  pub duration: Option<f64>,

  #[serde(default)]
  pub elapsed_duration: Option<f64>,

  #[serde(default)]
  pub moving_duration: Option<f64>,

  #[serde(default)]
  pub elevation_gain: Option<f64>,

  #[serde(default)]
  pub elevation_loss: Option<f64>,

  /// Average speed in meters per second
  #[serde(default)]
  pub average_speed: Option<f64>,

  #[serde(default)]
  pub max_speed: Option<f64>,

  #[serde(default)]
  pub calories: Option<f64>,

  #[serde(default, rename = "averageHR")]
  pub average_hr: Option<f64>,

  #[serde(default, rename = "maxHR")]
  pub max_hr: Option<f64>,

  #[serde(default)]
  pub steps: Option<u64>,

  #[serde(default)]
  pub owner_display_name: Option<String>,

  #[serde(default)]
  pub device_id: Option<u64>,
}

impl Activity {
  /// Parse the local start time, if present and well formed
  pub fn start_local(&self) -> Option<NaiveDateTime> {
    self
      .start_time_local
      .as_deref()
      .and_then(|raw| NaiveDateTime::parse_from_str(raw, LOCAL_TIME_FORMAT).ok())
  }

  /// Type key such as `running` or `strength_training`
  pub fn type_key(&self) -> Option<&str> {
    self.activity_type.as_ref().map(|t| t.type_key.as_str())
  }
}

/// Single set of a strength activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
  #[serde(default)]
  pub set_type: Option<String>,
  #[serde(default)]
  pub repetition_count: Option<u32>,
  /// Weight in grams
  #[serde(default)]
  pub weight: Option<f64>,
  #[serde(default)]
  pub duration: Option<f64>,
  #[serde(default)]
  pub start_time: Option<String>,
  #[serde(default)]
  pub exercises: Vec<ExerciseCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCategory {
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub probability: Option<f64>,
}

/// Exercise sets of a strength activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSets {
  pub activity_id: u64,
  #[serde(default)]
  pub exercise_sets: Vec<ExerciseSet>,
}

/// Lap recorded during an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lap {
  #[serde(default)]
  pub lap_index: Option<u32>,
  #[serde(default, rename = "startTimeGMT")]
  pub start_time_gmt: Option<String>,
  #[serde(default)]
  pub distance: Option<f64>,
  #[serde(default)]
  pub duration: Option<f64>,
  #[serde(default)]
  pub moving_duration: Option<f64>,
  #[serde(default)]
  pub average_speed: Option<f64>,
  #[serde(default, rename = "averageHR")]
  pub average_hr: Option<f64>,
  #[serde(default, rename = "maxHR")]
  pub max_hr: Option<f64>,
  #[serde(default)]
  pub calories: Option<f64>,
}

/// Laps of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySplits {
  pub activity_id: u64,
  #[serde(default)]
  pub lap_dtos: Vec<Lap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSummaryEntry {
  pub split_type: String,
  #[serde(default)]
  pub no_of_splits: Option<u32>,
  #[serde(default)]
  pub distance: Option<f64>,
  #[serde(default)]
  pub duration: Option<f64>,
  #[serde(default)]
  pub moving_duration: Option<f64>,
  #[serde(default)]
  pub elevation_gain: Option<f64>,
  #[serde(default)]
  pub average_speed: Option<f64>,
}

/// Aggregated split summaries (run/walk/idle segments)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSummary {
  pub activity_id: u64,
  #[serde(default)]
  pub split_summaries: Vec<SplitSummaryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherType {
  #[serde(default)]
  pub weather_type_pk: Option<u64>,
  #[serde(default)]
  pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherStation {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
}

/// Weather observed at the activity location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityWeather {
  #[serde(default)]
  pub issue_date: Option<String>,
  /// Temperature in Fahrenheit, as reported by the service
  #[serde(default)]
  pub temp: Option<f64>,
  #[serde(default)]
  pub apparent_temp: Option<f64>,
  #[serde(default)]
  pub dew_point: Option<f64>,
  #[serde(default)]
  pub relative_humidity: Option<f64>,
  #[serde(default)]
  pub wind_direction: Option<f64>,
  #[serde(default)]
  pub wind_direction_compass_point: Option<String>,
  #[serde(default)]
  pub wind_speed: Option<f64>,
  #[serde(default)]
  pub wind_gust: Option<f64>,
  #[serde(default)]
  pub latitude: Option<f64>,
  #[serde(default)]
  pub longitude: Option<f64>,
  #[serde(default)]
  pub weather_station_dto: Option<WeatherStation>,
  #[serde(default)]
  pub weather_type_dto: Option<WeatherType>,
}

/// Time spent in one heart rate zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrTimeInZone {
  pub zone_number: u32,
  #[serde(default)]
  pub secs_in_zone: Option<f64>,
  #[serde(default)]
  pub zone_low_boundary: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricUnit {
  #[serde(default)]
  pub id: Option<u64>,
  #[serde(default)]
  pub key: Option<String>,
  #[serde(default)]
  pub factor: Option<f64>,
}

/// Describes the column at `metrics_index` of each detail sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDescriptor {
  pub metrics_index: usize,
  pub key: String,
  #[serde(default)]
  pub unit: Option<MetricUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailMetrics {
  #[serde(default)]
  pub metrics: Vec<Option<f64>>,
}

/// Sampled metrics and polyline of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetails {
  pub activity_id: u64,
  #[serde(default)]
  pub measurement_count: Option<u32>,
  #[serde(default)]
  pub metrics_count: Option<u32>,
  #[serde(default)]
  pub metric_descriptors: Vec<MetricDescriptor>,
  #[serde(default)]
  pub activity_detail_metrics: Vec<DetailMetrics>,
  /// Polyline payload, left untyped
  #[serde(default)]
  pub geo_polyline_dto: Option<serde_json::Value>,
  #[serde(default)]
  pub details_available: Option<bool>,
}

impl ActivityDetails {
  /// Column values for a metric key such as `directHeartRate`
  pub fn series(&self, key: &str) -> Option<Vec<Option<f64>>> {
    let index = self.metric_descriptors.iter().find(|d| d.key == key)?.metrics_index;
    Some(
      self.activity_detail_metrics.iter().map(|row| row.metrics.get(index).copied().flatten()).collect(),
    )
  }
}
