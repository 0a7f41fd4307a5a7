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

//! Registered devices and their settings

use serde::{Deserialize, Serialize};

/// Device registered to the account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
  pub device_id: u64,
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub product_display_name: Option<String>,
  #[serde(default)]
  pub serial_number: Option<String>,
  #[serde(default)]
  pub part_number: Option<String>,
  #[serde(default)]
  pub device_status: Option<String>,
  #[serde(default)]
  pub current_firmware_version: Option<String>,
  #[serde(default)]
  pub primary_activity_tracker_indicator: Option<bool>,
}

/// Settings stored on a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSettings {
  pub device_id: u64,
  #[serde(default)]
  pub time_format: Option<String>,
  #[serde(default)]
  pub date_format: Option<String>,
  #[serde(default)]
  pub measurement_units: Option<String>,
  #[serde(default)]
  pub language: Option<i32>,
  #[serde(default)]
  pub backlight_mode: Option<String>,
  #[serde(default)]
  pub auto_sync_frequency: Option<String>,
  #[serde(default)]
  pub activity_tracking: Option<serde_json::Value>,
}

/// Device most recently used to record data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLastUsed {
  #[serde(default)]
  pub user_device_id: Option<u64>,
  #[serde(default)]
  pub user_profile_number: Option<u64>,
  #[serde(default)]
  pub application_number: Option<u64>,
  #[serde(default)]
  pub last_used_device_application_key: Option<String>,
  #[serde(default)]
  pub last_used_device_name: Option<String>,
  /// Epoch milliseconds
  #[serde(default)]
  pub last_used_device_upload_time: Option<i64>,
  #[serde(default)]
  pub image_url: Option<String>,
}
