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

//! Device registration and settings endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::query::QueryParams;
use crate::session::SessionContext;
use gc_core::Result;
use gc_models::device::*;
use std::sync::Arc;
use tracing::instrument;

pub(crate) const DEVICE_LIST_URL: &str = "/proxy/device-service/deviceregistration/devices";
pub(crate) const DEVICE_SERVICE_URL: &str = "/proxy/device-service/deviceservice/";

/// Device endpoints
#[derive(Debug, Clone)]
pub struct DeviceEndpoints {
  context: Arc<SessionContext>,
}

impl_endpoint_base!(DeviceEndpoints);

impl DeviceEndpoints {
  /// Create a new device endpoints instance
  pub fn new(context: Arc<SessionContext>) -> Self {
    Self { context }
  }

  /// Devices registered to the account
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Device>> {
    self.get_json(DEVICE_LIST_URL, QueryParams::new()).await
  }

  /// Settings stored on one device
  #[instrument(skip(self))]
  pub async fn settings(&self, device_id: u64) -> Result<DeviceSettings> {
    let path = format!("{}device-info/settings/{}", DEVICE_SERVICE_URL, device_id);
    self.get_json(&path, QueryParams::new()).await
  }

  /// Device that most recently synced data
  #[instrument(skip(self))]
  pub async fn last_used(&self) -> Result<DeviceLastUsed> {
    let path = format!("{}mylastused", DEVICE_SERVICE_URL);
    self.get_json(&path, QueryParams::new()).await
  }
}
