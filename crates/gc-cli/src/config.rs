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

use anyhow::{Context, Result};
use gc_client::GarminConnectClient;
use gc_core::Config as CoreConfig;

/// Runtime configuration for the `gc` binary
#[derive(Debug, Clone)]
pub struct Config {
  pub client_config: CoreConfig,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let client_config = CoreConfig::from_env()
      .context("Failed to load configuration; GARMIN_USERNAME and GARMIN_PASSWORD must be set")?;

    Ok(Self { client_config })
  }

  /// Build a client from this configuration
  pub fn client(&self) -> Result<GarminConnectClient> {
    GarminConnectClient::new(self.client_config.clone()).context("Failed to create API client")
  }
}
