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

use crate::download::DownloadResolver;
use crate::endpoints::{
  activities::ActivityEndpoints, devices::DeviceEndpoints, user::UserEndpoints,
  wellness::WellnessEndpoints,
};
use crate::pagination::Paginator;
use crate::session::SessionContext;
use gc_core::{Config, Result};
use std::sync::Arc;

/// Main Garmin Connect API client
///
/// Provides access to all endpoints through organized endpoint groups. Every
/// group shares one [`SessionContext`], so sign-in, session renewal and the
/// cached profile are handled once for the whole client.
///
/// # Examples
///
/// ```ignore
/// use gc_client::GarminConnectClient;
/// use gc_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GarminConnectClient::new(Config::from_env()?)?;
///
///     let recent = client.activities().list(0, 10).await?;
///     println!("Fetched {} activities", recent.len());
///
///     let today = chrono::Local::now().date_naive();
///     let summary = client.wellness().user_summary(today).await?;
///     println!("Steps today: {:?}", summary.total_steps);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GarminConnectClient {
  context: Arc<SessionContext>,
  paginator: Paginator,
}

impl GarminConnectClient {
  /// Create a client that signs in with the configured credentials
  ///
  /// No request is made until the first endpoint call.
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let context = Arc::new(SessionContext::from_config(&config)?);
    Ok(Self { context, paginator: Paginator::from_config(&config) })
  }

  /// Create a client around an existing session context
  pub fn with_context(context: Arc<SessionContext>, paginator: Paginator) -> Self {
    Self { context, paginator }
  }

  /// The shared session context
  pub fn context(&self) -> &Arc<SessionContext> {
    &self.context
  }

  /// Activity listing, sub-resources and exports
  pub fn activities(&self) -> ActivityEndpoints {
    ActivityEndpoints::new(self.context.clone(), self.paginator)
  }

  /// Daily wellness data
  pub fn wellness(&self) -> WellnessEndpoints {
    WellnessEndpoints::new(self.context.clone())
  }

  /// Registered devices
  pub fn devices(&self) -> DeviceEndpoints {
    DeviceEndpoints::new(self.context.clone())
  }

  /// Profile, preferences, settings and personal records
  pub fn user(&self) -> UserEndpoints {
    UserEndpoints::new(self.context.clone())
  }

  /// Activity exports
  pub fn downloads(&self) -> DownloadResolver {
    DownloadResolver::new(self.context.clone())
  }
}
