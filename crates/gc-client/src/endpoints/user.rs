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

//! Profile, preferences, settings and personal record endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::query::{path_segment, QueryParams};
use crate::session::SessionContext;
use gc_core::Result;
use gc_models::user::*;
use std::sync::Arc;
use tracing::instrument;

pub(crate) const USER_SETTINGS_URL: &str = "/proxy/userprofile-service/userprofile/user-settings";
pub(crate) const PERSONAL_RECORD_URL: &str = "/proxy/personalrecord-service/personalrecord/";

/// Endpoints about the account owner
#[derive(Debug, Clone)]
pub struct UserEndpoints {
  context: Arc<SessionContext>,
}

impl_endpoint_base!(UserEndpoints);

impl UserEndpoints {
  /// Create a new user endpoints instance
  pub fn new(context: Arc<SessionContext>) -> Self {
    Self { context }
  }

  /// Profile of the signed-in user (cached per session)
  pub async fn social_profile(&self) -> Result<Arc<SocialProfile>> {
    self.context.get_profile().await
  }

  /// Display preferences of the signed-in user (cached per session)
  pub async fn preferences(&self) -> Result<Arc<UserPreferences>> {
    self.context.get_preferences().await
  }

  /// Account settings; always fetched fresh
  #[instrument(skip(self))]
  pub async fn settings(&self) -> Result<UserSettings> {
    self.get_json(USER_SETTINGS_URL, QueryParams::new()).await
  }

  /// Personal records of `owner_display_name`
  #[instrument(skip(self))]
  pub async fn personal_records(&self, owner_display_name: &str) -> Result<Vec<PersonalRecord>> {
    let path = format!("{}prs/{}", PERSONAL_RECORD_URL, path_segment(owner_display_name));
    self.get_json(&path, QueryParams::new()).await
  }

  /// Personal records of the signed-in user
  pub async fn own_personal_records(&self) -> Result<Vec<PersonalRecord>> {
    let display_name = self.display_name().await?;
    self.personal_records(&display_name).await
  }
}
