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

//! Endpoint groups making up the API facade

pub mod activities;
pub mod devices;
pub mod user;
pub mod wellness;

use crate::query::QueryParams;
use crate::session::SessionContext;
use gc_core::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub(crate) trait EndpointBase {
  /// Get a reference to the shared session context
  fn context(&self) -> &Arc<SessionContext>;

  /// GET `path` and deserialize the response
  async fn get_json<T: DeserializeOwned>(&self, path: &str, query: QueryParams) -> Result<T> {
    self.context().request_json(path, query).await
  }

  /// Display name of the signed-in user, resolved through the profile cache
  async fn display_name(&self) -> Result<String> {
    Ok(self.context().get_profile().await?.display_name.clone())
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn context(&self) -> &Arc<SessionContext> {
        &self.context
      }
    }
  };
}

pub(crate) use impl_endpoint_base;
