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

//! # gc-client
//!
//! A typed client for the Garmin Connect private REST API.
//!
//! ## Features
//!
//! - **Session handling**: signs in lazily, renews an expired session once
//!   and retries the request, and never runs two logins at the same time
//! - **Identity caching**: the user's display name (needed by the wellness
//!   endpoints) and preferences are fetched once per session
//! - **Pagination**: date-range activity searches are followed to the end
//! - **Exports**: original, TCX, GPX, KML and CSV downloads as raw bytes
//! - **Type Safe**: strongly typed responses using gc-models
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gc_client::{DownloadFormat, GarminConnectClient};
//! use gc_core::Config;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GarminConnectClient::new(Config::from_env()?)?;
//!
//!     let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!     let to = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
//!     let runs = client.activities().by_date(from, to, Some("running")).await?;
//!
//!     if let Some(run) = runs.first() {
//!         let gpx = client.activities().download(run.activity_id, DownloadFormat::Gpx).await?;
//!         std::fs::write("run.gpx", gpx)?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, gc_core::Error>`; authentication, HTTP
//! status, deserialization and argument failures are distinct variants.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
mod cache;
pub mod client;
pub mod download;
pub mod endpoints;
pub mod pagination;
pub mod query;
pub mod session;
pub mod transport;

// Re-export the main client and common types
pub use auth::{Authenticator, Session, SsoAuthenticator};
pub use cache::CacheState;
pub use client::GarminConnectClient;
pub use download::{download_path, DownloadResolver};
pub use gc_core::{Config, Credentials, DownloadFormat, Error, Result};
pub use gc_models::*;
pub use pagination::{PageRequest, Paginator};
pub use query::{format_date, path_segment, QueryParams};
pub use session::{SessionContext, SessionState};
pub use transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  activities::ActivityEndpoints, devices::DeviceEndpoints, user::UserEndpoints,
  wellness::WellnessEndpoints,
};
