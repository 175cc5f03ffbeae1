// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A small retry helper for flaky setup RPCs in the integration tests.
//!
//! The client libraries already retry within a single request via their
//! retry policies. The integration tests also need to retry across whole
//! sample invocations, e.g. when a freshly created topic has not propagated
//! yet. This helper retries a fixed number of attempts, doubling the delay
//! between attempts, and only for transient RPC status codes. It operates
//! on `anyhow::Result` so the samples can be retried without unwrapping
//! their errors first.

use google_cloud_gax as gax;
use gax::error::rpc::Code;
use std::future::Future;
use std::time::Duration;

/// The default number of attempts before giving up.
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// The default delay before the first retry. Doubles after every attempt.
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

/// Returns true if the error carries a status code worth retrying.
pub fn is_transient(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<gax::error::Error>()
        .and_then(|e| e.status())
        .is_some_and(|status| {
            matches!(
                status.code,
                Code::Unavailable | Code::DeadlineExceeded | Code::Aborted
            )
        })
}

/// Invoke `operation` up to `attempts` times, sleeping with exponentially
/// increasing delay between attempts. Non-transient errors and the last
/// attempt's error are returned to the caller unchanged.
pub async fn with_backoff<T, F, Fut>(
    attempts: u32,
    initial_delay: Duration,
    mut operation: F,
) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut delay = initial_delay;
    let mut attempt = 1_u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts && is_transient(&e) => {
                tracing::info!("attempt {attempt} failed, retrying in {delay:?}: {e}");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
