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

// [START livestream_start_channel]
use google_cloud_lro::{Poller, PollingResult};
use google_cloud_video_livestream_v1::client::LivestreamService;

// Polls the start operation step by step to report progress. The other
// long-running samples use `.until_done()` instead.
pub async fn sample(client: &LivestreamService, channel_name: &str) -> anyhow::Result<()> {
    let mut poller = client.start_channel().set_name(channel_name).poller();

    while let Some(status) = poller.poll().await {
        match status {
            PollingResult::Completed(result) => {
                result?;
                println!("channel {channel_name} started");
            }
            PollingResult::InProgress(metadata) => {
                if let Some(metadata) = metadata {
                    println!("starting channel, requested at {:?}", metadata.create_time);
                }
            }
            PollingResult::PollingError(e) => {
                println!("transient error polling the start operation: {e}");
            }
        }
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;
    }

    Ok(())
}
// [END livestream_start_channel]
