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

// [START videostitcher_delete_cdn_key]
use google_cloud_lro::Poller;
use google_cloud_video_stitcher_v1::client::VideoStitcherService;

pub async fn sample(client: &VideoStitcherService, cdn_key_name: &str) -> anyhow::Result<()> {
    client
        .delete_cdn_key()
        .set_name(cdn_key_name)
        .poller()
        .until_done()
        .await?;

    println!("deleted CDN key {cdn_key_name}");
    Ok(())
}
// [END videostitcher_delete_cdn_key]
