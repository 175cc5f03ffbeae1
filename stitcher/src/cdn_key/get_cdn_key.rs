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

// [START videostitcher_get_cdn_key]
use google_cloud_video_stitcher_v1::client::VideoStitcherService;
use google_cloud_video_stitcher_v1::model::CdnKey;

pub async fn sample(client: &VideoStitcherService, cdn_key_name: &str) -> anyhow::Result<CdnKey> {
    let cdn_key = client.get_cdn_key().set_name(cdn_key_name).send().await?;

    println!("CDN key {} covers {}", cdn_key.name, cdn_key.hostname);
    Ok(cdn_key)
}
// [END videostitcher_get_cdn_key]
