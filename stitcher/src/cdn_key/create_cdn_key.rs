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

// [START videostitcher_create_cdn_key]
use google_cloud_lro::Poller;
use google_cloud_video_stitcher_v1::client::VideoStitcherService;
use google_cloud_video_stitcher_v1::model::{CdnKey, GoogleCdnKey};

pub async fn sample(
    client: &VideoStitcherService,
    project_id: &str,
    location_id: &str,
    cdn_key_id: &str,
    hostname: &str,
    key_name: &str,
    private_key: &[u8],
) -> anyhow::Result<CdnKey> {
    let cdn_key = client
        .create_cdn_key()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_cdn_key_id(cdn_key_id)
        .set_cdn_key(
            CdnKey::new().set_hostname(hostname).set_google_cdn_key(
                GoogleCdnKey::new()
                    .set_key_name(key_name)
                    .set_private_key(private_key.to_vec()),
            ),
        )
        .poller()
        .until_done()
        .await?;

    println!("created CDN key {}", cdn_key.name);
    Ok(cdn_key)
}
// [END videostitcher_create_cdn_key]
