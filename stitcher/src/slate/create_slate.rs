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

// [START videostitcher_create_slate]
use google_cloud_lro::Poller;
use google_cloud_video_stitcher_v1::client::VideoStitcherService;
use google_cloud_video_stitcher_v1::model::Slate;

pub async fn sample(
    client: &VideoStitcherService,
    project_id: &str,
    location_id: &str,
    slate_id: &str,
    slate_uri: &str,
) -> anyhow::Result<Slate> {
    let slate = client
        .create_slate()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_slate_id(slate_id)
        .set_slate(Slate::new().set_uri(slate_uri))
        .poller()
        .until_done()
        .await?;

    println!("created slate {}", slate.name);
    Ok(slate)
}
// [END videostitcher_create_slate]
