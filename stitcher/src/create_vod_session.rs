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

// [START videostitcher_create_vod_session]
use google_cloud_video_stitcher_v1::client::VideoStitcherService;
use google_cloud_video_stitcher_v1::model::{AdTracking, VodSession};

pub async fn sample(
    client: &VideoStitcherService,
    project_id: &str,
    location_id: &str,
    source_uri: &str,
    ad_tag_uri: &str,
) -> anyhow::Result<VodSession> {
    let session = client
        .create_vod_session()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_vod_session(
            VodSession::new()
                .set_source_uri(source_uri)
                .set_ad_tag_uri(ad_tag_uri)
                .set_ad_tracking(AdTracking::Client),
        )
        .send()
        .await?;

    println!("created VOD session {}", session.name);
    println!("play URI: {}", session.play_uri);
    Ok(session)
}
// [END videostitcher_create_vod_session]
