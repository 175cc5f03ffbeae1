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

// [START livestream_create_asset]
use google_cloud_lro::Poller;
use google_cloud_video_livestream_v1::client::LivestreamService;
use google_cloud_video_livestream_v1::model::{Asset, asset};

pub async fn sample(
    client: &LivestreamService,
    project_id: &str,
    location_id: &str,
    asset_id: &str,
    source_uri: &str,
) -> anyhow::Result<Asset> {
    let asset = client
        .create_asset()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_asset_id(asset_id)
        .set_asset(Asset::new().set_video(asset::VideoAsset::new().set_uri(source_uri)))
        .poller()
        .until_done()
        .await?;

    println!("created asset {}", asset.name);
    Ok(asset)
}
// [END livestream_create_asset]
