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

// [START livestream_get_asset]
use google_cloud_video_livestream_v1::client::LivestreamService;
use google_cloud_video_livestream_v1::model::Asset;

pub async fn sample(client: &LivestreamService, asset_name: &str) -> anyhow::Result<Asset> {
    let asset = client.get_asset().set_name(asset_name).send().await?;

    println!("asset {} is in state {}", asset.name, asset.state);
    Ok(asset)
}
// [END livestream_get_asset]
