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

// [START videostitcher_list_cdn_keys]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_video_stitcher_v1::client::VideoStitcherService;

pub async fn sample(
    client: &VideoStitcherService,
    project_id: &str,
    location_id: &str,
) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut cdn_keys = client
        .list_cdn_keys()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .by_item();
    while let Some(cdn_key) = cdn_keys.next().await {
        let cdn_key = cdn_key?;
        println!("CDN key: {}", cdn_key.name);
        names.push(cdn_key.name);
    }

    Ok(names)
}
// [END videostitcher_list_cdn_keys]
