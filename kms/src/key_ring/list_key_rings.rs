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

// [START kms_list_key_rings]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_kms_v1::client::KeyManagementService;

pub async fn sample(
    client: &KeyManagementService,
    project_id: &str,
    location_id: &str,
) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut key_rings = client
        .list_key_rings()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .by_item();
    while let Some(key_ring) = key_rings.next().await {
        let key_ring = key_ring?;
        println!("key ring: {}", key_ring.name);
        names.push(key_ring.name);
    }

    Ok(names)
}
// [END kms_list_key_rings]
