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

// [START firestore_list_indexes]
use google_cloud_firestore_admin_v1::client::FirestoreAdmin;
use google_cloud_gax::paginator::ItemPaginator as _;

pub async fn sample(
    client: &FirestoreAdmin,
    project_id: &str,
    database_id: &str,
    collection_id: &str,
) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut indexes = client
        .list_indexes()
        .set_parent(format!(
            "projects/{project_id}/databases/{database_id}/collectionGroups/{collection_id}"
        ))
        .by_item();
    while let Some(index) = indexes.next().await {
        let index = index?;
        println!("index: {} (state {})", index.name, index.state);
        names.push(index.name);
    }

    Ok(names)
}
// [END firestore_list_indexes]
