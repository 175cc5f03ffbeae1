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

// [START firestore_list_databases]
use google_cloud_firestore_admin_v1::client::FirestoreAdmin;

pub async fn sample(client: &FirestoreAdmin, project_id: &str) -> anyhow::Result<Vec<String>> {
    let response = client
        .list_databases()
        .set_parent(format!("projects/{project_id}"))
        .send()
        .await?;

    let mut names = Vec::new();
    for database in response.databases {
        println!("database: {}", database.name);
        names.push(database.name);
    }
    Ok(names)
}
// [END firestore_list_databases]
