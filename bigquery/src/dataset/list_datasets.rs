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

// [START bigquery_list_datasets]
use google_cloud_bigquery_v2::client::DatasetService;
use google_cloud_gax::paginator::ItemPaginator as _;

pub async fn sample(client: &DatasetService, project_id: &str) -> anyhow::Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut datasets = client.list_datasets().set_project_id(project_id).by_item();
    while let Some(dataset) = datasets.next().await {
        let dataset = dataset?;
        println!("dataset: {}", dataset.id);
        ids.push(dataset.id);
    }

    Ok(ids)
}
// [END bigquery_list_datasets]
