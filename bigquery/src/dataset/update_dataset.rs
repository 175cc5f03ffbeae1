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

// [START bigquery_update_dataset_description]
use google_cloud_bigquery_v2::{client::DatasetService, model::Dataset};

pub async fn sample(
    client: &DatasetService,
    project_id: &str,
    dataset_id: &str,
    description: &str,
) -> anyhow::Result<Dataset> {
    let current = client
        .get_dataset()
        .set_project_id(project_id)
        .set_dataset_id(dataset_id)
        .send()
        .await?;

    // Patch only touches the fields set on the request body. The etag makes
    // the update fail if the dataset changed since the read above.
    let dataset = client
        .patch_dataset()
        .set_project_id(project_id)
        .set_dataset_id(dataset_id)
        .set_dataset(
            Dataset::new()
                .set_description(description)
                .set_etag(current.etag),
        )
        .send()
        .await?;

    println!("updated description of dataset {dataset_id}");
    Ok(dataset)
}
// [END bigquery_update_dataset_description]
