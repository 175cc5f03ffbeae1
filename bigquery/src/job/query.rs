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

// [START bigquery_query]
use google_cloud_bigquery_v2::client::JobService;
use google_cloud_bigquery_v2::model::{QueryRequest, QueryResponse};

pub async fn sample(
    client: &JobService,
    project_id: &str,
    query: &str,
) -> anyhow::Result<QueryResponse> {
    let response = client
        .query()
        .set_project_id(project_id)
        .set_query_request(QueryRequest::new().set_query(query).set_use_legacy_sql(false))
        .send()
        .await?;

    for row in &response.rows {
        println!("row: {row:?}");
    }
    Ok(response)
}
// [END bigquery_query]
