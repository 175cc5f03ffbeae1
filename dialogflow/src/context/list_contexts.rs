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

// [START dialogflow_list_contexts]
use google_cloud_dialogflow_v2::client::Contexts;
use google_cloud_gax::paginator::ItemPaginator as _;

pub async fn sample(
    client: &Contexts,
    project_id: &str,
    session_id: &str,
) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut contexts = client
        .list_contexts()
        .set_parent(format!("projects/{project_id}/agent/sessions/{session_id}"))
        .by_item();
    while let Some(context) = contexts.next().await {
        let context = context?;
        println!(
            "context: {} (lifespan {})",
            context.name, context.lifespan_count
        );
        names.push(context.name);
    }

    Ok(names)
}
// [END dialogflow_list_contexts]
