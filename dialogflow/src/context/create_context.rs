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

// [START dialogflow_create_context]
use google_cloud_dialogflow_v2::{client::Contexts, model::Context};

pub async fn sample(
    client: &Contexts,
    project_id: &str,
    session_id: &str,
    context_id: &str,
) -> anyhow::Result<Context> {
    let session = format!("projects/{project_id}/agent/sessions/{session_id}");
    let context = client
        .create_context()
        .set_parent(&session)
        .set_context(
            Context::new()
                .set_name(format!("{session}/contexts/{context_id}"))
                .set_lifespan_count(5),
        )
        .send()
        .await?;

    println!("created context {}", context.name);
    Ok(context)
}
// [END dialogflow_create_context]
