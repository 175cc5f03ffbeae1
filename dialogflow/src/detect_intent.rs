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

// [START dialogflow_detect_intent_text]
use google_cloud_dialogflow_v2::client::Sessions;
use google_cloud_dialogflow_v2::model::{QueryInput, QueryResult, TextInput};

pub async fn sample(
    client: &Sessions,
    project_id: &str,
    session_id: &str,
    text: &str,
) -> anyhow::Result<Option<QueryResult>> {
    let response = client
        .detect_intent()
        .set_session(format!("projects/{project_id}/agent/sessions/{session_id}"))
        .set_query_input(
            QueryInput::new()
                .set_text(TextInput::new().set_text(text).set_language_code("en-US")),
        )
        .send()
        .await?;

    if let Some(result) = &response.query_result {
        println!("query text: {}", result.query_text);
        println!("fulfillment text: {}", result.fulfillment_text);
    }
    Ok(response.query_result)
}
// [END dialogflow_detect_intent_text]
