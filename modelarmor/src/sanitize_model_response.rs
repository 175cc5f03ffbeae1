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

// [START modelarmor_sanitize_model_response]
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{DataItem, SanitizeModelResponseResponse};

pub async fn sample(
    client: &ModelArmor,
    template_name: &str,
    model_response: &str,
) -> anyhow::Result<SanitizeModelResponseResponse> {
    let response = client
        .sanitize_model_response()
        .set_name(template_name)
        .set_model_response_data(DataItem::new().set_text(model_response))
        .send()
        .await?;

    if let Some(result) = &response.sanitization_result {
        println!(
            "model response sanitization verdict: {}",
            result.filter_match_state
        );
    }
    Ok(response)
}
// [END modelarmor_sanitize_model_response]
