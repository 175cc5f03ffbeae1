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

// [START dialogflow_create_intent]
use google_cloud_dialogflow_v2::client::Intents;
use google_cloud_dialogflow_v2::model::{Intent, intent};

pub async fn sample(
    client: &Intents,
    project_id: &str,
    display_name: &str,
    training_phrase_parts: &[&str],
    message_text: &str,
) -> anyhow::Result<Intent> {
    let training_phrases = training_phrase_parts
        .iter()
        .map(|part| {
            intent::TrainingPhrase::new()
                .set_type(intent::training_phrase::Type::Example)
                .set_parts([intent::training_phrase::Part::new().set_text(*part)])
        })
        .collect::<Vec<_>>();

    let created = client
        .create_intent()
        .set_parent(format!("projects/{project_id}/agent"))
        .set_intent(
            Intent::new()
                .set_display_name(display_name)
                .set_training_phrases(training_phrases)
                .set_messages([intent::Message::new()
                    .set_text(intent::message::Text::new().set_text([message_text]))]),
        )
        .send()
        .await?;

    println!("created intent {}", created.name);
    Ok(created)
}
// [END dialogflow_create_intent]
