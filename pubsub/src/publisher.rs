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

// [START pubsub_quickstart_publisher]
use google_cloud_pubsub_v1::{client::Publisher, model::PubsubMessage};

pub async fn sample(
    client: &Publisher,
    project_id: &str,
    topic_id: &str,
) -> anyhow::Result<Vec<String>> {
    let response = client
        .publish()
        .set_topic(format!("projects/{project_id}/topics/{topic_id}"))
        .set_messages([PubsubMessage::new().set_data("Hello, World!")])
        .send()
        .await?;

    for message_id in &response.message_ids {
        println!("published message with ID: {message_id}");
    }
    Ok(response.message_ids)
}
// [END pubsub_quickstart_publisher]
