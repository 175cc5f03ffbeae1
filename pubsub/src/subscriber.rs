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

// [START pubsub_subscriber_sync_pull]
use google_cloud_pubsub_v1::client::Subscriber;

pub async fn sample(
    client: &Subscriber,
    project_id: &str,
    subscription_id: &str,
) -> anyhow::Result<usize> {
    let subscription = format!("projects/{project_id}/subscriptions/{subscription_id}");
    let response = client
        .pull()
        .set_subscription(&subscription)
        .set_max_messages(10)
        .send()
        .await?;

    let mut ack_ids = Vec::new();
    for received in &response.received_messages {
        if let Some(message) = &received.message {
            println!("received: {}", String::from_utf8_lossy(&message.data));
        }
        ack_ids.push(received.ack_id.clone());
    }
    let count = ack_ids.len();

    if !ack_ids.is_empty() {
        client
            .acknowledge()
            .set_subscription(&subscription)
            .set_ack_ids(ack_ids)
            .send()
            .await?;
    }

    println!("pulled and acknowledged {count} message(s)");
    Ok(count)
}
// [END pubsub_subscriber_sync_pull]
