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

// [START pubsub_list_topics]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_pubsub_v1::client::Publisher;

pub async fn sample(client: &Publisher, project_id: &str) -> anyhow::Result<Vec<String>> {
    let mut names = Vec::new();
    let mut topics = client
        .list_topics()
        .set_project(format!("projects/{project_id}"))
        .by_item();
    while let Some(topic) = topics.next().await {
        let topic = topic?;
        println!("topic: {}", topic.name);
        names.push(topic.name);
    }

    Ok(names)
}
// [END pubsub_list_topics]
