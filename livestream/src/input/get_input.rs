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

// [START livestream_get_input]
use google_cloud_video_livestream_v1::client::LivestreamService;
use google_cloud_video_livestream_v1::model::Input;

pub async fn sample(client: &LivestreamService, input_name: &str) -> anyhow::Result<Input> {
    let input = client.get_input().set_name(input_name).send().await?;

    println!("input {} has type {}", input.name, input.r#type);
    Ok(input)
}
// [END livestream_get_input]
