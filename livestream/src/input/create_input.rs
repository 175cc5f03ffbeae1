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

// [START livestream_create_input]
use google_cloud_lro::Poller;
use google_cloud_video_livestream_v1::client::LivestreamService;
use google_cloud_video_livestream_v1::model::{Input, input};

pub async fn sample(
    client: &LivestreamService,
    project_id: &str,
    location_id: &str,
    input_id: &str,
) -> anyhow::Result<Input> {
    let input = client
        .create_input()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_input_id(input_id)
        .set_input(Input::new().set_type(input::Type::RtmpPush))
        .poller()
        .until_done()
        .await?;

    println!("created input {}", input.name);
    Ok(input)
}
// [END livestream_create_input]
