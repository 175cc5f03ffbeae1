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

// [START dialogflow_delete_context]
use google_cloud_dialogflow_v2::client::Contexts;

pub async fn sample(client: &Contexts, context_name: &str) -> anyhow::Result<()> {
    client.delete_context().set_name(context_name).send().await?;

    println!("deleted context {context_name}");
    Ok(())
}
// [END dialogflow_delete_context]
