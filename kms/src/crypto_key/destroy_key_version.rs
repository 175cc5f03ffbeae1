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

// [START kms_destroy_key_version]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::CryptoKeyVersion;

pub async fn sample(
    client: &KeyManagementService,
    version_name: &str,
) -> anyhow::Result<CryptoKeyVersion> {
    let version = client
        .destroy_crypto_key_version()
        .set_name(version_name)
        .send()
        .await?;

    println!(
        "scheduled key version for destruction: {} (state {})",
        version.name, version.state
    );
    Ok(version)
}
// [END kms_destroy_key_version]
