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

// [START kms_encrypt_symmetric]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::EncryptResponse;

pub async fn sample(
    client: &KeyManagementService,
    crypto_key_name: &str,
    plaintext: &[u8],
) -> anyhow::Result<EncryptResponse> {
    // The service verifies the checksum to guard against in-transit
    // corruption of the plaintext.
    let checksum = crc32c::crc32c(plaintext) as i64;
    let response = client
        .encrypt()
        .set_name(crypto_key_name)
        .set_plaintext(plaintext.to_vec())
        .set_plaintext_crc32c(checksum)
        .send()
        .await?;

    println!("ciphertext is {} bytes", response.ciphertext.len());
    Ok(response)
}
// [END kms_encrypt_symmetric]
