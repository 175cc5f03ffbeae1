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

// [START kms_decrypt_symmetric]
use google_cloud_kms_v1::client::KeyManagementService;

pub async fn sample(
    client: &KeyManagementService,
    crypto_key_name: &str,
    ciphertext: &[u8],
) -> anyhow::Result<Vec<u8>> {
    let checksum = crc32c::crc32c(ciphertext) as i64;
    let response = client
        .decrypt()
        .set_name(crypto_key_name)
        .set_ciphertext(ciphertext.to_vec())
        .set_ciphertext_crc32c(checksum)
        .send()
        .await?;

    println!(
        "decrypted plaintext: {}",
        String::from_utf8_lossy(&response.plaintext)
    );
    Ok(response.plaintext.to_vec())
}
// [END kms_decrypt_symmetric]
