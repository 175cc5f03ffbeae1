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

// [START kms_create_key_symmetric_encrypt_decrypt]
use google_cloud_kms_v1::client::KeyManagementService;
use google_cloud_kms_v1::model::{
    CryptoKey, CryptoKeyVersionTemplate, crypto_key::CryptoKeyPurpose,
    crypto_key_version::CryptoKeyVersionAlgorithm,
};

pub async fn sample(
    client: &KeyManagementService,
    key_ring_name: &str,
    key_id: &str,
) -> anyhow::Result<CryptoKey> {
    let crypto_key = client
        .create_crypto_key()
        .set_parent(key_ring_name)
        .set_crypto_key_id(key_id)
        .set_crypto_key(
            CryptoKey::new()
                .set_purpose(CryptoKeyPurpose::EncryptDecrypt)
                .set_version_template(
                    CryptoKeyVersionTemplate::new()
                        .set_algorithm(CryptoKeyVersionAlgorithm::GoogleSymmetricEncryption),
                )
                .set_labels([("team", "samples")]),
        )
        .send()
        .await?;

    println!("created symmetric key {}", crypto_key.name);
    Ok(crypto_key)
}
// [END kms_create_key_symmetric_encrypt_decrypt]
