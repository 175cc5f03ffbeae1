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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    use google_cloud_kms_v1 as kms;
    use samples_test_utils::resource_names;

    // Key rings cannot be deleted, so each run creates a fresh ring and
    // schedules its key versions for destruction at the end.
    #[tokio::test(flavor = "multi_thread")]
    async fn key_lifecycle() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
        let location_id =
            std::env::var("GOOGLE_CLOUD_TEST_REGION").unwrap_or("us-central1".to_string());

        let client = kms::client::KeyManagementService::builder().build().await?;
        let key_ring_id = resource_names::random_key_id();
        let key_id = resource_names::random_key_id();

        tracing::info!("testing create_key_ring()");
        let key_ring = kms_samples::key_ring::create_key_ring::sample(
            &client,
            &project_id,
            &location_id,
            &key_ring_id,
        )
        .await?;

        tracing::info!("testing get_key_ring()");
        let found = kms_samples::key_ring::get_key_ring::sample(
            &client,
            &project_id,
            &location_id,
            &key_ring_id,
        )
        .await?;
        assert_eq!(found.name, key_ring.name);

        tracing::info!("testing list_key_rings()");
        let rings =
            kms_samples::key_ring::list_key_rings::sample(&client, &project_id, &location_id)
                .await?;
        assert!(rings.contains(&key_ring.name), "{rings:?}");

        tracing::info!("testing create_crypto_key()");
        let key =
            kms_samples::crypto_key::create_crypto_key::sample(&client, &key_ring.name, &key_id)
                .await?;

        tracing::info!("testing list_crypto_keys()");
        let keys =
            kms_samples::crypto_key::list_crypto_keys::sample(&client, &key_ring.name).await?;
        assert!(keys.contains(&key.name), "{keys:?}");

        tracing::info!("testing update_crypto_key()");
        let updated = kms_samples::crypto_key::update_crypto_key::sample(&client, &key.name).await?;
        assert_eq!(
            updated.labels.get("environment").map(String::as_str),
            Some("test")
        );

        tracing::info!("testing encrypt/decrypt round trip");
        let plaintext = b"the quick brown fox";
        let encrypted = kms_samples::encrypt_symmetric::sample(&client, &key.name, plaintext).await?;
        let decrypted =
            kms_samples::decrypt_symmetric::sample(&client, &key.name, &encrypted.ciphertext)
                .await?;
        assert_eq!(decrypted, plaintext);

        tracing::info!("testing create_key_version()");
        let version =
            kms_samples::crypto_key::create_key_version::sample(&client, &key.name).await?;

        tracing::info!("testing destroy_key_version()");
        kms_samples::crypto_key::destroy_key_version::sample(&client, &version.name).await?;
        kms_samples::crypto_key::destroy_key_version::sample(
            &client,
            &format!("{}/cryptoKeyVersions/1", key.name),
        )
        .await?;

        Ok(())
    }
}
