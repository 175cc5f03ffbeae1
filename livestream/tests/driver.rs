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
    use google_cloud_video_livestream_v1 as livestream;
    use samples_test_utils::{resource_names, retry};

    const VOD_SOURCE_URI: &str = "gs://cloud-samples-data/media/ForBiggerEscapes.mp4";

    #[tokio::test(flavor = "multi_thread")]
    async fn input_and_channel_lifecycle() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
        let location_id =
            std::env::var("GOOGLE_CLOUD_TEST_REGION").unwrap_or("us-central1".to_string());
        let output_uri = std::env::var("GOOGLE_CLOUD_TEST_BUCKET")
            .map(|bucket| format!("gs://{bucket}/livestream-outputs/"))?;

        let client = livestream::client::LivestreamService::builder()
            .build()
            .await?;
        let input_id = resource_names::random_lowercase_id();
        let channel_id = resource_names::random_lowercase_id();

        // The first call into a region can fail while the service spins up
        // capacity, so retry with backoff.
        tracing::info!("testing create_input()");
        let input = retry::with_backoff(
            retry::DEFAULT_ATTEMPTS,
            retry::DEFAULT_INITIAL_DELAY,
            || {
                livestream_samples::input::create_input::sample(
                    &client,
                    &project_id,
                    &location_id,
                    &input_id,
                )
            },
        )
        .await?;

        tracing::info!("testing get_input()");
        let found = livestream_samples::input::get_input::sample(&client, &input.name).await?;
        assert_eq!(found.name, input.name);

        tracing::info!("testing create_channel()");
        let channel = livestream_samples::channel::create_channel::sample(
            &client,
            &project_id,
            &location_id,
            &channel_id,
            &input.name,
            &output_uri,
        )
        .await?;

        tracing::info!("testing get_channel()");
        let found = livestream_samples::channel::get_channel::sample(&client, &channel.name).await?;
        assert_eq!(found.name, channel.name);

        tracing::info!("testing start_channel()");
        livestream_samples::channel::start_channel::sample(&client, &channel.name).await?;

        tracing::info!("testing stop_channel()");
        livestream_samples::channel::stop_channel::sample(&client, &channel.name).await?;

        tracing::info!("testing delete_channel()");
        livestream_samples::channel::delete_channel::sample(&client, &channel.name).await?;

        tracing::info!("testing delete_input()");
        livestream_samples::input::delete_input::sample(&client, &input.name).await?;

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn asset_lifecycle() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
        let location_id =
            std::env::var("GOOGLE_CLOUD_TEST_REGION").unwrap_or("us-central1".to_string());

        let client = livestream::client::LivestreamService::builder()
            .build()
            .await?;
        let asset_id = resource_names::random_lowercase_id();

        tracing::info!("testing create_asset()");
        let asset = livestream_samples::asset::create_asset::sample(
            &client,
            &project_id,
            &location_id,
            &asset_id,
            VOD_SOURCE_URI,
        )
        .await?;

        tracing::info!("testing get_asset()");
        let found = livestream_samples::asset::get_asset::sample(&client, &asset.name).await?;
        assert_eq!(found.name, asset.name);

        tracing::info!("testing delete_asset()");
        livestream_samples::asset::delete_asset::sample(&client, &asset.name).await?;

        Ok(())
    }
}
