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
    use google_cloud_firestore_admin_v1 as firestore_admin;
    use samples_test_utils::resource_names;

    #[tokio::test(flavor = "multi_thread")]
    async fn database_and_index_lifecycle() -> anyhow::Result<()> {
        use google_cloud_gax::retry_policy::{Aip194Strict, RetryPolicyExt};
        use std::time::Duration;

        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

        let client = firestore_admin::client::FirestoreAdmin::builder()
            .with_retry_policy(
                Aip194Strict
                    .with_attempt_limit(5)
                    .with_time_limit(Duration::from_secs(30)),
            )
            .build()
            .await?;
        let database_id = resource_names::random_lowercase_id();

        tracing::info!("testing create_database()");
        let database = firestore_samples::database::create_database::sample(
            &client,
            &project_id,
            &database_id,
            "us-central1",
        )
        .await?;

        tracing::info!("testing get_database()");
        let found =
            firestore_samples::database::get_database::sample(&client, &project_id, &database_id)
                .await?;
        assert_eq!(found.name, database.name);

        tracing::info!("testing list_databases()");
        let names = firestore_samples::database::list_databases::sample(&client, &project_id).await?;
        assert!(names.contains(&database.name), "{names:?}");

        tracing::info!("testing create_index()");
        let index = firestore_samples::index::create_index::sample(
            &client,
            &project_id,
            &database_id,
            "samples",
        )
        .await?;

        tracing::info!("testing list_indexes()");
        let indexes = firestore_samples::index::list_indexes::sample(
            &client,
            &project_id,
            &database_id,
            "samples",
        )
        .await?;
        assert!(indexes.contains(&index.name), "{indexes:?}");

        tracing::info!("testing delete_index()");
        firestore_samples::index::delete_index::sample(&client, &index.name).await?;

        tracing::info!("testing delete_database()");
        firestore_samples::database::delete_database::sample(&client, &project_id, &database_id)
            .await?;

        Ok(())
    }
}
