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
    use google_cloud_bigquery_v2 as bigquery;
    use samples_test_utils::resource_names;

    #[tokio::test(flavor = "multi_thread")]
    async fn dataset_and_table_lifecycle() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

        let datasets = bigquery::client::DatasetService::builder().build().await?;
        let tables = bigquery::client::TableService::builder().build().await?;
        let dataset_id = resource_names::random_dataset_id();

        tracing::info!("testing create_dataset()");
        bigquery_samples::dataset::create_dataset::sample(&datasets, &project_id, &dataset_id)
            .await?;

        tracing::info!("testing get_dataset()");
        bigquery_samples::dataset::get_dataset::sample(&datasets, &project_id, &dataset_id).await?;

        tracing::info!("testing list_datasets()");
        let ids = bigquery_samples::dataset::list_datasets::sample(&datasets, &project_id).await?;
        assert!(ids.iter().any(|id| id.ends_with(&dataset_id)), "{ids:?}");

        tracing::info!("testing update_dataset()");
        bigquery_samples::dataset::update_dataset::sample(
            &datasets,
            &project_id,
            &dataset_id,
            "dataset used by the Rust getting-started samples",
        )
        .await?;

        tracing::info!("testing create_table()");
        bigquery_samples::table::create_table::sample(&tables, &project_id, &dataset_id, "people")
            .await?;

        tracing::info!("testing list_tables()");
        let table_ids =
            bigquery_samples::table::list_tables::sample(&tables, &project_id, &dataset_id).await?;
        assert!(table_ids.iter().any(|id| id.ends_with("people")), "{table_ids:?}");

        tracing::info!("testing delete_table()");
        bigquery_samples::table::delete_table::sample(&tables, &project_id, &dataset_id, "people")
            .await?;

        tracing::info!("testing delete_dataset()");
        bigquery_samples::dataset::delete_dataset::sample(&datasets, &project_id, &dataset_id)
            .await?;

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn query_and_jobs() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

        let jobs = bigquery::client::JobService::builder().build().await?;

        tracing::info!("testing query()");
        let response = bigquery_samples::job::query::sample(
            &jobs,
            &project_id,
            "SELECT name, SUM(number) AS total \
             FROM `bigquery-public-data.usa_names.usa_1910_2013` \
             WHERE name = 'William' GROUP BY name",
        )
        .await?;
        assert!(!response.rows.is_empty());

        tracing::info!("testing list_jobs()");
        let ids = bigquery_samples::job::list_jobs::sample(&jobs, &project_id).await?;
        assert!(!ids.is_empty());

        Ok(())
    }
}
