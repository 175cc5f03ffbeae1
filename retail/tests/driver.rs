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
    use google_cloud_retail_v2 as retail;

    // Requires a catalog populated with the Retail sample product data.
    // An empty catalog still exercises the request path; the searches
    // simply return no results.
    #[tokio::test(flavor = "multi_thread")]
    async fn search_variations() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
        let placement = retail_samples::default_search_placement(&project_id);

        let client = retail::client::SearchService::builder().build().await?;

        tracing::info!("testing search simple_query()");
        retail_samples::search::simple_query::sample(&client, &placement, "sweater").await?;

        tracing::info!("testing search with_filter()");
        retail_samples::search::with_filter::sample(
            &client,
            &placement,
            "sweater",
            r#"colorFamilies: ANY("Black")"#,
        )
        .await?;

        tracing::info!("testing search with_facet_spec()");
        retail_samples::search::with_facet_spec::sample(
            &client,
            &placement,
            "sweater",
            "colorFamilies",
        )
        .await?;

        tracing::info!("testing search with_boost_spec()");
        retail_samples::search::with_boost_spec::sample(
            &client,
            &placement,
            "sweater",
            r#"colorFamilies: ANY("Blue")"#,
            0.5,
        )
        .await?;

        tracing::info!("testing search with_pagination()");
        retail_samples::search::with_pagination::sample(&client, &placement, "sweater", 6).await?;

        Ok(())
    }
}
