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
    use google_cloud_pubsub_v1 as pubsub;
    use samples_test_utils::{resource_names, retry};

    #[tokio::test(flavor = "multi_thread")]
    async fn topic_and_subscription_lifecycle() -> anyhow::Result<()> {
        let _guard = samples_test_utils::tracing::enable_tracing();
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;

        let publisher = pubsub::client::Publisher::builder().build().await?;
        let subscriber = pubsub::client::Subscriber::builder().build().await?;

        cleanup_stale_topics(&publisher, &project_id).await?;

        let topic_id = resource_names::random_lowercase_id();
        let subscription_id = resource_names::random_lowercase_id();

        tracing::info!("testing create_topic()");
        pubsub_samples::topic::create_topic::sample(&publisher, &project_id, &topic_id).await?;

        tracing::info!("testing list_topics()");
        let names = pubsub_samples::topic::list_topics::sample(&publisher, &project_id).await?;
        assert!(
            names.iter().any(|n| n.ends_with(&topic_id)),
            "{topic_id} missing from {names:?}"
        );

        tracing::info!("testing create_pull_subscription()");
        pubsub_samples::subscription::create_pull_subscription::sample(
            &subscriber,
            &project_id,
            &topic_id,
            &subscription_id,
        )
        .await?;

        tracing::info!("testing list_subscriptions()");
        let subscriptions =
            pubsub_samples::subscription::list_subscriptions::sample(&subscriber, &project_id)
                .await?;
        assert!(
            subscriptions.iter().any(|n| n.ends_with(&subscription_id)),
            "{subscription_id} missing from {subscriptions:?}"
        );

        // A freshly created topic may not have propagated to the publish
        // frontends yet, so retry with backoff.
        tracing::info!("testing publisher quickstart");
        let ids = retry::with_backoff(
            retry::DEFAULT_ATTEMPTS,
            retry::DEFAULT_INITIAL_DELAY,
            || pubsub_samples::publisher::sample(&publisher, &project_id, &topic_id),
        )
        .await?;
        assert_eq!(ids.len(), 1);

        tracing::info!("testing subscriber sync pull");
        pubsub_samples::subscriber::sample(&subscriber, &project_id, &subscription_id).await?;

        tracing::info!("testing delete_subscription()");
        pubsub_samples::subscription::delete_subscription::sample(
            &subscriber,
            &project_id,
            &subscription_id,
        )
        .await?;

        tracing::info!("testing delete_topic()");
        pubsub_samples::topic::delete_topic::sample(&publisher, &project_id, &topic_id).await?;

        Ok(())
    }

    // Remove topics left behind by interrupted runs. Only topics carrying
    // the shared test prefix are considered.
    async fn cleanup_stale_topics(
        client: &pubsub::client::Publisher,
        project_id: &str,
    ) -> anyhow::Result<()> {
        use google_cloud_gax::paginator::ItemPaginator as _;

        let prefix = format!(
            "projects/{project_id}/topics/{}",
            resource_names::PREFIX
        );
        let mut topics = client
            .list_topics()
            .set_project(format!("projects/{project_id}"))
            .by_item();
        let mut pending = Vec::new();
        while let Some(topic) = topics.next().await {
            let topic = topic?;
            if topic.name.starts_with(&prefix) {
                tracing::info!("removing stale topic {}", topic.name);
                pending.push(client.delete_topic().set_topic(topic.name).send());
            }
        }
        for result in futures::future::join_all(pending).await {
            // Racing cleanups may have deleted the topic already.
            if let Err(e) = result {
                tracing::info!("stale topic cleanup failed: {e}");
            }
        }
        Ok(())
    }
}
