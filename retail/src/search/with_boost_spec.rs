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

// [START retail_search_with_boost_spec]
use google_cloud_gax::paginator::ItemPaginator as _;
use google_cloud_retail_v2::client::SearchService;
use google_cloud_retail_v2::model::search_request::{BoostSpec, boost_spec::ConditionBoostSpec};

pub async fn sample(
    client: &SearchService,
    placement: &str,
    query: &str,
    condition: &str,
    boost: f32,
) -> anyhow::Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut results = client
        .search()
        .set_placement(placement)
        .set_query(query)
        .set_visitor_id("123456")
        .set_boost_spec(BoostSpec::new().set_condition_boost_specs([
            ConditionBoostSpec::new().set_condition(condition).set_boost(boost),
        ]))
        .by_item();
    while let Some(result) = results.next().await {
        let result = result?;
        println!("product: {}", result.id);
        ids.push(result.id);
    }

    Ok(ids)
}
// [END retail_search_with_boost_spec]
