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

// [START retail_search_with_facet_spec]
use google_cloud_gax::paginator::Paginator as _;
use google_cloud_retail_v2::client::SearchService;
use google_cloud_retail_v2::model::search_request::{FacetSpec, facet_spec::FacetKey};

pub async fn sample(
    client: &SearchService,
    placement: &str,
    query: &str,
    facet_key: &str,
) -> anyhow::Result<()> {
    let mut pages = client
        .search()
        .set_placement(placement)
        .set_query(query)
        .set_visitor_id("123456")
        .set_facet_specs([
            FacetSpec::new().set_facet_key(FacetKey::new().set_key(facet_key)),
        ])
        .by_page();
    while let Some(page) = pages.next().await {
        let page = page?;
        for facet in page.facets {
            println!("facet {}:", facet.key);
            for value in facet.values {
                println!("  {:?} ({} products)", value.facet_value, value.count);
            }
        }
    }

    Ok(())
}
// [END retail_search_with_facet_spec]
