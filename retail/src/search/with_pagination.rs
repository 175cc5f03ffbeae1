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

// [START retail_search_with_pagination]
use google_cloud_gax::paginator::Paginator as _;
use google_cloud_retail_v2::client::SearchService;

pub async fn sample(
    client: &SearchService,
    placement: &str,
    query: &str,
    page_size: i32,
) -> anyhow::Result<Vec<String>> {
    let mut ids = Vec::new();
    let mut pages = client
        .search()
        .set_placement(placement)
        .set_query(query)
        .set_visitor_id("123456")
        .set_page_size(page_size)
        .by_page();
    let mut page_number = 0;
    while let Some(page) = pages.next().await {
        let page = page?;
        page_number += 1;
        for result in page.results {
            println!("page {page_number}: product {}", result.id);
            ids.push(result.id);
        }
    }

    Ok(ids)
}
// [END retail_search_with_pagination]
