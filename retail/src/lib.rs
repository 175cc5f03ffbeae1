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

//! Getting-started samples for Retail Search.

pub mod search;

/// Serving placement for the default catalog in a project.
pub fn default_search_placement(project_id: &str) -> String {
    format!(
        "projects/{project_id}/locations/global/catalogs/default_catalog/placements/default_search"
    )
}
