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

// [START modelarmor_update_template]
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, RaiFilterSettings, RaiFilterType, Template,
    rai_filter_settings::RaiFilter,
};
use google_cloud_wkt::FieldMask;

pub async fn sample(client: &ModelArmor, template_name: &str) -> anyhow::Result<Template> {
    // Raise the detection bar to high-confidence matches only.
    let template = client
        .update_template()
        .set_template(
            Template::new().set_name(template_name).set_filter_config(
                FilterConfig::new().set_rai_settings(
                    RaiFilterSettings::new().set_rai_filters([RaiFilter::new()
                        .set_filter_type(RaiFilterType::Dangerous)
                        .set_confidence_level(DetectionConfidenceLevel::High)]),
                ),
            ),
        )
        .set_update_mask(FieldMask::default().set_paths(["filter_config"]))
        .send()
        .await?;

    println!("updated template {}", template.name);
    Ok(template)
}
// [END modelarmor_update_template]
