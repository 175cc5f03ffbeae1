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

// [START modelarmor_create_template]
use google_cloud_modelarmor_v1::client::ModelArmor;
use google_cloud_modelarmor_v1::model::{
    DetectionConfidenceLevel, FilterConfig, RaiFilterSettings, RaiFilterType, Template,
    rai_filter_settings::RaiFilter,
};

pub async fn sample(
    client: &ModelArmor,
    project_id: &str,
    location_id: &str,
    template_id: &str,
) -> anyhow::Result<Template> {
    let rai_filter = |filter_type: RaiFilterType| {
        RaiFilter::new()
            .set_filter_type(filter_type)
            .set_confidence_level(DetectionConfidenceLevel::MediumAndAbove)
    };
    let template = client
        .create_template()
        .set_parent(format!("projects/{project_id}/locations/{location_id}"))
        .set_template_id(template_id)
        .set_template(
            Template::new().set_filter_config(
                FilterConfig::new().set_rai_settings(RaiFilterSettings::new().set_rai_filters([
                    rai_filter(RaiFilterType::Dangerous),
                    rai_filter(RaiFilterType::HateSpeech),
                    rai_filter(RaiFilterType::SexuallyExplicit),
                    rai_filter(RaiFilterType::Harassment),
                ])),
            ),
        )
        .send()
        .await?;

    println!("created template {}", template.name);
    Ok(template)
}
// [END modelarmor_create_template]
