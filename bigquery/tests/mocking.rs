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

//! Verify the samples offline, mocking the generated clients.

#[cfg(test)]
mod tests {
    use google_cloud_bigquery_v2 as bigquery;
    use google_cloud_gax as gax;
    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        DatasetService {}
        impl bigquery::stub::DatasetService for DatasetService {
            async fn insert_dataset(&self, req: bigquery::model::InsertDatasetRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<bigquery::model::Dataset>>;
            async fn get_dataset(&self, req: bigquery::model::GetDatasetRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<bigquery::model::Dataset>>;
            async fn patch_dataset(&self, req: bigquery::model::UpdateOrPatchDatasetRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<bigquery::model::Dataset>>;
            async fn delete_dataset(&self, req: bigquery::model::DeleteDatasetRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
        }
    }

    #[tokio::test]
    async fn create_dataset_sets_reference() -> Result<()> {
        let mut mock = MockDatasetService::new();
        mock.expect_insert_dataset()
            .withf(|r, _| {
                r.project_id == "my-project"
                    && r.dataset.as_ref().is_some_and(|d| {
                        d.dataset_reference
                            .as_ref()
                            .is_some_and(|dr| dr.dataset_id == "my_dataset")
                    })
            })
            .return_once(|r, _| {
                Ok(gax::response::Response::from(r.dataset.unwrap_or_default()))
            });
        let client = bigquery::client::DatasetService::from_stub(mock);

        bigquery_samples::dataset::create_dataset::sample(&client, "my-project", "my_dataset")
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_dataset_removes_contents() -> Result<()> {
        let mut mock = MockDatasetService::new();
        mock.expect_delete_dataset()
            .withf(|r, _| r.dataset_id == "my_dataset" && r.delete_contents)
            .return_once(|_, _| Ok(gax::response::Response::from(())));
        let client = bigquery::client::DatasetService::from_stub(mock);

        bigquery_samples::dataset::delete_dataset::sample(&client, "my-project", "my_dataset")
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_dataset_round_trips_etag() -> Result<()> {
        let mut mock = MockDatasetService::new();
        mock.expect_get_dataset().return_once(|_, _| {
            Ok(gax::response::Response::from(
                bigquery::model::Dataset::new().set_etag("abc123"),
            ))
        });
        mock.expect_patch_dataset()
            .withf(|r, _| {
                r.dataset.as_ref().is_some_and(|d| d.etag == "abc123")
            })
            .return_once(|r, _| {
                Ok(gax::response::Response::from(r.dataset.unwrap_or_default()))
            });
        let client = bigquery::client::DatasetService::from_stub(mock);

        bigquery_samples::dataset::update_dataset::sample(
            &client,
            "my-project",
            "my_dataset",
            "updated",
        )
        .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_dataset_propagates_errors() -> Result<()> {
        let mut mock = MockDatasetService::new();
        mock.expect_get_dataset().return_once(|_, _| {
            use gax::error::Error;
            use gax::error::rpc::{Code, Status};
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("Not found: dataset");
            Err(Error::service(status))
        });
        let client = bigquery::client::DatasetService::from_stub(mock);

        let result =
            bigquery_samples::dataset::get_dataset::sample(&client, "my-project", "missing").await;
        assert!(result.is_err());
        Ok(())
    }
}
