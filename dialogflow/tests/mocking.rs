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
    use google_cloud_dialogflow_v2 as dialogflow;
    use google_cloud_gax as gax;
    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        Intents {}
        impl dialogflow::stub::Intents for Intents {
            async fn create_intent(&self, req: dialogflow::model::CreateIntentRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dialogflow::model::Intent>>;
            async fn delete_intent(&self, req: dialogflow::model::DeleteIntentRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<()>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        Sessions {}
        impl dialogflow::stub::Sessions for Sessions {
            async fn detect_intent(&self, req: dialogflow::model::DetectIntentRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<dialogflow::model::DetectIntentResponse>>;
        }
    }

    #[tokio::test]
    async fn create_intent_builds_training_phrases() -> Result<()> {
        let mut mock = MockIntents::new();
        mock.expect_create_intent()
            .withf(|r, _| {
                r.parent == "projects/my-project/agent"
                    && r.intent.as_ref().is_some_and(|i| {
                        i.display_name == "order.pizza" && i.training_phrases.len() == 2
                    })
            })
            .return_once(|r, _| {
                let intent = r
                    .intent
                    .unwrap_or_default()
                    .set_name("projects/my-project/agent/intents/1234");
                Ok(gax::response::Response::from(intent))
            });
        let client = dialogflow::client::Intents::from_stub(mock);

        let intent = dialogflow_samples::intent::create_intent::sample(
            &client,
            "my-project",
            "order.pizza",
            &["I want a pizza", "order a pizza for me"],
            "What toppings would you like?",
        )
        .await?;
        assert_eq!(intent.name, "projects/my-project/agent/intents/1234");
        Ok(())
    }

    #[tokio::test]
    async fn detect_intent_reports_fulfillment() -> Result<()> {
        let mut mock = MockSessions::new();
        mock.expect_detect_intent()
            .withf(|r, _| r.session == "projects/my-project/agent/sessions/s-1")
            .return_once(|_, _| {
                let result = dialogflow::model::QueryResult::new()
                    .set_query_text("I want a pizza")
                    .set_fulfillment_text("What toppings would you like?");
                Ok(gax::response::Response::from(
                    dialogflow::model::DetectIntentResponse::new().set_query_result(result),
                ))
            });
        let client = dialogflow::client::Sessions::from_stub(mock);

        let result = dialogflow_samples::detect_intent::sample(
            &client,
            "my-project",
            "s-1",
            "I want a pizza",
        )
        .await?;
        assert_eq!(
            result.map(|r| r.fulfillment_text),
            Some("What toppings would you like?".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_intent_propagates_errors() -> Result<()> {
        let mut mock = MockIntents::new();
        mock.expect_delete_intent().return_once(|_, _| {
            use gax::error::Error;
            use gax::error::rpc::{Code, Status};
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("intent not found");
            Err(Error::service(status))
        });
        let client = dialogflow::client::Intents::from_stub(mock);

        let result = dialogflow_samples::intent::delete_intent::sample(
            &client,
            "projects/my-project/agent/intents/missing",
        )
        .await;
        assert!(result.is_err());
        Ok(())
    }
}
