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

//! Examples showing how to mock a client in tests.

#[cfg(test)]
mod tests {
    use google_cloud_automl_v1 as automl;
    use google_cloud_datacatalog_v1 as datacatalog;
    use google_cloud_debugger_v2 as debugger;
    use google_cloud_gax as gax;
    use gax::response::Response;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        PredictionService {}
        impl automl::stub::PredictionService for PredictionService {
            async fn predict(&self, req: automl::model::PredictRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<automl::model::PredictResponse>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        DataCatalog {}
        impl datacatalog::stub::DataCatalog for DataCatalog {
            async fn lookup_entry(&self, req: datacatalog::model::LookupEntryRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<datacatalog::model::Entry>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        Controller2 {}
        impl debugger::stub::Controller2 for Controller2 {
            async fn list_active_breakpoints(&self, req: debugger::model::ListActiveBreakpointsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<debugger::model::ListActiveBreakpointsResponse>>;
        }
    }

    #[tokio::test]
    async fn language_sentiment_analysis_predict() -> Result<()> {
        let mut mock = MockPredictionService::new();
        mock.expect_predict()
            .withf(|r, _| {
                r.name == "projects/my-project/locations/us-central1/models/TST123"
                    && r.payload
                        .as_ref()
                        .and_then(|p| p.text_snippet())
                        .is_some_and(|s| {
                            s.content == "Hopefully this Claritin kicks in soon"
                                && s.mime_type == "text/plain"
                        })
            })
            .return_once(|_, _| {
                let annotation = automl::model::AnnotationPayload::new()
                    .set_display_name("2")
                    .set_text_sentiment(automl::model::TextSentimentAnnotation::new().set_sentiment(2));
                Ok(Response::from(
                    automl::model::PredictResponse::new().set_payload([annotation]),
                ))
            });
        let client = automl::client::PredictionService::from_stub(mock);

        let mut out = Vec::new();
        user_guide_samples::automl::language_sentiment_analysis_predict(
            &client,
            "my-project",
            "TST123",
            "Hopefully this Claritin kicks in soon",
            &mut out,
        )
        .await?;
        let out = String::from_utf8(out)?;
        assert!(out.contains("Predicted class name: 2"), "{out}");
        assert!(out.contains("Predicted sentiment score: 2"), "{out}");
        Ok(())
    }

    #[tokio::test]
    async fn language_sentiment_analysis_predict_error() -> Result<()> {
        let mut mock = MockPredictionService::new();
        mock.expect_predict().return_once(|_, _| {
            use gax::error::Error;
            use gax::error::rpc::{Code, Status};
            let status = Status::default()
                .set_code(Code::NotFound)
                .set_message("Model not found");
            Err(Error::service(status))
        });
        let client = automl::client::PredictionService::from_stub(mock);

        let mut out = Vec::new();
        let result = user_guide_samples::automl::language_sentiment_analysis_predict(
            &client,
            "my-project",
            "missing",
            "some text",
            &mut out,
        )
        .await;
        assert!(result.is_err());
        assert!(out.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn lookup_entry() -> Result<()> {
        let linked = user_guide_samples::datacatalog::bigquery_table("my-project", "my_dataset", "t");
        assert_eq!(
            linked,
            "//bigquery.googleapis.com/projects/my-project/datasets/my_dataset/tables/t"
        );

        let mut mock = MockDataCatalog::new();
        let want = linked.clone();
        mock.expect_lookup_entry()
            .withf(move |r, _| r.linked_resource().is_some_and(|v| *v == want))
            .return_once(|_, _| {
                Ok(Response::from(
                    datacatalog::model::Entry::new().set_name("projects/my-project/locations/us/entryGroups/@bigquery/entries/e"),
                ))
            });
        let client = datacatalog::client::DataCatalog::from_stub(mock);

        let entry = user_guide_samples::datacatalog::lookup_entry(&client, &linked).await?;
        assert_eq!(
            entry.name,
            "projects/my-project/locations/us/entryGroups/@bigquery/entries/e"
        );
        Ok(())
    }

    #[test]
    fn print_entry() -> Result<()> {
        let entry = datacatalog::model::Entry::new()
            .set_name("projects/p/locations/us/entryGroups/@bigquery/entries/e")
            .set_linked_resource("//bigquery.googleapis.com/projects/p/datasets/d/tables/t")
            .set_fully_qualified_name("bigquery:p.d.t")
            .set_type(datacatalog::model::EntryType::Table);
        let mut out = Vec::new();
        user_guide_samples::datacatalog::print_entry(&entry, &mut out)?;
        let got = String::from_utf8(out)?;
        let lines = got.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Entry name: projects/p/locations/us/entryGroups/@bigquery/entries/e",
                "Linked resource: //bigquery.googleapis.com/projects/p/datasets/d/tables/t",
                "Fully qualified name: bigquery:p.d.t",
                "Entry type: TABLE",
            ]
        );
        Ok(())
    }

    fn breakpoint(id: &str) -> debugger::model::Breakpoint {
        debugger::model::Breakpoint::new().set_id(id)
    }

    #[tokio::test]
    async fn list_active_breakpoints_changed() -> Result<()> {
        let mut mock = MockController2::new();
        mock.expect_list_active_breakpoints()
            .withf(|r, _| r.debuggee_id == "d-1" && r.wait_token.is_empty() && r.success_on_timeout)
            .times(1)
            .return_once(|_, _| {
                Ok(Response::from(
                    debugger::model::ListActiveBreakpointsResponse::new()
                        .set_breakpoints([breakpoint("bp-1")])
                        .set_next_wait_token("token-1"),
                ))
            });
        mock.expect_list_active_breakpoints()
            .withf(|r, _| r.debuggee_id == "d-1" && r.wait_token == "token-1")
            .times(1)
            .return_once(|_, _| {
                Ok(Response::from(
                    debugger::model::ListActiveBreakpointsResponse::new()
                        .set_breakpoints([breakpoint("bp-1"), breakpoint("bp-2")])
                        .set_next_wait_token("token-2"),
                ))
            });
        let client = debugger::client::Controller2::from_stub(mock);

        let got = user_guide_samples::debugger::list_active_breakpoints(&client, "d-1").await?;
        let ids = got.iter().map(|b| b.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["bp-1", "bp-2"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_active_breakpoints_wait_expired() -> Result<()> {
        let mut mock = MockController2::new();
        mock.expect_list_active_breakpoints()
            .withf(|r, _| r.wait_token.is_empty())
            .times(1)
            .return_once(|_, _| {
                Ok(Response::from(
                    debugger::model::ListActiveBreakpointsResponse::new()
                        .set_breakpoints([breakpoint("bp-1")])
                        .set_next_wait_token("token-1"),
                ))
            });
        mock.expect_list_active_breakpoints()
            .withf(|r, _| r.wait_token == "token-1")
            .times(1)
            .return_once(|_, _| {
                Ok(Response::from(
                    debugger::model::ListActiveBreakpointsResponse::new()
                        .set_next_wait_token("token-1")
                        .set_wait_expired(true),
                ))
            });
        let client = debugger::client::Controller2::from_stub(mock);

        let got = user_guide_samples::debugger::list_active_breakpoints(&client, "d-1").await?;
        let ids = got.iter().map(|b| b.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["bp-1"]);
        Ok(())
    }
}
