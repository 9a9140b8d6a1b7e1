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

#[cfg(test)]
mod tests {
    use google_cloud_automl_v1::client::{AutoMl, PredictionService};
    use google_cloud_automl_v1::model;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const MODEL: &str = "projects/p/locations/us-central1/models/TST123";
    const OPERATION: &str = "projects/p/locations/us-central1/operations/op-1";

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    fn anonymous() -> google_cloud_auth::credentials::Credentials {
        google_cloud_auth::credentials::anonymous::Builder::new().build()
    }

    #[tokio::test]
    async fn predict_text_sentiment() -> Result {
        let content = "Hopefully this Claritin kicks in soon";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(format!("/v1/{MODEL}:predict")),
                request::body(json_decoded(move |v: &serde_json::Value| {
                    v["name"] == MODEL
                        && v["payload"]["textSnippet"]["content"] == content
                        && v["payload"]["textSnippet"]["mimeType"] == "text/plain"
                })),
            ])
            .respond_with(json_encoded(json!({
                "payload": [{
                    "annotationSpecId": "spec-1",
                    "displayName": "positive",
                    "textSentiment": {"sentiment": 1},
                }],
                "metadata": {"sentiment_score": "0.25"},
            }))),
        );

        let client = PredictionService::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous())
            .build()
            .await?;
        let response = client
            .predict()
            .set_name(MODEL)
            .set_payload(
                model::ExamplePayload::new().set_text_snippet(
                    model::TextSnippet::new()
                        .set_content(content)
                        .set_mime_type("text/plain"),
                ),
            )
            .send()
            .await?;

        assert_eq!(response.payload.len(), 1);
        let annotation = &response.payload[0];
        assert_eq!(annotation.display_name, "positive");
        assert_eq!(annotation.text_sentiment().map(|s| s.sentiment), Some(1));
        assert_eq!(
            response.metadata.get("sentiment_score").map(String::as_str),
            Some("0.25")
        );
        Ok(())
    }

    #[tokio::test]
    async fn batch_predict_polls_until_done() -> Result {
        use lro::Poller;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(format!("/v1/{MODEL}:batchPredict")),
                request::body(json_decoded(|v: &serde_json::Value| {
                    v["inputConfig"]["gcsSource"]["inputUris"][0] == "gs://bucket/input.csv"
                        && v["outputConfig"]["gcsDestination"]["outputUriPrefix"]
                            == "gs://bucket/output"
                })),
            ])
            .respond_with(json_encoded(json!({
                "name": OPERATION,
                "metadata": {
                    "@type": "type.googleapis.com/google.cloud.automl.v1.OperationMetadata",
                    "progressPercent": 10,
                },
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(format!("/v1/{OPERATION}")),
            ])
            .respond_with(json_encoded(json!({
                "name": OPERATION,
                "done": true,
                "response": {
                    "@type": "type.googleapis.com/google.cloud.automl.v1.BatchPredictResult",
                    "metadata": {"rows": "42"},
                },
            }))),
        );

        let client = PredictionService::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous())
            .build()
            .await?;
        let result = client
            .batch_predict()
            .set_name(MODEL)
            .set_input_config(
                model::BatchPredictInputConfig::new().set_gcs_source(
                    model::GcsSource::new().set_input_uris(["gs://bucket/input.csv"]),
                ),
            )
            .set_output_config(
                model::BatchPredictOutputConfig::new().set_gcs_destination(
                    model::GcsDestination::new().set_output_uri_prefix("gs://bucket/output"),
                ),
            )
            .poller()
            .until_done()
            .await?;
        assert_eq!(
            result,
            model::BatchPredictResult::new().set_metadata([("rows", "42")])
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_model_completes_immediately() -> Result {
        use lro::Poller;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(format!("/v1/{MODEL}")),
            ])
            .respond_with(json_encoded(json!({
                "name": OPERATION,
                "done": true,
                "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
            }))),
        );

        let client = AutoMl::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous())
            .build()
            .await?;
        client
            .delete_model()
            .set_name(MODEL)
            .poller()
            .until_done()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_models_with_filter() -> Result {
        let parent = "projects/p/locations/us-central1";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(format!("/v1/{parent}/models")),
                request::query(url_decoded(contains(("filter", "dataset_id=5")))),
                request::query(url_decoded(contains(("pageSize", "10")))),
            ])
            .respond_with(json_encoded(json!({
                "model": [
                    {"name": MODEL, "deploymentState": 1},
                ],
            }))),
        );

        let client = AutoMl::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous())
            .build()
            .await?;
        let response = client
            .list_models()
            .set_parent(parent)
            .set_filter("dataset_id=5")
            .set_page_size(10)
            .send()
            .await?;
        assert_eq!(response.model.len(), 1);
        assert_eq!(response.model[0].name, MODEL);
        assert_eq!(
            response.model[0].deployment_state,
            model::model::DeploymentState::Deployed
        );
        assert_eq!(response.next_page_token, "");
        Ok(())
    }

    #[tokio::test]
    async fn deploy_model_binding_error() -> Result {
        let server = Server::run();
        let client = AutoMl::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous())
            .build()
            .await?;

        let err = client
            .deploy_model()
            .set_name("projects/p/models/TST123")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_dataset_service_error() -> Result {
        let name = "projects/p/locations/us-central1/datasets/missing";
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(format!("/v1/{name}"))).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"error": {
                            "code": 404,
                            "message": "dataset not found",
                            "status": "NOT_FOUND",
                        }})
                        .to_string(),
                    ),
            ),
        );

        let client = AutoMl::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(anonymous())
            .build()
            .await?;
        let err = client.get_dataset().set_name(name).send().await.unwrap_err();
        let status = err.status().expect("error should carry a status");
        assert_eq!(status.code, gax::error::rpc::Code::NotFound);
        Ok(())
    }
}
