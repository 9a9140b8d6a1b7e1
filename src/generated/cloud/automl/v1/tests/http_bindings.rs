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
//
// Code generated by sidekick. DO NOT EDIT.

//! Verify the HTTP method, path, query parameters, and body used by each RPC.

#[cfg(test)]
mod tests {
    use gax::error::binding::BindingError;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result = anyhow::Result<()>;

    #[derive(Clone, Default)]
    struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buf = self.0.lock().expect("log buffer is never poisoned");
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer is never poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[cfg(feature = "auto-ml")]
    mod auto_ml {
        use super::*;
        use google_cloud_automl_v1::client::AutoMl;

        async fn new_client(server: &Server) -> anyhow::Result<AutoMl> {
            let client = AutoMl::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .build()
                .await?;
            Ok(client)
        }

        #[tokio::test]
        async fn get_dataset() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/datasets/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_dataset()
                .set_name("projects/value0/locations/value1/datasets/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_dataset_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_dataset().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_datasets() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/datasets"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("filter", "filter-value")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_datasets()
                .set_parent("projects/value0/locations/value1")
                .set_filter("filter-value")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_datasets_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_datasets().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_dataset() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/datasets/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_dataset()
                .set_name("projects/value0/locations/value1/datasets/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_dataset_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_dataset().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_model() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/models/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_model()
                .set_name("projects/value0/locations/value1/models/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_model_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_model().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_models() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/models"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("filter", "filter-value")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_models()
                .set_parent("projects/value0/locations/value1")
                .set_filter("filter-value")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_models_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_models().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_model() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/models/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_model()
                .set_name("projects/value0/locations/value1/models/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_model_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_model().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn deploy_model() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/models/value2:deploy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/models/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .deploy_model()
                .set_name("projects/value0/locations/value1/models/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn deploy_model_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.deploy_model().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn undeploy_model() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/models/value2:undeploy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/models/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .undeploy_model()
                .set_name("projects/value0/locations/value1/models/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn undeploy_model_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.undeploy_model().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_operation() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/operations/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_operation()
                .set_name("projects/value0/locations/value1/operations/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_operation_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_operation().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn with_tracing() -> Result {
            let logs = Capture::default();
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .finish();
            let _guard = tracing::subscriber::set_default(subscriber);

            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/datasets/value2"),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = AutoMl::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?;
            client
                .get_dataset()
                .set_name("projects/value0/locations/value1/datasets/value2")
                .send()
                .await?;

            let got = logs.contents();
            assert!(got.contains("get_dataset"), "{got}");
            assert!(got.contains("return=Ok"), "{got}");
            Ok(())
        }
    }

    #[cfg(feature = "prediction-service")]
    mod prediction_service {
        use super::*;
        use google_cloud_automl_v1::client::PredictionService;

        async fn new_client(server: &Server) -> anyhow::Result<PredictionService> {
            let client = PredictionService::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .build()
                .await?;
            Ok(client)
        }

        #[tokio::test]
        async fn predict() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/models/value2:predict"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/models/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .predict()
                .set_name("projects/value0/locations/value1/models/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn predict_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.predict().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn batch_predict() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/models/value2:batchPredict"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/models/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_predict()
                .set_name("projects/value0/locations/value1/models/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_predict_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.batch_predict().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_operation() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/operations/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_operation()
                .set_name("projects/value0/locations/value1/operations/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_operation_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_operation().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 1);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name"]);
            Ok(())
        }

        #[tokio::test]
        async fn with_tracing() -> Result {
            let logs = Capture::default();
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .finish();
            let _guard = tracing::subscriber::set_default(subscriber);

            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/operations/value2"),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = PredictionService::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?;
            client
                .get_operation()
                .set_name("projects/value0/locations/value1/operations/value2")
                .send()
                .await?;

            let got = logs.contents();
            assert!(got.contains("get_operation"), "{got}");
            assert!(got.contains("return=Ok"), "{got}");
            Ok(())
        }
    }
}
