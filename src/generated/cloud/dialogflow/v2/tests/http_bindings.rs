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
    use google_cloud_dialogflow_v2::model;
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

    #[cfg(feature = "intents")]
    mod intents {
        use super::*;
        use google_cloud_dialogflow_v2::client::Intents;

        async fn new_client(server: &Server) -> anyhow::Result<Intents> {
            let client = Intents::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .build()
                .await?;
            Ok(client)
        }

        #[tokio::test]
        async fn list_intents_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/agent/intents"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_intents()
                .set_parent("projects/value0/agent")
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_intents_locations_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_intents()
                .set_parent("projects/value0/locations/value1/agent")
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_intents_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/agent/environments/value1/intents"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_intents()
                .set_parent("projects/value0/agent/environments/value1")
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_intents_locations_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments/value2/intents"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_intents()
                .set_parent("projects/value0/locations/value1/agent/environments/value2")
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_intents_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_intents().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 4);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent", "parent", "parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_intent_agent_intents() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/agent/intents/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_intent()
                .set_name("projects/value0/agent/intents/value1")
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_intent_locations_agent_intents() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_intent()
                .set_name("projects/value0/locations/value1/agent/intents/value2")
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_intent_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_intent().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name", "name"]);
            Ok(())
        }

        #[tokio::test]
        async fn create_intent_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/agent/intents"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_intent()
                .set_parent("projects/value0/agent")
                .set_intent(model::Intent::new())
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_intent_locations_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_intent()
                .set_parent("projects/value0/locations/value1/agent")
                .set_intent(model::Intent::new())
                .set_language_code("language_code-value")
                .set_intent_view(model::IntentView::Full)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_intent_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_intent().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn update_intent_agent_intents() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v2/projects/value0/agent/intents/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/agent/intents/value1"})))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_intent()
                .set_intent(model::Intent::new().set_name("projects/value0/agent/intents/value1"))
                .set_language_code("language_code-value")
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .set_intent_view(model::IntentView::Full)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_intent_locations_agent_intents() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/agent/intents/value2"})))),
                    request::query(url_decoded(contains(("languageCode", "language_code-value")))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                    request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_intent()
                .set_intent(model::Intent::new().set_name("projects/value0/locations/value1/agent/intents/value2"))
                .set_language_code("language_code-value")
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .set_intent_view(model::IntentView::Full)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_intent_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_intent().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["intent.name", "intent.name"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_intent_agent_intents() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v2/projects/value0/agent/intents/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_intent()
                .set_name("projects/value0/agent/intents/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_intent_locations_agent_intents() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_intent()
                .set_name("projects/value0/locations/value1/agent/intents/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_intent_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_intent().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name", "name"]);
            Ok(())
        }

        #[tokio::test]
        async fn batch_update_intents_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/agent/intents:batchUpdate"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"parent": "projects/value0/agent"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_update_intents()
                .set_parent("projects/value0/agent")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_update_intents_locations_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents:batchUpdate"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"parent": "projects/value0/locations/value1/agent"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_update_intents()
                .set_parent("projects/value0/locations/value1/agent")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_update_intents_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.batch_update_intents().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn batch_delete_intents_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/agent/intents:batchDelete"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"parent": "projects/value0/agent"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_delete_intents()
                .set_parent("projects/value0/agent")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_delete_intents_locations_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/locations/value1/agent/intents:batchDelete"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"parent": "projects/value0/locations/value1/agent"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_delete_intents()
                .set_parent("projects/value0/locations/value1/agent")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_delete_intents_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.batch_delete_intents().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_operation_operations() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/operations/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_operation()
                .set_name("projects/value0/operations/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_operation_locations_operations() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/operations/value2"),
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
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name", "name"]);
            Ok(())
        }

        #[tokio::test]
        async fn cancel_operation_operations() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/operations/value1:cancel"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .cancel_operation()
                .set_name("projects/value0/operations/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn cancel_operation_locations_operations() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/locations/value1/operations/value2:cancel"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .cancel_operation()
                .set_name("projects/value0/locations/value1/operations/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn cancel_operation_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.cancel_operation().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name", "name"]);
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
                    request::path("/v2/projects/value0/agent/intents"),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = Intents::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?;
            client
                .list_intents()
                .set_parent("projects/value0/agent")
                .send()
                .await?;

            let got = logs.contents();
            assert!(got.contains("list_intents"), "{got}");
            assert!(got.contains("return=Ok"), "{got}");
            Ok(())
        }
    }

    #[cfg(feature = "environments")]
    mod environments {
        use super::*;
        use google_cloud_dialogflow_v2::client::Environments;

        async fn new_client(server: &Server) -> anyhow::Result<Environments> {
            let client = Environments::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .build()
                .await?;
            Ok(client)
        }

        #[tokio::test]
        async fn list_environments_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/agent/environments"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_environments()
                .set_parent("projects/value0/agent")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_environments_locations_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_environments()
                .set_parent("projects/value0/locations/value1/agent")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_environments_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_environments().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_environment_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/agent/environments/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_environment()
                .set_name("projects/value0/agent/environments/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_environment_locations_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_environment()
                .set_name("projects/value0/locations/value1/agent/environments/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_environment_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_environment().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name", "name"]);
            Ok(())
        }

        #[tokio::test]
        async fn create_environment_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/agent/environments"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("environmentId", "environment_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_environment()
                .set_parent("projects/value0/agent")
                .set_environment(model::Environment::new())
                .set_environment_id("environment_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_environment_locations_agent() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("environmentId", "environment_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_environment()
                .set_parent("projects/value0/locations/value1/agent")
                .set_environment(model::Environment::new())
                .set_environment_id("environment_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_environment_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_environment().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent"]);
            Ok(())
        }

        #[tokio::test]
        async fn update_environment_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v2/projects/value0/agent/environments/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/agent/environments/value1"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                    request::query(url_decoded(contains(("allowLoadToDraftAndDiscardChanges", "true")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_environment()
                .set_environment(model::Environment::new().set_name("projects/value0/agent/environments/value1"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .set_allow_load_to_draft_and_discard_changes(true)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_environment_locations_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/agent/environments/value2"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                    request::query(url_decoded(contains(("allowLoadToDraftAndDiscardChanges", "true")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_environment()
                .set_environment(model::Environment::new().set_name("projects/value0/locations/value1/agent/environments/value2"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .set_allow_load_to_draft_and_discard_changes(true)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_environment_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_environment().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["environment.name", "environment.name"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_environment_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v2/projects/value0/agent/environments/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_environment()
                .set_name("projects/value0/agent/environments/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_environment_locations_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_environment()
                .set_name("projects/value0/locations/value1/agent/environments/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_environment_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_environment().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["name", "name"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_environment_history_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/agent/environments/value1/history"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_environment_history()
                .set_parent("projects/value0/agent/environments/value1")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_environment_history_locations_agent_environments() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v2/projects/value0/locations/value1/agent/environments/value2/history"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_environment_history()
                .set_parent("projects/value0/locations/value1/agent/environments/value2")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_environment_history_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_environment_history().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 2);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["parent", "parent"]);
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
                    request::path("/v2/projects/value0/agent/environments"),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = Environments::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?;
            client
                .list_environments()
                .set_parent("projects/value0/agent")
                .send()
                .await?;

            let got = logs.contents();
            assert!(got.contains("list_environments"), "{got}");
            assert!(got.contains("return=Ok"), "{got}");
            Ok(())
        }
    }
}
