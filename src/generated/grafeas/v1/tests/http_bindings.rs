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
    use google_cloud_grafeas_v1::model;
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

    mod grafeas {
        use super::*;
        use google_cloud_grafeas_v1::client::Grafeas;

        async fn new_client(server: &Server) -> anyhow::Result<Grafeas> {
            let client = Grafeas::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .build()
                .await?;
            Ok(client)
        }

        #[tokio::test]
        async fn get_occurrence() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/occurrences/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_occurrence()
                .set_name("projects/value0/occurrences/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_occurrence_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_occurrence().send().await.unwrap_err();
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
        async fn list_occurrences() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/occurrences"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("filter", "filter-value")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_occurrences()
                .set_parent("projects/value0")
                .set_filter("filter-value")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_occurrences_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_occurrences().send().await.unwrap_err();
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
        async fn delete_occurrence() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/occurrences/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_occurrence()
                .set_name("projects/value0/occurrences/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_occurrence_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_occurrence().send().await.unwrap_err();
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
        async fn create_occurrence() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/occurrences"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_occurrence()
                .set_parent("projects/value0")
                .set_occurrence(model::Occurrence::new())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_occurrence_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_occurrence().send().await.unwrap_err();
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
        async fn batch_create_occurrences() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/occurrences:batchCreate"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"parent": "projects/value0"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_create_occurrences()
                .set_parent("projects/value0")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_create_occurrences_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.batch_create_occurrences().send().await.unwrap_err();
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
        async fn update_occurrence() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/occurrences/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_occurrence()
                .set_name("projects/value0/occurrences/value1")
                .set_occurrence(model::Occurrence::new())
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_occurrence_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_occurrence().send().await.unwrap_err();
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
        async fn get_occurrence_note() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/occurrences/value1/notes"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_occurrence_note()
                .set_name("projects/value0/occurrences/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_occurrence_note_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_occurrence_note().send().await.unwrap_err();
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
        async fn get_note() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/notes/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_note()
                .set_name("projects/value0/notes/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_note_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_note().send().await.unwrap_err();
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
        async fn list_notes() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/notes"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("filter", "filter-value")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_notes()
                .set_parent("projects/value0")
                .set_filter("filter-value")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_notes_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_notes().send().await.unwrap_err();
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
        async fn delete_note() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/notes/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_note()
                .set_name("projects/value0/notes/value1")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_note_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_note().send().await.unwrap_err();
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
        async fn create_note() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/notes"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("noteId", "note_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_note()
                .set_parent("projects/value0")
                .set_note(model::Note::new())
                .set_note_id("note_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_note_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_note().send().await.unwrap_err();
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
        async fn batch_create_notes() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/notes:batchCreate"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"parent": "projects/value0"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .batch_create_notes()
                .set_parent("projects/value0")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_create_notes_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.batch_create_notes().send().await.unwrap_err();
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
        async fn update_note() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/notes/value1"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_note()
                .set_name("projects/value0/notes/value1")
                .set_note(model::Note::new())
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_note_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_note().send().await.unwrap_err();
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
        async fn list_note_occurrences() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/notes/value1/occurrences"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("filter", "filter-value")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_note_occurrences()
                .set_name("projects/value0/notes/value1")
                .set_filter("filter-value")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_note_occurrences_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_note_occurrences().send().await.unwrap_err();
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
                    request::path("/v1/projects/value0/occurrences/value1"),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = Grafeas::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?;
            client
                .get_occurrence()
                .set_name("projects/value0/occurrences/value1")
                .send()
                .await?;

            let got = logs.contents();
            assert!(got.contains("get_occurrence"), "{got}");
            assert!(got.contains("return=Ok"), "{got}");
            Ok(())
        }
    }
}
