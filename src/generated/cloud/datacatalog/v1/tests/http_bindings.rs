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
    use google_cloud_datacatalog_v1::model;
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

    mod data_catalog {
        use super::*;
        use google_cloud_datacatalog_v1::client::DataCatalog;

        async fn new_client(server: &Server) -> anyhow::Result<DataCatalog> {
            let client = DataCatalog::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .build()
                .await?;
            Ok(client)
        }

        #[tokio::test]
        async fn search_catalog() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/catalog:search"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .search_catalog()
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_entry_group() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("entryGroupId", "entry_group_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_entry_group()
                .set_parent("projects/value0/locations/value1")
                .set_entry_group(model::EntryGroup::new())
                .set_entry_group_id("entry_group_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_entry_group_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_entry_group().send().await.unwrap_err();
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
        async fn get_entry_group() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("readMask", "read_mask.a,read_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_entry_group()
                .set_name("projects/value0/locations/value1/entryGroups/value2")
                .set_read_mask(wkt::FieldMask::default().set_paths(vec!["read_mask.a".to_string(), "read_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_entry_group_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_entry_group().send().await.unwrap_err();
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
        async fn update_entry_group() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/entryGroups/value2"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_entry_group()
                .set_entry_group(model::EntryGroup::new().set_name("projects/value0/locations/value1/entryGroups/value2"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_entry_group_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_entry_group().send().await.unwrap_err();
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
            assert_eq!(fields, vec!["entry_group.name"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_entry_group() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("force", "true")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_entry_group()
                .set_name("projects/value0/locations/value1/entryGroups/value2")
                .set_force(true)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_entry_group_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_entry_group().send().await.unwrap_err();
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
        async fn list_entry_groups() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_entry_groups()
                .set_parent("projects/value0/locations/value1")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_entry_groups_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_entry_groups().send().await.unwrap_err();
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
        async fn create_entry() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("entryId", "entry_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_entry()
                .set_parent("projects/value0/locations/value1/entryGroups/value2")
                .set_entry(model::Entry::new())
                .set_entry_id("entry_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_entry_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_entry().send().await.unwrap_err();
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
        async fn update_entry() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/entryGroups/value2/entries/value3"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_entry()
                .set_entry(model::Entry::new().set_name("projects/value0/locations/value1/entryGroups/value2/entries/value3"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_entry_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_entry().send().await.unwrap_err();
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
            assert_eq!(fields, vec!["entry.name"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_entry() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_entry()
                .set_name("projects/value0/locations/value1/entryGroups/value2/entries/value3")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_entry_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_entry().send().await.unwrap_err();
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
        async fn get_entry() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_entry()
                .set_name("projects/value0/locations/value1/entryGroups/value2/entries/value3")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_entry_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_entry().send().await.unwrap_err();
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
        async fn lookup_entry() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/entries:lookup"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("project", "project-value")))),
                    request::query(url_decoded(contains(("location", "location-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .lookup_entry()
                .set_project("project-value")
                .set_location("location-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn lookup_entry_with_linked_resource() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/entries:lookup"),
                    request::query(url_decoded(contains(("linkedResource", "linked_resource-value")))),
                    request::query(url_decoded(not(contains(key("sqlResource"))))),
                    request::query(url_decoded(not(contains(key("fullyQualifiedName"))))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .lookup_entry()
                .set_linked_resource("linked_resource-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn lookup_entry_with_sql_resource() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/entries:lookup"),
                    request::query(url_decoded(contains(("sqlResource", "sql_resource-value")))),
                    request::query(url_decoded(not(contains(key("linkedResource"))))),
                    request::query(url_decoded(not(contains(key("fullyQualifiedName"))))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .lookup_entry()
                .set_sql_resource("sql_resource-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn lookup_entry_with_fully_qualified_name() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/entries:lookup"),
                    request::query(url_decoded(contains(("fullyQualifiedName", "fully_qualified_name-value")))),
                    request::query(url_decoded(not(contains(key("linkedResource"))))),
                    request::query(url_decoded(not(contains(key("sqlResource"))))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .lookup_entry()
                .set_fully_qualified_name("fully_qualified_name-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_entries() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                    request::query(url_decoded(contains(("readMask", "read_mask.a,read_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_entries()
                .set_parent("projects/value0/locations/value1/entryGroups/value2")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .set_read_mask(wkt::FieldMask::default().set_paths(vec!["read_mask.a".to_string(), "read_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_entries_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_entries().send().await.unwrap_err();
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
        async fn create_tag_template() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("tagTemplateId", "tag_template_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_tag_template()
                .set_parent("projects/value0/locations/value1")
                .set_tag_template(model::TagTemplate::new())
                .set_tag_template_id("tag_template_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_tag_template_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_tag_template().send().await.unwrap_err();
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
        async fn get_tag_template() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_tag_template()
                .set_name("projects/value0/locations/value1/tagTemplates/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_tag_template_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_tag_template().send().await.unwrap_err();
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
        async fn update_tag_template() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/tagTemplates/value2"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_tag_template()
                .set_tag_template(model::TagTemplate::new().set_name("projects/value0/locations/value1/tagTemplates/value2"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_tag_template_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_tag_template().send().await.unwrap_err();
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
            assert_eq!(fields, vec!["tag_template.name"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_template() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("force", "true")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_tag_template()
                .set_name("projects/value0/locations/value1/tagTemplates/value2")
                .set_force(true)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_template_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_tag_template().send().await.unwrap_err();
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
        async fn create_tag_template_field() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2/fields"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("tagTemplateFieldId", "tag_template_field_id-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_tag_template_field()
                .set_parent("projects/value0/locations/value1/tagTemplates/value2")
                .set_tag_template_field(model::TagTemplateField::new())
                .set_tag_template_field_id("tag_template_field_id-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_tag_template_field_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_tag_template_field().send().await.unwrap_err();
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
        async fn update_tag_template_field() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2/fields/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_tag_template_field()
                .set_name("projects/value0/locations/value1/tagTemplates/value2/fields/value3")
                .set_tag_template_field(model::TagTemplateField::new())
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_tag_template_field_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_tag_template_field().send().await.unwrap_err();
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
        async fn rename_tag_template_field() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2/fields/value3:rename"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/tagTemplates/value2/fields/value3"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .rename_tag_template_field()
                .set_name("projects/value0/locations/value1/tagTemplates/value2/fields/value3")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn rename_tag_template_field_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.rename_tag_template_field().send().await.unwrap_err();
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
        async fn delete_tag_template_field() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2/fields/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("force", "true")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_tag_template_field()
                .set_name("projects/value0/locations/value1/tagTemplates/value2/fields/value3")
                .set_force(true)
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_template_field_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_tag_template_field().send().await.unwrap_err();
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
        async fn create_tag_locations_entry_groups_entries() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3/tags"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_tag()
                .set_parent("projects/value0/locations/value1/entryGroups/value2/entries/value3")
                .set_tag(model::Tag::new())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_tag_locations_entry_groups() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/tags"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .create_tag()
                .set_parent("projects/value0/locations/value1/entryGroups/value2")
                .set_tag(model::Tag::new())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_tag_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.create_tag().send().await.unwrap_err();
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
        async fn update_tag_locations_entry_groups_entries_tags() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_tag()
                .set_tag(model::Tag::new().set_name("projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_tag_locations_entry_groups_tags() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("PATCH"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/tags/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"name": "projects/value0/locations/value1/entryGroups/value2/tags/value3"})))),
                    request::query(url_decoded(contains(("updateMask", "update_mask.a,update_mask.b")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .update_tag()
                .set_tag(model::Tag::new().set_name("projects/value0/locations/value1/entryGroups/value2/tags/value3"))
                .set_update_mask(wkt::FieldMask::default().set_paths(vec!["update_mask.a".to_string(), "update_mask.b".to_string()]))
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn update_tag_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.update_tag().send().await.unwrap_err();
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
            assert_eq!(fields, vec!["tag.name", "tag.name"]);
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_locations_entry_groups_entries_tags() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_tag()
                .set_name("projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_locations_entry_groups_tags() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("DELETE"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/tags/value3"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .delete_tag()
                .set_name("projects/value0/locations/value1/entryGroups/value2/tags/value3")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.delete_tag().send().await.unwrap_err();
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
        async fn list_tags_locations_entry_groups_entries() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3/tags"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_tags()
                .set_parent("projects/value0/locations/value1/entryGroups/value2/entries/value3")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_tags_locations_entry_groups() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("GET"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/tags"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::query(url_decoded(contains(("pageSize", "42")))),
                    request::query(url_decoded(contains(("pageToken", "page_token-value")))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .list_tags()
                .set_parent("projects/value0/locations/value1/entryGroups/value2")
                .set_page_size(42_i32)
                .set_page_token("page_token-value")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_tags_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.list_tags().send().await.unwrap_err();
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
        async fn set_iam_policy_locations_tag_templates() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2:setIamPolicy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/tagTemplates/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .set_iam_policy()
                .set_resource("projects/value0/locations/value1/tagTemplates/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn set_iam_policy_locations_entry_groups() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2:setIamPolicy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/entryGroups/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .set_iam_policy()
                .set_resource("projects/value0/locations/value1/entryGroups/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn set_iam_policy_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.set_iam_policy().send().await.unwrap_err();
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
            assert_eq!(fields, vec!["resource", "resource"]);
            Ok(())
        }

        #[tokio::test]
        async fn get_iam_policy_locations_tag_templates() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2:getIamPolicy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/tagTemplates/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_iam_policy()
                .set_resource("projects/value0/locations/value1/tagTemplates/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_iam_policy_locations_entry_groups() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2:getIamPolicy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/entryGroups/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_iam_policy()
                .set_resource("projects/value0/locations/value1/entryGroups/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_iam_policy_locations_entry_groups_entries() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3:getIamPolicy"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/entryGroups/value2/entries/value3"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .get_iam_policy()
                .set_resource("projects/value0/locations/value1/entryGroups/value2/entries/value3")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_iam_policy_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.get_iam_policy().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 3);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["resource", "resource", "resource"]);
            Ok(())
        }

        #[tokio::test]
        async fn test_iam_permissions_locations_tag_templates() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/tagTemplates/value2:testIamPermissions"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/tagTemplates/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .test_iam_permissions()
                .set_resource("projects/value0/locations/value1/tagTemplates/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn test_iam_permissions_locations_entry_groups() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2:testIamPermissions"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/entryGroups/value2"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .test_iam_permissions()
                .set_resource("projects/value0/locations/value1/entryGroups/value2")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn test_iam_permissions_locations_entry_groups_entries() -> Result {
            let server = Server::run();
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2/entries/value3:testIamPermissions"),
                    request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                    request::body(json_decoded(eq(json!({"resource": "projects/value0/locations/value1/entryGroups/value2/entries/value3"})))),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = new_client(&server).await?;
            client
                .test_iam_permissions()
                .set_resource("projects/value0/locations/value1/entryGroups/value2/entries/value3")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn test_iam_permissions_binding_error() -> Result {
            let server = Server::run();
            let client = new_client(&server).await?;
            let err = client.test_iam_permissions().send().await.unwrap_err();
            assert!(err.is_binding(), "{err:?}");
            let binding = std::error::Error::source(&err)
                .and_then(|e| e.downcast_ref::<BindingError>())
                .ok_or_else(|| anyhow::anyhow!("expected a BindingError, got {err:?}"))?;
            assert_eq!(binding.paths.len(), 3);
            let fields = binding
                .paths
                .iter()
                .flat_map(|p| p.subs.iter().map(|s| s.field_name))
                .collect::<Vec<_>>();
            assert_eq!(fields, vec!["resource", "resource", "resource"]);
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
                    request::path("/v1/projects/value0/locations/value1/entryGroups/value2"),
                ])
                .respond_with(json_encoded(json!({}))),
            );
            let client = DataCatalog::builder()
                .with_endpoint(format!("http://{}", server.addr()))
                .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
                .with_tracing()
                .build()
                .await?;
            client
                .get_entry_group()
                .set_name("projects/value0/locations/value1/entryGroups/value2")
                .send()
                .await?;

            let got = logs.contents();
            assert!(got.contains("get_entry_group"), "{got}");
            assert!(got.contains("return=Ok"), "{got}");
            Ok(())
        }
    }
}
