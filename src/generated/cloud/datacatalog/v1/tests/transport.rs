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
    use google_cloud_datacatalog_v1::client::DataCatalog;
    use google_cloud_datacatalog_v1::model;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const ENTRY: &str = "projects/p/locations/us/entryGroups/@bigquery/entries/e";

    async fn new_client(server: &Server) -> anyhow::Result<DataCatalog> {
        let client = DataCatalog::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn lookup_entry_sends_query_parameters() -> Result {
        let linked = "//bigquery.googleapis.com/projects/p/datasets/d/tables/t";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/v1/entries:lookup"),
                request::query(url_decoded(contains(("linkedResource", linked)))),
                request::query(url_decoded(contains(("$alt", "json;enum-encoding=int")))),
                request::query(url_decoded(not(contains(key("sqlResource"))))),
            ])
            .respond_with(json_encoded(json!({
                "name": ENTRY,
                "linkedResource": linked,
            }))),
        );

        let client = new_client(&server).await?;
        let entry = client.lookup_entry().set_linked_resource(linked).send().await?;
        assert_eq!(
            entry,
            model::Entry::new()
                .set_name(ENTRY)
                .set_linked_resource(linked)
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_entry_binds_name() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(format!("/v1/{ENTRY}")),
            ])
            .respond_with(json_encoded(json!({"name": ENTRY}))),
        );

        let client = new_client(&server).await?;
        let entry = client.get_entry().set_name(ENTRY).send().await?;
        assert_eq!(entry.name, ENTRY);
        Ok(())
    }

    #[tokio::test]
    async fn get_entry_binding_error() -> Result {
        // No expectations: any request reaching the server fails the test.
        let server = Server::run();
        let client = new_client(&server).await?;

        let err = client
            .get_entry()
            .set_name("projects/p/entries/e")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");

        let err = client.get_entry().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn get_entry_service_error() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(format!("/v1/{ENTRY}"))).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .body(
                        json!({"error": {
                            "code": 404,
                            "message": "entry not found",
                            "status": "NOT_FOUND",
                        }})
                        .to_string(),
                    ),
            ),
        );

        let client = new_client(&server).await?;
        let err = client.get_entry().set_name(ENTRY).send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let status = err.status().expect("error should carry a status");
        assert_eq!(status.code, gax::error::rpc::Code::NotFound);
        assert_eq!(status.message, "entry not found");
        Ok(())
    }

    #[tokio::test]
    async fn create_tag_accepts_entry_and_entry_group_parents() -> Result {
        const GROUP: &str = "projects/p/locations/us/entryGroups/g";
        let template = "projects/p/locations/us/tagTemplates/governance";
        let server = Server::run();
        for parent in [ENTRY, GROUP] {
            server.expect(
                Expectation::matching(all_of![
                    request::method("POST"),
                    request::path(format!("/v1/{parent}/tags")),
                    request::body(json_decoded(move |v: &serde_json::Value| {
                        v["template"] == template
                            && v["fields"]["owner"]["stringValue"] == "data-team"
                    })),
                ])
                .respond_with(json_encoded(json!({
                    "name": format!("{parent}/tags/t1"),
                    "template": template,
                }))),
            );
        }

        let client = new_client(&server).await?;
        for parent in [ENTRY, GROUP] {
            let tag = client
                .create_tag()
                .set_parent(parent)
                .set_tag(
                    model::Tag::new().set_template(template).set_fields([(
                        "owner",
                        model::TagField::new().set_string_value("data-team"),
                    )]),
                )
                .send()
                .await?;
            assert_eq!(tag.name, format!("{parent}/tags/t1"));
        }
        Ok(())
    }

    #[tokio::test]
    async fn list_entries_follows_page_tokens() -> Result {
        use gax::paginator::ItemPaginator;
        const GROUP: &str = "projects/p/locations/us/entryGroups/g";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::path(format!("/v1/{GROUP}/entries")),
                request::query(url_decoded(contains(("pageToken", "")))),
            ])
            .respond_with(json_encoded(json!({
                "entries": [{"name": format!("{GROUP}/entries/e1")}],
                "nextPageToken": "page-2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::path(format!("/v1/{GROUP}/entries")),
                request::query(url_decoded(contains(("pageToken", "page-2")))),
            ])
            .respond_with(json_encoded(json!({
                "entries": [{"name": format!("{GROUP}/entries/e2")}],
            }))),
        );

        let client = new_client(&server).await?;
        let mut names = Vec::new();
        let mut items = client.list_entries().set_parent(GROUP).by_item();
        while let Some(entry) = items.next().await {
            names.push(entry?.name);
        }
        assert_eq!(
            names,
            vec![format!("{GROUP}/entries/e1"), format!("{GROUP}/entries/e2")]
        );
        Ok(())
    }
}
