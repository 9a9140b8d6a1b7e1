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
    use google_cloud_grafeas_v1::client::Grafeas;
    use google_cloud_grafeas_v1::model;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const OCCURRENCE: &str = "projects/p/occurrences/o-1";

    async fn new_client(server: &Server) -> anyhow::Result<Grafeas> {
        let client = Grafeas::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(google_cloud_auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_occurrence_with_details() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(format!("/v1/{OCCURRENCE}")),
            ])
            .respond_with(json_encoded(json!({
                "name": OCCURRENCE,
                "resourceUri": "https://gcr.io/p/image@sha256:abc",
                "noteName": "projects/goog-analysis/notes/PACKAGE_VULNERABILITY",
                "kind": "DISCOVERY",
                "discovery": {"analysisStatus": 3, "cpe": "cpe:/o:debian:debian_linux:10"},
            }))),
        );

        let client = new_client(&server).await?;
        let occurrence = client.get_occurrence().set_name(OCCURRENCE).send().await?;
        assert_eq!(occurrence.kind, model::NoteKind::Discovery);
        let discovery = occurrence.discovery().expect("discovery details should be set");
        assert_eq!(
            discovery.analysis_status,
            model::discovery_occurrence::AnalysisStatus::FinishedSuccess
        );
        assert_eq!(discovery.cpe, "cpe:/o:debian:debian_linux:10");
        Ok(())
    }

    #[tokio::test]
    async fn get_occurrence_note() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(format!("/v1/{OCCURRENCE}/notes")),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p/notes/n-1",
                "shortDescription": "base image",
            }))),
        );

        let client = new_client(&server).await?;
        let note = client.get_occurrence_note().set_name(OCCURRENCE).send().await?;
        assert_eq!(
            note,
            model::Note::new()
                .set_name("projects/p/notes/n-1")
                .set_short_description("base image")
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_note_binding_error() -> Result {
        let server = Server::run();
        let client = new_client(&server).await?;
        let err = client
            .get_note()
            .set_name(OCCURRENCE)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn list_notes_with_filter() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/v1/projects/p/notes"),
                request::query(url_decoded(contains(("filter", "kind=\"VULNERABILITY\"")))),
            ])
            .respond_with(json_encoded(json!({
                "notes": [
                    {"name": "projects/p/notes/CVE-2024-0001", "kind": 1},
                    {"name": "projects/p/notes/CVE-2024-0002", "kind": 1},
                ],
                "nextPageToken": "next",
            }))),
        );

        let client = new_client(&server).await?;
        let response = client
            .list_notes()
            .set_parent("projects/p")
            .set_filter("kind=\"VULNERABILITY\"")
            .send()
            .await?;
        assert_eq!(response.notes.len(), 2);
        assert!(
            response
                .notes
                .iter()
                .all(|n| n.kind == model::NoteKind::Vulnerability),
            "{response:?}"
        );
        assert_eq!(response.next_page_token, "next");
        Ok(())
    }

    #[tokio::test]
    async fn batch_create_notes_sends_map() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path("/v1/projects/p/notes:batchCreate"),
                request::body(json_decoded(|v: &serde_json::Value| {
                    v["parent"] == "projects/p"
                        && v["notes"]["CVE-2024-0001"]["shortDescription"] == "first"
                        && v["notes"]["CVE-2024-0002"]["shortDescription"] == "second"
                })),
            ])
            .respond_with(json_encoded(json!({
                "notes": [
                    {"name": "projects/p/notes/CVE-2024-0001"},
                    {"name": "projects/p/notes/CVE-2024-0002"},
                ],
            }))),
        );

        let client = new_client(&server).await?;
        let response = client
            .batch_create_notes()
            .set_parent("projects/p")
            .set_notes([
                (
                    "CVE-2024-0001",
                    model::Note::new().set_short_description("first"),
                ),
                (
                    "CVE-2024-0002",
                    model::Note::new().set_short_description("second"),
                ),
            ])
            .send()
            .await?;
        let mut names = response
            .notes
            .into_iter()
            .map(|n| n.name)
            .collect::<Vec<_>>();
        names.sort();
        assert_eq!(
            names,
            vec![
                "projects/p/notes/CVE-2024-0001".to_string(),
                "projects/p/notes/CVE-2024-0002".to_string()
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_occurrence() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(format!("/v1/{OCCURRENCE}")),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = new_client(&server).await?;
        client.delete_occurrence().set_name(OCCURRENCE).send().await?;
        Ok(())
    }
}
