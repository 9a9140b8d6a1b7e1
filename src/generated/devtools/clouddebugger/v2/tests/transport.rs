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
    use google_cloud_debugger_v2::client::{Controller2, Debugger2};
    use google_cloud_debugger_v2::model;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const DEBUGGEE: &str = "d-1";

    fn endpoint(server: &Server) -> String {
        format!("http://{}", server.addr())
    }

    fn anonymous() -> google_cloud_auth::credentials::Credentials {
        google_cloud_auth::credentials::anonymous::Builder::new().build()
    }

    async fn controller(server: &Server) -> anyhow::Result<Controller2> {
        let client = Controller2::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(anonymous())
            .build()
            .await?;
        Ok(client)
    }

    async fn debugger(server: &Server) -> anyhow::Result<Debugger2> {
        let client = Debugger2::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(anonymous())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn list_active_breakpoints_with_wait_token() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(format!("/v2/controller/debuggees/{DEBUGGEE}/breakpoints")),
                request::query(url_decoded(contains(("waitToken", "token-1")))),
                request::query(url_decoded(contains(("successOnTimeout", "true")))),
            ])
            .respond_with(json_encoded(json!({
                "breakpoints": [{
                    "id": "bp-1",
                    "action": "LOG",
                    "location": {"path": "src/main.rs", "line": 42},
                    "logMessageFormat": "x = $0",
                    "expressions": ["x"],
                }],
                "nextWaitToken": "token-2",
            }))),
        );

        let client = controller(&server).await?;
        let response = client
            .list_active_breakpoints()
            .set_debuggee_id(DEBUGGEE)
            .set_wait_token("token-1")
            .set_success_on_timeout(true)
            .send()
            .await?;
        assert_eq!(response.next_wait_token, "token-2");
        assert!(!response.wait_expired);
        assert_eq!(
            response.breakpoints,
            vec![
                model::Breakpoint::new()
                    .set_id("bp-1")
                    .set_action(model::breakpoint::Action::Log)
                    .set_location(
                        model::SourceLocation::new()
                            .set_path("src/main.rs")
                            .set_line(42)
                    )
                    .set_log_message_format("x = $0")
                    .set_expressions(["x"])
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_active_breakpoints_requires_debuggee() -> Result {
        let server = Server::run();
        let client = controller(&server).await?;
        let err = client.list_active_breakpoints().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn update_active_breakpoint_binds_nested_id() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("PUT"),
                request::path(format!("/v2/controller/debuggees/{DEBUGGEE}/breakpoints/bp-1")),
                request::body(json_decoded(|v: &serde_json::Value| {
                    v["debuggeeId"] == DEBUGGEE
                        && v["breakpoint"]["id"] == "bp-1"
                        && v["breakpoint"]["isFinalState"] == true
                })),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = controller(&server).await?;
        client
            .update_active_breakpoint()
            .set_debuggee_id(DEBUGGEE)
            .set_breakpoint(model::Breakpoint::new().set_id("bp-1").set_is_final_state(true))
            .send()
            .await?;

        // Without a breakpoint there is no id to bind.
        let err = client
            .update_active_breakpoint()
            .set_debuggee_id(DEBUGGEE)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn set_breakpoint_sends_breakpoint_as_body() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(format!("/v2/debugger/debuggees/{DEBUGGEE}/breakpoints/set")),
                request::query(url_decoded(contains(("clientVersion", "test-client/1.0")))),
                request::body(json_decoded(|v: &serde_json::Value| {
                    v["location"]["path"] == "src/lib.rs"
                        && v["location"]["line"] == 7
                        && v["condition"] == "x > 1"
                })),
            ])
            .respond_with(json_encoded(json!({
                "breakpoint": {
                    "id": "bp-2",
                    "location": {"path": "src/lib.rs", "line": 7},
                    "condition": "x > 1",
                },
            }))),
        );

        let client = debugger(&server).await?;
        let response = client
            .set_breakpoint()
            .set_debuggee_id(DEBUGGEE)
            .set_client_version("test-client/1.0")
            .set_breakpoint(
                model::Breakpoint::new()
                    .set_location(model::SourceLocation::new().set_path("src/lib.rs").set_line(7))
                    .set_condition("x > 1"),
            )
            .send()
            .await?;
        let breakpoint = response.breakpoint.expect("response should include the breakpoint");
        assert_eq!(breakpoint.id, "bp-2");
        assert_eq!(breakpoint.action, model::breakpoint::Action::Capture);
        Ok(())
    }

    #[tokio::test]
    async fn delete_breakpoint() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("DELETE"),
                request::path(format!("/v2/debugger/debuggees/{DEBUGGEE}/breakpoints/bp-1")),
                request::query(url_decoded(contains(("clientVersion", "test-client/1.0")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = debugger(&server).await?;
        client
            .delete_breakpoint()
            .set_debuggee_id(DEBUGGEE)
            .set_breakpoint_id("bp-1")
            .set_client_version("test-client/1.0")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn list_debuggees() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path("/v2/debugger/debuggees"),
                request::query(url_decoded(contains(("project", "p")))),
                request::query(url_decoded(contains(("includeInactive", "false")))),
            ])
            .respond_with(json_encoded(json!({
                "debuggees": [{"id": DEBUGGEE, "project": "p", "uniquifier": "abc"}],
            }))),
        );

        let client = debugger(&server).await?;
        let response = client
            .list_debuggees()
            .set_project("p")
            .set_client_version("test-client/1.0")
            .send()
            .await?;
        assert_eq!(response.debuggees.len(), 1);
        assert_eq!(response.debuggees[0].id, DEBUGGEE);
        assert_eq!(response.debuggees[0].uniquifier, "abc");
        Ok(())
    }
}
