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

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_cloud_debugger_v2::model;
    use pretty_assertions::assert_eq;

    type Result = anyhow::Result<()>;

    #[cfg(feature = "controller-2")]
    mod controller2 {
        use super::*;
        use pretty_assertions::assert_eq;
        use google_cloud_debugger_v2::client::Controller2;

        mockall::mock! {
            #[derive(Debug)]
            Controller2 {}
            impl google_cloud_debugger_v2::stub::Controller2 for Controller2 {
                async fn register_debuggee(&self, req: model::RegisterDebuggeeRequest, _options: RequestOptions) -> gax::Result<Response<model::RegisterDebuggeeResponse>>;
                async fn list_active_breakpoints(&self, req: model::ListActiveBreakpointsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListActiveBreakpointsResponse>>;
                async fn update_active_breakpoint(&self, req: model::UpdateActiveBreakpointRequest, _options: RequestOptions) -> gax::Result<Response<model::UpdateActiveBreakpointResponse>>;
            }
        }

        #[tokio::test]
        async fn register_debuggee() -> Result {
            let mut mock = MockController2::new();
            mock.expect_register_debuggee()
                .withf(|r, _| {
                    r.debuggee == Some(model::Debuggee::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::RegisterDebuggeeResponse::default())));

            let client = Controller2::from_stub(mock);
            let got = client
                .register_debuggee()
                .set_debuggee(model::Debuggee::default())
                .send()
                .await?;
            assert_eq!(got, model::RegisterDebuggeeResponse::default());

            let request = model::RegisterDebuggeeRequest::new()
                .set_debuggee(model::Debuggee::default());
            let got = client
                .register_debuggee()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::RegisterDebuggeeResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_active_breakpoints() -> Result {
            let mut mock = MockController2::new();
            mock.expect_list_active_breakpoints()
                .withf(|r, _| {
                    r.debuggee_id == "hello world"
                        && r.wait_token == "hello world"
                        && r.success_on_timeout
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListActiveBreakpointsResponse::default())));

            let client = Controller2::from_stub(mock);
            let got = client
                .list_active_breakpoints()
                .set_debuggee_id("hello world")
                .set_wait_token("hello world")
                .set_success_on_timeout(true)
                .send()
                .await?;
            assert_eq!(got, model::ListActiveBreakpointsResponse::default());

            let request = model::ListActiveBreakpointsRequest::new()
                .set_debuggee_id("hello world")
                .set_wait_token("hello world")
                .set_success_on_timeout(true);
            let got = client
                .list_active_breakpoints()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListActiveBreakpointsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_active_breakpoint() -> Result {
            let mut mock = MockController2::new();
            mock.expect_update_active_breakpoint()
                .withf(|r, _| {
                    r.debuggee_id == "hello world"
                        && r.breakpoint == Some(model::Breakpoint::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::UpdateActiveBreakpointResponse::default())));

            let client = Controller2::from_stub(mock);
            let got = client
                .update_active_breakpoint()
                .set_debuggee_id("hello world")
                .set_breakpoint(model::Breakpoint::default())
                .send()
                .await?;
            assert_eq!(got, model::UpdateActiveBreakpointResponse::default());

            let request = model::UpdateActiveBreakpointRequest::new()
                .set_debuggee_id("hello world")
                .set_breakpoint(model::Breakpoint::default());
            let got = client
                .update_active_breakpoint()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::UpdateActiveBreakpointResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn request_options_are_forwarded() -> Result {
            use gax::options::RequestOptionsBuilder;
            let mut mock = MockController2::new();
            mock.expect_register_debuggee()
                .withf(|_, o| o.user_agent().as_deref() == Some("test-agent/1.0"))
                .times(1)
                .returning(|_, _| Ok(Response::from(model::RegisterDebuggeeResponse::default())));
            let client = Controller2::from_stub(mock);
            client
                .register_debuggee()
                .with_user_agent("test-agent/1.0")
                .send()
                .await?;
            Ok(())
        }
    }

    #[cfg(feature = "debugger-2")]
    mod debugger2 {
        use super::*;
        use pretty_assertions::assert_eq;
        use google_cloud_debugger_v2::client::Debugger2;

        mockall::mock! {
            #[derive(Debug)]
            Debugger2 {}
            impl google_cloud_debugger_v2::stub::Debugger2 for Debugger2 {
                async fn set_breakpoint(&self, req: model::SetBreakpointRequest, _options: RequestOptions) -> gax::Result<Response<model::SetBreakpointResponse>>;
                async fn get_breakpoint(&self, req: model::GetBreakpointRequest, _options: RequestOptions) -> gax::Result<Response<model::GetBreakpointResponse>>;
                async fn delete_breakpoint(&self, req: model::DeleteBreakpointRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn list_breakpoints(&self, req: model::ListBreakpointsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListBreakpointsResponse>>;
                async fn list_debuggees(&self, req: model::ListDebuggeesRequest, _options: RequestOptions) -> gax::Result<Response<model::ListDebuggeesResponse>>;
            }
        }

        #[tokio::test]
        async fn set_breakpoint() -> Result {
            let mut mock = MockDebugger2::new();
            mock.expect_set_breakpoint()
                .withf(|r, _| {
                    r.debuggee_id == "hello world"
                        && r.breakpoint == Some(model::Breakpoint::default())
                        && r.client_version == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::SetBreakpointResponse::default())));

            let client = Debugger2::from_stub(mock);
            let got = client
                .set_breakpoint()
                .set_debuggee_id("hello world")
                .set_breakpoint(model::Breakpoint::default())
                .set_client_version("hello world")
                .send()
                .await?;
            assert_eq!(got, model::SetBreakpointResponse::default());

            let request = model::SetBreakpointRequest::new()
                .set_debuggee_id("hello world")
                .set_breakpoint(model::Breakpoint::default())
                .set_client_version("hello world");
            let got = client
                .set_breakpoint()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::SetBreakpointResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_breakpoint() -> Result {
            let mut mock = MockDebugger2::new();
            mock.expect_get_breakpoint()
                .withf(|r, _| {
                    r.debuggee_id == "hello world"
                        && r.breakpoint_id == "hello world"
                        && r.client_version == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::GetBreakpointResponse::default())));

            let client = Debugger2::from_stub(mock);
            let got = client
                .get_breakpoint()
                .set_debuggee_id("hello world")
                .set_breakpoint_id("hello world")
                .set_client_version("hello world")
                .send()
                .await?;
            assert_eq!(got, model::GetBreakpointResponse::default());

            let request = model::GetBreakpointRequest::new()
                .set_debuggee_id("hello world")
                .set_breakpoint_id("hello world")
                .set_client_version("hello world");
            let got = client
                .get_breakpoint()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::GetBreakpointResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_breakpoint() -> Result {
            let mut mock = MockDebugger2::new();
            mock.expect_delete_breakpoint()
                .withf(|r, _| {
                    r.debuggee_id == "hello world"
                        && r.breakpoint_id == "hello world"
                        && r.client_version == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = Debugger2::from_stub(mock);
            client
                .delete_breakpoint()
                .set_debuggee_id("hello world")
                .set_breakpoint_id("hello world")
                .set_client_version("hello world")
                .send()
                .await?;

            let request = model::DeleteBreakpointRequest::new()
                .set_debuggee_id("hello world")
                .set_breakpoint_id("hello world")
                .set_client_version("hello world");
            client
                .delete_breakpoint()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_breakpoints() -> Result {
            let mut mock = MockDebugger2::new();
            mock.expect_list_breakpoints()
                .withf(|r, _| {
                    r.debuggee_id == "hello world"
                        && r.include_all_users
                        && r.include_inactive
                        && r.action == Some(model::list_breakpoints_request::BreakpointActionValue::default())
                        && r.strip_results
                        && r.wait_token == "hello world"
                        && r.client_version == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListBreakpointsResponse::default())));

            let client = Debugger2::from_stub(mock);
            let got = client
                .list_breakpoints()
                .set_debuggee_id("hello world")
                .set_include_all_users(true)
                .set_include_inactive(true)
                .set_action(model::list_breakpoints_request::BreakpointActionValue::default())
                .set_strip_results(true)
                .set_wait_token("hello world")
                .set_client_version("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListBreakpointsResponse::default());

            let request = model::ListBreakpointsRequest::new()
                .set_debuggee_id("hello world")
                .set_include_all_users(true)
                .set_include_inactive(true)
                .set_action(model::list_breakpoints_request::BreakpointActionValue::default())
                .set_strip_results(true)
                .set_wait_token("hello world")
                .set_client_version("hello world");
            let got = client
                .list_breakpoints()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListBreakpointsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_debuggees() -> Result {
            let mut mock = MockDebugger2::new();
            mock.expect_list_debuggees()
                .withf(|r, _| {
                    r.project == "hello world"
                        && r.include_inactive
                        && r.client_version == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListDebuggeesResponse::default())));

            let client = Debugger2::from_stub(mock);
            let got = client
                .list_debuggees()
                .set_project("hello world")
                .set_include_inactive(true)
                .set_client_version("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListDebuggeesResponse::default());

            let request = model::ListDebuggeesRequest::new()
                .set_project("hello world")
                .set_include_inactive(true)
                .set_client_version("hello world");
            let got = client
                .list_debuggees()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListDebuggeesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn request_options_are_forwarded() -> Result {
            use gax::options::RequestOptionsBuilder;
            let mut mock = MockDebugger2::new();
            mock.expect_set_breakpoint()
                .withf(|_, o| o.user_agent().as_deref() == Some("test-agent/1.0"))
                .times(1)
                .returning(|_, _| Ok(Response::from(model::SetBreakpointResponse::default())));
            let client = Debugger2::from_stub(mock);
            client
                .set_breakpoint()
                .with_user_agent("test-agent/1.0")
                .send()
                .await?;
            Ok(())
        }
    }
}
