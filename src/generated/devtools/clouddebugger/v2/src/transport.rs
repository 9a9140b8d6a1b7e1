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

use crate::Result;

#[cfg(feature = "controller-2")]
/// Implements [Controller2](super::stub::Controller2) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Controller2 {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "controller-2")]
impl std::fmt::Debug for Controller2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Controller2")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "controller-2")]
impl Controller2 {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "controller-2")]
impl super::stub::Controller2 for Controller2 {
    async fn register_debuggee(
        &self,
        req: crate::model::RegisterDebuggeeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RegisterDebuggeeResponse>> {
        let path = "/v2/controller/debuggees/register".to_string();
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, Some(req), options)
            .await
    }

    async fn list_active_breakpoints(
        &self,
        req: crate::model::ListActiveBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListActiveBreakpointsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/controller/debuggees/{}/breakpoints",
                &[
                    ("debuggee_id", req.debuggee_id.as_str(), "*"),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = builder.query(&[("waitToken", &req.wait_token)]);
        let builder = builder.query(&[("successOnTimeout", &req.success_on_timeout)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_active_breakpoint(
        &self,
        req: crate::model::UpdateActiveBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateActiveBreakpointResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/controller/debuggees/{}/breakpoints/{}",
                &[
                    ("debuggee_id", req.debuggee_id.as_str(), "*"),
                    (
                        "breakpoint.id",
                        req.breakpoint.as_ref().map(|m| m.id.as_str()).unwrap_or_default(),
                        "*",
                    ),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, Some(req), options)
            .await
    }
}

#[cfg(feature = "debugger-2")]
/// Implements [Debugger2](super::stub::Debugger2) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Debugger2 {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "debugger-2")]
impl std::fmt::Debug for Debugger2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Debugger2")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "debugger-2")]
impl Debugger2 {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "debugger-2")]
impl super::stub::Debugger2 for Debugger2 {
    async fn set_breakpoint(
        &self,
        req: crate::model::SetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SetBreakpointResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/debugger/debuggees/{}/breakpoints/set",
                &[
                    ("debuggee_id", req.debuggee_id.as_str(), "*"),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = builder.query(&[("clientVersion", &req.client_version)]);
        self.inner
            .execute(builder, req.breakpoint, options)
            .await
    }

    async fn get_breakpoint(
        &self,
        req: crate::model::GetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetBreakpointResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/debugger/debuggees/{}/breakpoints/{}",
                &[
                    ("debuggee_id", req.debuggee_id.as_str(), "*"),
                    ("breakpoint_id", req.breakpoint_id.as_str(), "*"),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = builder.query(&[("clientVersion", &req.client_version)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_breakpoint(
        &self,
        req: crate::model::DeleteBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/debugger/debuggees/{}/breakpoints/{}",
                &[
                    ("debuggee_id", req.debuggee_id.as_str(), "*"),
                    ("breakpoint_id", req.breakpoint_id.as_str(), "*"),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = builder.query(&[("clientVersion", &req.client_version)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn list_breakpoints(
        &self,
        req: crate::model::ListBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListBreakpointsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/debugger/debuggees/{}/breakpoints",
                &[
                    ("debuggee_id", req.debuggee_id.as_str(), "*"),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = builder.query(&[("includeAllUsers", &req.include_all_users)]);
        let builder = builder.query(&[("includeInactive", &req.include_inactive)]);
        let builder = req
            .action
            .as_ref()
            .map(|m| &m.value)
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("action.value", v)]));
        let builder = builder.query(&[("stripResults", &req.strip_results)]);
        let builder = builder.query(&[("waitToken", &req.wait_token)]);
        let builder = builder.query(&[("clientVersion", &req.client_version)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_debuggees(
        &self,
        req: crate::model::ListDebuggeesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDebuggeesResponse>> {
        let path = "/v2/debugger/debuggees".to_string();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = builder.query(&[("project", &req.project)]);
        let builder = builder.query(&[("includeInactive", &req.include_inactive)]);
        let builder = builder.query(&[("clientVersion", &req.client_version)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
