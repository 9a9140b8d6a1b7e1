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

#[cfg(feature = "controller-2")]
/// A dyn-compatible, crate-private version of [super::Controller2].
#[async_trait::async_trait]
pub trait Controller2: std::fmt::Debug + Send + Sync {
    async fn register_debuggee(
        &self,
        req: crate::model::RegisterDebuggeeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RegisterDebuggeeResponse>>;

    async fn list_active_breakpoints(
        &self,
        req: crate::model::ListActiveBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListActiveBreakpointsResponse>>;

    async fn update_active_breakpoint(
        &self,
        req: crate::model::UpdateActiveBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateActiveBreakpointResponse>>;
}

#[cfg(feature = "controller-2")]
/// All implementations of [super::Controller2] also implement [Controller2].
#[async_trait::async_trait]
impl<T: super::Controller2> Controller2 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn register_debuggee(
        &self,
        req: crate::model::RegisterDebuggeeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RegisterDebuggeeResponse>> {
        T::register_debuggee(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_active_breakpoints(
        &self,
        req: crate::model::ListActiveBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListActiveBreakpointsResponse>> {
        T::list_active_breakpoints(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_active_breakpoint(
        &self,
        req: crate::model::UpdateActiveBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UpdateActiveBreakpointResponse>> {
        T::update_active_breakpoint(self, req, options).await
    }
}

#[cfg(feature = "debugger-2")]
/// A dyn-compatible, crate-private version of [super::Debugger2].
#[async_trait::async_trait]
pub trait Debugger2: std::fmt::Debug + Send + Sync {
    async fn set_breakpoint(
        &self,
        req: crate::model::SetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SetBreakpointResponse>>;

    async fn get_breakpoint(
        &self,
        req: crate::model::GetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetBreakpointResponse>>;

    async fn delete_breakpoint(
        &self,
        req: crate::model::DeleteBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn list_breakpoints(
        &self,
        req: crate::model::ListBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListBreakpointsResponse>>;

    async fn list_debuggees(
        &self,
        req: crate::model::ListDebuggeesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListDebuggeesResponse>>;
}

#[cfg(feature = "debugger-2")]
/// All implementations of [super::Debugger2] also implement [Debugger2].
#[async_trait::async_trait]
impl<T: super::Debugger2> Debugger2 for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn set_breakpoint(
        &self,
        req: crate::model::SetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SetBreakpointResponse>> {
        T::set_breakpoint(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_breakpoint(
        &self,
        req: crate::model::GetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GetBreakpointResponse>> {
        T::get_breakpoint(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_breakpoint(
        &self,
        req: crate::model::DeleteBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_breakpoint(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_breakpoints(
        &self,
        req: crate::model::ListBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListBreakpointsResponse>> {
        T::list_breakpoints(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_debuggees(
        &self,
        req: crate::model::ListDebuggeesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListDebuggeesResponse>> {
        T::list_debuggees(self, req, options).await
    }
}
