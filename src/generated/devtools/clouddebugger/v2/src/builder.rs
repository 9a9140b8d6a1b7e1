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
pub mod controller2 {
    use crate::Result;

    /// A builder for [Controller2][crate::client::Controller2].
    ///
    /// ```
    /// # use google_cloud_debugger_v2::*;
    /// # use builder::controller2::ClientBuilder;
    /// # use client::Controller2;
    /// # tokio_test::block_on(async {
    /// let builder : ClientBuilder = Controller2::builder();
    /// let client = builder
    ///     .with_endpoint("https://clouddebugger.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Controller2;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Controller2;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Controller2] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Controller2>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Controller2>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Controller2::register_debuggee][crate::client::Controller2::register_debuggee] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::controller2::RegisterDebuggee;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> RegisterDebuggee {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct RegisterDebuggee(RequestBuilder<crate::model::RegisterDebuggeeRequest>);

    impl RegisterDebuggee {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Controller2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::RegisterDebuggeeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RegisterDebuggeeResponse> {
            (*self.0.stub)
                .register_debuggee(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee][crate::model::RegisterDebuggeeRequest::debuggee].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Debuggee>,
        {
            self.0.request.debuggee = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [debuggee][crate::model::RegisterDebuggeeRequest::debuggee].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_debuggee<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Debuggee>,
        {
            self.0.request.debuggee = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RegisterDebuggee {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Controller2::list_active_breakpoints][crate::client::Controller2::list_active_breakpoints] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::controller2::ListActiveBreakpoints;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListActiveBreakpoints {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListActiveBreakpoints(RequestBuilder<crate::model::ListActiveBreakpointsRequest>);

    impl ListActiveBreakpoints {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Controller2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::ListActiveBreakpointsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListActiveBreakpointsResponse> {
            (*self.0.stub)
                .list_active_breakpoints(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::ListActiveBreakpointsRequest::debuggee_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.debuggee_id = v.into();
            self
        }

        /// Sets the value of [wait_token][crate::model::ListActiveBreakpointsRequest::wait_token].
        pub fn set_wait_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.wait_token = v.into();
            self
        }

        /// Sets the value of [success_on_timeout][crate::model::ListActiveBreakpointsRequest::success_on_timeout].
        pub fn set_success_on_timeout<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.success_on_timeout = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListActiveBreakpoints {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Controller2::update_active_breakpoint][crate::client::Controller2::update_active_breakpoint] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::controller2::UpdateActiveBreakpoint;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> UpdateActiveBreakpoint {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct UpdateActiveBreakpoint(RequestBuilder<crate::model::UpdateActiveBreakpointRequest>);

    impl UpdateActiveBreakpoint {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Controller2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::UpdateActiveBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateActiveBreakpointResponse> {
            (*self.0.stub)
                .update_active_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::UpdateActiveBreakpointRequest::debuggee_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.debuggee_id = v.into();
            self
        }

        /// Sets the value of [breakpoint][crate::model::UpdateActiveBreakpointRequest::breakpoint].
        ///
        /// This is a **required** field for requests.
        pub fn set_breakpoint<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Breakpoint>,
        {
            self.0.request.breakpoint = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [breakpoint][crate::model::UpdateActiveBreakpointRequest::breakpoint].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_breakpoint<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Breakpoint>,
        {
            self.0.request.breakpoint = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateActiveBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

#[cfg(feature = "debugger-2")]
pub mod debugger2 {
    use crate::Result;

    /// A builder for [Debugger2][crate::client::Debugger2].
    ///
    /// ```
    /// # use google_cloud_debugger_v2::*;
    /// # use builder::debugger2::ClientBuilder;
    /// # use client::Debugger2;
    /// # tokio_test::block_on(async {
    /// let builder : ClientBuilder = Debugger2::builder();
    /// let client = builder
    ///     .with_endpoint("https://clouddebugger.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::Debugger2;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Debugger2;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::Debugger2] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [Debugger2::set_breakpoint][crate::client::Debugger2::set_breakpoint] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::debugger2::SetBreakpoint;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> SetBreakpoint {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct SetBreakpoint(RequestBuilder<crate::model::SetBreakpointRequest>);

    impl SetBreakpoint {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::SetBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SetBreakpointResponse> {
            (*self.0.stub)
                .set_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::SetBreakpointRequest::debuggee_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.debuggee_id = v.into();
            self
        }

        /// Sets the value of [breakpoint][crate::model::SetBreakpointRequest::breakpoint].
        ///
        /// This is a **required** field for requests.
        pub fn set_breakpoint<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::Breakpoint>,
        {
            self.0.request.breakpoint = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [breakpoint][crate::model::SetBreakpointRequest::breakpoint].
        ///
        /// This is a **required** field for requests.
        pub fn set_or_clear_breakpoint<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::Breakpoint>,
        {
            self.0.request.breakpoint = v.map(|x| x.into());
            self
        }

        /// Sets the value of [client_version][crate::model::SetBreakpointRequest::client_version].
        ///
        /// This is a **required** field for requests.
        pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.client_version = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Debugger2::get_breakpoint][crate::client::Debugger2::get_breakpoint] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::debugger2::GetBreakpoint;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> GetBreakpoint {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct GetBreakpoint(RequestBuilder<crate::model::GetBreakpointRequest>);

    impl GetBreakpoint {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::GetBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetBreakpointResponse> {
            (*self.0.stub)
                .get_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::GetBreakpointRequest::debuggee_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.debuggee_id = v.into();
            self
        }

        /// Sets the value of [breakpoint_id][crate::model::GetBreakpointRequest::breakpoint_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_breakpoint_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.breakpoint_id = v.into();
            self
        }

        /// Sets the value of [client_version][crate::model::GetBreakpointRequest::client_version].
        ///
        /// This is a **required** field for requests.
        pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.client_version = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Debugger2::delete_breakpoint][crate::client::Debugger2::delete_breakpoint] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::debugger2::DeleteBreakpoint;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> DeleteBreakpoint {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DeleteBreakpoint(RequestBuilder<crate::model::DeleteBreakpointRequest>);

    impl DeleteBreakpoint {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::DeleteBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .delete_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::DeleteBreakpointRequest::debuggee_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.debuggee_id = v.into();
            self
        }

        /// Sets the value of [breakpoint_id][crate::model::DeleteBreakpointRequest::breakpoint_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_breakpoint_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.breakpoint_id = v.into();
            self
        }

        /// Sets the value of [client_version][crate::model::DeleteBreakpointRequest::client_version].
        ///
        /// This is a **required** field for requests.
        pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.client_version = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Debugger2::list_breakpoints][crate::client::Debugger2::list_breakpoints] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::debugger2::ListBreakpoints;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListBreakpoints {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListBreakpoints(RequestBuilder<crate::model::ListBreakpointsRequest>);

    impl ListBreakpoints {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::ListBreakpointsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListBreakpointsResponse> {
            (*self.0.stub)
                .list_breakpoints(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::ListBreakpointsRequest::debuggee_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.debuggee_id = v.into();
            self
        }

        /// Sets the value of [include_all_users][crate::model::ListBreakpointsRequest::include_all_users].
        pub fn set_include_all_users<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_all_users = v.into();
            self
        }

        /// Sets the value of [include_inactive][crate::model::ListBreakpointsRequest::include_inactive].
        pub fn set_include_inactive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_inactive = v.into();
            self
        }

        /// Sets the value of [action][crate::model::ListBreakpointsRequest::action].
        pub fn set_action<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<crate::model::list_breakpoints_request::BreakpointActionValue>,
        {
            self.0.request.action = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [action][crate::model::ListBreakpointsRequest::action].
        pub fn set_or_clear_action<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<crate::model::list_breakpoints_request::BreakpointActionValue>,
        {
            self.0.request.action = v.map(|x| x.into());
            self
        }

        /// Sets the value of [strip_results][crate::model::ListBreakpointsRequest::strip_results].
        pub fn set_strip_results<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.strip_results = v.into();
            self
        }

        /// Sets the value of [wait_token][crate::model::ListBreakpointsRequest::wait_token].
        pub fn set_wait_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.wait_token = v.into();
            self
        }

        /// Sets the value of [client_version][crate::model::ListBreakpointsRequest::client_version].
        ///
        /// This is a **required** field for requests.
        pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.client_version = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBreakpoints {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [Debugger2::list_debuggees][crate::client::Debugger2::list_debuggees] calls.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_debugger_v2::builder::debugger2::ListDebuggees;
    /// # async fn sample() -> gax::Result<()> {
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # Ok(()) }
    ///
    /// fn prepare_request_builder() -> ListDebuggees {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListDebuggees(RequestBuilder<crate::model::ListDebuggeesRequest>);

    impl ListDebuggees {
        pub(crate) fn new(stub: std::sync::Arc<dyn super::super::stub::dynamic::Debugger2>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: std::convert::Into<crate::model::ListDebuggeesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: std::convert::Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDebuggeesResponse> {
            (*self.0.stub)
                .list_debuggees(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [project][crate::model::ListDebuggeesRequest::project].
        ///
        /// This is a **required** field for requests.
        pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.project = v.into();
            self
        }

        /// Sets the value of [include_inactive][crate::model::ListDebuggeesRequest::include_inactive].
        pub fn set_include_inactive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.0.request.include_inactive = v.into();
            self
        }

        /// Sets the value of [client_version][crate::model::ListDebuggeesRequest::client_version].
        ///
        /// This is a **required** field for requests.
        pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.client_version = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDebuggees {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
