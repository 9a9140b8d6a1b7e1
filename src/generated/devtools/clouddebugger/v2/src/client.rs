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
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "controller-2")]
/// Implements a client for the Cloud Debugger API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_debugger_v2::client::Controller2;
/// let client = Controller2::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The Controller service provides the API for orchestrating a collection of
/// debugger agents to perform debugging tasks. These agents are each attached
/// to a process of an application which may include one or more replicas.
///
/// The debugger agents register with the Controller to identify the application
/// being debugged, the Debuggee. All agents that register with the same data,
/// represent the same Debuggee, and are assigned the same `debuggee_id`.
///
/// The debugger agents call the Controller to retrieve  the list of active
/// Breakpoints. Agents with the same `debuggee_id` get the same breakpoints
/// list. An agent that can fulfill the breakpoint request updates the
/// Controller with the breakpoint result. The controller selects the first
/// result received and discards the rest of the results. Agents that poll again
/// for active breakpoints will no longer have the completed breakpoint in the
/// list and should remove that breakpoint from their attached process.
///
/// The Controller service does not provide a way to retrieve the results of a
/// completed breakpoint. This functionality is available using the Debugger
/// service.
///
/// # Configuration
///
/// To configure `Controller2` use the `with_*` methods in the type returned
/// by [builder()][Controller2::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://clouddebugger.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::controller2::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::controller2::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Controller2` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Controller2` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Controller2 {
    inner: std::sync::Arc<dyn super::stub::dynamic::Controller2>,
}

#[cfg(feature = "controller-2")]
impl Controller2 {
    /// Returns a builder for [Controller2].
    ///
    /// ```
    /// # use google_cloud_debugger_v2::client::Controller2;
    /// # tokio_test::block_on(async {
    /// let client = Controller2::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::controller2::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::controller2::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Controller2 + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Controller2>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Controller2> {
        super::transport::Controller2::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Controller2> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Controller2::new)
    }

    /// Registers the debuggee with the controller service.
    ///
    /// All agents attached to the same application must call this method with
    /// exactly the same request content to get back the same stable `debuggee_id`.
    /// Agents should call this method again whenever `google.rpc.Code.NOT_FOUND` is
    /// returned from any controller method.
    ///
    /// This protocol allows the controller service to disable debuggees, recover
    /// from data loss, or change the `debuggee_id` format. Agents must handle
    /// `debuggee_id` value changing upon re-registration.
    pub fn register_debuggee(&self) -> super::builder::controller2::RegisterDebuggee {
        super::builder::controller2::RegisterDebuggee::new(self.inner.clone())
    }

    /// Returns the list of all active breakpoints for the debuggee.
    ///
    /// The breakpoint specification (`location`, `condition`, and `expressions`
    /// fields) is semantically immutable, although the field values may change. For
    /// example, an agent may update the location line number to reflect the actual
    /// line where the breakpoint was set, but this doesn't change the breakpoint
    /// semantics.
    ///
    /// This means that an agent does not need to check if a breakpoint has changed
    /// when it encounters the same breakpoint on a successive call. Moreover, an
    /// agent should remember the breakpoints that are completed until the
    /// controller removes them from the active list to avoid setting those
    /// breakpoints again.
    pub fn list_active_breakpoints(&self) -> super::builder::controller2::ListActiveBreakpoints {
        super::builder::controller2::ListActiveBreakpoints::new(self.inner.clone())
    }

    /// Updates the breakpoint state or mutable fields. The entire Breakpoint
    /// message must be sent back to the controller service.
    ///
    /// Updates to active breakpoint fields are only allowed if the new value does
    /// not change the breakpoint specification. Updates to the `location`,
    /// `condition` and `expressions` fields should not alter the breakpoint
    /// semantics. These may only make changes such as canonicalizing a value or
    /// snapping the location to the correct line of code.
    pub fn update_active_breakpoint(&self) -> super::builder::controller2::UpdateActiveBreakpoint {
        super::builder::controller2::UpdateActiveBreakpoint::new(self.inner.clone())
    }
}

#[cfg(feature = "debugger-2")]
/// Implements a client for the Cloud Debugger API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_debugger_v2::client::Debugger2;
/// let client = Debugger2::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// The Debugger service provides the API that allows users to collect run-time
/// information from a running application, without stopping or slowing it down
/// and without modifying its state.  An application may include one or more
/// replicated processes performing the same work.
///
/// A debugged application is represented using the Debuggee concept. The
/// Debugger service provides a way to query for available debuggees, but does
/// not provide a way to create one.  A debuggee is created using the Controller
/// service, usually by running a debugger agent with the application.
///
/// The Debugger service enables the client to set one or more Breakpoints on a
/// Debuggee and collect the results of the set Breakpoints.
///
/// # Configuration
///
/// To configure `Debugger2` use the `with_*` methods in the type returned
/// by [builder()][Debugger2::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://clouddebugger.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::debugger2::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::debugger2::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Debugger2` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Debugger2` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Debugger2 {
    inner: std::sync::Arc<dyn super::stub::dynamic::Debugger2>,
}

#[cfg(feature = "debugger-2")]
impl Debugger2 {
    /// Returns a builder for [Debugger2].
    ///
    /// ```
    /// # use google_cloud_debugger_v2::client::Debugger2;
    /// # tokio_test::block_on(async {
    /// let client = Debugger2::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::debugger2::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::debugger2::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Debugger2 + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Debugger2>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Debugger2> {
        super::transport::Debugger2::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Debugger2> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Debugger2::new)
    }

    /// Sets the breakpoint to the debuggee.
    pub fn set_breakpoint(&self) -> super::builder::debugger2::SetBreakpoint {
        super::builder::debugger2::SetBreakpoint::new(self.inner.clone())
    }

    /// Gets breakpoint information.
    pub fn get_breakpoint(&self) -> super::builder::debugger2::GetBreakpoint {
        super::builder::debugger2::GetBreakpoint::new(self.inner.clone())
    }

    /// Deletes the breakpoint from the debuggee.
    pub fn delete_breakpoint(&self) -> super::builder::debugger2::DeleteBreakpoint {
        super::builder::debugger2::DeleteBreakpoint::new(self.inner.clone())
    }

    /// Lists all breakpoints for the debuggee.
    pub fn list_breakpoints(&self) -> super::builder::debugger2::ListBreakpoints {
        super::builder::debugger2::ListBreakpoints::new(self.inner.clone())
    }

    /// Lists all the debuggees that the user has access to.
    pub fn list_debuggees(&self) -> super::builder::debugger2::ListDebuggees {
        super::builder::debugger2::ListDebuggees::new(self.inner.clone())
    }
}
