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

#[cfg(feature = "intents")]
/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_dialogflow_v2::client::Intents;
/// let client = Intents::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for managing [Intents][google.cloud.dialogflow.v2.Intent].
///
/// # Configuration
///
/// To configure `Intents` use the `with_*` methods in the type returned
/// by [builder()][Intents::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::intents::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::intents::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Intents` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Intents` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Intents {
    inner: std::sync::Arc<dyn super::stub::dynamic::Intents>,
}

#[cfg(feature = "intents")]
impl Intents {
    /// Returns a builder for [Intents].
    ///
    /// ```
    /// # use google_cloud_dialogflow_v2::client::Intents;
    /// # tokio_test::block_on(async {
    /// let client = Intents::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::intents::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::intents::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Intents + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Intents>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Intents> {
        super::transport::Intents::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Intents> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Intents::new)
    }

    /// Returns the list of all intents in the specified agent.
    pub fn list_intents(&self) -> super::builder::intents::ListIntents {
        super::builder::intents::ListIntents::new(self.inner.clone())
    }

    /// Retrieves the specified intent.
    pub fn get_intent(&self) -> super::builder::intents::GetIntent {
        super::builder::intents::GetIntent::new(self.inner.clone())
    }

    /// Creates an intent in the specified agent.
    ///
    /// Note: You should always train an agent prior to sending it queries. See the
    /// [training
    /// documentation](https://cloud.google.com/dialogflow/es/docs/training).
    pub fn create_intent(&self) -> super::builder::intents::CreateIntent {
        super::builder::intents::CreateIntent::new(self.inner.clone())
    }

    /// Updates the specified intent.
    ///
    /// Note: You should always train an agent prior to sending it queries. See the
    /// [training
    /// documentation](https://cloud.google.com/dialogflow/es/docs/training).
    pub fn update_intent(&self) -> super::builder::intents::UpdateIntent {
        super::builder::intents::UpdateIntent::new(self.inner.clone())
    }

    /// Deletes the specified intent and its direct or indirect followup intents.
    ///
    /// Note: You should always train an agent prior to sending it queries. See the
    /// [training
    /// documentation](https://cloud.google.com/dialogflow/es/docs/training).
    pub fn delete_intent(&self) -> super::builder::intents::DeleteIntent {
        super::builder::intents::DeleteIntent::new(self.inner.clone())
    }

    /// Updates/Creates multiple intents in the specified agent.
    ///
    /// This method is a [long-running
    /// operation](https://cloud.google.com/dialogflow/es/docs/how/long-running-
    /// operations). The returned `Operation` type has the following method-specific
    /// fields:
    ///
    /// - `metadata`: An empty [Struct
    ///   message](https://developers.google.com/protocol-buffers/docs/reference/google.protobuf#struct)
    /// - `response`:
    ///   [BatchUpdateIntentsResponse][google.cloud.dialogflow.v2.BatchUpdateIntentsResponse]
    ///
    /// Note: You should always train an agent prior to sending it queries. See the
    /// [training
    /// documentation](https://cloud.google.com/dialogflow/es/docs/training).
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_update_intents(&self) -> super::builder::intents::BatchUpdateIntents {
        super::builder::intents::BatchUpdateIntents::new(self.inner.clone())
    }

    /// Deletes intents in the specified agent.
    ///
    /// This method is a [long-running
    /// operation](https://cloud.google.com/dialogflow/es/docs/how/long-running-
    /// operations). The returned `Operation` type has the following method-specific
    /// fields:
    ///
    /// - `metadata`: An empty [Struct
    ///   message](https://developers.google.com/protocol-buffers/docs/reference/google.protobuf#struct)
    /// - `response`: An [Empty
    ///   message](https://developers.google.com/protocol-buffers/docs/reference/google.protobuf#empty)
    ///
    /// Note: You should always train an agent prior to sending it queries. See the
    /// [training
    /// documentation](https://cloud.google.com/dialogflow/es/docs/training).
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_delete_intents(&self) -> super::builder::intents::BatchDeleteIntents {
        super::builder::intents::BatchDeleteIntents::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service
    /// functionality in this service.
    pub fn get_operation(&self) -> super::builder::intents::GetOperation {
        super::builder::intents::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service
    /// functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::intents::CancelOperation {
        super::builder::intents::CancelOperation::new(self.inner.clone())
    }
}

#[cfg(feature = "environments")]
/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_dialogflow_v2::client::Environments;
/// let client = Environments::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Service for managing [Environments][google.cloud.dialogflow.v2.Environment].
///
/// # Configuration
///
/// To configure `Environments` use the `with_*` methods in the type returned
/// by [builder()][Environments::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::environments::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::environments::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Environments` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Environments` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Environments {
    inner: std::sync::Arc<dyn super::stub::dynamic::Environments>,
}

#[cfg(feature = "environments")]
impl Environments {
    /// Returns a builder for [Environments].
    ///
    /// ```
    /// # use google_cloud_dialogflow_v2::client::Environments;
    /// # tokio_test::block_on(async {
    /// let client = Environments::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::environments::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::environments::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Environments + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Environments>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Environments> {
        super::transport::Environments::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Environments> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Environments::new)
    }

    /// Returns the list of all non-default environments of the specified agent.
    pub fn list_environments(&self) -> super::builder::environments::ListEnvironments {
        super::builder::environments::ListEnvironments::new(self.inner.clone())
    }

    /// Retrieves the specified agent environment.
    pub fn get_environment(&self) -> super::builder::environments::GetEnvironment {
        super::builder::environments::GetEnvironment::new(self.inner.clone())
    }

    /// Creates an agent environment.
    pub fn create_environment(&self) -> super::builder::environments::CreateEnvironment {
        super::builder::environments::CreateEnvironment::new(self.inner.clone())
    }

    /// Updates the specified agent environment.
    ///
    /// This method allows you to deploy new agent versions into the environment.
    /// When an environment is pointed to a new agent version by setting
    /// `environment.agent_version`, the environment is temporarily set to the
    /// `LOADING` state. During that time, the environment continues serving the
    /// previous version of the agent. After the new agent version is done loading,
    /// the environment is set back to the `RUNNING` state. You can use "-" as
    /// Environment ID in environment name to update an agent version in the default
    /// environment. WARNING: this will negate all recent changes to the draft agent
    /// and can't be undone. You may want to save the draft agent to a version
    /// before calling this method.
    pub fn update_environment(&self) -> super::builder::environments::UpdateEnvironment {
        super::builder::environments::UpdateEnvironment::new(self.inner.clone())
    }

    /// Deletes the specified agent environment.
    pub fn delete_environment(&self) -> super::builder::environments::DeleteEnvironment {
        super::builder::environments::DeleteEnvironment::new(self.inner.clone())
    }

    /// Gets the history of the specified environment.
    pub fn get_environment_history(&self) -> super::builder::environments::GetEnvironmentHistory {
        super::builder::environments::GetEnvironmentHistory::new(self.inner.clone())
    }
}
