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

#[cfg(feature = "auto-ml")]
/// Implements a client for the Cloud AutoML API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_automl_v1::client::AutoMl;
/// let client = AutoMl::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// AutoML Server API.
///
/// The resource names are assigned by the server. The server never reuses names
/// that it has created after the resources with those names are deleted.
///
/// An ID of a resource is the last element of the item's resource name. For
/// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}`, then
/// the id for the item is `{dataset_id}`.
///
/// Currently the only supported `location_id` is "us-central1".
///
/// On any input that is documented to expect a string parameter in snake_case
/// or dash-case, either of those cases is accepted.
///
/// # Configuration
///
/// To configure `AutoMl` use the `with_*` methods in the type returned
/// by [builder()][AutoMl::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://automl.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::auto_ml::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::auto_ml::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `AutoMl` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `AutoMl` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct AutoMl {
    inner: std::sync::Arc<dyn super::stub::dynamic::AutoMl>,
}

#[cfg(feature = "auto-ml")]
impl AutoMl {
    /// Returns a builder for [AutoMl].
    ///
    /// ```
    /// # use google_cloud_automl_v1::client::AutoMl;
    /// # tokio_test::block_on(async {
    /// let client = AutoMl::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::auto_ml::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::auto_ml::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::AutoMl + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::AutoMl>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AutoMl> {
        super::transport::AutoMl::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AutoMl> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::AutoMl::new)
    }

    /// Gets a dataset.
    pub fn get_dataset(&self) -> super::builder::auto_ml::GetDataset {
        super::builder::auto_ml::GetDataset::new(self.inner.clone())
    }

    /// Lists datasets in a project.
    pub fn list_datasets(&self) -> super::builder::auto_ml::ListDatasets {
        super::builder::auto_ml::ListDatasets::new(self.inner.clone())
    }

    /// Deletes a dataset and all of its contents. Returns empty response in the
    /// [response][google.longrunning.Operation.response] field when it completes,
    /// and `delete_details` in the
    /// [metadata][google.longrunning.Operation.metadata] field.
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
    pub fn delete_dataset(&self) -> super::builder::auto_ml::DeleteDataset {
        super::builder::auto_ml::DeleteDataset::new(self.inner.clone())
    }

    /// Gets a model.
    pub fn get_model(&self) -> super::builder::auto_ml::GetModel {
        super::builder::auto_ml::GetModel::new(self.inner.clone())
    }

    /// Lists models.
    pub fn list_models(&self) -> super::builder::auto_ml::ListModels {
        super::builder::auto_ml::ListModels::new(self.inner.clone())
    }

    /// Deletes a model. Returns `google.protobuf.Empty` in the
    /// [response][google.longrunning.Operation.response] field when it completes,
    /// and `delete_details` in the
    /// [metadata][google.longrunning.Operation.metadata] field.
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
    pub fn delete_model(&self) -> super::builder::auto_ml::DeleteModel {
        super::builder::auto_ml::DeleteModel::new(self.inner.clone())
    }

    /// Deploys a model. If a model is already deployed, deploying it with the same
    /// parameters has no effect. Deploying with different parametrs (as e.g.
    /// changing [node_number][google.cloud.automl.v1p1beta.ImageObjectDetectionMode
    /// lDeploymentMetadata.node_number]) will reset the deployment state without
    /// pausing the model's availability.
    ///
    /// Only applicable for Text Classification, Image Object Detection , Tables,
    /// and Image Segmentation; all other domains manage deployment automatically.
    ///
    /// Returns an empty response in the
    /// [response][google.longrunning.Operation.response] field when it completes.
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
    pub fn deploy_model(&self) -> super::builder::auto_ml::DeployModel {
        super::builder::auto_ml::DeployModel::new(self.inner.clone())
    }

    /// Undeploys a model. If the model is not deployed this method has no effect.
    ///
    /// Only applicable for Text Classification, Image Object Detection and Tables;
    /// all other domains manage deployment automatically.
    ///
    /// Returns an empty response in the
    /// [response][google.longrunning.Operation.response] field when it completes.
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
    pub fn undeploy_model(&self) -> super::builder::auto_ml::UndeployModel {
        super::builder::auto_ml::UndeployModel::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service
    /// functionality in this service.
    pub fn get_operation(&self) -> super::builder::auto_ml::GetOperation {
        super::builder::auto_ml::GetOperation::new(self.inner.clone())
    }
}

#[cfg(feature = "prediction-service")]
/// Implements a client for the Cloud AutoML API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_automl_v1::client::PredictionService;
/// let client = PredictionService::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// AutoML Prediction API.
///
/// On any input that is documented to expect a string parameter in snake_case
/// or dash-case, either of those cases is accepted.
///
/// # Configuration
///
/// To configure `PredictionService` use the `with_*` methods in the type returned
/// by [builder()][PredictionService::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://automl.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::prediction_service::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::prediction_service::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `PredictionService` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `PredictionService` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct PredictionService {
    inner: std::sync::Arc<dyn super::stub::dynamic::PredictionService>,
}

#[cfg(feature = "prediction-service")]
impl PredictionService {
    /// Returns a builder for [PredictionService].
    ///
    /// ```
    /// # use google_cloud_automl_v1::client::PredictionService;
    /// # tokio_test::block_on(async {
    /// let client = PredictionService::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::prediction_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::prediction_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::PredictionService + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::PredictionService>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::PredictionService> {
        super::transport::PredictionService::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::PredictionService> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::PredictionService::new)
    }

    /// Perform an online prediction. The prediction result is directly returned in
    /// the response. Available for following ML scenarios, and their expected
    /// request payloads:
    ///
    /// AutoML Vision Classification
    ///
    /// * An image in .JPEG, .GIF or .PNG format, image_bytes up to 30MB.
    ///
    /// AutoML Natural Language Classification
    ///
    /// * A TextSnippet up to 60,000 characters, UTF-8 encoded or a document in
    ///   .PDF, .TIF or .TIFF format with size upto 2MB.
    ///
    /// AutoML Natural Language Sentiment Analysis
    ///
    /// * A TextSnippet up to 60,000 characters, UTF-8 encoded or a document in
    ///   .PDF, .TIF or .TIFF format with size upto 2MB.
    ///
    /// AutoML Translation
    ///
    /// * A TextSnippet up to 25,000 characters, UTF-8 encoded.
    pub fn predict(&self) -> super::builder::prediction_service::Predict {
        super::builder::prediction_service::Predict::new(self.inner.clone())
    }

    /// Perform a batch prediction. Unlike the online
    /// [Predict][google.cloud.automl.v1.PredictionService.Predict], batch
    /// prediction result won't be immediately available in the response. Instead, a
    /// long running operation object is returned. User can poll the operation
    /// result via [GetOperation][google.longrunning.Operations.GetOperation]
    /// method. Once the operation is done,
    /// [BatchPredictResult][google.cloud.automl.v1.BatchPredictResult] is returned
    /// in the [response][google.longrunning.Operation.response] field.
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
    pub fn batch_predict(&self) -> super::builder::prediction_service::BatchPredict {
        super::builder::prediction_service::BatchPredict::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service
    /// functionality in this service.
    pub fn get_operation(&self) -> super::builder::prediction_service::GetOperation {
        super::builder::prediction_service::GetOperation::new(self.inner.clone())
    }
}
