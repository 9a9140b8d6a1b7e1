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

/// Implements a client for the Container Analysis API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_grafeas_v1::client::Grafeas;
/// let client = Grafeas::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// [Grafeas](https://grafeas.io) API.
///
/// Retrieves analysis results of Cloud components such as Docker container
/// images.
///
/// Analysis results are stored as a series of occurrences. An `Occurrence`
/// contains information about a specific analysis instance on a resource. An
/// occurrence refers to a `Note`. A note contains details describing the
/// analysis and is generally stored in a separate project, called a `Provider`.
/// Multiple occurrences can refer to the same note.
///
/// For example, an SSL vulnerability could affect multiple images. In this
/// case, there would be one note for the vulnerability and an occurrence for
/// each image with the vulnerability referring to that note.
///
/// # Configuration
///
/// To configure `Grafeas` use the `with_*` methods in the type returned
/// by [builder()][Grafeas::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://containeranalysis.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::grafeas::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::grafeas::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Grafeas` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Grafeas` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Grafeas {
    inner: std::sync::Arc<dyn super::stub::dynamic::Grafeas>,
}

impl Grafeas {
    /// Returns a builder for [Grafeas].
    ///
    /// ```
    /// # use google_cloud_grafeas_v1::client::Grafeas;
    /// # tokio_test::block_on(async {
    /// let client = Grafeas::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::grafeas::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::grafeas::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Grafeas + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Grafeas>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Grafeas> {
        super::transport::Grafeas::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Grafeas> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Grafeas::new)
    }

    /// Gets the specified occurrence.
    pub fn get_occurrence(&self) -> super::builder::grafeas::GetOccurrence {
        super::builder::grafeas::GetOccurrence::new(self.inner.clone())
    }

    /// Lists occurrences for the specified project.
    pub fn list_occurrences(&self) -> super::builder::grafeas::ListOccurrences {
        super::builder::grafeas::ListOccurrences::new(self.inner.clone())
    }

    /// Deletes the specified occurrence. For example, use this method to delete an
    /// occurrence when the occurrence is no longer applicable for the given
    /// resource.
    pub fn delete_occurrence(&self) -> super::builder::grafeas::DeleteOccurrence {
        super::builder::grafeas::DeleteOccurrence::new(self.inner.clone())
    }

    /// Creates a new occurrence.
    pub fn create_occurrence(&self) -> super::builder::grafeas::CreateOccurrence {
        super::builder::grafeas::CreateOccurrence::new(self.inner.clone())
    }

    /// Creates new occurrences in batch.
    pub fn batch_create_occurrences(&self) -> super::builder::grafeas::BatchCreateOccurrences {
        super::builder::grafeas::BatchCreateOccurrences::new(self.inner.clone())
    }

    /// Updates the specified occurrence.
    pub fn update_occurrence(&self) -> super::builder::grafeas::UpdateOccurrence {
        super::builder::grafeas::UpdateOccurrence::new(self.inner.clone())
    }

    /// Gets the note attached to the specified occurrence. Consumer projects can
    /// use this method to get a note that belongs to a provider project.
    pub fn get_occurrence_note(&self) -> super::builder::grafeas::GetOccurrenceNote {
        super::builder::grafeas::GetOccurrenceNote::new(self.inner.clone())
    }

    /// Gets the specified note.
    pub fn get_note(&self) -> super::builder::grafeas::GetNote {
        super::builder::grafeas::GetNote::new(self.inner.clone())
    }

    /// Lists notes for the specified project.
    pub fn list_notes(&self) -> super::builder::grafeas::ListNotes {
        super::builder::grafeas::ListNotes::new(self.inner.clone())
    }

    /// Deletes the specified note.
    pub fn delete_note(&self) -> super::builder::grafeas::DeleteNote {
        super::builder::grafeas::DeleteNote::new(self.inner.clone())
    }

    /// Creates a new note.
    pub fn create_note(&self) -> super::builder::grafeas::CreateNote {
        super::builder::grafeas::CreateNote::new(self.inner.clone())
    }

    /// Creates new notes in batch.
    pub fn batch_create_notes(&self) -> super::builder::grafeas::BatchCreateNotes {
        super::builder::grafeas::BatchCreateNotes::new(self.inner.clone())
    }

    /// Updates the specified note.
    pub fn update_note(&self) -> super::builder::grafeas::UpdateNote {
        super::builder::grafeas::UpdateNote::new(self.inner.clone())
    }

    /// Lists occurrences referencing the specified note. Provider projects can use
    /// this method to get all occurrences across consumer projects referencing the
    /// specified note.
    pub fn list_note_occurrences(&self) -> super::builder::grafeas::ListNoteOccurrences {
        super::builder::grafeas::ListNoteOccurrences::new(self.inner.clone())
    }
}
