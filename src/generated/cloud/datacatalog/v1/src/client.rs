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

/// Implements a client for the Google Cloud Data Catalog API.
///
/// # Example
/// ```
/// # async fn sample() -> gax::client_builder::Result<()> {
/// # use google_cloud_datacatalog_v1::client::DataCatalog;
/// let client = DataCatalog::builder().build().await?;
/// // use `client` to make requests to the service.
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Data Catalog API service allows you to discover, understand, and manage your
/// data.
///
/// # Configuration
///
/// To configure `DataCatalog` use the `with_*` methods in the type returned
/// by [builder()][DataCatalog::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://datacatalog.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
///
/// [with_endpoint()]: super::builder::data_catalog::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::data_catalog::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `DataCatalog` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `DataCatalog` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DataCatalog {
    inner: std::sync::Arc<dyn super::stub::dynamic::DataCatalog>,
}

impl DataCatalog {
    /// Returns a builder for [DataCatalog].
    ///
    /// ```
    /// # use google_cloud_datacatalog_v1::client::DataCatalog;
    /// # tokio_test::block_on(async {
    /// let client = DataCatalog::builder().build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::data_catalog::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::data_catalog::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DataCatalog + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::DataCatalog>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DataCatalog> {
        super::transport::DataCatalog::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DataCatalog> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DataCatalog::new)
    }

    /// Searches Data Catalog for multiple resources like entries and tags that
    /// match a query.
    ///
    /// This is a [Custom Method]
    /// (https://cloud.google.com/apis/design/custom_methods) that doesn't return
    /// all information on a resource, only its ID and high level fields. To get
    /// more information, you can subsequently call specific get methods.
    ///
    /// Note: Data Catalog search queries don't guarantee full recall. Results that
    /// match your query might not be returned, even in subsequent result pages.
    /// Additionally, returned (and not returned) results can vary if you repeat
    /// search queries.
    pub fn search_catalog(&self) -> super::builder::data_catalog::SearchCatalog {
        super::builder::data_catalog::SearchCatalog::new(self.inner.clone())
    }

    /// Creates an entry group.
    ///
    /// An entry group contains logically related entries together with [Cloud
    /// Identity and Access Management](/data-catalog/docs/concepts/iam) policies.
    /// These policies specify users who can create, edit, and view entries within
    /// entry groups.
    ///
    /// Data Catalog automatically creates entry groups with names that start with
    /// the `@` symbol for the following resources:
    ///
    /// * BigQuery entries (`@bigquery`)
    /// * Pub/Sub topics (`@pubsub`)
    /// * Dataproc Metastore services (`@dataproc_metastore_{SERVICE_NAME_HASH}`)
    ///
    /// You can create your own entry groups for Cloud Storage fileset entries and
    /// custom entries together with the corresponding IAM policies. User-created
    /// entry groups can't contain the `@` symbol, it is reserved for automatically
    /// created groups.
    ///
    /// Entry groups, like entries, can be searched.
    pub fn create_entry_group(&self) -> super::builder::data_catalog::CreateEntryGroup {
        super::builder::data_catalog::CreateEntryGroup::new(self.inner.clone())
    }

    /// Gets an entry group.
    pub fn get_entry_group(&self) -> super::builder::data_catalog::GetEntryGroup {
        super::builder::data_catalog::GetEntryGroup::new(self.inner.clone())
    }

    /// Updates an entry group.
    ///
    /// You must enable the Data Catalog API in the project identified by the
    /// `entry_group.name` parameter. For more information, see [Data Catalog
    /// resource project](https://cloud.google.com/data-
    /// catalog/docs/concepts/resource-project).
    pub fn update_entry_group(&self) -> super::builder::data_catalog::UpdateEntryGroup {
        super::builder::data_catalog::UpdateEntryGroup::new(self.inner.clone())
    }

    /// Deletes an entry group.
    ///
    /// You must enable the Data Catalog API in the project identified by the `name`
    /// parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn delete_entry_group(&self) -> super::builder::data_catalog::DeleteEntryGroup {
        super::builder::data_catalog::DeleteEntryGroup::new(self.inner.clone())
    }

    /// Lists entry groups.
    pub fn list_entry_groups(&self) -> super::builder::data_catalog::ListEntryGroups {
        super::builder::data_catalog::ListEntryGroups::new(self.inner.clone())
    }

    /// Creates an entry.
    ///
    /// You can create entries only with 'FILESET', 'CLUSTER', 'DATA_STREAM', or
    /// custom types. Data Catalog automatically creates entries with other types
    /// during metadata ingestion from integrated systems.
    ///
    /// You must enable the Data Catalog API in the project identified by the
    /// `parent` parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    ///
    /// An entry group can have a maximum of 100,000 entries.
    pub fn create_entry(&self) -> super::builder::data_catalog::CreateEntry {
        super::builder::data_catalog::CreateEntry::new(self.inner.clone())
    }

    /// Updates an existing entry.
    ///
    /// You must enable the Data Catalog API in the project identified by the
    /// `entry.name` parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn update_entry(&self) -> super::builder::data_catalog::UpdateEntry {
        super::builder::data_catalog::UpdateEntry::new(self.inner.clone())
    }

    /// Deletes an existing entry.
    ///
    /// You can delete only the entries created by the
    /// [CreateEntry][google.cloud.datacatalog.v1.DataCatalog.CreateEntry] method.
    ///
    /// You must enable the Data Catalog API in the project identified by the `name`
    /// parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn delete_entry(&self) -> super::builder::data_catalog::DeleteEntry {
        super::builder::data_catalog::DeleteEntry::new(self.inner.clone())
    }

    /// Gets an entry.
    pub fn get_entry(&self) -> super::builder::data_catalog::GetEntry {
        super::builder::data_catalog::GetEntry::new(self.inner.clone())
    }

    /// Gets an entry by its target resource name.
    ///
    /// The resource name comes from the source Google Cloud Platform service.
    pub fn lookup_entry(&self) -> super::builder::data_catalog::LookupEntry {
        super::builder::data_catalog::LookupEntry::new(self.inner.clone())
    }

    /// Lists entries.
    ///
    /// Note: Currently, this method can list only custom entries. To get a list of
    /// both custom and automatically created entries, use
    /// [SearchCatalog][google.cloud.datacatalog.v1.DataCatalog.SearchCatalog].
    pub fn list_entries(&self) -> super::builder::data_catalog::ListEntries {
        super::builder::data_catalog::ListEntries::new(self.inner.clone())
    }

    /// Creates a tag template.
    ///
    /// You must enable the Data Catalog API in the project identified by the
    /// `parent` parameter. For more information, see [Data Catalog resource
    /// project] (https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn create_tag_template(&self) -> super::builder::data_catalog::CreateTagTemplate {
        super::builder::data_catalog::CreateTagTemplate::new(self.inner.clone())
    }

    /// Gets a tag template.
    pub fn get_tag_template(&self) -> super::builder::data_catalog::GetTagTemplate {
        super::builder::data_catalog::GetTagTemplate::new(self.inner.clone())
    }

    /// Updates a tag template.
    ///
    /// You can't update template fields with this method. These fields are separate
    /// resources with their own create, update, and delete methods.
    ///
    /// You must enable the Data Catalog API in the project identified by the
    /// `tag_template.name` parameter. For more information, see [Data Catalog
    /// resource project](https://cloud.google.com/data-
    /// catalog/docs/concepts/resource-project).
    pub fn update_tag_template(&self) -> super::builder::data_catalog::UpdateTagTemplate {
        super::builder::data_catalog::UpdateTagTemplate::new(self.inner.clone())
    }

    /// Deletes a tag template and all tags that use it.
    ///
    /// You must enable the Data Catalog API in the project identified by the `name`
    /// parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn delete_tag_template(&self) -> super::builder::data_catalog::DeleteTagTemplate {
        super::builder::data_catalog::DeleteTagTemplate::new(self.inner.clone())
    }

    /// Creates a field in a tag template.
    ///
    /// You must enable the Data Catalog API in the project identified by the
    /// `parent` parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn create_tag_template_field(&self) -> super::builder::data_catalog::CreateTagTemplateField {
        super::builder::data_catalog::CreateTagTemplateField::new(self.inner.clone())
    }

    /// Updates a field in a tag template.
    ///
    /// You can't update the field type with this method.
    ///
    /// You must enable the Data Catalog API in the project identified by the `name`
    /// parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn update_tag_template_field(&self) -> super::builder::data_catalog::UpdateTagTemplateField {
        super::builder::data_catalog::UpdateTagTemplateField::new(self.inner.clone())
    }

    /// Renames a field in a tag template.
    ///
    /// You must enable the Data Catalog API in the project identified by the `name`
    /// parameter. For more information, see [Data Catalog resource project]
    /// (https://cloud.google.com/data-catalog/docs/concepts/resource-project).
    pub fn rename_tag_template_field(&self) -> super::builder::data_catalog::RenameTagTemplateField {
        super::builder::data_catalog::RenameTagTemplateField::new(self.inner.clone())
    }

    /// Deletes a field in a tag template and all uses of this field from the tags
    /// based on this template.
    ///
    /// You must enable the Data Catalog API in the project identified by the `name`
    /// parameter. For more information, see [Data Catalog resource
    /// project](https://cloud.google.com/data-catalog/docs/concepts/resource-
    /// project).
    pub fn delete_tag_template_field(&self) -> super::builder::data_catalog::DeleteTagTemplateField {
        super::builder::data_catalog::DeleteTagTemplateField::new(self.inner.clone())
    }

    /// Creates a tag and assigns it to:
    ///
    /// * An [Entry][google.cloud.datacatalog.v1.Entry] if the method name is
    ///   `projects.locations.entryGroups.entries.tags.create`.
    /// * Or [EntryGroup][google.cloud.datacatalog.v1.EntryGroup]if the method
    ///   name is `projects.locations.entryGroups.tags.create`.
    ///
    /// Note: The project identified by the `parent` parameter for the [tag]
    /// (https://cloud.google.com/data-catalog/docs/reference/rest/v1/projects.locat
    /// ions.entryGroups.entries.tags/create#path-parameters) and the [tag template]
    /// (https://cloud.google.com/data-
    /// catalog/docs/reference/rest/v1/projects.locations.tagTemplates/create#path-
    /// parameters) used to create the tag must be in the same organization.
    pub fn create_tag(&self) -> super::builder::data_catalog::CreateTag {
        super::builder::data_catalog::CreateTag::new(self.inner.clone())
    }

    /// Updates an existing tag.
    pub fn update_tag(&self) -> super::builder::data_catalog::UpdateTag {
        super::builder::data_catalog::UpdateTag::new(self.inner.clone())
    }

    /// Deletes a tag.
    pub fn delete_tag(&self) -> super::builder::data_catalog::DeleteTag {
        super::builder::data_catalog::DeleteTag::new(self.inner.clone())
    }

    /// Lists tags assigned to an [Entry][google.cloud.datacatalog.v1.Entry]. The
    /// [columns][google.cloud.datacatalog.v1.Tag.column] in the response are
    /// lowercased.
    pub fn list_tags(&self) -> super::builder::data_catalog::ListTags {
        super::builder::data_catalog::ListTags::new(self.inner.clone())
    }

    /// Sets an access control policy for a resource. Replaces any existing policy.
    ///
    /// Supported resources are:
    ///
    /// - Tag templates
    /// - Entry groups
    ///
    /// Note: This method sets policies only within Data Catalog and can't be used
    /// to manage policies in BigQuery, Pub/Sub, Dataproc Metastore, and any
    /// external Google Cloud Platform resources synced with the Data Catalog.
    pub fn set_iam_policy(&self) -> super::builder::data_catalog::SetIamPolicy {
        super::builder::data_catalog::SetIamPolicy::new(self.inner.clone())
    }

    /// Gets the access control policy for a resource.
    ///
    /// May return:
    ///
    /// * A`NOT_FOUND` error if the resource doesn't exist or you don't have the
    ///   permission to view it.
    /// * An empty policy if the resource exists but doesn't have a set policy.
    ///
    /// Supported resources are:
    ///
    /// - Tag templates
    /// - Entry groups
    ///
    /// Note: This method doesn't get policies from Google Cloud Platform resources
    /// ingested into Data Catalog.
    pub fn get_iam_policy(&self) -> super::builder::data_catalog::GetIamPolicy {
        super::builder::data_catalog::GetIamPolicy::new(self.inner.clone())
    }

    /// Gets your permissions on a resource.
    ///
    /// Returns an empty set of permissions if the resource doesn't exist.
    ///
    /// Supported resources are:
    ///
    /// - Tag templates
    /// - Entry groups
    ///
    /// Note: This method gets policies only within Data Catalog and can't be used
    /// to get policies from BigQuery, Pub/Sub, Dataproc Metastore, and any external
    /// Google Cloud Platform resources ingested into Data Catalog.
    ///
    /// No Google IAM permissions are required to call this method.
    pub fn test_iam_permissions(&self) -> super::builder::data_catalog::TestIamPermissions {
        super::builder::data_catalog::TestIamPermissions::new(self.inner.clone())
    }
}
