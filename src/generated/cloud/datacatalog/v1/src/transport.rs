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

/// Implements [DataCatalog](super::stub::DataCatalog) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct DataCatalog {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for DataCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("DataCatalog")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DataCatalog {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DataCatalog for DataCatalog {
    async fn search_catalog(
        &self,
        req: crate::model::SearchCatalogRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SearchCatalogResponse>> {
        let path = "/v1/catalog:search".to_string();
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

    async fn create_entry_group(
        &self,
        req: crate::model::CreateEntryGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EntryGroup>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/entryGroups",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*"),
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
        let builder = builder.query(&[("entryGroupId", &req.entry_group_id)]);
        self.inner
            .execute(builder, req.entry_group, options)
            .await
    }

    async fn get_entry_group(
        &self,
        req: crate::model::GetEntryGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EntryGroup>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        let builder = req
            .read_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("readMask", v)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_entry_group(
        &self,
        req: crate::model::UpdateEntryGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EntryGroup>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    (
                        "entry_group.name",
                        req.entry_group.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/entryGroups/*",
                    ),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .update_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("updateMask", v)]));
        self.inner
            .execute(builder, req.entry_group, options)
            .await
    }

    async fn delete_entry_group(
        &self,
        req: crate::model::DeleteEntryGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        let builder = builder.query(&[("force", &req.force)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn list_entry_groups(
        &self,
        req: crate::model::ListEntryGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListEntryGroupsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/entryGroups",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*"),
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
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_entry(
        &self,
        req: crate::model::CreateEntryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Entry>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/entries",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        let builder = builder.query(&[("entryId", &req.entry_id)]);
        self.inner
            .execute(builder, req.entry, options)
            .await
    }

    async fn update_entry(
        &self,
        req: crate::model::UpdateEntryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Entry>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    (
                        "entry.name",
                        req.entry.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/entryGroups/*/entries/*",
                    ),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .update_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("updateMask", v)]));
        self.inner
            .execute(builder, req.entry, options)
            .await
    }

    async fn delete_entry(
        &self,
        req: crate::model::DeleteEntryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/entryGroups/*/entries/*"),
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
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn get_entry(
        &self,
        req: crate::model::GetEntryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Entry>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/entryGroups/*/entries/*"),
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
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn lookup_entry(
        &self,
        req: crate::model::LookupEntryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Entry>> {
        let path = "/v1/entries:lookup".to_string();
        let options = gax::options::internal::set_default_idempotency(options, true);
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .linked_resource()
            .iter()
            .fold(builder, |builder, p| builder.query(&[("linkedResource", p)]));
        let builder = req
            .sql_resource()
            .iter()
            .fold(builder, |builder, p| builder.query(&[("sqlResource", p)]));
        let builder = req
            .fully_qualified_name()
            .iter()
            .fold(builder, |builder, p| builder.query(&[("fullyQualifiedName", p)]));
        let builder = builder.query(&[("project", &req.project)]);
        let builder = builder.query(&[("location", &req.location)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_entries(
        &self,
        req: crate::model::ListEntriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListEntriesResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/entries",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        let builder = req
            .read_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("readMask", v)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_tag_template(
        &self,
        req: crate::model::CreateTagTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagTemplate>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/tagTemplates",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*"),
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
        let builder = builder.query(&[("tagTemplateId", &req.tag_template_id)]);
        self.inner
            .execute(builder, req.tag_template, options)
            .await
    }

    async fn get_tag_template(
        &self,
        req: crate::model::GetTagTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagTemplate>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/tagTemplates/*"),
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
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_tag_template(
        &self,
        req: crate::model::UpdateTagTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagTemplate>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    (
                        "tag_template.name",
                        req.tag_template.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/tagTemplates/*",
                    ),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .update_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("updateMask", v)]));
        self.inner
            .execute(builder, req.tag_template, options)
            .await
    }

    async fn delete_tag_template(
        &self,
        req: crate::model::DeleteTagTemplateRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/tagTemplates/*"),
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
        let builder = builder.query(&[("force", &req.force)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn create_tag_template_field(
        &self,
        req: crate::model::CreateTagTemplateFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagTemplateField>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/fields",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/tagTemplates/*"),
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
        let builder = builder.query(&[("tagTemplateFieldId", &req.tag_template_field_id)]);
        self.inner
            .execute(builder, req.tag_template_field, options)
            .await
    }

    async fn update_tag_template_field(
        &self,
        req: crate::model::UpdateTagTemplateFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagTemplateField>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/tagTemplates/*/fields/*"),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .update_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("updateMask", v)]));
        self.inner
            .execute(builder, req.tag_template_field, options)
            .await
    }

    async fn rename_tag_template_field(
        &self,
        req: crate::model::RenameTagTemplateFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TagTemplateField>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}:rename",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/tagTemplates/*/fields/*"),
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
        self.inner
            .execute(builder, Some(req), options)
            .await
    }

    async fn delete_tag_template_field(
        &self,
        req: crate::model::DeleteTagTemplateFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/tagTemplates/*/fields/*"),
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
        let builder = builder.query(&[("force", &req.force)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn create_tag(
        &self,
        req: crate::model::CreateTagRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Tag>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/tags",
                &[
                    (
                        "parent",
                        req.parent.as_str(),
                        "projects/*/locations/*/entryGroups/*/entries/*",
                    ),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}/tags",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        self.inner
            .execute(builder, req.tag, options)
            .await
    }

    async fn update_tag(
        &self,
        req: crate::model::UpdateTagRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Tag>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    (
                        "tag.name",
                        req.tag.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/entryGroups/*/entries/*/tags/*",
                    ),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}",
                &[
                    (
                        "tag.name",
                        req.tag.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/entryGroups/*/tags/*",
                    ),
                ],
            ),
        ])?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .query(&[("$alt", "json;enum-encoding=int")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .update_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("updateMask", v)]));
        self.inner
            .execute(builder, req.tag, options)
            .await
    }

    async fn delete_tag(
        &self,
        req: crate::model::DeleteTagRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    (
                        "name",
                        req.name.as_str(),
                        "projects/*/locations/*/entryGroups/*/entries/*/tags/*",
                    ),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/entryGroups/*/tags/*"),
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
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    async fn list_tags(
        &self,
        req: crate::model::ListTagsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTagsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/tags",
                &[
                    (
                        "parent",
                        req.parent.as_str(),
                        "projects/*/locations/*/entryGroups/*/entries/*",
                    ),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}/tags",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_iam_policy(
        &self,
        req: iam_v1::model::SetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<iam_v1::model::Policy>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}:setIamPolicy",
                &[
                    ("resource", req.resource.as_str(), "projects/*/locations/*/tagTemplates/*"),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}:setIamPolicy",
                &[
                    ("resource", req.resource.as_str(), "projects/*/locations/*/entryGroups/*"),
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
        self.inner
            .execute(builder, Some(req), options)
            .await
    }

    async fn get_iam_policy(
        &self,
        req: iam_v1::model::GetIamPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<iam_v1::model::Policy>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}:getIamPolicy",
                &[
                    ("resource", req.resource.as_str(), "projects/*/locations/*/tagTemplates/*"),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}:getIamPolicy",
                &[
                    ("resource", req.resource.as_str(), "projects/*/locations/*/entryGroups/*"),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}:getIamPolicy",
                &[
                    (
                        "resource",
                        req.resource.as_str(),
                        "projects/*/locations/*/entryGroups/*/entries/*",
                    ),
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
        self.inner
            .execute(builder, Some(req), options)
            .await
    }

    async fn test_iam_permissions(
        &self,
        req: iam_v1::model::TestIamPermissionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<iam_v1::model::TestIamPermissionsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}:testIamPermissions",
                &[
                    ("resource", req.resource.as_str(), "projects/*/locations/*/tagTemplates/*"),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}:testIamPermissions",
                &[
                    ("resource", req.resource.as_str(), "projects/*/locations/*/entryGroups/*"),
                ],
            ),
            path_template::binding::bind(
                "/v1/{}:testIamPermissions",
                &[
                    (
                        "resource",
                        req.resource.as_str(),
                        "projects/*/locations/*/entryGroups/*/entries/*",
                    ),
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
        self.inner
            .execute(builder, Some(req), options)
            .await
    }
}
