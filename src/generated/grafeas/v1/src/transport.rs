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

/// Implements [Grafeas](super::stub::Grafeas) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Grafeas {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for Grafeas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Grafeas")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Grafeas {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::Grafeas for Grafeas {
    async fn get_occurrence(
        &self,
        req: crate::model::GetOccurrenceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Occurrence>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/occurrences/*"),
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

    async fn list_occurrences(
        &self,
        req: crate::model::ListOccurrencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListOccurrencesResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/occurrences",
                &[
                    ("parent", req.parent.as_str(), "projects/*"),
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
        let builder = builder.query(&[("filter", &req.filter)]);
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_occurrence(
        &self,
        req: crate::model::DeleteOccurrenceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/occurrences/*"),
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

    async fn create_occurrence(
        &self,
        req: crate::model::CreateOccurrenceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Occurrence>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/occurrences",
                &[
                    ("parent", req.parent.as_str(), "projects/*"),
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
            .execute(builder, req.occurrence, options)
            .await
    }

    async fn batch_create_occurrences(
        &self,
        req: crate::model::BatchCreateOccurrencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BatchCreateOccurrencesResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/occurrences:batchCreate",
                &[
                    ("parent", req.parent.as_str(), "projects/*"),
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

    async fn update_occurrence(
        &self,
        req: crate::model::UpdateOccurrenceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Occurrence>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/occurrences/*"),
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
            .execute(builder, req.occurrence, options)
            .await
    }

    async fn get_occurrence_note(
        &self,
        req: crate::model::GetOccurrenceNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Note>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/notes",
                &[
                    ("name", req.name.as_str(), "projects/*/occurrences/*"),
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

    async fn get_note(
        &self,
        req: crate::model::GetNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Note>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/notes/*"),
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

    async fn list_notes(
        &self,
        req: crate::model::ListNotesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListNotesResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/notes",
                &[
                    ("parent", req.parent.as_str(), "projects/*"),
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
        let builder = builder.query(&[("filter", &req.filter)]);
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_note(
        &self,
        req: crate::model::DeleteNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/notes/*"),
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

    async fn create_note(
        &self,
        req: crate::model::CreateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Note>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/notes",
                &[
                    ("parent", req.parent.as_str(), "projects/*"),
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
        let builder = builder.query(&[("noteId", &req.note_id)]);
        self.inner
            .execute(builder, req.note, options)
            .await
    }

    async fn batch_create_notes(
        &self,
        req: crate::model::BatchCreateNotesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BatchCreateNotesResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/notes:batchCreate",
                &[
                    ("parent", req.parent.as_str(), "projects/*"),
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

    async fn update_note(
        &self,
        req: crate::model::UpdateNoteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Note>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/notes/*"),
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
            .execute(builder, req.note, options)
            .await
    }

    async fn list_note_occurrences(
        &self,
        req: crate::model::ListNoteOccurrencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListNoteOccurrencesResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v1/{}/occurrences",
                &[
                    ("name", req.name.as_str(), "projects/*/notes/*"),
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
        let builder = builder.query(&[("filter", &req.filter)]);
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
