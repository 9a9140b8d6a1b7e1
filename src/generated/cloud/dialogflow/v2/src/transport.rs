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

#[cfg(feature = "intents")]
/// Implements [Intents](super::stub::Intents) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Intents {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "intents")]
impl std::fmt::Debug for Intents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Intents")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "intents")]
impl Intents {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "intents")]
impl super::stub::Intents for Intents {
    async fn list_intents(
        &self,
        req: crate::model::ListIntentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListIntentsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/intents",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/intents",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/intents",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent/environments/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/intents",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent/environments/*"),
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
        let builder = builder.query(&[("languageCode", &req.language_code)]);
        let builder = builder.query(&[("intentView", &req.intent_view)]);
        let builder = builder.query(&[("pageSize", &req.page_size)]);
        let builder = builder.query(&[("pageToken", &req.page_token)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_intent(
        &self,
        req: crate::model::GetIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Intent>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/agent/intents/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/agent/intents/*"),
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
        let builder = builder.query(&[("languageCode", &req.language_code)]);
        let builder = builder.query(&[("intentView", &req.intent_view)]);
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_intent(
        &self,
        req: crate::model::CreateIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Intent>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/intents",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/intents",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent"),
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
        let builder = builder.query(&[("languageCode", &req.language_code)]);
        let builder = builder.query(&[("intentView", &req.intent_view)]);
        self.inner
            .execute(builder, req.intent, options)
            .await
    }

    async fn update_intent(
        &self,
        req: crate::model::UpdateIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Intent>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    (
                        "intent.name",
                        req.intent.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/agent/intents/*",
                    ),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    (
                        "intent.name",
                        req.intent.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/agent/intents/*",
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
        let builder = builder.query(&[("languageCode", &req.language_code)]);
        let builder = req
            .update_mask
            .as_ref()
            .map(|m| m.paths.join(","))
            .into_iter()
            .fold(builder, |builder, v| builder.query(&[("updateMask", v)]));
        let builder = builder.query(&[("intentView", &req.intent_view)]);
        self.inner
            .execute(builder, req.intent, options)
            .await
    }

    async fn delete_intent(
        &self,
        req: crate::model::DeleteIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/agent/intents/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/agent/intents/*"),
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

    async fn batch_update_intents(
        &self,
        req: crate::model::BatchUpdateIntentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/intents:batchUpdate",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/intents:batchUpdate",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent"),
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

    async fn batch_delete_intents(
        &self,
        req: crate::model::BatchDeleteIntentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/intents:batchDelete",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/intents:batchDelete",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent"),
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

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/operations/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/operations/*"),
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

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}:cancel",
                &[
                    ("name", req.name.as_str(), "projects/*/operations/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}:cancel",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/operations/*"),
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
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
            .map(|r: gax::response::Response<wkt::Empty>| {
                let (parts, _) = r.into_parts();
                gax::response::Response::from_parts(parts, ())
            })
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

#[cfg(feature = "environments")]
/// Implements [Environments](super::stub::Environments) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Environments {
    inner: gaxi::http::ReqwestClient,
}

#[cfg(feature = "environments")]
impl std::fmt::Debug for Environments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Environments")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(feature = "environments")]
impl Environments {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "environments")]
impl super::stub::Environments for Environments {
    async fn list_environments(
        &self,
        req: crate::model::ListEnvironmentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListEnvironmentsResponse>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/environments",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/environments",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent"),
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

    async fn get_environment(
        &self,
        req: crate::model::GetEnvironmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Environment>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/agent/environments/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/agent/environments/*"),
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

    async fn create_environment(
        &self,
        req: crate::model::CreateEnvironmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Environment>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/environments",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/environments",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent"),
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
        let builder = builder.query(&[("environmentId", &req.environment_id)]);
        self.inner
            .execute(builder, req.environment, options)
            .await
    }

    async fn update_environment(
        &self,
        req: crate::model::UpdateEnvironmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Environment>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    (
                        "environment.name",
                        req.environment.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/agent/environments/*",
                    ),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    (
                        "environment.name",
                        req.environment.as_ref().map(|m| m.name.as_str()).unwrap_or_default(),
                        "projects/*/locations/*/agent/environments/*",
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
        let builder = builder.query(&[("allowLoadToDraftAndDiscardChanges", &req.allow_load_to_draft_and_discard_changes)]);
        self.inner
            .execute(builder, req.environment, options)
            .await
    }

    async fn delete_environment(
        &self,
        req: crate::model::DeleteEnvironmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/agent/environments/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}",
                &[
                    ("name", req.name.as_str(), "projects/*/locations/*/agent/environments/*"),
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

    async fn get_environment_history(
        &self,
        req: crate::model::GetEnvironmentHistoryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EnvironmentHistory>> {
        let path = path_template::binding::first_match([
            path_template::binding::bind(
                "/v2/{}/history",
                &[
                    ("parent", req.parent.as_str(), "projects/*/agent/environments/*"),
                ],
            ),
            path_template::binding::bind(
                "/v2/{}/history",
                &[
                    ("parent", req.parent.as_str(), "projects/*/locations/*/agent/environments/*"),
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
}
