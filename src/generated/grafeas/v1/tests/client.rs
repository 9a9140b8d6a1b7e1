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

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_cloud_grafeas_v1::model;
    use pretty_assertions::assert_eq;

    type Result = anyhow::Result<()>;

    mod grafeas {
        use super::*;
        use pretty_assertions::assert_eq;
        use google_cloud_grafeas_v1::client::Grafeas;

        mockall::mock! {
            #[derive(Debug)]
            Grafeas {}
            impl google_cloud_grafeas_v1::stub::Grafeas for Grafeas {
                async fn get_occurrence(&self, req: model::GetOccurrenceRequest, _options: RequestOptions) -> gax::Result<Response<model::Occurrence>>;
                async fn list_occurrences(&self, req: model::ListOccurrencesRequest, _options: RequestOptions) -> gax::Result<Response<model::ListOccurrencesResponse>>;
                async fn delete_occurrence(&self, req: model::DeleteOccurrenceRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn create_occurrence(&self, req: model::CreateOccurrenceRequest, _options: RequestOptions) -> gax::Result<Response<model::Occurrence>>;
                async fn batch_create_occurrences(&self, req: model::BatchCreateOccurrencesRequest, _options: RequestOptions) -> gax::Result<Response<model::BatchCreateOccurrencesResponse>>;
                async fn update_occurrence(&self, req: model::UpdateOccurrenceRequest, _options: RequestOptions) -> gax::Result<Response<model::Occurrence>>;
                async fn get_occurrence_note(&self, req: model::GetOccurrenceNoteRequest, _options: RequestOptions) -> gax::Result<Response<model::Note>>;
                async fn get_note(&self, req: model::GetNoteRequest, _options: RequestOptions) -> gax::Result<Response<model::Note>>;
                async fn list_notes(&self, req: model::ListNotesRequest, _options: RequestOptions) -> gax::Result<Response<model::ListNotesResponse>>;
                async fn delete_note(&self, req: model::DeleteNoteRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn create_note(&self, req: model::CreateNoteRequest, _options: RequestOptions) -> gax::Result<Response<model::Note>>;
                async fn batch_create_notes(&self, req: model::BatchCreateNotesRequest, _options: RequestOptions) -> gax::Result<Response<model::BatchCreateNotesResponse>>;
                async fn update_note(&self, req: model::UpdateNoteRequest, _options: RequestOptions) -> gax::Result<Response<model::Note>>;
                async fn list_note_occurrences(&self, req: model::ListNoteOccurrencesRequest, _options: RequestOptions) -> gax::Result<Response<model::ListNoteOccurrencesResponse>>;
            }
        }

        #[tokio::test]
        async fn get_occurrence() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_get_occurrence()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Occurrence::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .get_occurrence()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Occurrence::default());

            let request = model::GetOccurrenceRequest::new()
                .set_name("hello world");
            let got = client
                .get_occurrence()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Occurrence::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_occurrences() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_list_occurrences()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.filter == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListOccurrencesResponse::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .list_occurrences()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListOccurrencesResponse::default());

            let request = model::ListOccurrencesRequest::new()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_occurrences()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListOccurrencesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_occurrences_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockGrafeas::new();
            mock.expect_list_occurrences()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListOccurrencesResponse::new()
                            .set_occurrences([model::Occurrence::new().set_name("item-1"), model::Occurrence::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_occurrences()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListOccurrencesResponse::new().set_occurrences([model::Occurrence::new().set_name("item-3")]),
                    ))
                });

            let client = Grafeas::from_stub(mock);
            let mut items = client.list_occurrences().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_occurrences_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockGrafeas::new();
            mock.expect_list_occurrences()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListOccurrencesResponse::new().set_occurrences([model::Occurrence::new().set_name("item-1")]),
                    ))
                });

            let client = Grafeas::from_stub(mock);
            let mut pages = client.list_occurrences().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.occurrences.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn delete_occurrence() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_delete_occurrence()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = Grafeas::from_stub(mock);
            client
                .delete_occurrence()
                .set_name("hello world")
                .send()
                .await?;

            let request = model::DeleteOccurrenceRequest::new()
                .set_name("hello world");
            client
                .delete_occurrence()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_occurrence() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_create_occurrence()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.occurrence == Some(model::Occurrence::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Occurrence::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .create_occurrence()
                .set_parent("hello world")
                .set_occurrence(model::Occurrence::default())
                .send()
                .await?;
            assert_eq!(got, model::Occurrence::default());

            let request = model::CreateOccurrenceRequest::new()
                .set_parent("hello world")
                .set_occurrence(model::Occurrence::default());
            let got = client
                .create_occurrence()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Occurrence::default());
            Ok(())
        }

        #[tokio::test]
        async fn batch_create_occurrences() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_batch_create_occurrences()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.occurrences == vec![model::Occurrence::default()]
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::BatchCreateOccurrencesResponse::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .batch_create_occurrences()
                .set_parent("hello world")
                .set_occurrences([model::Occurrence::default()])
                .send()
                .await?;
            assert_eq!(got, model::BatchCreateOccurrencesResponse::default());

            let request = model::BatchCreateOccurrencesRequest::new()
                .set_parent("hello world")
                .set_occurrences([model::Occurrence::default()]);
            let got = client
                .batch_create_occurrences()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::BatchCreateOccurrencesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_occurrence() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_update_occurrence()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.occurrence == Some(model::Occurrence::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Occurrence::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .update_occurrence()
                .set_name("hello world")
                .set_occurrence(model::Occurrence::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::Occurrence::default());

            let request = model::UpdateOccurrenceRequest::new()
                .set_name("hello world")
                .set_occurrence(model::Occurrence::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_occurrence()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Occurrence::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_occurrence_note() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_get_occurrence_note()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Note::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .get_occurrence_note()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Note::default());

            let request = model::GetOccurrenceNoteRequest::new()
                .set_name("hello world");
            let got = client
                .get_occurrence_note()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Note::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_note() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_get_note()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Note::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .get_note()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Note::default());

            let request = model::GetNoteRequest::new()
                .set_name("hello world");
            let got = client
                .get_note()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Note::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_notes() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_list_notes()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.filter == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListNotesResponse::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .list_notes()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListNotesResponse::default());

            let request = model::ListNotesRequest::new()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_notes()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListNotesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_notes_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockGrafeas::new();
            mock.expect_list_notes()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListNotesResponse::new()
                            .set_notes([model::Note::new().set_name("item-1"), model::Note::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_notes()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListNotesResponse::new().set_notes([model::Note::new().set_name("item-3")]),
                    ))
                });

            let client = Grafeas::from_stub(mock);
            let mut items = client.list_notes().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_notes_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockGrafeas::new();
            mock.expect_list_notes()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListNotesResponse::new().set_notes([model::Note::new().set_name("item-1")]),
                    ))
                });

            let client = Grafeas::from_stub(mock);
            let mut pages = client.list_notes().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.notes.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn delete_note() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_delete_note()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = Grafeas::from_stub(mock);
            client
                .delete_note()
                .set_name("hello world")
                .send()
                .await?;

            let request = model::DeleteNoteRequest::new()
                .set_name("hello world");
            client
                .delete_note()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_note() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_create_note()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.note_id == "hello world"
                        && r.note == Some(model::Note::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Note::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .create_note()
                .set_parent("hello world")
                .set_note_id("hello world")
                .set_note(model::Note::default())
                .send()
                .await?;
            assert_eq!(got, model::Note::default());

            let request = model::CreateNoteRequest::new()
                .set_parent("hello world")
                .set_note_id("hello world")
                .set_note(model::Note::default());
            let got = client
                .create_note()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Note::default());
            Ok(())
        }

        #[tokio::test]
        async fn batch_create_notes() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_batch_create_notes()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.notes.get("key") == Some(&model::Note::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::BatchCreateNotesResponse::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .batch_create_notes()
                .set_parent("hello world")
                .set_notes([("key", model::Note::default())])
                .send()
                .await?;
            assert_eq!(got, model::BatchCreateNotesResponse::default());

            let request = model::BatchCreateNotesRequest::new()
                .set_parent("hello world")
                .set_notes([("key", model::Note::default())]);
            let got = client
                .batch_create_notes()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::BatchCreateNotesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_note() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_update_note()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.note == Some(model::Note::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Note::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .update_note()
                .set_name("hello world")
                .set_note(model::Note::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::Note::default());

            let request = model::UpdateNoteRequest::new()
                .set_name("hello world")
                .set_note(model::Note::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_note()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Note::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_note_occurrences() -> Result {
            let mut mock = MockGrafeas::new();
            mock.expect_list_note_occurrences()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.filter == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListNoteOccurrencesResponse::default())));

            let client = Grafeas::from_stub(mock);
            let got = client
                .list_note_occurrences()
                .set_name("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListNoteOccurrencesResponse::default());

            let request = model::ListNoteOccurrencesRequest::new()
                .set_name("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_note_occurrences()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListNoteOccurrencesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_note_occurrences_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockGrafeas::new();
            mock.expect_list_note_occurrences()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListNoteOccurrencesResponse::new()
                            .set_occurrences([model::Occurrence::new().set_name("item-1"), model::Occurrence::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_note_occurrences()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListNoteOccurrencesResponse::new().set_occurrences([model::Occurrence::new().set_name("item-3")]),
                    ))
                });

            let client = Grafeas::from_stub(mock);
            let mut items = client.list_note_occurrences().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_note_occurrences_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockGrafeas::new();
            mock.expect_list_note_occurrences()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListNoteOccurrencesResponse::new().set_occurrences([model::Occurrence::new().set_name("item-1")]),
                    ))
                });

            let client = Grafeas::from_stub(mock);
            let mut pages = client.list_note_occurrences().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.occurrences.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn request_options_are_forwarded() -> Result {
            use gax::options::RequestOptionsBuilder;
            let mut mock = MockGrafeas::new();
            mock.expect_get_occurrence()
                .withf(|_, o| o.user_agent().as_deref() == Some("test-agent/1.0"))
                .times(1)
                .returning(|_, _| Ok(Response::from(model::Occurrence::default())));
            let client = Grafeas::from_stub(mock);
            client
                .get_occurrence()
                .with_user_agent("test-agent/1.0")
                .send()
                .await?;
            Ok(())
        }
    }
}
