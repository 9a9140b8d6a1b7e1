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
    use google_cloud_datacatalog_v1::model;
    use pretty_assertions::assert_eq;

    type Result = anyhow::Result<()>;

    mod data_catalog {
        use super::*;
        use pretty_assertions::assert_eq;
        use google_cloud_datacatalog_v1::client::DataCatalog;

        mockall::mock! {
            #[derive(Debug)]
            DataCatalog {}
            impl google_cloud_datacatalog_v1::stub::DataCatalog for DataCatalog {
                async fn search_catalog(&self, req: model::SearchCatalogRequest, _options: RequestOptions) -> gax::Result<Response<model::SearchCatalogResponse>>;
                async fn create_entry_group(&self, req: model::CreateEntryGroupRequest, _options: RequestOptions) -> gax::Result<Response<model::EntryGroup>>;
                async fn get_entry_group(&self, req: model::GetEntryGroupRequest, _options: RequestOptions) -> gax::Result<Response<model::EntryGroup>>;
                async fn update_entry_group(&self, req: model::UpdateEntryGroupRequest, _options: RequestOptions) -> gax::Result<Response<model::EntryGroup>>;
                async fn delete_entry_group(&self, req: model::DeleteEntryGroupRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn list_entry_groups(&self, req: model::ListEntryGroupsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListEntryGroupsResponse>>;
                async fn create_entry(&self, req: model::CreateEntryRequest, _options: RequestOptions) -> gax::Result<Response<model::Entry>>;
                async fn update_entry(&self, req: model::UpdateEntryRequest, _options: RequestOptions) -> gax::Result<Response<model::Entry>>;
                async fn delete_entry(&self, req: model::DeleteEntryRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn get_entry(&self, req: model::GetEntryRequest, _options: RequestOptions) -> gax::Result<Response<model::Entry>>;
                async fn lookup_entry(&self, req: model::LookupEntryRequest, _options: RequestOptions) -> gax::Result<Response<model::Entry>>;
                async fn list_entries(&self, req: model::ListEntriesRequest, _options: RequestOptions) -> gax::Result<Response<model::ListEntriesResponse>>;
                async fn create_tag_template(&self, req: model::CreateTagTemplateRequest, _options: RequestOptions) -> gax::Result<Response<model::TagTemplate>>;
                async fn get_tag_template(&self, req: model::GetTagTemplateRequest, _options: RequestOptions) -> gax::Result<Response<model::TagTemplate>>;
                async fn update_tag_template(&self, req: model::UpdateTagTemplateRequest, _options: RequestOptions) -> gax::Result<Response<model::TagTemplate>>;
                async fn delete_tag_template(&self, req: model::DeleteTagTemplateRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn create_tag_template_field(&self, req: model::CreateTagTemplateFieldRequest, _options: RequestOptions) -> gax::Result<Response<model::TagTemplateField>>;
                async fn update_tag_template_field(&self, req: model::UpdateTagTemplateFieldRequest, _options: RequestOptions) -> gax::Result<Response<model::TagTemplateField>>;
                async fn rename_tag_template_field(&self, req: model::RenameTagTemplateFieldRequest, _options: RequestOptions) -> gax::Result<Response<model::TagTemplateField>>;
                async fn delete_tag_template_field(&self, req: model::DeleteTagTemplateFieldRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn create_tag(&self, req: model::CreateTagRequest, _options: RequestOptions) -> gax::Result<Response<model::Tag>>;
                async fn update_tag(&self, req: model::UpdateTagRequest, _options: RequestOptions) -> gax::Result<Response<model::Tag>>;
                async fn delete_tag(&self, req: model::DeleteTagRequest, _options: RequestOptions) -> gax::Result<Response<()>>;
                async fn list_tags(&self, req: model::ListTagsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListTagsResponse>>;
                async fn set_iam_policy(&self, req: iam_v1::model::SetIamPolicyRequest, _options: RequestOptions) -> gax::Result<Response<iam_v1::model::Policy>>;
                async fn get_iam_policy(&self, req: iam_v1::model::GetIamPolicyRequest, _options: RequestOptions) -> gax::Result<Response<iam_v1::model::Policy>>;
                async fn test_iam_permissions(&self, req: iam_v1::model::TestIamPermissionsRequest, _options: RequestOptions) -> gax::Result<Response<iam_v1::model::TestIamPermissionsResponse>>;
            }
        }

        #[tokio::test]
        async fn search_catalog() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_search_catalog()
                .withf(|r, _| {
                    r.scope == Some(model::search_catalog_request::Scope::default())
                        && r.query == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                        && r.order_by == "hello world"
                        && r.admin_search
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::SearchCatalogResponse::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .search_catalog()
                .set_scope(model::search_catalog_request::Scope::default())
                .set_query("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .set_order_by("hello world")
                .set_admin_search(true)
                .send()
                .await?;
            assert_eq!(got, model::SearchCatalogResponse::default());

            let request = model::SearchCatalogRequest::new()
                .set_scope(model::search_catalog_request::Scope::default())
                .set_query("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .set_order_by("hello world")
                .set_admin_search(true);
            let got = client
                .search_catalog()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::SearchCatalogResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn search_catalog_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockDataCatalog::new();
            mock.expect_search_catalog()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::SearchCatalogResponse::new()
                            .set_results([model::SearchCatalogResult::new().set_search_result_subtype("item-1"), model::SearchCatalogResult::new().set_search_result_subtype("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_search_catalog()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::SearchCatalogResponse::new().set_results([model::SearchCatalogResult::new().set_search_result_subtype("item-3")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut items = client.search_catalog().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.search_result_subtype);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn search_catalog_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockDataCatalog::new();
            mock.expect_search_catalog()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::SearchCatalogResponse::new().set_results([model::SearchCatalogResult::new().set_search_result_subtype("item-1")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut pages = client.search_catalog().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.results.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn create_entry_group() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_create_entry_group()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.entry_group_id == "hello world"
                        && r.entry_group == Some(model::EntryGroup::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::EntryGroup::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .create_entry_group()
                .set_parent("hello world")
                .set_entry_group_id("hello world")
                .set_entry_group(model::EntryGroup::default())
                .send()
                .await?;
            assert_eq!(got, model::EntryGroup::default());

            let request = model::CreateEntryGroupRequest::new()
                .set_parent("hello world")
                .set_entry_group_id("hello world")
                .set_entry_group(model::EntryGroup::default());
            let got = client
                .create_entry_group()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::EntryGroup::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_entry_group() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_get_entry_group()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.read_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::EntryGroup::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .get_entry_group()
                .set_name("hello world")
                .set_read_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::EntryGroup::default());

            let request = model::GetEntryGroupRequest::new()
                .set_name("hello world")
                .set_read_mask(wkt::FieldMask::default());
            let got = client
                .get_entry_group()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::EntryGroup::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_entry_group() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_update_entry_group()
                .withf(|r, _| {
                    r.entry_group == Some(model::EntryGroup::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::EntryGroup::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .update_entry_group()
                .set_entry_group(model::EntryGroup::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::EntryGroup::default());

            let request = model::UpdateEntryGroupRequest::new()
                .set_entry_group(model::EntryGroup::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_entry_group()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::EntryGroup::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_entry_group() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_delete_entry_group()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.force
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = DataCatalog::from_stub(mock);
            client
                .delete_entry_group()
                .set_name("hello world")
                .set_force(true)
                .send()
                .await?;

            let request = model::DeleteEntryGroupRequest::new()
                .set_name("hello world")
                .set_force(true);
            client
                .delete_entry_group()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_entry_groups() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_list_entry_groups()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListEntryGroupsResponse::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .list_entry_groups()
                .set_parent("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListEntryGroupsResponse::default());

            let request = model::ListEntryGroupsRequest::new()
                .set_parent("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_entry_groups()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListEntryGroupsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_entry_groups_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockDataCatalog::new();
            mock.expect_list_entry_groups()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListEntryGroupsResponse::new()
                            .set_entry_groups([model::EntryGroup::new().set_name("item-1"), model::EntryGroup::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_entry_groups()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListEntryGroupsResponse::new().set_entry_groups([model::EntryGroup::new().set_name("item-3")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut items = client.list_entry_groups().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_entry_groups_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockDataCatalog::new();
            mock.expect_list_entry_groups()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListEntryGroupsResponse::new().set_entry_groups([model::EntryGroup::new().set_name("item-1")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut pages = client.list_entry_groups().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.entry_groups.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn create_entry() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_create_entry()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.entry_id == "hello world"
                        && r.entry == Some(model::Entry::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Entry::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .create_entry()
                .set_parent("hello world")
                .set_entry_id("hello world")
                .set_entry(model::Entry::default())
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());

            let request = model::CreateEntryRequest::new()
                .set_parent("hello world")
                .set_entry_id("hello world")
                .set_entry(model::Entry::default());
            let got = client
                .create_entry()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_entry() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_update_entry()
                .withf(|r, _| {
                    r.entry == Some(model::Entry::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Entry::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .update_entry()
                .set_entry(model::Entry::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());

            let request = model::UpdateEntryRequest::new()
                .set_entry(model::Entry::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_entry()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_entry() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_delete_entry()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = DataCatalog::from_stub(mock);
            client
                .delete_entry()
                .set_name("hello world")
                .send()
                .await?;

            let request = model::DeleteEntryRequest::new()
                .set_name("hello world");
            client
                .delete_entry()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_entry() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_get_entry()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Entry::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .get_entry()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());

            let request = model::GetEntryRequest::new()
                .set_name("hello world");
            let got = client
                .get_entry()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());
            Ok(())
        }

        #[tokio::test]
        async fn lookup_entry() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_lookup_entry()
                .withf(|r, _| {
                    r.linked_resource().map(|s| s.as_str()) == Some("hello world")
                        && r.project == "hello world"
                        && r.location == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Entry::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .lookup_entry()
                .set_linked_resource("hello world")
                .set_project("hello world")
                .set_location("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());

            let request = model::LookupEntryRequest::new()
                .set_linked_resource("hello world")
                .set_project("hello world")
                .set_location("hello world");
            let got = client
                .lookup_entry()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Entry::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_entries() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_list_entries()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                        && r.read_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListEntriesResponse::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .list_entries()
                .set_parent("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .set_read_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::ListEntriesResponse::default());

            let request = model::ListEntriesRequest::new()
                .set_parent("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .set_read_mask(wkt::FieldMask::default());
            let got = client
                .list_entries()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListEntriesResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_entries_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockDataCatalog::new();
            mock.expect_list_entries()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListEntriesResponse::new()
                            .set_entries([model::Entry::new().set_name("item-1"), model::Entry::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_entries()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListEntriesResponse::new().set_entries([model::Entry::new().set_name("item-3")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut items = client.list_entries().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_entries_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockDataCatalog::new();
            mock.expect_list_entries()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListEntriesResponse::new().set_entries([model::Entry::new().set_name("item-1")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut pages = client.list_entries().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.entries.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn create_tag_template() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_create_tag_template()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.tag_template_id == "hello world"
                        && r.tag_template == Some(model::TagTemplate::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::TagTemplate::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .create_tag_template()
                .set_parent("hello world")
                .set_tag_template_id("hello world")
                .set_tag_template(model::TagTemplate::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplate::default());

            let request = model::CreateTagTemplateRequest::new()
                .set_parent("hello world")
                .set_tag_template_id("hello world")
                .set_tag_template(model::TagTemplate::default());
            let got = client
                .create_tag_template()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplate::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_tag_template() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_get_tag_template()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::TagTemplate::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .get_tag_template()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::TagTemplate::default());

            let request = model::GetTagTemplateRequest::new()
                .set_name("hello world");
            let got = client
                .get_tag_template()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplate::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_tag_template() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_update_tag_template()
                .withf(|r, _| {
                    r.tag_template == Some(model::TagTemplate::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::TagTemplate::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .update_tag_template()
                .set_tag_template(model::TagTemplate::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplate::default());

            let request = model::UpdateTagTemplateRequest::new()
                .set_tag_template(model::TagTemplate::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_tag_template()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplate::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_template() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_delete_tag_template()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.force
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = DataCatalog::from_stub(mock);
            client
                .delete_tag_template()
                .set_name("hello world")
                .set_force(true)
                .send()
                .await?;

            let request = model::DeleteTagTemplateRequest::new()
                .set_name("hello world")
                .set_force(true);
            client
                .delete_tag_template()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_tag_template_field() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_create_tag_template_field()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.tag_template_field_id == "hello world"
                        && r.tag_template_field == Some(model::TagTemplateField::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::TagTemplateField::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .create_tag_template_field()
                .set_parent("hello world")
                .set_tag_template_field_id("hello world")
                .set_tag_template_field(model::TagTemplateField::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplateField::default());

            let request = model::CreateTagTemplateFieldRequest::new()
                .set_parent("hello world")
                .set_tag_template_field_id("hello world")
                .set_tag_template_field(model::TagTemplateField::default());
            let got = client
                .create_tag_template_field()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplateField::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_tag_template_field() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_update_tag_template_field()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.tag_template_field == Some(model::TagTemplateField::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::TagTemplateField::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .update_tag_template_field()
                .set_name("hello world")
                .set_tag_template_field(model::TagTemplateField::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplateField::default());

            let request = model::UpdateTagTemplateFieldRequest::new()
                .set_name("hello world")
                .set_tag_template_field(model::TagTemplateField::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_tag_template_field()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplateField::default());
            Ok(())
        }

        #[tokio::test]
        async fn rename_tag_template_field() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_rename_tag_template_field()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.new_tag_template_field_id == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::TagTemplateField::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .rename_tag_template_field()
                .set_name("hello world")
                .set_new_tag_template_field_id("hello world")
                .send()
                .await?;
            assert_eq!(got, model::TagTemplateField::default());

            let request = model::RenameTagTemplateFieldRequest::new()
                .set_name("hello world")
                .set_new_tag_template_field_id("hello world");
            let got = client
                .rename_tag_template_field()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::TagTemplateField::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag_template_field() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_delete_tag_template_field()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.force
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = DataCatalog::from_stub(mock);
            client
                .delete_tag_template_field()
                .set_name("hello world")
                .set_force(true)
                .send()
                .await?;

            let request = model::DeleteTagTemplateFieldRequest::new()
                .set_name("hello world")
                .set_force(true);
            client
                .delete_tag_template_field()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn create_tag() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_create_tag()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.tag == Some(model::Tag::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Tag::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .create_tag()
                .set_parent("hello world")
                .set_tag(model::Tag::default())
                .send()
                .await?;
            assert_eq!(got, model::Tag::default());

            let request = model::CreateTagRequest::new()
                .set_parent("hello world")
                .set_tag(model::Tag::default());
            let got = client
                .create_tag()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Tag::default());
            Ok(())
        }

        #[tokio::test]
        async fn update_tag() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_update_tag()
                .withf(|r, _| {
                    r.tag == Some(model::Tag::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Tag::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .update_tag()
                .set_tag(model::Tag::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, model::Tag::default());

            let request = model::UpdateTagRequest::new()
                .set_tag(model::Tag::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .update_tag()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Tag::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_tag() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_delete_tag()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(())));

            let client = DataCatalog::from_stub(mock);
            client
                .delete_tag()
                .set_name("hello world")
                .send()
                .await?;

            let request = model::DeleteTagRequest::new()
                .set_name("hello world");
            client
                .delete_tag()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn list_tags() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_list_tags()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListTagsResponse::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .list_tags()
                .set_parent("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListTagsResponse::default());

            let request = model::ListTagsRequest::new()
                .set_parent("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_tags()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListTagsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_tags_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockDataCatalog::new();
            mock.expect_list_tags()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListTagsResponse::new()
                            .set_tags([model::Tag::new().set_name("item-1"), model::Tag::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_tags()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListTagsResponse::new().set_tags([model::Tag::new().set_name("item-3")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut items = client.list_tags().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_tags_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockDataCatalog::new();
            mock.expect_list_tags()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListTagsResponse::new().set_tags([model::Tag::new().set_name("item-1")]),
                    ))
                });

            let client = DataCatalog::from_stub(mock);
            let mut pages = client.list_tags().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.tags.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn set_iam_policy() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_set_iam_policy()
                .withf(|r, _| {
                    r.resource == "hello world"
                        && r.policy == Some(iam_v1::model::Policy::default())
                        && r.update_mask == Some(wkt::FieldMask::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(iam_v1::model::Policy::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .set_iam_policy()
                .set_resource("hello world")
                .set_policy(iam_v1::model::Policy::default())
                .set_update_mask(wkt::FieldMask::default())
                .send()
                .await?;
            assert_eq!(got, iam_v1::model::Policy::default());

            let request = iam_v1::model::SetIamPolicyRequest::new()
                .set_resource("hello world")
                .set_policy(iam_v1::model::Policy::default())
                .set_update_mask(wkt::FieldMask::default());
            let got = client
                .set_iam_policy()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, iam_v1::model::Policy::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_iam_policy() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_get_iam_policy()
                .withf(|r, _| {
                    r.resource == "hello world"
                        && r.options == Some(iam_v1::model::GetPolicyOptions::default())
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(iam_v1::model::Policy::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .get_iam_policy()
                .set_resource("hello world")
                .set_options(iam_v1::model::GetPolicyOptions::default())
                .send()
                .await?;
            assert_eq!(got, iam_v1::model::Policy::default());

            let request = iam_v1::model::GetIamPolicyRequest::new()
                .set_resource("hello world")
                .set_options(iam_v1::model::GetPolicyOptions::default());
            let got = client
                .get_iam_policy()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, iam_v1::model::Policy::default());
            Ok(())
        }

        #[tokio::test]
        async fn test_iam_permissions() -> Result {
            let mut mock = MockDataCatalog::new();
            mock.expect_test_iam_permissions()
                .withf(|r, _| {
                    r.resource == "hello world"
                        && r.permissions == vec!["hello world"]
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(iam_v1::model::TestIamPermissionsResponse::default())));

            let client = DataCatalog::from_stub(mock);
            let got = client
                .test_iam_permissions()
                .set_resource("hello world")
                .set_permissions(["hello world"])
                .send()
                .await?;
            assert_eq!(got, iam_v1::model::TestIamPermissionsResponse::default());

            let request = iam_v1::model::TestIamPermissionsRequest::new()
                .set_resource("hello world")
                .set_permissions(["hello world"]);
            let got = client
                .test_iam_permissions()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, iam_v1::model::TestIamPermissionsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn request_options_are_forwarded() -> Result {
            use gax::options::RequestOptionsBuilder;
            let mut mock = MockDataCatalog::new();
            mock.expect_search_catalog()
                .withf(|_, o| o.user_agent().as_deref() == Some("test-agent/1.0"))
                .times(1)
                .returning(|_, _| Ok(Response::from(model::SearchCatalogResponse::default())));
            let client = DataCatalog::from_stub(mock);
            client
                .search_catalog()
                .with_user_agent("test-agent/1.0")
                .send()
                .await?;
            Ok(())
        }
    }
}
