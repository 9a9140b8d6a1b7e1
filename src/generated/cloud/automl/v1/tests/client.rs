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
    use google_cloud_automl_v1::model;
    use pretty_assertions::assert_eq;

    type Result = anyhow::Result<()>;

    fn make_finished_operation<M: wkt::message::Message + serde::ser::Serialize>(
        response: &M,
    ) -> gax::Result<Response<longrunning::model::Operation>> {
        let any = wkt::Any::from_msg(response).expect("test message should succeed");
        let operation = longrunning::model::Operation::new()
            .set_done(true)
            .set_result(longrunning::model::operation::Result::Response(any.into()));
        Ok(Response::from(operation))
    }

    #[cfg(feature = "auto-ml")]
    mod auto_ml {
        use super::*;
        use pretty_assertions::assert_eq;
        use google_cloud_automl_v1::client::AutoMl;

        mockall::mock! {
            #[derive(Debug)]
            AutoMl {}
            impl google_cloud_automl_v1::stub::AutoMl for AutoMl {
                async fn get_dataset(&self, req: model::GetDatasetRequest, _options: RequestOptions) -> gax::Result<Response<model::Dataset>>;
                async fn list_datasets(&self, req: model::ListDatasetsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListDatasetsResponse>>;
                async fn delete_dataset(&self, req: model::DeleteDatasetRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
                async fn get_model(&self, req: model::GetModelRequest, _options: RequestOptions) -> gax::Result<Response<model::Model>>;
                async fn list_models(&self, req: model::ListModelsRequest, _options: RequestOptions) -> gax::Result<Response<model::ListModelsResponse>>;
                async fn delete_model(&self, req: model::DeleteModelRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
                async fn deploy_model(&self, req: model::DeployModelRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
                async fn undeploy_model(&self, req: model::UndeployModelRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
                async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
            }
        }

        #[tokio::test]
        async fn get_dataset() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_get_dataset()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Dataset::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .get_dataset()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Dataset::default());

            let request = model::GetDatasetRequest::new()
                .set_name("hello world");
            let got = client
                .get_dataset()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Dataset::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_datasets() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_list_datasets()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.filter == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListDatasetsResponse::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .list_datasets()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListDatasetsResponse::default());

            let request = model::ListDatasetsRequest::new()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_datasets()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListDatasetsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_datasets_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockAutoMl::new();
            mock.expect_list_datasets()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListDatasetsResponse::new()
                            .set_datasets([model::Dataset::new().set_name("item-1"), model::Dataset::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_datasets()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListDatasetsResponse::new().set_datasets([model::Dataset::new().set_name("item-3")]),
                    ))
                });

            let client = AutoMl::from_stub(mock);
            let mut items = client.list_datasets().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_datasets_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockAutoMl::new();
            mock.expect_list_datasets()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListDatasetsResponse::new().set_datasets([model::Dataset::new().set_name("item-1")]),
                    ))
                });

            let client = AutoMl::from_stub(mock);
            let mut pages = client.list_datasets().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.datasets.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn delete_dataset() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_delete_dataset()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .delete_dataset()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = model::DeleteDatasetRequest::new()
                .set_name("hello world");
            let got = client
                .delete_dataset()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_dataset_until_done() -> Result {
            use lro::Poller;
            let mut mock = MockAutoMl::new();
            mock.expect_delete_dataset()
                .times(1)
                .return_once(|_, _| make_finished_operation(&wkt::Empty::default()));

            let client = AutoMl::from_stub(mock);
            client.delete_dataset().poller().until_done().await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_model() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_get_model()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::Model::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .get_model()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, model::Model::default());

            let request = model::GetModelRequest::new()
                .set_name("hello world");
            let got = client
                .get_model()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::Model::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_models() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_list_models()
                .withf(|r, _| {
                    r.parent == "hello world"
                        && r.filter == "hello world"
                        && r.page_size == 42
                        && r.page_token == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::ListModelsResponse::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .list_models()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world")
                .send()
                .await?;
            assert_eq!(got, model::ListModelsResponse::default());

            let request = model::ListModelsRequest::new()
                .set_parent("hello world")
                .set_filter("hello world")
                .set_page_size(42_i32)
                .set_page_token("hello world");
            let got = client
                .list_models()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::ListModelsResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn list_models_by_item() -> Result {
            use gax::paginator::ItemPaginator;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockAutoMl::new();
            mock.expect_list_models()
                .withf(|r, _| r.page_token.is_empty())
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListModelsResponse::new()
                            .set_model([model::Model::new().set_name("item-1"), model::Model::new().set_name("item-2")])
                            .set_next_page_token("page-2"),
                    ))
                });
            mock.expect_list_models()
                .withf(|r, _| r.page_token == "page-2")
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListModelsResponse::new().set_model([model::Model::new().set_name("item-3")]),
                    ))
                });

            let client = AutoMl::from_stub(mock);
            let mut items = client.list_models().by_item();
            let mut got = Vec::new();
            while let Some(item) = items.next().await {
                got.push(item?.name);
            }
            assert_eq!(got, ["item-1", "item-2", "item-3"]);
            Ok(())
        }

        #[tokio::test]
        async fn list_models_by_page() -> Result {
            use gax::paginator::Paginator;
            let mut mock = MockAutoMl::new();
            mock.expect_list_models()
                .times(1)
                .returning(|_, _| {
                    Ok(Response::from(
                        model::ListModelsResponse::new().set_model([model::Model::new().set_name("item-1")]),
                    ))
                });

            let client = AutoMl::from_stub(mock);
            let mut pages = client.list_models().by_page();
            let mut count = 0;
            while let Some(page) = pages.next().await {
                let page = page?;
                assert_eq!(page.model.len(), 1);
                count += 1;
            }
            assert_eq!(count, 1);
            Ok(())
        }

        #[tokio::test]
        async fn delete_model() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_delete_model()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .delete_model()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = model::DeleteModelRequest::new()
                .set_name("hello world");
            let got = client
                .delete_model()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn delete_model_until_done() -> Result {
            use lro::Poller;
            let mut mock = MockAutoMl::new();
            mock.expect_delete_model()
                .times(1)
                .return_once(|_, _| make_finished_operation(&wkt::Empty::default()));

            let client = AutoMl::from_stub(mock);
            client.delete_model().poller().until_done().await?;
            Ok(())
        }

        #[tokio::test]
        async fn deploy_model() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_deploy_model()
                .withf(|r, _| {
                    r.image_object_detection_model_deployment_metadata() == Some(&std::boxed::Box::new(model::ImageObjectDetectionModelDeploymentMetadata::default()))
                        && r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .deploy_model()
                .set_image_object_detection_model_deployment_metadata(model::ImageObjectDetectionModelDeploymentMetadata::default())
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = model::DeployModelRequest::new()
                .set_image_object_detection_model_deployment_metadata(model::ImageObjectDetectionModelDeploymentMetadata::default())
                .set_name("hello world");
            let got = client
                .deploy_model()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn deploy_model_until_done() -> Result {
            use lro::Poller;
            let mut mock = MockAutoMl::new();
            mock.expect_deploy_model()
                .times(1)
                .return_once(|_, _| make_finished_operation(&wkt::Empty::default()));

            let client = AutoMl::from_stub(mock);
            client.deploy_model().poller().until_done().await?;
            Ok(())
        }

        #[tokio::test]
        async fn undeploy_model() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_undeploy_model()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .undeploy_model()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = model::UndeployModelRequest::new()
                .set_name("hello world");
            let got = client
                .undeploy_model()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn undeploy_model_until_done() -> Result {
            use lro::Poller;
            let mut mock = MockAutoMl::new();
            mock.expect_undeploy_model()
                .times(1)
                .return_once(|_, _| make_finished_operation(&wkt::Empty::default()));

            let client = AutoMl::from_stub(mock);
            client.undeploy_model().poller().until_done().await?;
            Ok(())
        }

        #[tokio::test]
        async fn get_operation() -> Result {
            let mut mock = MockAutoMl::new();
            mock.expect_get_operation()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = AutoMl::from_stub(mock);
            let got = client
                .get_operation()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = longrunning::model::GetOperationRequest::new()
                .set_name("hello world");
            let got = client
                .get_operation()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn request_options_are_forwarded() -> Result {
            use gax::options::RequestOptionsBuilder;
            let mut mock = MockAutoMl::new();
            mock.expect_get_dataset()
                .withf(|_, o| o.user_agent().as_deref() == Some("test-agent/1.0"))
                .times(1)
                .returning(|_, _| Ok(Response::from(model::Dataset::default())));
            let client = AutoMl::from_stub(mock);
            client
                .get_dataset()
                .with_user_agent("test-agent/1.0")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn delete_dataset_polls_pending_operation() -> Result {
            use lro::Poller;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockAutoMl::new();
            mock.expect_delete_dataset()
                .times(1)
                .in_sequence(&mut seq)
                .return_once(|_, _| {
                    Ok(Response::from(
                        longrunning::model::Operation::new().set_name("operations/test-001"),
                    ))
                });
            mock.expect_get_operation()
                .withf(|r, _| r.name == "operations/test-001")
                .times(1)
                .in_sequence(&mut seq)
                .return_once(|_, _| make_finished_operation(&wkt::Empty::default()));

            let client = AutoMl::from_stub(mock);
            client.delete_dataset().poller().until_done().await?;
            Ok(())
        }
    }

    #[cfg(feature = "prediction-service")]
    mod prediction_service {
        use super::*;
        use pretty_assertions::assert_eq;
        use google_cloud_automl_v1::client::PredictionService;

        mockall::mock! {
            #[derive(Debug)]
            PredictionService {}
            impl google_cloud_automl_v1::stub::PredictionService for PredictionService {
                async fn predict(&self, req: model::PredictRequest, _options: RequestOptions) -> gax::Result<Response<model::PredictResponse>>;
                async fn batch_predict(&self, req: model::BatchPredictRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
                async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
            }
        }

        #[tokio::test]
        async fn predict() -> Result {
            let mut mock = MockPredictionService::new();
            mock.expect_predict()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.payload == Some(model::ExamplePayload::default())
                        && r.params.get("key").map(|s| s.as_str()) == Some("hello world")
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(model::PredictResponse::default())));

            let client = PredictionService::from_stub(mock);
            let got = client
                .predict()
                .set_name("hello world")
                .set_payload(model::ExamplePayload::default())
                .set_params([("key", "hello world")])
                .send()
                .await?;
            assert_eq!(got, model::PredictResponse::default());

            let request = model::PredictRequest::new()
                .set_name("hello world")
                .set_payload(model::ExamplePayload::default())
                .set_params([("key", "hello world")]);
            let got = client
                .predict()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, model::PredictResponse::default());
            Ok(())
        }

        #[tokio::test]
        async fn batch_predict() -> Result {
            let mut mock = MockPredictionService::new();
            mock.expect_batch_predict()
                .withf(|r, _| {
                    r.name == "hello world"
                        && r.input_config == Some(model::BatchPredictInputConfig::default())
                        && r.output_config == Some(model::BatchPredictOutputConfig::default())
                        && r.params.get("key").map(|s| s.as_str()) == Some("hello world")
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = PredictionService::from_stub(mock);
            let got = client
                .batch_predict()
                .set_name("hello world")
                .set_input_config(model::BatchPredictInputConfig::default())
                .set_output_config(model::BatchPredictOutputConfig::default())
                .set_params([("key", "hello world")])
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = model::BatchPredictRequest::new()
                .set_name("hello world")
                .set_input_config(model::BatchPredictInputConfig::default())
                .set_output_config(model::BatchPredictOutputConfig::default())
                .set_params([("key", "hello world")]);
            let got = client
                .batch_predict()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn batch_predict_until_done() -> Result {
            use lro::Poller;
            let mut mock = MockPredictionService::new();
            mock.expect_batch_predict()
                .times(1)
                .return_once(|_, _| make_finished_operation(&model::BatchPredictResult::default()));

            let client = PredictionService::from_stub(mock);
            let got = client.batch_predict().poller().until_done().await?;
            assert_eq!(got, model::BatchPredictResult::default());
            Ok(())
        }

        #[tokio::test]
        async fn get_operation() -> Result {
            let mut mock = MockPredictionService::new();
            mock.expect_get_operation()
                .withf(|r, _| {
                    r.name == "hello world"
                })
                .times(2)
                .returning(|_, _| Ok(Response::from(longrunning::model::Operation::default())));

            let client = PredictionService::from_stub(mock);
            let got = client
                .get_operation()
                .set_name("hello world")
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());

            let request = longrunning::model::GetOperationRequest::new()
                .set_name("hello world");
            let got = client
                .get_operation()
                .with_request(request)
                .with_options(RequestOptions::default())
                .send()
                .await?;
            assert_eq!(got, longrunning::model::Operation::default());
            Ok(())
        }

        #[tokio::test]
        async fn request_options_are_forwarded() -> Result {
            use gax::options::RequestOptionsBuilder;
            let mut mock = MockPredictionService::new();
            mock.expect_predict()
                .withf(|_, o| o.user_agent().as_deref() == Some("test-agent/1.0"))
                .times(1)
                .returning(|_, _| Ok(Response::from(model::PredictResponse::default())));
            let client = PredictionService::from_stub(mock);
            client
                .predict()
                .with_user_agent("test-agent/1.0")
                .send()
                .await?;
            Ok(())
        }

        #[tokio::test]
        async fn batch_predict_polls_pending_operation() -> Result {
            use lro::Poller;
            let mut seq = mockall::Sequence::new();
            let mut mock = MockPredictionService::new();
            mock.expect_batch_predict()
                .times(1)
                .in_sequence(&mut seq)
                .return_once(|_, _| {
                    Ok(Response::from(
                        longrunning::model::Operation::new().set_name("operations/test-001"),
                    ))
                });
            mock.expect_get_operation()
                .withf(|r, _| r.name == "operations/test-001")
                .times(1)
                .in_sequence(&mut seq)
                .return_once(|_, _| make_finished_operation(&model::BatchPredictResult::default()));

            let client = PredictionService::from_stub(mock);
            let got = client.batch_predict().poller().until_done().await?;
            assert_eq!(got, model::BatchPredictResult::default());
            Ok(())
        }
    }
}
