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

#[cfg(all(test, feature = "run-integration-tests"))]
mod driver {
    #[tokio::test(flavor = "multi_thread")]
    async fn automl_language_sentiment_analysis_predict() -> anyhow::Result<()> {
        use google_cloud_automl_v1::client::PredictionService;
        let project_id = std::env::var("AUTOML_PROJECT_ID")?;
        let model_id = std::env::var("AUTOML_SENTIMENT_MODEL_ID")?;
        let client = PredictionService::builder().build().await?;

        let mut out = Vec::new();
        user_guide_samples::automl::language_sentiment_analysis_predict(
            &client,
            &project_id,
            &model_id,
            "Hopefully this Claritin kicks in soon",
            &mut out,
        )
        .await?;
        let out = String::from_utf8(out)?;
        assert!(out.contains("Predicted class name: "), "{out}");
        assert!(out.contains("Predicted sentiment score: "), "{out}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn datacatalog_lookup_entry() -> anyhow::Result<()> {
        use google_cloud_datacatalog_v1::client::DataCatalog;
        let linked = user_guide_samples::datacatalog::bigquery_dataset(
            "bigquery-public-data",
            "new_york_taxi_trips",
        );
        let client = DataCatalog::builder().build().await?;
        let entry = user_guide_samples::datacatalog::lookup_entry(&client, &linked).await?;
        assert_eq!(entry.linked_resource, linked);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn logging() -> anyhow::Result<()> {
        let project_id = std::env::var("GOOGLE_CLOUD_PROJECT")?;
        user_guide_samples::logging::sample(&project_id, "us").await
    }
}
