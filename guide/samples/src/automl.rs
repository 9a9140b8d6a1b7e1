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

//! Examples showing how to make predictions with AutoML Natural Language.

use google_cloud_automl_v1::client::PredictionService;
use google_cloud_automl_v1::model::{ExamplePayload, TextSnippet};

/// AutoML Natural Language models are only served from this location.
pub const LOCATION: &str = "us-central1";

// ANCHOR: language_sentiment_analysis_predict
/// Predicts the sentiment of `content` using a trained sentiment model.
///
/// # Parameters
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
///   For example: `my-project`.
/// - `model_id`: the id of an AutoML Natural Language sentiment model, for
///   example `TST1234567890`.
/// - `content`: the text to analyze.
/// - `out`: where the predictions are written.
pub async fn language_sentiment_analysis_predict<W>(
    client: &PredictionService,
    project_id: &str,
    model_id: &str,
    content: &str,
    out: &mut W,
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    let response = client
        .predict()
        .set_name(format!(
            "projects/{project_id}/locations/{LOCATION}/models/{model_id}"
        ))
        .set_payload(
            ExamplePayload::new().set_text_snippet(
                TextSnippet::new()
                    .set_content(content)
                    .set_mime_type("text/plain"),
            ),
        )
        .send()
        .await?;

    for annotation in &response.payload {
        writeln!(out, "Predicted class name: {}", annotation.display_name)?;
        if let Some(sentiment) = annotation.text_sentiment() {
            writeln!(out, "Predicted sentiment score: {}", sentiment.sentiment)?;
        }
    }
    Ok(())
}
// ANCHOR_END: language_sentiment_analysis_predict
