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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use google_cloud_automl_v1::client::PredictionService;

    tracing_subscriber::fmt::init();
    let project_id = arg_or_env(1, "AUTOML_PROJECT_ID")?;
    let model_id = arg_or_env(2, "AUTOML_SENTIMENT_MODEL_ID")?;
    let content = std::env::args()
        .nth(3)
        .unwrap_or_else(|| "Hopefully this Claritin kicks in soon".to_string());

    let client = PredictionService::builder().build().await?;
    user_guide_samples::automl::language_sentiment_analysis_predict(
        &client,
        &project_id,
        &model_id,
        &content,
        &mut std::io::stdout(),
    )
    .await
}

fn arg_or_env(position: usize, name: &str) -> anyhow::Result<String> {
    std::env::args()
        .nth(position)
        .or_else(|| std::env::var(name).ok())
        .ok_or_else(|| anyhow::anyhow!("missing argument {position}, or set ${name}"))
}
