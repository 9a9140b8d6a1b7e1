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
    use google_cloud_datacatalog_v1::client::DataCatalog;
    use user_guide_samples::datacatalog;

    tracing_subscriber::fmt::init();
    let mut args = std::env::args().skip(1);
    let project_id = args
        .next()
        .or_else(|| std::env::var("GOOGLE_CLOUD_PROJECT").ok())
        .ok_or_else(|| anyhow::anyhow!("usage: datacatalog_lookup_entry PROJECT DATASET [TABLE]"))?;
    let dataset_id = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: datacatalog_lookup_entry PROJECT DATASET [TABLE]"))?;
    let linked_resource = match args.next() {
        Some(table_id) => datacatalog::bigquery_table(&project_id, &dataset_id, &table_id),
        None => datacatalog::bigquery_dataset(&project_id, &dataset_id),
    };

    let client = DataCatalog::builder().build().await?;
    datacatalog::lookup_entry(&client, &linked_resource).await?;
    Ok(())
}
