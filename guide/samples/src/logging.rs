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

// ANCHOR: rust_logging
// ANCHOR: rust_logging_parameters
/// # Parameters
/// - `project_id`: the id of a Google Cloud project, or its numeric ID.
///   For example: `my-project`.
/// - `location`: a Data Catalog region, for example `us`.
pub async fn sample(project_id: &str, location: &str) -> anyhow::Result<()> {
    // ANCHOR_END: rust_logging_parameters
    // ANCHOR: rust_logging_use
    use google_cloud_datacatalog_v1::client::DataCatalog;
    use google_cloud_gax::paginator::ItemPaginator;
    // ANCHOR_END: rust_logging_use

    // ANCHOR: rust_logging_init
    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt().try_init();
    // ANCHOR_END: rust_logging_init

    // ANCHOR: rust_logging_client
    let client = DataCatalog::builder().with_tracing().build().await?;
    // ANCHOR_END: rust_logging_client
    // ANCHOR: rust_logging_call
    let mut items = client
        .list_entry_groups()
        .set_parent(format!("projects/{project_id}/locations/{location}"))
        .by_item();
    println!("listing all entry groups in project {project_id}");
    while let Some(group) = items.next().await.transpose()? {
        println!("  {}", group.name);
    }
    println!("DONE");
    // ANCHOR_END: rust_logging_call
    Ok(())
}
// ANCHOR_END: rust_logging
