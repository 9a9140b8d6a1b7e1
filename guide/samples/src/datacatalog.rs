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

//! Examples showing how to find Data Catalog entries.

use google_cloud_datacatalog_v1::client::DataCatalog;
use google_cloud_datacatalog_v1::model::Entry;
use google_cloud_gax as gax;

// ANCHOR: lookup_entry
/// Finds and prints the Data Catalog entry for a resource in another Google
/// Cloud service.
///
/// # Parameters
/// - `linked_resource`: the full name of the resource, for example
///   `//bigquery.googleapis.com/projects/my-project/datasets/my_dataset`.
pub async fn lookup_entry(client: &DataCatalog, linked_resource: &str) -> gax::Result<Entry> {
    let entry = client
        .lookup_entry()
        .set_linked_resource(linked_resource)
        .send()
        .await?;
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = print_entry(&entry, &mut stdout) {
        tracing::warn!("cannot print entry {}: {e}", entry.name);
    }
    Ok(entry)
}
// ANCHOR_END: lookup_entry

/// Writes a short description of `entry` to `out`.
pub fn print_entry<W: std::io::Write>(entry: &Entry, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Entry name: {}", entry.name)?;
    writeln!(out, "Linked resource: {}", entry.linked_resource)?;
    if !entry.fully_qualified_name.is_empty() {
        writeln!(out, "Fully qualified name: {}", entry.fully_qualified_name)?;
    }
    if let Some(t) = entry.r#type() {
        writeln!(out, "Entry type: {t}")?;
    }
    Ok(())
}
// ANCHOR_END: lookup_entry

/// Returns the linked resource name of a BigQuery dataset.
pub fn bigquery_dataset(project_id: &str, dataset_id: &str) -> String {
    format!("//bigquery.googleapis.com/projects/{project_id}/datasets/{dataset_id}")
}

/// Returns the linked resource name of a BigQuery table.
pub fn bigquery_table(project_id: &str, dataset_id: &str, table_id: &str) -> String {
    format!(
        "{}/tables/{table_id}",
        bigquery_dataset(project_id, dataset_id)
    )
}
