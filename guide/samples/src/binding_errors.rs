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

//! Examples showing how request fields are validated before any network I/O.

use google_cloud_datacatalog_v1 as datacatalog;
use google_cloud_gax as gax;
use std::error::Error as _;

/// Returns the binding error for a request with a missing resource name.
pub async fn binding_fail(client: &datacatalog::client::DataCatalog) -> crate::Result<()> {
    // ANCHOR: inspect
    // ANCHOR: request
    let entry = client
        .get_entry()
        //.set_name("projects/my-project/locations/us/entryGroups/my-group/entries/my-entry")
        .send()
        .await;
    // ANCHOR_END: request

    use gax::error::binding::BindingError;
    let e = entry.err().ok_or("expected an error")?;
    if !e.is_binding() {
        return Err(format!("expected a binding error, got {e:?}").into());
    }
    let _ = e
        .source()
        .and_then(|e| e.downcast_ref::<BindingError>())
        .ok_or("the source should be a BindingError")?;
    // ANCHOR_END: inspect

    Ok(())
}

/// Shows that the same RPC accepts more than one resource name format.
///
/// `CreateTag` accepts tags on entries and on entry groups.
pub async fn binding_success(client: &datacatalog::client::DataCatalog) -> crate::Result<()> {
    let tag = datacatalog::model::Tag::new()
        .set_template("projects/my-project/locations/us/tagTemplates/my-template");

    // ANCHOR: request-success-1
    let result = client
        .create_tag()
        .set_parent("projects/my-project/locations/us/entryGroups/my-group/entries/my-entry")
        .set_tag(tag.clone())
        .send()
        .await;
    // ANCHOR_END: request-success-1
    if let Err(e) = result {
        if e.is_binding() {
            return Err(format!("entry parent should bind: {e:?}").into());
        }
    }

    // ANCHOR: request-success-2
    let result = client
        .create_tag()
        .set_parent("projects/my-project/locations/us/entryGroups/my-group")
        .set_tag(tag)
        .send()
        .await;
    // ANCHOR_END: request-success-2
    if let Err(e) = result {
        if e.is_binding() {
            return Err(format!("entry group parent should bind: {e:?}").into());
        }
    }

    Ok(())
}
