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

//! Examples showing how a debug agent tracks the active breakpoints.

use google_cloud_debugger_v2::client::Controller2;
use google_cloud_debugger_v2::model::Breakpoint;
use google_cloud_gax as gax;

// ANCHOR: list_active_breakpoints
/// Returns the active breakpoints of a debuggee.
///
/// The first call returns the current list and a wait token. The second call
/// presents that token and blocks until the list changes. If the wait expires
/// first the list from the first call is still current.
pub async fn list_active_breakpoints(
    client: &Controller2,
    debuggee_id: &str,
) -> gax::Result<Vec<Breakpoint>> {
    let initial = client
        .list_active_breakpoints()
        .set_debuggee_id(debuggee_id)
        .set_success_on_timeout(true)
        .send()
        .await?;
    tracing::info!(
        "debuggee {debuggee_id} has {} active breakpoints",
        initial.breakpoints.len()
    );

    let changed = client
        .list_active_breakpoints()
        .set_debuggee_id(debuggee_id)
        .set_wait_token(initial.next_wait_token)
        .set_success_on_timeout(true)
        .send()
        .await?;
    if changed.wait_expired {
        return Ok(initial.breakpoints);
    }
    Ok(changed.breakpoints)
}
// ANCHOR_END: list_active_breakpoints
