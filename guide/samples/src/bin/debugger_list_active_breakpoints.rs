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
    use google_cloud_debugger_v2::client::Controller2;

    tracing_subscriber::fmt::init();
    let debuggee_id = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: debugger_list_active_breakpoints DEBUGGEE_ID"))?;

    let client = Controller2::builder().build().await?;
    let breakpoints =
        user_guide_samples::debugger::list_active_breakpoints(&client, &debuggee_id).await?;
    for breakpoint in breakpoints {
        println!("{breakpoint:?}");
    }
    Ok(())
}
