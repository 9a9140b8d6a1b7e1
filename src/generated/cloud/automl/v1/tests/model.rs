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

#[cfg(test)]
mod tests {
    use google_cloud_automl_v1::model::{
        DeployModelRequest, ImageClassificationModelDeploymentMetadata,
        ImageObjectDetectionModelDeploymentMetadata,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test_case(json!(3); "number")]
    #[test_case(json!("3"); "string")]
    fn node_count(input: Value) -> Result {
        let got = serde_json::from_value::<ImageClassificationModelDeploymentMetadata>(
            json!({"nodeCount": input.clone()}),
        )?;
        assert_eq!(got.node_count, 3);
        let got = serde_json::from_value::<ImageObjectDetectionModelDeploymentMetadata>(
            json!({"nodeCount": input}),
        )?;
        assert_eq!(got.node_count, 3);
        Ok(())
    }

    #[test]
    fn node_count_in_deploy_request() -> Result {
        let request = DeployModelRequest::new()
            .set_name("projects/p/locations/us-central1/models/m")
            .set_image_classification_model_deployment_metadata(
                ImageClassificationModelDeploymentMetadata::new().set_node_count(2),
            );
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "name": "projects/p/locations/us-central1/models/m",
                "imageClassificationModelDeploymentMetadata": {"nodeCount": "2"},
            })
        );
        let parsed = serde_json::from_value::<DeployModelRequest>(json!({
            "name": "projects/p/locations/us-central1/models/m",
            "imageClassificationModelDeploymentMetadata": {"nodeCount": 2},
        }))?;
        assert_eq!(parsed, request);
        Ok(())
    }
}
