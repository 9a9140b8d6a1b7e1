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
    use google_cloud_datacatalog_v1::model::{BigQueryDateShardedSpec, GcsFileSpec};
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;

    type Result = anyhow::Result<()>;

    #[test_case(json!(42); "number")]
    #[test_case(json!("42"); "string")]
    #[test_case(json!(4.2e1); "float")]
    fn gcs_file_spec_size_bytes(input: Value) -> Result {
        let got = serde_json::from_value::<GcsFileSpec>(json!({
            "filePath": "gs://bucket/a/b.txt",
            "sizeBytes": input,
        }))?;
        let want = GcsFileSpec::new()
            .set_file_path("gs://bucket/a/b.txt")
            .set_size_bytes(42);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn int64_serializes_as_string() -> Result {
        let spec = BigQueryDateShardedSpec::new()
            .set_dataset("projects/p/datasets/d")
            .set_shard_count(-9_007_199_254_740_993_i64);
        let got = serde_json::to_value(&spec)?;
        assert_eq!(
            got,
            json!({
                "dataset": "projects/p/datasets/d",
                "shardCount": "-9007199254740993",
            })
        );
        let roundtrip = serde_json::from_value::<BigQueryDateShardedSpec>(got)?;
        assert_eq!(roundtrip, spec);
        Ok(())
    }

    #[test]
    fn int64_default_is_omitted() -> Result {
        let got = serde_json::to_value(GcsFileSpec::new().set_file_path("gs://b/o"))?;
        assert_eq!(got, json!({"filePath": "gs://b/o"}));
        Ok(())
    }

    #[test_case(json!("abc"); "not a number")]
    #[test_case(json!(true); "boolean")]
    fn gcs_file_spec_size_bytes_invalid(input: Value) {
        let got = serde_json::from_value::<GcsFileSpec>(json!({"sizeBytes": input}));
        assert!(got.is_err(), "{got:?}");
    }
}
