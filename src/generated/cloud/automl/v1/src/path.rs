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
//
// Code generated by sidekick. DO NOT EDIT.

//! Resource names used by this crate.

/// The resource name template for [LocationName].
pub const LOCATION_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}");

/// A Google Cloud location.
///
/// The resource name has the form `projects/{project}/locations/{location}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocationName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
}

impl LocationName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = LOCATION_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        LOCATION_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str()])
    }
}

impl std::str::FromStr for LocationName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}` resource name.
pub fn location_path(
    project: &str,
    location: &str,
) -> path_template::Result<std::string::String> {
    LOCATION_NAME_TEMPLATE.render(&[project, location])
}

/// The resource name template for [DatasetName].
pub const DATASET_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/datasets/{dataset}");

/// A workspace for a single machine learning problem.
///
/// The resource name has the form `projects/{project}/locations/{location}/datasets/{dataset}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DatasetName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `dataset` component.
    pub dataset: std::string::String,
}

impl DatasetName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        dataset: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            dataset: dataset.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = DATASET_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            dataset: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        DATASET_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.dataset.as_str()])
    }
}

impl std::str::FromStr for DatasetName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/datasets/{dataset}` resource name.
pub fn dataset_path(
    project: &str,
    location: &str,
    dataset: &str,
) -> path_template::Result<std::string::String> {
    DATASET_NAME_TEMPLATE.render(&[project, location, dataset])
}

/// The resource name template for [ModelName].
pub const MODEL_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/models/{model}");

/// A trained machine learning model.
///
/// The resource name has the form `projects/{project}/locations/{location}/models/{model}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `model` component.
    pub model: std::string::String,
}

impl ModelName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        model: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            model: model.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = MODEL_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            model: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        MODEL_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.model.as_str()])
    }
}

impl std::str::FromStr for ModelName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/models/{model}` resource name.
pub fn model_path(
    project: &str,
    location: &str,
    model: &str,
) -> path_template::Result<std::string::String> {
    MODEL_NAME_TEMPLATE.render(&[project, location, model])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn location_path_render() -> TestResult {
        let got = location_path("value0", "value1")?;
        assert_eq!(got, "projects/value0/locations/value1");
        let name = LocationName::new("value0", "value1");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn location_path_parse() -> TestResult {
        let got = LocationName::parse("projects/value0/locations/value1")?;
        assert_eq!(got, LocationName::new("value0", "value1"));
        let err = LocationName::parse("invalid/projects/value0/locations/value1");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn location_path_rejects_child() {
        let child = "projects/value0/locations/value1/children/child0";
        let got = LocationName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!LOCATION_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn location_path_empty_component() {
        let got = location_path("", "value1");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn dataset_path_render() -> TestResult {
        let got = dataset_path("value0", "value1", "value2")?;
        assert_eq!(got, "projects/value0/locations/value1/datasets/value2");
        let name = DatasetName::new("value0", "value1", "value2");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn dataset_path_parse() -> TestResult {
        let got = DatasetName::parse("projects/value0/locations/value1/datasets/value2")?;
        assert_eq!(got, DatasetName::new("value0", "value1", "value2"));
        let err = DatasetName::parse("invalid/projects/value0/locations/value1/datasets/value2");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn dataset_path_rejects_child() {
        let child = "projects/value0/locations/value1/datasets/value2/children/child0";
        let got = DatasetName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!DATASET_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn dataset_path_empty_component() {
        let got = dataset_path("", "value1", "value2");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn model_path_render() -> TestResult {
        let got = model_path("value0", "value1", "value2")?;
        assert_eq!(got, "projects/value0/locations/value1/models/value2");
        let name = ModelName::new("value0", "value1", "value2");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn model_path_parse() -> TestResult {
        let got = ModelName::parse("projects/value0/locations/value1/models/value2")?;
        assert_eq!(got, ModelName::new("value0", "value1", "value2"));
        let err = ModelName::parse("invalid/projects/value0/locations/value1/models/value2");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn model_path_rejects_child() {
        let child = "projects/value0/locations/value1/models/value2/children/child0";
        let got = ModelName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!MODEL_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn model_path_empty_component() {
        let got = model_path("", "value1", "value2");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }
}
