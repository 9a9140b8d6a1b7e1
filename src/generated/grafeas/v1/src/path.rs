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

/// The resource name template for [ProjectName].
pub const PROJECT_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}");

/// A Google Cloud project that stores notes and occurrences.
///
/// The resource name has the form `projects/{project}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ProjectName {
    /// The `project` component.
    pub project: std::string::String,
}

impl ProjectName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = PROJECT_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        PROJECT_NAME_TEMPLATE.render(&[self.project.as_str()])
    }
}

impl std::str::FromStr for ProjectName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}` resource name.
pub fn project_path(
    project: &str,
) -> path_template::Result<std::string::String> {
    PROJECT_NAME_TEMPLATE.render(&[project])
}

/// The resource name template for [NoteName].
pub const NOTE_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/notes/{note}");

/// A type of analysis that can be done for a resource.
///
/// The resource name has the form `projects/{project}/notes/{note}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoteName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `note` component.
    pub note: std::string::String,
}

impl NoteName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        note: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            note: note.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = NOTE_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            note: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        NOTE_NAME_TEMPLATE.render(&[self.project.as_str(), self.note.as_str()])
    }
}

impl std::str::FromStr for NoteName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/notes/{note}` resource name.
pub fn note_path(
    project: &str,
    note: &str,
) -> path_template::Result<std::string::String> {
    NOTE_NAME_TEMPLATE.render(&[project, note])
}

/// The resource name template for [OccurrenceName].
pub const OCCURRENCE_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/occurrences/{occurrence}");

/// An instance of an analysis type that has been found on a resource.
///
/// The resource name has the form `projects/{project}/occurrences/{occurrence}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OccurrenceName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `occurrence` component.
    pub occurrence: std::string::String,
}

impl OccurrenceName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        occurrence: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            occurrence: occurrence.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = OCCURRENCE_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            occurrence: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        OCCURRENCE_NAME_TEMPLATE.render(&[self.project.as_str(), self.occurrence.as_str()])
    }
}

impl std::str::FromStr for OccurrenceName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/occurrences/{occurrence}` resource name.
pub fn occurrence_path(
    project: &str,
    occurrence: &str,
) -> path_template::Result<std::string::String> {
    OCCURRENCE_NAME_TEMPLATE.render(&[project, occurrence])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn project_path_render() -> TestResult {
        let got = project_path("value0")?;
        assert_eq!(got, "projects/value0");
        let name = ProjectName::new("value0");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn project_path_parse() -> TestResult {
        let got = ProjectName::parse("projects/value0")?;
        assert_eq!(got, ProjectName::new("value0"));
        let err = ProjectName::parse("invalid/projects/value0");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn project_path_rejects_child() {
        let child = "projects/value0/children/child0";
        let got = ProjectName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!PROJECT_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn project_path_empty_component() {
        let got = project_path("");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn note_path_render() -> TestResult {
        let got = note_path("value0", "value1")?;
        assert_eq!(got, "projects/value0/notes/value1");
        let name = NoteName::new("value0", "value1");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn note_path_parse() -> TestResult {
        let got = NoteName::parse("projects/value0/notes/value1")?;
        assert_eq!(got, NoteName::new("value0", "value1"));
        let err = NoteName::parse("invalid/projects/value0/notes/value1");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn note_path_rejects_child() {
        let child = "projects/value0/notes/value1/children/child0";
        let got = NoteName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!NOTE_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn note_path_empty_component() {
        let got = note_path("", "value1");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn occurrence_path_render() -> TestResult {
        let got = occurrence_path("value0", "value1")?;
        assert_eq!(got, "projects/value0/occurrences/value1");
        let name = OccurrenceName::new("value0", "value1");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn occurrence_path_parse() -> TestResult {
        let got = OccurrenceName::parse("projects/value0/occurrences/value1")?;
        assert_eq!(got, OccurrenceName::new("value0", "value1"));
        let err = OccurrenceName::parse("invalid/projects/value0/occurrences/value1");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn occurrence_path_rejects_child() {
        let child = "projects/value0/occurrences/value1/children/child0";
        let got = OccurrenceName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!OCCURRENCE_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn occurrence_path_empty_component() {
        let got = occurrence_path("", "value1");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }
}
