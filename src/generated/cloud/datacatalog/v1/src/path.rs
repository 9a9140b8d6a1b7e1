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

/// A Google Cloud location that holds Data Catalog resources.
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

/// The resource name template for [EntryGroupName].
pub const ENTRY_GROUP_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/entryGroups/{entry_group}");

/// A logical grouping of entries.
///
/// The resource name has the form `projects/{project}/locations/{location}/entryGroups/{entry_group}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntryGroupName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `entry_group` component.
    pub entry_group: std::string::String,
}

impl EntryGroupName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        entry_group: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            entry_group: entry_group.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = ENTRY_GROUP_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            entry_group: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        ENTRY_GROUP_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.entry_group.as_str()])
    }
}

impl std::str::FromStr for EntryGroupName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/entryGroups/{entry_group}` resource name.
pub fn entry_group_path(
    project: &str,
    location: &str,
    entry_group: &str,
) -> path_template::Result<std::string::String> {
    ENTRY_GROUP_NAME_TEMPLATE.render(&[project, location, entry_group])
}

/// The resource name template for [EntryName].
pub const ENTRY_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/entryGroups/{entry_group}/entries/{entry}");

/// Metadata about a resource in Google Cloud or elsewhere.
///
/// The resource name has the form `projects/{project}/locations/{location}/entryGroups/{entry_group}/entries/{entry}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntryName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `entry_group` component.
    pub entry_group: std::string::String,
    /// The `entry` component.
    pub entry: std::string::String,
}

impl EntryName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        entry_group: impl std::convert::Into<std::string::String>,
        entry: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            entry_group: entry_group.into(),
            entry: entry.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = ENTRY_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            entry_group: values.next().unwrap_or_default(),
            entry: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        ENTRY_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.entry_group.as_str(), self.entry.as_str()])
    }
}

impl std::str::FromStr for EntryName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/entryGroups/{entry_group}/entries/{entry}` resource name.
pub fn entry_path(
    project: &str,
    location: &str,
    entry_group: &str,
    entry: &str,
) -> path_template::Result<std::string::String> {
    ENTRY_NAME_TEMPLATE.render(&[project, location, entry_group, entry])
}

/// The resource name template for [TagName].
pub const TAG_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/entryGroups/{entry_group}/entries/{entry}/tags/{tag}");

/// Custom metadata attached to an entry or entry group.
///
/// The resource name has the form `projects/{project}/locations/{location}/entryGroups/{entry_group}/entries/{entry}/tags/{tag}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `entry_group` component.
    pub entry_group: std::string::String,
    /// The `entry` component.
    pub entry: std::string::String,
    /// The `tag` component.
    pub tag: std::string::String,
}

impl TagName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        entry_group: impl std::convert::Into<std::string::String>,
        entry: impl std::convert::Into<std::string::String>,
        tag: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            entry_group: entry_group.into(),
            entry: entry.into(),
            tag: tag.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = TAG_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            entry_group: values.next().unwrap_or_default(),
            entry: values.next().unwrap_or_default(),
            tag: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        TAG_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.entry_group.as_str(), self.entry.as_str(), self.tag.as_str()])
    }
}

impl std::str::FromStr for TagName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/entryGroups/{entry_group}/entries/{entry}/tags/{tag}` resource name.
pub fn tag_path(
    project: &str,
    location: &str,
    entry_group: &str,
    entry: &str,
    tag: &str,
) -> path_template::Result<std::string::String> {
    TAG_NAME_TEMPLATE.render(&[project, location, entry_group, entry, tag])
}

/// The resource name template for [TagTemplateName].
pub const TAG_TEMPLATE_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/tagTemplates/{tag_template}");

/// The template used to create tags.
///
/// The resource name has the form `projects/{project}/locations/{location}/tagTemplates/{tag_template}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagTemplateName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `tag_template` component.
    pub tag_template: std::string::String,
}

impl TagTemplateName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        tag_template: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            tag_template: tag_template.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = TAG_TEMPLATE_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            tag_template: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        TAG_TEMPLATE_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.tag_template.as_str()])
    }
}

impl std::str::FromStr for TagTemplateName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/tagTemplates/{tag_template}` resource name.
pub fn tag_template_path(
    project: &str,
    location: &str,
    tag_template: &str,
) -> path_template::Result<std::string::String> {
    TAG_TEMPLATE_NAME_TEMPLATE.render(&[project, location, tag_template])
}

/// The resource name template for [TagTemplateFieldName].
pub const TAG_TEMPLATE_FIELD_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/locations/{location}/tagTemplates/{tag_template}/fields/{field}");

/// A single field within a tag template.
///
/// The resource name has the form `projects/{project}/locations/{location}/tagTemplates/{tag_template}/fields/{field}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TagTemplateFieldName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `location` component.
    pub location: std::string::String,
    /// The `tag_template` component.
    pub tag_template: std::string::String,
    /// The `field` component.
    pub field: std::string::String,
}

impl TagTemplateFieldName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        location: impl std::convert::Into<std::string::String>,
        tag_template: impl std::convert::Into<std::string::String>,
        field: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            location: location.into(),
            tag_template: tag_template.into(),
            field: field.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = TAG_TEMPLATE_FIELD_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            location: values.next().unwrap_or_default(),
            tag_template: values.next().unwrap_or_default(),
            field: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        TAG_TEMPLATE_FIELD_NAME_TEMPLATE.render(&[self.project.as_str(), self.location.as_str(), self.tag_template.as_str(), self.field.as_str()])
    }
}

impl std::str::FromStr for TagTemplateFieldName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/locations/{location}/tagTemplates/{tag_template}/fields/{field}` resource name.
pub fn tag_template_field_path(
    project: &str,
    location: &str,
    tag_template: &str,
    field: &str,
) -> path_template::Result<std::string::String> {
    TAG_TEMPLATE_FIELD_NAME_TEMPLATE.render(&[project, location, tag_template, field])
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
    fn entry_group_path_render() -> TestResult {
        let got = entry_group_path("value0", "value1", "value2")?;
        assert_eq!(got, "projects/value0/locations/value1/entryGroups/value2");
        let name = EntryGroupName::new("value0", "value1", "value2");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn entry_group_path_parse() -> TestResult {
        let got = EntryGroupName::parse("projects/value0/locations/value1/entryGroups/value2")?;
        assert_eq!(got, EntryGroupName::new("value0", "value1", "value2"));
        let err = EntryGroupName::parse("invalid/projects/value0/locations/value1/entryGroups/value2");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn entry_group_path_rejects_child() {
        let child = "projects/value0/locations/value1/entryGroups/value2/children/child0";
        let got = EntryGroupName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!ENTRY_GROUP_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn entry_group_path_empty_component() {
        let got = entry_group_path("", "value1", "value2");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn entry_path_render() -> TestResult {
        let got = entry_path("value0", "value1", "value2", "value3")?;
        assert_eq!(got, "projects/value0/locations/value1/entryGroups/value2/entries/value3");
        let name = EntryName::new("value0", "value1", "value2", "value3");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn entry_path_parse() -> TestResult {
        let got = EntryName::parse("projects/value0/locations/value1/entryGroups/value2/entries/value3")?;
        assert_eq!(got, EntryName::new("value0", "value1", "value2", "value3"));
        let err = EntryName::parse("invalid/projects/value0/locations/value1/entryGroups/value2/entries/value3");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn entry_path_rejects_child() {
        let child = "projects/value0/locations/value1/entryGroups/value2/entries/value3/children/child0";
        let got = EntryName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!ENTRY_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn entry_path_empty_component() {
        let got = entry_path("", "value1", "value2", "value3");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn tag_path_render() -> TestResult {
        let got = tag_path("value0", "value1", "value2", "value3", "value4")?;
        assert_eq!(got, "projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4");
        let name = TagName::new("value0", "value1", "value2", "value3", "value4");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn tag_path_parse() -> TestResult {
        let got = TagName::parse("projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4")?;
        assert_eq!(got, TagName::new("value0", "value1", "value2", "value3", "value4"));
        let err = TagName::parse("invalid/projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn tag_path_rejects_child() {
        let child = "projects/value0/locations/value1/entryGroups/value2/entries/value3/tags/value4/children/child0";
        let got = TagName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!TAG_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn tag_path_empty_component() {
        let got = tag_path("", "value1", "value2", "value3", "value4");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn tag_template_path_render() -> TestResult {
        let got = tag_template_path("value0", "value1", "value2")?;
        assert_eq!(got, "projects/value0/locations/value1/tagTemplates/value2");
        let name = TagTemplateName::new("value0", "value1", "value2");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn tag_template_path_parse() -> TestResult {
        let got = TagTemplateName::parse("projects/value0/locations/value1/tagTemplates/value2")?;
        assert_eq!(got, TagTemplateName::new("value0", "value1", "value2"));
        let err = TagTemplateName::parse("invalid/projects/value0/locations/value1/tagTemplates/value2");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn tag_template_path_rejects_child() {
        let child = "projects/value0/locations/value1/tagTemplates/value2/children/child0";
        let got = TagTemplateName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!TAG_TEMPLATE_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn tag_template_path_empty_component() {
        let got = tag_template_path("", "value1", "value2");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn tag_template_field_path_render() -> TestResult {
        let got = tag_template_field_path("value0", "value1", "value2", "value3")?;
        assert_eq!(got, "projects/value0/locations/value1/tagTemplates/value2/fields/value3");
        let name = TagTemplateFieldName::new("value0", "value1", "value2", "value3");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn tag_template_field_path_parse() -> TestResult {
        let got = TagTemplateFieldName::parse("projects/value0/locations/value1/tagTemplates/value2/fields/value3")?;
        assert_eq!(got, TagTemplateFieldName::new("value0", "value1", "value2", "value3"));
        let err = TagTemplateFieldName::parse("invalid/projects/value0/locations/value1/tagTemplates/value2/fields/value3");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn tag_template_field_path_rejects_child() {
        let child = "projects/value0/locations/value1/tagTemplates/value2/fields/value3/children/child0";
        let got = TagTemplateFieldName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!TAG_TEMPLATE_FIELD_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn tag_template_field_path_empty_component() {
        let got = tag_template_field_path("", "value1", "value2", "value3");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }
}
