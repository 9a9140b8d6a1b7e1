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

//! Google Cloud Client Libraries for Rust - Resource Name Templates
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! Google Cloud resources are identified by names such as
//! `projects/my-project/agent/intents/my-intent`. Each resource type documents
//! the names it accepts using one or more templates, for example
//! `projects/{project}/agent/intents/{intent}`.
//!
//! The client libraries use this crate to build resource names from their
//! components, to split resource names back into their components, and to
//! bind request fields into the request URI.
//!
//! # Example
//! ```
//! # use google_cloud_path_template::PathTemplate;
//! const INTENT: PathTemplate = PathTemplate::new("projects/{project}/agent/intents/{intent}");
//! let name = INTENT.render(&["my-project", "my-intent"])?;
//! assert_eq!(name, "projects/my-project/agent/intents/my-intent");
//! assert_eq!(INTENT.parse(&name)?, vec!["my-project", "my-intent"]);
//! # Ok::<(), google_cloud_path_template::Error>(())
//! ```

pub mod binding;

/// The errors returned when rendering or parsing resource names.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The number of values does not match the number of template variables.
    #[error("the template `{template}` has {expected} variables, but {got} values were provided")]
    ArgumentCount {
        template: &'static str,
        expected: usize,
        got: usize,
    },

    /// A value was empty.
    #[error("the value for `{variable}` in template `{template}` cannot be empty")]
    EmptyValue {
        template: &'static str,
        variable: &'static str,
    },

    /// A value, other than the last value, contained a `/` character.
    #[error("the value for `{variable}` in template `{template}` cannot contain `/`, got `{value}`")]
    ContainsSlash {
        template: &'static str,
        variable: &'static str,
        value: String,
    },

    /// The last value contained an empty segment, such as `a//b` or `a/`.
    #[error("the value for `{variable}` in template `{template}` has an empty segment, got `{value}`")]
    EmptySegment {
        template: &'static str,
        variable: &'static str,
        value: String,
    },

    /// The resource name does not match the template.
    #[error("the name `{name}` does not match the template `{template}`")]
    Mismatch {
        template: &'static str,
        name: String,
    },
}

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Segment {
    Literal(&'static str),
    Variable(&'static str),
    Wildcard,
}

fn segments(pattern: &'static str) -> impl Iterator<Item = Segment> {
    pattern.split('/').map(|s| {
        if s == "*" {
            return Segment::Wildcard;
        }
        match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => Segment::Variable(name),
            None => Segment::Literal(s),
        }
    })
}

/// A resource name template, such as `projects/{project}/agent`.
///
/// Templates contain literal segments, variable segments, and wildcard
/// segments, separated by `/`. Variable segments are written as `{name}`,
/// wildcard segments as `*`.
///
/// Names are matched segment by segment. Variables and wildcards match
/// exactly one non-empty segment.
///
/// Rendering rejects empty values. All values except the last must be a
/// single segment, that is, they cannot contain `/`. The last value may span
/// several segments, none of them empty. Wildcards render as `*`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathTemplate {
    pattern: &'static str,
}

impl PathTemplate {
    /// Creates a new template.
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// The template pattern, as provided in [PathTemplate::new].
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// The names of the template variables, in order.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_path_template::PathTemplate;
    /// let template = PathTemplate::new("projects/{project}/agent/environments/{environment}");
    /// assert_eq!(template.variables(), vec!["project", "environment"]);
    /// ```
    pub fn variables(&self) -> Vec<&'static str> {
        segments(self.pattern)
            .filter_map(|s| match s {
                Segment::Variable(name) => Some(name),
                Segment::Literal(_) | Segment::Wildcard => None,
            })
            .collect()
    }

    /// Substitutes `values`, in order, into the template variables.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_path_template::PathTemplate;
    /// let template = PathTemplate::new("projects/{project}/agent");
    /// assert_eq!(template.render(&["value0"])?, "projects/value0/agent");
    /// assert!(template.render(&["a/b"]).is_ok());
    /// assert!(template.render(&["a/"]).is_err());
    /// assert!(template.render(&[""]).is_err());
    /// # Ok::<(), google_cloud_path_template::Error>(())
    /// ```
    pub fn render(&self, values: &[&str]) -> Result<String> {
        let expected = self.variables().len();
        if expected != values.len() {
            return Err(Error::ArgumentCount {
                template: self.pattern,
                expected,
                got: values.len(),
            });
        }
        let mut values = values.iter().enumerate();
        let mut parts = Vec::new();
        for segment in segments(self.pattern) {
            let variable = match segment {
                Segment::Literal(literal) => {
                    parts.push(literal);
                    continue;
                }
                Segment::Wildcard => {
                    parts.push("*");
                    continue;
                }
                Segment::Variable(variable) => variable,
            };
            let Some((index, value)) = values.next() else {
                break;
            };
            if value.is_empty() {
                return Err(Error::EmptyValue {
                    template: self.pattern,
                    variable,
                });
            }
            if index + 1 != expected && value.contains('/') {
                return Err(Error::ContainsSlash {
                    template: self.pattern,
                    variable,
                    value: value.to_string(),
                });
            }
            if value.split('/').any(str::is_empty) {
                return Err(Error::EmptySegment {
                    template: self.pattern,
                    variable,
                    value: value.to_string(),
                });
            }
            parts.push(*value);
        }
        Ok(parts.join("/"))
    }

    /// Returns the values of the template variables in `name`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_path_template::PathTemplate;
    /// let template = PathTemplate::new("projects/{project}/agent/intents/{intent}");
    /// let values = template.parse("projects/value0/agent/intents/value1")?;
    /// assert_eq!(values, vec!["value0", "value1"]);
    /// assert!(template.parse("projects/value0/agent").is_err());
    /// assert!(template.parse("projects/value0/agent/intents/value1/trainingPhrases/p").is_err());
    /// # Ok::<(), google_cloud_path_template::Error>(())
    /// ```
    pub fn parse(&self, name: &str) -> Result<Vec<String>> {
        let mismatch = || Error::Mismatch {
            template: self.pattern,
            name: name.to_string(),
        };
        let template = segments(self.pattern).collect::<Vec<_>>();
        let parts = name.split('/').collect::<Vec<_>>();
        if parts.len() != template.len() {
            return Err(mismatch());
        }
        let mut values = Vec::new();
        for (segment, part) in template.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if *literal == part => {}
                Segment::Wildcard if !part.is_empty() => {}
                Segment::Variable(_) if !part.is_empty() => values.push(part.to_string()),
                _ => return Err(mismatch()),
            }
        }
        Ok(values)
    }

    /// Returns true if `name` matches the template.
    pub fn matches(&self, name: &str) -> bool {
        self.parse(name).is_ok()
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    const AGENT: PathTemplate = PathTemplate::new("projects/{project}/agent");
    const CONTEXT: PathTemplate = PathTemplate::new(
        "projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}/contexts/{context}",
    );

    #[test]
    fn variables() {
        assert_eq!(AGENT.variables(), vec!["project"]);
        assert_eq!(
            CONTEXT.variables(),
            vec!["project", "environment", "user", "session", "context"]
        );
        assert!(PathTemplate::new("operations").variables().is_empty());
    }

    #[test]
    fn render() -> anyhow::Result<()> {
        assert_eq!(AGENT.render(&["value0"])?, "projects/value0/agent");
        let got = CONTEXT.render(&["value0", "value1", "value2", "value3", "value4"])?;
        assert_eq!(
            got,
            "projects/value0/agent/environments/value1/users/value2/sessions/value3/contexts/value4"
        );
        Ok(())
    }

    #[test_case(&[]; "too few")]
    #[test_case(&["a", "b"]; "too many")]
    fn render_argument_count(values: &[&str]) {
        let got = AGENT.render(values);
        assert!(
            matches!(got, Err(Error::ArgumentCount { expected: 1, got: n, .. }) if n == values.len()),
            "{got:?}"
        );
    }

    #[test]
    fn render_empty() {
        let got = CONTEXT.render(&["p", "", "u", "s", "c"]);
        assert!(
            matches!(
                got,
                Err(Error::EmptyValue {
                    variable: "environment",
                    ..
                })
            ),
            "{got:?}"
        );
    }

    #[test]
    fn render_slash() {
        let got = CONTEXT.render(&["p", "e", "a/b", "s", "c"]);
        assert!(
            matches!(&got, Err(Error::ContainsSlash { variable: "user", value, .. }) if value == "a/b"),
            "{got:?}"
        );
        // The last value may contain slashes.
        let got = CONTEXT.render(&["p", "e", "u", "s", "c/d"]);
        assert!(got.is_ok(), "{got:?}");
    }

    #[test_case("n/"; "trailing")]
    #[test_case("/n"; "leading")]
    #[test_case("a//b"; "inner")]
    fn render_empty_segment(value: &str) {
        let template = PathTemplate::new("projects/{project}/notes/{note}");
        let got = template.render(&["p", value]);
        assert!(
            matches!(&got, Err(Error::EmptySegment { variable: "note", value: v, .. }) if v == value),
            "{got:?}"
        );
    }

    #[test_case(&["p", "n"])]
    #[test_case(&["my-project", "CVE-2025-0001"])]
    fn render_parse_roundtrip(values: &[&str]) -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/{project}/notes/{note}");
        let name = template.render(values)?;
        assert_eq!(template.parse(&name)?, values);
        assert!(template.matches(&name));
        Ok(())
    }

    #[test_case("projects/value0/agent", Some(vec!["value0"]))]
    #[test_case("projects/value0/agent/", None)]
    #[test_case("projects//agent", None)]
    #[test_case("projects/value0", None)]
    #[test_case("projects/value0/agents", None)]
    #[test_case("locations/value0/agent", None)]
    #[test_case("", None)]
    fn parse(input: &str, want: Option<Vec<&str>>) {
        let got = AGENT.parse(input).ok();
        let want = want.map(|v| v.into_iter().map(str::to_string).collect::<Vec<_>>());
        assert_eq!(got, want);
        assert_eq!(AGENT.matches(input), want.is_some());
    }

    #[test_case("projects/p/notes/n")]
    #[test_case("projects/p/occurrences/o")]
    #[test_case("projects/p/locations/l/entryGroups/g")]
    fn parse_rejects_child(input: &str) {
        let template = PathTemplate::new("projects/{project}");
        let got = template.parse(input);
        assert!(matches!(got, Err(Error::Mismatch { .. })), "{got:?}");
        assert!(!template.matches(input));
    }

    #[test]
    fn parse_single_segment_variables() {
        let template = PathTemplate::new("projects/{project}/notes/{note}");
        assert!(template.parse("projects/p/notes/a/b").is_err());
        assert!(template.parse("projects/p/notes/a//b").is_err());
    }

    #[test_case("projects/p/agent", true)]
    #[test_case("projects/other/agent", true)]
    #[test_case("projects//agent", false)]
    #[test_case("projects/p/agent/intents/i", false)]
    #[test_case("projects/p/x/agent", false)]
    fn wildcard(input: &str, want: bool) -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/*/agent");
        assert!(template.variables().is_empty());
        assert_eq!(template.matches(input), want);
        if want {
            assert!(template.parse(input)?.is_empty());
        }
        Ok(())
    }

    #[test]
    fn wildcard_with_variables() -> anyhow::Result<()> {
        let template = PathTemplate::new("projects/*/locations/{location}/entryGroups/{entry_group}");
        assert_eq!(template.variables(), vec!["location", "entry_group"]);
        assert_eq!(
            template.parse("projects/p/locations/l/entryGroups/g")?,
            vec!["l".to_string(), "g".to_string()]
        );
        assert_eq!(
            template.render(&["l", "g"])?,
            "projects/*/locations/l/entryGroups/g"
        );
        Ok(())
    }

    #[test]
    fn parse_error() {
        let got = AGENT.parse("projects/p");
        assert_eq!(
            got,
            Err(Error::Mismatch {
                template: "projects/{project}/agent",
                name: "projects/p".to_string(),
            })
        );
        let fmt = format!("{}", got.unwrap_err());
        assert!(fmt.contains("projects/{project}/agent"), "{fmt}");
    }

    #[test]
    fn display() {
        assert_eq!(AGENT.to_string(), "projects/{project}/agent");
        assert_eq!(AGENT.pattern(), "projects/{project}/agent");
    }
}
