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

//! Bind request fields into request URIs.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and must match the format declared by the service. Some RPCs
//! accept several formats, each mapped to a different URI. The generated
//! transports try each URI in order, and report all the mismatches if none
//! of them apply.

use gax::error::binding::{BindingError, PathMismatch, SubstitutionFail, SubstitutionMismatch};

/// A request field bound into a URI.
///
/// The tuple contains the field name (nested fields are `.`-separated), the
/// field value, and the expected format of the value, for example
/// `projects/*/locations/*`.
pub type Variable<'a> = (&'static str, &'a str, &'static str);

/// Substitutes `variables` into the `{}` placeholders in `template`.
///
/// # Example
/// ```
/// # use google_cloud_path_template::binding::bind;
/// let path = bind(
///     "/v1/{}/entries",
///     &[("parent", "projects/p/locations/l/entryGroups/g", "projects/*/locations/*/entryGroups/*")],
/// );
/// assert_eq!(path.ok().as_deref(), Some("/v1/projects/p/locations/l/entryGroups/g/entries"));
/// ```
pub fn bind(template: &'static str, variables: &[Variable<'_>]) -> Result<String, PathMismatch> {
    let subs = variables
        .iter()
        .filter_map(|&(field_name, value, expecting)| {
            let problem = if value.is_empty() {
                SubstitutionFail::UnsetExpecting(expecting)
            } else if !matches_format(value, expecting) {
                SubstitutionFail::MismatchExpecting(value.to_string(), expecting)
            } else {
                return None;
            };
            Some(SubstitutionMismatch {
                field_name,
                problem,
            })
        })
        .collect::<Vec<_>>();
    if !subs.is_empty() {
        return Err(PathMismatch { subs });
    }
    let mut pieces = template.split("{}");
    let mut path = pieces.next().unwrap_or_default().to_string();
    for ((_, value, _), piece) in variables.iter().zip(pieces) {
        path.push_str(value);
        path.push_str(piece);
    }
    Ok(path)
}

/// Returns the first candidate that bound successfully.
///
/// If no candidate binds, returns a [binding][gax::error::Error::binding]
/// error with the mismatches for each candidate.
pub fn first_match<T, const N: usize>(
    candidates: [Result<T, PathMismatch>; N],
) -> gax::Result<T> {
    let mut paths = Vec::with_capacity(N);
    for candidate in candidates {
        match candidate {
            Ok(v) => return Ok(v),
            Err(e) => paths.push(e),
        }
    }
    Err(gax::error::Error::binding(BindingError { paths }))
}

// `*` matches a single non-empty segment, `**` matches one or more trailing
// segments, any other segment must match literally.
fn matches_format(value: &str, format: &str) -> bool {
    let mut parts = value.split('/');
    for needle in format.split('/') {
        if needle == "**" {
            let rest = parts.by_ref().collect::<Vec<_>>();
            return !rest.is_empty() && rest.iter().all(|p| !p.is_empty());
        }
        match parts.next() {
            Some(p) if needle == "*" && !p.is_empty() => {}
            Some(p) if needle != "*" && needle == p => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("projects/p", "projects/*", true)]
    #[test_case("projects/p/agent", "projects/*/agent", true)]
    #[test_case("projects/p/agent", "projects/*", false)]
    #[test_case("projects/", "projects/*", false)]
    #[test_case("projects", "projects/*", false)]
    #[test_case("projects/p/", "projects/*", false)]
    #[test_case("locations/l", "projects/*", false)]
    #[test_case("abc", "*", true)]
    #[test_case("a/b", "*", false)]
    #[test_case("projects/p/notes/a/b", "projects/*/**", true)]
    #[test_case("projects/p", "projects/*/**", false)]
    #[test_case("projects/p/notes//b", "projects/*/**", false)]
    fn format(value: &str, format: &str, want: bool) {
        assert_eq!(matches_format(value, format), want, "{value} ~ {format}");
    }

    #[test]
    fn bind_success() {
        let got = bind(
            "/v2/controller/debuggees/{}/breakpoints/{}",
            &[("debuggee_id", "d-123", "*"), ("breakpoint.id", "b-456", "*")],
        );
        assert_eq!(
            got,
            Ok("/v2/controller/debuggees/d-123/breakpoints/b-456".to_string())
        );
    }

    #[test]
    fn bind_no_variables() {
        let got = bind("/v1/catalog:search", &[]);
        assert_eq!(got, Ok("/v1/catalog:search".to_string()));
    }

    #[test]
    fn bind_mismatch() {
        let got = bind(
            "/v1/{}/tags/{}",
            &[
                ("parent", "", "projects/*/locations/*"),
                ("tag", "bad/value", "*"),
            ],
        );
        let want = PathMismatch {
            subs: vec![
                SubstitutionMismatch {
                    field_name: "parent",
                    problem: SubstitutionFail::UnsetExpecting("projects/*/locations/*"),
                },
                SubstitutionMismatch {
                    field_name: "tag",
                    problem: SubstitutionFail::MismatchExpecting("bad/value".to_string(), "*"),
                },
            ],
        };
        assert_eq!(got, Err(want));
    }

    #[test]
    fn first_match_success() -> anyhow::Result<()> {
        let got = first_match([
            bind("/v2/{}/intents", &[("parent", "projects/p/agent/environments/e", "projects/*/agent")]),
            bind(
                "/v2/{}/intents",
                &[("parent", "projects/p/agent/environments/e", "projects/*/agent/environments/*")],
            ),
        ])?;
        assert_eq!(got, "/v2/projects/p/agent/environments/e/intents");
        Ok(())
    }

    #[test]
    fn first_match_error() {
        let got = first_match([
            bind("/v2/{}/intents", &[("parent", "", "projects/*/agent")]),
            bind("/v2/{}/intents", &[("parent", "", "projects/*/agent/environments/*")]),
        ]);
        let err = got.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let source = err.source().and_then(|e| e.downcast_ref::<BindingError>());
        assert!(
            matches!(source, Some(BindingError { paths }) if paths.len() == 2),
            "{err:?}"
        );
    }
}
