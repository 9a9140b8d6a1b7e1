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

/// The resource name template for [AgentName].
pub const AGENT_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/agent");

/// A Dialogflow agent.
///
/// The resource name has the form `projects/{project}/agent`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AgentName {
    /// The `project` component.
    pub project: std::string::String,
}

impl AgentName {
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
        let values = AGENT_NAME_TEMPLATE.parse(name)?;
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
        AGENT_NAME_TEMPLATE.render(&[self.project.as_str()])
    }
}

impl std::str::FromStr for AgentName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/agent` resource name.
pub fn agent_path(
    project: &str,
) -> path_template::Result<std::string::String> {
    AGENT_NAME_TEMPLATE.render(&[project])
}

/// The resource name template for [IntentName].
pub const INTENT_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/agent/intents/{intent}");

/// An intent within an agent.
///
/// The resource name has the form `projects/{project}/agent/intents/{intent}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntentName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `intent` component.
    pub intent: std::string::String,
}

impl IntentName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        intent: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            intent: intent.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = INTENT_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            intent: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        INTENT_NAME_TEMPLATE.render(&[self.project.as_str(), self.intent.as_str()])
    }
}

impl std::str::FromStr for IntentName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/agent/intents/{intent}` resource name.
pub fn intent_path(
    project: &str,
    intent: &str,
) -> path_template::Result<std::string::String> {
    INTENT_NAME_TEMPLATE.render(&[project, intent])
}

/// The resource name template for [SessionContextName].
pub const SESSION_CONTEXT_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/agent/sessions/{session}/contexts/{context}");

/// A conversation context, scoped to a session.
///
/// The resource name has the form `projects/{project}/agent/sessions/{session}/contexts/{context}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SessionContextName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `session` component.
    pub session: std::string::String,
    /// The `context` component.
    pub context: std::string::String,
}

impl SessionContextName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        session: impl std::convert::Into<std::string::String>,
        context: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            session: session.into(),
            context: context.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = SESSION_CONTEXT_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            session: values.next().unwrap_or_default(),
            context: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        SESSION_CONTEXT_NAME_TEMPLATE.render(&[self.project.as_str(), self.session.as_str(), self.context.as_str()])
    }
}

impl std::str::FromStr for SessionContextName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/agent/sessions/{session}/contexts/{context}` resource name.
pub fn session_context_path(
    project: &str,
    session: &str,
    context: &str,
) -> path_template::Result<std::string::String> {
    SESSION_CONTEXT_NAME_TEMPLATE.render(&[project, session, context])
}

/// The resource name template for [EnvironmentUserSessionContextName].
pub const ENVIRONMENT_USER_SESSION_CONTEXT_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}/contexts/{context}");

/// A conversation context, scoped to a session.
///
/// The resource name has the form `projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}/contexts/{context}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EnvironmentUserSessionContextName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `environment` component.
    pub environment: std::string::String,
    /// The `user` component.
    pub user: std::string::String,
    /// The `session` component.
    pub session: std::string::String,
    /// The `context` component.
    pub context: std::string::String,
}

impl EnvironmentUserSessionContextName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        environment: impl std::convert::Into<std::string::String>,
        user: impl std::convert::Into<std::string::String>,
        session: impl std::convert::Into<std::string::String>,
        context: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
            user: user.into(),
            session: session.into(),
            context: context.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = ENVIRONMENT_USER_SESSION_CONTEXT_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            environment: values.next().unwrap_or_default(),
            user: values.next().unwrap_or_default(),
            session: values.next().unwrap_or_default(),
            context: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        ENVIRONMENT_USER_SESSION_CONTEXT_NAME_TEMPLATE.render(&[self.project.as_str(), self.environment.as_str(), self.user.as_str(), self.session.as_str(), self.context.as_str()])
    }
}

impl std::str::FromStr for EnvironmentUserSessionContextName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}/contexts/{context}` resource name.
pub fn environment_user_session_context_path(
    project: &str,
    environment: &str,
    user: &str,
    session: &str,
    context: &str,
) -> path_template::Result<std::string::String> {
    ENVIRONMENT_USER_SESSION_CONTEXT_NAME_TEMPLATE.render(&[project, environment, user, session, context])
}

/// A conversation context, scoped to a session.
///
/// This resource accepts more than one name format:
/// - `projects/{project}/agent/sessions/{session}/contexts/{context}`
/// - `projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}/contexts/{context}`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContextName {
    /// `projects/{project}/agent/sessions/{session}/contexts/{context}`
    Session(SessionContextName),
    /// `projects/{project}/agent/environments/{environment}/users/{user}/sessions/{session}/contexts/{context}`
    EnvironmentUserSession(EnvironmentUserSessionContextName),
}

impl ContextName {
    /// Parses a resource name in any of the accepted formats.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        if let Ok(n) = SessionContextName::parse(name) {
            return Ok(Self::Session(n));
        }
        EnvironmentUserSessionContextName::parse(name).map(Self::EnvironmentUserSession)
    }

    /// Formats the resource name.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        match self {
            Self::Session(n) => n.render(),
            Self::EnvironmentUserSession(n) => n.render(),
        }
    }
}

impl std::str::FromStr for ContextName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The resource name template for [EnvironmentName].
pub const ENVIRONMENT_NAME_TEMPLATE: path_template::PathTemplate =
    path_template::PathTemplate::new("projects/{project}/agent/environments/{environment}");

/// A published environment of an agent.
///
/// The resource name has the form `projects/{project}/agent/environments/{environment}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EnvironmentName {
    /// The `project` component.
    pub project: std::string::String,
    /// The `environment` component.
    pub environment: std::string::String,
}

impl EnvironmentName {
    /// Creates a new resource name from its components.
    pub fn new(
        project: impl std::convert::Into<std::string::String>,
        environment: impl std::convert::Into<std::string::String>,
    ) -> Self {
        Self {
            project: project.into(),
            environment: environment.into(),
        }
    }

    /// Parses a resource name.
    pub fn parse(name: &str) -> path_template::Result<Self> {
        let values = ENVIRONMENT_NAME_TEMPLATE.parse(name)?;
        let mut values = values.into_iter();
        Ok(Self {
            project: values.next().unwrap_or_default(),
            environment: values.next().unwrap_or_default(),
        })
    }

    /// Formats the resource name.
    ///
    /// Fails if any component is empty, or if a component other than the
    /// last one contains a `/`.
    pub fn render(&self) -> path_template::Result<std::string::String> {
        ENVIRONMENT_NAME_TEMPLATE.render(&[self.project.as_str(), self.environment.as_str()])
    }
}

impl std::str::FromStr for EnvironmentName {
    type Err = path_template::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns a fully-qualified `projects/{project}/agent/environments/{environment}` resource name.
pub fn environment_path(
    project: &str,
    environment: &str,
) -> path_template::Result<std::string::String> {
    ENVIRONMENT_NAME_TEMPLATE.render(&[project, environment])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn agent_path_render() -> TestResult {
        let got = agent_path("value0")?;
        assert_eq!(got, "projects/value0/agent");
        let name = AgentName::new("value0");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn agent_path_parse() -> TestResult {
        let got = AgentName::parse("projects/value0/agent")?;
        assert_eq!(got, AgentName::new("value0"));
        let err = AgentName::parse("invalid/projects/value0/agent");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn agent_path_rejects_child() {
        let child = "projects/value0/agent/children/child0";
        let got = AgentName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!AGENT_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn agent_path_empty_component() {
        let got = agent_path("");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn intent_path_render() -> TestResult {
        let got = intent_path("value0", "value1")?;
        assert_eq!(got, "projects/value0/agent/intents/value1");
        let name = IntentName::new("value0", "value1");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn intent_path_parse() -> TestResult {
        let got = IntentName::parse("projects/value0/agent/intents/value1")?;
        assert_eq!(got, IntentName::new("value0", "value1"));
        let err = IntentName::parse("invalid/projects/value0/agent/intents/value1");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn intent_path_rejects_child() {
        let child = "projects/value0/agent/intents/value1/children/child0";
        let got = IntentName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!INTENT_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn intent_path_empty_component() {
        let got = intent_path("", "value1");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn session_context_path_render() -> TestResult {
        let got = session_context_path("value0", "value1", "value2")?;
        assert_eq!(got, "projects/value0/agent/sessions/value1/contexts/value2");
        let name = SessionContextName::new("value0", "value1", "value2");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn session_context_path_parse() -> TestResult {
        let got = SessionContextName::parse("projects/value0/agent/sessions/value1/contexts/value2")?;
        assert_eq!(got, SessionContextName::new("value0", "value1", "value2"));
        let any: ContextName = "projects/value0/agent/sessions/value1/contexts/value2".parse()?;
        assert_eq!(any, ContextName::Session(got));
        let err = SessionContextName::parse("invalid/projects/value0/agent/sessions/value1/contexts/value2");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn session_context_path_rejects_child() {
        let child = "projects/value0/agent/sessions/value1/contexts/value2/children/child0";
        let got = SessionContextName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!SESSION_CONTEXT_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn session_context_path_empty_component() {
        let got = session_context_path("", "value1", "value2");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn environment_user_session_context_path_render() -> TestResult {
        let got = environment_user_session_context_path("value0", "value1", "value2", "value3", "value4")?;
        assert_eq!(got, "projects/value0/agent/environments/value1/users/value2/sessions/value3/contexts/value4");
        let name = EnvironmentUserSessionContextName::new("value0", "value1", "value2", "value3", "value4");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn environment_user_session_context_path_parse() -> TestResult {
        let got = EnvironmentUserSessionContextName::parse("projects/value0/agent/environments/value1/users/value2/sessions/value3/contexts/value4")?;
        assert_eq!(got, EnvironmentUserSessionContextName::new("value0", "value1", "value2", "value3", "value4"));
        let any: ContextName = "projects/value0/agent/environments/value1/users/value2/sessions/value3/contexts/value4".parse()?;
        assert_eq!(any, ContextName::EnvironmentUserSession(got));
        let err = EnvironmentUserSessionContextName::parse("invalid/projects/value0/agent/environments/value1/users/value2/sessions/value3/contexts/value4");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn environment_user_session_context_path_rejects_child() {
        let child = "projects/value0/agent/environments/value1/users/value2/sessions/value3/contexts/value4/children/child0";
        let got = EnvironmentUserSessionContextName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!ENVIRONMENT_USER_SESSION_CONTEXT_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn environment_user_session_context_path_empty_component() {
        let got = environment_user_session_context_path("", "value1", "value2", "value3", "value4");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }

    #[test]
    fn environment_path_render() -> TestResult {
        let got = environment_path("value0", "value1")?;
        assert_eq!(got, "projects/value0/agent/environments/value1");
        let name = EnvironmentName::new("value0", "value1");
        assert_eq!(name.render()?, got);
        Ok(())
    }

    #[test]
    fn environment_path_parse() -> TestResult {
        let got = EnvironmentName::parse("projects/value0/agent/environments/value1")?;
        assert_eq!(got, EnvironmentName::new("value0", "value1"));
        let err = EnvironmentName::parse("invalid/projects/value0/agent/environments/value1");
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }

    #[test]
    fn environment_path_rejects_child() {
        let child = "projects/value0/agent/environments/value1/children/child0";
        let got = EnvironmentName::parse(child);
        assert!(got.is_err(), "{got:?}");
        assert!(!ENVIRONMENT_NAME_TEMPLATE.matches(child));
    }

    #[test]
    fn environment_path_empty_component() {
        let got = environment_path("", "value1");
        assert!(
            matches!(got, Err(path_template::Error::EmptyValue { .. })),
            "{got:?}"
        );
    }
}
