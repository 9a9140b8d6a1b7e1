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

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Dialogflow contexts are similar to natural language context. If a person
/// says to you "they are orange", you need context in order to understand what
/// "they" is referring to. Similarly, for Dialogflow to handle an end-user
/// expression like that, it needs to be provided with context in order to
/// correctly match an intent.
///
/// Using contexts, you can control the flow of a conversation. You can
/// configure contexts for an intent by setting input and output contexts, which
/// are identified by string names. When an intent is matched, any configured
/// output contexts for that intent become active. While any contexts are
/// active, Dialogflow is more likely to match intents that are configured with
/// input contexts that correspond to the currently active contexts.
///
/// For more information about context, see the [Contexts
/// guide](https://cloud.google.com/dialogflow/docs/contexts-overview).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Context {
    /// Required. The unique identifier of the context. Format: `projects/<Project
    /// ID>/agent/sessions/<Session ID>/contexts/<Context ID>`, or
    /// `projects/<Project ID>/agent/environments/<Environment ID>/users/<User
    /// ID>/sessions/<Session ID>/contexts/<Context ID>`.
    ///
    /// The `Context ID` is always converted to lowercase, may only contain
    /// characters in `a-zA-Z0-9_-%` and may be at most 250 bytes long.
    ///
    /// If `Environment ID` is not specified, we assume default 'draft' environment.
    /// If `User ID` is not specified, we assume default '-' user.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Optional. The number of conversational query requests after which the
    /// context expires. The default is `0`. If set to `0`, the context expires
    /// immediately. Contexts expire automatically after 20 minutes if there are no
    /// matching queries.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub lifespan_count: i32,

    /// Optional. The collection of parameters associated with this context.
    ///
    /// Depending on your protocol or client library language, this is a map,
    /// associative array, symbol table, dictionary, or JSON object composed of a
    /// collection of (MapKey, MapValue) pairs:
    ///
    /// * MapKey type: string
    /// * MapKey value: parameter name
    /// * MapValue type: If parameter's entity type is a composite entity then use
    ///   map, otherwise, depending on the parameter value type, it could be one of
    ///   string, number, boolean, null, list or map.
    /// * MapValue value: If parameter's entity type is a composite entity then use
    ///   map from composite entity property names to property values, otherwise,
    ///   use parameter value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters: std::option::Option<wkt::Struct>,
}

impl Context {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Context::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [lifespan_count][crate::model::Context::lifespan_count].
    pub fn set_lifespan_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.lifespan_count = v.into();
        self
    }

    /// Sets the value of [parameters][crate::model::Context::parameters].
    pub fn set_parameters<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Struct>,
    {
        self.parameters = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parameters][crate::model::Context::parameters].
    pub fn set_or_clear_parameters<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Struct>,
    {
        self.parameters = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Context {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Context"
    }
}

/// An intent categorizes an end-user's intention for one conversation turn. For
/// each agent, you define many intents, where your combined intents can handle
/// a complete conversation. When an end-user writes or says something, referred
/// to as an end-user expression or end-user input, Dialogflow matches the end-
/// user input to the best intent in your agent. Matching an intent is also
/// known as intent classification.
///
/// For more information, see the [intent
/// guide](https://cloud.google.com/dialogflow/docs/intents-overview).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Intent {
    /// Optional. The unique identifier of this intent. Required for
    /// [Intents.UpdateIntent][google.cloud.dialogflow.v2.Intents.UpdateIntent] and 
    /// [Intents.BatchUpdateIntents][google.cloud.dialogflow.v2.Intents.BatchUpdateI
    /// ntents] methods. Format: `projects/<Project ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The name of this intent.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Optional. Indicates whether webhooks are enabled for the intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub webhook_state: crate::model::intent::WebhookState,

    /// Optional. The priority of this intent. Higher numbers represent higher
    /// priorities.
    ///
    /// - If the supplied value is unspecified or 0, the service
    ///   translates the value to 500,000, which corresponds to the
    ///   `Normal` priority in the console.
    /// - If the supplied value is negative, the intent is ignored
    ///   in runtime detect intent requests.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub priority: i32,

    /// Optional. Indicates whether this is a fallback intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub is_fallback: bool,

    /// Optional. Indicates whether Machine Learning is disabled for the intent.
    /// Note: If `ml_disabled` setting is set to true, then this intent is not taken
    /// into account during inference in `ML ONLY` match mode. Also, auto-markup in
    /// the UI is turned off.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub ml_disabled: bool,

    /// Optional. Indicates that a live agent should be brought in to handle the
    /// interaction with the user. In most cases, when you set this flag to true,
    /// you would also want to set end_interaction to true as well. Default is
    /// false.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub live_agent_handoff: bool,

    /// Optional. Indicates that this intent ends an interaction. Some integrations
    /// (e.g., Actions on Google or Dialogflow phone gateway) use this information
    /// to close interaction with an end user. Default is false.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub end_interaction: bool,

    /// Optional. The list of context names required for this intent to be
    /// triggered. Format: `projects/<Project ID>/agent/sessions/-/contexts/<Context
    /// ID>`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub input_context_names: std::vec::Vec<std::string::String>,

    /// Optional. The collection of event names that trigger the intent. If the
    /// collection of input contexts is not empty, all of the contexts must be
    /// present in the active user session for an event to trigger this intent.
    /// Event names are limited to 150 characters.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub events: std::vec::Vec<std::string::String>,

    /// Optional. The collection of examples that the agent is trained on.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub training_phrases: std::vec::Vec<crate::model::intent::TrainingPhrase>,

    /// Optional. The name of the action associated with the intent. Note: The
    /// action name must not contain whitespaces.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub action: std::string::String,

    /// Optional. The collection of contexts that are activated when the intent is
    /// matched. Context messages in this collection should not set the parameters
    /// field. Setting the `lifespan_count` to 0 will reset the context when the
    /// intent is matched. Format: `projects/<Project
    /// ID>/agent/sessions/-/contexts/<Context ID>`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub output_contexts: std::vec::Vec<crate::model::Context>,

    /// Optional. Indicates whether to delete all contexts in the current session
    /// when this intent is matched.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub reset_contexts: bool,

    /// Optional. The collection of parameters associated with the intent.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parameters: std::vec::Vec<crate::model::intent::Parameter>,

    /// Optional. The collection of rich messages corresponding to the `Response`
    /// field in the Dialogflow console.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub messages: std::vec::Vec<crate::model::intent::Message>,

    /// Optional. The list of platforms for which the first responses will be copied
    /// from the messages in PLATFORM_UNSPECIFIED (i.e. default platform).
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub default_response_platforms: std::vec::Vec<crate::model::intent::message::Platform>,

    /// Output only. Read-only. The unique identifier of the root intent in the
    /// chain of followup intents. It identifies the correct followup intents chain
    /// for this intent. We populate this field only in the output.
    ///
    /// Format: `projects/<Project ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub root_followup_intent_name: std::string::String,

    /// Read-only after creation. The unique identifier of the parent intent in the
    /// chain of followup intents. You can set this field when creating an intent,
    /// for example with
    /// [CreateIntent][google.cloud.dialogflow.v2.Intents.CreateIntent] or
    /// [BatchUpdateIntents][google.cloud.dialogflow.v2.Intents.BatchUpdateIntents],
    /// in order to make this intent a followup intent.
    ///
    /// It identifies the parent followup intent. Format: `projects/<Project
    /// ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent_followup_intent_name: std::string::String,

    /// Output only. Read-only. Information about all followup intents that have
    /// this intent as a direct or indirect parent. We populate this field only in
    /// the output.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub followup_intent_info: std::vec::Vec<crate::model::intent::FollowupIntentInfo>,
}

impl Intent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Intent::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Intent::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [webhook_state][crate::model::Intent::webhook_state].
    pub fn set_webhook_state<T: std::convert::Into<crate::model::intent::WebhookState>>(mut self, v: T) -> Self {
        self.webhook_state = v.into();
        self
    }

    /// Sets the value of [priority][crate::model::Intent::priority].
    pub fn set_priority<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.priority = v.into();
        self
    }

    /// Sets the value of [is_fallback][crate::model::Intent::is_fallback].
    pub fn set_is_fallback<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_fallback = v.into();
        self
    }

    /// Sets the value of [ml_disabled][crate::model::Intent::ml_disabled].
    pub fn set_ml_disabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.ml_disabled = v.into();
        self
    }

    /// Sets the value of [live_agent_handoff][crate::model::Intent::live_agent_handoff].
    pub fn set_live_agent_handoff<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.live_agent_handoff = v.into();
        self
    }

    /// Sets the value of [end_interaction][crate::model::Intent::end_interaction].
    pub fn set_end_interaction<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.end_interaction = v.into();
        self
    }

    /// Sets the value of [input_context_names][crate::model::Intent::input_context_names].
    pub fn set_input_context_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.input_context_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [events][crate::model::Intent::events].
    pub fn set_events<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.events = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [training_phrases][crate::model::Intent::training_phrases].
    pub fn set_training_phrases<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::intent::TrainingPhrase>,
    {
        use std::iter::Iterator;
        self.training_phrases = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [action][crate::model::Intent::action].
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [output_contexts][crate::model::Intent::output_contexts].
    pub fn set_output_contexts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Context>,
    {
        use std::iter::Iterator;
        self.output_contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [reset_contexts][crate::model::Intent::reset_contexts].
    pub fn set_reset_contexts<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.reset_contexts = v.into();
        self
    }

    /// Sets the value of [parameters][crate::model::Intent::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::intent::Parameter>,
    {
        use std::iter::Iterator;
        self.parameters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [messages][crate::model::Intent::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::intent::Message>,
    {
        use std::iter::Iterator;
        self.messages = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [default_response_platforms][crate::model::Intent::default_response_platforms].
    pub fn set_default_response_platforms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::intent::message::Platform>,
    {
        use std::iter::Iterator;
        self.default_response_platforms = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [root_followup_intent_name][crate::model::Intent::root_followup_intent_name].
    pub fn set_root_followup_intent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.root_followup_intent_name = v.into();
        self
    }

    /// Sets the value of [parent_followup_intent_name][crate::model::Intent::parent_followup_intent_name].
    pub fn set_parent_followup_intent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent_followup_intent_name = v.into();
        self
    }

    /// Sets the value of [followup_intent_info][crate::model::Intent::followup_intent_info].
    pub fn set_followup_intent_info<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::intent::FollowupIntentInfo>,
    {
        use std::iter::Iterator;
        self.followup_intent_info = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for Intent {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Intent"
    }
}

/// Defines additional types related to [Intent].
pub mod intent {
    #[allow(unused_imports)]
    use super::*;

    /// Represents the different states that webhooks can be in.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may add
    /// additional enum variants at any time. Adding new variants is not considered
    /// a breaking change. Applications should write their code in anticipation of:
    ///
    /// - New values appearing in future releases of the client library, **and**
    /// - New values received dynamically, without application changes.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum WebhookState {
        /// Webhook is disabled in the agent and in the intent.
        Unspecified,
        /// Webhook is enabled in the agent and in the intent.
        Enabled,
        /// Webhook is enabled in the agent and in the intent. Also, each slot
        /// filling prompt is forwarded to the webhook.
        EnabledForSlotFilling,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [WebhookState::value] or
        /// [WebhookState::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl WebhookState {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Unspecified => std::option::Option::Some(0),
                Self::Enabled => std::option::Option::Some(1),
                Self::EnabledForSlotFilling => std::option::Option::Some(2),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Unspecified => std::option::Option::Some("WEBHOOK_STATE_UNSPECIFIED"),
                Self::Enabled => std::option::Option::Some("WEBHOOK_STATE_ENABLED"),
                Self::EnabledForSlotFilling => std::option::Option::Some("WEBHOOK_STATE_ENABLED_FOR_SLOT_FILLING"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for WebhookState {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for WebhookState {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for WebhookState {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Enabled,
                2 => Self::EnabledForSlotFilling,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for WebhookState {
        fn from(value: &str) -> Self {
            match value {
                "WEBHOOK_STATE_UNSPECIFIED" => Self::Unspecified,
                "WEBHOOK_STATE_ENABLED" => Self::Enabled,
                "WEBHOOK_STATE_ENABLED_FOR_SLOT_FILLING" => Self::EnabledForSlotFilling,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for WebhookState {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for WebhookState {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<WebhookState>::new(".google.cloud.dialogflow.v2.Intent.WebhookState"))
        }
    }


    /// Represents an example that the agent is trained on.
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct TrainingPhrase {
        /// Output only. The unique identifier of this training phrase.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub name: std::string::String,

        /// Required. The type of the training phrase.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub r#type: crate::model::intent::training_phrase::Type,

        /// Required. The ordered list of training phrase parts. The parts are
        /// concatenated in order to form the training phrase.
        ///
        /// Note: The API does not automatically annotate training phrases like the
        /// Dialogflow Console does.
        ///
        /// Note: Do not forget to include whitespace at part boundaries, so the
        /// training phrase is well formatted when the parts are concatenated.
        ///
        /// If the training phrase does not need to be annotated with parameters, you
        /// just need a single part with only the
        /// [Part.text][google.cloud.dialogflow.v2.Intent.TrainingPhrase.Part.text]
        /// field set.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub parts: std::vec::Vec<crate::model::intent::training_phrase::Part>,

        /// Optional. Indicates how many times this example was added to the intent.
        /// Each time a developer adds an existing sample by editing an intent or
        /// training, this counter is increased.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub times_added_count: i32,
    }

    impl TrainingPhrase {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [name][crate::model::intent::TrainingPhrase::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.name = v.into();
            self
        }

        /// Sets the value of [type][crate::model::intent::TrainingPhrase::r#type].
        pub fn set_type<T: std::convert::Into<crate::model::intent::training_phrase::Type>>(mut self, v: T) -> Self {
            self.r#type = v.into();
            self
        }

        /// Sets the value of [parts][crate::model::intent::TrainingPhrase::parts].
        pub fn set_parts<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<crate::model::intent::training_phrase::Part>,
        {
            use std::iter::Iterator;
            self.parts = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [times_added_count][crate::model::intent::TrainingPhrase::times_added_count].
        pub fn set_times_added_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
            self.times_added_count = v.into();
            self
        }
    }

    impl wkt::message::Message for TrainingPhrase {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.dialogflow.v2.Intent.TrainingPhrase"
        }
    }

    /// Defines additional types related to [TrainingPhrase].
    pub mod training_phrase {
        #[allow(unused_imports)]
        use super::*;

        /// Represents different types of training phrases.
        ///
        /// # Working with unknown values
        ///
        /// This enum is defined as `#[non_exhaustive]` because Google Cloud may add
        /// additional enum variants at any time. Adding new variants is not considered
        /// a breaking change. Applications should write their code in anticipation of:
        ///
        /// - New values appearing in future releases of the client library, **and**
        /// - New values received dynamically, without application changes.
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum Type {
            /// Not specified. This value should never be used.
            Unspecified,
            /// Examples do not contain @-prefixed entity type names, but example parts
            /// can be annotated with entity types.
            Example,
            /// Templates are not annotated with entity types, but they can contain
            /// @-prefixed entity type names as substrings. Template mode has been
            /// deprecated. Example mode is the only supported way to create new
            /// training phrases. If you have existing training phrases that you've
            /// created in template mode, those will continue to work.
            Template,
            /// If set, the enum was initialized with an unknown value.
            ///
            /// Applications can examine the value using [Type::value] or
            /// [Type::name].
            UnknownValue(crate::model::UnknownEnumValue),
        }

        impl Type {
            /// Gets the enum value.
            ///
            /// Returns `None` if the enum contains an unknown value deserialized from
            /// the string representation of enums.
            pub fn value(&self) -> std::option::Option<i32> {
                match self {
                    Self::Unspecified => std::option::Option::Some(0),
                    Self::Example => std::option::Option::Some(1),
                    Self::Template => std::option::Option::Some(2),
                    Self::UnknownValue(u) => u.value(),
                }
            }

            /// Gets the enum value as a string.
            ///
            /// Returns `None` if the enum contains an unknown value deserialized from
            /// the integer representation of enums.
            pub fn name(&self) -> std::option::Option<&str> {
                match self {
                    Self::Unspecified => std::option::Option::Some("TYPE_UNSPECIFIED"),
                    Self::Example => std::option::Option::Some("EXAMPLE"),
                    Self::Template => std::option::Option::Some("TEMPLATE"),
                    Self::UnknownValue(u) => u.name(),
                }
            }
        }

        impl std::default::Default for Type {
            fn default() -> Self {
                use std::convert::From;
                Self::from(0)
            }
        }

        impl std::fmt::Display for Type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
                crate::model::display_enum(f, self.name(), self.value())
            }
        }

        impl std::convert::From<i32> for Type {
            fn from(value: i32) -> Self {
                match value {
                    0 => Self::Unspecified,
                    1 => Self::Example,
                    2 => Self::Template,
                    _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
                }
            }
        }

        impl std::convert::From<&str> for Type {
            fn from(value: &str) -> Self {
                match value {
                    "TYPE_UNSPECIFIED" => Self::Unspecified,
                    "EXAMPLE" => Self::Example,
                    "TEMPLATE" => Self::Template,
                    _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
                }
            }
        }

        impl serde::ser::Serialize for Type {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                crate::model::serialize_enum(serializer, self.name(), self.value())
            }
        }

        impl<'de> serde::de::Deserialize<'de> for Type {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(crate::model::EnumVisitor::<Type>::new(".google.cloud.dialogflow.v2.Intent.TrainingPhrase.Type"))
            }
        }


        /// Represents a part of a training phrase.
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Part {
            /// Required. The text for this part.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub text: std::string::String,

            /// Optional. The entity type name prefixed with `@`. This field is required for
            /// annotated parts of the training phrase.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub entity_type: std::string::String,

            /// Optional. The parameter name for the value extracted from the annotated part
            /// of the example. This field is required for annotated parts of the training
            /// phrase.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub alias: std::string::String,

            /// Optional. Indicates whether the text was manually annotated. This field is
            /// set to true when the Dialogflow Console is used to manually annotate the
            /// part. When creating an annotated part with the API, you must set this to
            /// true.
            #[serde(skip_serializing_if = "crate::model::is_default")]
            pub user_defined: bool,
        }

        impl Part {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [text][crate::model::intent::training_phrase::Part::text].
            pub fn set_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.text = v.into();
                self
            }

            /// Sets the value of [entity_type][crate::model::intent::training_phrase::Part::entity_type].
            pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.entity_type = v.into();
                self
            }

            /// Sets the value of [alias][crate::model::intent::training_phrase::Part::alias].
            pub fn set_alias<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.alias = v.into();
                self
            }

            /// Sets the value of [user_defined][crate::model::intent::training_phrase::Part::user_defined].
            pub fn set_user_defined<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
                self.user_defined = v.into();
                self
            }
        }

        impl wkt::message::Message for Part {
            fn typename() -> &'static str {
                "type.googleapis.com/google.cloud.dialogflow.v2.Intent.TrainingPhrase.Part"
            }
        }
    }


    /// Represents intent parameters.
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Parameter {
        /// The unique identifier of this parameter.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub name: std::string::String,

        /// Required. The name of the parameter.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub display_name: std::string::String,

        /// Optional. The definition of the parameter value. It can be:
        ///
        /// - a constant string,
        /// - a parameter value defined as `$parameter_name`,
        /// - an original parameter value defined as `$parameter_name.original`,
        /// - a parameter value from some context defined as
        ///   `#context_name.parameter_name`.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub value: std::string::String,

        /// Optional. The default value to use when the `value` yields an empty result.
        /// Default values can be extracted from contexts by using the following syntax:
        /// `#context_name.parameter_name`.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub default_value: std::string::String,

        /// Optional. The name of the entity type, prefixed with `@`, that describes
        /// values of the parameter. If the parameter is required, this must be
        /// provided.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub entity_type_display_name: std::string::String,

        /// Optional. Indicates whether the parameter is required. That is, whether the
        /// intent cannot be completed without collecting the parameter value.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub mandatory: bool,

        /// Optional. The collection of prompts that the agent can present to the user
        /// in order to collect a value for the parameter.
        #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
        pub prompts: std::vec::Vec<std::string::String>,

        /// Optional. Indicates whether the parameter represents a list of values.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub is_list: bool,
    }

    impl Parameter {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [name][crate::model::intent::Parameter::name].
        pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.name = v.into();
            self
        }

        /// Sets the value of [display_name][crate::model::intent::Parameter::display_name].
        pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.display_name = v.into();
            self
        }

        /// Sets the value of [value][crate::model::intent::Parameter::value].
        pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.value = v.into();
            self
        }

        /// Sets the value of [default_value][crate::model::intent::Parameter::default_value].
        pub fn set_default_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.default_value = v.into();
            self
        }

        /// Sets the value of [entity_type_display_name][crate::model::intent::Parameter::entity_type_display_name].
        pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.entity_type_display_name = v.into();
            self
        }

        /// Sets the value of [mandatory][crate::model::intent::Parameter::mandatory].
        pub fn set_mandatory<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.mandatory = v.into();
            self
        }

        /// Sets the value of [prompts][crate::model::intent::Parameter::prompts].
        pub fn set_prompts<T, V>(mut self, v: T) -> Self
        where
            T: std::iter::IntoIterator<Item = V>,
            V: std::convert::Into<std::string::String>,
        {
            use std::iter::Iterator;
            self.prompts = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [is_list][crate::model::intent::Parameter::is_list].
        pub fn set_is_list<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
            self.is_list = v.into();
            self
        }
    }

    impl wkt::message::Message for Parameter {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Parameter"
        }
    }


    /// A rich response message. Corresponds to the intent `Response` field in the
    /// Dialogflow console. For more information, see [Rich response
    /// messages](https://cloud.google.com/dialogflow/docs/intents-rich-messages).
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Message {
        /// Required. The rich response message.
        #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
        pub message: std::option::Option<crate::model::intent::message::Message>,

        /// Optional. The platform that this message is intended for.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub platform: crate::model::intent::message::Platform,
    }

    impl Message {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [message][crate::model::intent::Message::message].
        ///
        /// Note that all the setters affecting `message` are mutually
        /// exclusive.
        pub fn set_message<T: std::convert::Into<std::option::Option<crate::model::intent::message::Message>>>(
            mut self,
            v: T,
        ) -> Self {
            self.message = v.into();
            self
        }

        /// The value of [message][crate::model::intent::Message::message]
        /// if it holds a `Text`, `None` if the field is not set or
        /// holds a different branch.
        pub fn text(&self) -> std::option::Option<&std::boxed::Box<crate::model::intent::message::Text>> {
            #[allow(unreachable_patterns)]
            self.message.as_ref().and_then(|v| match v {
                crate::model::intent::message::Message::Text(v) => std::option::Option::Some(v),
                _ => std::option::Option::None,
            })
        }

        /// Sets the value of [message][crate::model::intent::Message::message]
        /// to hold a `Text`.
        ///
        /// Note that all the setters affecting `message` are
        /// mutually exclusive.
        pub fn set_text<T: std::convert::Into<std::boxed::Box<crate::model::intent::message::Text>>>(mut self, v: T) -> Self {
            self.message = std::option::Option::Some(crate::model::intent::message::Message::Text(v.into()));
            self
        }

        /// The value of [message][crate::model::intent::Message::message]
        /// if it holds a `Image`, `None` if the field is not set or
        /// holds a different branch.
        pub fn image(&self) -> std::option::Option<&std::boxed::Box<crate::model::intent::message::Image>> {
            #[allow(unreachable_patterns)]
            self.message.as_ref().and_then(|v| match v {
                crate::model::intent::message::Message::Image(v) => std::option::Option::Some(v),
                _ => std::option::Option::None,
            })
        }

        /// Sets the value of [message][crate::model::intent::Message::message]
        /// to hold a `Image`.
        ///
        /// Note that all the setters affecting `message` are
        /// mutually exclusive.
        pub fn set_image<T: std::convert::Into<std::boxed::Box<crate::model::intent::message::Image>>>(mut self, v: T) -> Self {
            self.message = std::option::Option::Some(crate::model::intent::message::Message::Image(v.into()));
            self
        }

        /// The value of [message][crate::model::intent::Message::message]
        /// if it holds a `QuickReplies`, `None` if the field is not set or
        /// holds a different branch.
        pub fn quick_replies(&self) -> std::option::Option<&std::boxed::Box<crate::model::intent::message::QuickReplies>> {
            #[allow(unreachable_patterns)]
            self.message.as_ref().and_then(|v| match v {
                crate::model::intent::message::Message::QuickReplies(v) => std::option::Option::Some(v),
                _ => std::option::Option::None,
            })
        }

        /// Sets the value of [message][crate::model::intent::Message::message]
        /// to hold a `QuickReplies`.
        ///
        /// Note that all the setters affecting `message` are
        /// mutually exclusive.
        pub fn set_quick_replies<T: std::convert::Into<std::boxed::Box<crate::model::intent::message::QuickReplies>>>(mut self, v: T) -> Self {
            self.message = std::option::Option::Some(crate::model::intent::message::Message::QuickReplies(v.into()));
            self
        }

        /// The value of [message][crate::model::intent::Message::message]
        /// if it holds a `Card`, `None` if the field is not set or
        /// holds a different branch.
        pub fn card(&self) -> std::option::Option<&std::boxed::Box<crate::model::intent::message::Card>> {
            #[allow(unreachable_patterns)]
            self.message.as_ref().and_then(|v| match v {
                crate::model::intent::message::Message::Card(v) => std::option::Option::Some(v),
                _ => std::option::Option::None,
            })
        }

        /// Sets the value of [message][crate::model::intent::Message::message]
        /// to hold a `Card`.
        ///
        /// Note that all the setters affecting `message` are
        /// mutually exclusive.
        pub fn set_card<T: std::convert::Into<std::boxed::Box<crate::model::intent::message::Card>>>(mut self, v: T) -> Self {
            self.message = std::option::Option::Some(crate::model::intent::message::Message::Card(v.into()));
            self
        }

        /// The value of [message][crate::model::intent::Message::message]
        /// if it holds a `Payload`, `None` if the field is not set or
        /// holds a different branch.
        pub fn payload(&self) -> std::option::Option<&std::boxed::Box<wkt::Struct>> {
            #[allow(unreachable_patterns)]
            self.message.as_ref().and_then(|v| match v {
                crate::model::intent::message::Message::Payload(v) => std::option::Option::Some(v),
                _ => std::option::Option::None,
            })
        }

        /// Sets the value of [message][crate::model::intent::Message::message]
        /// to hold a `Payload`.
        ///
        /// Note that all the setters affecting `message` are
        /// mutually exclusive.
        pub fn set_payload<T: std::convert::Into<std::boxed::Box<wkt::Struct>>>(mut self, v: T) -> Self {
            self.message = std::option::Option::Some(crate::model::intent::message::Message::Payload(v.into()));
            self
        }

        /// Sets the value of [platform][crate::model::intent::Message::platform].
        pub fn set_platform<T: std::convert::Into<crate::model::intent::message::Platform>>(mut self, v: T) -> Self {
            self.platform = v.into();
            self
        }
    }

    impl wkt::message::Message for Message {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Message"
        }
    }

    /// Defines additional types related to [Message].
    pub mod message {
        #[allow(unused_imports)]
        use super::*;

        /// The rich response message integration platform. See
        /// [Integrations](https://cloud.google.com/dialogflow/docs/integrations).
        ///
        /// # Working with unknown values
        ///
        /// This enum is defined as `#[non_exhaustive]` because Google Cloud may add
        /// additional enum variants at any time. Adding new variants is not considered
        /// a breaking change. Applications should write their code in anticipation of:
        ///
        /// - New values appearing in future releases of the client library, **and**
        /// - New values received dynamically, without application changes.
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub enum Platform {
            /// Default platform.
            Unspecified,
            /// Facebook.
            Facebook,
            /// Slack.
            Slack,
            /// Telegram.
            Telegram,
            /// Kik.
            Kik,
            /// Skype.
            Skype,
            /// Line.
            Line,
            /// Viber.
            Viber,
            /// Google Assistant See [Dialogflow webhook format](https://developers.goog
            /// le.com/assistant/actions/build/json/dialogflow-webhook-json)
            ActionsOnGoogle,
            /// Google Hangouts.
            GoogleHangouts,
            /// If set, the enum was initialized with an unknown value.
            ///
            /// Applications can examine the value using [Platform::value] or
            /// [Platform::name].
            UnknownValue(crate::model::UnknownEnumValue),
        }

        impl Platform {
            /// Gets the enum value.
            ///
            /// Returns `None` if the enum contains an unknown value deserialized from
            /// the string representation of enums.
            pub fn value(&self) -> std::option::Option<i32> {
                match self {
                    Self::Unspecified => std::option::Option::Some(0),
                    Self::Facebook => std::option::Option::Some(1),
                    Self::Slack => std::option::Option::Some(2),
                    Self::Telegram => std::option::Option::Some(3),
                    Self::Kik => std::option::Option::Some(4),
                    Self::Skype => std::option::Option::Some(5),
                    Self::Line => std::option::Option::Some(6),
                    Self::Viber => std::option::Option::Some(7),
                    Self::ActionsOnGoogle => std::option::Option::Some(8),
                    Self::GoogleHangouts => std::option::Option::Some(11),
                    Self::UnknownValue(u) => u.value(),
                }
            }

            /// Gets the enum value as a string.
            ///
            /// Returns `None` if the enum contains an unknown value deserialized from
            /// the integer representation of enums.
            pub fn name(&self) -> std::option::Option<&str> {
                match self {
                    Self::Unspecified => std::option::Option::Some("PLATFORM_UNSPECIFIED"),
                    Self::Facebook => std::option::Option::Some("FACEBOOK"),
                    Self::Slack => std::option::Option::Some("SLACK"),
                    Self::Telegram => std::option::Option::Some("TELEGRAM"),
                    Self::Kik => std::option::Option::Some("KIK"),
                    Self::Skype => std::option::Option::Some("SKYPE"),
                    Self::Line => std::option::Option::Some("LINE"),
                    Self::Viber => std::option::Option::Some("VIBER"),
                    Self::ActionsOnGoogle => std::option::Option::Some("ACTIONS_ON_GOOGLE"),
                    Self::GoogleHangouts => std::option::Option::Some("GOOGLE_HANGOUTS"),
                    Self::UnknownValue(u) => u.name(),
                }
            }
        }

        impl std::default::Default for Platform {
            fn default() -> Self {
                use std::convert::From;
                Self::from(0)
            }
        }

        impl std::fmt::Display for Platform {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
                crate::model::display_enum(f, self.name(), self.value())
            }
        }

        impl std::convert::From<i32> for Platform {
            fn from(value: i32) -> Self {
                match value {
                    0 => Self::Unspecified,
                    1 => Self::Facebook,
                    2 => Self::Slack,
                    3 => Self::Telegram,
                    4 => Self::Kik,
                    5 => Self::Skype,
                    6 => Self::Line,
                    7 => Self::Viber,
                    8 => Self::ActionsOnGoogle,
                    11 => Self::GoogleHangouts,
                    _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
                }
            }
        }

        impl std::convert::From<&str> for Platform {
            fn from(value: &str) -> Self {
                match value {
                    "PLATFORM_UNSPECIFIED" => Self::Unspecified,
                    "FACEBOOK" => Self::Facebook,
                    "SLACK" => Self::Slack,
                    "TELEGRAM" => Self::Telegram,
                    "KIK" => Self::Kik,
                    "SKYPE" => Self::Skype,
                    "LINE" => Self::Line,
                    "VIBER" => Self::Viber,
                    "ACTIONS_ON_GOOGLE" => Self::ActionsOnGoogle,
                    "GOOGLE_HANGOUTS" => Self::GoogleHangouts,
                    _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
                }
            }
        }

        impl serde::ser::Serialize for Platform {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                crate::model::serialize_enum(serializer, self.name(), self.value())
            }
        }

        impl<'de> serde::de::Deserialize<'de> for Platform {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(crate::model::EnumVisitor::<Platform>::new(".google.cloud.dialogflow.v2.Intent.Message.Platform"))
            }
        }


        /// The text response message.
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Text {
            /// Optional. The collection of the agent's responses.
            #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
            pub text: std::vec::Vec<std::string::String>,
        }

        impl Text {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [text][crate::model::intent::message::Text::text].
            pub fn set_text<T, V>(mut self, v: T) -> Self
            where
                T: std::iter::IntoIterator<Item = V>,
                V: std::convert::Into<std::string::String>,
            {
                use std::iter::Iterator;
                self.text = v.into_iter().map(|i| i.into()).collect();
                self
            }
        }

        impl wkt::message::Message for Text {
            fn typename() -> &'static str {
                "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Message.Text"
            }
        }


        /// The image response message.
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Image {
            /// Optional. The public URI to an image file.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub image_uri: std::string::String,

            /// Optional. A text description of the image to be used for accessibility,
            /// e.g., screen readers.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub accessibility_text: std::string::String,
        }

        impl Image {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [image_uri][crate::model::intent::message::Image::image_uri].
            pub fn set_image_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.image_uri = v.into();
                self
            }

            /// Sets the value of [accessibility_text][crate::model::intent::message::Image::accessibility_text].
            pub fn set_accessibility_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.accessibility_text = v.into();
                self
            }
        }

        impl wkt::message::Message for Image {
            fn typename() -> &'static str {
                "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Message.Image"
            }
        }


        /// The quick replies response message.
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct QuickReplies {
            /// Optional. The title of the collection of quick replies.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub title: std::string::String,

            /// Optional. The collection of quick replies.
            #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
            pub quick_replies: std::vec::Vec<std::string::String>,
        }

        impl QuickReplies {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [title][crate::model::intent::message::QuickReplies::title].
            pub fn set_title<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.title = v.into();
                self
            }

            /// Sets the value of [quick_replies][crate::model::intent::message::QuickReplies::quick_replies].
            pub fn set_quick_replies<T, V>(mut self, v: T) -> Self
            where
                T: std::iter::IntoIterator<Item = V>,
                V: std::convert::Into<std::string::String>,
            {
                use std::iter::Iterator;
                self.quick_replies = v.into_iter().map(|i| i.into()).collect();
                self
            }
        }

        impl wkt::message::Message for QuickReplies {
            fn typename() -> &'static str {
                "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Message.QuickReplies"
            }
        }


        /// The card response message.
        #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Card {
            /// Optional. The title of the card.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub title: std::string::String,

            /// Optional. The subtitle of the card.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub subtitle: std::string::String,

            /// Optional. The public URI to an image file for the card.
            #[serde(skip_serializing_if = "std::string::String::is_empty")]
            pub image_uri: std::string::String,

            /// Optional. The collection of card buttons.
            #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
            pub buttons: std::vec::Vec<crate::model::intent::message::card::Button>,
        }

        impl Card {
            pub fn new() -> Self {
                std::default::Default::default()
            }

            /// Sets the value of [title][crate::model::intent::message::Card::title].
            pub fn set_title<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.title = v.into();
                self
            }

            /// Sets the value of [subtitle][crate::model::intent::message::Card::subtitle].
            pub fn set_subtitle<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.subtitle = v.into();
                self
            }

            /// Sets the value of [image_uri][crate::model::intent::message::Card::image_uri].
            pub fn set_image_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                self.image_uri = v.into();
                self
            }

            /// Sets the value of [buttons][crate::model::intent::message::Card::buttons].
            pub fn set_buttons<T, V>(mut self, v: T) -> Self
            where
                T: std::iter::IntoIterator<Item = V>,
                V: std::convert::Into<crate::model::intent::message::card::Button>,
            {
                use std::iter::Iterator;
                self.buttons = v.into_iter().map(|i| i.into()).collect();
                self
            }
        }

        impl wkt::message::Message for Card {
            fn typename() -> &'static str {
                "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Message.Card"
            }
        }

        /// Defines additional types related to [Card].
        pub mod card {
            #[allow(unused_imports)]
            use super::*;

            /// Contains information about a button.
            #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
            #[serde(default, rename_all = "camelCase")]
            #[non_exhaustive]
            pub struct Button {
                /// Optional. The text to show on the button.
                #[serde(skip_serializing_if = "std::string::String::is_empty")]
                pub text: std::string::String,

                /// Optional. The text to send back to the Dialogflow API or a URI to open.
                #[serde(skip_serializing_if = "std::string::String::is_empty")]
                pub postback: std::string::String,
            }

            impl Button {
                pub fn new() -> Self {
                    std::default::Default::default()
                }

                /// Sets the value of [text][crate::model::intent::message::card::Button::text].
                pub fn set_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                    self.text = v.into();
                    self
                }

                /// Sets the value of [postback][crate::model::intent::message::card::Button::postback].
                pub fn set_postback<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
                    self.postback = v.into();
                    self
                }
            }

            impl wkt::message::Message for Button {
                fn typename() -> &'static str {
                    "type.googleapis.com/google.cloud.dialogflow.v2.Intent.Message.Card.Button"
                }
            }
        }


        /// Required. The rich response message.
        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[non_exhaustive]
        pub enum Message {
            /// The text response.
            Text(std::boxed::Box<crate::model::intent::message::Text>),
            /// The image response.
            Image(std::boxed::Box<crate::model::intent::message::Image>),
            /// The quick replies response.
            QuickReplies(std::boxed::Box<crate::model::intent::message::QuickReplies>),
            /// The card response.
            Card(std::boxed::Box<crate::model::intent::message::Card>),
            /// A custom platform-specific response.
            Payload(std::boxed::Box<wkt::Struct>),
        }
    }


    /// Represents a single followup intent in the chain.
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct FollowupIntentInfo {
        /// The unique identifier of the followup intent. Format: `projects/<Project
        /// ID>/agent/intents/<Intent ID>`.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub followup_intent_name: std::string::String,

        /// The unique identifier of the followup intent's parent. Format:
        /// `projects/<Project ID>/agent/intents/<Intent ID>`.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub parent_followup_intent_name: std::string::String,
    }

    impl FollowupIntentInfo {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [followup_intent_name][crate::model::intent::FollowupIntentInfo::followup_intent_name].
        pub fn set_followup_intent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.followup_intent_name = v.into();
            self
        }

        /// Sets the value of [parent_followup_intent_name][crate::model::intent::FollowupIntentInfo::parent_followup_intent_name].
        pub fn set_parent_followup_intent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.parent_followup_intent_name = v.into();
            self
        }
    }

    impl wkt::message::Message for FollowupIntentInfo {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.dialogflow.v2.Intent.FollowupIntentInfo"
        }
    }
}

/// Represents the options for views of an intent. An intent can be a sizable
/// object. Therefore, we provide a resource view that does not return training
/// phrases in the response by default.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because Google Cloud may add
/// additional enum variants at any time. Adding new variants is not considered
/// a breaking change. Applications should write their code in anticipation of:
///
/// - New values appearing in future releases of the client library, **and**
/// - New values received dynamically, without application changes.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum IntentView {
    /// Training phrases field is not populated in the response.
    Unspecified,
    /// All fields are populated.
    Full,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [IntentView::value] or
    /// [IntentView::name].
    UnknownValue(crate::model::UnknownEnumValue),
}

impl IntentView {
    /// Gets the enum value.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the string representation of enums.
    pub fn value(&self) -> std::option::Option<i32> {
        match self {
            Self::Unspecified => std::option::Option::Some(0),
            Self::Full => std::option::Option::Some(1),
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the integer representation of enums.
    pub fn name(&self) -> std::option::Option<&str> {
        match self {
            Self::Unspecified => std::option::Option::Some("INTENT_VIEW_UNSPECIFIED"),
            Self::Full => std::option::Option::Some("INTENT_VIEW_FULL"),
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for IntentView {
    fn default() -> Self {
        use std::convert::From;
        Self::from(0)
    }
}

impl std::fmt::Display for IntentView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        crate::model::display_enum(f, self.name(), self.value())
    }
}

impl std::convert::From<i32> for IntentView {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Full,
            _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
        }
    }
}

impl std::convert::From<&str> for IntentView {
    fn from(value: &str) -> Self {
        match value {
            "INTENT_VIEW_UNSPECIFIED" => Self::Unspecified,
            "INTENT_VIEW_FULL" => Self::Full,
            _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
        }
    }
}

impl serde::ser::Serialize for IntentView {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::model::serialize_enum(serializer, self.name(), self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for IntentView {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(crate::model::EnumVisitor::<IntentView>::new(".google.cloud.dialogflow.v2.IntentView"))
    }
}

/// This message is a wrapper around a collection of intents.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntentBatch {
    /// A collection of intents.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,
}

impl IntentBatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intents][crate::model::IntentBatch::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for IntentBatch {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.IntentBatch"
    }
}

/// The request message for
/// [Intents.ListIntents][google.cloud.dialogflow.v2.Intents.ListIntents].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListIntentsRequest {
    /// Required. The agent to list all intents from. Format: `projects/<Project
    /// ID>/agent` or `projects/<Project ID>/locations/<Location ID>/agent`.
    ///
    /// Alternatively, you can specify the environment to list intents for. Format:
    /// `projects/<Project ID>/agent/environments/<Environment ID>` or
    /// `projects/<Project ID>/locations/<Location
    /// ID>/agent/environments/<Environment ID>`. Note: training phrases of the
    /// intents will not be returned for non-draft environment.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Optional. The language used to access language-specific data. If not
    /// specified, the agent's default language is used. For more information, see
    /// [Multilingual intent and entity
    /// data](https://cloud.google.com/dialogflow/docs/agents-multilingual#intent-
    /// entity).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// Optional. The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub intent_view: crate::model::IntentView,

    /// Optional. The maximum number of items to return in a single page. By default
    /// 100 and at most 1000.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// Optional. The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl ListIntentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListIntentsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [language_code][crate::model::ListIntentsRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [intent_view][crate::model::ListIntentsRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListIntentsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListIntentsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListIntentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListIntentsRequest"
    }
}

/// The response message for
/// [Intents.ListIntents][google.cloud.dialogflow.v2.Intents.ListIntents].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListIntentsResponse {
    /// The list of agent intents. There will be a maximum number of items returned
    /// based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,

    /// Token to retrieve the next page of results, or empty if there are no more
    /// results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListIntentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intents][crate::model::ListIntentsResponse::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListIntentsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListIntentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListIntentsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListIntentsResponse {
    type PageItem = crate::model::Intent;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.intents
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for
/// [Intents.GetIntent][google.cloud.dialogflow.v2.Intents.GetIntent].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetIntentRequest {
    /// Required. The name of the intent. Format: `projects/<Project
    /// ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Optional. The language used to access language-specific data. If not
    /// specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// Optional. The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub intent_view: crate::model::IntentView,
}

impl GetIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetIntentRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [language_code][crate::model::GetIntentRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [intent_view][crate::model::GetIntentRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for GetIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetIntentRequest"
    }
}

/// The request message for
/// [Intents.CreateIntent][google.cloud.dialogflow.v2.Intents.CreateIntent].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateIntentRequest {
    /// Required. The agent to create a intent for. Format: `projects/<Project
    /// ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The intent to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub intent: std::option::Option<crate::model::Intent>,

    /// Optional. The language used to access language-specific data. If not
    /// specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// Optional. The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub intent_view: crate::model::IntentView,
}

impl CreateIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateIntentRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [intent][crate::model::CreateIntentRequest::intent].
    pub fn set_intent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [intent][crate::model::CreateIntentRequest::intent].
    pub fn set_or_clear_intent<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::CreateIntentRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [intent_view][crate::model::CreateIntentRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for CreateIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.CreateIntentRequest"
    }
}

/// The request message for
/// [Intents.UpdateIntent][google.cloud.dialogflow.v2.Intents.UpdateIntent].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateIntentRequest {
    /// Required. The intent to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub intent: std::option::Option<crate::model::Intent>,

    /// Optional. The language used to access language-specific data. If not
    /// specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// Optional. The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Optional. The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub intent_view: crate::model::IntentView,
}

impl UpdateIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intent][crate::model::UpdateIntentRequest::intent].
    pub fn set_intent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [intent][crate::model::UpdateIntentRequest::intent].
    pub fn set_or_clear_intent<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::UpdateIntentRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateIntentRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateIntentRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [intent_view][crate::model::UpdateIntentRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for UpdateIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.UpdateIntentRequest"
    }
}

/// The request message for
/// [Intents.DeleteIntent][google.cloud.dialogflow.v2.Intents.DeleteIntent].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteIntentRequest {
    /// Required. The name of the intent to delete. If this intent has direct or
    /// indirect followup intents, we also delete them. Format: `projects/<Project
    /// ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteIntentRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteIntentRequest"
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateIntentsRequest {
    /// Required. The name of the agent to update or create intents in. Format:
    /// `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The source of the intent batch.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub intent_batch: std::option::Option<crate::model::batch_update_intents_request::IntentBatch>,

    /// Optional. The language used to access language-specific data. If not
    /// specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// Optional. The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Optional. The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub intent_view: crate::model::IntentView,
}

impl BatchUpdateIntentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchUpdateIntentsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [intent_batch][crate::model::BatchUpdateIntentsRequest::intent_batch].
    ///
    /// Note that all the setters affecting `intent_batch` are mutually
    /// exclusive.
    pub fn set_intent_batch<T: std::convert::Into<std::option::Option<crate::model::batch_update_intents_request::IntentBatch>>>(
        mut self,
        v: T,
    ) -> Self {
        self.intent_batch = v.into();
        self
    }

    /// The value of [intent_batch][crate::model::BatchUpdateIntentsRequest::intent_batch]
    /// if it holds a `IntentBatchUri`, `None` if the field is not set or
    /// holds a different branch.
    pub fn intent_batch_uri(&self) -> std::option::Option<&std::string::String> {
        #[allow(unreachable_patterns)]
        self.intent_batch.as_ref().and_then(|v| match v {
            crate::model::batch_update_intents_request::IntentBatch::IntentBatchUri(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [intent_batch][crate::model::BatchUpdateIntentsRequest::intent_batch]
    /// to hold a `IntentBatchUri`.
    ///
    /// Note that all the setters affecting `intent_batch` are
    /// mutually exclusive.
    pub fn set_intent_batch_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.intent_batch = std::option::Option::Some(crate::model::batch_update_intents_request::IntentBatch::IntentBatchUri(v.into()));
        self
    }

    /// The value of [intent_batch][crate::model::BatchUpdateIntentsRequest::intent_batch]
    /// if it holds a `IntentBatchInline`, `None` if the field is not set or
    /// holds a different branch.
    pub fn intent_batch_inline(&self) -> std::option::Option<&std::boxed::Box<crate::model::IntentBatch>> {
        #[allow(unreachable_patterns)]
        self.intent_batch.as_ref().and_then(|v| match v {
            crate::model::batch_update_intents_request::IntentBatch::IntentBatchInline(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [intent_batch][crate::model::BatchUpdateIntentsRequest::intent_batch]
    /// to hold a `IntentBatchInline`.
    ///
    /// Note that all the setters affecting `intent_batch` are
    /// mutually exclusive.
    pub fn set_intent_batch_inline<T: std::convert::Into<std::boxed::Box<crate::model::IntentBatch>>>(mut self, v: T) -> Self {
        self.intent_batch = std::option::Option::Some(crate::model::batch_update_intents_request::IntentBatch::IntentBatchInline(v.into()));
        self
    }

    /// Sets the value of [language_code][crate::model::BatchUpdateIntentsRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::BatchUpdateIntentsRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::BatchUpdateIntentsRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [intent_view][crate::model::BatchUpdateIntentsRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for BatchUpdateIntentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateIntentsRequest"
    }
}

/// Defines additional types related to [BatchUpdateIntentsRequest].
pub mod batch_update_intents_request {
    #[allow(unused_imports)]
    use super::*;

    /// The source of the intent batch.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum IntentBatch {
        /// The URI to a Google Cloud Storage file containing intents to update or
        /// create. The file format can either be a serialized proto (of IntentBatch
        /// type) or JSON object. Note: The URI must start with "gs://".
        IntentBatchUri(std::string::String),
        /// The collection of intents to update or create.
        IntentBatchInline(std::boxed::Box<crate::model::IntentBatch>),
    }
}

/// The response message for [Intents.BatchUpdateIntents][google.cloud.dialogflo
/// w.v2.Intents.BatchUpdateIntents].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateIntentsResponse {
    /// The collection of updated or created intents.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,
}

impl BatchUpdateIntentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intents][crate::model::BatchUpdateIntentsResponse::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchUpdateIntentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateIntentsResponse"
    }
}

/// The request message for [Intents.BatchDeleteIntents][google.cloud.dialogflow
/// .v2.Intents.BatchDeleteIntents].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchDeleteIntentsRequest {
    /// Required. The name of the agent to delete all entities types for. Format:
    /// `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The collection of intents to delete. Only intent `name` must be
    /// filled in.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,
}

impl BatchDeleteIntentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchDeleteIntentsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [intents][crate::model::BatchDeleteIntentsRequest::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchDeleteIntentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchDeleteIntentsRequest"
    }
}

/// You can create multiple versions of your agent and publish them to separate
/// environments.
///
/// When you edit an agent, you are editing the draft agent. At any point, you
/// can save the draft agent as an agent version, which is an immutable snapshot
/// of your agent.
///
/// When you save the draft agent, it is published to the default environment.
/// When you create agent versions, you can publish them to custom environments.
/// You can create a variety of custom environments for:
///
/// - testing
/// - development
/// - production
/// - etc.
///
/// For more information, see the [versions and environments
/// guide](https://cloud.google.com/dialogflow/docs/agents-versions).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Environment {
    /// Output only. The unique identifier of this agent environment. Supported
    /// formats:
    ///
    /// - `projects/<Project ID>/agent/environments/<Environment ID>`
    /// - `projects/<Project ID>/locations/<Location
    ///   ID>/agent/environments/<Environment ID>`
    ///
    /// The environment ID for the default environment is `-`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Optional. The developer-provided description for this environment. The
    /// maximum length is 500 characters. If exceeded, the request is rejected.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// Optional. The agent version loaded into this environment. Supported formats:
    ///
    /// - `projects/<Project ID>/agent/versions/<Version ID>`
    /// - `projects/<Project ID>/locations/<Location ID>/agent/versions/<Version
    ///   ID>`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub agent_version: std::string::String,

    /// Output only. The state of this environment. This field is read-only, i.e.,
    /// it cannot be set by create and update methods.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub state: crate::model::environment::State,

    /// Output only. The last update time of this environment. This field is read-
    /// only, i.e., it cannot be set by create and update methods.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,
}

impl Environment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Environment::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::Environment::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [agent_version][crate::model::Environment::agent_version].
    pub fn set_agent_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_version = v.into();
        self
    }

    /// Sets the value of [state][crate::model::Environment::state].
    pub fn set_state<T: std::convert::Into<crate::model::environment::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [update_time][crate::model::Environment::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::Environment::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Environment {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Environment"
    }
}

/// Defines additional types related to [Environment].
pub mod environment {
    #[allow(unused_imports)]
    use super::*;

    /// Represents an environment state. When an environment is pointed to a new
    /// agent version, the environment is temporarily set to the `LOADING` state.
    /// During that time, the environment keeps on serving the previous version of
    /// the agent. After the new agent version is done loading, the environment is
    /// set back to the `RUNNING` state.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because Google Cloud may add
    /// additional enum variants at any time. Adding new variants is not considered
    /// a breaking change. Applications should write their code in anticipation of:
    ///
    /// - New values appearing in future releases of the client library, **and**
    /// - New values received dynamically, without application changes.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum State {
        /// Not specified. This value is not used.
        Unspecified,
        /// Stopped.
        Stopped,
        /// Loading.
        Loading,
        /// Running.
        Running,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [State::value] or
        /// [State::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl State {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Unspecified => std::option::Option::Some(0),
                Self::Stopped => std::option::Option::Some(1),
                Self::Loading => std::option::Option::Some(2),
                Self::Running => std::option::Option::Some(3),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Unspecified => std::option::Option::Some("STATE_UNSPECIFIED"),
                Self::Stopped => std::option::Option::Some("STOPPED"),
                Self::Loading => std::option::Option::Some("LOADING"),
                Self::Running => std::option::Option::Some("RUNNING"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for State {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for State {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for State {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Stopped,
                2 => Self::Loading,
                3 => Self::Running,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for State {
        fn from(value: &str) -> Self {
            match value {
                "STATE_UNSPECIFIED" => Self::Unspecified,
                "STOPPED" => Self::Stopped,
                "LOADING" => Self::Loading,
                "RUNNING" => Self::Running,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for State {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for State {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<State>::new(".google.cloud.dialogflow.v2.Environment.State"))
        }
    }
}

/// The request message for [Environments.ListEnvironments][google.cloud.dialogf
/// low.v2.Environments.ListEnvironments].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEnvironmentsRequest {
    /// Required. The agent to list all environments from. Format:
    ///
    /// - `projects/<Project ID>/agent`
    /// - `projects/<Project ID>/locations/<Location ID>/agent`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Optional. The maximum number of items to return in a single page. By default
    /// 100 and at most 1000.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// Optional. The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl ListEnvironmentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListEnvironmentsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListEnvironmentsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListEnvironmentsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListEnvironmentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListEnvironmentsRequest"
    }
}

/// The response message for [Environments.ListEnvironments][google.cloud.dialog
/// flow.v2.Environments.ListEnvironments].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEnvironmentsResponse {
    /// The list of agent environments. There will be a maximum number of items
    /// returned based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub environments: std::vec::Vec<crate::model::Environment>,

    /// Token to retrieve the next page of results, or empty if there are no more
    /// results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListEnvironmentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [environments][crate::model::ListEnvironmentsResponse::environments].
    pub fn set_environments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Environment>,
    {
        use std::iter::Iterator;
        self.environments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListEnvironmentsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListEnvironmentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListEnvironmentsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListEnvironmentsResponse {
    type PageItem = crate::model::Environment;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.environments
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for [Environments.GetEnvironment][google.cloud.dialogflo
/// w.v2.Environments.GetEnvironment].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEnvironmentRequest {
    /// Required. The name of the environment. Supported formats:
    ///
    /// - `projects/<Project ID>/agent/environments/<Environment ID>`
    /// - `projects/<Project ID>/locations/<Location
    ///   ID>/agent/environments/<Environment ID>`
    ///
    /// The environment ID for the default environment is `-`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetEnvironmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetEnvironmentRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetEnvironmentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetEnvironmentRequest"
    }
}

/// The request message for [Environments.CreateEnvironment][google.cloud.dialog
/// flow.v2.Environments.CreateEnvironment].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateEnvironmentRequest {
    /// Required. The agent to create an environment for. Supported formats:
    ///
    /// - `projects/<Project ID>/agent`
    /// - `projects/<Project ID>/locations/<Location ID>/agent`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The environment to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub environment: std::option::Option<crate::model::Environment>,

    /// Required. The unique id of the new environment.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub environment_id: std::string::String,
}

impl CreateEnvironmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateEnvironmentRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [environment][crate::model::CreateEnvironmentRequest::environment].
    pub fn set_environment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Environment>,
    {
        self.environment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [environment][crate::model::CreateEnvironmentRequest::environment].
    pub fn set_or_clear_environment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Environment>,
    {
        self.environment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [environment_id][crate::model::CreateEnvironmentRequest::environment_id].
    pub fn set_environment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.environment_id = v.into();
        self
    }
}

impl wkt::message::Message for CreateEnvironmentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.CreateEnvironmentRequest"
    }
}

/// The request message for [Environments.UpdateEnvironment][google.cloud.dialog
/// flow.v2.Environments.UpdateEnvironment].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateEnvironmentRequest {
    /// Required. The environment to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub environment: std::option::Option<crate::model::Environment>,

    /// Required. The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Optional. This field is used to prevent accidental overwrite of the default
    /// environment, which is an operation that cannot be undone. To confirm that
    /// the caller desires this overwrite, this field must be explicitly set to true
    /// when updating the default environment (environment ID = `-`).
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub allow_load_to_draft_and_discard_changes: bool,
}

impl UpdateEnvironmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [environment][crate::model::UpdateEnvironmentRequest::environment].
    pub fn set_environment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Environment>,
    {
        self.environment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [environment][crate::model::UpdateEnvironmentRequest::environment].
    pub fn set_or_clear_environment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Environment>,
    {
        self.environment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateEnvironmentRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateEnvironmentRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [allow_load_to_draft_and_discard_changes][crate::model::UpdateEnvironmentRequest::allow_load_to_draft_and_discard_changes].
    pub fn set_allow_load_to_draft_and_discard_changes<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.allow_load_to_draft_and_discard_changes = v.into();
        self
    }
}

impl wkt::message::Message for UpdateEnvironmentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.UpdateEnvironmentRequest"
    }
}

/// The request message for [Environments.DeleteEnvironment][google.cloud.dialog
/// flow.v2.Environments.DeleteEnvironment].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteEnvironmentRequest {
    /// Required. The name of the environment to delete. / Format:
    ///
    /// - `projects/<Project ID>/agent/environments/<Environment ID>`
    /// - `projects/<Project ID>/locations/<Location
    ///   ID>/agent/environments/<Environment ID>`
    ///
    /// The environment ID for the default environment is `-`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteEnvironmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteEnvironmentRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteEnvironmentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteEnvironmentRequest"
    }
}

/// The request message for [Environments.GetEnvironmentHistory][google.cloud.di
/// alogflow.v2.Environments.GetEnvironmentHistory].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEnvironmentHistoryRequest {
    /// Required. The name of the environment to retrieve history for. Supported
    /// formats:
    ///
    /// - `projects/<Project ID>/agent/environments/<Environment ID>`
    /// - `projects/<Project ID>/locations/<Location
    ///   ID>/agent/environments/<Environment ID>`
    ///
    /// The environment ID for the default environment is `-`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Optional. The maximum number of items to return in a single page. By default
    /// 100 and at most 1000.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// Optional. The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl GetEnvironmentHistoryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::GetEnvironmentHistoryRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::GetEnvironmentHistoryRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::GetEnvironmentHistoryRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for GetEnvironmentHistoryRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetEnvironmentHistoryRequest"
    }
}

/// The response message for [Environments.GetEnvironmentHistory][google.cloud.d
/// ialogflow.v2.Environments.GetEnvironmentHistory].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnvironmentHistory {
    /// Output only. The name of the environment this history is for. Supported
    /// formats:
    ///
    /// - `projects/<Project ID>/agent/environments/<Environment ID>`
    /// - `projects/<Project ID>/locations/<Location
    ///   ID>/agent/environments/<Environment ID>`
    ///
    /// The environment ID for the default environment is `-`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Output only. The list of agent environments. There will be a maximum number
    /// of items returned based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entries: std::vec::Vec<crate::model::environment_history::Entry>,

    /// Output only. Token to retrieve the next page of results, or empty if there
    /// are no more results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl EnvironmentHistory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::EnvironmentHistory::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entries][crate::model::EnvironmentHistory::entries].
    pub fn set_entries<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::environment_history::Entry>,
    {
        use std::iter::Iterator;
        self.entries = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::EnvironmentHistory::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for EnvironmentHistory {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.EnvironmentHistory"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for EnvironmentHistory {
    type PageItem = crate::model::environment_history::Entry;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.entries
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Defines additional types related to [EnvironmentHistory].
pub mod environment_history {
    #[allow(unused_imports)]
    use super::*;

    /// Represents an environment history entry.
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Entry {
        /// The agent version loaded into this environment history entry.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub agent_version: std::string::String,

        /// The developer-provided description for this environment history entry.
        #[serde(skip_serializing_if = "std::string::String::is_empty")]
        pub description: std::string::String,

        /// The creation time of this environment history entry.
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        pub create_time: std::option::Option<wkt::Timestamp>,
    }

    impl Entry {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [agent_version][crate::model::environment_history::Entry::agent_version].
        pub fn set_agent_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.agent_version = v.into();
            self
        }

        /// Sets the value of [description][crate::model::environment_history::Entry::description].
        pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.description = v.into();
            self
        }

        /// Sets the value of [create_time][crate::model::environment_history::Entry::create_time].
        pub fn set_create_time<T>(mut self, v: T) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.create_time = std::option::Option::Some(v.into());
            self
        }

        /// Sets or clears the value of [create_time][crate::model::environment_history::Entry::create_time].
        pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
        where
            T: std::convert::Into<wkt::Timestamp>,
        {
            self.create_time = v.map(|x| x.into());
            self
        }
    }

    impl wkt::message::Message for Entry {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.dialogflow.v2.EnvironmentHistory.Entry"
        }
    }
}

/// An enum value not known to this version of the library.
///
/// Enums in this crate use this type to preserve values received from the
/// service, or set by the application, that do not match any known variant.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownEnumValue(UnknownEnumRepr);

#[derive(Clone, Debug, PartialEq)]
enum UnknownEnumRepr {
    Integer(i32),
    String(std::string::String),
}

impl UnknownEnumValue {
    pub(crate) fn integer(value: i32) -> Self {
        Self(UnknownEnumRepr::Integer(value))
    }

    pub(crate) fn string(value: &str) -> Self {
        Self(UnknownEnumRepr::String(value.to_string()))
    }

    /// The integer value, if the unknown value was an integer.
    pub fn value(&self) -> std::option::Option<i32> {
        match &self.0 {
            UnknownEnumRepr::Integer(v) => std::option::Option::Some(*v),
            UnknownEnumRepr::String(_) => std::option::Option::None,
        }
    }

    /// The string value, if the unknown value was a string.
    pub fn name(&self) -> std::option::Option<&str> {
        match &self.0 {
            UnknownEnumRepr::Integer(_) => std::option::Option::None,
            UnknownEnumRepr::String(v) => std::option::Option::Some(v.as_str()),
        }
    }
}

pub(crate) fn is_default<T>(value: &T) -> bool
where
    T: std::default::Default + std::cmp::PartialEq,
{
    *value == T::default()
}

pub(crate) fn display_enum(
    f: &mut std::fmt::Formatter<'_>,
    name: std::option::Option<&str>,
    value: std::option::Option<i32>,
) -> std::fmt::Result {
    match (name, value) {
        (std::option::Option::Some(n), _) => f.write_str(n),
        (std::option::Option::None, std::option::Option::Some(v)) => write!(f, "{v}"),
        (std::option::Option::None, std::option::Option::None) => f.write_str("UNKNOWN"),
    }
}

pub(crate) fn serialize_enum<S>(
    serializer: S,
    name: std::option::Option<&str>,
    value: std::option::Option<i32>,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match name {
        std::option::Option::Some(n) => serializer.serialize_str(n),
        std::option::Option::None => serializer.serialize_i32(value.unwrap_or_default()),
    }
}

/// Deserializes enums from either their string or integer representation.
pub(crate) struct EnumVisitor<T> {
    name: &'static str,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> EnumVisitor<T> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for EnumVisitor<T>
where
    T: std::convert::From<i32> + for<'a> std::convert::From<&'a str>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a string or an integer for enum {}", self.name)
    }

    fn visit_i64<E>(self, value: i64) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(<T as std::convert::From<i32>>::from)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Signed(value), &self))
    }

    fn visit_u64<E>(self, value: u64) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        i32::try_from(value)
            .map(<T as std::convert::From<i32>>::from)
            .map_err(|_| E::invalid_value(serde::de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> std::result::Result<T, E>
    where
        E: serde::de::Error,
    {
        std::result::Result::Ok(<T as std::convert::From<&str>>::from(value))
    }
}
