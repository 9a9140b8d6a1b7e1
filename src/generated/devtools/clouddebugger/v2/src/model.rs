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

/// Represents a message with parameters.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FormatMessage {
    /// Format template for the message. The `format` uses placeholders `$0`, `$1`,
    /// etc. to reference parameters. `$$` can be used to denote the `$` character.
    ///
    /// Examples:
    ///
    /// * `Failed to load '$0' which helps debug $1 the first time it
    ///   is loaded.  Again, $0 is very important.`
    /// * `Please pay $$10 to use $0 instead of $1.`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub format: std::string::String,

    /// Optional parameters to be embedded into the message.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parameters: std::vec::Vec<std::string::String>,
}

impl FormatMessage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [format][crate::model::FormatMessage::format].
    pub fn set_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.format = v.into();
        self
    }

    /// Sets the value of [parameters][crate::model::FormatMessage::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.parameters = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for FormatMessage {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.FormatMessage"
    }
}

/// Represents a contextual status message. The message can indicate an error or
/// informational status, and refer to specific parts of the containing object.
/// For example, the `Breakpoint.status` field can indicate an error referring
/// to the `BREAKPOINT_SOURCE_LOCATION` with the message `Location not found`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusMessage {
    /// Distinguishes errors from informational messages.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub is_error: bool,

    /// Reference to which the message applies.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub refers_to: crate::model::status_message::Reference,

    /// Status message text.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub description: std::option::Option<crate::model::FormatMessage>,
}

impl StatusMessage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_error][crate::model::StatusMessage::is_error].
    pub fn set_is_error<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_error = v.into();
        self
    }

    /// Sets the value of [refers_to][crate::model::StatusMessage::refers_to].
    pub fn set_refers_to<T: std::convert::Into<crate::model::status_message::Reference>>(mut self, v: T) -> Self {
        self.refers_to = v.into();
        self
    }

    /// Sets the value of [description][crate::model::StatusMessage::description].
    pub fn set_description<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FormatMessage>,
    {
        self.description = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::StatusMessage::description].
    pub fn set_or_clear_description<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FormatMessage>,
    {
        self.description = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for StatusMessage {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.StatusMessage"
    }
}

/// Defines additional types related to [StatusMessage].
pub mod status_message {
    #[allow(unused_imports)]
    use super::*;

    /// Enumerates references to which the message applies.
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
    pub enum Reference {
        /// Status doesn't refer to any particular input.
        Unspecified,
        /// Status applies to the breakpoint and is related to its location.
        BreakpointSourceLocation,
        /// Status applies to the breakpoint and is related to its condition.
        BreakpointCondition,
        /// Status applies to the breakpoint and is related to its expressions.
        BreakpointExpression,
        /// Status applies to the breakpoint and is related to its age.
        BreakpointAge,
        /// Status applies to the entire variable.
        VariableName,
        /// Status applies to variable value (variable name is valid).
        VariableValue,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Reference::value] or
        /// [Reference::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl Reference {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Unspecified => std::option::Option::Some(0),
                Self::BreakpointSourceLocation => std::option::Option::Some(3),
                Self::BreakpointCondition => std::option::Option::Some(4),
                Self::BreakpointExpression => std::option::Option::Some(7),
                Self::BreakpointAge => std::option::Option::Some(8),
                Self::VariableName => std::option::Option::Some(5),
                Self::VariableValue => std::option::Option::Some(6),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Unspecified => std::option::Option::Some("UNSPECIFIED"),
                Self::BreakpointSourceLocation => std::option::Option::Some("BREAKPOINT_SOURCE_LOCATION"),
                Self::BreakpointCondition => std::option::Option::Some("BREAKPOINT_CONDITION"),
                Self::BreakpointExpression => std::option::Option::Some("BREAKPOINT_EXPRESSION"),
                Self::BreakpointAge => std::option::Option::Some("BREAKPOINT_AGE"),
                Self::VariableName => std::option::Option::Some("VARIABLE_NAME"),
                Self::VariableValue => std::option::Option::Some("VARIABLE_VALUE"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for Reference {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for Reference {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for Reference {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                3 => Self::BreakpointSourceLocation,
                4 => Self::BreakpointCondition,
                7 => Self::BreakpointExpression,
                8 => Self::BreakpointAge,
                5 => Self::VariableName,
                6 => Self::VariableValue,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for Reference {
        fn from(value: &str) -> Self {
            match value {
                "UNSPECIFIED" => Self::Unspecified,
                "BREAKPOINT_SOURCE_LOCATION" => Self::BreakpointSourceLocation,
                "BREAKPOINT_CONDITION" => Self::BreakpointCondition,
                "BREAKPOINT_EXPRESSION" => Self::BreakpointExpression,
                "BREAKPOINT_AGE" => Self::BreakpointAge,
                "VARIABLE_NAME" => Self::VariableName,
                "VARIABLE_VALUE" => Self::VariableValue,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for Reference {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Reference {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<Reference>::new(".google.devtools.clouddebugger.v2.StatusMessage.Reference"))
        }
    }
}

/// Represents a location in the source code.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceLocation {
    /// Path to the source file within the source context of the target binary.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub path: std::string::String,

    /// Line inside the file. The first line in the file has the value `1`.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub line: i32,

    /// Column within a line. The first column in a line as the value `1`. Agents
    /// that do not support setting breakpoints on specific columns ignore this
    /// field.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub column: i32,
}

impl SourceLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][crate::model::SourceLocation::path].
    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [line][crate::model::SourceLocation::line].
    pub fn set_line<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.line = v.into();
        self
    }

    /// Sets the value of [column][crate::model::SourceLocation::column].
    pub fn set_column<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.column = v.into();
        self
    }
}

impl wkt::message::Message for SourceLocation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.SourceLocation"
    }
}

/// Represents a variable or an argument possibly of a compound object type.
/// Note how the following variables are represented:
///
/// 1) A simple variable:
///
/// ```norust
/// int x = 5
///
/// { name: "x", value: "5", type: "int" }  // Captured variable
/// ```
///
/// 2) A compound object:
///
/// ```norust
/// struct T {
///     int m1;
///     int m2;
/// };
/// T x = { 3, 7 };
///
/// {  // Captured variable
///     name: "x",
///     type: "T",
///     members { name: "m1", value: "3", type: "int" },
///     members { name: "m2", value: "7", type: "int" }
/// }
/// ```
///
/// 3) A pointer where the pointee was captured:
///
/// ```norust
/// T x = { 3, 7 };
/// T* p = &x;
///
/// {   // Captured variable
///     name: "p",
///     type: "T*",
///     value: "0x00500500",
///     members { name: "m1", value: "3", type: "int" },
///     members { name: "m2", value: "7", type: "int" }
/// }
/// ```
///
/// When using the shared variable table, the variable's members are stored in
/// the table and the variable itself refers to the table entry through
/// `var_table_index`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Variable {
    /// Name of the variable, if any.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Simple value of the variable.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub value: std::string::String,

    /// Variable type (e.g. `MyClass`). If the variable is split with
    /// `var_table_index`, `type` goes next to `value`. The interpretation of a type
    /// is agent specific. It is recommended to include the dynamic type rather than
    /// a static type of an object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// Members contained or pointed to by the variable.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub members: std::vec::Vec<crate::model::Variable>,

    /// Reference to a variable in the shared variable table. More than one variable
    /// can reference the same variable in the table. The `var_table_index` field is
    /// an index into `variable_table` in Breakpoint.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub var_table_index: std::option::Option<wkt::Int32Value>,

    /// Status associated with the variable. This field will usually stay unset. A
    /// status of a single variable only applies to that variable or expression. The
    /// rest of breakpoint data still remains valid. Variables might be reported in
    /// error state even when breakpoint is not in final state.
    ///
    /// The message may refer to variable name with `refers_to` set to
    /// `VARIABLE_NAME`. Alternatively `refers_to` will be set to `VARIABLE_VALUE`.
    /// In either case variable value and members will be unset.
    ///
    /// Example of error message applied to name: `Invalid expression syntax`.
    ///
    /// Example of information message applied to value: `Not captured`.
    ///
    /// Examples of error message applied to value:
    ///
    /// * `Malformed string`,
    /// * `Field f not found in class C`
    /// * `Null pointer dereference`
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::StatusMessage>,
}

impl Variable {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Variable::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [value][crate::model::Variable::value].
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }

    /// Sets the value of [type][crate::model::Variable::r#type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [members][crate::model::Variable::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.members = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [var_table_index][crate::model::Variable::var_table_index].
    pub fn set_var_table_index<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Int32Value>,
    {
        self.var_table_index = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [var_table_index][crate::model::Variable::var_table_index].
    pub fn set_or_clear_var_table_index<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Int32Value>,
    {
        self.var_table_index = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status][crate::model::Variable::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StatusMessage>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Variable::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::StatusMessage>,
    {
        self.status = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Variable {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.Variable"
    }
}

/// Represents a stack frame context.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StackFrame {
    /// Demangled function name at the call site.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub function: std::string::String,

    /// Source location of the call site.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location: std::option::Option<crate::model::SourceLocation>,

    /// Set of arguments passed to this function. Note that this might not be
    /// populated for all stack frames.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub arguments: std::vec::Vec<crate::model::Variable>,

    /// Set of local variables at the stack frame location. Note that this might not
    /// be populated for all stack frames.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub locals: std::vec::Vec<crate::model::Variable>,
}

impl StackFrame {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [function][crate::model::StackFrame::function].
    pub fn set_function<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.function = v.into();
        self
    }

    /// Sets the value of [location][crate::model::StackFrame::location].
    pub fn set_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SourceLocation>,
    {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::StackFrame::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SourceLocation>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [arguments][crate::model::StackFrame::arguments].
    pub fn set_arguments<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [locals][crate::model::StackFrame::locals].
    pub fn set_locals<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.locals = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for StackFrame {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.StackFrame"
    }
}

/// Represents the breakpoint specification, status and results.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Breakpoint {
    /// Breakpoint identifier, unique in the scope of the debuggee.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Action that the agent should perform when the code at the breakpoint
    /// location is hit.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub action: crate::model::breakpoint::Action,

    /// Breakpoint source location.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub location: std::option::Option<crate::model::SourceLocation>,

    /// Condition that triggers the breakpoint. The condition is a compound boolean
    /// expression composed using expressions in a programming language at the
    /// source location.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub condition: std::string::String,

    /// List of read-only expressions to evaluate at the breakpoint location. The
    /// expressions are composed using expressions in the programming language at
    /// the source location. If the breakpoint action is `LOG`, the evaluated
    /// expressions are included in log statements.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub expressions: std::vec::Vec<std::string::String>,

    /// Only relevant when action is `LOG`. Defines the message to log when the
    /// breakpoint hits. The message may include parameter placeholders `$0`, `$1`,
    /// etc. These placeholders are replaced with the evaluated value of the
    /// appropriate expression. Expressions not referenced in `log_message_format`
    /// are not logged.
    ///
    /// Example: `Message received, id = $0, count = $1` with `expressions` = `[
    /// message.id, message.count ]`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub log_message_format: std::string::String,

    /// Indicates the severity of the log. Only relevant when action is `LOG`.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub log_level: crate::model::breakpoint::LogLevel,

    /// When true, indicates that this is a final result and the breakpoint state
    /// will not change from here on.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub is_final_state: bool,

    /// Time this breakpoint was created by the server in seconds resolution.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Time this breakpoint was finalized as seen by the server in seconds
    /// resolution.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub final_time: std::option::Option<wkt::Timestamp>,

    /// E-mail address of the user that created this breakpoint
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub user_email: std::string::String,

    /// Breakpoint status.
    ///
    /// The status includes an error flag and a human readable message. This field
    /// is usually unset. The message can be either informational or an error
    /// message. Regardless, clients should always display the text message back to
    /// the user.
    ///
    /// Error status indicates complete failure of the breakpoint.
    ///
    /// Example (non-final state): `Still loading symbols...`
    ///
    /// Examples (final state):
    ///
    /// * `Invalid line number` referring to location
    /// * `Field f not found in class C` referring to condition
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::StatusMessage>,

    /// The stack at breakpoint time, where stack_frames[0] represents the most
    /// recently entered function.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub stack_frames: std::vec::Vec<crate::model::StackFrame>,

    /// Values of evaluated expressions at breakpoint time. The evaluated
    /// expressions appear in exactly the same order they are listed in the
    /// `expressions` field. The `name` field holds the original expression text,
    /// the `value` or `members` field holds the result of the evaluated expression.
    /// If the expression cannot be evaluated, the `status` inside the `Variable`
    /// will indicate an error and contain the error text.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub evaluated_expressions: std::vec::Vec<crate::model::Variable>,

    /// The `variable_table` exists to aid with computation, memory and network
    /// traffic optimization.  It enables storing a variable once and reference it
    /// from multiple variables, including variables stored in the `variable_table`
    /// itself. For example, the same `this` object, which may appear at many levels
    /// of the stack, can have all of its data stored once in this table.  The stack
    /// frame variables then would hold only a reference to it.
    ///
    /// The variable `var_table_index` field is an index into this repeated field.
    /// The stored objects are nameless and get their name from the referencing
    /// variable. The effective variable is a merge of the referencing variable and
    /// the referenced variable.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub variable_table: std::vec::Vec<crate::model::Variable>,

    /// A set of custom breakpoint properties, populated by the agent, to be
    /// displayed to the user.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl Breakpoint {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Breakpoint::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [action][crate::model::Breakpoint::action].
    pub fn set_action<T: std::convert::Into<crate::model::breakpoint::Action>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [location][crate::model::Breakpoint::location].
    pub fn set_location<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SourceLocation>,
    {
        self.location = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::Breakpoint::location].
    pub fn set_or_clear_location<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SourceLocation>,
    {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [condition][crate::model::Breakpoint::condition].
    pub fn set_condition<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.condition = v.into();
        self
    }

    /// Sets the value of [expressions][crate::model::Breakpoint::expressions].
    pub fn set_expressions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.expressions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [log_message_format][crate::model::Breakpoint::log_message_format].
    pub fn set_log_message_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_message_format = v.into();
        self
    }

    /// Sets the value of [log_level][crate::model::Breakpoint::log_level].
    pub fn set_log_level<T: std::convert::Into<crate::model::breakpoint::LogLevel>>(mut self, v: T) -> Self {
        self.log_level = v.into();
        self
    }

    /// Sets the value of [is_final_state][crate::model::Breakpoint::is_final_state].
    pub fn set_is_final_state<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_final_state = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::Breakpoint::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::Breakpoint::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [final_time][crate::model::Breakpoint::final_time].
    pub fn set_final_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.final_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [final_time][crate::model::Breakpoint::final_time].
    pub fn set_or_clear_final_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.final_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_email][crate::model::Breakpoint::user_email].
    pub fn set_user_email<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.user_email = v.into();
        self
    }

    /// Sets the value of [status][crate::model::Breakpoint::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StatusMessage>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Breakpoint::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::StatusMessage>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [stack_frames][crate::model::Breakpoint::stack_frames].
    pub fn set_stack_frames<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::StackFrame>,
    {
        use std::iter::Iterator;
        self.stack_frames = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [evaluated_expressions][crate::model::Breakpoint::evaluated_expressions].
    pub fn set_evaluated_expressions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.evaluated_expressions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [variable_table][crate::model::Breakpoint::variable_table].
    pub fn set_variable_table<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Variable>,
    {
        use std::iter::Iterator;
        self.variable_table = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][crate::model::Breakpoint::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for Breakpoint {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.Breakpoint"
    }
}

/// Defines additional types related to [Breakpoint].
pub mod breakpoint {
    #[allow(unused_imports)]
    use super::*;

    /// Actions that can be taken when a breakpoint hits. Agents should reject
    /// breakpoints with unsupported or unknown action values.
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
    pub enum Action {
        /// Capture stack frame and variables and update the breakpoint. The data is
        /// only captured once. After that the breakpoint is set in a final state.
        Capture,
        /// Log each breakpoint hit. The breakpoint remains active until deleted or
        /// expired.
        Log,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Action::value] or
        /// [Action::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl Action {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Capture => std::option::Option::Some(0),
                Self::Log => std::option::Option::Some(1),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Capture => std::option::Option::Some("CAPTURE"),
                Self::Log => std::option::Option::Some("LOG"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for Action {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for Action {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for Action {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Capture,
                1 => Self::Log,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for Action {
        fn from(value: &str) -> Self {
            match value {
                "CAPTURE" => Self::Capture,
                "LOG" => Self::Log,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for Action {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Action {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<Action>::new(".google.devtools.clouddebugger.v2.Breakpoint.Action"))
        }
    }


    /// Log severity levels.
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
    pub enum LogLevel {
        /// Information log message.
        Info,
        /// Warning log message.
        Warning,
        /// Error log message.
        Error,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [LogLevel::value] or
        /// [LogLevel::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl LogLevel {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Info => std::option::Option::Some(0),
                Self::Warning => std::option::Option::Some(1),
                Self::Error => std::option::Option::Some(2),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Info => std::option::Option::Some("INFO"),
                Self::Warning => std::option::Option::Some("WARNING"),
                Self::Error => std::option::Option::Some("ERROR"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for LogLevel {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for LogLevel {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for LogLevel {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Info,
                1 => Self::Warning,
                2 => Self::Error,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for LogLevel {
        fn from(value: &str) -> Self {
            match value {
                "INFO" => Self::Info,
                "WARNING" => Self::Warning,
                "ERROR" => Self::Error,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for LogLevel {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for LogLevel {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<LogLevel>::new(".google.devtools.clouddebugger.v2.Breakpoint.LogLevel"))
        }
    }
}

/// Represents the debugged application. The application may include one or more
/// replicated processes executing the same code. Each of these processes is
/// attached with a debugger agent, carrying out the debugging commands. Agents
/// attached to the same debuggee identify themselves as such by using exactly
/// the same Debuggee message value when registering.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Debuggee {
    /// Unique identifier for the debuggee generated by the controller service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub id: std::string::String,

    /// Project the debuggee is associated with. Use project number or id when
    /// registering a Google Cloud Platform project.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,

    /// Uniquifier to further distinguish the application. It is possible that
    /// different applications might have identical values in the debuggee message,
    /// thus, incorrectly identified as a single application by the Controller
    /// service. This field adds salt to further distinguish the application. Agents
    /// should consider seeding this field with value that identifies the code,
    /// binary, configuration and environment.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub uniquifier: std::string::String,

    /// Human readable description of the debuggee. Including a human-readable
    /// project name, environment name and version information is recommended.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// If set to `true`, indicates that Controller service does not detect any
    /// activity from the debuggee agents and the application is possibly stopped.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub is_inactive: bool,

    /// Version ID of the agent. Schema: `domain/language-platform/vmajor.minor`
    /// (for example `google.com/java-gcp/v1.1`).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub agent_version: std::string::String,

    /// If set to `true`, indicates that the agent should disable itself and detach
    /// from the debuggee.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub is_disabled: bool,

    /// Human readable message to be displayed to the user about this debuggee.
    /// Absence of this field indicates no status. The message can be either
    /// informational or an error status.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub status: std::option::Option<crate::model::StatusMessage>,

    /// References to the locations and revisions of the source code used in the
    /// deployed application.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_contexts: std::vec::Vec<crate::model::SourceContext>,

    /// A set of custom debuggee properties, populated by the agent, to be displayed
    /// to the user.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl Debuggee {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Debuggee::id].
    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [project][crate::model::Debuggee::project].
    pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// Sets the value of [uniquifier][crate::model::Debuggee::uniquifier].
    pub fn set_uniquifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.uniquifier = v.into();
        self
    }

    /// Sets the value of [description][crate::model::Debuggee::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [is_inactive][crate::model::Debuggee::is_inactive].
    pub fn set_is_inactive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_inactive = v.into();
        self
    }

    /// Sets the value of [agent_version][crate::model::Debuggee::agent_version].
    pub fn set_agent_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_version = v.into();
        self
    }

    /// Sets the value of [is_disabled][crate::model::Debuggee::is_disabled].
    pub fn set_is_disabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_disabled = v.into();
        self
    }

    /// Sets the value of [status][crate::model::Debuggee::status].
    pub fn set_status<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StatusMessage>,
    {
        self.status = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [status][crate::model::Debuggee::status].
    pub fn set_or_clear_status<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::StatusMessage>,
    {
        self.status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [source_contexts][crate::model::Debuggee::source_contexts].
    pub fn set_source_contexts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SourceContext>,
    {
        use std::iter::Iterator;
        self.source_contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][crate::model::Debuggee::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for Debuggee {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.Debuggee"
    }
}

/// A SourceContext is a reference to a tree of files. A SourceContext together
/// with a path point to a unique revision of a single file or directory.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceContext {
    /// A SourceContext can refer any one of the following types of repositories.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub context: std::option::Option<crate::model::source_context::Context>,
}

impl SourceContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [context][crate::model::SourceContext::context].
    ///
    /// Note that all the setters affecting `context` are mutually
    /// exclusive.
    pub fn set_context<T: std::convert::Into<std::option::Option<crate::model::source_context::Context>>>(
        mut self,
        v: T,
    ) -> Self {
        self.context = v.into();
        self
    }

    /// The value of [context][crate::model::SourceContext::context]
    /// if it holds a `CloudRepo`, `None` if the field is not set or
    /// holds a different branch.
    pub fn cloud_repo(&self) -> std::option::Option<&std::boxed::Box<crate::model::CloudRepoSourceContext>> {
        #[allow(unreachable_patterns)]
        self.context.as_ref().and_then(|v| match v {
            crate::model::source_context::Context::CloudRepo(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [context][crate::model::SourceContext::context]
    /// to hold a `CloudRepo`.
    ///
    /// Note that all the setters affecting `context` are
    /// mutually exclusive.
    pub fn set_cloud_repo<T: std::convert::Into<std::boxed::Box<crate::model::CloudRepoSourceContext>>>(mut self, v: T) -> Self {
        self.context = std::option::Option::Some(crate::model::source_context::Context::CloudRepo(v.into()));
        self
    }

    /// The value of [context][crate::model::SourceContext::context]
    /// if it holds a `Gerrit`, `None` if the field is not set or
    /// holds a different branch.
    pub fn gerrit(&self) -> std::option::Option<&std::boxed::Box<crate::model::GerritSourceContext>> {
        #[allow(unreachable_patterns)]
        self.context.as_ref().and_then(|v| match v {
            crate::model::source_context::Context::Gerrit(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [context][crate::model::SourceContext::context]
    /// to hold a `Gerrit`.
    ///
    /// Note that all the setters affecting `context` are
    /// mutually exclusive.
    pub fn set_gerrit<T: std::convert::Into<std::boxed::Box<crate::model::GerritSourceContext>>>(mut self, v: T) -> Self {
        self.context = std::option::Option::Some(crate::model::source_context::Context::Gerrit(v.into()));
        self
    }

    /// The value of [context][crate::model::SourceContext::context]
    /// if it holds a `Git`, `None` if the field is not set or
    /// holds a different branch.
    pub fn git(&self) -> std::option::Option<&std::boxed::Box<crate::model::GitSourceContext>> {
        #[allow(unreachable_patterns)]
        self.context.as_ref().and_then(|v| match v {
            crate::model::source_context::Context::Git(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [context][crate::model::SourceContext::context]
    /// to hold a `Git`.
    ///
    /// Note that all the setters affecting `context` are
    /// mutually exclusive.
    pub fn set_git<T: std::convert::Into<std::boxed::Box<crate::model::GitSourceContext>>>(mut self, v: T) -> Self {
        self.context = std::option::Option::Some(crate::model::source_context::Context::Git(v.into()));
        self
    }
}

impl wkt::message::Message for SourceContext {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.SourceContext"
    }
}

/// Defines additional types related to [SourceContext].
pub mod source_context {
    #[allow(unused_imports)]
    use super::*;

    /// A SourceContext can refer any one of the following types of repositories.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Context {
        /// A SourceContext referring to a revision in a cloud repo.
        CloudRepo(std::boxed::Box<crate::model::CloudRepoSourceContext>),
        /// A SourceContext referring to a Gerrit project.
        Gerrit(std::boxed::Box<crate::model::GerritSourceContext>),
        /// A SourceContext referring to any third party Git repo (e.g. GitHub).
        Git(std::boxed::Box<crate::model::GitSourceContext>),
    }
}

/// An alias to a repo revision.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AliasContext {
    /// The alias kind.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub kind: crate::model::alias_context::Kind,

    /// The alias name.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl AliasContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::AliasContext::kind].
    pub fn set_kind<T: std::convert::Into<crate::model::alias_context::Kind>>(mut self, v: T) -> Self {
        self.kind = v.into();
        self
    }

    /// Sets the value of [name][crate::model::AliasContext::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for AliasContext {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.AliasContext"
    }
}

/// Defines additional types related to [AliasContext].
pub mod alias_context {
    #[allow(unused_imports)]
    use super::*;

    /// The type of an Alias.
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
    pub enum Kind {
        /// Do not use.
        Any,
        /// Git tag
        Fixed,
        /// Git branch
        Movable,
        /// OTHER is used to specify non-standard aliases, those not of the kinds
        /// above. For example, if a Git repo has a ref named "refs/foo/bar", it is
        /// considered to be of kind OTHER.
        Other,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Kind::value] or
        /// [Kind::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl Kind {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Any => std::option::Option::Some(0),
                Self::Fixed => std::option::Option::Some(1),
                Self::Movable => std::option::Option::Some(2),
                Self::Other => std::option::Option::Some(4),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Any => std::option::Option::Some("ANY"),
                Self::Fixed => std::option::Option::Some("FIXED"),
                Self::Movable => std::option::Option::Some("MOVABLE"),
                Self::Other => std::option::Option::Some("OTHER"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for Kind {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for Kind {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for Kind {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Any,
                1 => Self::Fixed,
                2 => Self::Movable,
                4 => Self::Other,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for Kind {
        fn from(value: &str) -> Self {
            match value {
                "ANY" => Self::Any,
                "FIXED" => Self::Fixed,
                "MOVABLE" => Self::Movable,
                "OTHER" => Self::Other,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for Kind {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Kind {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<Kind>::new(".google.devtools.source.v1.AliasContext.Kind"))
        }
    }
}

/// A CloudRepoSourceContext denotes a particular revision in a cloud repo (a
/// repo hosted by the Google Cloud Platform).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloudRepoSourceContext {
    /// The ID of the repo.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub repo_id: std::option::Option<crate::model::RepoId>,

    /// A revision in a cloud repo can be identified by either its revision ID or
    /// its Alias.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub revision: std::option::Option<crate::model::cloud_repo_source_context::Revision>,
}

impl CloudRepoSourceContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [repo_id][crate::model::CloudRepoSourceContext::repo_id].
    pub fn set_repo_id<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RepoId>,
    {
        self.repo_id = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [repo_id][crate::model::CloudRepoSourceContext::repo_id].
    pub fn set_or_clear_repo_id<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::RepoId>,
    {
        self.repo_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [revision][crate::model::CloudRepoSourceContext::revision].
    ///
    /// Note that all the setters affecting `revision` are mutually
    /// exclusive.
    pub fn set_revision<T: std::convert::Into<std::option::Option<crate::model::cloud_repo_source_context::Revision>>>(
        mut self,
        v: T,
    ) -> Self {
        self.revision = v.into();
        self
    }

    /// The value of [revision][crate::model::CloudRepoSourceContext::revision]
    /// if it holds a `RevisionId`, `None` if the field is not set or
    /// holds a different branch.
    pub fn revision_id(&self) -> std::option::Option<&std::string::String> {
        #[allow(unreachable_patterns)]
        self.revision.as_ref().and_then(|v| match v {
            crate::model::cloud_repo_source_context::Revision::RevisionId(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [revision][crate::model::CloudRepoSourceContext::revision]
    /// to hold a `RevisionId`.
    ///
    /// Note that all the setters affecting `revision` are
    /// mutually exclusive.
    pub fn set_revision_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.revision = std::option::Option::Some(crate::model::cloud_repo_source_context::Revision::RevisionId(v.into()));
        self
    }

    /// The value of [revision][crate::model::CloudRepoSourceContext::revision]
    /// if it holds a `AliasName`, `None` if the field is not set or
    /// holds a different branch.
    pub fn alias_name(&self) -> std::option::Option<&std::string::String> {
        #[allow(unreachable_patterns)]
        self.revision.as_ref().and_then(|v| match v {
            crate::model::cloud_repo_source_context::Revision::AliasName(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [revision][crate::model::CloudRepoSourceContext::revision]
    /// to hold a `AliasName`.
    ///
    /// Note that all the setters affecting `revision` are
    /// mutually exclusive.
    pub fn set_alias_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.revision = std::option::Option::Some(crate::model::cloud_repo_source_context::Revision::AliasName(v.into()));
        self
    }

    /// The value of [revision][crate::model::CloudRepoSourceContext::revision]
    /// if it holds a `AliasContext`, `None` if the field is not set or
    /// holds a different branch.
    pub fn alias_context(&self) -> std::option::Option<&std::boxed::Box<crate::model::AliasContext>> {
        #[allow(unreachable_patterns)]
        self.revision.as_ref().and_then(|v| match v {
            crate::model::cloud_repo_source_context::Revision::AliasContext(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [revision][crate::model::CloudRepoSourceContext::revision]
    /// to hold a `AliasContext`.
    ///
    /// Note that all the setters affecting `revision` are
    /// mutually exclusive.
    pub fn set_alias_context<T: std::convert::Into<std::boxed::Box<crate::model::AliasContext>>>(mut self, v: T) -> Self {
        self.revision = std::option::Option::Some(crate::model::cloud_repo_source_context::Revision::AliasContext(v.into()));
        self
    }
}

impl wkt::message::Message for CloudRepoSourceContext {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.CloudRepoSourceContext"
    }
}

/// Defines additional types related to [CloudRepoSourceContext].
pub mod cloud_repo_source_context {
    #[allow(unused_imports)]
    use super::*;

    /// A revision in a cloud repo can be identified by either its revision ID or
    /// its Alias.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Revision {
        /// A revision ID.
        RevisionId(std::string::String),
        /// The name of an alias (branch, tag, etc.).
        AliasName(std::string::String),
        /// An alias, which may be a branch or tag.
        AliasContext(std::boxed::Box<crate::model::AliasContext>),
    }
}

/// A SourceContext referring to a Gerrit project.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GerritSourceContext {
    /// The URI of a running Gerrit instance.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub host_uri: std::string::String,

    /// The full project name within the host. Projects may be nested, so
    /// "project/subproject" is a valid project name. The "repo name" is
    /// hostURI/project.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub gerrit_project: std::string::String,

    /// A revision in a Gerrit project can be identified by either its revision ID
    /// or its alias.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub revision: std::option::Option<crate::model::gerrit_source_context::Revision>,
}

impl GerritSourceContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [host_uri][crate::model::GerritSourceContext::host_uri].
    pub fn set_host_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host_uri = v.into();
        self
    }

    /// Sets the value of [gerrit_project][crate::model::GerritSourceContext::gerrit_project].
    pub fn set_gerrit_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.gerrit_project = v.into();
        self
    }

    /// Sets the value of [revision][crate::model::GerritSourceContext::revision].
    ///
    /// Note that all the setters affecting `revision` are mutually
    /// exclusive.
    pub fn set_revision<T: std::convert::Into<std::option::Option<crate::model::gerrit_source_context::Revision>>>(
        mut self,
        v: T,
    ) -> Self {
        self.revision = v.into();
        self
    }

    /// The value of [revision][crate::model::GerritSourceContext::revision]
    /// if it holds a `RevisionId`, `None` if the field is not set or
    /// holds a different branch.
    pub fn revision_id(&self) -> std::option::Option<&std::string::String> {
        #[allow(unreachable_patterns)]
        self.revision.as_ref().and_then(|v| match v {
            crate::model::gerrit_source_context::Revision::RevisionId(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [revision][crate::model::GerritSourceContext::revision]
    /// to hold a `RevisionId`.
    ///
    /// Note that all the setters affecting `revision` are
    /// mutually exclusive.
    pub fn set_revision_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.revision = std::option::Option::Some(crate::model::gerrit_source_context::Revision::RevisionId(v.into()));
        self
    }

    /// The value of [revision][crate::model::GerritSourceContext::revision]
    /// if it holds a `AliasName`, `None` if the field is not set or
    /// holds a different branch.
    pub fn alias_name(&self) -> std::option::Option<&std::string::String> {
        #[allow(unreachable_patterns)]
        self.revision.as_ref().and_then(|v| match v {
            crate::model::gerrit_source_context::Revision::AliasName(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [revision][crate::model::GerritSourceContext::revision]
    /// to hold a `AliasName`.
    ///
    /// Note that all the setters affecting `revision` are
    /// mutually exclusive.
    pub fn set_alias_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.revision = std::option::Option::Some(crate::model::gerrit_source_context::Revision::AliasName(v.into()));
        self
    }

    /// The value of [revision][crate::model::GerritSourceContext::revision]
    /// if it holds a `AliasContext`, `None` if the field is not set or
    /// holds a different branch.
    pub fn alias_context(&self) -> std::option::Option<&std::boxed::Box<crate::model::AliasContext>> {
        #[allow(unreachable_patterns)]
        self.revision.as_ref().and_then(|v| match v {
            crate::model::gerrit_source_context::Revision::AliasContext(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [revision][crate::model::GerritSourceContext::revision]
    /// to hold a `AliasContext`.
    ///
    /// Note that all the setters affecting `revision` are
    /// mutually exclusive.
    pub fn set_alias_context<T: std::convert::Into<std::boxed::Box<crate::model::AliasContext>>>(mut self, v: T) -> Self {
        self.revision = std::option::Option::Some(crate::model::gerrit_source_context::Revision::AliasContext(v.into()));
        self
    }
}

impl wkt::message::Message for GerritSourceContext {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.GerritSourceContext"
    }
}

/// Defines additional types related to [GerritSourceContext].
pub mod gerrit_source_context {
    #[allow(unused_imports)]
    use super::*;

    /// A revision in a Gerrit project can be identified by either its revision ID
    /// or its alias.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Revision {
        /// A revision (commit) ID.
        RevisionId(std::string::String),
        /// The name of an alias (branch, tag, etc.).
        AliasName(std::string::String),
        /// An alias, which may be a branch or tag.
        AliasContext(std::boxed::Box<crate::model::AliasContext>),
    }
}

/// A GitSourceContext denotes a particular revision in a third party Git
/// repository (e.g. GitHub).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GitSourceContext {
    /// Git repository URL.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub url: std::string::String,

    /// Git commit hash. required.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub revision_id: std::string::String,
}

impl GitSourceContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][crate::model::GitSourceContext::url].
    pub fn set_url<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.url = v.into();
        self
    }

    /// Sets the value of [revision_id][crate::model::GitSourceContext::revision_id].
    pub fn set_revision_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.revision_id = v.into();
        self
    }
}

impl wkt::message::Message for GitSourceContext {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.GitSourceContext"
    }
}

/// A unique identifier for a cloud repo.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RepoId {
    /// A cloud repository can be identified by either its project ID and repository
    /// name combination, or its globally unique identifier.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub id: std::option::Option<crate::model::repo_id::Id>,
}

impl RepoId {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::RepoId::id].
    ///
    /// Note that all the setters affecting `id` are mutually
    /// exclusive.
    pub fn set_id<T: std::convert::Into<std::option::Option<crate::model::repo_id::Id>>>(
        mut self,
        v: T,
    ) -> Self {
        self.id = v.into();
        self
    }

    /// The value of [id][crate::model::RepoId::id]
    /// if it holds a `ProjectRepoId`, `None` if the field is not set or
    /// holds a different branch.
    pub fn project_repo_id(&self) -> std::option::Option<&std::boxed::Box<crate::model::ProjectRepoId>> {
        #[allow(unreachable_patterns)]
        self.id.as_ref().and_then(|v| match v {
            crate::model::repo_id::Id::ProjectRepoId(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [id][crate::model::RepoId::id]
    /// to hold a `ProjectRepoId`.
    ///
    /// Note that all the setters affecting `id` are
    /// mutually exclusive.
    pub fn set_project_repo_id<T: std::convert::Into<std::boxed::Box<crate::model::ProjectRepoId>>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(crate::model::repo_id::Id::ProjectRepoId(v.into()));
        self
    }

    /// The value of [id][crate::model::RepoId::id]
    /// if it holds a `Uid`, `None` if the field is not set or
    /// holds a different branch.
    pub fn uid(&self) -> std::option::Option<&std::string::String> {
        #[allow(unreachable_patterns)]
        self.id.as_ref().and_then(|v| match v {
            crate::model::repo_id::Id::Uid(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [id][crate::model::RepoId::id]
    /// to hold a `Uid`.
    ///
    /// Note that all the setters affecting `id` are
    /// mutually exclusive.
    pub fn set_uid<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(crate::model::repo_id::Id::Uid(v.into()));
        self
    }
}

impl wkt::message::Message for RepoId {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.RepoId"
    }
}

/// Defines additional types related to [RepoId].
pub mod repo_id {
    #[allow(unused_imports)]
    use super::*;

    /// A cloud repository can be identified by either its project ID and repository
    /// name combination, or its globally unique identifier.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Id {
        /// A combination of a project ID and a repo name.
        ProjectRepoId(std::boxed::Box<crate::model::ProjectRepoId>),
        /// A server-assigned, globally unique identifier.
        Uid(std::string::String),
    }
}

/// Selects a repo using a Google Cloud Platform project ID (e.g. winged-
/// cargo-31) and a repo name within that project.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProjectRepoId {
    /// The ID of the project.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project_id: std::string::String,

    /// The name of the repo. Leave empty for the default repo.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub repo_name: std::string::String,
}

impl ProjectRepoId {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::ProjectRepoId::project_id].
    pub fn set_project_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [repo_name][crate::model::ProjectRepoId::repo_name].
    pub fn set_repo_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.repo_name = v.into();
        self
    }
}

impl wkt::message::Message for ProjectRepoId {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.source.v1.ProjectRepoId"
    }
}

/// Request to register a debuggee.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegisterDebuggeeRequest {
    /// Required. Debuggee information to register. The fields `project`,
    /// `uniquifier`, `description` and `agent_version` of the debuggee must be set.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub debuggee: std::option::Option<crate::model::Debuggee>,
}

impl RegisterDebuggeeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee][crate::model::RegisterDebuggeeRequest::debuggee].
    pub fn set_debuggee<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Debuggee>,
    {
        self.debuggee = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [debuggee][crate::model::RegisterDebuggeeRequest::debuggee].
    pub fn set_or_clear_debuggee<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Debuggee>,
    {
        self.debuggee = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RegisterDebuggeeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.RegisterDebuggeeRequest"
    }
}

/// Response for registering a debuggee.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegisterDebuggeeResponse {
    /// Debuggee resource. The field `id` is guaranteed to be set (in addition to
    /// the echoed fields). If the field `is_disabled` is set to `true`, the agent
    /// should disable itself by removing all breakpoints and detaching from the
    /// application. It should however continue to poll `RegisterDebuggee` until
    /// reenabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub debuggee: std::option::Option<crate::model::Debuggee>,
}

impl RegisterDebuggeeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee][crate::model::RegisterDebuggeeResponse::debuggee].
    pub fn set_debuggee<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Debuggee>,
    {
        self.debuggee = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [debuggee][crate::model::RegisterDebuggeeResponse::debuggee].
    pub fn set_or_clear_debuggee<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Debuggee>,
    {
        self.debuggee = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RegisterDebuggeeResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.RegisterDebuggeeResponse"
    }
}

/// Request to list active breakpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListActiveBreakpointsRequest {
    /// Required. Identifies the debuggee.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub debuggee_id: std::string::String,

    /// A token that, if specified, blocks the method call until the list of active
    /// breakpoints has changed, or a server-selected timeout has expired. The value
    /// should be set from the `next_wait_token` field in the last response. The
    /// initial value should be set to `"init"`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub wait_token: std::string::String,

    /// If set to `true` (recommended), returns `google.rpc.Code.OK` status and sets
    /// the `wait_expired` response field to `true` when the server-selected timeout
    /// has expired.
    ///
    /// If set to `false` (deprecated), returns `google.rpc.Code.ABORTED` status
    /// when the server-selected timeout has expired.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub success_on_timeout: bool,
}

impl ListActiveBreakpointsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::ListActiveBreakpointsRequest::debuggee_id].
    pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.debuggee_id = v.into();
        self
    }

    /// Sets the value of [wait_token][crate::model::ListActiveBreakpointsRequest::wait_token].
    pub fn set_wait_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.wait_token = v.into();
        self
    }

    /// Sets the value of [success_on_timeout][crate::model::ListActiveBreakpointsRequest::success_on_timeout].
    pub fn set_success_on_timeout<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.success_on_timeout = v.into();
        self
    }
}

impl wkt::message::Message for ListActiveBreakpointsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.ListActiveBreakpointsRequest"
    }
}

/// Response for listing active breakpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListActiveBreakpointsResponse {
    /// List of all active breakpoints. The fields `id` and `location` are
    /// guaranteed to be set on each breakpoint.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub breakpoints: std::vec::Vec<crate::model::Breakpoint>,

    /// A token that can be used in the next method call to block until the list of
    /// breakpoints changes.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_wait_token: std::string::String,

    /// If set to `true`, indicates that there is no change to the list of active
    /// breakpoints and the server-selected timeout has expired. The `breakpoints`
    /// field would be empty and should be ignored.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub wait_expired: bool,
}

impl ListActiveBreakpointsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoints][crate::model::ListActiveBreakpointsResponse::breakpoints].
    pub fn set_breakpoints<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Breakpoint>,
    {
        use std::iter::Iterator;
        self.breakpoints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_wait_token][crate::model::ListActiveBreakpointsResponse::next_wait_token].
    pub fn set_next_wait_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_wait_token = v.into();
        self
    }

    /// Sets the value of [wait_expired][crate::model::ListActiveBreakpointsResponse::wait_expired].
    pub fn set_wait_expired<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.wait_expired = v.into();
        self
    }
}

impl wkt::message::Message for ListActiveBreakpointsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.ListActiveBreakpointsResponse"
    }
}

/// Request to update an active breakpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateActiveBreakpointRequest {
    /// Required. Identifies the debuggee being debugged.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub debuggee_id: std::string::String,

    /// Required. Updated breakpoint information. The field `id` must be set. The
    /// agent must echo all Breakpoint specification fields in the update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub breakpoint: std::option::Option<crate::model::Breakpoint>,
}

impl UpdateActiveBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::UpdateActiveBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.debuggee_id = v.into();
        self
    }

    /// Sets the value of [breakpoint][crate::model::UpdateActiveBreakpointRequest::breakpoint].
    pub fn set_breakpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [breakpoint][crate::model::UpdateActiveBreakpointRequest::breakpoint].
    pub fn set_or_clear_breakpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateActiveBreakpointRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.UpdateActiveBreakpointRequest"
    }
}

/// Response for updating an active breakpoint. The message is defined to allow
/// future extensions.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateActiveBreakpointResponse {}

impl UpdateActiveBreakpointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for UpdateActiveBreakpointResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.UpdateActiveBreakpointResponse"
    }
}

/// Request to set a breakpoint
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetBreakpointRequest {
    /// Required. ID of the debuggee where the breakpoint is to be set.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub debuggee_id: std::string::String,

    /// Required. Breakpoint specification to set. The field `location` of the
    /// breakpoint must be set.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub breakpoint: std::option::Option<crate::model::Breakpoint>,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub client_version: std::string::String,
}

impl SetBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::SetBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.debuggee_id = v.into();
        self
    }

    /// Sets the value of [breakpoint][crate::model::SetBreakpointRequest::breakpoint].
    pub fn set_breakpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [breakpoint][crate::model::SetBreakpointRequest::breakpoint].
    pub fn set_or_clear_breakpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = v.map(|x| x.into());
        self
    }

    /// Sets the value of [client_version][crate::model::SetBreakpointRequest::client_version].
    pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_version = v.into();
        self
    }
}

impl wkt::message::Message for SetBreakpointRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.SetBreakpointRequest"
    }
}

/// Response for setting a breakpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetBreakpointResponse {
    /// Breakpoint resource. The field `id` is guaranteed to be set (in addition to
    /// the echoed fields).
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub breakpoint: std::option::Option<crate::model::Breakpoint>,
}

impl SetBreakpointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoint][crate::model::SetBreakpointResponse::breakpoint].
    pub fn set_breakpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [breakpoint][crate::model::SetBreakpointResponse::breakpoint].
    pub fn set_or_clear_breakpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for SetBreakpointResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.SetBreakpointResponse"
    }
}

/// Request to get breakpoint information.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetBreakpointRequest {
    /// Required. ID of the debuggee whose breakpoint to get.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub debuggee_id: std::string::String,

    /// Required. ID of the breakpoint to get.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub breakpoint_id: std::string::String,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub client_version: std::string::String,
}

impl GetBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::GetBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.debuggee_id = v.into();
        self
    }

    /// Sets the value of [breakpoint_id][crate::model::GetBreakpointRequest::breakpoint_id].
    pub fn set_breakpoint_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.breakpoint_id = v.into();
        self
    }

    /// Sets the value of [client_version][crate::model::GetBreakpointRequest::client_version].
    pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_version = v.into();
        self
    }
}

impl wkt::message::Message for GetBreakpointRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.GetBreakpointRequest"
    }
}

/// Response for getting breakpoint information.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetBreakpointResponse {
    /// Complete breakpoint state. The fields `id` and `location` are guaranteed to
    /// be set.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub breakpoint: std::option::Option<crate::model::Breakpoint>,
}

impl GetBreakpointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoint][crate::model::GetBreakpointResponse::breakpoint].
    pub fn set_breakpoint<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [breakpoint][crate::model::GetBreakpointResponse::breakpoint].
    pub fn set_or_clear_breakpoint<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Breakpoint>,
    {
        self.breakpoint = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for GetBreakpointResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.GetBreakpointResponse"
    }
}

/// Request to delete a breakpoint.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteBreakpointRequest {
    /// Required. ID of the debuggee whose breakpoint to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub debuggee_id: std::string::String,

    /// Required. ID of the breakpoint to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub breakpoint_id: std::string::String,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub client_version: std::string::String,
}

impl DeleteBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::DeleteBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.debuggee_id = v.into();
        self
    }

    /// Sets the value of [breakpoint_id][crate::model::DeleteBreakpointRequest::breakpoint_id].
    pub fn set_breakpoint_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.breakpoint_id = v.into();
        self
    }

    /// Sets the value of [client_version][crate::model::DeleteBreakpointRequest::client_version].
    pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_version = v.into();
        self
    }
}

impl wkt::message::Message for DeleteBreakpointRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.DeleteBreakpointRequest"
    }
}

/// Request to list breakpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBreakpointsRequest {
    /// Required. ID of the debuggee whose breakpoints to list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub debuggee_id: std::string::String,

    /// When set to `true`, the response includes the list of breakpoints set by any
    /// user. Otherwise, it includes only breakpoints set by the caller.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub include_all_users: bool,

    /// When set to `true`, the response includes active and inactive breakpoints.
    /// Otherwise, it includes only active breakpoints.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub include_inactive: bool,

    /// When set, the response includes only breakpoints with the specified action.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub action: std::option::Option<crate::model::list_breakpoints_request::BreakpointActionValue>,

    /// This field is deprecated. The following fields are always stripped out of
    /// the result: `stack_frames`, `evaluated_expressions` and `variable_table`.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub strip_results: bool,

    /// A wait token that, if specified, blocks the call until the breakpoints list
    /// has changed, or a server selected timeout has expired.  The value should be
    /// set from the last response. The error code `google.rpc.Code.ABORTED` (RPC)
    /// is returned on wait timeout, which should be called again with the same
    /// `wait_token`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub wait_token: std::string::String,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub client_version: std::string::String,
}

impl ListBreakpointsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::ListBreakpointsRequest::debuggee_id].
    pub fn set_debuggee_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.debuggee_id = v.into();
        self
    }

    /// Sets the value of [include_all_users][crate::model::ListBreakpointsRequest::include_all_users].
    pub fn set_include_all_users<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_all_users = v.into();
        self
    }

    /// Sets the value of [include_inactive][crate::model::ListBreakpointsRequest::include_inactive].
    pub fn set_include_inactive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_inactive = v.into();
        self
    }

    /// Sets the value of [action][crate::model::ListBreakpointsRequest::action].
    pub fn set_action<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::list_breakpoints_request::BreakpointActionValue>,
    {
        self.action = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [action][crate::model::ListBreakpointsRequest::action].
    pub fn set_or_clear_action<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::list_breakpoints_request::BreakpointActionValue>,
    {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [strip_results][crate::model::ListBreakpointsRequest::strip_results].
    pub fn set_strip_results<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.strip_results = v.into();
        self
    }

    /// Sets the value of [wait_token][crate::model::ListBreakpointsRequest::wait_token].
    pub fn set_wait_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.wait_token = v.into();
        self
    }

    /// Sets the value of [client_version][crate::model::ListBreakpointsRequest::client_version].
    pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_version = v.into();
        self
    }
}

impl wkt::message::Message for ListBreakpointsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.ListBreakpointsRequest"
    }
}

/// Defines additional types related to [ListBreakpointsRequest].
pub mod list_breakpoints_request {
    #[allow(unused_imports)]
    use super::*;

    /// Wrapper message for `Breakpoint.Action`. Defines a filter on the action
    /// field of breakpoints.
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct BreakpointActionValue {
        /// Only breakpoints with the specified action will pass the filter.
        #[serde(skip_serializing_if = "crate::model::is_default")]
        pub value: crate::model::breakpoint::Action,
    }

    impl BreakpointActionValue {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [value][crate::model::list_breakpoints_request::BreakpointActionValue::value].
        pub fn set_value<T: std::convert::Into<crate::model::breakpoint::Action>>(mut self, v: T) -> Self {
            self.value = v.into();
            self
        }
    }

    impl wkt::message::Message for BreakpointActionValue {
        fn typename() -> &'static str {
            "type.googleapis.com/google.devtools.clouddebugger.v2.ListBreakpointsRequest.BreakpointActionValue"
        }
    }
}

/// Response for listing breakpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBreakpointsResponse {
    /// List of breakpoints matching the request. The fields `id` and `location` are
    /// guaranteed to be set on each breakpoint. The fields: `stack_frames`,
    /// `evaluated_expressions` and `variable_table` are cleared on each breakpoint
    /// regardless of its status.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub breakpoints: std::vec::Vec<crate::model::Breakpoint>,

    /// A wait token that can be used in the next call to `list` (REST) or
    /// `ListBreakpoints` (RPC) to block until the list of breakpoints has changes.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_wait_token: std::string::String,
}

impl ListBreakpointsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoints][crate::model::ListBreakpointsResponse::breakpoints].
    pub fn set_breakpoints<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Breakpoint>,
    {
        use std::iter::Iterator;
        self.breakpoints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_wait_token][crate::model::ListBreakpointsResponse::next_wait_token].
    pub fn set_next_wait_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_wait_token = v.into();
        self
    }
}

impl wkt::message::Message for ListBreakpointsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.ListBreakpointsResponse"
    }
}

/// Request to list debuggees.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDebuggeesRequest {
    /// Required. Project number of a Google Cloud project whose debuggees to list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub project: std::string::String,

    /// When set to `true`, the result includes all debuggees. Otherwise, the result
    /// includes only debuggees that are active.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub include_inactive: bool,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub client_version: std::string::String,
}

impl ListDebuggeesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project][crate::model::ListDebuggeesRequest::project].
    pub fn set_project<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.project = v.into();
        self
    }

    /// Sets the value of [include_inactive][crate::model::ListDebuggeesRequest::include_inactive].
    pub fn set_include_inactive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_inactive = v.into();
        self
    }

    /// Sets the value of [client_version][crate::model::ListDebuggeesRequest::client_version].
    pub fn set_client_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.client_version = v.into();
        self
    }
}

impl wkt::message::Message for ListDebuggeesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.ListDebuggeesRequest"
    }
}

/// Response for listing debuggees.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDebuggeesResponse {
    /// List of debuggees accessible to the calling user. The fields `debuggee.id`
    /// and `description` are guaranteed to be set. The `description` field is a
    /// human readable field provided by agents and can be displayed to users.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub debuggees: std::vec::Vec<crate::model::Debuggee>,
}

impl ListDebuggeesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggees][crate::model::ListDebuggeesResponse::debuggees].
    pub fn set_debuggees<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Debuggee>,
    {
        use std::iter::Iterator;
        self.debuggees = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for ListDebuggeesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.devtools.clouddebugger.v2.ListDebuggeesResponse"
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
