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

/// Type of the classification problem.
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
pub enum ClassificationType {
    /// An un-set value of this enum.
    Unspecified,
    /// At most one label is allowed per example.
    Multiclass,
    /// Multiple labels are allowed for one example.
    Multilabel,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ClassificationType::value] or
    /// [ClassificationType::name].
    UnknownValue(crate::model::UnknownEnumValue),
}

impl ClassificationType {
    /// Gets the enum value.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the string representation of enums.
    pub fn value(&self) -> std::option::Option<i32> {
        match self {
            Self::Unspecified => std::option::Option::Some(0),
            Self::Multiclass => std::option::Option::Some(1),
            Self::Multilabel => std::option::Option::Some(2),
            Self::UnknownValue(u) => u.value(),
        }
    }

    /// Gets the enum value as a string.
    ///
    /// Returns `None` if the enum contains an unknown value deserialized from
    /// the integer representation of enums.
    pub fn name(&self) -> std::option::Option<&str> {
        match self {
            Self::Unspecified => std::option::Option::Some("CLASSIFICATION_TYPE_UNSPECIFIED"),
            Self::Multiclass => std::option::Option::Some("MULTICLASS"),
            Self::Multilabel => std::option::Option::Some("MULTILABEL"),
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for ClassificationType {
    fn default() -> Self {
        use std::convert::From;
        Self::from(0)
    }
}

impl std::fmt::Display for ClassificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        crate::model::display_enum(f, self.name(), self.value())
    }
}

impl std::convert::From<i32> for ClassificationType {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unspecified,
            1 => Self::Multiclass,
            2 => Self::Multilabel,
            _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
        }
    }
}

impl std::convert::From<&str> for ClassificationType {
    fn from(value: &str) -> Self {
        match value {
            "CLASSIFICATION_TYPE_UNSPECIFIED" => Self::Unspecified,
            "MULTICLASS" => Self::Multiclass,
            "MULTILABEL" => Self::Multilabel,
            _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
        }
    }
}

impl serde::ser::Serialize for ClassificationType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::model::serialize_enum(serializer, self.name(), self.value())
    }
}

impl<'de> serde::de::Deserialize<'de> for ClassificationType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(crate::model::EnumVisitor::<ClassificationType>::new(".google.cloud.automl.v1.ClassificationType"))
    }
}

/// A representation of a text snippet.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextSnippet {
    /// Required. The content of the text snippet as a string. Up to 250000
    /// characters long.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content: std::string::String,

    /// Optional. The format of
    /// [content][google.cloud.automl.v1.TextSnippet.content]. Currently the only
    /// two allowed values are "text/html" and "text/plain". If left blank, the
    /// format is automatically determined from the type of the uploaded
    /// [content][google.cloud.automl.v1.TextSnippet.content].
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub mime_type: std::string::String,

    /// Output only. HTTP URI where you can download the content.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content_uri: std::string::String,
}

impl TextSnippet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][crate::model::TextSnippet::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = v.into();
        self
    }

    /// Sets the value of [mime_type][crate::model::TextSnippet::mime_type].
    pub fn set_mime_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.mime_type = v.into();
        self
    }

    /// Sets the value of [content_uri][crate::model::TextSnippet::content_uri].
    pub fn set_content_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_uri = v.into();
        self
    }
}

impl wkt::message::Message for TextSnippet {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TextSnippet"
    }
}

/// A representation of an image. Only images up to 30MB in size are supported.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Image {
    /// Input only. The data representing the image. For Predict calls
    /// [image_bytes][google.cloud.automl.v1.Image.image_bytes] must be set .
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub data: std::option::Option<crate::model::image::Data>,

    /// Output only. HTTP URI to the thumbnail image.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub thumbnail_uri: std::string::String,
}

impl Image {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::Image::data].
    ///
    /// Note that all the setters affecting `data` are mutually
    /// exclusive.
    pub fn set_data<T: std::convert::Into<std::option::Option<crate::model::image::Data>>>(
        mut self,
        v: T,
    ) -> Self {
        self.data = v.into();
        self
    }

    /// The value of [data][crate::model::Image::data]
    /// if it holds a `ImageBytes`, `None` if the field is not set or
    /// holds a different branch.
    pub fn image_bytes(&self) -> std::option::Option<&::bytes::Bytes> {
        #[allow(unreachable_patterns)]
        self.data.as_ref().and_then(|v| match v {
            crate::model::image::Data::ImageBytes(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [data][crate::model::Image::data]
    /// to hold a `ImageBytes`.
    ///
    /// Note that all the setters affecting `data` are
    /// mutually exclusive.
    pub fn set_image_bytes<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = std::option::Option::Some(crate::model::image::Data::ImageBytes(v.into()));
        self
    }

    /// Sets the value of [thumbnail_uri][crate::model::Image::thumbnail_uri].
    pub fn set_thumbnail_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.thumbnail_uri = v.into();
        self
    }
}

impl wkt::message::Message for Image {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.Image"
    }
}

/// Defines additional types related to [Image].
pub mod image {
    #[allow(unused_imports)]
    use super::*;

    /// Input only. The data representing the image. For Predict calls
    /// [image_bytes][google.cloud.automl.v1.Image.image_bytes] must be set .
    #[serde_with::serde_as]
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Data {
        /// Image content represented as a stream of bytes. Note: As with all
        /// `bytes` fields, protobuffers use a pure binary representation, whereas
        /// JSON representations use base64.
        ImageBytes(#[serde_as(as = "serde_with::base64::Base64")] ::bytes::Bytes),
    }
}

/// The Google Cloud Storage location for the input content.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsSource {
    /// Required. Google Cloud Storage URIs to input files, up to 2000 characters
    /// long. Accepted forms:
    ///
    /// * Full object path, e.g. gs://bucket/directory/object.csv
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub input_uris: std::vec::Vec<std::string::String>,
}

impl GcsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input_uris][crate::model::GcsSource::input_uris].
    pub fn set_input_uris<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.input_uris = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for GcsSource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.GcsSource"
    }
}

/// The Google Cloud Storage location where the output is to be written to.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsDestination {
    /// Required. Google Cloud Storage URI to output directory, up to 2000
    /// characters long. Accepted forms:
    ///
    /// * Prefix path: gs://bucket/directory
    ///   The requesting user must have write permission to the bucket.
    ///   The directory is created if it doesn't exist.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub output_uri_prefix: std::string::String,
}

impl GcsDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [output_uri_prefix][crate::model::GcsDestination::output_uri_prefix].
    pub fn set_output_uri_prefix<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.output_uri_prefix = v.into();
        self
    }
}

impl wkt::message::Message for GcsDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.GcsDestination"
    }
}

/// Input configuration of a [Document][google.cloud.automl.v1.Document].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DocumentInputConfig {
    /// The Google Cloud Storage location of the document file. Only a single path
    /// should be given.
    ///
    /// Max supported size: 512MB.
    ///
    /// Supported extensions: .PDF.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub gcs_source: std::option::Option<crate::model::GcsSource>,
}

impl DocumentInputConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_source][crate::model::DocumentInputConfig::gcs_source].
    pub fn set_gcs_source<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::GcsSource>,
    {
        self.gcs_source = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_source][crate::model::DocumentInputConfig::gcs_source].
    pub fn set_or_clear_gcs_source<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::GcsSource>,
    {
        self.gcs_source = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DocumentInputConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.DocumentInputConfig"
    }
}

/// A structured text document e.g. a PDF.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// An input config specifying the content of the document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_config: std::option::Option<crate::model::DocumentInputConfig>,

    /// The plain text version of this document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub document_text: std::option::Option<crate::model::TextSnippet>,

    /// Number of pages in the document.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_count: i32,
}

impl Document {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input_config][crate::model::Document::input_config].
    pub fn set_input_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentInputConfig>,
    {
        self.input_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [input_config][crate::model::Document::input_config].
    pub fn set_or_clear_input_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentInputConfig>,
    {
        self.input_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_text][crate::model::Document::document_text].
    pub fn set_document_text<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TextSnippet>,
    {
        self.document_text = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [document_text][crate::model::Document::document_text].
    pub fn set_or_clear_document_text<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TextSnippet>,
    {
        self.document_text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page_count][crate::model::Document::page_count].
    pub fn set_page_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_count = v.into();
        self
    }
}

impl wkt::message::Message for Document {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.Document"
    }
}

/// Example data used for training or prediction.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExamplePayload {
    /// Required. The example data.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub payload: std::option::Option<crate::model::example_payload::Payload>,
}

impl ExamplePayload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [payload][crate::model::ExamplePayload::payload].
    ///
    /// Note that all the setters affecting `payload` are mutually
    /// exclusive.
    pub fn set_payload<T: std::convert::Into<std::option::Option<crate::model::example_payload::Payload>>>(
        mut self,
        v: T,
    ) -> Self {
        self.payload = v.into();
        self
    }

    /// The value of [payload][crate::model::ExamplePayload::payload]
    /// if it holds a `Image`, `None` if the field is not set or
    /// holds a different branch.
    pub fn image(&self) -> std::option::Option<&std::boxed::Box<crate::model::Image>> {
        #[allow(unreachable_patterns)]
        self.payload.as_ref().and_then(|v| match v {
            crate::model::example_payload::Payload::Image(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [payload][crate::model::ExamplePayload::payload]
    /// to hold a `Image`.
    ///
    /// Note that all the setters affecting `payload` are
    /// mutually exclusive.
    pub fn set_image<T: std::convert::Into<std::boxed::Box<crate::model::Image>>>(mut self, v: T) -> Self {
        self.payload = std::option::Option::Some(crate::model::example_payload::Payload::Image(v.into()));
        self
    }

    /// The value of [payload][crate::model::ExamplePayload::payload]
    /// if it holds a `TextSnippet`, `None` if the field is not set or
    /// holds a different branch.
    pub fn text_snippet(&self) -> std::option::Option<&std::boxed::Box<crate::model::TextSnippet>> {
        #[allow(unreachable_patterns)]
        self.payload.as_ref().and_then(|v| match v {
            crate::model::example_payload::Payload::TextSnippet(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [payload][crate::model::ExamplePayload::payload]
    /// to hold a `TextSnippet`.
    ///
    /// Note that all the setters affecting `payload` are
    /// mutually exclusive.
    pub fn set_text_snippet<T: std::convert::Into<std::boxed::Box<crate::model::TextSnippet>>>(mut self, v: T) -> Self {
        self.payload = std::option::Option::Some(crate::model::example_payload::Payload::TextSnippet(v.into()));
        self
    }

    /// The value of [payload][crate::model::ExamplePayload::payload]
    /// if it holds a `Document`, `None` if the field is not set or
    /// holds a different branch.
    pub fn document(&self) -> std::option::Option<&std::boxed::Box<crate::model::Document>> {
        #[allow(unreachable_patterns)]
        self.payload.as_ref().and_then(|v| match v {
            crate::model::example_payload::Payload::Document(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [payload][crate::model::ExamplePayload::payload]
    /// to hold a `Document`.
    ///
    /// Note that all the setters affecting `payload` are
    /// mutually exclusive.
    pub fn set_document<T: std::convert::Into<std::boxed::Box<crate::model::Document>>>(mut self, v: T) -> Self {
        self.payload = std::option::Option::Some(crate::model::example_payload::Payload::Document(v.into()));
        self
    }
}

impl wkt::message::Message for ExamplePayload {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ExamplePayload"
    }
}

/// Defines additional types related to [ExamplePayload].
pub mod example_payload {
    #[allow(unused_imports)]
    use super::*;

    /// Required. The example data.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Payload {
        /// Example image.
        Image(std::boxed::Box<crate::model::Image>),
        /// Example text.
        TextSnippet(std::boxed::Box<crate::model::TextSnippet>),
        /// Example document.
        Document(std::boxed::Box<crate::model::Document>),
    }
}

/// Input configuration for BatchPredict Action.
///
/// The format of input depends on the ML problem of the model used for
/// prediction. As input source the
/// [gcs_source][google.cloud.automl.v1.InputConfig.gcs_source] is expected,
/// unless specified otherwise.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchPredictInputConfig {
    /// The source of the input.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub source: std::option::Option<crate::model::batch_predict_input_config::Source>,
}

impl BatchPredictInputConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [source][crate::model::BatchPredictInputConfig::source].
    ///
    /// Note that all the setters affecting `source` are mutually
    /// exclusive.
    pub fn set_source<T: std::convert::Into<std::option::Option<crate::model::batch_predict_input_config::Source>>>(
        mut self,
        v: T,
    ) -> Self {
        self.source = v.into();
        self
    }

    /// The value of [source][crate::model::BatchPredictInputConfig::source]
    /// if it holds a `GcsSource`, `None` if the field is not set or
    /// holds a different branch.
    pub fn gcs_source(&self) -> std::option::Option<&std::boxed::Box<crate::model::GcsSource>> {
        #[allow(unreachable_patterns)]
        self.source.as_ref().and_then(|v| match v {
            crate::model::batch_predict_input_config::Source::GcsSource(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [source][crate::model::BatchPredictInputConfig::source]
    /// to hold a `GcsSource`.
    ///
    /// Note that all the setters affecting `source` are
    /// mutually exclusive.
    pub fn set_gcs_source<T: std::convert::Into<std::boxed::Box<crate::model::GcsSource>>>(mut self, v: T) -> Self {
        self.source = std::option::Option::Some(crate::model::batch_predict_input_config::Source::GcsSource(v.into()));
        self
    }
}

impl wkt::message::Message for BatchPredictInputConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.BatchPredictInputConfig"
    }
}

/// Defines additional types related to [BatchPredictInputConfig].
pub mod batch_predict_input_config {
    #[allow(unused_imports)]
    use super::*;

    /// The source of the input.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Source {
        /// Required. The Google Cloud Storage location for the input content.
        GcsSource(std::boxed::Box<crate::model::GcsSource>),
    }
}

/// Output configuration for BatchPredict Action.
///
/// As destination the [gcs_destination][google.cloud.automl.v1.BatchPredictOutp
/// utConfig.gcs_destination] must be set unless specified otherwise for a
/// domain. If gcs_destination is set then in the given directory a new
/// directory is created. Its name will be "prediction-<model-display-
/// name>-<timestamp-of-prediction-call>", where timestamp is in YYYY-MM-
/// DDThh:mm:ss.sssZ ISO-8601 format. The contents of it depends on the ML
/// problem the predictions are made for.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchPredictOutputConfig {
    /// The destination of the output.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub destination: std::option::Option<crate::model::batch_predict_output_config::Destination>,
}

impl BatchPredictOutputConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [destination][crate::model::BatchPredictOutputConfig::destination].
    ///
    /// Note that all the setters affecting `destination` are mutually
    /// exclusive.
    pub fn set_destination<T: std::convert::Into<std::option::Option<crate::model::batch_predict_output_config::Destination>>>(
        mut self,
        v: T,
    ) -> Self {
        self.destination = v.into();
        self
    }

    /// The value of [destination][crate::model::BatchPredictOutputConfig::destination]
    /// if it holds a `GcsDestination`, `None` if the field is not set or
    /// holds a different branch.
    pub fn gcs_destination(&self) -> std::option::Option<&std::boxed::Box<crate::model::GcsDestination>> {
        #[allow(unreachable_patterns)]
        self.destination.as_ref().and_then(|v| match v {
            crate::model::batch_predict_output_config::Destination::GcsDestination(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [destination][crate::model::BatchPredictOutputConfig::destination]
    /// to hold a `GcsDestination`.
    ///
    /// Note that all the setters affecting `destination` are
    /// mutually exclusive.
    pub fn set_gcs_destination<T: std::convert::Into<std::boxed::Box<crate::model::GcsDestination>>>(mut self, v: T) -> Self {
        self.destination = std::option::Option::Some(crate::model::batch_predict_output_config::Destination::GcsDestination(v.into()));
        self
    }
}

impl wkt::message::Message for BatchPredictOutputConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.BatchPredictOutputConfig"
    }
}

/// Defines additional types related to [BatchPredictOutputConfig].
pub mod batch_predict_output_config {
    #[allow(unused_imports)]
    use super::*;

    /// The destination of the output.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Destination {
        /// Required. The Google Cloud Storage location of the directory where the
        /// output is to be written to.
        GcsDestination(std::boxed::Box<crate::model::GcsDestination>),
    }
}

/// Annotation details specific to translation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TranslationAnnotation {
    /// Output only . The translated content.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub translated_content: std::option::Option<crate::model::TextSnippet>,
}

impl TranslationAnnotation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [translated_content][crate::model::TranslationAnnotation::translated_content].
    pub fn set_translated_content<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TextSnippet>,
    {
        self.translated_content = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [translated_content][crate::model::TranslationAnnotation::translated_content].
    pub fn set_or_clear_translated_content<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TextSnippet>,
    {
        self.translated_content = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for TranslationAnnotation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TranslationAnnotation"
    }
}

/// Contains annotation details specific to classification.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClassificationAnnotation {
    /// Output only. A confidence estimate between 0.0 and 1.0. A higher value means
    /// greater confidence that the annotation is positive. If a user approves an
    /// annotation as negative or positive, the score value remains unchanged. If a
    /// user creates an annotation, the score is 0 for negative or 1 for positive.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub score: f32,
}

impl ClassificationAnnotation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [score][crate::model::ClassificationAnnotation::score].
    pub fn set_score<T: std::convert::Into<f32>>(mut self, v: T) -> Self {
        self.score = v.into();
        self
    }
}

impl wkt::message::Message for ClassificationAnnotation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ClassificationAnnotation"
    }
}

/// Contains annotation details specific to text sentiment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextSentimentAnnotation {
    /// Output only. The sentiment with the semantic, as given to the
    /// [AutoMl.ImportData][google.cloud.automl.v1.AutoMl.ImportData] when
    /// populating the dataset from which the model used for the prediction had been
    /// trained. The sentiment values are between 0 and
    /// Dataset.text_sentiment_dataset_metadata.sentiment_max (inclusive), with
    /// higher value meaning more positive sentiment. They are completely relative,
    /// i.e. 0 means least positive sentiment and sentiment_max means the most
    /// positive from the sentiments present in the train data. Therefore e.g. if
    /// train data had only negative sentiment, then sentiment_max, would be still
    /// negative (although least negative).
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub sentiment: i32,
}

impl TextSentimentAnnotation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [sentiment][crate::model::TextSentimentAnnotation::sentiment].
    pub fn set_sentiment<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.sentiment = v.into();
        self
    }
}

impl wkt::message::Message for TextSentimentAnnotation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TextSentimentAnnotation"
    }
}

/// Contains annotation information that is relevant to AutoML.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnnotationPayload {
    /// Output only . Additional information about the annotation specific to the
    /// AutoML domain.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub detail: std::option::Option<crate::model::annotation_payload::Detail>,

    /// Output only . The resource ID of the annotation spec that this annotation
    /// pertains to. The annotation spec comes from either an ancestor dataset, or
    /// the dataset that was used to train the model in use.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub annotation_spec_id: std::string::String,

    /// Output only. The value of
    /// [display_name][google.cloud.automl.v1.AnnotationSpec.display_name] when the
    /// model was trained. Because this field returns a value at model training
    /// time, for different models trained using the same dataset, the returned
    /// value could be different as model owner could update the `display_name`
    /// between any two model training.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,
}

impl AnnotationPayload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [detail][crate::model::AnnotationPayload::detail].
    ///
    /// Note that all the setters affecting `detail` are mutually
    /// exclusive.
    pub fn set_detail<T: std::convert::Into<std::option::Option<crate::model::annotation_payload::Detail>>>(
        mut self,
        v: T,
    ) -> Self {
        self.detail = v.into();
        self
    }

    /// The value of [detail][crate::model::AnnotationPayload::detail]
    /// if it holds a `Translation`, `None` if the field is not set or
    /// holds a different branch.
    pub fn translation(&self) -> std::option::Option<&std::boxed::Box<crate::model::TranslationAnnotation>> {
        #[allow(unreachable_patterns)]
        self.detail.as_ref().and_then(|v| match v {
            crate::model::annotation_payload::Detail::Translation(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [detail][crate::model::AnnotationPayload::detail]
    /// to hold a `Translation`.
    ///
    /// Note that all the setters affecting `detail` are
    /// mutually exclusive.
    pub fn set_translation<T: std::convert::Into<std::boxed::Box<crate::model::TranslationAnnotation>>>(mut self, v: T) -> Self {
        self.detail = std::option::Option::Some(crate::model::annotation_payload::Detail::Translation(v.into()));
        self
    }

    /// The value of [detail][crate::model::AnnotationPayload::detail]
    /// if it holds a `Classification`, `None` if the field is not set or
    /// holds a different branch.
    pub fn classification(&self) -> std::option::Option<&std::boxed::Box<crate::model::ClassificationAnnotation>> {
        #[allow(unreachable_patterns)]
        self.detail.as_ref().and_then(|v| match v {
            crate::model::annotation_payload::Detail::Classification(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [detail][crate::model::AnnotationPayload::detail]
    /// to hold a `Classification`.
    ///
    /// Note that all the setters affecting `detail` are
    /// mutually exclusive.
    pub fn set_classification<T: std::convert::Into<std::boxed::Box<crate::model::ClassificationAnnotation>>>(mut self, v: T) -> Self {
        self.detail = std::option::Option::Some(crate::model::annotation_payload::Detail::Classification(v.into()));
        self
    }

    /// The value of [detail][crate::model::AnnotationPayload::detail]
    /// if it holds a `TextSentiment`, `None` if the field is not set or
    /// holds a different branch.
    pub fn text_sentiment(&self) -> std::option::Option<&std::boxed::Box<crate::model::TextSentimentAnnotation>> {
        #[allow(unreachable_patterns)]
        self.detail.as_ref().and_then(|v| match v {
            crate::model::annotation_payload::Detail::TextSentiment(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [detail][crate::model::AnnotationPayload::detail]
    /// to hold a `TextSentiment`.
    ///
    /// Note that all the setters affecting `detail` are
    /// mutually exclusive.
    pub fn set_text_sentiment<T: std::convert::Into<std::boxed::Box<crate::model::TextSentimentAnnotation>>>(mut self, v: T) -> Self {
        self.detail = std::option::Option::Some(crate::model::annotation_payload::Detail::TextSentiment(v.into()));
        self
    }

    /// Sets the value of [annotation_spec_id][crate::model::AnnotationPayload::annotation_spec_id].
    pub fn set_annotation_spec_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.annotation_spec_id = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::AnnotationPayload::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }
}

impl wkt::message::Message for AnnotationPayload {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.AnnotationPayload"
    }
}

/// Defines additional types related to [AnnotationPayload].
pub mod annotation_payload {
    #[allow(unused_imports)]
    use super::*;

    /// Output only . Additional information about the annotation specific to the
    /// AutoML domain.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Detail {
        /// Annotation details for translation.
        Translation(std::boxed::Box<crate::model::TranslationAnnotation>),
        /// Annotation details for content or image classification.
        Classification(std::boxed::Box<crate::model::ClassificationAnnotation>),
        /// Annotation details for text sentiment.
        TextSentiment(std::boxed::Box<crate::model::TextSentimentAnnotation>),
    }
}

/// Dataset metadata that is specific to translation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TranslationDatasetMetadata {
    /// Required. The BCP-47 language code of the source language.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub source_language_code: std::string::String,

    /// Required. The BCP-47 language code of the target language.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub target_language_code: std::string::String,
}

impl TranslationDatasetMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [source_language_code][crate::model::TranslationDatasetMetadata::source_language_code].
    pub fn set_source_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_language_code = v.into();
        self
    }

    /// Sets the value of [target_language_code][crate::model::TranslationDatasetMetadata::target_language_code].
    pub fn set_target_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_language_code = v.into();
        self
    }
}

impl wkt::message::Message for TranslationDatasetMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TranslationDatasetMetadata"
    }
}

/// Dataset metadata for classification.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextClassificationDatasetMetadata {
    /// Required. Type of the classification problem.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub classification_type: crate::model::ClassificationType,
}

impl TextClassificationDatasetMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [classification_type][crate::model::TextClassificationDatasetMetadata::classification_type].
    pub fn set_classification_type<T: std::convert::Into<crate::model::ClassificationType>>(mut self, v: T) -> Self {
        self.classification_type = v.into();
        self
    }
}

impl wkt::message::Message for TextClassificationDatasetMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TextClassificationDatasetMetadata"
    }
}

/// Dataset metadata for text sentiment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextSentimentDatasetMetadata {
    /// Required. A sentiment is expressed as an integer ordinal, where higher value
    /// means a more positive sentiment. The range of sentiments that will be used
    /// is between 0 and sentiment_max (inclusive on both ends), and all the values
    /// in the range must be represented in the dataset before a model can be
    /// created. sentiment_max value must be between 1 and 10 (inclusive).
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub sentiment_max: i32,
}

impl TextSentimentDatasetMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [sentiment_max][crate::model::TextSentimentDatasetMetadata::sentiment_max].
    pub fn set_sentiment_max<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.sentiment_max = v.into();
        self
    }
}

impl wkt::message::Message for TextSentimentDatasetMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TextSentimentDatasetMetadata"
    }
}

/// A workspace for solving a single, particular machine learning (ML) problem.
/// A workspace contains examples that may be annotated.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Dataset {
    /// Required. The dataset metadata that is specific to the problem type.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub dataset_metadata: std::option::Option<crate::model::dataset::DatasetMetadata>,

    /// Output only. The resource name of the dataset. Form:
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The name of the dataset to show in the interface. The name can be
    /// up to 32 characters long and can consist only of ASCII Latin letters A-Z and
    /// a-z, underscores (_), and ASCII digits 0-9.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// User-provided description of the dataset. The description can be up to 25000
    /// characters long.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// Output only. The number of examples in the dataset.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub example_count: i32,

    /// Output only. Timestamp when this dataset was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Used to perform consistent read-modify-write updates. If not set, a blind
    /// "overwrite" update happens.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub etag: std::string::String,

    /// Optional. The labels with user-defined metadata to organize your dataset.
    ///
    /// Label keys and values can be no longer than 64 characters (Unicode
    /// codepoints), can only contain lowercase letters, numeric characters,
    /// underscores and dashes. International characters are allowed. Label values
    /// are optional. Label keys must start with a letter.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl Dataset {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dataset_metadata][crate::model::Dataset::dataset_metadata].
    ///
    /// Note that all the setters affecting `dataset_metadata` are mutually
    /// exclusive.
    pub fn set_dataset_metadata<T: std::convert::Into<std::option::Option<crate::model::dataset::DatasetMetadata>>>(
        mut self,
        v: T,
    ) -> Self {
        self.dataset_metadata = v.into();
        self
    }

    /// The value of [dataset_metadata][crate::model::Dataset::dataset_metadata]
    /// if it holds a `TranslationDatasetMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn translation_dataset_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::TranslationDatasetMetadata>> {
        #[allow(unreachable_patterns)]
        self.dataset_metadata.as_ref().and_then(|v| match v {
            crate::model::dataset::DatasetMetadata::TranslationDatasetMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [dataset_metadata][crate::model::Dataset::dataset_metadata]
    /// to hold a `TranslationDatasetMetadata`.
    ///
    /// Note that all the setters affecting `dataset_metadata` are
    /// mutually exclusive.
    pub fn set_translation_dataset_metadata<T: std::convert::Into<std::boxed::Box<crate::model::TranslationDatasetMetadata>>>(mut self, v: T) -> Self {
        self.dataset_metadata = std::option::Option::Some(crate::model::dataset::DatasetMetadata::TranslationDatasetMetadata(v.into()));
        self
    }

    /// The value of [dataset_metadata][crate::model::Dataset::dataset_metadata]
    /// if it holds a `TextClassificationDatasetMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn text_classification_dataset_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::TextClassificationDatasetMetadata>> {
        #[allow(unreachable_patterns)]
        self.dataset_metadata.as_ref().and_then(|v| match v {
            crate::model::dataset::DatasetMetadata::TextClassificationDatasetMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [dataset_metadata][crate::model::Dataset::dataset_metadata]
    /// to hold a `TextClassificationDatasetMetadata`.
    ///
    /// Note that all the setters affecting `dataset_metadata` are
    /// mutually exclusive.
    pub fn set_text_classification_dataset_metadata<T: std::convert::Into<std::boxed::Box<crate::model::TextClassificationDatasetMetadata>>>(mut self, v: T) -> Self {
        self.dataset_metadata = std::option::Option::Some(crate::model::dataset::DatasetMetadata::TextClassificationDatasetMetadata(v.into()));
        self
    }

    /// The value of [dataset_metadata][crate::model::Dataset::dataset_metadata]
    /// if it holds a `TextSentimentDatasetMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn text_sentiment_dataset_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::TextSentimentDatasetMetadata>> {
        #[allow(unreachable_patterns)]
        self.dataset_metadata.as_ref().and_then(|v| match v {
            crate::model::dataset::DatasetMetadata::TextSentimentDatasetMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [dataset_metadata][crate::model::Dataset::dataset_metadata]
    /// to hold a `TextSentimentDatasetMetadata`.
    ///
    /// Note that all the setters affecting `dataset_metadata` are
    /// mutually exclusive.
    pub fn set_text_sentiment_dataset_metadata<T: std::convert::Into<std::boxed::Box<crate::model::TextSentimentDatasetMetadata>>>(mut self, v: T) -> Self {
        self.dataset_metadata = std::option::Option::Some(crate::model::dataset::DatasetMetadata::TextSentimentDatasetMetadata(v.into()));
        self
    }

    /// Sets the value of [name][crate::model::Dataset::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Dataset::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::Dataset::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [example_count][crate::model::Dataset::example_count].
    pub fn set_example_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.example_count = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::Dataset::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::Dataset::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [etag][crate::model::Dataset::etag].
    pub fn set_etag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.etag = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::Dataset::labels].
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

impl wkt::message::Message for Dataset {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.Dataset"
    }
}

/// Defines additional types related to [Dataset].
pub mod dataset {
    #[allow(unused_imports)]
    use super::*;

    /// Required. The dataset metadata that is specific to the problem type.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum DatasetMetadata {
        /// Metadata for a dataset used for translation.
        TranslationDatasetMetadata(std::boxed::Box<crate::model::TranslationDatasetMetadata>),
        /// Metadata for a dataset used for text classification.
        TextClassificationDatasetMetadata(std::boxed::Box<crate::model::TextClassificationDatasetMetadata>),
        /// Metadata for a dataset used for text sentiment.
        TextSentimentDatasetMetadata(std::boxed::Box<crate::model::TextSentimentDatasetMetadata>),
    }
}

/// Model metadata that is specific to translation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TranslationModelMetadata {
    /// The resource name of the model to use as a baseline to train the custom
    /// model. If unset, we use the default base model provided by Google Translate.
    /// Format: `projects/{project_id}/locations/{location_id}/models/{model_id}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub base_model: std::string::String,

    /// Output only. Inferred from the dataset. The source language (The BCP-47
    /// language code) that is used for training.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub source_language_code: std::string::String,

    /// Output only. The target language (The BCP-47 language code) that is used for
    /// training.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub target_language_code: std::string::String,
}

impl TranslationModelMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [base_model][crate::model::TranslationModelMetadata::base_model].
    pub fn set_base_model<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.base_model = v.into();
        self
    }

    /// Sets the value of [source_language_code][crate::model::TranslationModelMetadata::source_language_code].
    pub fn set_source_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_language_code = v.into();
        self
    }

    /// Sets the value of [target_language_code][crate::model::TranslationModelMetadata::target_language_code].
    pub fn set_target_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_language_code = v.into();
        self
    }
}

impl wkt::message::Message for TranslationModelMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TranslationModelMetadata"
    }
}

/// Model metadata that is specific to text classification.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextClassificationModelMetadata {
    /// Output only. Classification type of the dataset used to train this model.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub classification_type: crate::model::ClassificationType,
}

impl TextClassificationModelMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [classification_type][crate::model::TextClassificationModelMetadata::classification_type].
    pub fn set_classification_type<T: std::convert::Into<crate::model::ClassificationType>>(mut self, v: T) -> Self {
        self.classification_type = v.into();
        self
    }
}

impl wkt::message::Message for TextClassificationModelMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TextClassificationModelMetadata"
    }
}

/// Model metadata that is specific to text sentiment.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextSentimentModelMetadata {}

impl TextSentimentModelMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for TextSentimentModelMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.TextSentimentModelMetadata"
    }
}

/// API proto representing a trained machine learning model.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Model {
    /// Required. The model metadata that is specific to the problem type. Must
    /// match the metadata type of the dataset used to train the model.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub model_metadata: std::option::Option<crate::model::model::ModelMetadata>,

    /// Output only. Resource name of the model. Format:
    /// `projects/{project_id}/locations/{location_id}/models/{model_id}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The name of the model to show in the interface. The name can be up
    /// to 32 characters long and can consist only of ASCII Latin letters A-Z and
    /// a-z, underscores (_), and ASCII digits 0-9. It must start with a letter.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Required. The resource ID of the dataset used to create the model. The
    /// dataset must come from the same ancestor project and location.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub dataset_id: std::string::String,

    /// Output only. Timestamp when the model training finished  and can be used for
    /// prediction.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Timestamp when this model was last updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Deployment state of the model. A model can only serve
    /// prediction requests after it gets deployed.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub deployment_state: crate::model::model::DeploymentState,

    /// Used to perform a consistent read-modify-write updates. If not set, a blind
    /// "overwrite" update happens.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub etag: std::string::String,

    /// Optional. The labels with user-defined metadata to organize your model.
    ///
    /// Label keys and values can be no longer than 64 characters (Unicode
    /// codepoints), can only contain lowercase letters, numeric characters,
    /// underscores and dashes. International characters are allowed. Label values
    /// are optional. Label keys must start with a letter.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,
}

impl Model {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [model_metadata][crate::model::Model::model_metadata].
    ///
    /// Note that all the setters affecting `model_metadata` are mutually
    /// exclusive.
    pub fn set_model_metadata<T: std::convert::Into<std::option::Option<crate::model::model::ModelMetadata>>>(
        mut self,
        v: T,
    ) -> Self {
        self.model_metadata = v.into();
        self
    }

    /// The value of [model_metadata][crate::model::Model::model_metadata]
    /// if it holds a `TranslationModelMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn translation_model_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::TranslationModelMetadata>> {
        #[allow(unreachable_patterns)]
        self.model_metadata.as_ref().and_then(|v| match v {
            crate::model::model::ModelMetadata::TranslationModelMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [model_metadata][crate::model::Model::model_metadata]
    /// to hold a `TranslationModelMetadata`.
    ///
    /// Note that all the setters affecting `model_metadata` are
    /// mutually exclusive.
    pub fn set_translation_model_metadata<T: std::convert::Into<std::boxed::Box<crate::model::TranslationModelMetadata>>>(mut self, v: T) -> Self {
        self.model_metadata = std::option::Option::Some(crate::model::model::ModelMetadata::TranslationModelMetadata(v.into()));
        self
    }

    /// The value of [model_metadata][crate::model::Model::model_metadata]
    /// if it holds a `TextClassificationModelMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn text_classification_model_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::TextClassificationModelMetadata>> {
        #[allow(unreachable_patterns)]
        self.model_metadata.as_ref().and_then(|v| match v {
            crate::model::model::ModelMetadata::TextClassificationModelMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [model_metadata][crate::model::Model::model_metadata]
    /// to hold a `TextClassificationModelMetadata`.
    ///
    /// Note that all the setters affecting `model_metadata` are
    /// mutually exclusive.
    pub fn set_text_classification_model_metadata<T: std::convert::Into<std::boxed::Box<crate::model::TextClassificationModelMetadata>>>(mut self, v: T) -> Self {
        self.model_metadata = std::option::Option::Some(crate::model::model::ModelMetadata::TextClassificationModelMetadata(v.into()));
        self
    }

    /// The value of [model_metadata][crate::model::Model::model_metadata]
    /// if it holds a `TextSentimentModelMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn text_sentiment_model_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::TextSentimentModelMetadata>> {
        #[allow(unreachable_patterns)]
        self.model_metadata.as_ref().and_then(|v| match v {
            crate::model::model::ModelMetadata::TextSentimentModelMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [model_metadata][crate::model::Model::model_metadata]
    /// to hold a `TextSentimentModelMetadata`.
    ///
    /// Note that all the setters affecting `model_metadata` are
    /// mutually exclusive.
    pub fn set_text_sentiment_model_metadata<T: std::convert::Into<std::boxed::Box<crate::model::TextSentimentModelMetadata>>>(mut self, v: T) -> Self {
        self.model_metadata = std::option::Option::Some(crate::model::model::ModelMetadata::TextSentimentModelMetadata(v.into()));
        self
    }

    /// Sets the value of [name][crate::model::Model::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Model::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [dataset_id][crate::model::Model::dataset_id].
    pub fn set_dataset_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.dataset_id = v.into();
        self
    }

    /// Sets the value of [create_time][crate::model::Model::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::Model::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Model::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::Model::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deployment_state][crate::model::Model::deployment_state].
    pub fn set_deployment_state<T: std::convert::Into<crate::model::model::DeploymentState>>(mut self, v: T) -> Self {
        self.deployment_state = v.into();
        self
    }

    /// Sets the value of [etag][crate::model::Model::etag].
    pub fn set_etag<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.etag = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::Model::labels].
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

impl wkt::message::Message for Model {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.Model"
    }
}

/// Defines additional types related to [Model].
pub mod model {
    #[allow(unused_imports)]
    use super::*;

    /// Deployment state of the model.
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
    pub enum DeploymentState {
        /// Should not be used, an un-set enum has this value by default.
        Unspecified,
        /// Model is deployed.
        Deployed,
        /// Model is not deployed.
        Undeployed,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [DeploymentState::value] or
        /// [DeploymentState::name].
        UnknownValue(crate::model::UnknownEnumValue),
    }

    impl DeploymentState {
        /// Gets the enum value.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the string representation of enums.
        pub fn value(&self) -> std::option::Option<i32> {
            match self {
                Self::Unspecified => std::option::Option::Some(0),
                Self::Deployed => std::option::Option::Some(1),
                Self::Undeployed => std::option::Option::Some(2),
                Self::UnknownValue(u) => u.value(),
            }
        }

        /// Gets the enum value as a string.
        ///
        /// Returns `None` if the enum contains an unknown value deserialized from
        /// the integer representation of enums.
        pub fn name(&self) -> std::option::Option<&str> {
            match self {
                Self::Unspecified => std::option::Option::Some("DEPLOYMENT_STATE_UNSPECIFIED"),
                Self::Deployed => std::option::Option::Some("DEPLOYED"),
                Self::Undeployed => std::option::Option::Some("UNDEPLOYED"),
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::default::Default for DeploymentState {
        fn default() -> Self {
            use std::convert::From;
            Self::from(0)
        }
    }

    impl std::fmt::Display for DeploymentState {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
            crate::model::display_enum(f, self.name(), self.value())
        }
    }

    impl std::convert::From<i32> for DeploymentState {
        fn from(value: i32) -> Self {
            match value {
                0 => Self::Unspecified,
                1 => Self::Deployed,
                2 => Self::Undeployed,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::integer(value)),
            }
        }
    }

    impl std::convert::From<&str> for DeploymentState {
        fn from(value: &str) -> Self {
            match value {
                "DEPLOYMENT_STATE_UNSPECIFIED" => Self::Unspecified,
                "DEPLOYED" => Self::Deployed,
                "UNDEPLOYED" => Self::Undeployed,
                _ => Self::UnknownValue(crate::model::UnknownEnumValue::string(value)),
            }
        }
    }

    impl serde::ser::Serialize for DeploymentState {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            crate::model::serialize_enum(serializer, self.name(), self.value())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for DeploymentState {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(crate::model::EnumVisitor::<DeploymentState>::new(".google.cloud.automl.v1.Model.DeploymentState"))
        }
    }


    /// Required. The model metadata that is specific to the problem type. Must
    /// match the metadata type of the dataset used to train the model.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum ModelMetadata {
        /// Metadata for translation models.
        TranslationModelMetadata(std::boxed::Box<crate::model::TranslationModelMetadata>),
        /// Metadata for text classification models.
        TextClassificationModelMetadata(std::boxed::Box<crate::model::TextClassificationModelMetadata>),
        /// Metadata for text sentiment models.
        TextSentimentModelMetadata(std::boxed::Box<crate::model::TextSentimentModelMetadata>),
    }
}

/// Model deployment metadata specific to Image Object Detection.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageObjectDetectionModelDeploymentMetadata {
    /// Input only. The number of nodes to deploy the model on. A node is an
    /// abstraction of a machine resource, which can handle online prediction QPS as
    /// given in the model's [qps_per_node][google.cloud.automl.v1.ImageObjectDetect
    /// ionModelMetadata.qps_per_node]. Must be between 1 and 100, inclusive on both
    /// ends.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    #[serde_as(as = "wkt::internal::I64")]
    pub node_count: i64,
}

impl ImageObjectDetectionModelDeploymentMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [node_count][crate::model::ImageObjectDetectionModelDeploymentMetadata::node_count].
    pub fn set_node_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.node_count = v.into();
        self
    }
}

impl wkt::message::Message for ImageObjectDetectionModelDeploymentMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ImageObjectDetectionModelDeploymentMetadata"
    }
}

/// Model deployment metadata specific to Image Classification.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageClassificationModelDeploymentMetadata {
    /// Input only. The number of nodes to deploy the model on. A node is an
    /// abstraction of a machine resource, which can handle online prediction QPS as
    /// given in the model's [node_qps][google.cloud.automl.v1.ImageClassificationMo
    /// delMetadata.node_qps]. Must be between 1 and 100, inclusive on both ends.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    #[serde_as(as = "wkt::internal::I64")]
    pub node_count: i64,
}

impl ImageClassificationModelDeploymentMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [node_count][crate::model::ImageClassificationModelDeploymentMetadata::node_count].
    pub fn set_node_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.node_count = v.into();
        self
    }
}

impl wkt::message::Message for ImageClassificationModelDeploymentMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ImageClassificationModelDeploymentMetadata"
    }
}

/// Metadata used across all long running operations returned by AutoML API.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// Ouptut only. Details of specific operation. Even if this field is empty, the
    /// presence allows to distinguish different types of operations.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub details: std::option::Option<crate::model::operation_metadata::Details>,

    /// Output only. Progress of operation. Range: [0, 100]. Not used currently.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub progress_percent: i32,

    /// Output only. Partial failures encountered. E.g. single files that couldn't
    /// be read. This field should never exceed 20 entries. Status details field
    /// will contain standard Google Cloud error details.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub partial_failures: std::vec::Vec<rpc::model::Status>,

    /// Output only. Time when the operation was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. Time when the operation was updated for the last time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,
}

impl OperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [details][crate::model::OperationMetadata::details].
    ///
    /// Note that all the setters affecting `details` are mutually
    /// exclusive.
    pub fn set_details<T: std::convert::Into<std::option::Option<crate::model::operation_metadata::Details>>>(
        mut self,
        v: T,
    ) -> Self {
        self.details = v.into();
        self
    }

    /// The value of [details][crate::model::OperationMetadata::details]
    /// if it holds a `DeleteDetails`, `None` if the field is not set or
    /// holds a different branch.
    pub fn delete_details(&self) -> std::option::Option<&std::boxed::Box<crate::model::DeleteOperationMetadata>> {
        #[allow(unreachable_patterns)]
        self.details.as_ref().and_then(|v| match v {
            crate::model::operation_metadata::Details::DeleteDetails(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [details][crate::model::OperationMetadata::details]
    /// to hold a `DeleteDetails`.
    ///
    /// Note that all the setters affecting `details` are
    /// mutually exclusive.
    pub fn set_delete_details<T: std::convert::Into<std::boxed::Box<crate::model::DeleteOperationMetadata>>>(mut self, v: T) -> Self {
        self.details = std::option::Option::Some(crate::model::operation_metadata::Details::DeleteDetails(v.into()));
        self
    }

    /// The value of [details][crate::model::OperationMetadata::details]
    /// if it holds a `DeployModelDetails`, `None` if the field is not set or
    /// holds a different branch.
    pub fn deploy_model_details(&self) -> std::option::Option<&std::boxed::Box<crate::model::DeployModelOperationMetadata>> {
        #[allow(unreachable_patterns)]
        self.details.as_ref().and_then(|v| match v {
            crate::model::operation_metadata::Details::DeployModelDetails(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [details][crate::model::OperationMetadata::details]
    /// to hold a `DeployModelDetails`.
    ///
    /// Note that all the setters affecting `details` are
    /// mutually exclusive.
    pub fn set_deploy_model_details<T: std::convert::Into<std::boxed::Box<crate::model::DeployModelOperationMetadata>>>(mut self, v: T) -> Self {
        self.details = std::option::Option::Some(crate::model::operation_metadata::Details::DeployModelDetails(v.into()));
        self
    }

    /// The value of [details][crate::model::OperationMetadata::details]
    /// if it holds a `UndeployModelDetails`, `None` if the field is not set or
    /// holds a different branch.
    pub fn undeploy_model_details(&self) -> std::option::Option<&std::boxed::Box<crate::model::UndeployModelOperationMetadata>> {
        #[allow(unreachable_patterns)]
        self.details.as_ref().and_then(|v| match v {
            crate::model::operation_metadata::Details::UndeployModelDetails(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [details][crate::model::OperationMetadata::details]
    /// to hold a `UndeployModelDetails`.
    ///
    /// Note that all the setters affecting `details` are
    /// mutually exclusive.
    pub fn set_undeploy_model_details<T: std::convert::Into<std::boxed::Box<crate::model::UndeployModelOperationMetadata>>>(mut self, v: T) -> Self {
        self.details = std::option::Option::Some(crate::model::operation_metadata::Details::UndeployModelDetails(v.into()));
        self
    }

    /// The value of [details][crate::model::OperationMetadata::details]
    /// if it holds a `BatchPredictDetails`, `None` if the field is not set or
    /// holds a different branch.
    pub fn batch_predict_details(&self) -> std::option::Option<&std::boxed::Box<crate::model::BatchPredictOperationMetadata>> {
        #[allow(unreachable_patterns)]
        self.details.as_ref().and_then(|v| match v {
            crate::model::operation_metadata::Details::BatchPredictDetails(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [details][crate::model::OperationMetadata::details]
    /// to hold a `BatchPredictDetails`.
    ///
    /// Note that all the setters affecting `details` are
    /// mutually exclusive.
    pub fn set_batch_predict_details<T: std::convert::Into<std::boxed::Box<crate::model::BatchPredictOperationMetadata>>>(mut self, v: T) -> Self {
        self.details = std::option::Option::Some(crate::model::operation_metadata::Details::BatchPredictDetails(v.into()));
        self
    }

    /// Sets the value of [progress_percent][crate::model::OperationMetadata::progress_percent].
    pub fn set_progress_percent<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.progress_percent = v.into();
        self
    }

    /// Sets the value of [partial_failures][crate::model::OperationMetadata::partial_failures].
    pub fn set_partial_failures<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<rpc::model::Status>,
    {
        use std::iter::Iterator;
        self.partial_failures = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::OperationMetadata::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::OperationMetadata::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::OperationMetadata::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::OperationMetadata::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for OperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.OperationMetadata"
    }
}

/// Defines additional types related to [OperationMetadata].
pub mod operation_metadata {
    #[allow(unused_imports)]
    use super::*;

    /// Ouptut only. Details of specific operation. Even if this field is empty, the
    /// presence allows to distinguish different types of operations.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Details {
        /// Details of a Delete operation.
        DeleteDetails(std::boxed::Box<crate::model::DeleteOperationMetadata>),
        /// Details of a DeployModel operation.
        DeployModelDetails(std::boxed::Box<crate::model::DeployModelOperationMetadata>),
        /// Details of an UndeployModel operation.
        UndeployModelDetails(std::boxed::Box<crate::model::UndeployModelOperationMetadata>),
        /// Details of BatchPredict operation.
        BatchPredictDetails(std::boxed::Box<crate::model::BatchPredictOperationMetadata>),
    }
}

/// Details of operations that perform deletes of any entities.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOperationMetadata {}

impl DeleteOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for DeleteOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.DeleteOperationMetadata"
    }
}

/// Details of DeployModel operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeployModelOperationMetadata {}

impl DeployModelOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for DeployModelOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.DeployModelOperationMetadata"
    }
}

/// Details of UndeployModel operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UndeployModelOperationMetadata {}

impl UndeployModelOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for UndeployModelOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.UndeployModelOperationMetadata"
    }
}

/// Details of BatchPredict operation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchPredictOperationMetadata {
    /// Output only. The input config that was given upon starting this batch
    /// predict operation.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_config: std::option::Option<crate::model::BatchPredictInputConfig>,

    /// Output only. Information further describing this batch predict's output.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_info: std::option::Option<crate::model::batch_predict_operation_metadata::BatchPredictOutputInfo>,
}

impl BatchPredictOperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input_config][crate::model::BatchPredictOperationMetadata::input_config].
    pub fn set_input_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BatchPredictInputConfig>,
    {
        self.input_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [input_config][crate::model::BatchPredictOperationMetadata::input_config].
    pub fn set_or_clear_input_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BatchPredictInputConfig>,
    {
        self.input_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_info][crate::model::BatchPredictOperationMetadata::output_info].
    pub fn set_output_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::batch_predict_operation_metadata::BatchPredictOutputInfo>,
    {
        self.output_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_info][crate::model::BatchPredictOperationMetadata::output_info].
    pub fn set_or_clear_output_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::batch_predict_operation_metadata::BatchPredictOutputInfo>,
    {
        self.output_info = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BatchPredictOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.BatchPredictOperationMetadata"
    }
}

/// Defines additional types related to [BatchPredictOperationMetadata].
pub mod batch_predict_operation_metadata {
    #[allow(unused_imports)]
    use super::*;

    /// Further describes this batch predict's output. Supplements
    /// [BatchPredictOutputConfig][google.cloud.automl.v1.BatchPredictOutputConfig].
    #[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct BatchPredictOutputInfo {
        /// The output location into which prediction output is written.
        #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
        pub output_location: std::option::Option<crate::model::batch_predict_operation_metadata::batch_predict_output_info::OutputLocation>,
    }

    impl BatchPredictOutputInfo {
        pub fn new() -> Self {
            std::default::Default::default()
        }

        /// Sets the value of [output_location][crate::model::batch_predict_operation_metadata::BatchPredictOutputInfo::output_location].
        ///
        /// Note that all the setters affecting `output_location` are mutually
        /// exclusive.
        pub fn set_output_location<T: std::convert::Into<std::option::Option<crate::model::batch_predict_operation_metadata::batch_predict_output_info::OutputLocation>>>(
            mut self,
            v: T,
        ) -> Self {
            self.output_location = v.into();
            self
        }

        /// The value of [output_location][crate::model::batch_predict_operation_metadata::BatchPredictOutputInfo::output_location]
        /// if it holds a `GcsOutputDirectory`, `None` if the field is not set or
        /// holds a different branch.
        pub fn gcs_output_directory(&self) -> std::option::Option<&std::string::String> {
            #[allow(unreachable_patterns)]
            self.output_location.as_ref().and_then(|v| match v {
                crate::model::batch_predict_operation_metadata::batch_predict_output_info::OutputLocation::GcsOutputDirectory(v) => std::option::Option::Some(v),
                _ => std::option::Option::None,
            })
        }

        /// Sets the value of [output_location][crate::model::batch_predict_operation_metadata::BatchPredictOutputInfo::output_location]
        /// to hold a `GcsOutputDirectory`.
        ///
        /// Note that all the setters affecting `output_location` are
        /// mutually exclusive.
        pub fn set_gcs_output_directory<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
            self.output_location = std::option::Option::Some(crate::model::batch_predict_operation_metadata::batch_predict_output_info::OutputLocation::GcsOutputDirectory(v.into()));
            self
        }
    }

    impl wkt::message::Message for BatchPredictOutputInfo {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.automl.v1.BatchPredictOperationMetadata.BatchPredictOutputInfo"
        }
    }

    /// Defines additional types related to [BatchPredictOutputInfo].
    pub mod batch_predict_output_info {
        #[allow(unused_imports)]
        use super::*;

        /// The output location into which prediction output is written.
        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        #[non_exhaustive]
        pub enum OutputLocation {
            /// The full path of the Google Cloud Storage directory created, into which
            /// the prediction output is written.
            GcsOutputDirectory(std::string::String),
        }
    }
}

/// Request message for [PredictionService.Predict][google.cloud.automl.v1.Predi
/// ctionService.Predict].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PredictRequest {
    /// Required. Name of the model requested to serve the prediction.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. Payload to perform a prediction on. The payload must match the
    /// problem type that the model was trained to solve.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub payload: std::option::Option<crate::model::ExamplePayload>,

    /// Additional domain-specific parameters, any string must be up to 25000
    /// characters long.
    ///
    /// AutoML Natural Language (Classification)
    ///
    /// `score_threshold` : (float) A value from 0.0 to 1.0. When the model makes
    /// predictions for a text snippet, it will only produce results that have at
    /// least this confidence score. The default is 0.5.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub params: std::collections::HashMap<std::string::String, std::string::String>,
}

impl PredictRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::PredictRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [payload][crate::model::PredictRequest::payload].
    pub fn set_payload<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ExamplePayload>,
    {
        self.payload = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [payload][crate::model::PredictRequest::payload].
    pub fn set_or_clear_payload<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ExamplePayload>,
    {
        self.payload = v.map(|x| x.into());
        self
    }

    /// Sets the value of [params][crate::model::PredictRequest::params].
    pub fn set_params<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.params = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for PredictRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.PredictRequest"
    }
}

/// Response message for [PredictionService.Predict][google.cloud.automl.v1.Pred
/// ictionService.Predict].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PredictResponse {
    /// Prediction result. AutoML Translation and AutoML Natural Language Sentiment
    /// Analysis return precisely one payload.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub payload: std::vec::Vec<crate::model::AnnotationPayload>,

    /// The preprocessed example that AutoML actually makes prediction on. Empty if
    /// AutoML does not preprocess the input example.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub preprocessed_input: std::option::Option<crate::model::ExamplePayload>,

    /// Additional domain-specific prediction response metadata.
    ///
    /// AutoML Natural Language (Sentiment Analysis)
    ///
    /// `sentiment_score` : (float, deprecated) A value between -1 and 1, -1 maps to
    /// least positive sentiment, while 1 maps to the most positive one and the
    /// higher the score, the more positive the sentiment in the document is. Yet
    /// these values are relative to the training data, so e.g. if all data was
    /// positive then -1 is also positive (though the least).
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<std::string::String, std::string::String>,
}

impl PredictResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [payload][crate::model::PredictResponse::payload].
    pub fn set_payload<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AnnotationPayload>,
    {
        use std::iter::Iterator;
        self.payload = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [preprocessed_input][crate::model::PredictResponse::preprocessed_input].
    pub fn set_preprocessed_input<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ExamplePayload>,
    {
        self.preprocessed_input = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [preprocessed_input][crate::model::PredictResponse::preprocessed_input].
    pub fn set_or_clear_preprocessed_input<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ExamplePayload>,
    {
        self.preprocessed_input = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::PredictResponse::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for PredictResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.PredictResponse"
    }
}

/// Request message for [PredictionService.BatchPredict][google.cloud.automl.v1.
/// PredictionService.BatchPredict].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchPredictRequest {
    /// Required. Name of the model requested to serve the batch prediction.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The input configuration for batch prediction.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub input_config: std::option::Option<crate::model::BatchPredictInputConfig>,

    /// Required. The Configuration specifying where output predictions should be
    /// written.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub output_config: std::option::Option<crate::model::BatchPredictOutputConfig>,

    /// Additional domain-specific parameters for the predictions, any string must
    /// be up to 25000 characters long.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub params: std::collections::HashMap<std::string::String, std::string::String>,
}

impl BatchPredictRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::BatchPredictRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [input_config][crate::model::BatchPredictRequest::input_config].
    pub fn set_input_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BatchPredictInputConfig>,
    {
        self.input_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [input_config][crate::model::BatchPredictRequest::input_config].
    pub fn set_or_clear_input_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BatchPredictInputConfig>,
    {
        self.input_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [output_config][crate::model::BatchPredictRequest::output_config].
    pub fn set_output_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BatchPredictOutputConfig>,
    {
        self.output_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [output_config][crate::model::BatchPredictRequest::output_config].
    pub fn set_or_clear_output_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BatchPredictOutputConfig>,
    {
        self.output_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [params][crate::model::BatchPredictRequest::params].
    pub fn set_params<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.params = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for BatchPredictRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.BatchPredictRequest"
    }
}

/// Result of the Batch Predict. This message is returned in
/// [response][google.longrunning.Operation.response] of the operation returned
/// by the [PredictionService.BatchPredict][google.cloud.automl.v1.PredictionSer
/// vice.BatchPredict].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchPredictResult {
    /// Additional domain-specific prediction response metadata.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub metadata: std::collections::HashMap<std::string::String, std::string::String>,
}

impl BatchPredictResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metadata][crate::model::BatchPredictResult::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.metadata = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for BatchPredictResult {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.BatchPredictResult"
    }
}

/// Request message for
/// [AutoMl.GetDataset][google.cloud.automl.v1.AutoMl.GetDataset].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDatasetRequest {
    /// Required. The resource name of the dataset to retrieve.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetDatasetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetDatasetRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetDatasetRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.GetDatasetRequest"
    }
}

/// Request message for
/// [AutoMl.ListDatasets][google.cloud.automl.v1.AutoMl.ListDatasets].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDatasetsRequest {
    /// Required. The resource name of the project from which to list datasets.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// An expression for filtering the results of the request.
    ///
    /// * `dataset_metadata` - for existence of the case (e.g.
    ///   `image_classification_dataset_metadata:*`). Some examples of using the
    ///   filter are:
    ///
    /// * `translation_dataset_metadata:*` --> The dataset has
    ///   `translation_dataset_metadata`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// Requested page size. Server may return fewer results than requested. If
    /// unspecified, server will pick a default size.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// A token identifying a page of results for the server to return Typically
    /// obtained via [ListDatasetsResponse.next_page_token][google.cloud.automl.v1.L
    /// istDatasetsResponse.next_page_token] of the previous
    /// [AutoMl.ListDatasets][google.cloud.automl.v1.AutoMl.ListDatasets] call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl ListDatasetsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListDatasetsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListDatasetsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListDatasetsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListDatasetsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListDatasetsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ListDatasetsRequest"
    }
}

/// Response message for
/// [AutoMl.ListDatasets][google.cloud.automl.v1.AutoMl.ListDatasets].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDatasetsResponse {
    /// The datasets read.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub datasets: std::vec::Vec<crate::model::Dataset>,

    /// A token to retrieve next page of results. Pass to [ListDatasetsRequest.page_
    /// token][google.cloud.automl.v1.ListDatasetsRequest.page_token] to obtain that
    /// page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListDatasetsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [datasets][crate::model::ListDatasetsResponse::datasets].
    pub fn set_datasets<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Dataset>,
    {
        use std::iter::Iterator;
        self.datasets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDatasetsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListDatasetsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ListDatasetsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListDatasetsResponse {
    type PageItem = crate::model::Dataset;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.datasets
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for
/// [AutoMl.DeleteDataset][google.cloud.automl.v1.AutoMl.DeleteDataset].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteDatasetRequest {
    /// Required. The resource name of the dataset to delete.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteDatasetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteDatasetRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteDatasetRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.DeleteDatasetRequest"
    }
}

/// Request message for
/// [AutoMl.GetModel][google.cloud.automl.v1.AutoMl.GetModel].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetModelRequest {
    /// Required. Resource name of the model.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl GetModelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetModelRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetModelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.GetModelRequest"
    }
}

/// Request message for
/// [AutoMl.ListModels][google.cloud.automl.v1.AutoMl.ListModels].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListModelsRequest {
    /// Required. Resource name of the project, from which to list the models.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// An expression for filtering the results of the request.
    ///
    /// * `model_metadata` - for existence of the case (e.g.
    ///   `video_classification_model_metadata:*`).
    /// * `dataset_id` - for = or !=. Some examples of using the filter are:
    ///
    /// * `image_classification_model_metadata:*` --> The model has
    ///   `image_classification_model_metadata`.
    /// * `dataset_id=5` --> The model was created from a dataset with ID 5.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// Requested page size.
    #[serde(skip_serializing_if = "crate::model::is_default")]
    pub page_size: i32,

    /// A token identifying a page of results for the server to return Typically
    /// obtained via [ListModelsResponse.next_page_token][google.cloud.automl.v1.Lis
    /// tModelsResponse.next_page_token] of the previous
    /// [AutoMl.ListModels][google.cloud.automl.v1.AutoMl.ListModels] call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,
}

impl ListModelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListModelsRequest::parent].
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListModelsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListModelsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListModelsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListModelsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ListModelsRequest"
    }
}

/// Response message for
/// [AutoMl.ListModels][google.cloud.automl.v1.AutoMl.ListModels].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListModelsResponse {
    /// List of models in the requested page.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub model: std::vec::Vec<crate::model::Model>,

    /// A token to retrieve next page of results. Pass to [ListModelsRequest.page_to
    /// ken][google.cloud.automl.v1.ListModelsRequest.page_token] to obtain that
    /// page.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,
}

impl ListModelsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [model][crate::model::ListModelsResponse::model].
    pub fn set_model<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Model>,
    {
        use std::iter::Iterator;
        self.model = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListModelsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListModelsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.ListModelsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListModelsResponse {
    type PageItem = crate::model::Model;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.model
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// Request message for
/// [AutoMl.DeleteModel][google.cloud.automl.v1.AutoMl.DeleteModel].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteModelRequest {
    /// Required. Resource name of the model being deleted.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeleteModelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteModelRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteModelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.DeleteModelRequest"
    }
}

/// Request message for
/// [AutoMl.DeployModel][google.cloud.automl.v1.AutoMl.DeployModel].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeployModelRequest {
    /// The per-domain specific deployment parameters.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub model_deployment_metadata: std::option::Option<crate::model::deploy_model_request::ModelDeploymentMetadata>,

    /// Required. Resource name of the model to deploy.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl DeployModelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [model_deployment_metadata][crate::model::DeployModelRequest::model_deployment_metadata].
    ///
    /// Note that all the setters affecting `model_deployment_metadata` are mutually
    /// exclusive.
    pub fn set_model_deployment_metadata<T: std::convert::Into<std::option::Option<crate::model::deploy_model_request::ModelDeploymentMetadata>>>(
        mut self,
        v: T,
    ) -> Self {
        self.model_deployment_metadata = v.into();
        self
    }

    /// The value of [model_deployment_metadata][crate::model::DeployModelRequest::model_deployment_metadata]
    /// if it holds a `ImageObjectDetectionModelDeploymentMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn image_object_detection_model_deployment_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::ImageObjectDetectionModelDeploymentMetadata>> {
        #[allow(unreachable_patterns)]
        self.model_deployment_metadata.as_ref().and_then(|v| match v {
            crate::model::deploy_model_request::ModelDeploymentMetadata::ImageObjectDetectionModelDeploymentMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [model_deployment_metadata][crate::model::DeployModelRequest::model_deployment_metadata]
    /// to hold a `ImageObjectDetectionModelDeploymentMetadata`.
    ///
    /// Note that all the setters affecting `model_deployment_metadata` are
    /// mutually exclusive.
    pub fn set_image_object_detection_model_deployment_metadata<T: std::convert::Into<std::boxed::Box<crate::model::ImageObjectDetectionModelDeploymentMetadata>>>(mut self, v: T) -> Self {
        self.model_deployment_metadata = std::option::Option::Some(crate::model::deploy_model_request::ModelDeploymentMetadata::ImageObjectDetectionModelDeploymentMetadata(v.into()));
        self
    }

    /// The value of [model_deployment_metadata][crate::model::DeployModelRequest::model_deployment_metadata]
    /// if it holds a `ImageClassificationModelDeploymentMetadata`, `None` if the field is not set or
    /// holds a different branch.
    pub fn image_classification_model_deployment_metadata(&self) -> std::option::Option<&std::boxed::Box<crate::model::ImageClassificationModelDeploymentMetadata>> {
        #[allow(unreachable_patterns)]
        self.model_deployment_metadata.as_ref().and_then(|v| match v {
            crate::model::deploy_model_request::ModelDeploymentMetadata::ImageClassificationModelDeploymentMetadata(v) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        })
    }

    /// Sets the value of [model_deployment_metadata][crate::model::DeployModelRequest::model_deployment_metadata]
    /// to hold a `ImageClassificationModelDeploymentMetadata`.
    ///
    /// Note that all the setters affecting `model_deployment_metadata` are
    /// mutually exclusive.
    pub fn set_image_classification_model_deployment_metadata<T: std::convert::Into<std::boxed::Box<crate::model::ImageClassificationModelDeploymentMetadata>>>(mut self, v: T) -> Self {
        self.model_deployment_metadata = std::option::Option::Some(crate::model::deploy_model_request::ModelDeploymentMetadata::ImageClassificationModelDeploymentMetadata(v.into()));
        self
    }

    /// Sets the value of [name][crate::model::DeployModelRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeployModelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.DeployModelRequest"
    }
}

/// Defines additional types related to [DeployModelRequest].
pub mod deploy_model_request {
    #[allow(unused_imports)]
    use super::*;

    /// The per-domain specific deployment parameters.
    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum ModelDeploymentMetadata {
        /// Model deployment metadata specific to Image Object Detection.
        ImageObjectDetectionModelDeploymentMetadata(std::boxed::Box<crate::model::ImageObjectDetectionModelDeploymentMetadata>),
        /// Model deployment metadata specific to Image Classification.
        ImageClassificationModelDeploymentMetadata(std::boxed::Box<crate::model::ImageClassificationModelDeploymentMetadata>),
    }
}

/// Request message for
/// [AutoMl.UndeployModel][google.cloud.automl.v1.AutoMl.UndeployModel].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UndeployModelRequest {
    /// Required. Resource name of the model to undeploy.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,
}

impl UndeployModelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::UndeployModelRequest::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for UndeployModelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.automl.v1.UndeployModelRequest"
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
