//! Data model types for Postman collection deserialization.
//!
//! A collection is a tree of items: folders (items with a nested `item`
//! sequence) and request leaves (items with a `request`). URLs appear
//! either as a raw string or as a structured object; the two shapes are
//! resolved through [`RequestUrl`] once, at the top of request mapping.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Top-level Postman collection document.
#[derive(Debug, Deserialize)]
pub struct Collection {
    /// Collection metadata (display name).
    pub info: Option<Info>,

    /// Collection-scoped variables.
    #[serde(default)]
    pub variable: Vec<KeyValue>,

    /// Ordered folder/request tree.
    #[serde(default)]
    pub item: Vec<Item>,
}

impl Collection {
    /// Parse a collection from the given path.
    ///
    /// A missing or malformed collection file is fatal: the error names
    /// the path and the run aborts before any output is written.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        let collection: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse collection file `{}`", path.display()))?;
        Ok(collection)
    }

    /// The collection display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.info.as_ref().and_then(|info| info.name.as_deref())
    }
}

/// The `info` block of a collection.
#[derive(Debug, Deserialize)]
pub struct Info {
    /// Display name of the collection.
    pub name: Option<String>,
}

/// One node of the collection tree: a folder or a request leaf.
///
/// A node carrying a nested `item` sequence is a folder; a node carrying a
/// `request` is a leaf. A node with neither is skipped during mapping.
#[derive(Debug, Deserialize)]
pub struct Item {
    /// Display name of the folder or request.
    pub name: Option<String>,

    /// Nested children; present on folders only.
    pub item: Option<Vec<Item>>,

    /// The request payload; present on leaves only.
    pub request: Option<Request>,
}

/// A single HTTP request description.
#[derive(Debug, Deserialize)]
pub struct Request {
    /// HTTP method; defaults to GET when absent.
    pub method: Option<String>,

    /// Ordered request headers.
    #[serde(default)]
    pub header: Vec<KeyValue>,

    /// Request body, discriminated by `mode`.
    pub body: Option<RequestBody>,

    /// Request URL: a raw string or a structured object.
    pub url: Option<RequestUrl>,
}

/// A request body; `mode` selects which payload field applies.
///
/// Modes other than `raw` and `urlencoded` (notably `formdata`) carry no
/// translatable payload and map to an empty argument container.
#[derive(Debug, Deserialize)]
pub struct RequestBody {
    /// Body mode: `raw`, `urlencoded`, or anything else.
    pub mode: Option<String>,

    /// Raw payload string (mode `raw`).
    pub raw: Option<String>,

    /// Form fields (mode `urlencoded`).
    #[serde(default)]
    pub urlencoded: Vec<KeyValue>,
}

/// A request URL: Postman serializes either a bare string or an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RequestUrl {
    /// A raw URL string to be parsed.
    Raw(String),

    /// A structured URL object.
    Structured(UrlObject),
}

/// The structured URL object shape.
#[derive(Debug, Deserialize)]
pub struct UrlObject {
    /// Hostname labels, joined by `.`. Absent means `localhost`.
    pub host: Option<Vec<String>>,

    /// Path segments (joined by `/`) or a literal path string.
    pub path: Option<UrlPath>,

    /// Protocol, possibly carrying a trailing colon.
    pub protocol: Option<String>,

    /// Port; a string or a number in the source JSON.
    pub port: Option<Value>,

    /// Query parameters.
    #[serde(default)]
    pub query: Vec<KeyValue>,

    /// Path placeholders (`:id` style variables).
    #[serde(default)]
    pub variable: Vec<KeyValue>,
}

/// A URL path: a sequence of segments or a single literal string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UrlPath {
    /// Path segments, joined by `/` behind a leading slash.
    Segments(Vec<String>),

    /// A literal path string, used verbatim.
    Literal(String),
}

/// A generic `{key, value}` entry (headers, variables, form fields, query
/// parameters).
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValue {
    pub key: Option<String>,
    pub value: Option<Value>,
}

impl KeyValue {
    /// The value coerced to text, or `None` when the field is absent.
    pub fn value_text(&self) -> Option<String> {
        self.value.as_ref().map(json_text)
    }
}

/// Coerce a JSON scalar to its textual form.
///
/// Strings are used verbatim; numbers and booleans use their JSON
/// rendering; null becomes the empty string.
pub fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
