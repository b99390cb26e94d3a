//! Request mapping: flatten the folder tree and translate each request
//! into an `HTTPSamplerProxy`.
//!
//! Folders are erased during the walk — their children are spliced into
//! the surrounding sequence in depth-first pre-order, so arbitrarily deep
//! nesting collapses to one flat, ordered list of samplers. Folder names
//! and folder-level settings are discarded.

use indexmap::IndexMap;
use url::Url;

use crate::jmx::document::XmlElement;
use crate::jmx::props::{bool_prop, hash_tree, string_prop, user_defined_variables};
use crate::postman::model::{Item, KeyValue, RequestBody, RequestUrl, UrlObject, UrlPath, json_text};

/// Fallback sampler name for items without a `name`.
const UNNAMED_REQUEST: &str = "Unnamed Request";

/// Walk the item tree, appending one sampler (plus its scope) per request
/// leaf to `parent`.
pub fn append_items(items: &[Item], parent: &mut XmlElement) {
    for item in items {
        if let Some(children) = &item.item {
            append_items(children, parent);
        } else {
            append_request(item, parent);
        }
    }
}

/// Translate one request leaf into a sampler plus its scope. Leaves
/// without a `request` are skipped silently.
fn append_request(item: &Item, parent: &mut XmlElement) {
    let Some(request) = &item.request else {
        return;
    };

    let mut sampler = XmlElement::new("HTTPSamplerProxy")
        .attr("guiclass", "HttpTestSampleGui")
        .attr("testclass", "HTTPSamplerProxy")
        .attr("testname", item.name.as_deref().unwrap_or(UNNAMED_REQUEST))
        .attr("enabled", "true");

    append_body(request.body.as_ref(), &mut sampler);
    append_common_flags(&mut sampler);
    sampler.push(string_prop(
        "HTTPSampler.method",
        request.method.as_deref().unwrap_or("GET"),
    ));

    match &request.url {
        Some(RequestUrl::Raw(raw)) => append_raw_url(raw, &mut sampler),
        Some(RequestUrl::Structured(object)) => append_structured_url(object, &mut sampler),
        None => {}
    }

    let mut scope = hash_tree();
    if !request.header.is_empty() {
        scope.push(header_manager(&request.header));
        scope.push(hash_tree());
    }
    if let Some(RequestUrl::Structured(object)) = &request.url {
        if let Some((variables, closer)) =
            user_defined_variables(&object.variable, "URL Path Variables")
        {
            scope.push(variables);
            scope.push(closer);
        }
    }

    parent.push(sampler);
    parent.push(scope);
}

/// Emit the sampler's argument container from the request body.
///
/// Exactly one container is emitted per sampler, even when there is no
/// body: query parameters are merged into it later, and the consuming
/// tool expects the container to be present. Multipart form bodies carry
/// no translatable payload here and fall into the empty-container branch,
/// losing their file/part structure.
fn append_body(body: Option<&RequestBody>, sampler: &mut XmlElement) {
    if let Some(body) = body {
        match body.mode.as_deref() {
            Some("raw") => {
                if let Some(raw) = body.raw.as_deref().filter(|raw| !raw.is_empty()) {
                    sampler.push(bool_prop("HTTPSampler.postBodyRaw", true));
                    let argument = XmlElement::new("elementProp")
                        .attr("name", "")
                        .attr("elementType", "HTTPArgument")
                        .child(bool_prop("HTTPArgument.always_encode", false))
                        .child(string_prop("Argument.value", raw))
                        .child(string_prop("Argument.metadata", "="));
                    sampler.push(arguments_container(vec![argument]));
                    return;
                }
            }
            Some("urlencoded") => {
                if !body.urlencoded.is_empty() {
                    let arguments = body.urlencoded.iter().map(form_argument).collect();
                    sampler.push(arguments_container(arguments));
                    return;
                }
            }
            _ => {}
        }
    }
    sampler.push(arguments_container(Vec::new()));
}

/// Fixed per-sampler flags, independent of the input request.
fn append_common_flags(sampler: &mut XmlElement) {
    sampler.push(bool_prop("HTTPSampler.auto_redirects", false));
    sampler.push(bool_prop("HTTPSampler.follow_redirects", true));
    sampler.push(bool_prop("HTTPSampler.use_keepalive", true));
    sampler.push(bool_prop("HTTPSampler.monitor", false));
    sampler.push(bool_prop("HTTPSampler.DO_MULTIPART_POST", false));
    sampler.push(string_prop("HTTPSampler.embedded_url_re", ""));
    sampler.push(string_prop("HTTPSampler.contentEncoding", ""));
}

/// Map a string URL onto the sampler's scalar fields and merge its query
/// parameters into the argument container.
///
/// Strings that do not parse as absolute URLs degrade the way a lenient
/// URL split would: the whole string becomes the path and the protocol
/// falls back to `http`.
fn append_raw_url(raw: &str, sampler: &mut XmlElement) {
    let parsed = Url::parse(raw).ok();

    let (domain, path, protocol, port) = match &parsed {
        Some(url) => (
            url.host_str().unwrap_or_default().to_owned(),
            url.path().to_owned(),
            url.scheme().to_owned(),
            url.port().map(|port| port.to_string()).unwrap_or_default(),
        ),
        None => (
            String::new(),
            raw.to_owned(),
            "http".to_owned(),
            String::new(),
        ),
    };

    sampler.push(string_prop("HTTPSampler.domain", domain));
    sampler.push(string_prop("HTTPSampler.path", path));
    sampler.push(string_prop("HTTPSampler.protocol", protocol));
    sampler.push(string_prop("HTTPSampler.port", port));

    if let Some(url) = parsed {
        let mut arguments = Vec::new();
        for (key, values) in &grouped_query_pairs(&url) {
            for value in values {
                arguments.push(query_argument(key, value));
            }
        }
        merge_query_arguments(sampler, arguments);
    }
}

/// Map a structured URL object onto the sampler's scalar fields and merge
/// its query entries into the argument container.
fn append_structured_url(object: &UrlObject, sampler: &mut XmlElement) {
    let domain = match &object.host {
        Some(labels) => labels.join("."),
        None => "localhost".to_owned(),
    };

    let path = match &object.path {
        Some(UrlPath::Literal(path)) => path.clone(),
        Some(UrlPath::Segments(segments)) => format!("/{}", segments.join("/")),
        None => "/".to_owned(),
    };

    let protocol = object.protocol.as_deref().unwrap_or("http");
    let protocol = protocol.strip_suffix(':').unwrap_or(protocol);

    let port = object.port.as_ref().map(json_text).unwrap_or_default();

    sampler.push(string_prop("HTTPSampler.domain", domain));
    sampler.push(string_prop("HTTPSampler.path", path));
    sampler.push(string_prop("HTTPSampler.protocol", protocol.to_owned()));
    sampler.push(string_prop("HTTPSampler.port", port));

    let arguments = object
        .query
        .iter()
        .filter_map(|entry| {
            let key = entry.key.as_deref()?;
            let value = entry.value_text()?;
            Some(query_argument(key, &value))
        })
        .collect();
    merge_query_arguments(sampler, arguments);
}

/// Decode a query string into values grouped by key, preserving
/// first-appearance key order. Pairs with empty values are dropped.
fn grouped_query_pairs(url: &Url) -> IndexMap<String, Vec<String>> {
    let mut pairs: IndexMap<String, Vec<String>> = IndexMap::new();
    for (key, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        pairs
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    pairs
}

/// Append query arguments into the sampler's argument container.
///
/// Body and query arguments share one container; a fresh one is created
/// only if the body mapping somehow did not run.
fn merge_query_arguments(sampler: &mut XmlElement, arguments: Vec<XmlElement>) {
    if arguments.is_empty() {
        return;
    }

    if sampler
        .element_mut("elementProp", ("name", "HTTPsampler.Arguments"))
        .is_none()
    {
        sampler.push(arguments_container(Vec::new()));
    }

    let collection = sampler
        .element_mut("elementProp", ("name", "HTTPsampler.Arguments"))
        .and_then(|container| container.element_mut("collectionProp", ("name", "Arguments.arguments")));
    if let Some(collection) = collection {
        for argument in arguments {
            collection.push(argument);
        }
    }
}

/// The sampler's `HTTPsampler.Arguments` container, holding the given
/// arguments (possibly none) in its `Arguments.arguments` collection.
fn arguments_container(arguments: Vec<XmlElement>) -> XmlElement {
    let mut collection = XmlElement::new("collectionProp").attr("name", "Arguments.arguments");
    for argument in arguments {
        collection.push(argument);
    }
    XmlElement::new("elementProp")
        .attr("name", "HTTPsampler.Arguments")
        .attr("elementType", "Arguments")
        .attr("guiclass", "HTTPArgumentsPanel")
        .attr("testclass", "Arguments")
        .attr("enabled", "true")
        .child(collection)
}

/// A form-field argument: literal equals sign, no forced encoding.
fn form_argument(entry: &KeyValue) -> XmlElement {
    let key = entry.key.clone().unwrap_or_default();
    let value = entry.value_text().unwrap_or_default();
    XmlElement::new("elementProp")
        .attr("name", key.clone())
        .attr("elementType", "HTTPArgument")
        .child(bool_prop("HTTPArgument.always_encode", false))
        .child(string_prop("Argument.value", value))
        .child(string_prop("Argument.metadata", "="))
        .child(bool_prop("HTTPArgument.use_equals", true))
        .child(string_prop("Argument.name", key))
}

/// A query-parameter argument: always encoded, literal equals sign.
fn query_argument(key: &str, value: &str) -> XmlElement {
    XmlElement::new("elementProp")
        .attr("name", key.to_owned())
        .attr("elementType", "HTTPArgument")
        .child(bool_prop("HTTPArgument.always_encode", true))
        .child(string_prop("Argument.value", value.to_owned()))
        .child(string_prop("Argument.metadata", "="))
        .child(bool_prop("HTTPArgument.use_equals", true))
        .child(string_prop("Argument.name", key.to_owned()))
}

/// The `HeaderManager` for a request's header sequence, one `Header`
/// entry per pair in input order. Missing fields default to empty.
fn header_manager(headers: &[KeyValue]) -> XmlElement {
    let mut collection = XmlElement::new("collectionProp").attr("name", "HeaderManager.headers");
    for header in headers {
        collection.push(
            XmlElement::new("elementProp")
                .attr("name", "")
                .attr("elementType", "Header")
                .child(string_prop(
                    "Header.name",
                    header.key.clone().unwrap_or_default(),
                ))
                .child(string_prop(
                    "Header.value",
                    header.value_text().unwrap_or_default(),
                )),
        );
    }
    XmlElement::new("HeaderManager")
        .attr("guiclass", "HeaderPanel")
        .attr("testclass", "HeaderManager")
        .attr("testname", "HTTP Header Manager")
        .attr("enabled", "true")
        .child(collection)
}
