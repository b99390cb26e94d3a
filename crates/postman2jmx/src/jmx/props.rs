//! Shared JMeter property-element constructors.
//!
//! JMX expresses every scalar as a `boolProp`/`stringProp` leaf and every
//! key/value list as an `Arguments` container; these helpers are used by
//! both the plan skeleton and the request mapper.

use crate::jmx::document::XmlElement;
use crate::postman::model::KeyValue;

/// `<boolProp name="...">true|false</boolProp>`.
pub fn bool_prop(name: &'static str, value: bool) -> XmlElement {
    XmlElement::new("boolProp")
        .attr("name", name)
        .text(if value { "true" } else { "false" })
}

/// `<stringProp name="...">value</stringProp>`.
///
/// An empty value yields a childless element; the serializer decides its
/// empty-element form.
pub fn string_prop(name: &'static str, value: impl Into<String>) -> XmlElement {
    let value = value.into();
    let prop = XmlElement::new("stringProp").attr("name", name);
    if value.is_empty() { prop } else { prop.text(value) }
}

/// The `hashTree` scope-closer paired with every container element.
pub fn hash_tree() -> XmlElement {
    XmlElement::new("hashTree")
}

/// A named user-defined-variables block: an `Arguments` container plus its
/// scope-closer.
///
/// Returns `None` when `entries` is empty — an empty named block is never
/// emitted (unlike the per-sampler argument container, which is always
/// present). Entries missing either field are skipped; values are coerced
/// to text.
pub fn user_defined_variables(entries: &[KeyValue], name: &str) -> Option<(XmlElement, XmlElement)> {
    if entries.is_empty() {
        return None;
    }

    let mut variables = XmlElement::new("collectionProp").attr("name", "Arguments.arguments");
    for entry in entries {
        let (Some(key), Some(value)) = (entry.key.as_deref(), entry.value_text()) else {
            continue;
        };
        variables.push(
            XmlElement::new("elementProp")
                .attr("name", key)
                .attr("elementType", "Argument")
                .child(string_prop("Argument.name", key))
                .child(string_prop("Argument.value", value))
                .child(string_prop("Argument.metadata", "=")),
        );
    }

    let arguments = XmlElement::new("Arguments")
        .attr("guiclass", "ArgumentsPanel")
        .attr("testclass", "Arguments")
        .attr("testname", name)
        .attr("enabled", "true")
        .child(variables);

    Some((arguments, hash_tree()))
}
