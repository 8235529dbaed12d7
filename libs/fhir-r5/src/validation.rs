//! Validation support
//!
//! Stateless checks composed by every generated `validate_with()`. Each takes
//! the slot under test plus the element name used in the error; the checks a
//! [`ModelConfig`] can switch off also take the configuration.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::trace;

use crate::config::ModelConfig;
use crate::element::{ElementNode, Slot};
use crate::error::{Error, Result};
use crate::model_support::is_resource_type;
use crate::types::Reference;

/// Largest string value accepted, in bytes
pub const MAX_STRING_LENGTH: usize = 1_048_576;

pub fn require_non_null<S: Slot>(slot: &S, element: &str) -> Result<()> {
    if slot.is_populated() {
        Ok(())
    } else {
        Err(Error::MissingRequiredField(element.to_string()))
    }
}

pub fn require_choice_element<S: Slot>(slot: &S, element: &str) -> Result<()> {
    require_non_null(slot, element)
}

pub fn check_non_empty_list<S: Slot>(slot: &S, element: &str) -> Result<()> {
    require_non_null(slot, element)
}

/// Every entry must be one of the `allowed` runtime types
pub fn check_list<T: ElementNode>(values: &[T], element: &str, allowed: &[&str]) -> Result<()> {
    for value in values {
        let found = value.type_name();
        if !allowed.contains(&found) {
            return Err(Error::invalid_argument(
                element,
                format!("list entry of type '{found}' is not allowed"),
            ));
        }
    }
    Ok(())
}

/// A populated choice slot must hold one of its declared alternatives
pub fn check_choice_type<S: Slot>(slot: &S, element: &str, allowed: &[&str]) -> Result<()> {
    if allowed.is_empty() {
        return Ok(());
    }
    for value in slot.values() {
        let found = value.type_name();
        if !allowed.contains(&found) {
            return Err(invalid_choice(element, found, allowed));
        }
    }
    Ok(())
}

pub fn invalid_choice(element: &str, found: &str, allowed: &[&str]) -> Error {
    Error::InvalidChoice {
        element: element.to_string(),
        found: found.to_string(),
        allowed: allowed.iter().map(|t| t.to_string()).collect(),
    }
}

/// Lexical checks of primitive values held by the slot
pub fn check_values<S: Slot>(slot: &S, element: &str, config: &ModelConfig) -> Result<()> {
    slot.values()
        .iter()
        .try_for_each(|value| value.check_value(element, config))
}

/// Lexical check of a plain string slot such as an element `id` or
/// `Extension.url`
pub fn check_string_slot(
    slot: &Option<String>,
    element: &str,
    check: fn(&str) -> std::result::Result<(), String>,
    config: &ModelConfig,
) -> Result<()> {
    let Some(value) = slot else {
        return Ok(());
    };
    check_string(value)
        .and_then(|()| check(value))
        .and_then(|()| check_text(value.as_str(), config))
        .map_err(|message| Error::InvalidValue {
            element: element.to_string(),
            message,
        })
}

/// ele-1
pub fn require_value_or_children(element: &dyn ElementNode) -> Result<()> {
    if element.has_value() || element.has_children() {
        Ok(())
    } else {
        Err(Error::VacuousElement(element.type_name().to_string()))
    }
}

/// Check every reference in the slot against the allowed target types
///
/// The target is read from the literal reference and from `Reference.type`.
/// References whose target cannot be determined (contained, `urn:`, logical)
/// pass unchecked.
pub fn check_reference_type<S: Slot>(
    slot: &S,
    element: &str,
    allowed: &[&str],
    config: &ModelConfig,
) -> Result<()> {
    if !config.check_reference_types {
        return Ok(());
    }

    for value in slot.values() {
        let Some(reference) = value.as_reference() else {
            continue;
        };
        let Some(resource_type) = reference_target(reference, element)? else {
            trace!(element, "reference target not determinable, skipping check");
            continue;
        };

        if !is_resource_type(resource_type) {
            return Err(Error::invalid_reference(
                element,
                format!("'{resource_type}' is not a resource type"),
            ));
        }
        if !allowed.contains(&resource_type) && !allowed.contains(&"Resource") {
            return Err(Error::invalid_reference(
                element,
                format!(
                    "resource type '{resource_type}' is not one of: {}",
                    allowed.join(", ")
                ),
            ));
        }
    }
    Ok(())
}

fn reference_target<'a>(reference: &'a Reference, element: &str) -> Result<Option<&'a str>> {
    let literal = reference
        .reference()
        .and_then(|r| r.value())
        .and_then(|r| resource_type_from_literal(r));
    let declared = reference
        .r#type()
        .and_then(|t| t.value())
        .map(|t| resource_type_from_uri(t));

    match (literal, declared) {
        (Some(literal), Some(declared)) if literal != declared => Err(Error::invalid_reference(
            element,
            format!("reference type '{declared}' does not match target '{literal}'"),
        )),
        (literal, declared) => Ok(literal.or(declared)),
    }
}

/// Resource type named by a literal reference such as `Patient/123` or
/// `https://example.org/fhir/Patient/123/_history/2`
pub fn resource_type_from_literal(reference: &str) -> Option<&str> {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    let re = REFERENCE_RE.get_or_init(|| {
        Regex::new(
            r"^(?:(?:https?)://(?:[A-Za-z0-9\-\\.:%$]*/)+)?(?P<type>[A-Z][A-Za-z]+)/[A-Za-z0-9\-.]{1,64}(?:/_history/[A-Za-z0-9\-.]{1,64})?$",
        )
        .expect("reference regex must compile")
    });

    if reference.starts_with('#') || reference.starts_with("urn:") {
        return None;
    }
    re.captures(reference)
        .and_then(|caps| caps.name("type"))
        .map(|m| m.as_str())
}

// `Reference.type` is either a bare type name or a StructureDefinition url.
fn resource_type_from_uri(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

/// Native value held by a primitive
pub trait PrimitiveValue {
    /// The value as text, for string-based primitives
    fn as_text(&self) -> Option<&str> {
        None
    }
}

impl PrimitiveValue for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl PrimitiveValue for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl PrimitiveValue for bool {}
impl PrimitiveValue for i32 {}
impl PrimitiveValue for i64 {}
impl PrimitiveValue for Decimal {}

/// Lexical check of `boolean`, `integer`, `integer64` and `decimal`
///
/// These have no lexical constraint beyond their Rust type.
pub fn accept_any<T: ?Sized>(_value: &T) -> std::result::Result<(), String> {
    Ok(())
}

pub fn check_string(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("string values must not be empty".to_string());
    }
    if value.len() > MAX_STRING_LENGTH {
        return Err(format!("string value exceeds {MAX_STRING_LENGTH} bytes"));
    }
    Ok(())
}

/// Configurable checks shared by every string-based value
pub fn check_text<T: PrimitiveValue + ?Sized>(
    value: &T,
    config: &ModelConfig,
) -> std::result::Result<(), String> {
    match value.as_text() {
        Some(text) if config.check_control_chars => check_control_chars(text),
        _ => Ok(()),
    }
}

pub fn check_control_chars(value: &str) -> std::result::Result<(), String> {
    match value
        .chars()
        .find(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n'))
    {
        Some(c) => Err(format!("control character U+{:04X} is not allowed", c as u32)),
        None => Ok(()),
    }
}

macro_rules! lexical_check {
    ($(#[$meta:meta])* $name:ident, $label:literal, $pattern:literal) => {
        $(#[$meta])*
        pub fn $name(value: &str) -> std::result::Result<(), String> {
            static RE: OnceLock<Regex> = OnceLock::new();
            let re = RE.get_or_init(|| {
                Regex::new(concat!("^(?:", $pattern, ")$"))
                    .expect(concat!($label, " regex must compile"))
            });
            if re.is_match(value) {
                Ok(())
            } else {
                Err(format!("'{}' is not a valid {}", value, $label))
            }
        }
    };
}

lexical_check!(check_id, "id", r"[A-Za-z0-9\-.]{1,64}");
lexical_check!(check_code, "code", r"[^\s]+( [^\s]+)*");
lexical_check!(check_uri, "uri", r"\S*");

/// `Extension.url`: an absolute or relative uri, never empty
pub fn check_url(value: &str) -> std::result::Result<(), String> {
    if value.is_empty() {
        return Err("url must not be empty".to_string());
    }
    check_uri(value)
}
lexical_check!(check_base64, "base64Binary", r"(\s*([0-9a-zA-Z+/=]){4}\s*)+");
lexical_check!(
    check_date,
    "date",
    r"([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1]))?)?"
);
lexical_check!(
    check_date_time,
    "dateTime",
    r"([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]{1,9})?)?)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))?)?"
);
lexical_check!(
    check_instant,
    "instant",
    r"([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]{1,9})?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))"
);

pub fn check_xhtml(value: &str) -> std::result::Result<(), String> {
    let trimmed = value.trim();
    if trimmed.starts_with("<div") && trimmed.ends_with("</div>") {
        Ok(())
    } else {
        Err("narrative must be a single <div> element".to_string())
    }
}
