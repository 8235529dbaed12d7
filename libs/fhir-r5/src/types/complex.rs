//! General-purpose complex datatypes

use crate::config::ModelConfig;
use crate::element::HasExtensions;
use crate::error::{Error, Result};
use crate::types::{
    Base64Binary, Canonical, Code, DataValue, DateTime, FhirBoolean,
    FhirDecimal, FhirString, Id, IdentifierUse, Instant, Integer64, Markdown, NarrativeStatus,
    QuantityComparator, Uri, Xhtml,
};
use crate::validation::{self, check_string_slot};
use crate::{fhir_choice, fhir_element};

fhir_element! {
    /// Additional content defined by implementations
    element Extension => ExtensionBuilder ("Extension") {
        /// Identifies the meaning of the extension
        "url" url: req String,
        "value" value: choice DataValue,
    }
    invariants [check_url, ext_1]
}

fn check_url(extension: &Extension, config: &ModelConfig) -> Result<()> {
    check_string_slot(&extension.url, "url", validation::check_url, config)
}

fn ext_1(extension: &Extension, _config: &ModelConfig) -> Result<()> {
    if extension.value.is_some() == extension.extension.is_empty() {
        return Ok(());
    }
    Err(Error::ConstraintViolation {
        key: "ext-1",
        message: "Must have either extensions or value[x], not both".to_string(),
    })
}

impl Extension {
    /// Extension with a url and a value
    pub fn of(url: impl Into<String>, value: impl Into<DataValue>) -> Result<Self> {
        Extension::builder()
            .url(url.into())
            .value(value.into())
            .build()
    }
}

fhir_element! {
    /// Reference to a code defined by a terminology system
    element Coding => CodingBuilder ("Coding") {
        "system" system: opt Uri,
        "version" version: opt FhirString,
        "code" code: opt Code,
        "display" display: opt FhirString,
        "userSelected" user_selected: opt FhirBoolean,
    }
}

impl Coding {
    /// Coding with a system and code, checked when a validated parent is built
    pub fn of(system: &str, code: &str) -> Self {
        Coding {
            system: Some(Uri::of(system)),
            code: Some(Code::of(code)),
            ..Coding::vacuous()
        }
    }

    fn vacuous() -> Self {
        Coding {
            id: None,
            extension: Vec::new(),
            system: None,
            version: None,
            code: None,
            display: None,
            user_selected: None,
            hash_cache: Default::default(),
        }
    }
}

fhir_element! {
    /// Concept defined by codings and/or text
    element CodeableConcept => CodeableConceptBuilder ("CodeableConcept") {
        "coding" coding [set_coding]: list Coding,
        "text" text: opt FhirString,
    }
}

impl CodeableConcept {
    /// Concept with a single coding, checked when a validated parent is built
    pub fn of(system: &str, code: &str) -> Self {
        CodeableConcept {
            id: None,
            extension: Vec::new(),
            coding: vec![Coding::of(system, code)],
            text: None,
            hash_cache: Default::default(),
        }
    }

    pub fn text_only(text: &str) -> Result<Self> {
        CodeableConcept::builder().text(text).build()
    }
}

fhir_element! {
    /// Reference to a resource or a concept
    element CodeableReference => CodeableReferenceBuilder ("CodeableReference") {
        "concept" concept: opt CodeableConcept,
        "reference" reference: opt Reference,
    }
}

fhir_element! {
    /// Reference from one resource to another
    element Reference => ReferenceBuilder ("Reference") {
        /// Literal reference, relative, internal or absolute URL
        "reference" reference: opt FhirString,
        /// Type the reference refers to (e.g. "Patient")
        "type" r#type: opt Uri,
        /// Logical reference, when literal reference is not known
        "identifier" identifier: opt Identifier,
        "display" display: opt FhirString,
    }
}

impl Reference {
    /// Literal reference such as `Patient/123`
    ///
    /// Shortcut for a builder with `validating(false)`; the value is checked
    /// when a validated parent is built.
    pub fn of(reference: &str) -> Self {
        Reference {
            id: None,
            extension: Vec::new(),
            reference: Some(FhirString::of(reference)),
            r#type: None,
            identifier: None,
            display: None,
            hash_cache: Default::default(),
        }
    }

    /// Whether this points at a resource contained in the referencing resource
    pub fn is_local(&self) -> bool {
        self.reference
            .as_ref()
            .and_then(|r| r.value())
            .is_some_and(|r| r.starts_with('#'))
    }
}

fhir_element! {
    /// Identifier intended for computation
    element Identifier => IdentifierBuilder ("Identifier") {
        "use" r#use: opt IdentifierUse,
        "type" r#type: opt CodeableConcept,
        /// The namespace for the identifier value
        "system" system: opt Uri,
        "value" value: opt FhirString,
        "period" period: opt Period,
    }
}

impl Identifier {
    /// Identifier in a namespace, checked when a validated parent is built
    pub fn of(system: &str, value: &str) -> Self {
        Identifier {
            id: None,
            extension: Vec::new(),
            r#use: None,
            r#type: None,
            system: Some(Uri::of(system)),
            value: Some(FhirString::of(value)),
            period: None,
            hash_cache: Default::default(),
        }
    }
}

fhir_element! {
    /// Time range defined by start and end date/time
    element Period => PeriodBuilder ("Period") {
        "start" start: opt DateTime,
        "end" end: opt DateTime,
    }
}

fhir_element! {
    /// Measured amount
    element Quantity => QuantityBuilder ("Quantity") {
        "value" value: opt FhirDecimal,
        "comparator" comparator: opt QuantityComparator,
        "unit" unit: opt FhirString,
        "system" system: opt Uri,
        "code" code: opt Code,
    }
}

fhir_choice! {
    AnnotationAuthor ("author") {
        Reference(Reference),
        String(FhirString),
    }
}

fhir_element! {
    /// Text note with attribution
    element Annotation => AnnotationBuilder ("Annotation") {
        "author" author: choice AnnotationAuthor
            => ["Practitioner", "PractitionerRole", "Patient", "RelatedPerson", "Organization"],
        "time" time: opt DateTime,
        "text" text: req Markdown,
    }
}

fhir_element! {
    /// Content in a format defined elsewhere
    element Attachment => AttachmentBuilder ("Attachment") {
        /// Mime type of the content, with charset etc.
        "contentType" content_type: opt Code,
        "language" language: opt Code,
        /// Data inline, base64ed
        "data" data: opt Base64Binary,
        "url" url: opt Uri,
        "size" size: opt Integer64,
        "hash" hash: opt Base64Binary,
        "title" title: opt FhirString,
        "creation" creation: opt DateTime,
    }
}

fhir_element! {
    /// Occurrences of an event
    element Timing => TimingBuilder ("Timing") {
        "event" event [set_event]: list DateTime,
        "code" code: opt CodeableConcept,
    }
}

fhir_element! {
    /// Metadata about a resource
    element Meta => MetaBuilder ("Meta") {
        "versionId" version_id: opt Id,
        "lastUpdated" last_updated: opt Instant,
        "source" source: opt Uri,
        "profile" profile [set_profile]: list Canonical,
        "security" security [set_security]: list Coding,
        "tag" tag [set_tag]: list Coding,
    }
}

fhir_element! {
    /// Human-readable summary of the resource
    element Narrative => NarrativeBuilder ("Narrative") {
        "status" status: req NarrativeStatus,
        "div" div: req Xhtml,
    }
}

impl HasExtensions for DataValue {
    fn extension(&self) -> &[Extension] {
        match self {
            DataValue::Base64Binary(v) => v.extension(),
            DataValue::Boolean(v) => v.extension(),
            DataValue::Canonical(v) => v.extension(),
            DataValue::Code(v) => v.extension(),
            DataValue::Date(v) => v.extension(),
            DataValue::DateTime(v) => v.extension(),
            DataValue::Decimal(v) => v.extension(),
            DataValue::Id(v) => v.extension(),
            DataValue::Instant(v) => v.extension(),
            DataValue::Integer(v) => v.extension(),
            DataValue::Integer64(v) => v.extension(),
            DataValue::Markdown(v) => v.extension(),
            DataValue::String(v) => v.extension(),
            DataValue::Uri(v) => v.extension(),
            DataValue::Annotation(v) => v.extension(),
            DataValue::Attachment(v) => v.extension(),
            DataValue::CodeableConcept(v) => v.extension(),
            DataValue::CodeableReference(v) => v.extension(),
            DataValue::Coding(v) => v.extension(),
            DataValue::Identifier(v) => v.extension(),
            DataValue::Period(v) => v.extension(),
            DataValue::Quantity(v) => v.extension(),
            DataValue::Reference(v) => v.extension(),
            DataValue::Timing(v) => v.extension(),
        }
    }
}
