//! Shared fixtures for the integration tests

#![allow(dead_code)]

use ferrum_r5::resource::document_reference::Content;
use ferrum_r5::resource::{DocumentReferenceBuilder, ImmunizationBuilder};
use ferrum_r5::resource::{DocumentReference, Immunization};
use ferrum_r5::types::{
    Attachment, CodeableConcept, DateTime, DocumentReferenceStatus, ImmunizationStatus, Reference,
};

pub fn vaccine() -> CodeableConcept {
    CodeableConcept::of("http://hl7.org/fhir/sid/cvx", "140")
}

/// Immunization builder with the four required elements set
pub fn immunization() -> ImmunizationBuilder {
    Immunization::builder()
        .status(ImmunizationStatus::Completed)
        .vaccine_code(vaccine())
        .patient(Reference::of("Patient/123"))
        .occurrence(DateTime::of("2021-01-10T09:30:00+01:00"))
}

pub fn attachment() -> Attachment {
    Attachment::builder()
        .content_type("text/plain")
        .data("SGVsbG8gd29ybGQ=")
        .build()
        .expect("fixture attachment is valid")
}

pub fn content() -> Content {
    Content::of(attachment()).expect("fixture content is valid")
}

pub fn document_reference() -> DocumentReferenceBuilder {
    DocumentReference::builder()
        .status(DocumentReferenceStatus::Current)
        .content([content()])
}
