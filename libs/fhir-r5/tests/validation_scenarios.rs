use ferrum_r5::model_support::required_elements;
use ferrum_r5::resource::document_reference::{Attester, Content};
use ferrum_r5::resource::immunization::ImmunizationOccurrence;
use ferrum_r5::resource::{
    AnyResource, DocumentReference, Immunization, NutritionIntake, SubstancePolymer,
};
use ferrum_r5::types::{
    CodeableConcept, DateTime, DocumentReferenceStatus, FhirBoolean, FhirString,
    ImmunizationStatus, Reference, Uri,
};
use ferrum_r5::{Error, FhirType, HasId, ModelConfig, Resource};

mod test_support;

#[test]
fn immunization_with_required_elements_builds() {
    let immunization = test_support::immunization().build().unwrap();
    assert_eq!(immunization.vaccine_code(), Some(&test_support::vaccine()));
    assert!(matches!(
        immunization.occurrence(),
        Some(ImmunizationOccurrence::DateTime(_))
    ));
}

#[test]
fn immunization_without_occurrence_fails() {
    let err = Immunization::builder()
        .status(ImmunizationStatus::Completed)
        .vaccine_code(test_support::vaccine())
        .patient(Reference::of("Patient/123"))
        .build()
        .unwrap_err();
    assert_eq!(err, Error::MissingRequiredField("occurrence".to_string()));
}

#[test]
fn every_required_immunization_element_is_enforced() {
    let complete = test_support::immunization();
    assert!(complete.build().is_ok());

    let required: Vec<_> = required_elements::<Immunization>().collect();
    assert_eq!(required, vec!["status", "vaccineCode", "patient", "occurrence"]);

    let cases = [
        ("status", complete.clone().status(None::<ImmunizationStatus>)),
        ("vaccineCode", complete.clone().vaccine_code(None::<CodeableConcept>)),
        ("patient", complete.clone().patient(None::<Reference>)),
        ("occurrence", complete.clone().occurrence(None::<ImmunizationOccurrence>)),
    ];
    for (element, builder) in cases {
        assert_eq!(
            builder.build().unwrap_err(),
            Error::MissingRequiredField(element.to_string()),
            "{element} should be required"
        );
    }
}

#[test]
fn document_reference_needs_content() {
    let empty = DocumentReference::builder().status(DocumentReferenceStatus::Current);
    assert_eq!(
        empty.build().unwrap_err(),
        Error::MissingRequiredField("content".to_string())
    );

    let document = empty.content([test_support::content()]).build().unwrap();
    assert_eq!(document.content()[0].attachment(), Some(&test_support::attachment()));

    assert_eq!(
        Content::builder().build().unwrap_err(),
        Error::MissingRequiredField("attachment".to_string())
    );
}

#[test]
fn choice_alternatives_and_rejections() {
    for occurrence in [
        ImmunizationOccurrence::from(DateTime::of("2021-01-10")),
        ImmunizationOccurrence::from(FhirString::of("last spring")),
    ] {
        assert!(test_support::immunization().occurrence(occurrence).build().is_ok());
    }

    let err = ImmunizationOccurrence::try_from(ferrum_r5::types::DataValue::from(Uri::of(
        "http://example.org",
    )))
    .unwrap_err();
    assert!(matches!(err, Error::InvalidChoice { ref found, .. } if found == "uri"));
}

#[test]
fn reference_targets_are_checked() {
    let attester = Attester::builder()
        .mode(CodeableConcept::of("http://hl7.org/fhir/composition-attestation-mode", "legal"))
        .party(Reference::of("Device/d1"))
        .build();
    assert!(matches!(attester, Err(Error::InvalidReferenceTarget { ref element, .. }) if element == "party"));

    let typed = Reference::builder()
        .r#type("Patient")
        .display("Jane")
        .build()
        .unwrap();
    assert!(test_support::immunization().patient(typed).build().is_ok());

    let conflicting = Reference::builder()
        .reference("Patient/1")
        .r#type("Group")
        .build()
        .unwrap();
    assert!(matches!(
        test_support::immunization().patient(conflicting).build(),
        Err(Error::InvalidReferenceTarget { .. })
    ));

    let unknown = Reference::of("Spaceship/1");
    assert!(matches!(
        test_support::immunization().patient(unknown).build(),
        Err(Error::InvalidReferenceTarget { .. })
    ));

    for skipped in ["#p1", "urn:uuid:8f2b1a8e-46a1-4c3f-9d3c-3b1d2a4b5c6d"] {
        assert!(test_support::immunization()
            .patient(Reference::of(skipped))
            .build()
            .is_ok());
    }
}

#[test]
fn any_resource_target_accepts_every_resource_type() {
    let document = test_support::document_reference()
        .subject(Reference::of("Medication/m1"))
        .build();
    assert!(document.is_ok());
}

#[test]
fn contained_resources_and_dom_2() {
    let polymer = SubstancePolymer::builder()
        .id("sp")
        .modification("none")
        .build()
        .unwrap();
    let document = test_support::document_reference()
        .contained([AnyResource::from(polymer.clone())])
        .subject(Reference::of("#sp"))
        .build()
        .unwrap();
    assert_eq!(document.contained()[0].resource_type(), "SubstancePolymer");
    assert_eq!(document.contained()[0].id(), Some("sp"));

    let nested = test_support::immunization()
        .contained([AnyResource::from(document)])
        .build()
        .unwrap_err();
    assert!(matches!(nested, Error::ConstraintViolation { key: "dom-2", .. }));
    assert!(AnyResource::CHOICE_TYPES.contains(&"NutritionIntake"));
}

#[test]
fn vacuous_elements_are_rejected() {
    assert_eq!(
        CodeableConcept::builder().build().unwrap_err(),
        Error::VacuousElement("CodeableConcept".to_string())
    );
    assert!(matches!(
        NutritionIntake::builder().build(),
        Err(Error::MissingRequiredField(_))
    ));
    assert!(FhirBoolean::builder().value(false).build().is_ok());
}

#[test]
fn lexical_forms_are_checked() {
    let bad_date = test_support::immunization()
        .expiration_date("2024-02-30T00:00")
        .build();
    assert!(matches!(bad_date, Err(Error::InvalidValue { ref element, .. }) if element == "expirationDate"));

    let bad_occurrence = test_support::immunization()
        .occurrence(DateTime::of("2021-01-10T09:30"))
        .build();
    assert!(matches!(bad_occurrence, Err(Error::InvalidValue { ref element, .. }) if element == "occurrence"));

    let blank = test_support::immunization().lot_number("").build();
    assert!(matches!(blank, Err(Error::InvalidValue { .. })));
}

#[test]
fn nested_values_are_checked_at_every_depth() {
    let empty_reference = test_support::immunization()
        .patient(Reference::of(""))
        .build();
    assert!(matches!(
        empty_reference,
        Err(Error::InvalidValue { ref element, .. }) if element == "reference"
    ));

    let malformed_concept = test_support::immunization()
        .vaccine_code(CodeableConcept::of("bad uri with spaces", "two  spaces"))
        .build();
    assert!(matches!(
        malformed_concept,
        Err(Error::InvalidValue { ref element, .. }) if element == "system"
    ));

    let unchecked = Attester::builder().validating(false).build().unwrap();
    let document = test_support::document_reference().attester([unchecked]).build();
    assert!(matches!(
        document,
        Err(Error::MissingRequiredField(ref element)) if element == "mode"
    ));
}

#[test]
fn ids_are_checked_lexically() {
    for bad in ["has space !!", ""] {
        let err = test_support::immunization().id(bad).build().unwrap_err();
        assert!(
            matches!(err, Error::InvalidValue { ref element, .. } if element == "id"),
            "{bad:?} should be rejected"
        );
    }
    let immunization = test_support::immunization().id("imm-1.a").build().unwrap();
    assert_eq!(immunization.id(), Some("imm-1.a"));

    let empty_element_id = CodeableConcept::builder().id("").build();
    assert!(matches!(empty_element_id, Err(Error::InvalidValue { .. })));
}

#[test]
fn model_config_is_set_per_builder() {
    let lenient =
        ModelConfig::from_yaml("check_reference_types: false\ncheck_control_chars: false\n")
            .unwrap();

    let mistyped = test_support::immunization().patient(Reference::of("Organization/o1"));
    assert!(matches!(mistyped.build(), Err(Error::InvalidReferenceTarget { .. })));
    assert!(mistyped.clone().model_config(lenient).build().is_ok());

    let with_bell = FhirString::builder().value("ding\u{7}");
    assert!(matches!(with_bell.build(), Err(Error::InvalidValue { .. })));
    assert!(with_bell.clone().model_config(lenient).build().is_ok());

    // The configuration covers the whole tree its builder checks
    let noted = test_support::immunization()
        .lot_number(FhirString::of("lot\u{7}"))
        .model_config(lenient);
    assert!(noted.build().is_ok());
    assert!(noted.model_config(ModelConfig::default()).build().is_err());
}
