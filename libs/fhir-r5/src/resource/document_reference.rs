//! DocumentReference
//!
//! Points at a document of any kind, for any purpose, and carries the
//! metadata needed to find and use it.

use crate::types::{
    Attachment, Canonical, CodeableConcept, CodeableReference, Coding, DateTime,
    DocumentReferenceStatus, FhirString, Identifier, Instant, Markdown, Period, Reference,
    ReferredDocumentStatus, Uri,
};
use crate::{fhir_choice, fhir_element};

fhir_element! {
    /// A reference to a document
    resource DocumentReference => DocumentReferenceBuilder ("DocumentReference") {
        "identifier" identifier [set_identifier]: list Identifier,
        /// An explicitly assigned identifier of a variation of the content
        "version" version: opt FhirString,
        /// Procedure that caused this media to be created
        "basedOn" based_on [set_based_on]: list Reference => [
            "Appointment", "AppointmentResponse", "CarePlan", "Claim", "CommunicationRequest",
            "Contract", "CoverageEligibilityRequest", "DeviceRequest", "EnrollmentRequest",
            "ImmunizationRecommendation", "MedicationRequest", "NutritionOrder",
            "RequestOrchestration", "ServiceRequest", "SupplyRequest", "VisionPrescription"
        ],
        "status" status: req DocumentReferenceStatus,
        "docStatus" doc_status: opt ReferredDocumentStatus,
        /// Imaging modality used
        "modality" modality [set_modality]: list CodeableConcept,
        /// Kind of document (LOINC if possible)
        "type" r#type: opt CodeableConcept,
        "category" category [set_category]: list CodeableConcept,
        /// Who/what is the subject of the document
        "subject" subject: opt Reference => ["Resource"],
        "context" context [set_context]: list Reference
            => ["Appointment", "Encounter", "EpisodeOfCare"],
        "event" event [set_event]: list CodeableReference,
        "bodySite" body_site [set_body_site]: list CodeableReference,
        "facilityType" facility_type: opt CodeableConcept,
        "practiceSetting" practice_setting: opt CodeableConcept,
        /// Time of service that is being documented
        "period" period: opt Period,
        /// When this document reference was created
        "date" date: opt Instant,
        "author" author [set_author]: list Reference => [
            "Practitioner", "PractitionerRole", "Organization", "Device", "Patient",
            "RelatedPerson", "CareTeam"
        ],
        "attester" attester [set_attester]: list Attester,
        /// Organization which maintains the document
        "custodian" custodian: opt Reference => ["Organization"],
        "relatesTo" relates_to [set_relates_to]: list RelatesTo,
        "description" description: opt Markdown,
        "securityLabel" security_label [set_security_label]: list CodeableConcept,
        /// Document referenced
        "content" content [set_content]: req_list Content,
    }
}

fhir_element! {
    /// Attests to accuracy of the document
    backbone Attester => AttesterBuilder ("DocumentReference.attester") {
        /// personal | professional | legal | official
        "mode" mode: req CodeableConcept,
        "time" time: opt DateTime,
        "party" party: opt Reference
            => ["Patient", "RelatedPerson", "Practitioner", "PractitionerRole", "Organization"],
    }
}

fhir_element! {
    /// Relationships to other documents
    backbone RelatesTo => RelatesToBuilder ("DocumentReference.relatesTo") {
        "code" code: req CodeableConcept,
        /// Target of the relationship
        "target" target: req Reference => ["DocumentReference"],
    }
}

fhir_element! {
    backbone Content => ContentBuilder ("DocumentReference.content") {
        /// Where to access the document
        "attachment" attachment: req Attachment,
        /// Content profile rules for the document
        "profile" profile [set_profile]: list ContentProfile,
    }
}

fhir_choice! {
    ProfileValue ("value") {
        Coding(Coding),
        Uri(Uri),
        Canonical(Canonical),
    }
}

fhir_element! {
    backbone ContentProfile => ContentProfileBuilder ("DocumentReference.content.profile") {
        /// Code|uri|canonical
        "value" value: req_choice ProfileValue,
    }
}

impl Content {
    /// Content with only an attachment
    pub fn of(attachment: Attachment) -> crate::Result<Self> {
        Content::builder().attachment(attachment).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::HasId;
    use crate::error::Error;

    fn pdf() -> Attachment {
        Attachment::builder()
            .content_type("application/pdf")
            .url("http://example.org/docs/discharge.pdf")
            .title("Discharge summary")
            .build()
            .unwrap()
    }

    #[test]
    fn test_content_is_required_non_empty() {
        let builder = DocumentReference::builder().status(DocumentReferenceStatus::Current);
        assert_eq!(
            builder.build().unwrap_err(),
            Error::MissingRequiredField("content".to_string())
        );

        let document = builder.content([Content::of(pdf()).unwrap()]).build().unwrap();
        assert_eq!(document.content().len(), 1);
    }

    #[test]
    fn test_content_attachment_required() {
        assert_eq!(
            Content::builder()
                .profile([ContentProfile::builder()
                    .value(Coding::of(
                        "http://ihe.net/fhir/ihe.formatcode.fhir/CodeSystem/formatcode",
                        "urn:ihe:iti:xds:2017:mimeTypeSufficient",
                    ))
                    .build()
                    .unwrap()])
                .build()
                .unwrap_err(),
            Error::MissingRequiredField("attachment".to_string())
        );
    }

    #[test]
    fn test_profile_value_alternatives() {
        for value in [
            ProfileValue::from(Coding::of(
                "urn:oid:1.3.6.1.4.1.19376.1.2.3",
                "urn:ihe:pcc:xphr:2007",
            )),
            ProfileValue::from(Uri::of("urn:ihe:pcc:xphr:2007")),
            ProfileValue::from(Canonical::of("http://example.org/fhir/StructureDefinition/xphr")),
        ] {
            assert!(ContentProfile::builder().value(value).build().is_ok());
        }
        assert_eq!(
            ContentProfile::builder().build().unwrap_err(),
            Error::MissingRequiredField("value".to_string())
        );
    }

    #[test]
    fn test_relates_to_target() {
        let replaces = RelatesTo::builder()
            .code(CodeableConcept::of(
                "http://hl7.org/fhir/document-relationship-type",
                "replaces",
            ))
            .target(Reference::of("DocumentReference/old-1"))
            .build()
            .unwrap();
        let literal = replaces
            .target()
            .and_then(|target| target.reference())
            .and_then(|reference| reference.value());
        assert_eq!(literal.map(String::as_str), Some("DocumentReference/old-1"));

        let wrong = replaces.to_builder().target(Reference::of("Binary/b1")).build();
        assert!(matches!(wrong, Err(Error::InvalidReferenceTarget { .. })));
    }

    #[test]
    fn test_id_and_instant_date() {
        let content = Content::of(pdf()).unwrap();
        let document = DocumentReference::builder()
            .id("doc-1")
            .status(DocumentReferenceStatus::Current)
            .content([content.clone()])
            .build()
            .unwrap();
        assert_eq!(document.id(), Some("doc-1"));

        let bad_date = DocumentReference::builder()
            .status(DocumentReferenceStatus::Current)
            .date("2024-05-01")
            .content([content])
            .build();
        assert!(
            matches!(bad_date, Err(Error::InvalidValue { ref element, .. }) if element == "date")
        );
    }
}
