//! Immunization
//!
//! Vaccine administration to a patient, or a record of one reported by
//! another source.

use crate::types::{
    Annotation, CodeableConcept, CodeableReference, Date, DateTime, FhirBoolean, FhirString,
    Identifier, ImmunizationStatus, Quantity, Reference,
};
use crate::{fhir_choice, fhir_element};

fhir_choice! {
    /// When the vaccine was (or should have been) administered
    ImmunizationOccurrence ("occurrence") {
        DateTime(DateTime),
        String(FhirString),
    }
}

fhir_element! {
    /// Immunization event information
    resource Immunization => ImmunizationBuilder ("Immunization") {
        /// Business identifier
        "identifier" identifier [set_identifier]: list Identifier,
        /// Authority that the immunization event is based on
        "basedOn" based_on [set_based_on]: list Reference
            => ["CarePlan", "MedicationRequest", "ServiceRequest", "ImmunizationRecommendation"],
        "status" status: req ImmunizationStatus,
        /// Reason for current status
        "statusReason" status_reason: opt CodeableConcept,
        /// Vaccine administered
        "vaccineCode" vaccine_code: req CodeableConcept,
        "administeredProduct" administered_product: opt CodeableReference,
        "manufacturer" manufacturer: opt CodeableReference,
        "lotNumber" lot_number: opt FhirString,
        "expirationDate" expiration_date: opt Date,
        /// Who was immunized
        "patient" patient: req Reference => ["Patient"],
        "encounter" encounter: opt Reference => ["Encounter"],
        /// Additional information in support of the immunization
        "supportingInformation" supporting_information [set_supporting_information]: list Reference
            => ["Resource"],
        /// Vaccine administration date
        "occurrence" occurrence: req_choice ImmunizationOccurrence,
        /// Indicates context the data was captured in
        "primarySource" primary_source: opt FhirBoolean,
        "informationSource" information_source: opt CodeableReference,
        "location" location: opt Reference => ["Location"],
        /// Body site vaccine was administered
        "site" site: opt CodeableConcept,
        "route" route: opt CodeableConcept,
        "doseQuantity" dose_quantity: opt Quantity,
        "performer" performer [set_performer]: list Performer,
        "note" note [set_note]: list Annotation,
        "reason" reason [set_reason]: list CodeableReference,
        /// Dose potency
        "isSubpotent" is_subpotent: opt FhirBoolean,
        "subpotentReason" subpotent_reason [set_subpotent_reason]: list CodeableConcept,
        /// Patient eligibility for a specific vaccination program
        "programEligibility" program_eligibility [set_program_eligibility]: list ProgramEligibility,
        /// Funding source for the vaccine
        "fundingSource" funding_source: opt CodeableConcept,
        "reaction" reaction [set_reaction]: list Reaction,
        /// Protocol followed by the provider
        "protocolApplied" protocol_applied [set_protocol_applied]: list ProtocolApplied,
    }
}

fhir_element! {
    /// Who performed the immunization event
    backbone Performer => PerformerBuilder ("Immunization.performer") {
        /// What type of performance was done
        "function" function: opt CodeableConcept,
        "actor" actor: req Reference
            => ["Practitioner", "PractitionerRole", "Organization", "Patient", "RelatedPerson"],
    }
}

fhir_element! {
    backbone ProgramEligibility => ProgramEligibilityBuilder ("Immunization.programEligibility") {
        /// The program that eligibility is declared for
        "program" program: req CodeableConcept,
        "programStatus" program_status: req CodeableConcept,
    }
}

fhir_element! {
    /// Details of a reaction that follows immunization
    backbone Reaction => ReactionBuilder ("Immunization.reaction") {
        "date" date: opt DateTime,
        "manifestation" manifestation: opt CodeableReference,
        /// Indicates self-reported reaction
        "reported" reported: opt FhirBoolean,
    }
}

fhir_element! {
    backbone ProtocolApplied => ProtocolAppliedBuilder ("Immunization.protocolApplied") {
        /// Name of vaccine series
        "series" series: opt FhirString,
        "authority" authority: opt Reference => ["Organization"],
        /// Vaccine preventable disease being targeted
        "targetDisease" target_disease [set_target_disease]: list CodeableConcept,
        /// Dose number within series
        "doseNumber" dose_number: req FhirString,
        "seriesDoses" series_doses: opt FhirString,
    }
}
