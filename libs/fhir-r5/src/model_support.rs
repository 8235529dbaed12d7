//! Model support
//!
//! Reflective metadata over the generated types: which elements a type
//! declares, their cardinality, choice alternatives and reference targets.

use phf::phf_set;

use crate::element::FhirType;

/// Facts emitted for every declared element of a generated type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementInfo {
    pub name: &'static str,
    pub type_name: &'static str,
    pub required: bool,
    pub repeating: bool,
    pub choice_types: &'static [&'static str],
    pub reference_types: &'static [&'static str],
}

impl ElementInfo {
    pub fn is_choice(&self) -> bool {
        !self.choice_types.is_empty()
    }

    pub fn is_reference(&self) -> bool {
        !self.reference_types.is_empty()
    }

    /// Serialized names of a choice element, e.g. `occurrenceDateTime`
    pub fn choice_element_names(&self) -> Vec<String> {
        self.choice_types
            .iter()
            .map(|type_name| choice_element_name(self.name, type_name))
            .collect()
    }
}

/// Every FHIR R5 resource type, abstract ones included
static RESOURCE_TYPES: phf::Set<&'static str> = phf_set! {
    "Account", "ActivityDefinition", "ActorDefinition",
    "AdministrableProductDefinition", "AdverseEvent", "AllergyIntolerance",
    "Appointment", "AppointmentResponse", "ArtifactAssessment", "AuditEvent", "Basic",
    "Binary", "BiologicallyDerivedProduct", "BiologicallyDerivedProductDispense",
    "BodyStructure", "Bundle", "CapabilityStatement", "CarePlan", "CareTeam",
    "ChargeItem", "ChargeItemDefinition", "Citation", "Claim", "ClaimResponse",
    "ClinicalImpression", "ClinicalUseDefinition", "CodeSystem", "Communication",
    "CommunicationRequest", "CompartmentDefinition", "Composition", "ConceptMap",
    "Condition", "ConditionDefinition", "Consent", "Contract", "Coverage",
    "CoverageEligibilityRequest", "CoverageEligibilityResponse", "DetectedIssue",
    "Device", "DeviceAssociation", "DeviceDefinition", "DeviceDispense", "DeviceMetric",
    "DeviceRequest", "DeviceUsage", "DiagnosticReport", "DocumentReference",
    "DomainResource", "Encounter", "EncounterHistory", "Endpoint", "EnrollmentRequest",
    "EnrollmentResponse", "EpisodeOfCare", "EventDefinition", "Evidence",
    "EvidenceReport", "EvidenceVariable", "ExampleScenario", "ExplanationOfBenefit",
    "FamilyMemberHistory", "Flag", "FormularyItem", "GenomicStudy", "Goal",
    "GraphDefinition", "Group", "GuidanceResponse", "HealthcareService",
    "ImagingSelection", "ImagingStudy", "Immunization", "ImmunizationEvaluation",
    "ImmunizationRecommendation", "ImplementationGuide", "Ingredient", "InsurancePlan",
    "InventoryItem", "InventoryReport", "Invoice", "Library", "Linkage", "List",
    "Location", "ManufacturedItemDefinition", "Measure", "MeasureReport", "Medication",
    "MedicationAdministration", "MedicationDispense", "MedicationKnowledge",
    "MedicationRequest", "MedicationStatement", "MedicinalProductDefinition",
    "MessageDefinition", "MessageHeader", "MolecularSequence", "NamingSystem",
    "NutritionIntake", "NutritionOrder", "NutritionProduct", "Observation",
    "ObservationDefinition", "OperationDefinition", "OperationOutcome", "Organization",
    "OrganizationAffiliation", "PackagedProductDefinition", "Parameters", "Patient",
    "PaymentNotice", "PaymentReconciliation", "Permission", "Person", "PlanDefinition",
    "Practitioner", "PractitionerRole", "Procedure", "Provenance", "Questionnaire",
    "QuestionnaireResponse", "RegulatedAuthorization", "RelatedPerson",
    "RequestOrchestration", "Requirements", "ResearchStudy", "ResearchSubject",
    "Resource", "RiskAssessment", "Schedule", "SearchParameter", "ServiceRequest",
    "Slot", "Specimen", "SpecimenDefinition", "StructureDefinition", "StructureMap",
    "Subscription", "SubscriptionStatus", "SubscriptionTopic", "Substance",
    "SubstanceDefinition", "SubstanceNucleicAcid", "SubstancePolymer",
    "SubstanceProtein", "SubstanceReferenceInformation", "SubstanceSourceMaterial",
    "SupplyDelivery", "SupplyRequest", "Task", "TerminologyCapabilities", "TestPlan",
    "TestReport", "TestScript", "Transport", "ValueSet", "VerificationResult",
    "VisionPrescription",
};

static PRIMITIVE_TYPES: phf::Set<&'static str> = phf_set! {
    "base64Binary", "boolean", "canonical", "code", "date", "dateTime", "decimal", "id",
    "instant", "integer", "integer64", "markdown", "oid", "positiveInt", "string", "time",
    "unsignedInt", "uri", "url", "uuid", "xhtml",
};

pub fn is_resource_type(name: &str) -> bool {
    RESOURCE_TYPES.contains(name)
}

pub fn is_primitive_type(name: &str) -> bool {
    PRIMITIVE_TYPES.contains(name)
}

/// Name of a choice element rendered for one of its types
pub fn choice_element_name(name: &str, type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => format!("{name}{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => name.to_string(),
    }
}

pub fn element_info<T: FhirType>(name: &str) -> Option<&'static ElementInfo> {
    T::ELEMENTS.iter().find(|info| info.name == name)
}

pub fn required_elements<T: FhirType>() -> impl Iterator<Item = &'static str> {
    T::ELEMENTS
        .iter()
        .filter(|info| info.required)
        .map(|info| info.name)
}

pub fn reference_target_types<T: FhirType>(name: &str) -> &'static [&'static str] {
    match element_info::<T>(name) {
        Some(info) => info.reference_types,
        None => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::immunization::{Immunization, Performer};
    use crate::resource::DocumentReference;

    #[test]
    fn test_resource_types() {
        assert!(is_resource_type("Patient"));
        assert!(is_resource_type("Immunization"));
        assert!(is_resource_type("Resource"));
        assert!(!is_resource_type("Coding"));
        assert!(!is_resource_type("patient"));
        assert!(is_primitive_type("dateTime"));
        assert!(!is_primitive_type("Period"));
    }

    #[test]
    fn test_choice_element_name() {
        assert_eq!(choice_element_name("occurrence", "dateTime"), "occurrenceDateTime");
        assert_eq!(choice_element_name("value", "Coding"), "valueCoding");
    }

    #[test]
    fn test_immunization_metadata() {
        let required: Vec<_> = required_elements::<Immunization>().collect();
        assert_eq!(required, vec!["status", "vaccineCode", "patient", "occurrence"]);

        let occurrence = element_info::<Immunization>("occurrence").unwrap();
        assert!(occurrence.is_choice());
        assert_eq!(
            occurrence.choice_element_names(),
            vec!["occurrenceDateTime", "occurrenceString"]
        );

        assert_eq!(
            reference_target_types::<Performer>("actor"),
            ["Practitioner", "PractitionerRole", "Organization", "Patient", "RelatedPerson"]
        );
        assert!(reference_target_types::<Immunization>("lotNumber").is_empty());
    }

    #[test]
    fn test_inherited_elements_come_first() {
        let names: Vec<_> = DocumentReference::ELEMENTS
            .iter()
            .map(|info| info.name)
            .take(9)
            .collect();
        assert_eq!(
            names,
            vec![
                "id",
                "meta",
                "implicitRules",
                "language",
                "text",
                "contained",
                "extension",
                "modifierExtension",
                "identifier"
            ]
        );
        let content = element_info::<DocumentReference>("content").unwrap();
        assert!(content.required && content.repeating);
    }
}
