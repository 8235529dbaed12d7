//! Required-binding code systems

use crate::fhir_code;

fhir_code! {
    /// Current state of an immunization event
    ImmunizationStatus ("ImmunizationStatus") {
        Completed => "completed",
        EnteredInError => "entered-in-error",
        NotDone => "not-done",
    }
}

fhir_code! {
    /// Status of a document reference
    DocumentReferenceStatus ("DocumentReferenceStatus") {
        Current => "current",
        Superseded => "superseded",
        EnteredInError => "entered-in-error",
    }
}

fhir_code! {
    /// Workflow status of the referenced document
    ReferredDocumentStatus ("ReferredDocumentStatus") {
        Registered => "registered",
        Partial => "partial",
        Preliminary => "preliminary",
        Final => "final",
        Amended => "amended",
        Corrected => "corrected",
        Appended => "appended",
        Cancelled => "cancelled",
        EnteredInError => "entered-in-error",
        Deprecated => "deprecated",
        Unknown => "unknown",
    }
}

fhir_code! {
    /// Event status of a nutrition intake
    NutritionIntakeStatus ("NutritionIntakeStatus") {
        Preparation => "preparation",
        InProgress => "in-progress",
        NotDone => "not-done",
        OnHold => "on-hold",
        Stopped => "stopped",
        Completed => "completed",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

fhir_code! {
    NarrativeStatus ("NarrativeStatus") {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

fhir_code! {
    /// How a quantity value is to be understood
    QuantityComparator ("QuantityComparator") {
        LessThan => "<",
        LessOrEqual => "<=",
        GreaterOrEqual => ">=",
        GreaterThan => ">",
        /// Sufficient to achieve this total quantity
        Sufficient => "ad",
    }
}

fhir_code! {
    IdentifierUse ("IdentifierUse") {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}
