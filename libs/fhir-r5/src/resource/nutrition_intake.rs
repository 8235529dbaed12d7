//! NutritionIntake
//!
//! Record of food or fluid that is being consumed by a patient.

use crate::types::{
    Annotation, Canonical, CodeableConcept, CodeableReference, DateTime, FhirBoolean, Identifier,
    NutritionIntakeStatus, Period, Quantity, Reference, Timing, Uri,
};
use crate::{fhir_choice, fhir_element};

fhir_choice! {
    NutritionIntakeOccurrence ("occurrence") {
        DateTime(DateTime),
        Period(Period),
    }
}

fhir_choice! {
    /// Whether the intake was reported by a primary source, or by whom
    NutritionIntakeReported ("reported") {
        Boolean(FhirBoolean),
        Reference(Reference),
    }
}

fhir_element! {
    resource NutritionIntake => NutritionIntakeBuilder ("NutritionIntake") {
        "identifier" identifier [set_identifier]: list Identifier,
        "instantiatesCanonical" instantiates_canonical [set_instantiates_canonical]: list Canonical,
        "instantiatesUri" instantiates_uri [set_instantiates_uri]: list Uri,
        /// Fulfils plan, proposal or order
        "basedOn" based_on [set_based_on]: list Reference
            => ["NutritionOrder", "CarePlan", "ServiceRequest"],
        /// Part of referenced event
        "partOf" part_of [set_part_of]: list Reference
            => ["NutritionIntake", "Procedure", "Observation"],
        "status" status: req NutritionIntakeStatus,
        "statusReason" status_reason [set_status_reason]: list CodeableConcept,
        /// Code representing an overall type of nutrition intake
        "code" code: opt CodeableConcept,
        /// Who is/was consuming the food
        "subject" subject: req Reference => ["Patient", "Group"],
        "encounter" encounter: opt Reference => ["Encounter"],
        "occurrence" occurrence: choice NutritionIntakeOccurrence,
        /// When the intake was recorded
        "recorded" recorded: opt DateTime,
        "reported" reported: choice NutritionIntakeReported
            => ["Patient", "RelatedPerson", "Practitioner", "PractitionerRole", "Organization"],
        /// What food or fluid product or item was consumed
        "consumedItem" consumed_item [set_consumed_item]: req_list ConsumedItem,
        "ingredientLabel" ingredient_label [set_ingredient_label]: list IngredientLabel,
        "performer" performer [set_performer]: list Performer,
        "location" location: opt Reference => ["Location"],
        /// Additional supporting information
        "derivedFrom" derived_from [set_derived_from]: list Reference => ["Resource"],
        "reason" reason [set_reason]: list CodeableReference,
        "note" note [set_note]: list Annotation,
    }
}

fhir_element! {
    backbone ConsumedItem => ConsumedItemBuilder ("NutritionIntake.consumedItem") {
        /// The type of food or fluid product
        "type" r#type: req CodeableConcept,
        "nutritionProduct" nutrition_product: req CodeableReference,
        /// Scheduled frequency of consumption
        "schedule" schedule: opt Timing,
        "amount" amount: opt Quantity,
        /// Rate at which enteral feeding was administered
        "rate" rate: opt Quantity,
        "notConsumed" not_consumed: opt FhirBoolean,
        "notConsumedReason" not_consumed_reason: opt CodeableConcept,
    }
}

fhir_element! {
    /// Total nutrient for the whole meal, product, serving
    backbone IngredientLabel => IngredientLabelBuilder ("NutritionIntake.ingredientLabel") {
        "nutrient" nutrient: req CodeableReference,
        "amount" amount: req Quantity,
    }
}

fhir_element! {
    /// Who was involved in the intake
    backbone Performer => PerformerBuilder ("NutritionIntake.performer") {
        "function" function: opt CodeableConcept,
        "actor" actor: req Reference => [
            "Practitioner", "PractitionerRole", "CareTeam", "Patient", "Device",
            "RelatedPerson", "Organization"
        ],
    }
}

impl NutritionIntake {
    /// Items that were recorded as not consumed
    pub fn refused_items(&self) -> impl Iterator<Item = &ConsumedItem> {
        self.consumed_item
            .iter()
            .filter(|item| item.not_consumed().and_then(|b| b.value()) == Some(&true))
    }
}
