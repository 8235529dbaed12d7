//! SubstancePolymer
//!
//! Properties of a substance specific to it being a polymer. Every element
//! below the resource is optional, so most of the checks here come down to
//! the rule that no element may be empty.

use crate::types::{
    Attachment, CodeableConcept, FhirBoolean, FhirString, Identifier, Integer, Quantity,
};
use crate::fhir_element;

fhir_element! {
    resource SubstancePolymer => SubstancePolymerBuilder ("SubstancePolymer") {
        "identifier" identifier: opt Identifier,
        /// Overall type of the polymer
        "class" class: opt CodeableConcept,
        "geometry" geometry: opt CodeableConcept,
        "copolymerConnectivity" copolymer_connectivity [set_copolymer_connectivity]: list CodeableConcept,
        /// Free-text description of modifications
        "modification" modification: opt FhirString,
        "monomerSet" monomer_set [set_monomer_set]: list MonomerSet,
        "repeat" repeat [set_repeat]: list Repeat,
    }
}

fhir_element! {
    backbone MonomerSet => MonomerSetBuilder ("SubstancePolymer.monomerSet") {
        /// Captures the type of ratio to the entire polymer
        "ratioType" ratio_type: opt CodeableConcept,
        "startingMaterial" starting_material [set_starting_material]: list StartingMaterial,
    }
}

fhir_element! {
    backbone StartingMaterial => StartingMaterialBuilder ("SubstancePolymer.monomerSet.startingMaterial") {
        /// The type of substance for this starting material
        "code" code: opt CodeableConcept,
        "category" category: opt CodeableConcept,
        /// Used to specify whether the attribute described is a defining element
        "isDefining" is_defining: opt FhirBoolean,
        "amount" amount: opt Quantity,
    }
}

fhir_element! {
    /// Specifies and quantifies the repeated units
    backbone Repeat => RepeatBuilder ("SubstancePolymer.repeat") {
        "averageMolecularFormula" average_molecular_formula: opt FhirString,
        "repeatUnitAmountType" repeat_unit_amount_type: opt CodeableConcept,
        "repeatUnit" repeat_unit [set_repeat_unit]: list RepeatUnit,
    }
}

fhir_element! {
    backbone RepeatUnit => RepeatUnitBuilder ("SubstancePolymer.repeat.repeatUnit") {
        /// Structural repeat units are essential elements for defining polymers
        "unit" unit: opt FhirString,
        "orientation" orientation: opt CodeableConcept,
        "amount" amount: opt Integer,
        "degreeOfPolymerisation" degree_of_polymerisation [set_degree_of_polymerisation]: list DegreeOfPolymerisation,
        "structuralRepresentation" structural_representation [set_structural_representation]: list StructuralRepresentation,
    }
}

fhir_element! {
    /// Applies to homopolymer and block co-polymers where the degree of
    /// polymerisation within a block can be described
    backbone DegreeOfPolymerisation => DegreeOfPolymerisationBuilder ("SubstancePolymer.repeat.repeatUnit.degreeOfPolymerisation") {
        "type" r#type: opt CodeableConcept,
        "average" average: opt Integer,
        "low" low: opt Integer,
        "high" high: opt Integer,
    }
}

fhir_element! {
    backbone StructuralRepresentation => StructuralRepresentationBuilder ("SubstancePolymer.repeat.repeatUnit.structuralRepresentation") {
        /// The type of structure (e.g. Full, Partial, Representative)
        "type" r#type: opt CodeableConcept,
        /// The structural representation as text string in a standard format
        "representation" representation: opt FhirString,
        "format" format: opt CodeableConcept,
        /// An attached file with the structural representation
        "attachment" attachment: opt Attachment,
    }
}
