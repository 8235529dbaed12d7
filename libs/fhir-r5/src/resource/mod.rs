//! Resources
//!
//! Each resource module holds the resource, its backbone elements and the
//! choice types local to it.

pub mod document_reference;
pub mod immunization;
pub mod nutrition_intake;
pub mod substance_polymer;

pub use document_reference::{DocumentReference, DocumentReferenceBuilder};
pub use immunization::{Immunization, ImmunizationBuilder};
pub use nutrition_intake::{NutritionIntake, NutritionIntakeBuilder};
pub use substance_polymer::{SubstancePolymer, SubstancePolymerBuilder};

use crate::__fhir_union;
use crate::config::ModelConfig;
use crate::element::{FhirType, Resource};
use crate::error::{Error, Result};
use crate::validation::check_list;

__fhir_union! {
    /// Any resource of the model, as held by `contained`
    AnyResource ("Resource") {
        DocumentReference(DocumentReference),
        Immunization(Immunization),
        NutritionIntake(NutritionIntake),
        SubstancePolymer(SubstancePolymer),
    }
}

impl AnyResource {
    pub fn resource(&self) -> &dyn Resource {
        match self {
            AnyResource::DocumentReference(r) => r,
            AnyResource::Immunization(r) => r,
            AnyResource::NutritionIntake(r) => r,
            AnyResource::SubstancePolymer(r) => r,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        self.resource().resource_type()
    }

    pub fn id(&self) -> Option<&str> {
        self.resource().id()
    }
}

/// dom-2: contained resources hold no contained resources of their own
#[doc(hidden)]
pub fn check_contained<R: Resource>(resource: &R, _config: &ModelConfig) -> Result<()> {
    let contained = resource.contained();
    check_list(contained, "contained", AnyResource::CHOICE_TYPES)?;

    if contained
        .iter()
        .any(|inner| !inner.resource().contained().is_empty())
    {
        return Err(Error::ConstraintViolation {
            key: "dom-2",
            message: "a contained resource SHALL NOT contain nested resources".to_string(),
        });
    }
    Ok(())
}
