//! Builder protocol support
//!
//! Generated builders are flat structs mirroring every slot of their element.
//! Setters consume and return the builder; `build(&self)` snapshots the current
//! state into an immutable element and leaves the builder usable, so a builder
//! seeded with `to_builder()` supports copy-and-modify.
//!
//! A validating `build()` checks the new element and everything below it, so
//! values made with the `of(..)` shortcuts or built with `validating(false)`
//! are caught once they are placed in a validated parent.

use tracing::{debug, trace};

use crate::config::ModelConfig;
use crate::element::ElementNode;
use crate::error::Result;
use crate::visitor::{check_tree, Visitable};

/// Conversion accepted by single-valued setters
///
/// Besides the slot type itself this covers `Option<T>` (pass `None` to
/// clear), native values wrapped into primitives and the alternatives of a
/// choice type.
pub trait IntoSlot<T> {
    fn into_slot(self) -> Option<T>;
}

impl<T: ElementNode> IntoSlot<T> for T {
    fn into_slot(self) -> Option<T> {
        Some(self)
    }
}

impl<T: ElementNode> IntoSlot<T> for Option<T> {
    fn into_slot(self) -> Option<T> {
        self
    }
}

impl IntoSlot<String> for &str {
    fn into_slot(self) -> Option<String> {
        Some(self.to_string())
    }
}

/// Final step of every `build()`: validate unless the caller opted out
pub fn finish<T: Visitable>(element: T, validating: bool, config: &ModelConfig) -> Result<T> {
    if !validating {
        trace!(element = ElementNode::type_name(&element), "built without validation");
        return Ok(element);
    }

    if let Err(error) = check_tree(&element, config) {
        debug!(element = ElementNode::type_name(&element), %error, "build rejected");
        return Err(error);
    }

    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{CodeableConcept, Coding, FhirString};

    #[test]
    fn test_into_slot_variants() {
        let set: Option<String> = "abc".into_slot();
        assert_eq!(set.as_deref(), Some("abc"));

        let cleared: Option<FhirString> = None::<FhirString>.into_slot();
        assert!(cleared.is_none());

        let wrapped: Option<FhirString> = "text".into_slot();
        assert_eq!(wrapped.unwrap().value().map(String::as_str), Some("text"));
    }

    #[test]
    fn test_finish_honours_validating_flag() {
        let vacuous = Coding::builder().validating(false).build().unwrap();

        assert!(matches!(
            finish(vacuous.clone(), true, &ModelConfig::DEFAULT),
            Err(Error::VacuousElement(_))
        ));
        assert_eq!(
            finish(vacuous.clone(), false, &ModelConfig::DEFAULT).unwrap(),
            vacuous
        );
    }

    #[test]
    fn test_finish_checks_grandchildren() {
        let concept = CodeableConcept::of("bad uri with spaces", "8867-4");
        assert!(concept.validate().is_ok());
        assert!(matches!(
            finish(concept, true, &ModelConfig::DEFAULT),
            Err(Error::InvalidValue { ref element, .. }) if element == "system"
        ));
    }
}
