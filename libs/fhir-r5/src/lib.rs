//! Immutable FHIR R5 element model
//!
//! Every datatype, backbone element and resource is an immutable value built
//! through a fluent builder. `build()` validates the new element and every
//! element below it (required elements, choice alternatives, reference
//! targets, lexical forms and structural invariants) and fails with the first
//! violation found. The optional checks follow the builder's [`ModelConfig`].
//!
//! ```text
//! Builder --build()--> check_tree(config) --Ok--> immutable element
//!                                         \--Err-> Error
//!
//! element.walk(&mut visitor)   depth-first, declaration order
//! ```
//!
//! Element trees are traversed with [`Visitor`]; [`validate_tree`] uses that
//! to report every violation in a tree together with its location.
//!
//! ```
//! use ferrum_r5::resource::Immunization;
//! use ferrum_r5::types::{CodeableConcept, DateTime, ImmunizationStatus, Reference};
//!
//! let immunization = Immunization::builder()
//!     .status(ImmunizationStatus::Completed)
//!     .vaccine_code(CodeableConcept::of("http://hl7.org/fhir/sid/cvx", "140"))
//!     .patient(Reference::of("Patient/example"))
//!     .occurrence(DateTime::of("2021-01-10"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(immunization.status(), Some(&ImmunizationStatus::Completed));
//! ```

mod macros;

pub mod builder;
pub mod config;
pub mod element;
pub mod error;
pub mod model_support;
pub mod resource;
pub mod types;
pub mod validation;
pub mod visitor;

// Re-export main types
pub use builder::IntoSlot;
pub use config::ModelConfig;
pub use element::{ElementNode, FhirType, HasExtensions, HasId, HasModifierExtensions, Resource};
pub use error::{Error, Result};
pub use model_support::ElementInfo;
pub use resource::AnyResource;
pub use visitor::{validate_tree, Visitable, Visitor};
