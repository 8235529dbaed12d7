//! FHIR datatypes

mod code;
mod complex;
mod primitive;
mod value;

pub use code::{
    DocumentReferenceStatus, IdentifierUse, ImmunizationStatus, NarrativeStatus,
    NutritionIntakeStatus, QuantityComparator, ReferredDocumentStatus,
};
pub use complex::{
    Annotation, AnnotationAuthor, AnnotationBuilder, Attachment, AttachmentBuilder,
    CodeableConcept, CodeableConceptBuilder, CodeableReference, CodeableReferenceBuilder, Coding,
    CodingBuilder, Extension, ExtensionBuilder, Identifier, IdentifierBuilder, Meta, MetaBuilder,
    Narrative, NarrativeBuilder, Period, PeriodBuilder, Quantity, QuantityBuilder, Reference,
    ReferenceBuilder, Timing, TimingBuilder,
};
pub use primitive::{
    Base64Binary, Base64BinaryBuilder, Canonical, CanonicalBuilder, Code, CodeBuilder, Date,
    DateBuilder, DateTime, DateTimeBuilder, FhirBoolean, FhirBooleanBuilder, FhirDecimal,
    FhirDecimalBuilder, FhirString, FhirStringBuilder, Id, IdBuilder, Instant, InstantBuilder,
    Integer, Integer64, Integer64Builder, IntegerBuilder, Markdown, MarkdownBuilder, Uri,
    UriBuilder, Xhtml, XhtmlBuilder,
};
pub use value::DataValue;
