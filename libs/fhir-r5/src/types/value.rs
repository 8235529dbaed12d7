use crate::__fhir_union;
use crate::types::{
    Annotation, Attachment, Base64Binary, Canonical, Code, CodeableConcept, CodeableReference,
    Coding, Date, DateTime, FhirBoolean, FhirDecimal, FhirString, Id, Identifier, Instant, Integer,
    Integer64, Markdown, Period, Quantity, Reference, Timing, Uri,
};

__fhir_union! {
    /// Any value an extension may carry
    DataValue ("DataType") {
        Base64Binary(Base64Binary),
        Boolean(FhirBoolean),
        Canonical(Canonical),
        Code(Code),
        Date(Date),
        DateTime(DateTime),
        Decimal(FhirDecimal),
        Id(Id),
        Instant(Instant),
        Integer(Integer),
        Integer64(Integer64),
        Markdown(Markdown),
        String(FhirString),
        Uri(Uri),
        Annotation(Annotation),
        Attachment(Attachment),
        CodeableConcept(CodeableConcept),
        CodeableReference(CodeableReference),
        Coding(Coding),
        Identifier(Identifier),
        Period(Period),
        Quantity(Quantity),
        Reference(Reference),
        Timing(Timing),
    }
}
