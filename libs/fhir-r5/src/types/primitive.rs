//! Primitive datatypes
//!
//! A primitive is an element in its own right: it may carry an `id` and
//! extensions next to (or instead of) its value.

use chrono::{NaiveDate, SecondsFormat, TimeZone};
use rust_decimal::Decimal;

use crate::builder::IntoSlot;
use crate::fhir_primitive;
use crate::validation::{
    accept_any, check_base64, check_code, check_date, check_date_time, check_id, check_instant,
    check_string, check_uri, check_xhtml,
};

fhir_primitive! {
    /// `true` | `false`
    FhirBoolean => FhirBooleanBuilder ("boolean", bool) check accept_any;
}

fhir_primitive! {
    /// 32 bit signed integer
    Integer => IntegerBuilder ("integer", i32) check accept_any;
}

fhir_primitive! {
    /// 64 bit signed integer
    Integer64 => Integer64Builder ("integer64", i64) check accept_any;
}

fhir_primitive! {
    /// Rational number with implicit precision
    FhirDecimal => FhirDecimalBuilder ("decimal", Decimal) check accept_any;
}

fhir_primitive! {
    /// Sequence of Unicode characters
    FhirString => FhirStringBuilder ("string", String) check check_string;
}

fhir_primitive! {
    Uri => UriBuilder ("uri", String) check check_uri;
}

fhir_primitive! {
    /// URI that refers to a resource by its canonical url, optionally `|version`
    Canonical => CanonicalBuilder ("canonical", String) check check_uri;
}

fhir_primitive! {
    Code => CodeBuilder ("code", String) check check_code;
}

fhir_primitive! {
    /// Logical id of a resource
    Id => IdBuilder ("id", String) check check_id;
}

fhir_primitive! {
    /// String that may contain markdown
    Markdown => MarkdownBuilder ("markdown", String) check check_string;
}

fhir_primitive! {
    Base64Binary => Base64BinaryBuilder ("base64Binary", String) check check_base64;
}

fhir_primitive! {
    /// Date or partial date (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`)
    Date => DateBuilder ("date", String) check check_date;
}

fhir_primitive! {
    /// Date, date-time or partial date; a time requires a timezone
    DateTime => DateTimeBuilder ("dateTime", String) check check_date_time;
}

fhir_primitive! {
    /// Instant in time, known at least to the second
    Instant => InstantBuilder ("instant", String) check check_instant;
}

fhir_primitive! {
    /// Limited xhtml content of a narrative
    Xhtml => XhtmlBuilder ("xhtml", String) check check_xhtml;
}

macro_rules! native_slot {
    ($target:ident: $($native:ty),+) => {
        $(
            impl IntoSlot<$target> for $native {
                fn into_slot(self) -> Option<$target> {
                    Some($target::of(self))
                }
            }
        )+
    };
}

native_slot!(FhirBoolean: bool);
native_slot!(Integer: i32);
native_slot!(Integer64: i64);
native_slot!(FhirDecimal: Decimal);
native_slot!(FhirString: &str, String);
native_slot!(Uri: &str, String);
native_slot!(Canonical: &str, String);
native_slot!(Code: &str, String);
native_slot!(Id: &str, String);
native_slot!(Markdown: &str, String);
native_slot!(Date: &str, String);
native_slot!(DateTime: &str, String);
native_slot!(Instant: &str, String);
native_slot!(Base64Binary: &str, String);
native_slot!(Xhtml: &str, String);

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date::of(date.format("%Y-%m-%d").to_string())
    }
}

impl IntoSlot<Date> for NaiveDate {
    fn into_slot(self) -> Option<Date> {
        Some(Date::from(self))
    }
}

impl Date {
    pub fn of_date(date: NaiveDate) -> Self {
        Date::from(date)
    }

    /// The value as a calendar date, when it is a full date
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.value()?, "%Y-%m-%d").ok()
    }
}

impl DateTime {
    pub fn of_datetime<Tz: TimeZone>(value: chrono::DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        DateTime::of(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    /// The value as a point in time, when it carries a time and zone
    pub fn to_fixed_offset(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(self.value()?).ok()
    }
}

impl Instant {
    pub fn of_datetime<Tz: TimeZone>(value: chrono::DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Instant::of(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn to_fixed_offset(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(self.value()?).ok()
    }
}

impl<Tz: TimeZone> IntoSlot<DateTime> for chrono::DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn into_slot(self) -> Option<DateTime> {
        Some(DateTime::of_datetime(self))
    }
}

impl<Tz: TimeZone> IntoSlot<Instant> for chrono::DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn into_slot(self) -> Option<Instant> {
        Some(Instant::of_datetime(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementNode, HasExtensions, HasId};
    use crate::error::Error;
    use crate::types::Extension;
    use chrono::Utc;

    #[test]
    fn test_of_sets_value_only() {
        let status = Code::of("final");
        assert_eq!(status.value().map(String::as_str), Some("final"));
        assert!(status.id().is_none());
        assert!(status.extension().is_empty());
        assert!(status.has_value());
        assert!(!status.has_children());
        assert_eq!(status.primitive_value().as_deref(), Some("final"));
    }

    #[test]
    fn test_lexical_validation_on_build() {
        assert!(Id::builder().value("abc-1").build().is_ok());
        let err = Id::builder().value("not an id").build().unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref element, .. } if element == "id"));

        let unchecked = Id::builder()
            .value("not an id")
            .validating(false)
            .build()
            .unwrap();
        assert_eq!(unchecked.value().map(String::as_str), Some("not an id"));
    }

    #[test]
    fn test_value_or_children() {
        assert!(matches!(
            FhirString::builder().build(),
            Err(Error::VacuousElement(_))
        ));

        let absent = Extension::builder()
            .url("http://hl7.org/fhir/StructureDefinition/data-absent-reason")
            .value(Code::of("unknown"))
            .build()
            .unwrap();
        let only_extension = DateTime::builder().extension([absent]).build().unwrap();
        assert!(only_extension.value().is_none());
        assert!(only_extension.has_children());
    }

    #[test]
    fn test_clear_value() {
        let built = FhirBoolean::of(true)
            .to_builder()
            .id("b1")
            .clear_value()
            .build()
            .unwrap();
        assert_eq!(built.value(), None);
        assert_eq!(built.id(), Some("b1"));
    }

    #[test]
    fn test_chrono_conversions() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let fhir_date = Date::of_date(date);
        assert_eq!(fhir_date.value().map(String::as_str), Some("2024-03-09"));
        assert_eq!(fhir_date.to_naive_date(), Some(date));
        assert_eq!(Date::of("2024").to_naive_date(), None);

        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap();
        let date_time = DateTime::of_datetime(at);
        assert_eq!(
            date_time.value().map(String::as_str),
            Some("2024-03-09T14:30:00Z")
        );
        assert!(date_time.validate().is_ok());
        assert_eq!(date_time.to_fixed_offset().map(|t| t.timestamp()), Some(at.timestamp()));
        assert!(Instant::of_datetime(at).validate().is_ok());
    }

    #[test]
    fn test_decimal_equality_ignores_scale() {
        let a = FhirDecimal::of(Decimal::new(150, 2));
        let b = FhirDecimal::of(Decimal::new(15, 1));
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());
    }
}
