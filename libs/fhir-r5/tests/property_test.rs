//! Property-based tests using QuickCheck

use std::collections::HashSet;

use quickcheck::{QuickCheck, TestResult};

use ferrum_r5::types::{Coding, Extension, FhirBoolean, FhirString, Identifier};

/// Property: independently built elements with equal content are equal and hash alike
#[test]
fn prop_equal_content_equal_hash() {
    fn prop(system: String, value: String) -> TestResult {
        if system.chars().any(char::is_whitespace) || value.trim().is_empty() {
            return TestResult::discard();
        }
        let build = || {
            Identifier::builder()
                .system(system.as_str())
                .value(value.as_str())
                .build()
        };
        match (build(), build()) {
            (Ok(a), Ok(b)) => TestResult::from_bool(a == b && a.hash_code() == b.hash_code()),
            _ => TestResult::discard(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, String) -> TestResult);
}

/// Property: toBuilder().build() reproduces the element
#[test]
fn prop_to_builder_round_trip() {
    fn prop(code: String, display: String, selected: bool) -> TestResult {
        let built = Coding::builder()
            .code(code.as_str())
            .display(display.as_str())
            .user_selected(selected)
            .build();
        match built {
            Ok(coding) => TestResult::from_bool(coding.to_builder().build() == Ok(coding)),
            Err(_) => TestResult::discard(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, String, bool) -> TestResult);
}

/// Property: changing one field breaks equality
#[test]
fn prop_single_field_change_breaks_equality() {
    fn prop(a: String, b: String) -> TestResult {
        if a == b {
            return TestResult::discard();
        }
        match (
            FhirString::builder().value(a).build(),
            FhirString::builder().value(b).build(),
        ) {
            (Ok(x), Ok(y)) => TestResult::from_bool(x != y),
            _ => TestResult::discard(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(String, String) -> TestResult);
}

#[test]
fn extension_change_breaks_equality() {
    let plain = Coding::of("http://loinc.org", "29463-7");
    let flag = Extension::of("http://example.org/flag", FhirBoolean::of(true)).unwrap();
    let extended = plain.to_builder().extension([flag]).build().unwrap();

    assert_ne!(plain, extended);
    assert_ne!(plain.hash_code(), extended.hash_code());

    let set: HashSet<Coding> = [plain.clone(), plain.clone(), extended].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn hash_is_memoized_and_stable() {
    let coding = Coding::of("http://loinc.org", "29463-7");
    let first = coding.hash_code();
    assert_eq!(coding.hash_code(), first);
    assert_eq!(coding.clone().hash_code(), first);
}
