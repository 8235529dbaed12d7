//! Error types for the R5 element model

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Build and validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller handed a value that cannot be represented, e.g. an unknown code
    #[error("Invalid argument for '{element}': {message}")]
    InvalidArgument { element: String, message: String },

    /// A required single slot is unset or a required list is empty
    #[error("Missing required element: '{0}'")]
    MissingRequiredField(String),

    /// A choice slot holds a value whose type is not one of its alternatives
    #[error("Invalid type '{found}' for choice element '{element}'; must be one of: {}", .allowed.join(", "))]
    InvalidChoice {
        element: String,
        found: String,
        allowed: Vec<String>,
    },

    /// A reference points at a resource type outside the element's whitelist
    #[error("Invalid reference target for '{element}': {message}")]
    InvalidReferenceTarget { element: String, message: String },

    /// ele-1: the element carries neither a value nor any children
    #[error("ele-1: {0} must have a value or children")]
    VacuousElement(String),

    /// A primitive value is lexically malformed
    #[error("Invalid value for '{element}': {message}")]
    InvalidValue { element: String, message: String },

    /// A named structural invariant such as ext-1 or dom-2 does not hold
    #[error("{key}: {message}")]
    ConstraintViolation { key: &'static str, message: String },
}

impl Error {
    /// Element (or type, for vacuous elements) the error is about
    pub fn element(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument { element, .. }
            | Error::InvalidChoice { element, .. }
            | Error::InvalidReferenceTarget { element, .. }
            | Error::InvalidValue { element, .. } => Some(element),
            Error::MissingRequiredField(element) | Error::VacuousElement(element) => Some(element),
            Error::ConstraintViolation { .. } => None,
        }
    }

    pub(crate) fn invalid_argument(element: &str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            element: element.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_reference(element: &str, message: impl Into<String>) -> Self {
        Error::InvalidReferenceTarget {
            element: element.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::MissingRequiredField("occurrence".to_string());
        assert_eq!(err.to_string(), "Missing required element: 'occurrence'");

        let err = Error::InvalidChoice {
            element: "occurrence".to_string(),
            found: "boolean".to_string(),
            allowed: vec!["dateTime".to_string(), "string".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid type 'boolean' for choice element 'occurrence'; must be one of: dateTime, string"
        );
    }

    #[test]
    fn test_element_accessor() {
        assert_eq!(
            Error::VacuousElement("Coding".to_string()).element(),
            Some("Coding")
        );
        let err = Error::ConstraintViolation {
            key: "ext-1",
            message: "either extensions or value[x], not both".to_string(),
        };
        assert_eq!(err.element(), None);
    }
}
