//! Deep validation of a whole tree
//!
//! Each node runs its own `validate_with`, which covers the node and the
//! lexical form of its primitive children. [`check_tree`] stops at the first
//! violation and backs every validating `build()`. [`ValidatingVisitor`]
//! keeps going, so elements assembled with `validating(false)` can be checked
//! in one pass and every problem reported with its location.

use std::convert::Infallible;
use std::fmt;

use tracing::debug;

use super::{PathStack, Visitable, Visitor};
use crate::config::ModelConfig;
use crate::element::ElementNode;
use crate::error::{Error, Result};
use crate::model_support::is_primitive_type;
use crate::validation::require_value_or_children;

// Below the root, a primitive's lexical form is checked by its parent.
fn check_node(element: &dyn ElementNode, is_root: bool, config: &ModelConfig) -> Result<()> {
    if is_root || !is_primitive_type(element.type_name()) {
        element.validate_with(config)
    } else {
        require_value_or_children(element)
    }
}

/// One violation found while walking a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path of the node whose validation failed
    pub location: String,
    pub error: Error,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

#[derive(Debug, Default)]
pub struct ValidatingVisitor {
    config: ModelConfig,
    stack: PathStack,
    issues: Vec<ValidationIssue>,
}

impl ValidatingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ModelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl Visitor for ValidatingVisitor {
    type Error = Infallible;

    fn visit_start(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> std::result::Result<(), Self::Error> {
        let is_root = self.stack.is_empty();
        self.stack.push(name, index);

        if let Err(error) = check_node(element, is_root, &self.config) {
            let location = self.stack.path();
            debug!(%location, %error, "validation issue");
            self.issues.push(ValidationIssue { location, error });
        }
        Ok(())
    }

    fn visit_end(
        &mut self,
        _name: &str,
        _index: Option<usize>,
        _element: &dyn ElementNode,
    ) -> std::result::Result<(), Self::Error> {
        self.stack.pop();
        Ok(())
    }
}

/// Validate `root` and everything below it, collecting every issue
pub fn validate_tree<T: Visitable>(root: &T) -> Vec<ValidationIssue> {
    validate_tree_with(root, ModelConfig::DEFAULT)
}

pub fn validate_tree_with<T: Visitable>(root: &T, config: ModelConfig) -> Vec<ValidationIssue> {
    let mut visitor = ValidatingVisitor::with_config(config);
    match root.walk(&mut visitor) {
        Ok(()) => visitor.into_issues(),
        Err(never) => match never {},
    }
}

/// Fails with the first violation in pre-order
struct FirstViolation<'a> {
    config: &'a ModelConfig,
    stack: PathStack,
}

impl Visitor for FirstViolation<'_> {
    type Error = Error;

    fn visit_start(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> Result<()> {
        let is_root = self.stack.is_empty();
        self.stack.push(name, index);
        check_node(element, is_root, self.config).map_err(|error| {
            let location = self.stack.path();
            debug!(%location, %error, "validation failed");
            error
        })
    }

    fn visit_end(
        &mut self,
        _name: &str,
        _index: Option<usize>,
        _element: &dyn ElementNode,
    ) -> Result<()> {
        self.stack.pop();
        Ok(())
    }
}

/// Validate `root` and everything below it, stopping at the first violation
pub fn check_tree<T: Visitable>(root: &T, config: &ModelConfig) -> Result<()> {
    root.walk(&mut FirstViolation {
        config,
        stack: PathStack::new(),
    })
}
