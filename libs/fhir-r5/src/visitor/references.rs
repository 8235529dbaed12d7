//! Collection of the references held anywhere in a tree

use std::convert::Infallible;

use super::{PathStack, Visitor};
use crate::element::ElementNode;
use crate::types::Reference;

/// Every `Reference` in a tree, with the path it was found at
///
/// References inside contained resources are collected too.
#[derive(Debug, Default)]
pub struct ReferenceCollector {
    stack: PathStack,
    found: Vec<(String, Reference)>,
}

impl ReferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn references(&self) -> &[(String, Reference)] {
        &self.found
    }

    /// Literal reference strings, skipping logical references
    pub fn literals(&self) -> Vec<&str> {
        self.found
            .iter()
            .filter_map(|(_, reference)| reference.reference().and_then(|r| r.value()))
            .map(String::as_str)
            .collect()
    }

    pub fn into_references(self) -> Vec<(String, Reference)> {
        self.found
    }
}

impl Visitor for ReferenceCollector {
    type Error = Infallible;

    fn visit_start(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> Result<(), Self::Error> {
        self.stack.push(name, index);
        if let Some(reference) = element.as_reference() {
            self.found.push((self.stack.path(), reference.clone()));
        }
        Ok(())
    }

    fn visit_end(
        &mut self,
        _name: &str,
        _index: Option<usize>,
        _element: &dyn ElementNode,
    ) -> Result<(), Self::Error> {
        self.stack.pop();
        Ok(())
    }
}
