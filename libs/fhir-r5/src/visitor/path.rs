//! Location tracking during a walk

use std::convert::Infallible;
use std::fmt;

use super::Visitor;
use crate::element::ElementNode;

/// FHIRPath-like location of the node being visited
///
/// Segments are element names, with the list index appended for repeating
/// elements: `Immunization.performer[0].actor`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, index: Option<usize>) {
        match index {
            Some(index) => self.segments.push(format!("{name}[{index}]")),
            None => self.segments.push(name.to_string()),
        }
    }

    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn path(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Records the path and type of every visited node, in visit order
#[derive(Debug, Default)]
pub struct PathCollector {
    stack: PathStack,
    entries: Vec<(String, &'static str)>,
}

impl PathCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(path, type name)` pairs
    pub fn entries(&self) -> &[(String, &'static str)] {
        &self.entries
    }

    pub fn paths(&self) -> Vec<&str> {
        self.entries.iter().map(|(path, _)| path.as_str()).collect()
    }

    pub fn into_entries(self) -> Vec<(String, &'static str)> {
        self.entries
    }
}

impl Visitor for PathCollector {
    type Error = Infallible;

    fn visit_start(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> Result<(), Self::Error> {
        self.stack.push(name, index);
        self.entries.push((self.stack.path(), element.type_name()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CodeableConcept, Coding};
    use crate::visitor::Visitable;

    #[test]
    fn test_path_stack() {
        let mut stack = PathStack::new();
        assert!(stack.is_empty());
        stack.push("Immunization", None);
        stack.push("performer", Some(0));
        stack.push("actor", None);
        assert_eq!(stack.to_string(), "Immunization.performer[0].actor");
        assert_eq!(stack.pop().as_deref(), Some("actor"));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_collects_paths_in_visit_order() {
        let concept = CodeableConcept::builder()
            .coding([Coding::of("http://loinc.org", "8867-4")])
            .build()
            .unwrap();
        let mut collector = PathCollector::new();
        concept.walk(&mut collector).unwrap();

        assert_eq!(
            collector.paths(),
            vec![
                "CodeableConcept",
                "CodeableConcept.coding[0]",
                "CodeableConcept.coding[0].system",
                "CodeableConcept.coding[0].code",
            ]
        );
        assert_eq!(collector.entries()[1].1, "Coding");
    }
}
