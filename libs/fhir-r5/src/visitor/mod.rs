//! Visitor dispatch
//!
//! Depth-first traversal of an element tree. For every node:
//!
//! 1. `pre_visit` - returning `false` skips the node and its subtree entirely
//! 2. `visit_start`
//! 3. `visit` - returning `false` skips the children only
//! 4. children, in declaration order (inherited elements first)
//! 5. `visit_end`
//! 6. `post_visit`
//!
//! Non-empty list slots are bracketed by `visit_list_start`/`visit_list_end`
//! and pass the list index of each entry. Errors returned by a callback abort
//! the walk and propagate unchanged.

mod path;
mod references;
mod validating;

pub use path::{PathCollector, PathStack};
pub use references::ReferenceCollector;
pub use validating::{
    check_tree, validate_tree, validate_tree_with, ValidatingVisitor, ValidationIssue,
};

use crate::element::{ElementNode, Slot};

/// Callbacks invoked while walking an element tree
///
/// Every method has a no-op default, so implementors override only what they
/// need.
#[allow(unused_variables)]
pub trait Visitor {
    type Error;

    fn pre_visit(&mut self, element: &dyn ElementNode) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_start(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_end(
        &mut self,
        name: &str,
        index: Option<usize>,
        element: &dyn ElementNode,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn post_visit(&mut self, element: &dyn ElementNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_list_start(&mut self, name: &str, len: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_list_end(&mut self, name: &str, len: usize) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Elements that drive the visitor protocol over themselves
pub trait Visitable: ElementNode + Sized {
    fn accept<V: Visitor + ?Sized>(
        &self,
        name: &str,
        index: Option<usize>,
        visitor: &mut V,
    ) -> Result<(), V::Error>;

    /// Walk this element as a tree root, named by its type
    fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        self.accept(self.type_name(), None, visitor)
    }
}

/// Run the six-step protocol for one node; `children` visits its slots
pub fn dispatch<E, V, F>(
    element: &E,
    name: &str,
    index: Option<usize>,
    visitor: &mut V,
    children: F,
) -> Result<(), V::Error>
where
    E: ElementNode,
    V: Visitor + ?Sized,
    F: FnOnce(&mut V) -> Result<(), V::Error>,
{
    if !visitor.pre_visit(element)? {
        return Ok(());
    }
    visitor.visit_start(name, index, element)?;
    if visitor.visit(name, index, element)? {
        children(visitor)?;
    }
    visitor.visit_end(name, index, element)?;
    visitor.post_visit(element)
}

/// Visit every value of a slot under the element name `name`
pub fn accept_slot<S, V>(slot: &S, name: &str, visitor: &mut V) -> Result<(), V::Error>
where
    S: Slot,
    V: Visitor + ?Sized,
{
    let values = slot.values();
    if !slot.is_repeating() {
        for value in values {
            value.accept(name, None, visitor)?;
        }
        return Ok(());
    }
    if values.is_empty() {
        return Ok(());
    }

    visitor.visit_list_start(name, values.len())?;
    for (index, value) in values.iter().enumerate() {
        value.accept(name, Some(index), visitor)?;
    }
    visitor.visit_list_end(name, values.len())
}
