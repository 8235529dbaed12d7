//! Element model
//!
//! Every structured value (primitive, datatype, backbone element or resource)
//! implements [`ElementNode`], the object-safe view used by validation and
//! visitors. Concrete types also implement [`FhirType`], which carries the
//! static metadata a generator emits for each type.

use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

use crate::config::ModelConfig;
use crate::error::Result;
use crate::model_support::ElementInfo;
use crate::resource::AnyResource;
use crate::types::{Code, Extension, Meta, Narrative, Reference, Uri};
use crate::visitor::{self, Visitable, Visitor};

/// Object-safe contract shared by every element
pub trait ElementNode: Any + fmt::Debug {
    /// FHIR type name of the runtime value (`dateTime`, `CodeableConcept`, ...)
    fn type_name(&self) -> &'static str;

    /// True iff any inherited or declared field is populated
    fn has_children(&self) -> bool;

    /// True for primitives that carry a value
    fn has_value(&self) -> bool {
        false
    }

    /// Lexical form of a primitive value
    fn primitive_value(&self) -> Option<String> {
        None
    }

    /// Validate this element and its direct children with the default
    /// configuration
    fn validate(&self) -> Result<()> {
        self.validate_with(&ModelConfig::DEFAULT)
    }

    /// Validate this element and its direct children
    ///
    /// Grandchildren are left to their own `validate_with`; a validating
    /// `build()` walks the whole tree.
    fn validate_with(&self, config: &ModelConfig) -> Result<()>;

    /// Lexical check applied when this value is held by a parent slot
    fn check_value(&self, _element: &str, _config: &ModelConfig) -> Result<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any;

    fn as_reference(&self) -> Option<&Reference> {
        self.as_any().downcast_ref()
    }

    fn is_resource(&self) -> bool {
        false
    }
}

/// Static per-type metadata
pub trait FhirType {
    const TYPE_NAME: &'static str;

    /// Alternatives of a choice type, empty otherwise
    const CHOICE_TYPES: &'static [&'static str] = &[];

    /// Declared elements in traversal order, inherited ones first
    const ELEMENTS: &'static [ElementInfo] = &[];
}

pub trait HasId {
    fn id(&self) -> Option<&str>;
}

pub trait HasExtensions {
    fn extension(&self) -> &[Extension];

    /// Extensions with the given url, in declaration order
    fn extensions_by_url<'a>(&'a self, url: &'a str) -> Vec<&'a Extension> {
        self.extension()
            .iter()
            .filter(|extension| extension.url().is_some_and(|u| u == url))
            .collect()
    }
}

/// Elements whose modifier extensions change their meaning
pub trait HasModifierExtensions: HasExtensions {
    fn modifier_extension(&self) -> &[Extension];
}

/// Fields shared by every domain resource
pub trait Resource: HasId + HasModifierExtensions + ElementNode {
    fn meta(&self) -> Option<&Meta>;
    fn implicit_rules(&self) -> Option<&Uri>;
    fn language(&self) -> Option<&Code>;
    fn text(&self) -> Option<&Narrative>;
    fn contained(&self) -> &[AnyResource];

    fn resource_type(&self) -> &'static str {
        self.type_name()
    }
}

/// Storage of one field: a single optional value or an ordered list
pub trait Slot {
    type Item: Visitable;

    fn values(&self) -> &[Self::Item];

    fn is_repeating(&self) -> bool;

    fn is_populated(&self) -> bool {
        !self.values().is_empty()
    }
}

impl<T: Visitable> Slot for Option<T> {
    type Item = T;

    fn values(&self) -> &[T] {
        match self {
            Some(value) => std::slice::from_ref(value),
            None => &[],
        }
    }

    fn is_repeating(&self) -> bool {
        false
    }
}

impl<T: Visitable> Slot for Vec<T> {
    type Item = T;

    fn values(&self) -> &[T] {
        self
    }

    fn is_repeating(&self) -> bool {
        true
    }
}

/// Memoized structural hash
///
/// Never takes part in equality; elements are immutable so the cached value
/// stays correct for the lifetime of the instance and its clones.
#[derive(Clone, Default)]
pub struct HashCache(OnceLock<u64>);

impl HashCache {
    pub fn get_or_compute(&self, compute: impl FnOnce() -> u64) -> u64 {
        *self.0.get_or_init(compute)
    }

    pub fn is_computed(&self) -> bool {
        self.0.get().is_some()
    }
}

impl PartialEq for HashCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HashCache {}

impl fmt::Debug for HashCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get() {
            Some(hash) => write!(f, "HashCache({hash:#x})"),
            None => f.write_str("HashCache(..)"),
        }
    }
}

// Plain strings back `id` and `Extension.url`; their owner checks them.
impl ElementNode for String {
    fn type_name(&self) -> &'static str {
        <String as FhirType>::TYPE_NAME
    }

    fn has_children(&self) -> bool {
        false
    }

    fn has_value(&self) -> bool {
        true
    }

    fn primitive_value(&self) -> Option<String> {
        Some(self.clone())
    }

    fn validate_with(&self, _config: &ModelConfig) -> Result<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FhirType for String {
    const TYPE_NAME: &'static str = "System.String";
}

impl Visitable for String {
    fn accept<V: Visitor + ?Sized>(
        &self,
        name: &str,
        index: Option<usize>,
        visitor: &mut V,
    ) -> std::result::Result<(), V::Error> {
        visitor::dispatch(self, name, index, visitor, |_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_slot() {
        let empty: Option<String> = None;
        assert!(!empty.is_populated());
        assert!(empty.values().is_empty());
        assert!(!empty.is_repeating());

        let set = Some("a".to_string());
        assert!(set.is_populated());
        assert_eq!(set.values(), ["a".to_string()]);
    }

    #[test]
    fn test_list_slot() {
        let list = vec!["a".to_string(), "b".to_string()];
        assert!(list.is_repeating());
        assert_eq!(list.values().len(), 2);
        assert!(!Vec::<String>::new().is_populated());
    }

    #[test]
    fn test_hash_cache_computes_once() {
        let cache = HashCache::default();
        assert!(!cache.is_computed());
        assert_eq!(cache.get_or_compute(|| 7), 7);
        assert_eq!(cache.get_or_compute(|| 9), 7);
        assert!(cache.is_computed());
        assert_eq!(cache, HashCache::default());
    }
}
