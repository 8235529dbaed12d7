//! Declarative generation of element types
//!
//! Every datatype, backbone element and resource is declared once with
//! [`fhir_element!`]; the macro emits the immutable struct, its flat builder,
//! getters, structural equality, the memoized hash, validation, visitor
//! traversal and the static [`ElementInfo`](crate::model_support::ElementInfo)
//! table. Fields are written as
//!
//! ```text
//! "fhirName" rust_field [set_rust_field]: kind Type => ["Target", ...]
//! ```
//!
//! where `kind` is one of `opt`, `req`, `list`, `req_list`, `choice` or
//! `req_choice`. List fields name their replacing setter in brackets and
//! reference fields may list their allowed target resource types.

/// Declare an element type with its builder
///
/// The leading keyword selects the inherited field group:
///
/// * `element` - `id`, `extension`
/// * `backbone` - `id`, `extension`, `modifierExtension`
/// * `resource` - `id`, `meta`, `implicitRules`, `language`, `text`,
///   `contained`, `extension`, `modifierExtension`
///
/// An optional trailing `invariants [path, ...]` adds checks run after the
/// field checks; each is a `fn(&Self, &ModelConfig) -> Result<()>`.
///
/// Resource ids are checked as `id` values, element ids as strings.
#[macro_export]
macro_rules! fhir_element {
    (
        $(#[$meta:meta])*
        element $name:ident => $builder:ident ($type_name:literal) {
            $($fields:tt)*
        }
        $(invariants [$($check:path),* $(,)?])?
    ) => {
        $crate::__fhir_type! {
            $(#[$meta])*
            $name => $builder ($type_name, false, $crate::validation::check_string)
            base {
                "id" id: opt String,
                "extension" extension [set_extension]: list $crate::types::Extension,
            }
            own { $($fields)* }
            checks [$($($check),*)?]
        }
        $crate::__fhir_has_extensions!($name);
    };

    (
        $(#[$meta:meta])*
        backbone $name:ident => $builder:ident ($type_name:literal) {
            $($fields:tt)*
        }
        $(invariants [$($check:path),* $(,)?])?
    ) => {
        $crate::__fhir_type! {
            $(#[$meta])*
            $name => $builder ($type_name, false, $crate::validation::check_string)
            base {
                "id" id: opt String,
                "extension" extension [set_extension]: list $crate::types::Extension,
                "modifierExtension" modifier_extension [set_modifier_extension]: list $crate::types::Extension,
            }
            own { $($fields)* }
            checks [$($($check),*)?]
        }
        $crate::__fhir_has_extensions!($name);
        $crate::__fhir_has_modifier_extensions!($name);
    };

    (
        $(#[$meta:meta])*
        resource $name:ident => $builder:ident ($type_name:literal) {
            $($fields:tt)*
        }
        $(invariants [$($check:path),* $(,)?])?
    ) => {
        $crate::__fhir_type! {
            $(#[$meta])*
            $name => $builder ($type_name, true, $crate::validation::check_id)
            base {
                "id" id: opt String,
                "meta" meta: opt $crate::types::Meta,
                "implicitRules" implicit_rules: opt $crate::types::Uri,
                "language" language: opt $crate::types::Code,
                "text" text: opt $crate::types::Narrative,
                "contained" contained [set_contained]: list $crate::resource::AnyResource,
                "extension" extension [set_extension]: list $crate::types::Extension,
                "modifierExtension" modifier_extension [set_modifier_extension]: list $crate::types::Extension,
            }
            own { $($fields)* }
            checks [$crate::resource::check_contained $(, $($check),*)?]
        }
        $crate::__fhir_has_extensions!($name);
        $crate::__fhir_has_modifier_extensions!($name);

        impl $crate::element::Resource for $name {
            fn meta(&self) -> Option<&$crate::types::Meta> {
                self.meta.as_ref()
            }

            fn implicit_rules(&self) -> Option<&$crate::types::Uri> {
                self.implicit_rules.as_ref()
            }

            fn language(&self) -> Option<&$crate::types::Code> {
                self.language.as_ref()
            }

            fn text(&self) -> Option<&$crate::types::Narrative> {
                self.text.as_ref()
            }

            fn contained(&self) -> &[$crate::resource::AnyResource] {
                &self.contained
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_type {
    (
        $(#[$meta:meta])*
        $name:ident => $builder:ident ($type_name:literal, $is_resource:literal, $id_check:path)
        base {
            $( $bname:literal $bfield:ident $([$bsetter:ident])? : $bkind:ident $bty:ty ),* $(,)?
        }
        own {
            $(
                $(#[$ometa:meta])*
                $oname:literal $ofield:ident $([$osetter:ident])? : $okind:ident $oty:ty $(=> $otargets:tt)?
            ),* $(,)?
        }
        checks [$($check:path),*]
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            $( $bfield: $crate::__slot_ty!($bkind $bty), )*
            $( $(#[$ometa])* $ofield: $crate::__slot_ty!($okind $oty), )*
            hash_cache: $crate::element::HashCache,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::new()
            }

            /// Builder seeded with this element's state
            pub fn to_builder(&self) -> $builder {
                $builder::from(self)
            }

            $( $crate::__slot_getter! { $(#[$ometa])* $okind $ofield $oty } )*

            /// Structural hash, computed on first use
            pub fn hash_code(&self) -> u64 {
                self.hash_cache.get_or_compute(|| {
                    let mut hasher = ::std::collections::hash_map::DefaultHasher::new();
                    ::std::hash::Hash::hash($type_name, &mut hasher);
                    $( ::std::hash::Hash::hash(&self.$bfield, &mut hasher); )*
                    $( ::std::hash::Hash::hash(&self.$ofield, &mut hasher); )*
                    ::std::hash::Hasher::finish(&hasher)
                })
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_code());
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut out = f.debug_struct($type_name);
                $(
                    if $crate::element::Slot::is_populated(&self.$bfield) {
                        out.field($bname, &self.$bfield);
                    }
                )*
                $(
                    if $crate::element::Slot::is_populated(&self.$ofield) {
                        out.field($oname, &self.$ofield);
                    }
                )*
                out.finish()
            }
        }

        impl $crate::element::HasId for $name {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }

        impl $crate::element::FhirType for $name {
            const TYPE_NAME: &'static str = $type_name;
            const ELEMENTS: &'static [$crate::model_support::ElementInfo] = &[
                $( $crate::__element_info!($bname $bkind $bty), )*
                $( $crate::__element_info!($oname $okind $oty $(, $otargets)?), )*
            ];
        }

        impl $crate::element::ElementNode for $name {
            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn has_children(&self) -> bool {
                false
                    $( || $crate::element::Slot::is_populated(&self.$bfield) )*
                    $( || $crate::element::Slot::is_populated(&self.$ofield) )*
            }

            fn validate_with(&self, config: &$crate::config::ModelConfig) -> $crate::Result<()> {
                $crate::validation::check_string_slot(&self.id, "id", $id_check, config)?;
                $( $crate::validation::check_values(&self.$bfield, $bname, config)?; )*
                $(
                    $crate::__slot_validate!($okind, self.$ofield, $oname);
                    $crate::validation::check_choice_type(
                        &self.$ofield,
                        $oname,
                        <$oty as $crate::element::FhirType>::CHOICE_TYPES,
                    )?;
                    $crate::validation::check_values(&self.$ofield, $oname, config)?;
                    $(
                        $crate::validation::check_reference_type(
                            &self.$ofield,
                            $oname,
                            &$otargets,
                            config,
                        )?;
                    )?
                )*
                $( $check(self, config)?; )*
                $crate::validation::require_value_or_children(self)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn is_resource(&self) -> bool {
                $is_resource
            }
        }

        impl $crate::visitor::Visitable for $name {
            fn accept<V: $crate::visitor::Visitor + ?Sized>(
                &self,
                name: &str,
                index: Option<usize>,
                visitor: &mut V,
            ) -> ::std::result::Result<(), V::Error> {
                $crate::visitor::dispatch(self, name, index, visitor, |visitor| {
                    $( $crate::visitor::accept_slot(&self.$bfield, $bname, visitor)?; )*
                    $( $crate::visitor::accept_slot(&self.$ofield, $oname, visitor)?; )*
                    Ok(())
                })
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`]")]
        #[derive(Debug, Clone)]
        pub struct $builder {
            $( $bfield: $crate::__slot_ty!($bkind $bty), )*
            $( $ofield: $crate::__slot_ty!($okind $oty), )*
            validating: bool,
            model_config: $crate::config::ModelConfig,
        }

        impl ::std::default::Default for $builder {
            fn default() -> Self {
                Self {
                    $( $bfield: ::std::default::Default::default(), )*
                    $( $ofield: ::std::default::Default::default(), )*
                    validating: true,
                    model_config: $crate::config::ModelConfig::DEFAULT,
                }
            }
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $( $crate::__slot_setter! { $bkind $bfield [$($bsetter)?] $bty } )*
            $( $crate::__slot_setter! { $(#[$ometa])* $okind $ofield [$($osetter)?] $oty } )*

            /// Run validation in `build()` (the default)
            pub fn validating(mut self, validating: bool) -> Self {
                self.validating = validating;
                self
            }

            /// Configuration of the checks run by `build()`
            pub fn model_config(mut self, config: $crate::config::ModelConfig) -> Self {
                self.model_config = config;
                self
            }

            /// Snapshot the current state into an immutable element
            ///
            /// The builder stays usable; building again yields an equal element
            /// unless setters were called in between. With validation on, the
            /// new element and every element below it are checked.
            pub fn build(&self) -> $crate::Result<$name> {
                let element = $name {
                    $( $bfield: ::std::clone::Clone::clone(&self.$bfield), )*
                    $( $ofield: ::std::clone::Clone::clone(&self.$ofield), )*
                    hash_cache: ::std::default::Default::default(),
                };
                $crate::builder::finish(element, self.validating, &self.model_config)
            }
        }

        impl ::std::convert::From<&$name> for $builder {
            fn from(element: &$name) -> Self {
                Self {
                    $( $bfield: ::std::clone::Clone::clone(&element.$bfield), )*
                    $( $ofield: ::std::clone::Clone::clone(&element.$ofield), )*
                    validating: true,
                    model_config: $crate::config::ModelConfig::DEFAULT,
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_ty {
    (list $t:ty) => { ::std::vec::Vec<$t> };
    (req_list $t:ty) => { ::std::vec::Vec<$t> };
    ($kind:ident $t:ty) => { ::std::option::Option<$t> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_required {
    (req) => { true };
    (req_list) => { true };
    (req_choice) => { true };
    ($kind:ident) => { false };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_repeating {
    (list) => { true };
    (req_list) => { true };
    ($kind:ident) => { false };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ref_targets {
    () => { &[] };
    ($targets:tt) => { &$targets };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __element_info {
    ($name:literal $kind:ident $t:ty $(, $targets:tt)?) => {
        $crate::model_support::ElementInfo {
            name: $name,
            type_name: <$t as $crate::element::FhirType>::TYPE_NAME,
            required: $crate::__slot_required!($kind),
            repeating: $crate::__slot_repeating!($kind),
            choice_types: <$t as $crate::element::FhirType>::CHOICE_TYPES,
            reference_types: $crate::__ref_targets!($($targets)?),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_validate {
    (req, $value:expr, $name:literal) => {
        $crate::validation::require_non_null(&$value, $name)?;
    };
    (req_choice, $value:expr, $name:literal) => {
        $crate::validation::require_choice_element(&$value, $name)?;
    };
    (req_list, $value:expr, $name:literal) => {
        $crate::validation::check_non_empty_list(&$value, $name)?;
    };
    ($kind:ident, $value:expr, $name:literal) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_getter {
    ($(#[$m:meta])* list $f:ident $t:ty) => {
        $(#[$m])*
        pub fn $f(&self) -> &[$t] {
            &self.$f
        }
    };
    ($(#[$m:meta])* req_list $f:ident $t:ty) => {
        $crate::__slot_getter! { $(#[$m])* list $f $t }
    };
    ($(#[$m:meta])* $kind:ident $f:ident $t:ty) => {
        $(#[$m])*
        pub fn $f(&self) -> Option<&$t> {
            self.$f.as_ref()
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __slot_setter {
    ($(#[$m:meta])* list $f:ident [$set:ident] $t:ty) => {
        $(#[$m])*
        pub fn $f(mut self, values: impl IntoIterator<Item = $t>) -> Self {
            self.$f.extend(values);
            self
        }

        #[doc = concat!("Replace every `", stringify!($f), "` value")]
        pub fn $set(mut self, values: impl IntoIterator<Item = $t>) -> Self {
            self.$f = values.into_iter().collect();
            self
        }
    };
    ($(#[$m:meta])* req_list $f:ident [$set:ident] $t:ty) => {
        $crate::__slot_setter! { $(#[$m])* list $f [$set] $t }
    };
    ($(#[$m:meta])* $kind:ident $f:ident [] $t:ty) => {
        $(#[$m])*
        pub fn $f(mut self, value: impl $crate::builder::IntoSlot<$t>) -> Self {
            self.$f = $crate::builder::IntoSlot::into_slot(value);
            self
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_has_extensions {
    ($name:ident) => {
        impl $crate::element::HasExtensions for $name {
            fn extension(&self) -> &[$crate::types::Extension] {
                &self.extension
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_has_modifier_extensions {
    ($name:ident) => {
        impl $crate::element::HasModifierExtensions for $name {
            fn modifier_extension(&self) -> &[$crate::types::Extension] {
                &self.modifier_extension
            }
        }
    };
}

/// Declare a primitive type: optional value plus `id` and extensions
///
/// `check` validates the lexical form of a present value.
#[macro_export]
macro_rules! fhir_primitive {
    (
        $(#[$meta:meta])*
        $name:ident => $builder:ident ($type_name:literal, $vty:ty) check $check:path;
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            id: Option<String>,
            extension: Vec<$crate::types::Extension>,
            value: Option<$vty>,
            hash_cache: $crate::element::HashCache,
        }

        impl $name {
            /// Primitive holding `value`
            ///
            /// The value is checked when an element holding it is built, or
            /// with `validate()`.
            pub fn of(value: impl Into<$vty>) -> Self {
                Self {
                    id: None,
                    extension: Vec::new(),
                    value: Some(value.into()),
                    hash_cache: ::std::default::Default::default(),
                }
            }

            pub fn value(&self) -> Option<&$vty> {
                self.value.as_ref()
            }

            pub fn builder() -> $builder {
                $builder::new()
            }

            pub fn to_builder(&self) -> $builder {
                $builder::from(self)
            }

            pub fn hash_code(&self) -> u64 {
                self.hash_cache.get_or_compute(|| {
                    let mut hasher = ::std::collections::hash_map::DefaultHasher::new();
                    ::std::hash::Hash::hash($type_name, &mut hasher);
                    ::std::hash::Hash::hash(&self.id, &mut hasher);
                    ::std::hash::Hash::hash(&self.extension, &mut hasher);
                    ::std::hash::Hash::hash(&self.value, &mut hasher);
                    ::std::hash::Hasher::finish(&hasher)
                })
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash_code());
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                if self.id.is_none() && self.extension.is_empty() {
                    if let Some(value) = &self.value {
                        return write!(f, "{}({:?})", $type_name, value);
                    }
                }
                let mut out = f.debug_struct($type_name);
                if let Some(id) = &self.id {
                    out.field("id", id);
                }
                if !self.extension.is_empty() {
                    out.field("extension", &self.extension);
                }
                if let Some(value) = &self.value {
                    out.field("value", value);
                }
                out.finish()
            }
        }

        impl $crate::element::HasId for $name {
            fn id(&self) -> Option<&str> {
                self.id.as_deref()
            }
        }

        $crate::__fhir_has_extensions!($name);

        impl $crate::element::FhirType for $name {
            const TYPE_NAME: &'static str = $type_name;
            const ELEMENTS: &'static [$crate::model_support::ElementInfo] = &[
                $crate::__element_info!("id" opt String),
                $crate::__element_info!("extension" list $crate::types::Extension),
            ];
        }

        impl $crate::element::ElementNode for $name {
            fn type_name(&self) -> &'static str {
                $type_name
            }

            fn has_children(&self) -> bool {
                self.id.is_some() || !self.extension.is_empty()
            }

            fn has_value(&self) -> bool {
                self.value.is_some()
            }

            fn primitive_value(&self) -> Option<String> {
                self.value.as_ref().map(|value| value.to_string())
            }

            fn validate_with(&self, config: &$crate::config::ModelConfig) -> $crate::Result<()> {
                $crate::validation::check_string_slot(
                    &self.id,
                    "id",
                    $crate::validation::check_string,
                    config,
                )?;
                $crate::element::ElementNode::check_value(self, $type_name, config)?;
                $crate::validation::check_values(&self.extension, "extension", config)?;
                $crate::validation::require_value_or_children(self)
            }

            fn check_value(
                &self,
                element: &str,
                config: &$crate::config::ModelConfig,
            ) -> $crate::Result<()> {
                match &self.value {
                    Some(value) => $check(value)
                        .and_then(|()| $crate::validation::check_text(value, config))
                        .map_err(|message| $crate::Error::InvalidValue {
                            element: element.to_string(),
                            message,
                        }),
                    None => Ok(()),
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::visitor::Visitable for $name {
            fn accept<V: $crate::visitor::Visitor + ?Sized>(
                &self,
                name: &str,
                index: Option<usize>,
                visitor: &mut V,
            ) -> ::std::result::Result<(), V::Error> {
                $crate::visitor::dispatch(self, name, index, visitor, |visitor| {
                    $crate::visitor::accept_slot(&self.id, "id", visitor)?;
                    $crate::visitor::accept_slot(&self.extension, "extension", visitor)
                })
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`]")]
        #[derive(Debug, Clone)]
        pub struct $builder {
            id: Option<String>,
            extension: Vec<$crate::types::Extension>,
            value: Option<$vty>,
            validating: bool,
            model_config: $crate::config::ModelConfig,
        }

        impl ::std::default::Default for $builder {
            fn default() -> Self {
                Self {
                    id: None,
                    extension: Vec::new(),
                    value: None,
                    validating: true,
                    model_config: $crate::config::ModelConfig::DEFAULT,
                }
            }
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $crate::__slot_setter! { opt id [] String }
            $crate::__slot_setter! { list extension [set_extension] $crate::types::Extension }

            pub fn value(mut self, value: impl Into<$vty>) -> Self {
                self.value = Some(value.into());
                self
            }

            pub fn clear_value(mut self) -> Self {
                self.value = None;
                self
            }

            pub fn validating(mut self, validating: bool) -> Self {
                self.validating = validating;
                self
            }

            pub fn model_config(mut self, config: $crate::config::ModelConfig) -> Self {
                self.model_config = config;
                self
            }

            pub fn build(&self) -> $crate::Result<$name> {
                let element = $name {
                    id: self.id.clone(),
                    extension: self.extension.clone(),
                    value: self.value.clone(),
                    hash_cache: ::std::default::Default::default(),
                };
                $crate::builder::finish(element, self.validating, &self.model_config)
            }
        }

        impl ::std::convert::From<&$name> for $builder {
            fn from(element: &$name) -> Self {
                Self {
                    id: element.id.clone(),
                    extension: element.extension.clone(),
                    value: element.value.clone(),
                    validating: true,
                    model_config: $crate::config::ModelConfig::DEFAULT,
                }
            }
        }
    };
}

/// Declare a closed set of codes
#[macro_export]
macro_rules! fhir_code {
    (
        $(#[$meta:meta])*
        $name:ident ($value_set:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant, )*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )*
                    other => Err($crate::Error::InvalidArgument {
                        element: $value_set.to_string(),
                        message: format!("unknown code '{other}'"),
                    }),
                }
            }
        }

        impl $crate::element::FhirType for $name {
            const TYPE_NAME: &'static str = "code";
        }

        impl $crate::element::ElementNode for $name {
            fn type_name(&self) -> &'static str {
                "code"
            }

            fn has_children(&self) -> bool {
                false
            }

            fn has_value(&self) -> bool {
                true
            }

            fn primitive_value(&self) -> Option<String> {
                Some(self.as_str().to_string())
            }

            fn validate_with(&self, _config: &$crate::config::ModelConfig) -> $crate::Result<()> {
                Ok(())
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::visitor::Visitable for $name {
            fn accept<V: $crate::visitor::Visitor + ?Sized>(
                &self,
                name: &str,
                index: Option<usize>,
                visitor: &mut V,
            ) -> ::std::result::Result<(), V::Error> {
                $crate::visitor::dispatch(self, name, index, visitor, |_| Ok(()))
            }
        }
    };
}

/// Declare a choice element as a tagged union of its alternatives
///
/// Each alternative converts into the union with `From`, and the union can be
/// taken out of a dynamic [`DataValue`](crate::types::DataValue) with
/// `TryFrom`, which fails with `InvalidChoice` for undeclared types.
#[macro_export]
macro_rules! fhir_choice {
    (
        $(#[$meta:meta])*
        $name:ident ($element:literal) {
            $( $variant:ident ($vty:ty) ),* $(,)?
        }
    ) => {
        $crate::__fhir_union! {
            $(#[$meta])*
            $name ("Element") {
                $( $variant ($vty) ),*
            }
        }

        impl ::std::convert::TryFrom<$crate::types::DataValue> for $name {
            type Error = $crate::Error;

            fn try_from(
                value: $crate::types::DataValue,
            ) -> ::std::result::Result<Self, Self::Error> {
                match value {
                    $( $crate::types::DataValue::$variant(value) => Ok($name::$variant(value)), )*
                    #[allow(unreachable_patterns)]
                    other => Err($crate::validation::invalid_choice(
                        $element,
                        $crate::element::ElementNode::type_name(&other),
                        <$name as $crate::element::FhirType>::CHOICE_TYPES,
                    )),
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __fhir_union {
    (
        $(#[$meta:meta])*
        $name:ident ($type_name:literal) {
            $( $variant:ident ($vty:ty) ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant($vty), )*
        }

        impl $name {
            /// The held value, if it is a `T`
            pub fn get<T: 'static>(&self) -> Option<&T> {
                $crate::element::ElementNode::as_any(self).downcast_ref()
            }
        }

        impl $crate::element::FhirType for $name {
            const TYPE_NAME: &'static str = $type_name;
            const CHOICE_TYPES: &'static [&'static str] =
                &[$( <$vty as $crate::element::FhirType>::TYPE_NAME ),*];
        }

        impl $crate::element::ElementNode for $name {
            fn type_name(&self) -> &'static str {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::type_name(value), )*
                }
            }

            fn has_children(&self) -> bool {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::has_children(value), )*
                }
            }

            fn has_value(&self) -> bool {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::has_value(value), )*
                }
            }

            fn primitive_value(&self) -> Option<String> {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::primitive_value(value), )*
                }
            }

            fn validate_with(&self, config: &$crate::config::ModelConfig) -> $crate::Result<()> {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::validate_with(value, config), )*
                }
            }

            fn check_value(
                &self,
                element: &str,
                config: &$crate::config::ModelConfig,
            ) -> $crate::Result<()> {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::check_value(value, element, config), )*
                }
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::as_any(value), )*
                }
            }

            fn is_resource(&self) -> bool {
                match self {
                    $( $name::$variant(value) => $crate::element::ElementNode::is_resource(value), )*
                }
            }
        }

        impl $crate::visitor::Visitable for $name {
            fn accept<V: $crate::visitor::Visitor + ?Sized>(
                &self,
                name: &str,
                index: Option<usize>,
                visitor: &mut V,
            ) -> ::std::result::Result<(), V::Error> {
                match self {
                    $( $name::$variant(value) => $crate::visitor::Visitable::accept(value, name, index, visitor), )*
                }
            }
        }

        $(
            impl ::std::convert::From<$vty> for $name {
                fn from(value: $vty) -> Self {
                    $name::$variant(value)
                }
            }

            impl $crate::builder::IntoSlot<$name> for $vty {
                fn into_slot(self) -> Option<$name> {
                    Some($name::$variant(self))
                }
            }
        )*
    };
}
